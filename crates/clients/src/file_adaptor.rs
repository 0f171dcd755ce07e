//! Client writing to a file path.
//!
//! The file is opened on every `append` and closed before `append`
//! returns, whether or not the write succeeded.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::traits::MoviesClient;
use movies::{Movie, MovieError, MovieFormatter, Result};

/// How `append` treats what is already in the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileMode {
    /// Open for appending, then truncate: the file ends up holding only the
    /// most recently appended movie.
    #[default]
    Overwrite,
    /// Open for appending and keep existing contents.
    Append,
}

/// Appends movies to the file at `path`.
pub struct FileAdaptor<'a> {
    path: PathBuf,
    mode: FileMode,
    formatter: &'a mut dyn MovieFormatter,
}

impl<'a> FileAdaptor<'a> {
    /// Create an adaptor in [`FileMode::Overwrite`].
    pub fn new(path: impl AsRef<Path>, formatter: &'a mut dyn MovieFormatter) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            mode: FileMode::default(),
            formatter,
        }
    }

    /// Keep earlier contents instead of truncating (builder pattern).
    pub fn appending(mut self) -> Self {
        self.mode = FileMode::Append;
        self
    }

    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }
}

impl MoviesClient for FileAdaptor<'_> {
    fn append(&mut self, movie: &mut Movie) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| MovieError::FileOpen {
                path: self.path.clone(),
                source,
            })?;

        if self.mode == FileMode::Overwrite {
            file.set_len(0)?;
        }
        tracing::debug!("Writing movie to {} ({:?})", self.path.display(), self.mode);

        movie.format_with(&mut *self.formatter)?.print_on(&mut file)?;
        Ok(())
    }
}
