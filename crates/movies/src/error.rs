//! Error types shared by the movie crates.
//!
//! Nothing in this workspace validates titles or directors, and a query that
//! matches no movie is not an error. What can fail is writing: opening a file
//! destination, writing bytes to a sink, or encoding JSON.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while formatting or printing movies.
///
/// `#[derive(Error)]` from thiserror implements `std::error::Error` and
/// `Display` from the `#[error(...)]` attributes. The `#[from]` variants let
/// `?` convert io and serde_json errors without a `map_err`.
///
/// There is no retry and no rollback: a failed write leaves a stateful
/// formatter exactly as `format` left it.
#[derive(Error, Debug)]
pub enum MovieError {
    /// A file destination could not be opened or created
    ///
    /// Carries the path, so the message names the file (e.g. when the
    /// parent directory does not exist).
    #[error("Failed to open {path}: {source}", path = .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to a sink (or truncating a file) failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A formatter could not encode its JSON text
    #[error("Failed to encode movie as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience type alias for Results in the movie crates
///
/// Shared by `lister` and `clients`, whose actions and adaptors return the
/// same error type.
pub type Result<T> = std::result::Result<T, MovieError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_open_message_names_path() {
        let err = MovieError::FileOpen {
            path: PathBuf::from("/nowhere/movies.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };

        let message = err.to_string();
        assert!(message.contains("/nowhere/movies.txt"));
        assert!(message.contains("no such directory"));
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(MovieError::Io(_))));
    }
}
