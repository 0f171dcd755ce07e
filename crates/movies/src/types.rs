//! Core domain types: the plain movie record and the movie entity.
//!
//! A `Movie` never hands its fields out. Callers tell it what to do
//! ("if you were directed by X, run this action") and formatters are told
//! the field values when the movie asks them to format it.

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::traits::MovieFormatter;

/// The plain attributes of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
        }
    }
}

/// A movie entity: one record plus the text produced by the last formatter
/// that formatted it.
///
/// Formatting and printing are separate steps. `format_with` fills the
/// formatted-text slot, `print_on` writes whatever the slot holds. The slot
/// starts empty, so printing an unformatted movie writes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    record: MovieRecord,
    formatted: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
        Self::from_record(MovieRecord::new(title, director))
    }

    pub fn from_record(record: MovieRecord) -> Self {
        Self {
            record,
            formatted: String::new(),
        }
    }

    /// Run `action` on this movie if its director is exactly `director`.
    ///
    /// The comparison is case-sensitive. A mismatch is a silent no-op.
    /// Errors returned by `action` propagate to the caller.
    pub fn if_directed_by_do<F>(&mut self, director: &str, action: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Movie) -> Result<()>,
    {
        if self.record.director == director {
            tracing::debug!("'{}' is directed by {}", self.record.title, director);
            action(self)?;
        }
        Ok(self)
    }

    /// Run `action` on this movie if its title is exactly `title`.
    pub fn if_title_do<F>(&mut self, title: &str, action: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Movie) -> Result<()>,
    {
        if self.record.title == title {
            tracing::debug!("found movie titled '{}'", title);
            action(self)?;
        }
        Ok(self)
    }

    /// Ask `formatter` to format this movie's current field values.
    ///
    /// The formatter pushes its text back through [`Movie::set_format`].
    pub fn format_with<F>(&mut self, formatter: &mut F) -> Result<&mut Self>
    where
        F: MovieFormatter + ?Sized,
    {
        let MovieRecord { title, director } = self.record.clone();
        formatter.format(self, &title, &director)?;
        Ok(self)
    }

    /// Write the formatted-text slot verbatim to `sink`. Does not reformat.
    pub fn print_on(&self, sink: &mut dyn Write) -> Result<&Self> {
        sink.write_all(self.formatted.as_bytes())?;
        Ok(self)
    }

    /// Store text computed by a formatter. Formatters call this; nothing
    /// else should.
    pub fn set_format(&mut self, text: impl Into<String>) -> &mut Self {
        self.formatted = text.into();
        self
    }
}
