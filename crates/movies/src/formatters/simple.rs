//! Plain-text formatter.

use crate::error::Result;
use crate::traits::MovieFormatter;
use crate::types::Movie;

/// Formats a movie as `Movie (title: T, director: D)` followed by a newline.
///
/// Stateless: formatting the same fields twice gives the same text.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleStringFormatter;

impl MovieFormatter for SimpleStringFormatter {
    fn format(&mut self, movie: &mut Movie, title: &str, director: &str) -> Result<()> {
        movie.set_format(format!("Movie (title: {title}, director: {director})\n"));
        Ok(())
    }
}
