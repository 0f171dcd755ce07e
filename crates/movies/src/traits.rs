//! The formatting strategy trait.
//!
//! A formatter is told a movie's field values, computes text, and hands the
//! text back to the movie with [`Movie::set_format`]. Whether it writes
//! anywhere is up to the caller.

use std::io::Write;

use crate::error::Result;
use crate::types::Movie;

/// Strategy for turning a movie's fields into text.
///
/// ## Design Note
/// - The movie calls the formatter (through [`Movie::format_with`]), never
///   the other way round, so formatters get the field values as arguments
///   instead of reading them off the movie
/// - Text goes back into the movie, not onto a sink. Printing is a second
///   step, which lets a stateful formatter rebuild a whole batch's text on
///   every call
/// - Methods take `&mut self` so accumulating formatters need no interior
///   mutability; stateless ones ignore it
pub trait MovieFormatter {
    /// Compute text for `title` and `director` and store it in `movie`.
    ///
    /// Empty strings are formatted like any other value.
    ///
    /// # Arguments
    /// * `movie` - The movie receiving the text via `set_format`
    /// * `title` - The movie's title, as stored
    /// * `director` - The movie's director, as stored
    ///
    /// # Returns
    /// * `Ok(())` - The text is in the movie's formatted-text slot
    /// * `Err` - Encoding failed; the slot keeps its previous text
    fn format(&mut self, movie: &mut Movie, title: &str, director: &str) -> Result<()>;

    /// Format `movie` with this formatter, then print it on `sink`.
    ///
    /// # Arguments
    /// * `movie` - The movie to format and print
    /// * `sink` - Where the formatted text is written
    ///
    /// # Returns
    /// * `Ok(())` - The text was written in full
    /// * `Err` - Formatting or writing failed. Formatter state updated by
    ///   `format` is not rolled back
    fn format_and_print_on(&mut self, movie: &mut Movie, sink: &mut dyn Write) -> Result<()> {
        movie.format_with(self)?.print_on(sink)?;
        Ok(())
    }
}
