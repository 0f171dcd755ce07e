//! Accumulating JSON array formatter.
//!
//! Every `format` call appends the movie to the formatter's entries and
//! hands the movie the whole array so far, so the N-th movie formatted
//! prints an array of N entries. `collect_and_print` writes the final array
//! once a batch is done.

use std::io::Write;

use super::json_text::to_json_text;
use crate::error::Result;
use crate::traits::MovieFormatter;
use crate::types::{Movie, MovieRecord};

/// Stateful formatter that grows a JSON array across calls.
///
/// Create one per batch. The entries are appended before the text is
/// encoded, so a later failure (encoding or writing) leaves the entry in
/// place.
#[derive(Debug, Default, Clone)]
pub struct JsonArrayFormatter {
    entries: Vec<MovieRecord>,
}

impl JsonArrayFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of movies accumulated so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the full accumulated array to `sink`, without a trailing newline.
    ///
    /// The formatter keeps no handle on the sinks its movies were printed
    /// on, so callers pass the same sink the batch used. Does nothing if no
    /// movie has been formatted yet.
    pub fn collect_and_print(&self, sink: &mut dyn Write) -> Result<()> {
        if self.entries.is_empty() {
            tracing::debug!("no movies accumulated, nothing to collect");
            return Ok(());
        }

        let text = to_json_text(&self.entries)?;
        sink.write_all(text.as_bytes())?;
        tracing::debug!("collected {} movie(s)", self.entries.len());
        Ok(())
    }
}

impl MovieFormatter for JsonArrayFormatter {
    fn format(&mut self, movie: &mut Movie, title: &str, director: &str) -> Result<()> {
        self.entries.push(MovieRecord::new(title, director));
        tracing::trace!("accumulated '{}' ({} total)", title, self.entries.len());

        let mut text = to_json_text(&self.entries)?;
        text.push('\n');
        movie.set_format(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(formatter: &mut JsonArrayFormatter, movie: &mut Movie) -> String {
        let mut sink = Vec::new();
        formatter.format_and_print_on(movie, &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_output_grows_with_each_call() {
        let mut formatter = JsonArrayFormatter::new();
        let mut first = Movie::new("Lost Highway", "David Lynch");
        let mut second = Movie::new("Mulholland Dr", "David Lynch");

        assert_eq!(
            print(&mut formatter, &mut first),
            "[{\"title\": \"Lost Highway\", \"director\": \"David Lynch\"}]\n"
        );
        assert_eq!(
            print(&mut formatter, &mut second),
            "[{\"title\": \"Lost Highway\", \"director\": \"David Lynch\"}, \
             {\"title\": \"Mulholland Dr\", \"director\": \"David Lynch\"}]\n"
        );
        assert_eq!(formatter.len(), 2);
    }

    #[test]
    fn test_repeated_format_accumulates_duplicates() {
        let mut formatter = JsonArrayFormatter::new();
        let mut movie = Movie::new("Star Wars", "George Lucas");

        for _ in 0..3 {
            movie.format_with(&mut formatter).unwrap();
        }

        assert_eq!(formatter.len(), 3);
        assert_eq!(print(&mut formatter, &mut movie).matches("Star Wars").count(), 4);
    }

    #[test]
    fn test_collect_and_print_empty_is_noop() {
        let formatter = JsonArrayFormatter::new();
        let mut sink = Vec::new();

        formatter.collect_and_print(&mut sink).unwrap();

        assert!(formatter.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_collect_and_print_has_no_trailing_newline() {
        let mut formatter = JsonArrayFormatter::new();
        let mut movie = Movie::new("Naked Lunch", "David Cronenberg");
        movie.format_with(&mut formatter).unwrap();
        let mut sink = Vec::new();

        formatter.collect_and_print(&mut sink).unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "[{\"title\": \"Naked Lunch\", \"director\": \"David Cronenberg\"}]"
        );
    }

    #[test]
    fn test_collect_into_batch_sink_repeats_last_array() {
        let mut formatter = JsonArrayFormatter::new();
        let mut sink = Vec::new();
        for (title, director) in [("Lost Highway", "David Lynch"), ("Dune", "David Lynch")] {
            formatter
                .format_and_print_on(&mut Movie::new(title, director), &mut sink)
                .unwrap();
        }

        formatter.collect_and_print(&mut sink).unwrap();

        let output = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn test_entry_kept_when_write_fails() {
        struct ClosedSink;
        impl Write for ClosedSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut formatter = JsonArrayFormatter::new();
        let mut movie = Movie::new("Wild At Heart", "David Lynch");

        let result = formatter.format_and_print_on(&mut movie, &mut ClosedSink);

        assert!(result.is_err());
        assert_eq!(formatter.len(), 1);
    }
}
