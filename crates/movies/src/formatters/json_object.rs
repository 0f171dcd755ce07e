//! One JSON object per movie.

use serde::Serialize;

use super::json_text::to_json_text;
use crate::error::Result;
use crate::traits::MovieFormatter;
use crate::types::Movie;

/// Borrowed view of the fields, serialized in title-then-director order.
#[derive(Serialize)]
struct Entry<'a> {
    title: &'a str,
    director: &'a str,
}

/// Formats a movie as `{"title": "T", "director": "D"}` followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonObjectFormatter;

impl MovieFormatter for JsonObjectFormatter {
    fn format(&mut self, movie: &mut Movie, title: &str, director: &str) -> Result<()> {
        let mut text = to_json_text(&Entry { title, director })?;
        text.push('\n');
        movie.set_format(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_object_format() {
        let mut movie = Movie::new("Mulholland Dr", "David Lynch");
        let mut sink = Vec::new();

        JsonObjectFormatter
            .format_and_print_on(&mut movie, &mut sink)
            .unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "{\"title\": \"Mulholland Dr\", \"director\": \"David Lynch\"}\n"
        );
    }

    #[test]
    fn test_json_object_is_idempotent() {
        let mut movie = Movie::new("Wild At Heart", "David Lynch");
        let mut formatter = JsonObjectFormatter;
        let mut first = Vec::new();
        let mut second = Vec::new();

        formatter.format_and_print_on(&mut movie, &mut first).unwrap();
        formatter.format_and_print_on(&mut movie, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_json_object_escapes_quotes() {
        let mut movie = Movie::new("The \"Lost\" Reel", "");
        let mut sink = Vec::new();

        JsonObjectFormatter
            .format_and_print_on(&mut movie, &mut sink)
            .unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "{\"title\": \"The \\\"Lost\\\" Reel\", \"director\": \"\"}\n"
        );
    }
}
