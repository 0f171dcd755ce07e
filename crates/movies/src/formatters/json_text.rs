//! JSON text in the layout used by every JSON formatter.
//!
//! `serde_json` writes compact JSON by default. The movie output uses
//! `", "` between items, `": "` after keys, and `\uXXXX` escapes for
//! anything outside printable ASCII (DEL included), e.g.
//! `{"title": "Am\u00e9lie", "director": "..."}`.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// `serde_json` formatter producing spaced separators and printable-ASCII output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // Quotes, backslashes and C0 controls never reach here; serde_json
        // escapes them itself. DEL is not in serde_json's escape table, so it
        // is escaped below with everything else outside ' '..='~'.
        if fragment.bytes().all(|b| (b' '..=b'~').contains(&b)) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Encode `value` as JSON text using [`SpacedAsciiFormatter`].
pub fn to_json_text<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    // Output is pure ASCII, so this never substitutes anything.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieRecord;

    #[test]
    fn test_object_separators() {
        let record = MovieRecord::new("Star Wars", "George Lucas");

        assert_eq!(
            to_json_text(&record).unwrap(),
            r#"{"title": "Star Wars", "director": "George Lucas"}"#
        );
    }

    #[test]
    fn test_array_separators() {
        let records = vec![MovieRecord::new("A", "B"), MovieRecord::new("C", "D")];

        assert_eq!(
            to_json_text(&records).unwrap(),
            r#"[{"title": "A", "director": "B"}, {"title": "C", "director": "D"}]"#
        );
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let record = MovieRecord::new("Amélie", "Jean-Pierre Jeunet");

        assert_eq!(
            to_json_text(&record).unwrap(),
            r#"{"title": "Am\u00e9lie", "director": "Jean-Pierre Jeunet"}"#
        );
    }

    #[test]
    fn test_del_is_escaped() {
        assert_eq!(to_json_text("a\u{7f}b").unwrap(), r#""a\u007fb""#);
    }

    #[test]
    fn test_control_chars_keep_serde_escapes() {
        assert_eq!(to_json_text("a\tb\u{1}").unwrap(), r#""a\tb\u0001""#);
    }

    #[test]
    fn test_astral_chars_use_surrogate_pairs() {
        assert_eq!(to_json_text("🎬").unwrap(), r#""\ud83c\udfac""#);
    }

    #[test]
    fn test_quotes_still_escaped() {
        assert_eq!(to_json_text(r#"say "cut""#).unwrap(), r#""say \"cut\"""#);
    }
}
