//! Result-set serialization: plain text blocks or JSON.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::{self, Write};

use crate::solver::Square;

/// Write squares as text: one row per line, with a blank line after each square.
///
/// # Errors
///
/// Propagates any `io::Error` from the underlying writer.
pub fn write_text<W: Write>(w: &mut W, squares: &[Square]) -> io::Result<()> {
    for square in squares {
        writeln!(w, "{square}")?;
        writeln!(w)?;
    }
    Ok(())
}

/// Write squares as one pretty-printed JSON object, keyed by 1-based square
/// id; each square is an object mapping 0-based row indices to row words:
///
/// ```json
/// {
///   "1": {
///     "0": "card",
///     "1": "area"
///   }
/// }
/// ```
///
/// Square ids follow discovery order.
///
/// # Errors
///
/// Propagates any `io::Error` from the underlying writer.
pub fn write_json<W: Write>(w: &mut W, squares: &[Square]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, &SquaresDoc(squares))?;
    writeln!(w)?;
    Ok(())
}

/// The whole result set as a JSON object: square id ("1", "2", ...) to square.
struct SquaresDoc<'a>(&'a [Square]);

impl Serialize for SquaresDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (idx, square) in self.0.iter().enumerate() {
            map.serialize_entry(&(idx + 1).to_string(), &RowsDoc(square))?;
        }
        map.end()
    }
}

/// One square as a JSON object: row index ("0", "1", ...) to row word.
struct RowsDoc<'a>(&'a Square);

impl Serialize for RowsDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.rows.len()))?;
        for (idx, row) in self.0.rows.iter().enumerate() {
            map.serialize_entry(&idx.to_string(), row)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_squares() -> Vec<Square> {
        vec![
            Square { rows: vec!["ab".to_string(), "bc".to_string()] },
            Square { rows: vec!["aa".to_string(), "aa".to_string()] },
        ]
    }

    #[test]
    fn test_text_format_separates_squares_with_blank_lines() {
        let mut buf = Vec::new();
        write_text(&mut buf, &sample_squares()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "ab\nbc\n\naa\naa\n\n");
    }

    #[test]
    fn test_text_format_empty_result_set_writes_nothing() {
        let mut buf = Vec::new();
        write_text(&mut buf, &[]).unwrap();

        assert!(buf.is_empty());
    }

    #[test]
    fn test_json_format_keys_squares_and_rows_by_index() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_squares()).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["1"]["0"], "ab");
        assert_eq!(parsed["1"]["1"], "bc");
        assert_eq!(parsed["2"]["0"], "aa");
        assert_eq!(parsed["2"]["1"], "aa");

        let ids: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_json_format_empty_result_set_is_empty_object() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[]).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "{}\n");
    }
}
