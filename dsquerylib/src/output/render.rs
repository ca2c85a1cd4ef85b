//! Turning result records into text.
//!
//! Rendered rows are the selected values joined by `", "`. Values are not
//! quoted or escaped, so a value containing `", "` is indistinguishable from
//! two values.

use crate::data::record::Record;
use crate::Result;

/// Separator between values of a rendered row.
pub const RENDER_SEPARATOR: &str = ", ";

/// Render one record as its values joined by `", "`.
pub fn render_row(record: &Record) -> String {
    record.values().collect::<Vec<_>>().join(RENDER_SEPARATOR)
}

/// Render every record, preserving order.
pub fn render_rows(records: &[Record]) -> Vec<String> {
    records.iter().map(render_row).collect()
}

/// Render records as a pretty-printed JSON array of objects.
///
/// Object keys keep the record's column order.
pub fn render_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_joins_with_comma_space() {
        let rec = Record::from_row(["TITLE", "PROVIDER", "REV"], ["the matrix", "warner bros", "4.00"]);
        assert_eq!(render_row(&rec), "the matrix, warner bros, 4.00");
    }

    #[test]
    fn test_render_row_keeps_empty_values() {
        let rec = Record::from_row(["A", "B", "C"], ["", "2"]);
        assert_eq!(render_row(&rec), ", 2, ");
    }

    #[test]
    fn test_render_empty_record() {
        assert_eq!(render_row(&Record::new()), "");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let rec = Record::from_row(["TITLE"], ["crouching tiger, hidden dragon"]);
        assert_eq!(render_row(&rec), "crouching tiger, hidden dragon");
    }

    #[test]
    fn test_render_json() {
        let rows = vec![
            Record::from_row(["TITLE", "REV"], ["the matrix", "4.00"]),
            Record::from_row(["TITLE", "REV"], ["unbreakable", "6.00"]),
        ];
        let json = render_json(&rows).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["TITLE"], "the matrix");
        assert_eq!(parsed[1]["REV"], "6.00");
        assert!(json.find("TITLE").unwrap() < json.find("REV").unwrap());
    }
}
