//! Datastore file parsing.
//!
//! A datastore file is UTF-8 text with one record per line and fields
//! separated by `|`. Fields may be wrapped in double quotes, which are
//! stripped. The first line is the header naming the columns.
//!
//! ```text
//! "STB"|"TITLE"|"PROVIDER"|"DATE"|"REV"|"VIEW_TIME"
//! "stb1"|"the matrix"|"warner bros"|"2014-04-01"|"4.00"|"1:30"
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::DsqueryError;
use crate::Result;

use super::record::Record;

/// Field separator in datastore files.
pub const FIELD_DELIMITER: u8 = b'|';

/// Read and parse a datastore file from disk.
pub fn read_datastore(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DsqueryError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let records = parse_datastore(file, path)?;
    log::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse datastore content from any reader.
///
/// `origin` is only used to label errors and warnings.
///
/// Rows shorter than the header are padded with empty values and rows
/// longer than the header lose their trailing values. Both cases are
/// logged as warnings.
pub fn parse_datastore<R: Read>(reader: R, origin: &Path) -> Result<Vec<Record>> {
    let parse_error = |source: csv::Error| DsqueryError::Parse {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = reader.headers().map_err(parse_error)?.clone();
    if header.is_empty() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(parse_error)?;
        if is_blank(&row, header.len()) {
            continue;
        }
        if row.len() != header.len() {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            log::warn!(
                "{}:{}: expected {} fields, found {}",
                origin.display(),
                line,
                header.len(),
                row.len()
            );
        }
        records.push(Record::from_row(header.iter(), row.iter()));
    }

    Ok(records)
}

/// A line holding nothing but a single empty field (such as a stray quote)
/// in a file with several columns. In a one-column file that same line is
/// a real empty value.
fn is_blank(row: &StringRecord, columns: usize) -> bool {
    columns > 1 && row.len() == 1 && row.get(0).is_some_and(str::is_empty)
}
