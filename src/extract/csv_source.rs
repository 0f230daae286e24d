use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::extract::ExtractError;
use crate::models::RawTable;

/// Reads a delimited file into an in-memory table.
///
/// The source is decoded as ISO-8859-1 before parsing. The header row is
/// required; columns come out exactly as it names them, with no type
/// coercion.
///
/// # Errors
/// Returns `ExtractError::FileAccess` when the path cannot be read and
/// `ExtractError::Parse` when the contents are not valid delimited text.
pub fn read_csv(path: &Path) -> Result<RawTable, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::FileAccess {
        path: path.display().to_string(),
        source
    })?;

    let text = decode_latin1(&bytes);

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(|source| parse_error(path, source))?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        rows.push(result.map_err(|source| parse_error(path, source))?);
    }

    Ok(RawTable::new(headers, rows))
}

// ISO-8859-1 maps every byte to the Unicode code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

fn parse_error(path: &Path, source: csv::Error) -> ExtractError {
    ExtractError::Parse {
        path: path.display().to_string(),
        source
    }
}
