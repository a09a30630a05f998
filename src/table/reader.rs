//! Input table reading.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder};

use crate::error_handling::InputError;

/// Converts the configured delimiter into the byte the CSV layer expects.
///
/// # Errors
///
/// Returns `InputError::InvalidDelimiter` for non-ASCII characters.
pub fn delimiter_byte(delimiter: char) -> Result<u8, InputError> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(InputError::InvalidDelimiter(delimiter.to_string()))
    }
}

/// Opens the input table.
///
/// The first row is the header. Rows may have fewer or more fields than
/// the header; missing cells read as empty.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if `path` does not exist, or
/// `InputError::Csv` if it cannot be opened.
pub fn open_input(path: &Path, delimiter: u8) -> Result<Reader<File>, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }
    let reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    Ok(reader)
}
