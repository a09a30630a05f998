//! Output table writing.

use std::fs::File;
use std::path::Path;

use csv::{StringRecord, Writer, WriterBuilder};

use super::layout::ColumnLayout;
use crate::error_handling::InputError;

/// Writes enriched rows, flushing after each one.
///
/// Flushing per row keeps the file a valid table up to the last completed
/// row if the run is interrupted.
pub struct SpfWriter {
    writer: Writer<File>,
    layout: ColumnLayout,
    rows_written: usize,
}

impl SpfWriter {
    /// Creates the output file and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Csv` if the file cannot be created or written.
    pub fn create(path: &Path, delimiter: u8, layout: ColumnLayout) -> Result<Self, InputError> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(false)
            .from_path(path)?;
        writer.write_record(layout.output_headers())?;
        writer.flush()?;
        Ok(Self {
            writer,
            layout,
            rows_written: 0,
        })
    }

    /// Writes one input record with its rendered SPF result.
    pub fn write_row(&mut self, record: &StringRecord, spf: &str) -> Result<(), InputError> {
        self.writer
            .write_record(self.layout.output_row(record, spf))?;
        self.writer.flush()?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes and closes the file.
    pub fn finish(mut self) -> Result<usize, InputError> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }
}
