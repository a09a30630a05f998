//! Column selection for the output table.

use csv::StringRecord;

use crate::config::UNNAMED_COLUMN_PREFIX;
use crate::error_handling::InputError;

/// Returns `true` for headers that name no real column.
///
/// Spreadsheet exports with a trailing separator produce empty headers; tools
/// that round-trip such files label them `Unnamed: N`.
pub fn is_unnamed_column(header: &str) -> bool {
    let header = header.trim();
    header.is_empty() || header.starts_with(UNNAMED_COLUMN_PREFIX)
}

/// Where the SPF result goes in an output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpfColumn {
    /// Replace the value of an existing output column.
    Overwrite(usize),
    /// Add a new last column.
    Append,
}

/// Maps input records onto output rows.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    kept: Vec<usize>,
    url_index: usize,
    spf: SpfColumn,
    output_headers: Vec<String>,
}

impl ColumnLayout {
    /// Builds the layout from the input header row.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MissingColumn` if no named column is called
    /// `url_column`.
    pub fn from_headers(
        headers: &StringRecord,
        url_column: &str,
        spf_column: &str,
    ) -> Result<Self, InputError> {
        let kept: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !is_unnamed_column(h))
            .map(|(idx, _)| idx)
            .collect();

        let dropped = headers.len() - kept.len();
        if dropped > 0 {
            log::debug!("Dropping {dropped} unnamed column(s)");
        }

        let url_index = kept
            .iter()
            .copied()
            .find(|&idx| headers.get(idx) == Some(url_column))
            .ok_or_else(|| InputError::MissingColumn {
                column: url_column.to_string(),
            })?;

        let mut output_headers: Vec<String> = kept
            .iter()
            .filter_map(|&idx| headers.get(idx))
            .map(String::from)
            .collect();

        let spf = match output_headers.iter().position(|h| h == spf_column) {
            Some(pos) => SpfColumn::Overwrite(pos),
            None => {
                output_headers.push(spf_column.to_string());
                SpfColumn::Append
            }
        };

        Ok(Self {
            kept,
            url_index,
            spf,
            output_headers,
        })
    }

    /// Header row of the output table.
    pub fn output_headers(&self) -> &[String] {
        &self.output_headers
    }

    /// Placement of the SPF column.
    pub fn spf_column(&self) -> SpfColumn {
        self.spf
    }

    /// URL cell of a record; short rows yield an empty string.
    pub fn url_of<'r>(&self, record: &'r StringRecord) -> &'r str {
        record.get(self.url_index).unwrap_or("")
    }

    /// Builds the output row for a record and its rendered outcome.
    ///
    /// Missing trailing cells are written as empty strings so every output
    /// row has as many fields as the header.
    pub fn output_row<'r>(&self, record: &'r StringRecord, spf: &'r str) -> Vec<&'r str> {
        let mut row: Vec<&str> = self
            .kept
            .iter()
            .map(|&idx| record.get(idx).unwrap_or(""))
            .collect();
        match self.spf {
            SpfColumn::Overwrite(pos) => row[pos] = spf,
            SpfColumn::Append => row.push(spf),
        }
        row
    }
}
