//! Delimited table input and output.
//!
//! The input is a CSV file with a header row and a URL column. The output
//! keeps every named input column and adds (or overwrites) the SPF column.

mod layout;
mod reader;
mod writer;

// Re-export public API
pub use layout::{is_unnamed_column, ColumnLayout, SpfColumn};
pub use reader::{delimiter_byte, open_input};
pub use writer::SpfWriter;
