//! rebin-csv
//!
//! Local CSV adapter for the rebin ecosystem: parses sensor tables into
//! `Reading`s for the binner, and serializes/deserializes binned series with
//! the textual `nan` marker for empty bins.
#![warn(missing_docs)]

/// Binned-series CSV serialization and the artifact naming convention.
pub mod binned;
/// The `CsvSource` adapter and raw-table parsing.
pub mod source;

pub use binned::{output_filename, read_binned, read_binned_file, write_binned, write_binned_file};
pub use source::{CsvSource, DEFAULT_TIMESTAMP_COLUMN, parse_readings};
