use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rebin_core::{BinnedRow, RebinError};

use crate::source::column_index;

/// Serialize a binned series as two-column CSV.
///
/// Header is `unix_time,value`; an empty bin is written as the literal
/// `nan`, which is what downstream joiners and plotters look for.
///
/// # Errors
/// Returns `RebinError::Data` when the underlying writer fails.
pub fn write_binned<W: Write>(writer: W, rows: &[BinnedRow]) -> Result<(), RebinError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["unix_time", "value"])
        .map_err(|e| RebinError::Data(format!("CSV write failed: {e}")))?;
    for row in rows {
        wtr.write_record([row.unix_time.to_string(), format_value(row.value)])
            .map_err(|e| RebinError::Data(format!("CSV write failed: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| RebinError::Data(format!("CSV flush failed: {e}")))
}

/// Write a binned series to a file.
///
/// # Errors
/// `RebinError::Source` when the file cannot be created, `RebinError::Data`
/// when writing fails.
pub fn write_binned_file(path: &Path, rows: &[BinnedRow]) -> Result<(), RebinError> {
    let file = File::create(path)
        .map_err(|e| RebinError::source("csv", format!("{}: {e}", path.display())))?;
    write_binned(file, rows)
}

/// Parse a binned series previously written by [`write_binned`].
///
/// The `nan` marker (any case) reads back as NaN.
///
/// # Errors
/// `RebinError::MissingColumn` when the header lacks `unix_time` or `value`,
/// `RebinError::Data` for malformed cells.
pub fn read_binned<R: Read>(reader: R) -> Result<Vec<BinnedRow>, RebinError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| RebinError::Data(format!("bad CSV header: {e}")))?;
    let ts_idx = column_index(headers, "unix_time")?;
    let value_idx = column_index(headers, "value")?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| RebinError::Data(format!("bad CSV record: {e}")))?;
        let raw_ts = record.get(ts_idx).unwrap_or("").trim();
        let unix_time: i64 = raw_ts
            .parse()
            .map_err(|_| RebinError::Timestamp { raw: raw_ts.to_owned() })?;
        let raw_value = record.get(value_idx).unwrap_or("").trim();
        let value: f64 = raw_value
            .parse()
            .map_err(|_| RebinError::Data(format!("unparseable binned value {raw_value:?}")))?;
        rows.push(BinnedRow::new(unix_time, value));
    }
    Ok(rows)
}

/// Read a binned series from a file.
///
/// # Errors
/// `RebinError::Source` when the file is missing or unreadable, otherwise as
/// [`read_binned`].
pub fn read_binned_file(path: &Path) -> Result<Vec<BinnedRow>, RebinError> {
    let file = File::open(path)
        .map_err(|e| RebinError::source("csv", format!("{}: {e}", path.display())))?;
    read_binned(file)
}

/// Canonical artifact name: `{prefix}_data_{column}_{interval}.csv`, or
/// `data_{column}_{interval}.csv` without a location prefix. Downstream
/// joiners reassemble multi-site batches by prefix, column, and interval.
#[must_use]
pub fn output_filename(location_prefix: Option<&str>, value_column: &str, interval: i64) -> String {
    match location_prefix {
        Some(prefix) => format!("{prefix}_data_{value_column}_{interval}.csv"),
        None => format!("data_{value_column}_{interval}.csv"),
    }
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_owned()
    } else {
        format!("{value}")
    }
}
