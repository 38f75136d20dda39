use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;

use rebin_core::{Reading, ReadingSource, RebinError, sort_descending};

/// Timestamp column emitted by the sensor firmware.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "deviceTime_unix";

/// Source adapter over a local CSV table with a numeric timestamp column.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    timestamp_column: String,
}

impl CsvSource {
    /// Adapt the CSV table at `path`, expecting timestamps under
    /// [`DEFAULT_TIMESTAMP_COLUMN`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            timestamp_column: DEFAULT_TIMESTAMP_COLUMN.to_owned(),
        }
    }

    /// Override the timestamp column name.
    #[must_use]
    pub fn timestamp_column(mut self, column: impl Into<String>) -> Self {
        self.timestamp_column = column.into();
        self
    }
}

#[async_trait]
impl ReadingSource for CsvSource {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn load(&self, value_column: &str) -> Result<Vec<Reading>, RebinError> {
        let file = File::open(&self.path).map_err(|e| {
            RebinError::source("csv", format!("{}: {e}", self.path.display()))
        })?;
        parse_readings(file, &self.timestamp_column, value_column)
    }
}

/// Parse a CSV table into readings, sorted descending by timestamp.
///
/// Cell policy, matching the upstream loader:
/// - an empty value cell is an invalid sample (NaN), left for the binner's
///   coerce-to-zero policy;
/// - a non-numeric value cell is malformed input and rejected;
/// - a non-numeric timestamp cell is rejected (the whole table is useless
///   without a time axis).
///
/// # Errors
/// - `RebinError::MissingColumn` when either column is absent from the header.
/// - `RebinError::Timestamp` for an unparseable timestamp cell.
/// - `RebinError::Data` for an unparseable value cell or a ragged row.
pub fn parse_readings<R: Read>(
    reader: R,
    timestamp_column: &str,
    value_column: &str,
) -> Result<Vec<Reading>, RebinError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| RebinError::Data(format!("bad CSV header: {e}")))?;

    let ts_idx = column_index(headers, timestamp_column)?;
    let value_idx = column_index(headers, value_column)?;

    let mut readings = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| RebinError::Data(format!("bad CSV record: {e}")))?;
        let raw_ts = record.get(ts_idx).unwrap_or("");
        let ts: f64 = raw_ts.trim().parse().map_err(|_| RebinError::Timestamp {
            raw: raw_ts.to_owned(),
        })?;
        let raw_value = record.get(value_idx).unwrap_or("").trim();
        let value = if raw_value.is_empty() {
            f64::NAN
        } else {
            raw_value.parse().map_err(|_| {
                RebinError::Data(format!(
                    "unparseable value {raw_value:?} in column {value_column:?}"
                ))
            })?
        };
        readings.push(Reading::new(ts, value));
    }

    sort_descending(&mut readings);
    Ok(readings)
}

pub(crate) fn column_index(
    headers: &csv::StringRecord,
    column: &str,
) -> Result<usize, RebinError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| RebinError::missing_column(column))
}
