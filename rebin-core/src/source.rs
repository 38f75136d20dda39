use async_trait::async_trait;

use crate::{Reading, RebinError};

/// A tabular source of readings: the seam between adapters and the binner.
///
/// Implementations own all the messy parts — locating the table, selecting
/// the timestamp and value columns, coercing cells to numbers, and applying
/// unit conversions — so the binner only ever sees clean `Reading`s.
///
/// Postcondition of `load`: the returned readings are sorted descending by
/// timestamp (newest first), the order `bin_readings` requires.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Short stable adapter name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Load the named value column as (timestamp, value) readings.
    ///
    /// # Errors
    /// - `RebinError::MissingColumn` when the value or timestamp column is absent.
    /// - `RebinError::Timestamp` when a timestamp cell cannot be parsed.
    /// - `RebinError::Source` when the table itself is missing or unreadable.
    async fn load(&self, value_column: &str) -> Result<Vec<Reading>, RebinError>;
}
