use serde::{Deserialize, Serialize};

/// A single (timestamp, value) observation from a sensor or weather station.
///
/// Timestamps are epoch seconds. Fractional timestamps are preserved as they
/// arrive from sources; the binner never rounds them. A NaN `value` marks an
/// invalid observation and is coerced to zero when stored into a bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Observation time in seconds since the Unix epoch.
    pub ts: f64,
    /// Observed value; NaN means the sensor reported an invalid sample.
    pub value: f64,
}

impl Reading {
    /// Construct a reading from epoch seconds and a raw value.
    #[must_use]
    pub const fn new(ts: f64, value: f64) -> Self {
        Self { ts, value }
    }
}

/// One row of a binned series: the bin's canonical start time and the mean of
/// the values assigned to it (NaN when the bin received no readings).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinnedRow {
    /// Bin start in whole epoch seconds; rows are spaced exactly one interval apart.
    pub unix_time: i64,
    /// Mean of the assigned values, or NaN for an empty bin.
    pub value: f64,
}

impl BinnedRow {
    /// Construct a binned row.
    #[must_use]
    pub const fn new(unix_time: i64, value: f64) -> Self {
        Self { unix_time, value }
    }
}

/// Sort readings descending by timestamp (newest first), the order the binner
/// requires. NaN timestamps are ordered deterministically via `total_cmp`.
pub fn sort_descending(readings: &mut [Reading]) {
    readings.sort_unstable_by(|a, b| b.ts.total_cmp(&a.ts));
}
