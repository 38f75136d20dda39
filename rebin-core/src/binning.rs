use crate::{BinConfig, BinnedRow, Reading, RebinError};

/// A half-open time interval `[start, end)` collecting the raw values
/// assigned to it during a binning pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    start: i64,
    end: i64,
    values: Vec<f64>,
}

impl Bin {
    /// Create an empty bin covering `[start, end)`.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            values: Vec::new(),
        }
    }

    /// Whether `ts` falls inside this bin's half-open interval.
    #[must_use]
    pub fn contains(&self, ts: f64) -> bool {
        self.start as f64 <= ts && ts < self.end as f64
    }

    /// Assign a raw value to this bin.
    ///
    /// Invalid (NaN) inputs are coerced to zero before they enter the
    /// average. This understates the true mean whenever invalid samples are
    /// present; it is the upstream-compatible policy, kept on purpose.
    pub fn store(&mut self, value: f64) {
        self.values.push(if value.is_nan() { 0.0 } else { value });
    }

    /// Mean of the assigned values, or NaN if the bin received nothing.
    ///
    /// NaN here marks "no data", distinct from a bin whose readings were all
    /// coerced zeros (which reports 0).
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return f64::NAN;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Reduce the bin to its output row `(start, average)`.
    #[must_use]
    pub fn into_row(self) -> BinnedRow {
        let value = self.average();
        BinnedRow::new(self.start, value)
    }
}

/// Bucket `readings` onto the uniform grid described by `cfg` and average
/// each bucket, emitting one row per bin (empty bins included, as NaN).
///
/// Hard precondition: `readings` must be sorted descending by timestamp
/// (newest first, oldest at the tail). Adapters uphold this; it is not
/// re-verified here beyond the pre-scan liveness check.
///
/// Single pass: the cursor starts at the oldest reading and only ever moves
/// toward newer ones while the bins advance forward in time, so total work is
/// linear in `readings.len() + n_bins`. Readings newer than the window end
/// are simply never reached.
///
/// # Errors
/// - `RebinError::InvalidArg` for a non-positive interval or inverted window.
/// - `RebinError::NoDataInWindow` when every reading predates `start_time`
///   (or the input is empty): without this check the cursor would sit below
///   the first bin forever and the result would be silently all-NaN.
pub fn bin_readings(readings: &[Reading], cfg: &BinConfig) -> Result<Vec<BinnedRow>, RebinError> {
    cfg.validate()?;
    let start = cfg.start_time;
    let interval = cfg.interval;
    let end = cfg.resolved_end();

    let n_bins = (end - start).div_euclid(interval);
    if n_bins <= 0 {
        // The window end falls inside the first interval; nothing to emit.
        return Ok(Vec::new());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(n_bins, start, interval, "binning readings");

    // Cursor over the descending-sorted input, oldest reading first.
    let Some(mut idx) = readings.len().checked_sub(1) else {
        return Err(RebinError::no_data_after(start));
    };

    // Skip readings that predate the window. If none survive, fail fast:
    // leaving the cursor parked on a too-early reading would make every bin
    // miss its matching times and yield an all-NaN table.
    while readings[idx].ts < start as f64 {
        if idx == 0 {
            return Err(RebinError::no_data_after(start));
        }
        idx -= 1;
    }

    let mut exhausted = false;
    let mut rows = Vec::with_capacity(n_bins as usize);
    for i in 0..n_bins {
        let mut bin = Bin::new(start + i * interval, start + (i + 1) * interval);
        while !exhausted && bin.contains(readings[idx].ts) {
            bin.store(readings[idx].value);
            if idx == 0 {
                exhausted = true;
            } else {
                idx -= 1;
            }
        }
        rows.push(bin.into_row());
    }
    Ok(rows)
}
