use chrono::Utc;

use crate::RebinError;

/// Historical default window start (2015-11-20 02:27:13 UTC), kept from the
/// original deployment so existing artifacts line up across runs.
pub const DEFAULT_START_TIME: i64 = 1_447_986_433;

/// Default bin width: 40 minutes.
pub const DEFAULT_INTERVAL: i64 = 2_400;

/// Binning window configuration passed explicitly into each call.
///
/// `end_time` is optional: `None` means "resolve to the current wall-clock
/// time when the binning runs". Passing an explicit end keeps the binner
/// fully deterministic, which is what tests and reproducible pipelines want.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinConfig {
    /// Window start in epoch seconds; also the first bin's canonical timestamp.
    pub start_time: i64,
    /// Bin width in seconds; must be positive.
    pub interval: i64,
    /// Window end in epoch seconds; `None` resolves to "now" at call time.
    pub end_time: Option<i64>,
}

impl Default for BinConfig {
    fn default() -> Self {
        Self {
            start_time: DEFAULT_START_TIME,
            interval: DEFAULT_INTERVAL,
            end_time: None,
        }
    }
}

impl BinConfig {
    /// Build a config with an explicit start and interval, end defaulting to "now".
    #[must_use]
    pub const fn new(start_time: i64, interval: i64) -> Self {
        Self {
            start_time,
            interval,
            end_time: None,
        }
    }

    /// Pin the window end, making the binning deterministic.
    #[must_use]
    pub const fn with_end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Validate the window parameters.
    ///
    /// # Errors
    /// Returns `RebinError::InvalidArg` when `interval <= 0`, or when an
    /// explicit `end_time` precedes `start_time`.
    pub fn validate(&self) -> Result<(), RebinError> {
        if self.interval <= 0 {
            return Err(RebinError::invalid_arg(format!(
                "interval must be positive, got {}",
                self.interval
            )));
        }
        if let Some(end) = self.end_time {
            if end < self.start_time {
                return Err(RebinError::invalid_arg(format!(
                    "end_time {end} precedes start_time {}",
                    self.start_time
                )));
            }
        }
        Ok(())
    }

    /// The effective window end: the explicit `end_time`, or "now".
    #[must_use]
    pub fn resolved_end(&self) -> i64 {
        self.end_time.unwrap_or_else(|| Utc::now().timestamp())
    }
}
