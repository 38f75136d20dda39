//! rebin-station
//!
//! Weather-station connector for the rebin ecosystem. Fetches daily station
//! history over HTTP, strips the `<br>` markup embedded in the export,
//! parses local time strings into epoch seconds, and normalizes imperial
//! columns (°F, inHg) to the metric units the sensor series use, producing
//! descending-sorted `Reading`s for the binner.
#![warn(missing_docs)]

/// The `DailyHistory` fetch trait and the production HTTP adapter.
pub mod adapter;
/// Imperial-to-metric conversions and requested-column mapping.
pub mod units;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};

use adapter::{DailyHistory, HttpAdapter};
use rebin_core::{Reading, ReadingSource, RebinError, sort_descending};
use units::source_column;

/// Column holding the station's local time string.
pub const TIME_COLUMN: &str = "Time";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source adapter over a station's daily-history endpoint, covering the
/// inclusive day range `first_day..=last_day`.
pub struct StationSource {
    adapter: Arc<dyn DailyHistory>,
    station_id: String,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl StationSource {
    /// Adapt `station_id` over the given day range using the production
    /// HTTP adapter.
    pub fn new(station_id: impl Into<String>, first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self::with_adapter(Arc::new(HttpAdapter::new()), station_id, first_day, last_day)
    }

    /// Adapt `station_id` with an injected fetch adapter (tests, mirrors).
    pub fn with_adapter(
        adapter: Arc<dyn DailyHistory>,
        station_id: impl Into<String>,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Self {
        Self {
            adapter,
            station_id: station_id.into(),
            first_day,
            last_day,
        }
    }
}

#[async_trait]
impl ReadingSource for StationSource {
    fn name(&self) -> &'static str {
        "station"
    }

    async fn load(&self, value_column: &str) -> Result<Vec<Reading>, RebinError> {
        let (raw_column, conversion) = source_column(value_column);

        let mut readings = Vec::new();
        let mut day = self.first_day;
        while day <= self.last_day {
            let text = self.adapter.fetch_csv(&self.station_id, day).await?;
            parse_day(&text, raw_column, conversion, &mut readings)?;
            day += Duration::days(1);
        }

        sort_descending(&mut readings);
        Ok(readings)
    }
}

/// Parse one day of station CSV into `out`.
///
/// The export interleaves `<br>` markup with the data rows and appends
/// `<br>` to the last header; all `<br>` tokens are stripped before parsing,
/// which turns the markup rows into blank lines the CSV reader skips.
///
/// Time strings are naive local time taken as UTC (timezone handling is out
/// of scope); an empty value cell is an invalid (NaN) sample.
fn parse_day(
    text: &str,
    raw_column: &str,
    conversion: units::Conversion,
    out: &mut Vec<Reading>,
) -> Result<(), RebinError> {
    let cleaned = text.replace("<br>", "");
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(cleaned.as_bytes());
    let headers = rdr
        .headers()
        .map_err(|e| RebinError::Data(format!("bad station header: {e}")))?;

    let time_idx = headers
        .iter()
        .position(|h| h.trim() == TIME_COLUMN)
        .ok_or_else(|| RebinError::missing_column(TIME_COLUMN))?;
    let value_idx = headers
        .iter()
        .position(|h| h.trim() == raw_column)
        .ok_or_else(|| RebinError::missing_column(raw_column))?;

    for record in rdr.records() {
        let record = record.map_err(|e| RebinError::Data(format!("bad station record: {e}")))?;
        let raw_time = record.get(time_idx).unwrap_or("").trim();
        if raw_time.is_empty() {
            continue;
        }
        let ts = NaiveDateTime::parse_from_str(raw_time, TIME_FORMAT)
            .map_err(|_| RebinError::Timestamp {
                raw: raw_time.to_owned(),
            })?
            .and_utc()
            .timestamp() as f64;

        let raw_value = record.get(value_idx).unwrap_or("").trim();
        let value = if raw_value.is_empty() {
            f64::NAN
        } else {
            raw_value.parse().map_err(|_| {
                RebinError::Data(format!(
                    "unparseable value {raw_value:?} in column {raw_column:?}"
                ))
            })?
        };
        out.push(Reading::new(ts, conversion.apply(value)));
    }
    Ok(())
}
