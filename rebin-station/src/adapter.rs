use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

use rebin_core::RebinError;

/// Default daily-history endpoint.
pub const DEFAULT_BASE_URL: &str =
    "https://www.wunderground.com/weatherstation/WXDailyHistory.asp";

/// Daily-history abstraction (so tests can inject canned CSV instead of
/// hitting the network).
#[async_trait]
pub trait DailyHistory: Send + Sync {
    /// Fetch one day of station history as raw CSV text.
    async fn fetch_csv(&self, station_id: &str, date: NaiveDate) -> Result<String, RebinError>;
}

/// Production adapter backed by `reqwest`.
pub struct HttpAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAdapter {
    /// Adapter against the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Adapter against a custom endpoint (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, station_id: &str, date: NaiveDate) -> String {
        format!(
            "{}?ID={}&day={}&month={}&year={}&graphspan=day&format=1",
            self.base_url,
            station_id,
            date.day(),
            date.month(),
            date.year()
        )
    }
}

impl Default for HttpAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DailyHistory for HttpAdapter {
    async fn fetch_csv(&self, station_id: &str, date: NaiveDate) -> Result<String, RebinError> {
        let url = self.url_for(station_id, date);
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "fetching station history");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| RebinError::source("station", e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| RebinError::source("station", e.to_string()))
    }
}
