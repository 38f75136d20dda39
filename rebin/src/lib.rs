//! rebin
//!
//! High-level entry point for resampling irregularly-timestamped sensor and
//! weather-station readings onto a uniform time grid.
//!
//! A [`Rebin`] instance holds one explicit binning window ([`BinConfig`]).
//! Point it at any [`ReadingSource`] to get a binned series, run whole
//! column batches concurrently, write the canonical per-column artifacts,
//! and join previously written artifacts into one wide, time-aligned table.
//!
//! ```no_run
//! use rebin::{Rebin, RebinError};
//! use rebin_csv::CsvSource;
//!
//! # async fn demo() -> Result<(), RebinError> {
//! let rebin = Rebin::builder()
//!     .start_time(1_530_255_601)
//!     .interval(3_600)
//!     .build()?;
//! let source = CsvSource::new("etch_roof_d3s.csv");
//! let series = rebin.bin_source(&source, "cpm").await?;
//! # let _ = series;
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use futures::future::try_join_all;

pub use rebin_core::{
    Bin, BinConfig, BinnedRow, DEFAULT_INTERVAL, DEFAULT_START_TIME, JoinedColumn, JoinedTable,
    Reading, ReadingSource, RebinError, bin_readings, join_aligned, sort_descending,
};
use rebin_csv::{output_filename, read_binned_file, write_binned_file};

/// Orchestrator binding one binning window to sources and artifacts.
#[derive(Debug)]
pub struct Rebin {
    cfg: BinConfig,
}

/// Builder for a [`Rebin`] orchestrator.
///
/// Starts from the historical defaults ([`DEFAULT_START_TIME`],
/// [`DEFAULT_INTERVAL`], end = "now"); every parameter can be overridden.
#[derive(Debug, Default, Clone)]
pub struct RebinBuilder {
    cfg: BinConfig,
}

impl RebinBuilder {
    /// Builder with the default window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window start in epoch seconds (first bin's canonical timestamp).
    #[must_use]
    pub const fn start_time(mut self, start_time: i64) -> Self {
        self.cfg.start_time = start_time;
        self
    }

    /// Bin width in seconds.
    #[must_use]
    pub const fn interval(mut self, interval: i64) -> Self {
        self.cfg.interval = interval;
        self
    }

    /// Pin the window end, making every run deterministic. Without it the
    /// end resolves to the wall clock at call time.
    #[must_use]
    pub const fn end_time(mut self, end_time: i64) -> Self {
        self.cfg.end_time = Some(end_time);
        self
    }

    /// Validate the window and build the orchestrator.
    ///
    /// # Errors
    /// `RebinError::InvalidArg` for a non-positive interval or an explicit
    /// end before the start.
    pub fn build(self) -> Result<Rebin, RebinError> {
        self.cfg.validate()?;
        Ok(Rebin { cfg: self.cfg })
    }
}

impl Rebin {
    /// Start building an orchestrator.
    #[must_use]
    pub fn builder() -> RebinBuilder {
        RebinBuilder::new()
    }

    /// The configured binning window.
    #[must_use]
    pub const fn config(&self) -> &BinConfig {
        &self.cfg
    }

    /// Load one value column from `source` and bin it.
    ///
    /// # Errors
    /// Adapter errors (`Source`, `MissingColumn`, `Timestamp`, `Data`)
    /// propagate unchanged, as does the binner's `NoDataInWindow`; deciding
    /// whether to skip or abort a batch is the caller's call.
    pub async fn bin_source(
        &self,
        source: &dyn ReadingSource,
        value_column: &str,
    ) -> Result<Vec<BinnedRow>, RebinError> {
        let readings = source.load(value_column).await?;
        bin_readings(&readings, &self.cfg)
    }

    /// Bin several columns of one source, concurrently.
    ///
    /// Each column is an independent binning call over disjoint data; any
    /// failure fails the whole batch.
    ///
    /// # Errors
    /// As [`Rebin::bin_source`], for whichever column fails first.
    pub async fn bin_columns(
        &self,
        source: &dyn ReadingSource,
        columns: &[&str],
    ) -> Result<Vec<(String, Vec<BinnedRow>)>, RebinError> {
        let binned = try_join_all(
            columns
                .iter()
                .map(|column| self.bin_source(source, column)),
        )
        .await?;
        Ok(columns
            .iter()
            .map(|c| (*c).to_owned())
            .zip(binned)
            .collect())
    }

    /// Bin one column and write it to
    /// `{out_dir}/{location_prefix}_data_{column}_{interval}.csv`, returning
    /// the artifact path.
    ///
    /// # Errors
    /// As [`Rebin::bin_source`], plus `RebinError::Source` when the output
    /// directory or file cannot be written.
    pub async fn bin_to_file(
        &self,
        source: &dyn ReadingSource,
        value_column: &str,
        out_dir: &Path,
        location_prefix: Option<&str>,
    ) -> Result<PathBuf, RebinError> {
        let rows = self.bin_source(source, value_column).await?;
        std::fs::create_dir_all(out_dir)
            .map_err(|e| RebinError::source("csv", format!("{}: {e}", out_dir.display())))?;
        let path = out_dir.join(output_filename(location_prefix, value_column, self.cfg.interval));
        write_binned_file(&path, &rows)?;
        Ok(path)
    }
}

/// One series to pull into a joined table.
#[derive(Debug, Clone)]
pub struct JoinSpec {
    /// Output column name in the joined table (e.g. "radiation").
    pub name: String,
    /// Value column the artifact was binned from (e.g. "cpm").
    pub column: String,
    /// Whether a missing artifact is tolerated (the series is then omitted)
    /// instead of failing the whole join.
    pub optional: bool,
}

impl JoinSpec {
    /// A required series.
    pub fn required(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            optional: false,
        }
    }

    /// An optional series: absent artifacts are skipped, not fatal.
    pub fn optional(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            optional: true,
        }
    }
}

/// Join the per-column artifacts of one batch (same directory, same location
/// prefix, same interval) into a wide table on the shared time axis.
///
/// An unreadable artifact for an `optional` spec drops that series from the
/// table; this is the only place a `Source` failure is swallowed. All other
/// errors, and `Source` failures on required series, propagate.
///
/// # Errors
/// `RebinError::Source` for a missing required artifact, `RebinError::Data`
/// for malformed or misaligned artifacts.
pub fn join_binned_dir(
    data_dir: &Path,
    location_prefix: Option<&str>,
    interval: i64,
    specs: &[JoinSpec],
) -> Result<JoinedTable, RebinError> {
    let mut series = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = data_dir.join(output_filename(location_prefix, &spec.column, interval));
        match read_binned_file(&path) {
            Ok(rows) => series.push((spec.name.clone(), rows)),
            Err(RebinError::Source { .. }) if spec.optional => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    series = %spec.name,
                    path = %path.display(),
                    "optional series unavailable, omitting from join"
                );
            }
            Err(e) => return Err(e),
        }
    }
    join_aligned(series)
}
