//! rebin-core
//!
//! Core types and the time-binning algorithm shared across the rebin
//! ecosystem.
//!
//! - `reading`: the `Reading` and `BinnedRow` data types.
//! - `config`: the explicit `BinConfig` window (start, interval, end).
//! - `binning`: `Bin` and the single-pass bucketing/averaging algorithm.
//! - `join`: alignment-checked joining of several binned series.
//! - `source`: the async `ReadingSource` trait implemented by adapters.
//!
//! The binner itself is pure and synchronous: a deterministic batch
//! transformation over an in-memory slice with no suspension points. Only
//! the adapter seam is async, because remote sources are.
#![warn(missing_docs)]

/// Binning window configuration and its historical defaults.
pub mod config;
/// The unified workspace error type.
pub mod error;
/// `Bin` and the single-pass bucketing algorithm.
pub mod binning;
/// Joining aligned binned series into one wide table.
pub mod join;
/// `Reading`, `BinnedRow`, and ordering helpers.
pub mod reading;
/// The `ReadingSource` adapter trait.
pub mod source;

pub use binning::{Bin, bin_readings};
pub use config::{BinConfig, DEFAULT_INTERVAL, DEFAULT_START_TIME};
pub use error::RebinError;
pub use join::{JoinedColumn, JoinedTable, join_aligned};
pub use reading::{BinnedRow, Reading, sort_descending};
pub use source::ReadingSource;
