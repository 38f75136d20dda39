use core::fmt;

use chrono::DateTime;

/// Unified error type for the rebin workspace.
///
/// This wraps configuration problems (bad bin widths, missing columns,
/// unparseable timestamps), the fail-fast "no data in window" condition from
/// the binner's pre-scan, and source-tagged failures from adapters.
///
/// `Display` and `Error` are implemented by hand rather than via
/// `#[derive(thiserror::Error)]` because the `Source` variant's `source`
/// field is a plain adapter-name `String`, which thiserror would otherwise
/// treat as the `Error::source` cause.
#[derive(Debug)]
pub enum RebinError {
    /// Invalid input argument (non-positive interval, inverted window, ...).
    InvalidArg(String),

    /// The requested column (or the timestamp column) is absent from the source table.
    MissingColumn {
        /// Name of the column that could not be found.
        column: String,
    },

    /// A timestamp cell could not be parsed into epoch seconds.
    Timestamp {
        /// The raw cell content that failed to parse.
        raw: String,
    },

    /// Every reading predates the window start; binning would silently
    /// produce an all-missing table, so the operation fails instead.
    NoDataInWindow {
        /// Window start in epoch seconds.
        start: i64,
    },

    /// A source table is missing or unreadable.
    Source {
        /// Adapter name that failed (e.g. "csv", "station").
        source: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the data itself (malformed cells, misaligned series, ...).
    Data(String),
}

impl fmt::Display for RebinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArg(msg) => write!(f, "invalid argument: {msg}"),
            Self::MissingColumn { column } => write!(f, "missing column: {column}"),
            Self::Timestamp { raw } => write!(f, "unparseable timestamp: {raw:?}"),
            Self::NoDataInWindow { start } => write!(f, "{}", fmt_no_data(*start)),
            Self::Source { source, msg } => write!(f, "{source} source failed: {msg}"),
            Self::Data(msg) => write!(f, "data issue: {msg}"),
        }
    }
}

impl std::error::Error for RebinError {}

fn fmt_no_data(start: i64) -> String {
    let when = DateTime::from_timestamp(start, 0).map_or_else(
        || "out-of-range".to_owned(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    format!("no data at or after window start {when} ({start})")
}

impl RebinError {
    /// Helper: build an `InvalidArg` error from any displayable message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `MissingColumn` error for a column name.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Helper: build a `NoDataInWindow` error for a window start.
    #[must_use]
    pub const fn no_data_after(start: i64) -> Self {
        Self::NoDataInWindow { start }
    }

    /// Helper: build a `Source` error with the adapter name and message.
    pub fn source(source: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source: source.into(),
            msg: msg.into(),
        }
    }
}
