use crate::{BinnedRow, RebinError};

/// One named column of a joined table.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedColumn {
    /// Output column name (e.g. "radiation", "temperature").
    pub name: String,
    /// Per-bin averages, NaN for missing bins.
    pub values: Vec<f64>,
}

/// A wide table of several binned series sharing one uniform time axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinedTable {
    /// The shared canonical timestamps, ascending, one per bin.
    pub unix_time: Vec<i64>,
    /// One column per joined series, in input order.
    pub columns: Vec<JoinedColumn>,
}

impl JoinedTable {
    /// Number of rows (bins) in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unix_time.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unix_time.is_empty()
    }
}

/// Join several binned series into one wide table.
///
/// All series must already be aligned: same length and identical timestamps
/// row for row. Series binned with the same `BinConfig` satisfy this by
/// construction. The time axis is taken from the first series.
///
/// # Errors
/// Returns `RebinError::Data` when a series disagrees with the first one in
/// length or in any timestamp.
pub fn join_aligned(series: Vec<(String, Vec<BinnedRow>)>) -> Result<JoinedTable, RebinError> {
    let mut iter = series.into_iter();
    let Some((first_name, first_rows)) = iter.next() else {
        return Ok(JoinedTable::default());
    };

    let unix_time: Vec<i64> = first_rows.iter().map(|r| r.unix_time).collect();
    let mut columns = vec![JoinedColumn {
        name: first_name,
        values: first_rows.into_iter().map(|r| r.value).collect(),
    }];

    for (name, rows) in iter {
        if rows.len() != unix_time.len() {
            return Err(RebinError::Data(format!(
                "series {name:?} has {} rows, expected {}",
                rows.len(),
                unix_time.len()
            )));
        }
        if let Some(pos) = rows
            .iter()
            .zip(&unix_time)
            .position(|(row, &ts)| row.unix_time != ts)
        {
            return Err(RebinError::Data(format!(
                "series {name:?} is misaligned at row {pos}: {} != {}",
                rows[pos].unix_time, unix_time[pos]
            )));
        }
        columns.push(JoinedColumn {
            name,
            values: rows.into_iter().map(|r| r.value).collect(),
        });
    }

    Ok(JoinedTable { unix_time, columns })
}
