// src/data_analysis/columnar.rs

use ndarray::{Array2, ArrayView1, Axis};
use ndarray_stats::QuantileExt;

use crate::constants::FIELD_COUNT;
use crate::data_input::log_data::TelemetryRecord;
use crate::field_names::{FIELD_NAMES, TIME_FIELD_INDEX};

/// Column-major view of a telemetry log: one row of the array per field,
/// one array column per record, in log order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTable {
    columns: Array2<i64>,
}

impl ColumnTable {
    /// Transposes the log. No filtering or numeric conversion beyond widening to i64.
    pub fn from_log(log: &[TelemetryRecord]) -> Self {
        let columns = Array2::from_shape_fn((FIELD_COUNT, log.len()), |(field, row)| {
            log[row].fields()[field]
        });
        Self { columns }
    }

    /// Number of series (always the record field count).
    pub fn column_count(&self) -> usize {
        self.columns.len_of(Axis(0))
    }

    /// Number of samples in every series.
    pub fn len(&self) -> usize {
        self.columns.len_of(Axis(1))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The i-th series, in row order.
    ///
    /// # Panics
    /// Panics if `index` is not below the field count.
    pub fn column(&self, index: usize) -> ArrayView1<'_, i64> {
        self.columns.row(index)
    }

    /// The time series (field 0).
    pub fn time(&self) -> ArrayView1<'_, i64> {
        self.column(TIME_FIELD_INDEX)
    }

    /// Every non-time series together with its field name.
    pub fn value_columns(&self) -> impl Iterator<Item = (&'static str, ArrayView1<'_, i64>)> + '_ {
        (0..self.column_count())
            .filter(|&i| i != TIME_FIELD_INDEX)
            .map(move |i| (FIELD_NAMES[i], self.column(i)))
    }

    /// Min and max of the time series, `None` when the table is empty.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        column_min_max(self.time())
    }

    /// Min and max across all non-time series, `None` when the table is empty.
    pub fn value_range(&self) -> Option<(i64, i64)> {
        self.value_columns()
            .filter_map(|(_, column)| column_min_max(column))
            .reduce(|(lo, hi), (min, max)| (lo.min(min), hi.max(max)))
    }
}

fn column_min_max(column: ArrayView1<'_, i64>) -> Option<(i64, i64)> {
    let min = column.min().ok()?;
    let max = column.max().ok()?;
    Some((*min, *max))
}
