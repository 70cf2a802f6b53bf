//! Read statistics for a binder
//!
//! Tracks how many rows were produced and how many cells were kept or
//! dropped as null, for reporting after a run.

use serde::{Deserialize, Serialize};

/// Counters accumulated by [`Binder::read_row`](crate::Binder::read_row)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStats {
    /// Data rows read (the header record is not counted)
    pub rows_read: usize,

    /// Cells that ended up in a row
    pub cells_populated: usize,

    /// Cells not present in a row (null, unnamed or shadowed by a repeated
    /// column name)
    pub cells_omitted: usize,
}

impl ReadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one record of `record_len` cells yielding `populated`
    pub fn record_row(&mut self, record_len: usize, populated: usize) {
        self.rows_read += 1;
        self.cells_populated += populated;
        self.cells_omitted += record_len.saturating_sub(populated);
    }

    /// Total cells seen across all rows
    pub fn total_cells(&self) -> usize {
        self.cells_populated + self.cells_omitted
    }

    /// Share of cells that carried a value, as a percentage
    pub fn fill_rate(&self) -> f64 {
        let total = self.total_cells();
        if total == 0 {
            0.0
        } else {
            (self.cells_populated as f64 / total as f64) * 100.0
        }
    }
}
