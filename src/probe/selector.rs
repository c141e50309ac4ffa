use std::ops::RangeInclusive;

use crate::error::ProbeError;

/// Rows shown on each side of the selected row by default.
pub const DEFAULT_RADIUS: usize = 5;

// ---------------------------------------------------------------------------
// IndexSelector – the single slider-driven probe
// ---------------------------------------------------------------------------

/// One selected row, always a valid index for `row_count` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSelector {
    index: usize,
    row_count: usize,
}

impl IndexSelector {
    pub fn new(row_count: usize) -> Self {
        Self {
            index: 0,
            row_count,
        }
    }

    /// Selected row, or `None` when the table is empty.
    pub fn index(&self) -> Option<usize> {
        (self.row_count > 0).then_some(self.index)
    }

    /// Highest selectable row (slider upper bound).
    pub fn max_index(&self) -> Option<usize> {
        self.row_count.checked_sub(1)
    }

    pub fn set(&mut self, index: usize) -> Result<(), ProbeError> {
        self.check(index)?;
        self.index = index;
        Ok(())
    }

    /// Rows within `radius` of `index`, clamped to `[0, row_count - 1]` on both ends.
    pub fn neighborhood(
        &self,
        index: usize,
        radius: usize,
    ) -> Result<RangeInclusive<usize>, ProbeError> {
        self.check(index)?;
        let last = self.row_count - 1;
        Ok(index.saturating_sub(radius)..=index.saturating_add(radius).min(last))
    }

    fn check(&self, index: usize) -> Result<(), ProbeError> {
        if index >= self.row_count {
            return Err(ProbeError::OutOfRange {
                index,
                row_count: self.row_count,
            });
        }
        Ok(())
    }
}
