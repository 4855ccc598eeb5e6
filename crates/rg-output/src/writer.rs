//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DayWeightRow, OutputResult, PlacementRow, RejectedRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write a batch of positioned items.
    fn write_placements(&mut self, rows: &[PlacementRow]) -> OutputResult<()>;

    /// Write the seven day-weight rows of a week.
    fn write_day_weights(&mut self, rows: &[DayWeightRow]) -> OutputResult<()>;

    /// Write items refused by the layout engine.
    fn write_rejected(&mut self, rows: &[RejectedRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
