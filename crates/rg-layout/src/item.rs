//! Engine output types.

use rg_core::ScheduleItem;

use crate::LayoutError;

/// A `ScheduleItem` with its column slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionedItem {
    pub item:          ScheduleItem,
    /// Column slot, `0..total_columns`.
    pub column_index:  u32,
    /// Column count of the item's day.  Identical for every item of a day.
    pub total_columns: u32,
}

/// An input item the engine refused, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedItem {
    pub item:  ScheduleItem,
    pub error: LayoutError,
}
