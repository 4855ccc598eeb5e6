//! Plain data row types written by output backends.

use chrono::NaiveDate;

use rg_core::ItemKind;

/// One positioned item of the displayed week.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRow {
    pub date:          NaiveDate,
    pub day:           u8,
    pub item_id:       u32,
    pub kind:          ItemKind,
    pub label:         String,
    /// `None` when the record has no room.
    pub room:          Option<u16>,
    pub start_minutes: i32,
    pub end_minutes:   i32,
    pub column_index:  u32,
    pub total_columns: u32,
    /// Horizontal position within the day track, `0.0..1.0`.
    pub left:          f64,
    pub width:         f64,
}

/// Track sizing for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayWeightRow {
    pub date:     NaiveDate,
    pub day:      u8,
    pub show:     bool,
    pub weight:   u32,
    /// Share of the total grid width (0 for hidden days).
    pub fraction: f64,
}

/// An item the layout engine refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// `None` when the item's day lies outside the displayed week.
    pub date:          Option<NaiveDate>,
    pub item_id:       u32,
    pub label:         String,
    pub start_minutes: i32,
    pub end_minutes:   i32,
    pub reason:        String,
}
