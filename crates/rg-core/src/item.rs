//! `ScheduleItem`: one time-bounded occurrence inside a day bucket.
//!
//! This is the only shape the layout engine accepts.  Recurring classes and
//! one-off events are normalised into it by the schedule supplier before
//! layout, so the engine never sees source-specific records.

use crate::{DayIndex, ItemId, RoomId};

/// Where an item came from.  Carried through layout for rendering only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemKind {
    /// Occurrence of a recurring weekly class.
    Class,
    /// A one-off dated event.
    Event,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Class => "class",
            ItemKind::Event => "event",
        }
    }
}

/// A time interval on one day of the displayed week.
///
/// The interval is half-open: `[start_minutes, end_minutes)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleItem {
    /// Unique within the item's day bucket.
    pub id: ItemId,
    /// Day bucket the item belongs to.
    pub day: DayIndex,
    /// Minutes since midnight at which the item starts.
    pub start_minutes: i32,
    /// Minutes since midnight at which the item ends.
    pub end_minutes: i32,
    pub label: String,
    pub kind: ItemKind,
    pub room: Option<RoomId>,
}

impl ScheduleItem {
    /// Minimal constructor used when only the interval matters.
    pub fn new(id: ItemId, day: DayIndex, start_minutes: i32, end_minutes: i32) -> Self {
        Self {
            id,
            day,
            start_minutes,
            end_minutes,
            label: String::new(),
            kind: ItemKind::Event,
            room: None,
        }
    }

    #[inline]
    pub fn duration_minutes(&self) -> i32 {
        self.end_minutes - self.start_minutes
    }

    /// Half-open overlap test.  Touching endpoints do not overlap, and a
    /// zero-width item overlaps nothing.
    #[inline]
    pub fn overlaps(&self, other: &ScheduleItem) -> bool {
        self.start_minutes.max(other.start_minutes) < self.end_minutes.min(other.end_minutes)
    }
}
