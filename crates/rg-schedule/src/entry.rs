//! Schedule records: `RecurringClass`, `OneOffEvent`, and the `ScheduleEntry`
//! union over both.
//!
//! # Occurrence model
//!
//! A recurring class repeats on one weekday, every week, while the date lies
//! inside its active range:
//!
//! ```text
//! occurs_on(d) = d.weekday() == weekday
//!             && active_from <= d
//!             && (active_until is None || d <= active_until)
//! ```
//!
//! A one-off event occurs on exactly one date.  Both carry a wall-clock
//! interval in minutes since midnight; that interval is copied verbatim into
//! every occurrence and only validated by the layout engine.

use chrono::{Datelike, NaiveDate, Weekday};

use rg_core::{EntryId, ItemKind, RoomId};

// ── RecurringClass ────────────────────────────────────────────────────────────

/// A class held every week on the same weekday and time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecurringClass {
    pub id:           EntryId,
    pub title:        String,
    pub room:         Option<RoomId>,
    pub weekday:      Weekday,
    pub start:        i32,
    pub end:          i32,
    /// First date on which the class runs (inclusive).
    pub active_from:  NaiveDate,
    /// Last date on which the class runs (inclusive).  `None` = open-ended.
    pub active_until: Option<NaiveDate>,
}

impl RecurringClass {
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        date.weekday() == self.weekday
            && date >= self.active_from
            && self.active_until.is_none_or(|until| date <= until)
    }
}

// ── OneOffEvent ───────────────────────────────────────────────────────────────

/// An event on a single date.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneOffEvent {
    pub id:    EntryId,
    pub title: String,
    pub room:  Option<RoomId>,
    pub date:  NaiveDate,
    pub start: i32,
    pub end:   i32,
}

impl OneOffEvent {
    #[inline]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// Either kind of schedule record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScheduleEntry {
    Recurring(RecurringClass),
    OneOff(OneOffEvent),
}

impl ScheduleEntry {
    /// `true` if this entry has an occurrence on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            ScheduleEntry::Recurring(c) => c.occurs_on(date),
            ScheduleEntry::OneOff(e) => e.occurs_on(date),
        }
    }

    pub fn id(&self) -> EntryId {
        match self {
            ScheduleEntry::Recurring(c) => c.id,
            ScheduleEntry::OneOff(e) => e.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ScheduleEntry::Recurring(_) => ItemKind::Class,
            ScheduleEntry::OneOff(_) => ItemKind::Event,
        }
    }

    /// `(start, end)` in minutes since midnight.
    pub fn interval(&self) -> (i32, i32) {
        match self {
            ScheduleEntry::Recurring(c) => (c.start, c.end),
            ScheduleEntry::OneOff(e) => (e.start, e.end),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ScheduleEntry::Recurring(c) => &c.title,
            ScheduleEntry::OneOff(e) => &e.title,
        }
    }

    pub fn room(&self) -> Option<RoomId> {
        match self {
            ScheduleEntry::Recurring(c) => c.room,
            ScheduleEntry::OneOff(e) => e.room,
        }
    }
}

impl From<RecurringClass> for ScheduleEntry {
    fn from(c: RecurringClass) -> Self {
        ScheduleEntry::Recurring(c)
    }
}

impl From<OneOffEvent> for ScheduleEntry {
    fn from(e: OneOffEvent) -> Self {
        ScheduleEntry::OneOff(e)
    }
}
