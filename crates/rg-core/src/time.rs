//! Calendar time model.
//!
//! # Design
//!
//! Within a day, time is a signed count of minutes since midnight (`i32`).
//! Integer minutes keep all overlap arithmetic exact.  The type is signed so
//! that malformed values coming from a data source (negative bounds) survive
//! long enough to be rejected by the layout engine instead of wrapping.
//!
//! Across days, the displayed unit is a [`Week`]: seven consecutive dates
//! starting on the configured first weekday.  Days inside a week are
//! addressed by [`DayIndex`] (0 = first day of the displayed week).

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::{CoreError, CoreResult};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i32 = 1_440;

// ── Minutes of day ────────────────────────────────────────────────────────────

/// Parse an `HH:MM` (or `H:MM`) wall-clock time into minutes since midnight.
///
/// `24:00` is accepted as the end-of-day bound.
pub fn parse_hhmm(s: &str) -> CoreResult<i32> {
    let tok = s.trim();
    let (hh, mm) = tok
        .split_once(':')
        .ok_or_else(|| CoreError::Parse(format!("invalid time {tok:?}: expected HH:MM")))?;

    let digits = |f: &str| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit());
    if !digits(hh) || !digits(mm) {
        return Err(CoreError::Parse(format!("invalid time {tok:?}: expected HH:MM")));
    }

    let hours: i32 = hh
        .parse()
        .map_err(|_| CoreError::Parse(format!("invalid hour in {tok:?}")))?;
    let minutes: i32 = mm
        .parse()
        .map_err(|_| CoreError::Parse(format!("invalid minute in {tok:?}")))?;

    if mm.len() != 2 || !(0..60).contains(&minutes) {
        return Err(CoreError::Parse(format!("minute out of range in {tok:?}")));
    }
    if !(0..=24).contains(&hours) || (hours == 24 && minutes != 0) {
        return Err(CoreError::Parse(format!("hour out of range in {tok:?}")));
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as `HH:MM`.  Negative values keep their sign.
pub fn format_hhmm(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let abs = minutes.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

// ── DayIndex ──────────────────────────────────────────────────────────────────

/// Offset of a day within the displayed week, `0..=6`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayIndex(pub u8);

impl DayIndex {
    pub const COUNT: usize = 7;

    /// Every day of a week, in display order.
    pub const ALL: [DayIndex; 7] = [
        DayIndex(0),
        DayIndex(1),
        DayIndex(2),
        DayIndex(3),
        DayIndex(4),
        DayIndex(5),
        DayIndex(6),
    ];

    /// Checked constructor.
    pub fn new(day: u8) -> CoreResult<Self> {
        if (day as usize) < Self::COUNT {
            Ok(DayIndex(day))
        } else {
            Err(CoreError::InvalidDay(day))
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── Week ──────────────────────────────────────────────────────────────────────

/// Seven consecutive dates beginning at `start`.
///
/// `Week` is cheap to copy; navigation (`next`/`prev`) returns a new value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Week {
    /// First date of the week (day index 0).
    pub start: NaiveDate,
}

impl Week {
    /// The week that contains `date`, for weeks beginning on `week_starts_on`.
    pub fn containing(date: NaiveDate, week_starts_on: Weekday) -> Self {
        let offset = (date.weekday().num_days_from_monday() + 7
            - week_starts_on.num_days_from_monday())
            % 7;
        Self { start: date - Duration::days(offset as i64) }
    }

    /// The seven dates of this week, in display order.
    pub fn dates(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    /// Calendar date of `day`.
    #[inline]
    pub fn date_of(&self, day: DayIndex) -> NaiveDate {
        self.start + Duration::days(day.0 as i64)
    }

    /// Position of `date` within this week, or `None` if it falls outside.
    pub fn day_of(&self, date: NaiveDate) -> Option<DayIndex> {
        let offset = (date - self.start).num_days();
        if (0..DayIndex::COUNT as i64).contains(&offset) {
            Some(DayIndex(offset as u8))
        } else {
            None
        }
    }

    /// Last date of the week (day index 6).
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn next(&self) -> Week {
        Week { start: self.start + Duration::days(7) }
    }

    pub fn prev(&self) -> Week {
        Week { start: self.start - Duration::days(7) }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end())
    }
}
