//! Week expansion: `ScheduleEntry` records → per-day `ScheduleItem` buckets.
//!
//! Every entry is checked against each of the week's seven dates.  Each
//! occurrence becomes one `ScheduleItem` with a fresh, week-unique
//! `ItemId` (sequential in day-then-entry order), so ids stay unique within
//! every day bucket even when the same class appears on several days.
//!
//! Within a bucket items keep entry order; the layout engine's stable sort
//! relies on it to break start-time ties.

use rg_core::{DayIndex, ItemId, ScheduleItem, Week};

use crate::{ScheduleEntry, ScheduleFilter};

/// The items of one displayed week, bucketed by day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekItems {
    pub week: Week,
    /// Indexed by `DayIndex`.
    pub days: [Vec<ScheduleItem>; 7],
}

impl WeekItems {
    pub fn empty(week: Week) -> Self {
        Self { week, days: Default::default() }
    }

    pub fn day(&self, day: DayIndex) -> &[ScheduleItem] {
        &self.days[day.index()]
    }

    /// Total item count across all days.
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// All items of the week in day order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.days.iter().flatten()
    }
}

/// Expand `entries` into the seven day buckets of `week`, keeping only
/// entries accepted by `filter`.
pub fn expand_week(entries: &[ScheduleEntry], week: &Week, filter: &ScheduleFilter) -> WeekItems {
    let mut items = WeekItems::empty(*week);
    let mut next_id: u32 = 0;

    let selected: Vec<&ScheduleEntry> = entries.iter().filter(|e| filter.matches(e)).collect();

    for (day, date) in DayIndex::ALL.into_iter().zip(week.dates()) {
        let bucket = &mut items.days[day.index()];
        for entry in selected.iter().filter(|e| e.occurs_on(date)) {
            let (start, end) = entry.interval();
            bucket.push(ScheduleItem {
                id:            ItemId(next_id),
                day,
                start_minutes: start,
                end_minutes:   end,
                label:         entry.title().to_owned(),
                kind:          entry.kind(),
                room:          entry.room(),
            });
            next_id += 1;
        }
    }

    tracing::debug!(
        week = %week,
        entries = entries.len(),
        selected = selected.len(),
        items = items.len(),
        "expanded schedule entries into week"
    );
    items
}
