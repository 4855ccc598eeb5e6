//! Week layout: seven independent day layouts.

use rg_core::{DayIndex, ScheduleItem};

use crate::{DayLayout, LayoutError, PositionedItem, RejectedItem, layout_day};

/// Layout result for a whole displayed week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekLayout {
    days:       [DayLayout; 7],
    /// Items whose `day` is not a valid `DayIndex`.
    misplaced:  Vec<RejectedItem>,
}

impl WeekLayout {
    /// A week with no items: every day has `total_columns == 1`.
    pub fn empty() -> Self {
        Self {
            days:      DayIndex::ALL.map(DayLayout::empty),
            misplaced: Vec::new(),
        }
    }

    pub fn day(&self, day: DayIndex) -> &DayLayout {
        &self.days[day.index()]
    }

    /// All seven days in display order.
    pub fn days(&self) -> &[DayLayout; 7] {
        &self.days
    }

    /// Positioned items of every day, in day order.
    pub fn iter_items(&self) -> impl Iterator<Item = &PositionedItem> {
        self.days.iter().flat_map(|d| d.items.iter())
    }

    /// Every refused item: per-day interval faults, then out-of-week items.
    pub fn iter_rejected(&self) -> impl Iterator<Item = &RejectedItem> {
        self.days
            .iter()
            .flat_map(|d| d.rejected.iter())
            .chain(self.misplaced.iter())
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(DayLayout::len).sum()
    }

    pub fn rejected_count(&self) -> usize {
        self.iter_rejected().count()
    }
}

impl Default for WeekLayout {
    fn default() -> Self {
        Self::empty()
    }
}

/// Bucket `items` by their `day` and lay out each day independently.
///
/// Input order is preserved within each bucket.  Items whose day lies
/// outside `0..=6` are logged and reported through
/// [`WeekLayout::iter_rejected`].
pub fn layout_week(items: &[ScheduleItem]) -> WeekLayout {
    let mut buckets: [Vec<ScheduleItem>; 7] = Default::default();
    let mut misplaced = Vec::new();

    for item in items {
        match buckets.get_mut(item.day.index()) {
            Some(bucket) => bucket.push(item.clone()),
            None => {
                let error = LayoutError::DayOutOfRange { id: item.id, day: item.day };
                tracing::warn!(item = %item.id, "{error}; item skipped");
                misplaced.push(RejectedItem { item: item.clone(), error });
            }
        }
    }

    let mut layout = layout_buckets(&buckets);
    layout.misplaced = misplaced;
    layout
}

/// Lay out pre-bucketed items (index = `DayIndex`).
///
/// The bucket position decides the day; the items' own `day` fields are not
/// consulted.
pub fn layout_buckets(buckets: &[Vec<ScheduleItem>; 7]) -> WeekLayout {
    WeekLayout {
        days:      DayIndex::ALL.map(|day| layout_day(day, &buckets[day.index()])),
        misplaced: Vec::new(),
    }
}
