//! Interval column assignment for one day.
//!
//! # Algorithm
//!
//! Greedy first-fit over items in ascending start order:
//!
//! ```text
//! for item in stable_sort_by(items, start):
//!     column = first c such that no item already in c overlaps item
//!     place item in column (opening a new column if none fits)
//! total_columns = max(column) + 1          (1 for an empty day)
//! ```
//!
//! Overlap is half-open: `max(a.start, b.start) < min(a.end, b.end)`.  Items
//! that merely touch (`a.end == b.start`) can share a column.
//!
//! Because items arrive in start order, first-fit is optimal on interval
//! graphs: the column count equals the largest number of items active at
//! one instant (see [`max_overlap`](crate::max_overlap)).
//!
//! # Validation
//!
//! An item is refused if either bound is negative or `start > end`.
//! Zero-width items are valid; they overlap nothing and so always take
//! column 0.  [`assign_columns`] fails on the first refused item;
//! [`layout_day`] logs and skips refused items and lays out the rest.

use rg_core::{DayIndex, ScheduleItem};

use crate::{IntervalFault, LayoutError, LayoutResult, PositionedItem, RejectedItem};

// ── DayLayout ─────────────────────────────────────────────────────────────────

/// The laid-out items of one day bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayLayout {
    pub day:           DayIndex,
    /// Placed items in processing order (ascending start, ties by input order).
    pub items:         Vec<PositionedItem>,
    /// Column count for the day, `>= 1`.
    pub total_columns: u32,
    /// Items refused at validation, in input order.
    pub rejected:      Vec<RejectedItem>,
}

impl DayLayout {
    pub fn empty(day: DayIndex) -> Self {
        Self { day, items: Vec::new(), total_columns: 1, rejected: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Check the engine's input contract for one item.
pub fn validate(item: &ScheduleItem) -> LayoutResult<()> {
    let fault = if item.start_minutes < 0 || item.end_minutes < 0 {
        Some(IntervalFault::NegativeBound)
    } else if item.start_minutes > item.end_minutes {
        Some(IntervalFault::StartAfterEnd)
    } else {
        None
    };
    match fault {
        None => Ok(()),
        Some(fault) => Err(LayoutError::InvalidInterval {
            id:    item.id,
            start: item.start_minutes,
            end:   item.end_minutes,
            fault,
        }),
    }
}

/// Assign a column to every item of one day.
///
/// `items` must already be filtered to a single day; their `day` field is
/// not inspected.  Returns the items in processing order with
/// `column_index` and a uniform `total_columns` filled in.
///
/// # Errors
///
/// [`LayoutError::InvalidInterval`] for the first item that fails
/// [`validate`].  Use [`layout_day`] to skip bad items instead.
pub fn assign_columns(items: &[ScheduleItem]) -> LayoutResult<Vec<PositionedItem>> {
    for item in items {
        validate(item)?;
    }
    let (placed, _) = place(items.to_vec());
    Ok(placed)
}

/// Lay out one day bucket, skipping items that fail validation.
///
/// Refused items are logged at `warn` and returned in
/// [`DayLayout::rejected`]; the valid items are positioned exactly as
/// [`assign_columns`] would position them on their own.
pub fn layout_day(day: DayIndex, items: &[ScheduleItem]) -> DayLayout {
    let mut valid = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();

    for item in items {
        match validate(item) {
            Ok(()) => valid.push(item.clone()),
            Err(error) => {
                tracing::warn!(day = %day, item = %item.id, label = %item.label, "{error}; item skipped");
                rejected.push(RejectedItem { item: item.clone(), error });
            }
        }
    }

    let (placed, total_columns) = place(valid);
    tracing::debug!(
        day = %day,
        items = placed.len(),
        rejected = rejected.len(),
        total_columns,
        "laid out day"
    );
    DayLayout { day, items: placed, total_columns, rejected }
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// First-fit placement of already-validated items.
fn place(mut items: Vec<ScheduleItem>) -> (Vec<PositionedItem>, u32) {
    // `sort_by_key` is stable: equal starts keep input order.
    items.sort_by_key(|i| i.start_minutes);

    // columns[c] holds indices into `placed` of the items in column c.
    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut placed: Vec<PositionedItem> = Vec::with_capacity(items.len());

    for item in items {
        let column = columns
            .iter()
            .position(|members| members.iter().all(|&m| !placed[m].item.overlaps(&item)))
            .unwrap_or(columns.len());

        if column == columns.len() {
            columns.push(Vec::new());
        }
        columns[column].push(placed.len());
        placed.push(PositionedItem {
            item,
            column_index: column as u32,
            total_columns: 1,
        });
    }

    // Columns are only opened when used, so their count is max(column) + 1.
    let total_columns = columns.len().max(1) as u32;
    for p in &mut placed {
        p.total_columns = total_columns;
    }
    (placed, total_columns)
}
