//! Per-day track weights for a variable-width week grid.
//!
//! Each visible day gets a track `weight` fractional units wide, so a day
//! needing three columns is three times as wide as a single-column day.
//! Days without items collapse to zero width.

use crate::WeekLayout;

/// Track sizing for one day of the week grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DayWeight {
    /// `true` if the day has at least one placed item.
    pub show:   bool,
    /// The day's `total_columns` (`>= 1`).
    pub weight: u32,
}

/// Compute `show`/`weight` for all seven days.
pub fn day_weights(layout: &WeekLayout) -> [DayWeight; 7] {
    layout.days().each_ref().map(|d| DayWeight {
        show:   !d.items.is_empty(),
        weight: d.total_columns.max(1),
    })
}

/// CSS-style track list, e.g. `"2fr 1fr 0fr 0fr 1fr 0fr 0fr"`.
pub fn grid_template_columns(weights: &[DayWeight; 7]) -> String {
    weights
        .iter()
        .map(|w| if w.show { format!("{}fr", w.weight) } else { "0fr".to_owned() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Each day's share of the total grid width.
///
/// Hidden days get `0.0`; when no day is visible every share is `0.0`.
pub fn track_fractions(weights: &[DayWeight; 7]) -> [f64; 7] {
    let total: u32 = weights.iter().filter(|w| w.show).map(|w| w.weight).sum();
    weights.map(|w| {
        if w.show && total > 0 {
            w.weight as f64 / total as f64
        } else {
            0.0
        }
    })
}
