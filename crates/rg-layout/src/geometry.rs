//! Render geometry of a positioned item inside its day track.

use rg_core::GridConfig;

use crate::PositionedItem;

/// Fractions of the day track (`0.0..=1.0`).
///
/// Horizontal: `left = column_index / total_columns`, `width = 1 / total_columns`.
/// Vertical: the item's minutes relative to the configured visible window,
/// clamped so items running past either edge are cut at the edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemGeometry {
    pub left:   f64,
    pub width:  f64,
    pub top:    f64,
    pub height: f64,
}

pub fn geometry(placed: &PositionedItem, grid: &GridConfig) -> ItemGeometry {
    let total = placed.total_columns.max(1) as f64;
    let visible = grid.visible_minutes();

    let (top, bottom) = if visible > 0 {
        let frac = |m: i32| ((m - grid.day_start_minutes) as f64 / visible as f64).clamp(0.0, 1.0);
        (frac(placed.item.start_minutes), frac(placed.item.end_minutes))
    } else {
        (0.0, 0.0)
    };

    ItemGeometry {
        left:   placed.column_index as f64 / total,
        width:  1.0 / total,
        top,
        height: (bottom - top).max(0.0),
    }
}
