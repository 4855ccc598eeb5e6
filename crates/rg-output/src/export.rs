//! `export_week`: flattens a `WeekLayout` into rows for any `OutputWriter`.

use rg_core::{GridConfig, Week};
use rg_layout::{LayoutError, WeekLayout, day_weights, geometry, track_fractions};

use crate::row::{DayWeightRow, PlacementRow, RejectedRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Row counts written by one [`export_week`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub placements:  usize,
    pub day_weights: usize,
    pub rejected:    usize,
}

/// Positioned items of `layout`, in day order, with dates from `week`.
pub fn placement_rows(week: &Week, layout: &WeekLayout, grid: &GridConfig) -> Vec<PlacementRow> {
    layout
        .iter_items()
        .map(|p| {
            let g = geometry(p, grid);
            PlacementRow {
                date:          week.date_of(p.item.day),
                day:           p.item.day.0,
                item_id:       p.item.id.0,
                kind:          p.item.kind,
                label:         p.item.label.clone(),
                room:          p.item.room.map(|r| r.0),
                start_minutes: p.item.start_minutes,
                end_minutes:   p.item.end_minutes,
                column_index:  p.column_index,
                total_columns: p.total_columns,
                left:          g.left,
                width:         g.width,
            }
        })
        .collect()
}

/// The seven day-weight rows of `layout`.
pub fn day_weight_rows(week: &Week, layout: &WeekLayout) -> Vec<DayWeightRow> {
    let weights = day_weights(layout);
    let fractions = track_fractions(&weights);
    week.dates()
        .into_iter()
        .zip(weights.iter().zip(fractions))
        .enumerate()
        .map(|(i, (date, (w, fraction)))| DayWeightRow {
            date,
            day: i as u8,
            show: w.show,
            weight: w.weight,
            fraction,
        })
        .collect()
}

/// Every item the engine refused.
pub fn rejected_rows(week: &Week, layout: &WeekLayout) -> Vec<RejectedRow> {
    layout
        .iter_rejected()
        .map(|r| RejectedRow {
            date:          match r.error {
                LayoutError::DayOutOfRange { .. } => None,
                LayoutError::InvalidInterval { .. } => Some(week.date_of(r.item.day)),
            },
            item_id:       r.item.id.0,
            label:         r.item.label.clone(),
            start_minutes: r.item.start_minutes,
            end_minutes:   r.item.end_minutes,
            reason:        r.error.to_string(),
        })
        .collect()
}

/// Write `layout` through `writer` and finish it.
pub fn export_week<W: OutputWriter>(
    writer: &mut W,
    week:   &Week,
    layout: &WeekLayout,
    grid:   &GridConfig,
) -> OutputResult<ExportSummary> {
    let placements = placement_rows(week, layout, grid);
    let weights = day_weight_rows(week, layout);
    let rejected = rejected_rows(week, layout);

    writer.write_placements(&placements)?;
    writer.write_day_weights(&weights)?;
    writer.write_rejected(&rejected)?;
    writer.finish()?;

    let summary = ExportSummary {
        placements:  placements.len(),
        day_weights: weights.len(),
        rejected:    rejected.len(),
    };
    tracing::info!(
        week = %week,
        placements = summary.placements,
        rejected = summary.rejected,
        "exported week layout"
    );
    Ok(summary)
}
