//! Plain-text rendering of a week layout.

use std::fmt::Write;

use chrono::Datelike;

use rg_core::{DayIndex, Week, format_hhmm};
use rg_layout::{WeekLayout, day_weights, grid_template_columns};

/// Render `layout` as a per-day listing with column assignments.
pub fn render_week(week: &Week, layout: &WeekLayout) -> String {
    let weights = day_weights(layout);
    let mut out = String::new();

    let _ = writeln!(out, "Week {week}");
    let _ = writeln!(out, "grid-template-columns: {}", grid_template_columns(&weights));

    for day in DayIndex::ALL {
        let date = week.date_of(day);
        let day_layout = layout.day(day);
        let _ = writeln!(
            out,
            "\n{} {}  [{} item(s), {} column(s)]",
            date.weekday(),
            date,
            day_layout.len(),
            day_layout.total_columns
        );
        for p in &day_layout.items {
            let room = p.item.room.map(|r| format!(" @ room {}", r.0)).unwrap_or_default();
            let _ = writeln!(
                out,
                "  {}-{}  col {}/{}  {:<6} {}{}",
                format_hhmm(p.item.start_minutes),
                format_hhmm(p.item.end_minutes),
                p.column_index,
                p.total_columns,
                p.item.kind.as_str(),
                p.item.label,
                room
            );
        }
    }

    let rejected: Vec<_> = layout.iter_rejected().collect();
    if !rejected.is_empty() {
        let _ = writeln!(out, "\nSkipped {} item(s):", rejected.len());
        for r in rejected {
            let _ = writeln!(out, "  {:?}: {}", r.item.label, r.error);
        }
    }
    out
}
