//! week-view: lay out one or more weeks of a room schedule.
//!
//! Loads recurring classes and one-off events from a CSV file (or the
//! built-in demo schedule), expands them into the displayed week, packs
//! overlapping items into columns, prints the result, and optionally exports
//! it as CSV (or SQLite with the `sqlite` feature).
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=debug week-view --week 2026-10-15`).

mod config;
mod demo;
mod render;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rg_core::{GridConfig, ItemKind, RoomId, Week};
use rg_layout::{LayoutMemo, WeekLayout};
use rg_output::{CsvWriter, export_week};
use rg_schedule::{ScheduleEntry, ScheduleFilter, expand_week, load_entries_csv, load_entries_reader};

use config::load_grid_config;
use demo::DEMO_SCHEDULE_CSV;
use render::render_week;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum KindArg {
    Class,
    Event,
}

impl From<KindArg> for ItemKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Class => ItemKind::Class,
            KindArg::Event => ItemKind::Event,
        }
    }
}

/// Weekly room-schedule layout: overlap-free column packing per day.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Schedule CSV (kind,id,title,room,weekday,date,start,end,active_from,active_until).
    /// Uses a built-in demo schedule when omitted.
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Grid configuration TOML.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Any date inside the first week to show (YYYY-MM-DD).  Defaults to today.
    #[arg(long)]
    week: Option<NaiveDate>,

    /// Number of consecutive weeks to lay out.
    #[arg(long, default_value_t = 1)]
    weeks: u32,

    /// Only show entries in this room.
    #[arg(long)]
    room: Option<u16>,

    /// Only show classes or only events.
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Export each week's layout into `<out>/<week start>/`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Export to SQLite instead of CSV.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // 1. Grid configuration.
    let grid = load_grid_config(args.config.as_deref())?;

    // 2. Schedule entries.
    let entries = load_entries(args.schedule.as_deref())?;

    // 3. Filter.
    let mut filter = ScheduleFilter::all();
    if let Some(room) = args.room {
        filter = filter.room(RoomId(room));
    }
    if let Some(kind) = args.kind {
        filter = filter.kind(kind.into());
    }

    // 4. Lay out each requested week.  Weeks made only of recurring classes
    //    expand to identical items and are served from the memo.
    let first_date = args.week.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut week = Week::containing(first_date, grid.week_starts_on);
    let mut memo = LayoutMemo::new();

    #[cfg(feature = "sqlite")]
    let use_sqlite = args.sqlite;
    #[cfg(not(feature = "sqlite"))]
    let use_sqlite = false;

    for _ in 0..args.weeks.max(1) {
        let items = expand_week(&entries, &week, &filter);
        let flat: Vec<_> = items.iter().cloned().collect();
        let layout = memo.get_or_compute(&flat);

        println!("{}", render_week(&week, layout));

        if let Some(out) = &args.out {
            export(out, &week, layout, &grid, use_sqlite)?;
        }
        week = week.next();
    }

    tracing::debug!(hits = memo.hits(), misses = memo.misses(), "layout memo");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_entries(path: Option<&Path>) -> Result<Vec<ScheduleEntry>> {
    match path {
        Some(path) => load_entries_csv(path)
            .with_context(|| format!("failed to load schedule {}", path.display())),
        None => {
            tracing::info!("no --schedule given, using the built-in demo schedule");
            Ok(load_entries_reader(Cursor::new(DEMO_SCHEDULE_CSV))?)
        }
    }
}

fn export(
    out: &Path,
    week: &Week,
    layout: &WeekLayout,
    grid: &GridConfig,
    use_sqlite: bool,
) -> Result<()> {
    let dir = out.join(week.start.to_string());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    if use_sqlite {
        return export_sqlite(&dir, week, layout, grid);
    }
    let mut writer = CsvWriter::new(&dir)?;
    export_week(&mut writer, week, layout, grid)?;
    Ok(())
}

#[cfg(feature = "sqlite")]
fn export_sqlite(dir: &Path, week: &Week, layout: &WeekLayout, grid: &GridConfig) -> Result<()> {
    let mut writer = rg_output::SqliteWriter::new(dir)?;
    export_week(&mut writer, week, layout, grid)?;
    Ok(())
}

#[cfg(not(feature = "sqlite"))]
fn export_sqlite(_dir: &Path, _week: &Week, _layout: &WeekLayout, _grid: &GridConfig) -> Result<()> {
    anyhow::bail!("SQLite export needs the `sqlite` feature")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use rg_core::{DayIndex, GridConfig, Week};
    use rg_layout::layout_buckets;
    use rg_schedule::{ScheduleFilter, expand_week, load_entries_reader};

    use crate::demo::DEMO_SCHEDULE_CSV;

    #[test]
    fn demo_schedule_lays_out() {
        let entries = load_entries_reader(Cursor::new(DEMO_SCHEDULE_CSV)).unwrap();
        assert_eq!(entries.len(), 13);

        let week = Week { start: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap() };
        let items = expand_week(&entries, &week, &ScheduleFilter::all());
        let layout = layout_buckets(&items.days);

        // Monday: Ceramics 9-11, Choir 10-12, Guitar 11-12:30.
        let mon = layout.day(DayIndex(0));
        assert_eq!(mon.total_columns, 2);
        let cols: Vec<(&str, u32)> =
            mon.items.iter().map(|p| (p.item.label.as_str(), p.column_index)).collect();
        assert_eq!(cols, [("Ceramics", 0), ("Choir", 1), ("Guitar", 0)]);

        // Thursday: Theatre 16-18 vs Open day 10-16 and Poetry 15-17:30.
        assert_eq!(layout.day(DayIndex(3)).total_columns, 2);

        // Friday holds the swapped booking.
        let fri = layout.day(DayIndex(4));
        assert_eq!(fri.len(), 1);
        assert_eq!(fri.rejected.len(), 1);

        assert!(layout.day(DayIndex(6)).is_empty());
    }

    #[test]
    fn csv_export_goes_into_week_directory() {
        let entries = load_entries_reader(Cursor::new(DEMO_SCHEDULE_CSV)).unwrap();
        let week = Week { start: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap() };
        let items = expand_week(&entries, &week, &ScheduleFilter::all());
        let layout = layout_buckets(&items.days);
        let out = tempfile::tempdir().unwrap();

        super::export(out.path(), &week, &layout, &GridConfig::default(), false).unwrap();

        let dir = out.path().join("2026-10-12");
        assert!(dir.join("placements.csv").exists());
        assert!(dir.join("rejected.csv").exists());
    }

    #[cfg(not(feature = "sqlite"))]
    #[test]
    fn sqlite_export_needs_feature() {
        let week = Week { start: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap() };
        let out = tempfile::tempdir().unwrap();
        let layout = rg_layout::WeekLayout::empty();
        assert!(super::export(out.path(), &week, &layout, &GridConfig::default(), true).is_err());
    }
}
