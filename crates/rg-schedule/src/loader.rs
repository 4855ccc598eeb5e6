//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per schedule record.  `kind` selects which optional columns are
//! read: classes use `weekday`/`active_from`/`active_until`, events use
//! `date`.  Unused columns may be left empty.
//!
//! ```csv
//! kind,id,title,room,weekday,date,start,end,active_from,active_until
//! class,1,Ceramics,2,mon,,09:00,11:00,2026-09-01,2026-12-20
//! class,2,Choir,,wed,,18:30,20:00,2026-09-01,
//! event,10,Open day,1,,2026-10-15,10:00,16:00,,
//! ```
//!
//! | Column         | Format                                    |
//! |----------------|-------------------------------------------|
//! | `kind`         | `class` or `event`                        |
//! | `id`           | *u32*                                     |
//! | `room`         | *u16* or empty                            |
//! | `weekday`      | `mon` … `sun` (any chrono weekday name)   |
//! | `date`, `active_*` | `YYYY-MM-DD`                          |
//! | `start`, `end` | `HH:MM`                                   |
//!
//! A class without `active_from` is active from the beginning of time.
//! Intervals are not sanity-checked here: a row with `start > end` loads
//! fine and is rejected later, per item, by the layout engine.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use rg_core::{EntryId, RoomId, parse_hhmm};

use crate::{OneOffEvent, RecurringClass, ScheduleEntry, ScheduleError, ScheduleResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EntryRecord {
    kind:         String,
    id:           u32,
    title:        String,
    room:         Option<u16>,
    weekday:      Option<String>,
    date:         Option<String>,
    start:        String,
    end:          String,
    active_from:  Option<String>,
    active_until: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load schedule entries from a CSV file.
pub fn load_entries_csv(path: &Path) -> ScheduleResult<Vec<ScheduleEntry>> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    let entries = load_entries_reader(file)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded schedule");
    Ok(entries)
}

/// Like [`load_entries_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded schedules.
pub fn load_entries_reader<R: Read>(reader: R) -> ScheduleResult<Vec<ScheduleEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| ScheduleError::Parse { line: 1, msg: e.to_string() })?
        .clone();

    let mut entries = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| ScheduleError::Parse {
            line: e.position().map_or(0, |p| p.line()),
            msg:  e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| p.line());
        let row: EntryRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| ScheduleError::Parse { line, msg: e.to_string() })?;
        entries.push(parse_entry(row).map_err(|msg| ScheduleError::Parse { line, msg })?);
    }
    Ok(entries)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_entry(row: EntryRecord) -> Result<ScheduleEntry, String> {
    let start = parse_hhmm(&row.start).map_err(|e| e.to_string())?;
    let end = parse_hhmm(&row.end).map_err(|e| e.to_string())?;
    let id = EntryId(row.id);
    let room = row.room.map(RoomId);

    match row.kind.to_ascii_lowercase().as_str() {
        "class" => {
            let weekday = row
                .weekday
                .as_deref()
                .ok_or_else(|| "class row is missing `weekday`".to_owned())
                .and_then(parse_weekday)?;
            let active_from = match row.active_from.as_deref() {
                Some(s) => parse_date(s)?,
                None => NaiveDate::MIN,
            };
            let active_until = row.active_until.as_deref().map(parse_date).transpose()?;
            Ok(ScheduleEntry::Recurring(RecurringClass {
                id,
                title: row.title,
                room,
                weekday,
                start,
                end,
                active_from,
                active_until,
            }))
        }
        "event" => {
            let date = row
                .date
                .as_deref()
                .ok_or_else(|| "event row is missing `date`".to_owned())
                .and_then(parse_date)?;
            Ok(ScheduleEntry::OneOff(OneOffEvent { id, title: row.title, room, date, start, end }))
        }
        other => Err(format!("invalid kind {other:?}: expected \"class\" or \"event\"")),
    }
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("invalid weekday {s:?}: expected mon..sun"))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date {s:?}: {e}"))
}
