//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `layout.db` file in the configured output directory with
//! three tables: `placements`, `day_weights`, and `rejected`.  Dates are
//! stored as ISO `YYYY-MM-DD` text, times as integer minutes.
//!
//! Opening a writer clears all three tables, so re-exporting into the same
//! directory replaces the previous export the same way `CsvWriter`
//! truncates its files.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DayWeightRow, OutputResult, PlacementRow, RejectedRow};

/// Writes a week layout to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `layout.db` in `dir`, initialise the schema and drop
    /// any rows left by an earlier export.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("layout.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS placements (
                 date          TEXT    NOT NULL,
                 day           INTEGER NOT NULL,
                 item_id       INTEGER NOT NULL,
                 kind          TEXT    NOT NULL,
                 label         TEXT    NOT NULL,
                 room          INTEGER,
                 start_minutes INTEGER NOT NULL,
                 end_minutes   INTEGER NOT NULL,
                 column_index  INTEGER NOT NULL,
                 total_columns INTEGER NOT NULL,
                 left_frac     REAL    NOT NULL,
                 width_frac    REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS day_weights (
                 date     TEXT    PRIMARY KEY,
                 day      INTEGER NOT NULL,
                 show     INTEGER NOT NULL,
                 weight   INTEGER NOT NULL,
                 fraction REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS rejected (
                 date          TEXT,
                 item_id       INTEGER NOT NULL,
                 label         TEXT    NOT NULL,
                 start_minutes INTEGER NOT NULL,
                 end_minutes   INTEGER NOT NULL,
                 reason        TEXT    NOT NULL
             );",
        )?;

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(
            "DELETE FROM placements;
             DELETE FROM day_weights;
             DELETE FROM rejected;",
        )?;
        tx.commit()?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_placements(&mut self, rows: &[PlacementRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO placements \
                 (date, day, item_id, kind, label, room, start_minutes, end_minutes, \
                  column_index, total_columns, left_frac, width_frac) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.date.to_string(),
                    row.day,
                    row.item_id,
                    row.kind.as_str(),
                    row.label,
                    row.room,
                    row.start_minutes,
                    row.end_minutes,
                    row.column_index,
                    row.total_columns,
                    row.left,
                    row.width,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_day_weights(&mut self, rows: &[DayWeightRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO day_weights (date, day, show, weight, fraction) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.date.to_string(),
                    row.day,
                    row.show as i64,
                    row.weight,
                    row.fraction,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_rejected(&mut self, rows: &[RejectedRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO rejected (date, item_id, label, start_minutes, end_minutes, reason) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.date.map(|d| d.to_string()),
                    row.item_id,
                    row.label,
                    row.start_minutes,
                    row.end_minutes,
                    row.reason,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
