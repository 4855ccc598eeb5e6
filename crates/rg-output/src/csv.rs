//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `placements.csv`
//! - `day_weights.csv`
//! - `rejected.csv`
//!
//! Times are written as `HH:MM`, booleans as `0`/`1`, missing rooms and
//! dates as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use rg_core::format_hhmm;

use crate::writer::OutputWriter;
use crate::{DayWeightRow, OutputResult, PlacementRow, RejectedRow};

/// Writes a week layout to three CSV files.
pub struct CsvWriter {
    placements: Writer<File>,
    weights:    Writer<File>,
    rejected:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut placements = Writer::from_path(dir.join("placements.csv"))?;
        placements.write_record([
            "date",
            "day",
            "item_id",
            "kind",
            "label",
            "room",
            "start",
            "end",
            "column_index",
            "total_columns",
            "left",
            "width",
        ])?;

        let mut weights = Writer::from_path(dir.join("day_weights.csv"))?;
        weights.write_record(["date", "day", "show", "weight", "fraction"])?;

        let mut rejected = Writer::from_path(dir.join("rejected.csv"))?;
        rejected.write_record(["date", "item_id", "label", "start", "end", "reason"])?;

        Ok(Self { placements, weights, rejected, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_placements(&mut self, rows: &[PlacementRow]) -> OutputResult<()> {
        for row in rows {
            self.placements.write_record(&[
                row.date.to_string(),
                row.day.to_string(),
                row.item_id.to_string(),
                row.kind.as_str().to_owned(),
                row.label.clone(),
                row.room.map(|r| r.to_string()).unwrap_or_default(),
                format_hhmm(row.start_minutes),
                format_hhmm(row.end_minutes),
                row.column_index.to_string(),
                row.total_columns.to_string(),
                format!("{:.4}", row.left),
                format!("{:.4}", row.width),
            ])?;
        }
        Ok(())
    }

    fn write_day_weights(&mut self, rows: &[DayWeightRow]) -> OutputResult<()> {
        for row in rows {
            self.weights.write_record(&[
                row.date.to_string(),
                row.day.to_string(),
                (row.show as u8).to_string(),
                row.weight.to_string(),
                format!("{:.4}", row.fraction),
            ])?;
        }
        Ok(())
    }

    fn write_rejected(&mut self, rows: &[RejectedRow]) -> OutputResult<()> {
        for row in rows {
            self.rejected.write_record(&[
                row.date.map(|d| d.to_string()).unwrap_or_default(),
                row.item_id.to_string(),
                row.label.clone(),
                format_hhmm(row.start_minutes),
                format_hhmm(row.end_minutes),
                row.reason.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.placements.flush()?;
        self.weights.flush()?;
        self.rejected.flush()?;
        Ok(())
    }
}
