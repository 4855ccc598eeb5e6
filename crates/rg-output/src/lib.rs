//! `rg-output` — layout export writers for the roomgrid scheduler.
//!
//! Two backends are provided, one behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                                          |
//! |-----------|-------------|--------------------------------------------------------|
//! | *(none)*  | CSV         | `placements.csv`, `day_weights.csv`, `rejected.csv`    |
//! | `sqlite`  | SQLite      | `layout.db`                                            |
//!
//! Both implement [`OutputWriter`] and are driven by [`export_week`], which
//! turns a `WeekLayout` into rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rg_output::{CsvWriter, export_week};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! let summary = export_week(&mut writer, &week, &layout, &grid)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{ExportSummary, day_weight_rows, export_week, placement_rows, rejected_rows};
pub use row::{DayWeightRow, PlacementRow, RejectedRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
