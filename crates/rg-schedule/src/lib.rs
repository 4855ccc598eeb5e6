//! `rg-schedule` — schedule records, week expansion, and CSV loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`entry`]   | `RecurringClass`, `OneOffEvent`, `ScheduleEntry`          |
//! | [`filter`]  | `ScheduleFilter` (room / kind selection)                  |
//! | [`expand`]  | `expand_week`, `WeekItems`                                |
//! | [`loader`]  | `load_entries_csv`, `load_entries_reader`                 |
//! | [`error`]   | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Expansion model (summary)
//!
//! For a displayed [`Week`](rg_core::Week) with dates `d0..d6`:
//!
//! ```text
//! items[day] = [ normalise(entry, day) for entry in entries
//!                if filter.matches(entry) && entry.occurs_on(d[day]) ]
//! ```
//!
//! The resulting buckets are the input of the layout engine in `rg-layout`.

pub mod entry;
pub mod error;
pub mod expand;
pub mod filter;
pub mod loader;

#[cfg(test)]
mod tests;

pub use entry::{OneOffEvent, RecurringClass, ScheduleEntry};
pub use error::{ScheduleError, ScheduleResult};
pub use expand::{WeekItems, expand_week};
pub use filter::ScheduleFilter;
pub use loader::{load_entries_csv, load_entries_reader};
