//! `rg-core` — foundational types for the `roomgrid` weekly room scheduler.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ItemId`, `EntryId`, `RoomId`                         |
//! | [`time`]        | `DayIndex`, `Week`, `parse_hhmm`, `format_hhmm`       |
//! | [`item`]        | `ScheduleItem`, `ItemKind` (layout engine input)      |
//! | [`config`]      | `GridConfig`                                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `GridConfig` from TOML.                   |

pub mod config;
pub mod error;
pub mod ids;
pub mod item;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GridConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{EntryId, ItemId, RoomId};
pub use item::{ItemKind, ScheduleItem};
pub use time::{DayIndex, MINUTES_PER_DAY, Week, format_hhmm, parse_hhmm};
