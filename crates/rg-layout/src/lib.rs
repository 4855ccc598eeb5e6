//! `rg-layout` — overlap-aware column packing for the weekly room grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`columns`]   | `assign_columns`, `layout_day`, `validate`, `DayLayout`     |
//! | [`week`]      | `layout_week`, `layout_buckets`, `WeekLayout`               |
//! | [`overlap`]   | `max_overlap` (largest number of simultaneous items)        |
//! | [`weights`]   | `day_weights`, `grid_template_columns`, `track_fractions`   |
//! | [`geometry`]  | `geometry`, `ItemGeometry`                                  |
//! | [`memo`]      | `LayoutMemo`                                                |
//! | [`item`]      | `PositionedItem`, `RejectedItem`                            |
//! | [`error`]     | `LayoutError`, `IntervalFault`, `LayoutResult<T>`           |
//!
//! # Guarantees (per day)
//!
//! ```text
//! overlaps(a, b)  ⇒  a.column_index != b.column_index
//! total_columns   =  max(column_index) + 1  =  max(1, max_overlap(items))
//! ```
//!
//! Every function here is pure: same input, same output, no I/O.

pub mod columns;
pub mod error;
pub mod geometry;
pub mod item;
pub mod memo;
pub mod overlap;
pub mod week;
pub mod weights;


pub use columns::{DayLayout, assign_columns, layout_day, validate};
pub use error::{IntervalFault, LayoutError, LayoutResult};
pub use geometry::{ItemGeometry, geometry};
pub use item::{PositionedItem, RejectedItem};
pub use memo::LayoutMemo;
pub use overlap::max_overlap;
pub use week::{WeekLayout, layout_buckets, layout_week};
pub use weights::{DayWeight, day_weights, grid_template_columns, track_fractions};
