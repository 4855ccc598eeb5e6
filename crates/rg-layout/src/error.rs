use std::fmt;

use thiserror::Error;

use rg_core::{DayIndex, ItemId};

/// Why an interval was refused by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntervalFault {
    /// `start_minutes` or `end_minutes` is below zero.
    NegativeBound,
    /// `start_minutes > end_minutes`.
    StartAfterEnd,
}

impl fmt::Display for IntervalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntervalFault::NegativeBound => "negative bound",
            IntervalFault::StartAfterEnd => "start after end",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid interval for item {id}: {start}..{end} ({fault})")]
    InvalidInterval {
        id:    ItemId,
        start: i32,
        end:   i32,
        fault: IntervalFault,
    },

    #[error("item {id} has day {day} outside the displayed week")]
    DayOutOfRange { id: ItemId, day: DayIndex },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
