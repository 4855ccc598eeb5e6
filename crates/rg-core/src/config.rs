//! Grid configuration.

use chrono::Weekday;

use crate::{CoreError, CoreResult, MINUTES_PER_DAY};

/// Display settings for the weekly grid.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// week expansion and geometry.  Missing keys fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// First visible minute of each day track.  Default: 08:00.
    pub day_start_minutes: i32,

    /// End of the visible window (exclusive).  Default: 22:00.
    pub day_end_minutes: i32,

    /// Weekday shown in the first column.  Default: Monday.
    pub week_starts_on: Weekday,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            day_start_minutes: 8 * 60,
            day_end_minutes:   22 * 60,
            week_starts_on:    Weekday::Mon,
        }
    }
}

impl GridConfig {
    /// Length of the visible window in minutes.
    #[inline]
    pub fn visible_minutes(&self) -> i32 {
        self.day_end_minutes - self.day_start_minutes
    }

    /// Check that the visible window is a non-empty range inside one day.
    pub fn validate(&self) -> CoreResult<()> {
        if self.day_start_minutes < 0 || self.day_end_minutes > MINUTES_PER_DAY {
            return Err(CoreError::Config(format!(
                "visible window {}..{} must lie within 0..{MINUTES_PER_DAY}",
                self.day_start_minutes, self.day_end_minutes
            )));
        }
        if self.day_start_minutes >= self.day_end_minutes {
            return Err(CoreError::Config(format!(
                "day_start_minutes ({}) must be before day_end_minutes ({})",
                self.day_start_minutes, self.day_end_minutes
            )));
        }
        Ok(())
    }
}
