//! `LayoutMemo`: skip recomputation when the week's items have not changed.
//!
//! Views recompute the layout on every navigation, filter change, or data
//! refresh, and many of those triggers leave the item set untouched.  The
//! memo keys the last result on an `FxHasher` digest of the input slice and
//! confirms a digest match with a full equality check, so a hash collision
//! can only cost a recomputation, never a stale layout.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use rg_core::ScheduleItem;

use crate::{WeekLayout, layout_week};

/// Single-entry cache in front of [`layout_week`].
#[derive(Default)]
pub struct LayoutMemo {
    cached: Option<Cached>,
    hits:   u64,
    misses: u64,
}

struct Cached {
    key:    u64,
    input:  Vec<ScheduleItem>,
    layout: WeekLayout,
}

impl LayoutMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the layout for `items`, recomputing only if they differ from
    /// the previous call's input.
    pub fn get_or_compute(&mut self, items: &[ScheduleItem]) -> &WeekLayout {
        let key = digest(items);
        match self.cached.take() {
            Some(c) if c.key == key && c.input == items => {
                self.hits += 1;
                &self.cached.insert(c).layout
            }
            _ => {
                self.misses += 1;
                let layout = layout_week(items);
                &self.cached.insert(Cached { key, input: items.to_vec(), layout }).layout
            }
        }
    }

    /// Drop the cached layout.
    pub fn clear(&mut self) {
        self.cached = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

fn digest(items: &[ScheduleItem]) -> u64 {
    let mut hasher = FxHasher::default();
    items.hash(&mut hasher);
    hasher.finish()
}
