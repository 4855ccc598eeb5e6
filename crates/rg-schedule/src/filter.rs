//! `ScheduleFilter`: room/kind selection applied before expansion.

use rg_core::{ItemKind, RoomId};

use crate::ScheduleEntry;

/// Restricts which entries are expanded into a week.
///
/// The default filter matches everything.  A `room` filter never matches
/// entries without a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub room:  Option<RoomId>,
    pub kind:  Option<ItemKind>,
}

impl ScheduleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn room(mut self, room: RoomId) -> Self {
        self.room = Some(room);
        self
    }

    pub fn kind(mut self, kind: ItemKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        self.room.is_none_or(|r| entry.room() == Some(r))
            && self.kind.is_none_or(|k| entry.kind() == k)
    }
}
