//! Ticket kinds and per-player ticket inventories.
//!
//! The three transport kinds tag board edges. `Wildcard` also tags edges (the
//! fourth connection stream) but may be spent on any edge; `ExtraMove` is
//! never attached to an edge.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Location, SetupError};
use crate::narrow::narrow_at;

/// Number of ticket kinds; also the number of lines in a ticket file.
pub const TICKET_KIND_COUNT: usize = 5;

/// A kind of ticket. The discriminant is the line index in ticket files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TicketKind {
    ShortRange = 0,
    MediumRange = 1,
    LongRange = 2,
    Wildcard = 3,
    ExtraMove = 4,
}

/// All ticket kinds in file order.
pub const ALL_TICKET_KINDS: [TicketKind; TICKET_KIND_COUNT] = [
    TicketKind::ShortRange,
    TicketKind::MediumRange,
    TicketKind::LongRange,
    TicketKind::Wildcard,
    TicketKind::ExtraMove,
];

impl TicketKind {
    pub const fn name(self) -> &'static str {
        match self {
            TicketKind::ShortRange => "short_range",
            TicketKind::MediumRange => "medium_range",
            TicketKind::LongRange => "long_range",
            TicketKind::Wildcard => "wildcard",
            TicketKind::ExtraMove => "extra_move",
        }
    }

    pub fn from_name(name: &str) -> Option<TicketKind> {
        ALL_TICKET_KINDS.iter().copied().find(|k| k.name() == name)
    }

    /// True for every kind a connection stream may tag an edge with.
    pub const fn tags_edges(self) -> bool {
        !matches!(self, TicketKind::ExtraMove)
    }

    /// True for the three kinds that model a distinct transport mode.
    pub const fn is_transport(self) -> bool {
        matches!(
            self,
            TicketKind::ShortRange | TicketKind::MediumRange | TicketKind::LongRange
        )
    }
}

impl fmt::Display for TicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ticket counts indexed by `TicketKind as usize`.
///
/// `Copy`, so every holder gets an independent inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TicketCounts([u8; TICKET_KIND_COUNT]);

impl TicketCounts {
    pub const fn new(counts: [u8; TICKET_KIND_COUNT]) -> Self {
        TicketCounts(counts)
    }

    /// Narrows exactly [`TICKET_KIND_COUNT`] raw records read from
    /// `source_name`, one per kind in file order.
    pub fn from_records(records: &[i64], source_name: &str) -> Result<Self, SetupError> {
        if records.len() != TICKET_KIND_COUNT {
            return Err(SetupError::TruncatedInput {
                source_name: source_name.to_string(),
                expected: TICKET_KIND_COUNT,
                found: records.len(),
            });
        }
        let mut counts = [0u8; TICKET_KIND_COUNT];
        for (idx, &value) in records.iter().enumerate() {
            counts[idx] = narrow_at(value, || Location::new(source_name, idx + 1))?;
        }
        Ok(TicketCounts(counts))
    }

    pub const fn get(&self, kind: TicketKind) -> u8 {
        self.0[kind as usize]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| u32::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TicketKind, u8)> + '_ {
        ALL_TICKET_KINDS.iter().map(move |&k| (k, self.get(k)))
    }
}

impl Index<TicketKind> for TicketCounts {
    type Output = u8;

    fn index(&self, kind: TicketKind) -> &u8 {
        &self.0[kind as usize]
    }
}

impl IndexMut<TicketKind> for TicketCounts {
    fn index_mut(&mut self, kind: TicketKind) -> &mut u8 {
        &mut self.0[kind as usize]
    }
}

impl Serialize for TicketCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TICKET_KIND_COUNT))?;
        for (kind, count) in self.iter() {
            map.serialize_entry(kind.name(), &count)?;
        }
        map.end()
    }
}
