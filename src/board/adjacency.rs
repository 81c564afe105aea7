//! Directed, multi-modal adjacency graph for the pursuit board.
//!
//! Each slot holds the outgoing edges of one position in insertion order.
//! Several edges may join the same two positions with different ticket
//! kinds, and nothing is mirrored: B->A exists only if the source data lists
//! it. Slot 0 is reserved and exists only so positions can index directly.

use serde::Serialize;

use super::position::{edge_endpoint, Position};
use super::ticket::TicketKind;
use crate::error::{Location, SetupError};

/// A single directed edge between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: Position,
    pub to: Position,
    pub kind: TicketKind,
}

/// The finished, read-only board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    positions_count: u8,
    slots: Vec<Vec<Edge>>,
}

impl Board {
    /// Number of slots, reserved slot 0 included.
    pub const fn positions_count(&self) -> u8 {
        self.positions_count
    }

    /// Outgoing edges of `pos`, in the order they were read.
    /// Returns an empty slice for positions off the board.
    pub fn edges_from(&self, pos: Position) -> &[Edge] {
        self.slots.get(pos.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All edges, grouped by source position.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.slots.iter().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn edge_count_of(&self, kind: TicketKind) -> usize {
        self.edges().filter(|e| e.kind == kind).count()
    }

    pub fn has_edge(&self, from: Position, to: Position, kind: TicketKind) -> bool {
        self.edges_from(from)
            .iter()
            .any(|e| e.to == to && e.kind == kind)
    }

    /// Distinct destinations reachable from `pos` over any one edge, sorted.
    pub fn neighbours(&self, pos: Position) -> Vec<Position> {
        let mut out: Vec<Position> = self.edges_from(pos).iter().map(|e| e.to).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Consumes the board, returning the raw adjacency list.
    pub fn into_slots(self) -> Vec<Vec<Edge>> {
        self.slots
    }
}

/// Accumulates edges into a board of fixed size.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    positions_count: u8,
    slots: Vec<Vec<Edge>>,
}

impl BoardBuilder {
    /// Starts an empty board with `positions_count` slots (reserved slot
    /// included).
    pub fn new(positions_count: u8) -> Self {
        BoardBuilder {
            positions_count,
            slots: vec![Vec::new(); usize::from(positions_count)],
        }
    }

    /// Adds the edge `from -> to` tagged `kind`. Both endpoints must narrow to
    /// a position and lie in `[0, positions_count)`; `at` names the record.
    /// `ExtraMove` never tags an edge and is rejected.
    pub fn connect(
        &mut self,
        from: i64,
        to: i64,
        kind: TicketKind,
        at: impl Fn() -> Location,
    ) -> Result<(), SetupError> {
        if !kind.tags_edges() {
            return Err(SetupError::EdgeKind { kind });
        }
        let from = edge_endpoint(from, self.slots.len(), &at)?;
        let to = edge_endpoint(to, self.slots.len(), &at)?;
        self.slots[from.index()].push(Edge { from, to, kind });
        Ok(())
    }

    pub fn build(self) -> Board {
        Board {
            positions_count: self.positions_count,
            slots: self.slots,
        }
    }
}
