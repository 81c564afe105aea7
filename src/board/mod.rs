//! Board representation.
//!
//! Contains positions, ticket kinds, the adjacency graph, and the loader that
//! builds it from connection files.

pub mod adjacency;
pub mod loader;
pub mod position;
pub mod ticket;

pub use adjacency::{Board, BoardBuilder, Edge};
pub use loader::{load_board_into, populate_board};
pub use position::{Position, RESERVED_POSITION};
pub use ticket::{TicketCounts, TicketKind, ALL_TICKET_KINDS, TICKET_KIND_COUNT};
