//! Public knowledge about a hidden evader.
//!
//! Ticket counts are public before the first move, so they are loaded
//! exactly. The position is not: the estimate holds every sanctioned starting
//! position that no pursuer occupies.

use log::info;
use serde::Serialize;

use super::difference::subtract;
use super::players::{read_positions, read_tickets, Player};
use crate::board::loader::read_count;
use crate::board::position::player_position;
use crate::board::{Position, TicketCounts};
use crate::error::{Location, SetupError};
use crate::layout::{BoardFiles, GameFiles};

/// The hidden evader's known tickets and possible positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub tickets: TicketCounts,
    positions: Vec<Position>,
}

impl Estimate {
    /// `general - pursuers`, sorted and without duplicates.
    pub fn from_parts(tickets: TicketCounts, general: Vec<Position>, pursuers: Vec<Position>) -> Self {
        let mut positions = subtract(general, pursuers);
        positions.dedup();
        Estimate { tickets, positions }
    }

    /// Loads the evader's tickets and the sanctioned starting positions, and
    /// rules out every position held by one of the already loaded `pursuers`.
    /// Every position is validated against `positions_count`.
    pub fn load(
        board: &BoardFiles,
        game: &GameFiles,
        pursuers: &[Player],
        positions_count: u8,
    ) -> Result<Self, SetupError> {
        let tickets = read_tickets(&game.path(&game.evader_tickets))?;

        let count: u8 = read_count(&board.path(&board.starting_positions_count))?;
        let general = read_positions(&board.path(&board.starting_positions), count, positions_count)?;
        let pursuers = pursuers
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                player_position(i64::from(p.position.get()), positions_count, || {
                    Location::new("pursuer", idx + 1)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let estimate = Estimate::from_parts(tickets, general, pursuers);
        info!(
            "estimate: {} possible starting position(s) out of {}",
            estimate.len(),
            count
        );
        Ok(estimate)
    }

    /// Possible positions, ascending.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
