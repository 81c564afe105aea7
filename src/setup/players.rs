//! Evader and pursuer starting state.

use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::board::position::player_position;
use crate::board::{Position, TicketCounts, TICKET_KIND_COUNT};
use crate::error::{Location, SetupError};
use crate::input::{read_int, read_ints};
use crate::layout::GameFiles;
use crate::narrow::narrow_at;

/// A player's starting position and ticket inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    pub position: Position,
    pub tickets: TicketCounts,
}

impl Player {
    pub const fn new(position: Position, tickets: TicketCounts) -> Self {
        Player { position, tickets }
    }
}

/// Reads one count per ticket kind from `path`.
pub(crate) fn read_tickets(path: &Path) -> Result<TicketCounts, SetupError> {
    let records = read_ints(path, TICKET_KIND_COUNT)?;
    TicketCounts::from_records(&records, &path.display().to_string())
}

/// Reads `count` positions from `path`, each in `[1, positions_count)`.
pub(crate) fn read_positions(path: &Path, count: u8, positions_count: u8) -> Result<Vec<Position>, SetupError> {
    let source_name = path.display().to_string();
    read_ints(path, usize::from(count))?
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            player_position(value, positions_count, || Location::new(source_name.as_str(), idx + 1))
        })
        .collect()
}

/// Number of pursuers: the declared player total minus the evader.
fn pursuer_count(files: &GameFiles) -> Result<u8, SetupError> {
    let path = files.path(&files.players_count);
    let total = read_int(&path)?;
    narrow_at(total.saturating_sub(1), || Location::new(path.display().to_string(), 1))
}

/// Loads the evader: one starting position, then one count per ticket kind.
pub fn load_evader(files: &GameFiles, positions_count: u8) -> Result<Player, SetupError> {
    let position_path = files.path(&files.evader_position);
    let value = read_int(&position_path)?;
    let position = player_position(value, positions_count, || {
        Location::new(position_path.display().to_string(), 1)
    })?;
    let tickets = read_tickets(&files.path(&files.evader_tickets))?;

    info!("evader starts at {} with {} ticket(s)", position, tickets.total());
    Ok(Player::new(position, tickets))
}

/// Loads every pursuer. All pursuers share one ticket template; each gets
/// its own copy. Duplicate starting positions are accepted.
pub fn load_pursuers(files: &GameFiles, positions_count: u8) -> Result<Vec<Player>, SetupError> {
    let count = pursuer_count(files)?;
    let tickets = read_tickets(&files.path(&files.pursuer_tickets))?;
    let positions = read_positions(&files.path(&files.pursuer_positions), count, positions_count)?;

    let mut seen = positions.clone();
    seen.sort_unstable();
    if seen.windows(2).any(|w| w[0] == w[1]) {
        warn!("several pursuers share a starting position: {:?}", positions);
    }

    info!("{} pursuer(s) loaded", positions.len());
    Ok(positions
        .into_iter()
        .map(|position| Player::new(position, tickets))
        .collect())
}
