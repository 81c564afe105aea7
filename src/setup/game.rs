//! Whole-game initialization.
//!
//! Builds the board first; its slot count is what every player and estimate
//! position is validated against. Which of the evader and the estimate get
//! loaded depends on whose view of the game is being set up.

use std::fmt;
use std::str::FromStr;

use log::{info, warn};
use serde::Serialize;

use super::estimate::Estimate;
use super::players::{load_evader, load_pursuers, Player};
use crate::board::Board;
use crate::error::SetupError;
use crate::layout::DataLayout;

/// Which parts of the starting snapshot to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Evader plays: board, evader, pursuers.
    Evader,
    /// Pursuers play and the evader is hidden: board, pursuers, estimate.
    Pursuers,
    /// Board, evader, pursuers, and estimate.
    Full,
}

impl GameMode {
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Evader => "evader",
            GameMode::Pursuers => "pursuers",
            GameMode::Full => "full",
        }
    }

    pub const fn loads_evader(self) -> bool {
        matches!(self, GameMode::Evader | GameMode::Full)
    }

    pub const fn loads_estimate(self) -> bool {
        matches!(self, GameMode::Pursuers | GameMode::Full)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "evader" => Ok(GameMode::Evader),
            "pursuers" => Ok(GameMode::Pursuers),
            "full" => Ok(GameMode::Full),
            other => Err(format!(
                "unknown game mode '{other}' (expected evader, pursuers or full)"
            )),
        }
    }
}

/// The starting snapshot handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSetup {
    pub board: Board,
    pub evader: Option<Player>,
    pub pursuers: Vec<Player>,
    pub estimate: Option<Estimate>,
}

/// Loads everything `mode` asks for from `layout`. The first failure aborts.
pub fn initialize_game(layout: &DataLayout, mode: GameMode) -> Result<GameSetup, SetupError> {
    let board = Board::load(&layout.board)?;
    let positions_count = board.positions_count();

    let evader = if mode.loads_evader() {
        Some(load_evader(&layout.game, positions_count)?)
    } else {
        None
    };
    let pursuers = load_pursuers(&layout.game, positions_count)?;
    let estimate = if mode.loads_estimate() {
        Some(Estimate::load(&layout.board, &layout.game, &pursuers, positions_count)?)
    } else {
        None
    };

    if let (Some(evader), Some(estimate)) = (&evader, &estimate) {
        if !estimate.contains(evader.position) {
            warn!(
                "evader starts at {}, which the estimate rules out",
                evader.position
            );
        }
    }

    info!("{} game initialized", mode);
    Ok(GameSetup {
        board,
        evader,
        pursuers,
        estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parts() {
        assert!(GameMode::Evader.loads_evader());
        assert!(!GameMode::Evader.loads_estimate());
        assert!(!GameMode::Pursuers.loads_evader());
        assert!(GameMode::Pursuers.loads_estimate());
        assert!(GameMode::Full.loads_evader());
        assert!(GameMode::Full.loads_estimate());
    }

    #[test]
    fn mode_name_roundtrip() {
        for mode in [GameMode::Evader, GameMode::Pursuers, GameMode::Full] {
            assert_eq!(mode.name().parse::<GameMode>(), Ok(mode));
        }
        assert!("detectives".parse::<GameMode>().is_err());
    }
}
