//! Players, the hidden-evader estimate, and whole-game initialization.

pub mod difference;
pub mod estimate;
pub mod game;
pub mod players;

pub use difference::{subtract, subtract_into};
pub use estimate::Estimate;
pub use game::{initialize_game, GameMode, GameSetup};
pub use players::{load_evader, load_pursuers, Player};
