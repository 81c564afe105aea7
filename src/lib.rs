//! Pursuit game setup library.
//!
//! Loads the starting snapshot of a pursuit board game (one evader, several
//! pursuers on a multi-modal transport graph) from flat text files, and
//! derives the set of positions a hidden evader may have started from.

pub mod board;
pub mod error;
pub mod input;
pub mod layout;
pub mod narrow;
pub mod setup;

pub use error::{Location, SetupError};
