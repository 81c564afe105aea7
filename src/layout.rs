//! Where every input file lives.
//!
//! A `DataLayout` is a resolved configuration object: two directories plus the
//! file name of each input inside them. Defaults follow the classic
//! `board-data/` + `game-data/` layout; a JSON layout file may override any
//! subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::TicketKind;
use crate::error::SetupError;

/// Count file and edge file of one connection stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionFiles {
    pub count: String,
    pub map: String,
}

impl ConnectionFiles {
    fn named(stem: &str) -> Self {
        ConnectionFiles {
            count: format!("num_of_{stem}_connections.txt"),
            map: format!("{stem}_map.txt"),
        }
    }
}

/// Board data: position count, the four connection streams, and the
/// sanctioned starting positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardFiles {
    pub dir: PathBuf,
    pub positions_count: String,
    pub short_range: ConnectionFiles,
    pub medium_range: ConnectionFiles,
    pub long_range: ConnectionFiles,
    /// Edges in this stream are tagged `Wildcard`, not a fourth transport mode.
    pub wildcard: ConnectionFiles,
    pub starting_positions_count: String,
    pub starting_positions: String,
}

impl Default for BoardFiles {
    fn default() -> Self {
        BoardFiles {
            dir: PathBuf::from("board-data"),
            positions_count: "num_of_positions.txt".to_string(),
            short_range: ConnectionFiles::named("taxi"),
            medium_range: ConnectionFiles::named("bus"),
            long_range: ConnectionFiles::named("underground"),
            wildcard: ConnectionFiles::named("ferry"),
            starting_positions_count: "num_of_general_starting_positions.txt".to_string(),
            starting_positions: "general_starting_positions.txt".to_string(),
        }
    }
}

impl BoardFiles {
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Connection streams in the order they are loaded.
    pub fn connections(&self) -> [(TicketKind, &ConnectionFiles); 4] {
        [
            (TicketKind::ShortRange, &self.short_range),
            (TicketKind::MediumRange, &self.medium_range),
            (TicketKind::LongRange, &self.long_range),
            (TicketKind::Wildcard, &self.wildcard),
        ]
    }
}

/// Game data: player count, evader start and tickets, pursuer template and
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameFiles {
    pub dir: PathBuf,
    /// Total players, evader included.
    pub players_count: String,
    pub evader_position: String,
    pub evader_tickets: String,
    pub pursuer_tickets: String,
    pub pursuer_positions: String,
}

impl Default for GameFiles {
    fn default() -> Self {
        GameFiles {
            dir: PathBuf::from("game-data"),
            players_count: "num_of_players.txt".to_string(),
            evader_position: "mr_x_starting_position.txt".to_string(),
            evader_tickets: "mr_x_tickets.txt".to_string(),
            pursuer_tickets: "detective_tickets.txt".to_string(),
            pursuer_positions: "detectives_starting_positions.txt".to_string(),
        }
    }
}

impl GameFiles {
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLayout {
    pub board: BoardFiles,
    pub game: GameFiles,
}

impl DataLayout {
    /// Default layout with both data directories under `root`.
    pub fn rooted(root: &Path) -> Self {
        DataLayout::default().rebased(root)
    }

    /// Resolves both directories against `root`. Absolute directories are
    /// left as they are.
    pub fn rebased(mut self, root: &Path) -> Self {
        self.board.dir = root.join(&self.board.dir);
        self.game.dir = root.join(&self.game.dir);
        self
    }
}

/// Loads a layout from a JSON file. Missing fields keep their defaults.
pub fn load_layout(path: &Path) -> Result<DataLayout, SetupError> {
    let data = fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_layout_from_str(&data).map_err(|source| SetupError::Layout {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_layout_from_str(json: &str) -> Result<DataLayout, serde_json::Error> {
    serde_json::from_str(json)
}
