//! Builds a `Board` from the position count file and the four connection
//! streams.

use std::path::Path;

use log::{debug, info};

use super::adjacency::{Board, BoardBuilder, Edge};
use super::ticket::TicketKind;
use crate::error::{Location, SetupError};
use crate::input::{read_int, read_int_pairs};
use crate::layout::BoardFiles;
use crate::narrow::narrow_at;

/// Reads a single count from line 1 of `path` and narrows it.
pub(crate) fn read_count<T: crate::narrow::Unsigned>(path: &Path) -> Result<T, SetupError> {
    let value = read_int(path)?;
    narrow_at(value, || Location::new(path.display().to_string(), 1))
}

/// Reads exactly `count` `"from to"` records from `path` and adds each as an
/// edge tagged `kind`. Returns the number of edges added. Fails before
/// opening `path` if `kind` cannot tag an edge.
pub fn populate_board(
    builder: &mut BoardBuilder,
    path: &Path,
    count: u16,
    kind: TicketKind,
) -> Result<usize, SetupError> {
    if !kind.tags_edges() {
        return Err(SetupError::EdgeKind { kind });
    }
    let source_name = path.display().to_string();
    let pairs = read_int_pairs(path, usize::from(count))?;
    for (idx, &(from, to)) in pairs.iter().enumerate() {
        builder.connect(from, to, kind, || Location::new(source_name.as_str(), idx + 1))?;
    }
    debug!("{}: {} {} edge(s)", source_name, pairs.len(), kind);
    Ok(pairs.len())
}

impl Board {
    /// Loads the board described by `files`.
    ///
    /// The position count file holds the number of usable positions; the
    /// board gets one more slot for the reserved position 0, and the sum must
    /// fit `u8`. All four connection counts are read (and must fit `u16`)
    /// before any edge file is opened. Streams are applied short, medium,
    /// long, then wildcard.
    pub fn load(files: &BoardFiles) -> Result<Board, SetupError> {
        let positions_path = files.path(&files.positions_count);
        let usable: u8 = read_count(&positions_path)?;
        let positions_count: u8 = narrow_at(i64::from(usable) + 1, || {
            Location::new(positions_path.display().to_string(), 1)
        })?;

        let mut streams = Vec::with_capacity(4);
        for (kind, stream) in files.connections() {
            let count: u16 = read_count(&files.path(&stream.count))?;
            streams.push((kind, files.path(&stream.map), count));
        }

        let mut builder = BoardBuilder::new(positions_count);
        for (kind, map_path, count) in &streams {
            populate_board(&mut builder, map_path, *count, *kind)?;
        }

        let board = builder.build();
        info!(
            "board loaded: {} slot(s), {} edge(s)",
            board.positions_count(),
            board.edge_count()
        );
        Ok(board)
    }
}

/// Loads the board into a caller-supplied adjacency list, which must be empty.
pub fn load_board_into(adjacency: &mut Vec<Vec<Edge>>, files: &BoardFiles) -> Result<(), SetupError> {
    if !adjacency.is_empty() {
        return Err(SetupError::InvalidState {
            what: "board adjacency list",
        });
    }
    *adjacency = Board::load(files)?.into_slots();
    Ok(())
}
