//! Error taxonomy for loading the starting snapshot.
//!
//! Every failure aborts construction; callers are expected to treat any
//! `SetupError` as a fatal startup error.

use std::fmt;
use std::path::PathBuf;

use crate::board::TicketKind;

/// Points at the record that triggered an error: a source name (usually a
/// file path) and a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub source_name: String,
    pub line: usize,
}

impl Location {
    pub fn new(source_name: impl Into<String>, line: usize) -> Self {
        Location {
            source_name: source_name.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_name, self.line)
    }
}

/// Errors that can occur while building the board, players, or estimate.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("{what} must be empty before construction")]
    InvalidState { what: &'static str },

    #[error("could not open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading '{source_name}': {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}: expected {expected} lines but got {found}")]
    TruncatedInput {
        source_name: String,
        expected: usize,
        found: usize,
    },

    #[error("{at}: expected {expected}, got '{text}'")]
    MalformedInput {
        at: Location,
        expected: &'static str,
        text: String,
    },

    #[error("{at}: value {value} is outside {range}")]
    OutOfRange {
        at: Location,
        value: i64,
        range: String,
    },

    #[error("{kind} tickets never tag an edge")]
    EdgeKind { kind: TicketKind },

    #[error("invalid layout file '{}': {source}", .path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SetupError {
    /// Short machine-friendly name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            SetupError::InvalidState { .. } => "invalid_state",
            SetupError::Io { .. } | SetupError::Read { .. } => "io",
            SetupError::TruncatedInput { .. } => "truncated_input",
            SetupError::MalformedInput { .. } => "malformed_input",
            SetupError::OutOfRange { .. } => "out_of_range",
            SetupError::EdgeKind { .. } => "edge_kind",
            SetupError::Layout { .. } => "layout",
        }
    }
}
