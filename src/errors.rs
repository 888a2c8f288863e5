//! Errors used throughout the draughts engine.
//!
//! The rules and game engines never fail: an illegal move is reported through
//! `MoveOutcome::Rejected`, not through this type. `DraughtsError` covers the
//! edges of the crate where untrusted input arrives, namely coordinates,
//! saved snapshots, and move-picking engines.

use thiserror::Error;

/// Unified error type for the draughts crate.
#[derive(Debug, Error)]
pub enum DraughtsError {
    /// Coordinates outside the 8x8 board.
    #[error("position ({row}, {col}) is outside the 8x8 board")]
    InvalidPosition { row: i8, col: i8 },

    /// A saved board string did not hold exactly 64 cells.
    #[error("board snapshot must contain 64 cells, found {0}")]
    InvalidBoardLength(usize),

    /// A saved board string contained a symbol other than `.`, `w`, `W`, `b`, `B`.
    #[error("invalid board symbol '{symbol}' at cell {index}")]
    InvalidBoardSymbol { index: usize, symbol: char },

    #[error("unknown player color: {0}")]
    UnknownPlayerColor(String),

    #[error("unknown game status: {0}")]
    UnknownGameStatus(String),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A move-picking engine failed to produce a move.
    #[error("engine failure: {0}")]
    Engine(String),
}

pub type DraughtsResult<T> = Result<T, DraughtsError>;
