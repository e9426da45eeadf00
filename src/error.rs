//! Error types for the rule engine, move selector and front-end config

use std::path::PathBuf;

use crate::board::{Pos, Stone};

/// A move the rules do not allow.
///
/// Returned to the caller as-is; the engine never corrects or skips a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cell ({row}, {col}) is outside the 15x15 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("cannot place an empty stone")]
    EmptyStone,

    #[error("the game is already over")]
    GameOver,

    #[error("it is {expected}'s turn, not {actual}'s")]
    OutOfTurn { expected: Stone, actual: Stone },
}

/// The move selector had nothing it could play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NoLegalMove {
    #[error("no legal move: the board is full")]
    BoardFull,

    #[error("no legal move: {0} is not a player")]
    NotAPlayer(Stone),
}

/// Any failure from the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error(transparent)]
    NoLegalMove(#[from] NoLegalMove),
}

/// Errors that can occur when loading the front-end configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
