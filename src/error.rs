//! Error types shared across the crate

use thiserror::Error;

use crate::board::Pos;

/// Rejected placement on a [`crate::Board`]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0:?} is outside the playable region")]
    OffBoard(Pos),
    #[error("{0:?} is already occupied")]
    Occupied(Pos),
}

/// Failure to produce a move
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no empty cell left on the board")]
    NoLegalMove,
}

/// Malformed textual coordinate
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("coordinate must be two letters, got {0:?}")]
    Length(String),
    #[error("letter {0:?} is outside a..o")]
    OutOfRange(char),
}

/// Rejected action in the game loop
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
