//! Rejection reasons and engine errors.

use thiserror::Error;

use crate::constants::{MAX_SIZE, MIN_SIZE};

/// Why a placement or pass was refused. The game is unchanged after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Point lies outside the board
    #[error("illegal move: point is off the board")]
    OutOfBounds,
    /// Point is not empty
    #[error("illegal move: point not empty")]
    Occupied,
    /// Move would recreate the retained previous position
    #[error("illegal move: retakes ko")]
    KoViolation,
    /// The other player is to move
    #[error("illegal move: not this player's turn")]
    OutOfTurn,
    /// Two consecutive passes already ended the game
    #[error("illegal move: game is over")]
    GameOver,
}

/// Misuse of the engine that is not a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unacceptable size {0}, expected {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(usize),
    #[error("game has not ended")]
    NotEnded,
}
