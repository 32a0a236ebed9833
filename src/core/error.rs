//! Errors raised at the boundary of the rules engine.

use thiserror::Error;

use crate::core::side::Side;
use crate::core::square::Square;
use crate::piece::PieceId;

/// Errors for addressing cells of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is outside of the 9x9 board")]
    OutOfBounds { row: u8, column: u8 },
}

/// Errors for selecting, moving and promoting pieces.
///
/// Every variant is returned before any board state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is not being played")]
    GameOver,
    #[error("no cell or captured piece is selected")]
    NothingSelected,
    #[error("there is no piece at {0}")]
    EmptyCell(Square),
    #[error("it is {0}'s turn")]
    NotYourTurn(Side),
    #[error("piece {0} is not in the capture pool of {1}")]
    NotInPool(PieceId, Side),
    #[error("{0} is not one of the displayed destinations")]
    NotHighlighted(Square),
    #[error("the selected piece cannot move to {0}")]
    IllegalTarget(Square),
    #[error("{0} is already occupied")]
    Occupied(Square),
    #[error("{0} already has a king")]
    KingAlreadyPlaced(Side),
    #[error("there is no promotion decision waiting")]
    NoPendingPromotion,
    #[error("the promotion token does not match the waiting decision")]
    StalePromotion,
    #[error(transparent)]
    OutOfBounds(#[from] BoardError),
}

/// Errors reported by a stats store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("stats storage is unavailable: {0}")]
    Unavailable(String),
}
