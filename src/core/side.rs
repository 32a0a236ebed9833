//! The two players of a game.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::{BOARD_SIZE, PROMOTION_ZONE_DEPTH};

/// Represents each side of the game.
///
/// Sente moves first and advances towards row 0. Gote advances towards row 8
/// and its pieces sit on rotated cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Sente,
    Gote,
}

impl Side {
    /// Returns the opponent.
    #[must_use]
    pub fn flip(self) -> Side {
        match self {
            Side::Sente => Side::Gote,
            Side::Gote => Side::Sente,
        }
    }

    /// Converts the instance into the unique number for array indexing purpose.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns an iterator over both sides, sente first.
    pub fn iter() -> SideIter {
        SideIter { current: Some(Side::Sente) }
    }

    /// Row delta of a single step forward.
    pub fn forward(self) -> i8 {
        match self {
            Side::Sente => -1,
            Side::Gote => 1,
        }
    }

    /// The cell rotation flag used for this side's pieces.
    pub fn is_rotated(self) -> bool {
        self == Side::Gote
    }

    /// Maps a cell rotation flag back to the owning side.
    pub fn from_rotated(rotated: bool) -> Side {
        if rotated {
            Side::Gote
        } else {
            Side::Sente
        }
    }

    /// Returns true if `row` lies in the far third of the board for this side.
    pub fn in_promotion_zone(self, row: u8) -> bool {
        match self {
            Side::Sente => row < PROMOTION_ZONE_DEPTH,
            Side::Gote => row >= BOARD_SIZE - PROMOTION_ZONE_DEPTH && row < BOARD_SIZE,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Sente => write!(f, "sente"),
            Side::Gote => write!(f, "gote"),
        }
    }
}

/// This struct is created by the [`iter`] method on [`Side`].
///
/// [`iter`]: Side::iter
pub struct SideIter {
    current: Option<Side>,
}

impl Iterator for SideIter {
    type Item = Side;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current?;
        self.current = match cur {
            Side::Sente => Some(Side::Gote),
            Side::Gote => None,
        };
        Some(cur)
    }
}
