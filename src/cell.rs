//! Squares of the grid and their display marks.

use serde::{Deserialize, Serialize};

use crate::core::{Side, Square};
use crate::piece::Piece;

/// One square of the board together with its display marks.
///
/// `rotated` is the side flag of the occupant: `false` for a sente piece and
/// `true` for a gote piece. It keeps its last value after the cell is emptied
/// but is only meaningful while the cell is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    square: Square,
    occupant: Option<Piece>,
    rotated: bool,
    highlighted: bool,
    capturable: bool,
}

impl Cell {
    pub(crate) fn new(square: Square) -> Cell {
        Cell {
            square,
            occupant: None,
            rotated: false,
            highlighted: false,
            capturable: false,
        }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn occupant(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Owner of the occupant, `None` for an empty cell.
    pub fn side(&self) -> Option<Side> {
        self.occupant
            .as_ref()
            .map(|_| Side::from_rotated(self.rotated))
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_capturable(&self) -> bool {
        self.capturable
    }

    pub(crate) fn place(&mut self, mut piece: Piece, side: Side) {
        piece.position = self.square;
        piece.captured = false;
        self.occupant = Some(piece);
        self.rotated = side.is_rotated();
    }

    pub(crate) fn take(&mut self) -> Option<Piece> {
        self.occupant.take()
    }

    pub(crate) fn occupant_mut(&mut self) -> Option<&mut Piece> {
        self.occupant.as_mut()
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub(crate) fn set_capturable(&mut self, capturable: bool) {
        self.capturable = capturable;
    }

    pub(crate) fn clear(&mut self) {
        *self = Cell::new(self.square);
    }
}
