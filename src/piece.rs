//! Pieces and their promotion state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Board;
use crate::core::{Side, Square};
use crate::movegen;

/// The eight kinds of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Rook,
    /// Diagonal slider (the bishop of standard shogi).
    Elephant,
    /// Forward slider (the lance).
    Spear,
    /// Forward jumper (the knight).
    Horse,
    GoldenGeneral,
    SilverGeneral,
    Pawn,
}

impl PieceKind {
    /// Returns an iterator over all kinds.
    pub fn iter() -> impl Iterator<Item = PieceKind> {
        [
            PieceKind::King,
            PieceKind::Rook,
            PieceKind::Elephant,
            PieceKind::Spear,
            PieceKind::Horse,
            PieceKind::GoldenGeneral,
            PieceKind::SilverGeneral,
            PieceKind::Pawn,
        ]
        .into_iter()
    }

    /// Returns true if a piece of this kind may be offered promotion.
    pub fn can_promote(self) -> bool {
        !matches!(self, PieceKind::King | PieceKind::GoldenGeneral)
    }

    /// Returns the single-letter SFEN symbol in uppercase.
    pub fn to_sfen_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Elephant => 'B',
            PieceKind::Spear => 'L',
            PieceKind::Horse => 'N',
            PieceKind::GoldenGeneral => 'G',
            PieceKind::SilverGeneral => 'S',
            PieceKind::Pawn => 'P',
        }
    }

    /// Returns the Japanese name, taking promotion into account.
    pub fn to_japanese(self, promotion: Promotion) -> &'static str {
        match (self, promotion) {
            (PieceKind::King, _) => "玉",
            (PieceKind::GoldenGeneral, _) => "金",
            (PieceKind::Rook, Promotion::Default) => "飛",
            (PieceKind::Rook, Promotion::Promoted) => "龍",
            (PieceKind::Elephant, Promotion::Default) => "角",
            (PieceKind::Elephant, Promotion::Promoted) => "馬",
            (PieceKind::Spear, Promotion::Default) => "香",
            (PieceKind::Spear, Promotion::Promoted) => "成香",
            (PieceKind::Horse, Promotion::Default) => "桂",
            (PieceKind::Horse, Promotion::Promoted) => "成桂",
            (PieceKind::SilverGeneral, Promotion::Default) => "銀",
            (PieceKind::SilverGeneral, Promotion::Promoted) => "成銀",
            (PieceKind::Pawn, Promotion::Default) => "歩",
            (PieceKind::Pawn, Promotion::Promoted) => "と",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Rook => "rook",
            PieceKind::Elephant => "elephant",
            PieceKind::Spear => "spear",
            PieceKind::Horse => "horse",
            PieceKind::GoldenGeneral => "golden general",
            PieceKind::SilverGeneral => "silver general",
            PieceKind::Pawn => "pawn",
        };
        write!(f, "{name}")
    }
}

/// Promotion state of a piece. The only transition is `Default` to `Promoted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Promotion {
    #[default]
    Default,
    Promoted,
}

impl Promotion {
    pub fn is_promoted(self) -> bool {
        self == Promotion::Promoted
    }
}

/// Stable identifier of a piece for the lifetime of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece either standing on a cell or waiting in a capture pool.
///
/// The owner is not stored here: on the board it is the side flag of the cell,
/// in a pool it is the side that holds the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) position: Square,
    pub(crate) captured: bool,
    pub(crate) checked: bool,
    pub(crate) promotion: Promotion,
}

impl Piece {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Last square the piece stood on. Stale while the piece is captured.
    pub fn position(&self) -> Square {
        self.position
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Informational only; nothing in the engine computes it.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn promotion(&self) -> Promotion {
        self.promotion
    }

    pub fn is_promoted(&self) -> bool {
        self.promotion.is_promoted()
    }

    /// Returns true if moving this piece onto a square of `row` must offer promotion.
    pub fn promotion_offered(&self, side: Side, row: u8) -> bool {
        self.kind.can_promote() && !self.is_promoted() && side.in_promotion_zone(row)
    }

    /// Returns every square this piece may move or be dropped to.
    ///
    /// A captured piece may be dropped onto any empty cell. A piece on the board
    /// follows the movement pattern of its kind and promotion state, stopping at
    /// the board edge and never landing on a piece of its own side.
    pub fn available_cells(&self, board: &Board) -> Vec<Square> {
        if self.captured {
            return Square::iter()
                .filter(|&sq| !board.cell_at(sq).is_occupied())
                .collect();
        }

        match board.cell_at(self.position).side() {
            Some(side) => movegen::candidates(board, self.position, self.kind, self.promotion, side),
            None => Vec::new(),
        }
    }

    /// Filters `cells` down to those holding a piece of the opposing side.
    pub fn check_captures(&self, board: &Board, cells: &[Square]) -> Vec<Square> {
        if self.captured {
            return Vec::new();
        }

        let own = match board.cell_at(self.position).side() {
            Some(side) => side,
            None => return Vec::new(),
        };

        cells
            .iter()
            .copied()
            .filter(|&sq| board.cell_at(sq).side() == Some(own.flip()))
            .collect()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_promoted() {
            write!(f, "+")?;
        }
        write!(f, "{}", self.kind.to_sfen_char())
    }
}
