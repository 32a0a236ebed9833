//! Two-phase promotion protocol.
//!
//! A move that ends in the promotion zone is applied right away and leaves a
//! pending decision behind. The caller answers it with
//! [`Board::resolve_promotion`](crate::Board::resolve_promotion), passing back
//! the token it was handed, or lets it lapse.

use std::fmt;

use crate::core::Square;
use crate::piece::{Piece, PieceId};
use crate::record::MoveRecord;

/// Identifies one pending promotion decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromotionToken {
    piece: PieceId,
    square: Square,
    serial: u64,
}

impl PromotionToken {
    pub(crate) fn new(piece: PieceId, square: Square, serial: u64) -> PromotionToken {
        PromotionToken {
            piece,
            square,
            serial,
        }
    }

    /// The piece waiting for the decision.
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    /// The square the piece landed on.
    pub fn square(&self) -> Square {
        self.square
    }
}

impl fmt::Display for PromotionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.piece, self.square)
    }
}

/// A decision the board is waiting for, with the move that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPromotion {
    pub(crate) token: PromotionToken,
    pub(crate) record: MoveRecord,
}

impl PendingPromotion {
    pub fn token(&self) -> PromotionToken {
        self.token
    }

    /// The move as applied so far, without promotion.
    pub fn record(&self) -> &MoveRecord {
        &self.record
    }
}

/// Answers the yes/no promotion question.
pub trait PromotionDecider {
    fn decide(&mut self, piece: &Piece, to: Square) -> bool;
}

impl<F> PromotionDecider for F
where
    F: FnMut(&Piece, Square) -> bool,
{
    fn decide(&mut self, piece: &Piece, to: Square) -> bool {
        self(piece, to)
    }
}

/// Accepts every promotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPromote;

impl PromotionDecider for AlwaysPromote {
    fn decide(&mut self, _: &Piece, _: Square) -> bool {
        true
    }
}

/// Declines every promotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverPromote;

impl PromotionDecider for NeverPromote {
    fn decide(&mut self, _: &Piece, _: Square) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::PieceFactory;
    use crate::piece::{PieceKind, Promotion};

    #[test]
    fn closures_decide() {
        let mut factory = PieceFactory::new();
        let sq = Square::new(0, 2).unwrap();
        let silver = factory.create(PieceKind::SilverGeneral, sq, Promotion::Default);

        let mut asked = 0;
        let mut decider = |piece: &Piece, to: Square| {
            asked += 1;
            piece.kind() == PieceKind::SilverGeneral && to.row() == 0
        };
        assert!(decider.decide(&silver, sq));
        assert!(!decider.decide(&silver, Square::new(1, 2).unwrap()));
        assert_eq!(2, asked);

        assert!(AlwaysPromote.decide(&silver, sq));
        assert!(!NeverPromote.decide(&silver, sq));
    }

    #[test]
    fn token_display() {
        let token = PromotionToken::new(PieceId(7), Square::new(0, 2).unwrap(), 1);
        assert_eq!("#7@7a", token.to_string());
    }
}
