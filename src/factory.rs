//! Construction of pieces.

use crate::core::Square;
use crate::piece::{Piece, PieceId, PieceKind, Promotion};

/// Builds pieces and hands out their identifiers.
///
/// Identifiers are never reused within one factory, so a piece keeps the same
/// [`PieceId`] while it travels between cells and capture pools.
#[derive(Debug, Clone, Default)]
pub struct PieceFactory {
    next_id: u32,
}

impl PieceFactory {
    pub fn new() -> PieceFactory {
        Default::default()
    }

    /// Creates a piece of the given kind standing on `position`.
    ///
    /// The piece is not attached to any board; placing it is up to the caller.
    pub fn create(&mut self, kind: PieceKind, position: Square, promotion: Promotion) -> Piece {
        let id = PieceId(self.next_id);
        self.next_id += 1;

        Piece {
            id,
            kind,
            position,
            captured: false,
            checked: false,
            promotion,
        }
    }

    /// Number of pieces created so far.
    pub fn created(&self) -> u32 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_each_kind() {
        let mut factory = PieceFactory::new();
        let sq = Square::new(4, 4).unwrap();

        for kind in PieceKind::iter() {
            let piece = factory.create(kind, sq, Promotion::Default);
            assert_eq!(kind, piece.kind());
            assert_eq!(sq, piece.position());
            assert!(!piece.is_captured());
            assert!(!piece.is_checked());
            assert!(!piece.is_promoted());
        }

        assert_eq!(8, factory.created());
    }

    #[test]
    fn ids_are_unique() {
        let mut factory = PieceFactory::new();
        let sq = Square::new(0, 0).unwrap();

        let a = factory.create(PieceKind::Pawn, sq, Promotion::Default);
        let b = factory.create(PieceKind::Pawn, sq, Promotion::Default);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn initial_promotion_state_is_kept() {
        let mut factory = PieceFactory::new();
        let sq = Square::new(2, 2).unwrap();

        let piece = factory.create(PieceKind::Rook, sq, Promotion::Promoted);
        assert!(piece.is_promoted());
    }
}
