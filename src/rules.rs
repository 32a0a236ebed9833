//! Board geometry and the standard starting layout.

use crate::core::Side;
use crate::piece::PieceKind;

/// Number of rows and of columns.
pub const BOARD_SIZE: u8 = 9;

/// Number of cells on the board.
pub const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Promotion zone depth (3 ranks from the far end).
pub const PROMOTION_ZONE_DEPTH: u8 = 3;

/// Back rank order from column 0 to column 8, identical for both sides.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Spear,
    PieceKind::Horse,
    PieceKind::SilverGeneral,
    PieceKind::GoldenGeneral,
    PieceKind::King,
    PieceKind::GoldenGeneral,
    PieceKind::SilverGeneral,
    PieceKind::Horse,
    PieceKind::Spear,
];

/// One piece of the starting layout: kind, owner, row and column.
pub type Placement = (PieceKind, Side, u8, u8);

/// Returns the standard starting layout, kings first.
///
/// Gote occupies rows 0-2 and sente rows 6-8. Each side has its rook on its
/// own right-hand side and its elephant on the left, seen from its own seat.
pub fn starting_layout() -> Vec<Placement> {
    let mut layout = Vec::with_capacity(40);

    layout.push((PieceKind::King, Side::Gote, 0, 4));
    layout.push((PieceKind::King, Side::Sente, 8, 4));

    for (side, row) in [(Side::Gote, 0), (Side::Sente, 8)] {
        for (column, kind) in BACK_RANK.iter().enumerate() {
            if *kind != PieceKind::King {
                layout.push((*kind, side, row, column as u8));
            }
        }
    }

    layout.push((PieceKind::Elephant, Side::Gote, 1, 7));
    layout.push((PieceKind::Elephant, Side::Sente, 7, 1));
    layout.push((PieceKind::Rook, Side::Gote, 1, 1));
    layout.push((PieceKind::Rook, Side::Sente, 7, 7));

    for (side, row) in [(Side::Gote, 2), (Side::Sente, 6)] {
        for column in 0..BOARD_SIZE {
            layout.push((PieceKind::Pawn, side, row, column));
        }
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_constants() {
        assert_eq!(BOARD_SIZE, 9);
        assert_eq!(NUM_CELLS, 81);
        assert_eq!(PROMOTION_ZONE_DEPTH, 3);
    }

    #[test]
    fn layout_is_balanced() {
        let layout = starting_layout();
        assert_eq!(40, layout.len());

        for side in Side::iter() {
            let count = |kind: PieceKind| {
                layout
                    .iter()
                    .filter(|p| p.0 == kind && p.1 == side)
                    .count()
            };
            assert_eq!(1, count(PieceKind::King));
            assert_eq!(1, count(PieceKind::Rook));
            assert_eq!(1, count(PieceKind::Elephant));
            assert_eq!(2, count(PieceKind::GoldenGeneral));
            assert_eq!(2, count(PieceKind::SilverGeneral));
            assert_eq!(2, count(PieceKind::Horse));
            assert_eq!(2, count(PieceKind::Spear));
            assert_eq!(9, count(PieceKind::Pawn));
        }
    }

    #[test]
    fn layout_has_no_overlaps() {
        let layout = starting_layout();
        let mut seen = std::collections::HashSet::new();
        for p in layout.iter() {
            assert!(seen.insert((p.2, p.3)), "duplicate placement at ({}, {})", p.2, p.3);
        }
    }

    #[test]
    fn layout_sides_keep_their_half() {
        for (_, side, row, _) in starting_layout() {
            match side {
                Side::Gote => assert!(row <= 2),
                Side::Sente => assert!(row >= 6),
            }
        }
    }
}
