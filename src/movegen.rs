//! Movement strategies, one per piece kind.
//!
//! Offsets are written as `(row, column)` deltas from sente's point of view,
//! where forward is row - 1. Gote uses the same tables rotated by 180 degrees.
//! Every strategy returns destinations before any capture filtering: empty
//! squares and squares held by the opponent.

use crate::board::Board;
use crate::core::{Side, Square};
use crate::piece::{PieceKind, Promotion};

#[rustfmt::skip]
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[rustfmt::skip]
const GOLDEN_GENERAL_STEPS: [(i8, i8); 6] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
              (1, 0),
];

#[rustfmt::skip]
const SILVER_GENERAL_STEPS: [(i8, i8); 5] = [
    (-1, -1), (-1, 0), (-1, 1),
    (1, -1),           (1, 1),
];

const HORSE_JUMPS: [(i8, i8); 2] = [(-2, -1), (-2, 1)];

const PAWN_STEPS: [(i8, i8); 1] = [(-1, 0)];

const FORWARD: [(i8, i8); 1] = [(-1, 0)];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the destinations of a piece of `side` standing on `from`.
pub fn candidates(
    board: &Board,
    from: Square,
    kind: PieceKind,
    promotion: Promotion,
    side: Side,
) -> Vec<Square> {
    match (kind, promotion) {
        (PieceKind::King, _) => king_moves(board, from, side),
        (PieceKind::GoldenGeneral, _) => golden_general_moves(board, from, side),
        (PieceKind::Rook, Promotion::Default) => rook_moves(board, from, side),
        (PieceKind::Rook, Promotion::Promoted) => promoted_rook_moves(board, from, side),
        (PieceKind::Elephant, Promotion::Default) => elephant_moves(board, from, side),
        (PieceKind::Elephant, Promotion::Promoted) => promoted_elephant_moves(board, from, side),
        (PieceKind::Spear, Promotion::Default) => spear_moves(board, from, side),
        (PieceKind::Horse, Promotion::Default) => horse_moves(board, from, side),
        (PieceKind::SilverGeneral, Promotion::Default) => silver_general_moves(board, from, side),
        (PieceKind::Pawn, Promotion::Default) => pawn_moves(board, from, side),
        (
            PieceKind::Spear | PieceKind::Horse | PieceKind::SilverGeneral | PieceKind::Pawn,
            Promotion::Promoted,
        ) => golden_general_moves(board, from, side),
    }
}

pub fn king_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    steps(board, from, side, &KING_STEPS)
}

pub fn golden_general_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    steps(board, from, side, &GOLDEN_GENERAL_STEPS)
}

pub fn silver_general_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    steps(board, from, side, &SILVER_GENERAL_STEPS)
}

pub fn horse_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    steps(board, from, side, &HORSE_JUMPS)
}

pub fn pawn_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    steps(board, from, side, &PAWN_STEPS)
}

pub fn spear_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    slides(board, from, side, &FORWARD)
}

pub fn rook_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    slides(board, from, side, &ORTHOGONAL)
}

pub fn elephant_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    slides(board, from, side, &DIAGONAL)
}

/// Rook slides plus single diagonal steps.
pub fn promoted_rook_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    let mut moves = slides(board, from, side, &ORTHOGONAL);
    moves.extend(steps(board, from, side, &DIAGONAL));
    moves
}

/// Elephant slides plus single orthogonal steps.
pub fn promoted_elephant_moves(board: &Board, from: Square, side: Side) -> Vec<Square> {
    let mut moves = slides(board, from, side, &DIAGONAL);
    moves.extend(steps(board, from, side, &ORTHOGONAL));
    moves
}

fn orient(side: Side, (dr, dc): (i8, i8)) -> (i8, i8) {
    let sign = -side.forward();
    (dr * sign, dc * sign)
}

fn enterable(board: &Board, sq: Square, side: Side) -> bool {
    board.cell_at(sq).side() != Some(side)
}

fn steps(board: &Board, from: Square, side: Side, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&offset| {
            let (dr, dc) = orient(side, offset);
            from.shift(dr, dc)
        })
        .filter(|&to| enterable(board, to, side))
        .collect()
}

fn slides(board: &Board, from: Square, side: Side, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();

    for &direction in directions {
        let (dr, dc) = orient(side, direction);
        let mut current = from;

        while let Some(to) = current.shift(dr, dc) {
            match board.cell_at(to).side() {
                None => {
                    moves.push(to);
                    current = to;
                }
                Some(occupant) => {
                    if occupant != side {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sq(row: u8, column: u8) -> Square {
        Square::new(row, column).unwrap()
    }

    fn sorted(moves: Vec<Square>) -> Vec<(u8, u8)> {
        moves.into_iter().map(Square::coordinates).sorted().collect()
    }

    fn lone(kind: PieceKind, side: Side, at: Square) -> Board {
        let mut board = Board::new();
        board.reset_game_state();
        board.place_piece(kind, side, at).unwrap();
        board
    }

    #[test]
    fn king_in_the_middle() {
        let board = lone(PieceKind::King, Side::Sente, sq(4, 4));
        assert_eq!(8, king_moves(&board, sq(4, 4), Side::Sente).len());
    }

    #[test]
    fn king_in_the_corner() {
        let board = lone(PieceKind::King, Side::Gote, sq(0, 0));
        assert_eq!(
            vec![(0, 1), (1, 0), (1, 1)],
            sorted(king_moves(&board, sq(0, 0), Side::Gote))
        );
    }

    #[test]
    fn golden_general_is_mirrored() {
        let board = lone(PieceKind::GoldenGeneral, Side::Sente, sq(4, 4));
        assert_eq!(
            vec![(3, 3), (3, 4), (3, 5), (4, 3), (4, 5), (5, 4)],
            sorted(golden_general_moves(&board, sq(4, 4), Side::Sente))
        );

        let board = lone(PieceKind::GoldenGeneral, Side::Gote, sq(4, 4));
        assert_eq!(
            vec![(3, 4), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)],
            sorted(golden_general_moves(&board, sq(4, 4), Side::Gote))
        );
    }

    #[test]
    fn silver_general_is_mirrored() {
        let board = lone(PieceKind::SilverGeneral, Side::Sente, sq(4, 4));
        assert_eq!(
            vec![(3, 3), (3, 4), (3, 5), (5, 3), (5, 5)],
            sorted(silver_general_moves(&board, sq(4, 4), Side::Sente))
        );

        let board = lone(PieceKind::SilverGeneral, Side::Gote, sq(4, 4));
        assert_eq!(
            vec![(3, 3), (3, 5), (5, 3), (5, 4), (5, 5)],
            sorted(silver_general_moves(&board, sq(4, 4), Side::Gote))
        );
    }

    #[test]
    fn horse_jumps_forward_only() {
        let board = lone(PieceKind::Horse, Side::Sente, sq(4, 4));
        assert_eq!(
            vec![(2, 3), (2, 5)],
            sorted(horse_moves(&board, sq(4, 4), Side::Sente))
        );

        let board = lone(PieceKind::Horse, Side::Gote, sq(4, 0));
        assert_eq!(vec![(6, 1)], sorted(horse_moves(&board, sq(4, 0), Side::Gote)));

        let board = lone(PieceKind::Horse, Side::Sente, sq(1, 4));
        assert!(horse_moves(&board, sq(1, 4), Side::Sente).is_empty());
    }

    #[test]
    fn horse_jumps_over_pieces() {
        let mut board = lone(PieceKind::Horse, Side::Sente, sq(8, 1));
        board.place_piece(PieceKind::Pawn, Side::Sente, sq(7, 1)).unwrap();
        board.place_piece(PieceKind::Pawn, Side::Sente, sq(7, 0)).unwrap();
        board.place_piece(PieceKind::Pawn, Side::Sente, sq(7, 2)).unwrap();

        assert_eq!(
            vec![(6, 0), (6, 2)],
            sorted(horse_moves(&board, sq(8, 1), Side::Sente))
        );
    }

    #[test]
    fn pawn_steps_forward() {
        let board = lone(PieceKind::Pawn, Side::Sente, sq(6, 4));
        assert_eq!(vec![(5, 4)], sorted(pawn_moves(&board, sq(6, 4), Side::Sente)));

        let board = lone(PieceKind::Pawn, Side::Gote, sq(2, 4));
        assert_eq!(vec![(3, 4)], sorted(pawn_moves(&board, sq(2, 4), Side::Gote)));

        let board = lone(PieceKind::Pawn, Side::Sente, sq(0, 4));
        assert!(pawn_moves(&board, sq(0, 4), Side::Sente).is_empty());
    }

    #[test]
    fn spear_slides_until_blocked() {
        let mut board = lone(PieceKind::Spear, Side::Sente, sq(8, 0));
        board.place_piece(PieceKind::Pawn, Side::Gote, sq(3, 0)).unwrap();
        assert_eq!(
            vec![(3, 0), (4, 0), (5, 0), (6, 0), (7, 0)],
            sorted(spear_moves(&board, sq(8, 0), Side::Sente))
        );

        let mut board = lone(PieceKind::Spear, Side::Sente, sq(8, 0));
        board.place_piece(PieceKind::Pawn, Side::Sente, sq(5, 0)).unwrap();
        assert_eq!(
            vec![(6, 0), (7, 0)],
            sorted(spear_moves(&board, sq(8, 0), Side::Sente))
        );
    }

    #[test]
    fn rook_on_empty_board() {
        let board = lone(PieceKind::Rook, Side::Gote, sq(4, 4));
        assert_eq!(16, rook_moves(&board, sq(4, 4), Side::Gote).len());
    }

    #[test]
    fn rook_stops_at_first_piece() {
        let mut board = lone(PieceKind::Rook, Side::Sente, sq(4, 4));
        board.place_piece(PieceKind::Pawn, Side::Gote, sq(2, 4)).unwrap();
        board.place_piece(PieceKind::Pawn, Side::Sente, sq(4, 6)).unwrap();

        let moves = sorted(rook_moves(&board, sq(4, 4), Side::Sente));
        assert!(moves.contains(&(2, 4)));
        assert!(!moves.contains(&(1, 4)));
        assert!(moves.contains(&(4, 5)));
        assert!(!moves.contains(&(4, 6)));
        assert!(!moves.contains(&(4, 7)));
        assert_eq!(4 + 2 + 1 + 4, moves.len());
    }

    #[test]
    fn elephant_diagonals() {
        let mut board = lone(PieceKind::Elephant, Side::Sente, sq(7, 1));
        board.place_piece(PieceKind::Pawn, Side::Sente, sq(6, 2)).unwrap();
        assert_eq!(
            vec![(6, 0), (8, 0), (8, 2)],
            sorted(elephant_moves(&board, sq(7, 1), Side::Sente))
        );
    }

    #[test]
    fn promoted_deltas() {
        let board = lone(PieceKind::Rook, Side::Sente, sq(4, 4));
        assert_eq!(
            20,
            candidates(&board, sq(4, 4), PieceKind::Rook, Promotion::Promoted, Side::Sente).len()
        );

        let board = lone(PieceKind::Elephant, Side::Sente, sq(4, 4));
        assert_eq!(
            20,
            candidates(&board, sq(4, 4), PieceKind::Elephant, Promotion::Promoted, Side::Sente)
                .len()
        );

        for kind in [
            PieceKind::Spear,
            PieceKind::Horse,
            PieceKind::SilverGeneral,
            PieceKind::Pawn,
        ] {
            let board = lone(kind, Side::Gote, sq(4, 4));
            assert_eq!(
                sorted(golden_general_moves(&board, sq(4, 4), Side::Gote)),
                sorted(candidates(&board, sq(4, 4), kind, Promotion::Promoted, Side::Gote)),
                "{kind}"
            );
        }
    }

    #[test]
    fn own_pieces_are_never_targets() {
        let mut board = lone(PieceKind::King, Side::Sente, sq(4, 4));
        for (dr, dc) in KING_STEPS {
            let to = sq(4, 4).shift(dr, dc).unwrap();
            board.place_piece(PieceKind::Pawn, Side::Sente, to).unwrap();
        }
        assert!(king_moves(&board, sq(4, 4), Side::Sente).is_empty());
    }
}
