//! Computing and marking the destinations of the selected piece.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{MoveError, Square};
use crate::piece::PieceId;

/// Destinations of one piece and the subset that captures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveSet {
    pub destinations: Vec<Square>,
    pub captures: Vec<Square>,
}

impl MoveSet {
    pub fn contains(&self, sq: Square) -> bool {
        self.destinations.contains(&sq)
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Adapter between a piece's movement pattern and the board's highlight marks.
///
/// The `*_for` functions only read the board. The `show_*` functions also
/// write the result into the highlight and capture marks; none of them touch
/// occupancy.
pub struct MoveDisplay;

impl MoveDisplay {
    /// Destinations of the piece standing on `from`.
    pub fn moves_for(board: &Board, from: Square) -> Result<MoveSet, MoveError> {
        let piece = board
            .cell_at(from)
            .occupant()
            .ok_or(MoveError::EmptyCell(from))?;

        let destinations = piece.available_cells(board);
        let captures = piece.check_captures(board, &destinations);

        Ok(MoveSet {
            destinations,
            captures,
        })
    }

    /// Drop targets of a captured piece held by the side to move.
    pub fn drop_in_for(board: &Board, id: PieceId) -> Result<MoveSet, MoveError> {
        let side = board.current_turn();
        let piece = board
            .pool(side)
            .iter()
            .find(|p| p.id() == id)
            .ok_or(MoveError::NotInPool(id, side))?;

        Ok(MoveSet {
            destinations: piece.available_cells(board),
            captures: Vec::new(),
        })
    }

    pub fn show_moves(board: &mut Board, from: Square) -> Result<MoveSet, MoveError> {
        let set = MoveDisplay::moves_for(board, from)?;
        debug!(
            "{} destinations and {} captures from {}",
            set.destinations.len(),
            set.captures.len(),
            from
        );
        MoveDisplay::mark(board, &set);
        Ok(set)
    }

    pub fn show_drop_in(board: &mut Board, id: PieceId) -> Result<MoveSet, MoveError> {
        let set = MoveDisplay::drop_in_for(board, id)?;
        debug!("{} drop targets for {}", set.destinations.len(), id);
        MoveDisplay::mark(board, &set);
        Ok(set)
    }

    fn mark(board: &mut Board, set: &MoveSet) {
        board.unmark_captures();
        board.mark_moves(&set.destinations);
        board.mark_captures(&set.captures);
        board.changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::piece::PieceKind;

    fn sq(row: u8, column: u8) -> Square {
        Square::new(row, column).unwrap()
    }

    #[test]
    fn captures_are_subset_of_destinations() {
        let mut board = Board::new();
        board.reset_game_state();
        board.place_piece(PieceKind::Rook, Side::Sente, sq(4, 4)).unwrap();
        board.place_piece(PieceKind::Pawn, Side::Gote, sq(1, 4)).unwrap();
        board.place_piece(PieceKind::Pawn, Side::Gote, sq(4, 0)).unwrap();
        board.place_piece(PieceKind::Pawn, Side::Sente, sq(6, 4)).unwrap();

        let set = MoveDisplay::moves_for(&board, sq(4, 4)).unwrap();
        assert_eq!(vec![sq(1, 4), sq(4, 0)], {
            let mut captures = set.captures.clone();
            captures.sort();
            captures
        });
        for capture in set.captures.iter() {
            assert!(set.contains(*capture));
        }
        assert!(!set.contains(sq(6, 4)));
    }

    #[test]
    fn empty_cell_is_rejected() {
        let mut board = Board::new();
        board.initiate_game();
        assert_eq!(
            Err(MoveError::EmptyCell(sq(4, 4))),
            MoveDisplay::moves_for(&board, sq(4, 4))
        );
    }

    #[test]
    fn show_moves_marks_cells() {
        let mut board = Board::new();
        board.initiate_game();

        let set = MoveDisplay::show_moves(&mut board, sq(6, 4)).unwrap();
        assert_eq!(vec![sq(5, 4)], set.destinations);
        assert!(set.captures.is_empty());

        assert!(board.cell_at(sq(5, 4)).is_highlighted());
        assert_eq!(&[sq(5, 4)][..], board.cells_to_move_display());
        assert!(board.cell_at(sq(6, 4)).is_occupied());
        assert!(!board.cell_at(sq(5, 4)).is_occupied());
    }

    #[test]
    fn unknown_pool_piece() {
        let mut board = Board::new();
        board.initiate_game();
        let id = board.king(Side::Sente).unwrap();
        assert_eq!(
            Err(MoveError::NotInPool(id, Side::Sente)),
            MoveDisplay::drop_in_for(&board, id)
        );
    }
}
