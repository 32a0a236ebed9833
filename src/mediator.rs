//! Validation and application of move requests.

use tracing::{debug, warn};

use crate::board::Board;
use crate::core::{MoveError, Side, Square};
use crate::display::MoveDisplay;
use crate::piece::{PieceId, PieceKind};
use crate::record::MoveRecord;

/// What is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mover {
    /// The occupant of a cell.
    Board(Square),
    /// A captured piece from the pool of the side to move.
    Drop(PieceId),
}

/// Result of a move that passed validation and was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Applied {
    pub record: MoveRecord,
    /// The piece landed in its promotion zone and may promote.
    pub promotion_offered: bool,
    /// The captured piece was a king.
    pub captured_king: bool,
}

/// Checks a move request against the board and carries it out.
pub(crate) struct Mediator;

impl Mediator {
    /// Validates and applies a move of `mover` to `to` for the side to move.
    ///
    /// The target must be among the last displayed destinations and among the
    /// destinations computed from the current position. Nothing is mutated
    /// unless both hold.
    pub(crate) fn execute(
        board: &mut Board,
        mover: Mover,
        to: Square,
    ) -> Result<Applied, MoveError> {
        let side = board.current_turn();

        if let Mover::Board(from) = mover {
            match board.cell_at(from).side() {
                None => return Err(MoveError::EmptyCell(from)),
                Some(owner) if owner != side => return Err(MoveError::NotYourTurn(side)),
                Some(_) => {}
            }
        }

        if !board.cells_to_move_display().contains(&to) {
            warn!("{} is not a displayed destination", to);
            return Err(MoveError::NotHighlighted(to));
        }

        let legal = match mover {
            Mover::Board(from) => MoveDisplay::moves_for(board, from)?,
            Mover::Drop(id) => MoveDisplay::drop_in_for(board, id)?,
        };
        if !legal.contains(to) {
            warn!("{} is not reachable for {:?}", to, mover);
            return Err(MoveError::IllegalTarget(to));
        }

        match mover {
            Mover::Board(from) => Mediator::apply_move(board, side, from, to),
            Mover::Drop(id) => Mediator::apply_drop(board, side, id, to),
        }
    }

    fn apply_move(
        board: &mut Board,
        side: Side,
        from: Square,
        to: Square,
    ) -> Result<Applied, MoveError> {
        let piece = board
            .cell_mut(from)
            .take()
            .ok_or(MoveError::EmptyCell(from))?;

        let taken = board.cell_mut(to).take();
        let captured = match taken {
            Some(mut taken) => {
                debug!("{} captures {} {} on {}", side, taken.kind(), taken.id(), to);
                taken.captured = true;
                taken.checked = false;
                let kind = taken.kind();
                board.pool_mut(side).push(taken);
                Some(kind)
            }
            None => None,
        };
        let captured_king = captured == Some(PieceKind::King);

        let record = MoveRecord::Normal {
            side,
            from,
            to,
            kind: piece.kind(),
            before: piece.promotion(),
            captured,
            promoted: false,
        };
        let promotion_offered = piece.promotion_offered(side, to.row());

        board.cell_mut(to).place(piece, side);
        debug!("{} moves {}", side, record);

        Ok(Applied {
            record,
            promotion_offered,
            captured_king,
        })
    }

    fn apply_drop(
        board: &mut Board,
        side: Side,
        id: PieceId,
        to: Square,
    ) -> Result<Applied, MoveError> {
        if board.cell_at(to).is_occupied() {
            return Err(MoveError::Occupied(to));
        }

        let pool = board.pool_mut(side);
        let index = pool
            .iter()
            .position(|p| p.id() == id)
            .ok_or(MoveError::NotInPool(id, side))?;
        let piece = pool.remove(index);

        let record = MoveRecord::Drop {
            side,
            to,
            kind: piece.kind(),
            promotion: piece.promotion(),
        };

        board.cell_mut(to).place(piece, side);
        debug!("{} drops {}", side, record);

        Ok(Applied {
            record,
            promotion_offered: false,
            captured_king: false,
        })
    }
}
