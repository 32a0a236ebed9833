//! Move recording and notation formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Side, Square};
use crate::piece::{PieceKind, Promotion};

/// Describes a move once it has been applied to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    Normal {
        side: Side,
        from: Square,
        to: Square,
        kind: PieceKind,
        /// Promotion state the piece had before the move.
        before: Promotion,
        captured: Option<PieceKind>,
        promoted: bool,
    },
    Drop {
        side: Side,
        to: Square,
        kind: PieceKind,
        promotion: Promotion,
    },
}

impl MoveRecord {
    pub fn side(&self) -> Side {
        match *self {
            MoveRecord::Normal { side, .. } | MoveRecord::Drop { side, .. } => side,
        }
    }

    pub fn to(&self) -> Square {
        match *self {
            MoveRecord::Normal { to, .. } | MoveRecord::Drop { to, .. } => to,
        }
    }

    pub fn kind(&self) -> PieceKind {
        match *self {
            MoveRecord::Normal { kind, .. } | MoveRecord::Drop { kind, .. } => kind,
        }
    }

    /// Kind of the piece taken by this move, if any.
    pub fn captured(&self) -> Option<PieceKind> {
        match *self {
            MoveRecord::Normal { captured, .. } => captured,
            MoveRecord::Drop { .. } => None,
        }
    }

    pub fn is_promotion(&self) -> bool {
        matches!(*self, MoveRecord::Normal { promoted: true, .. })
    }

    pub(crate) fn set_promoted(&mut self, value: bool) {
        if let MoveRecord::Normal { promoted, .. } = self {
            *promoted = value;
        }
    }

    /// Converts the move into SFEN formatted string.
    pub fn to_sfen(&self) -> String {
        match *self {
            MoveRecord::Normal {
                from, to, promoted, ..
            } => format!("{}{}{}", from, to, if promoted { "+" } else { "" }),
            MoveRecord::Drop { to, kind, .. } => format!("{}*{}", kind.to_sfen_char(), to),
        }
    }

    /// Formats the move in Japanese notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::{Board, Square};
    ///
    /// let mut board = Board::new();
    /// board.initiate_game();
    /// board.select_cell(Square::new(6, 2).unwrap()).unwrap();
    ///
    /// let record = board
    ///     .move_figure(Square::new(5, 2).unwrap())
    ///     .unwrap()
    ///     .completed()
    ///     .unwrap();
    /// assert_eq!("☗７六歩", record.to_japanese());
    /// ```
    pub fn to_japanese(&self) -> String {
        match *self {
            MoveRecord::Normal {
                side,
                to,
                kind,
                before,
                promoted,
                ..
            } => format!(
                "{}{}{}{}",
                symbol(side),
                to.to_japanese(),
                kind.to_japanese(before),
                if promoted { "成" } else { "" }
            ),
            MoveRecord::Drop {
                side,
                to,
                kind,
                promotion,
            } => format!(
                "{}{}{}打",
                symbol(side),
                to.to_japanese(),
                kind.to_japanese(promotion)
            ),
        }
    }

    /// Same as [`MoveRecord::to_japanese`] with the source square appended.
    pub fn to_japanese_detailed(&self) -> String {
        match *self {
            MoveRecord::Normal {
                side,
                from,
                to,
                kind,
                before,
                promoted,
                ..
            } => format!(
                "{}{}{}({}){}",
                symbol(side),
                to.to_japanese(),
                kind.to_japanese(before),
                from.to_japanese(),
                if promoted { "成" } else { "" }
            ),
            MoveRecord::Drop { .. } => self.to_japanese(),
        }
    }
}

fn symbol(side: Side) -> &'static str {
    match side {
        Side::Sente => "☗",
        Side::Gote => "☖",
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sfen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, column: u8) -> Square {
        Square::new(row, column).unwrap()
    }

    #[test]
    fn notation() {
        let cases = [
            (
                MoveRecord::Normal {
                    side: Side::Sente,
                    from: sq(6, 2),
                    to: sq(5, 2),
                    kind: PieceKind::Pawn,
                    before: Promotion::Default,
                    captured: None,
                    promoted: false,
                },
                "7g7f",
                "☗７六歩",
            ),
            (
                MoveRecord::Normal {
                    side: Side::Sente,
                    from: sq(1, 2),
                    to: sq(0, 2),
                    kind: PieceKind::SilverGeneral,
                    before: Promotion::Default,
                    captured: Some(PieceKind::Spear),
                    promoted: true,
                },
                "7b7a+",
                "☗７一銀成",
            ),
            (
                MoveRecord::Drop {
                    side: Side::Gote,
                    to: sq(4, 4),
                    kind: PieceKind::Rook,
                    promotion: Promotion::Default,
                },
                "R*5e",
                "☖５五飛打",
            ),
            (
                MoveRecord::Drop {
                    side: Side::Sente,
                    to: sq(4, 4),
                    kind: PieceKind::Elephant,
                    promotion: Promotion::Promoted,
                },
                "B*5e",
                "☗５五馬打",
            ),
        ];

        for case in cases.iter() {
            assert_eq!(case.1, case.0.to_sfen());
            assert_eq!(case.1, case.0.to_string());
            assert_eq!(case.2, case.0.to_japanese());
        }
    }

    #[test]
    fn detailed_japanese() {
        let record = MoveRecord::Normal {
            side: Side::Gote,
            from: sq(2, 4),
            to: sq(3, 4),
            kind: PieceKind::Pawn,
            before: Promotion::Default,
            captured: None,
            promoted: false,
        };
        assert_eq!("☖５四歩(５三)", record.to_japanese_detailed());
    }

    #[test]
    fn set_promoted_ignores_drops() {
        let mut drop = MoveRecord::Drop {
            side: Side::Sente,
            to: sq(0, 0),
            kind: PieceKind::Pawn,
            promotion: Promotion::Default,
        };
        drop.set_promoted(true);
        assert!(!drop.is_promotion());
    }
}
