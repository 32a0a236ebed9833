use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;
use std::str::FromStr;

use crate::core::error::BoardError;
use crate::core::side::Side;
use crate::rules::{BOARD_SIZE, NUM_CELLS};

const ASCII_1: u8 = b'1';
const ASCII_LOWER_A: u8 = b'a';

/// Represents the coordinates of a cell on the 9×9 board.
///
/// Row 0 is the far edge seen from sente, column 0 is the left edge seen from
/// sente. In shogi notation the column maps to file `9 - column` and the row to
/// rank letter `a + row`.
///
/// # Examples
///
/// ```
/// use shogiban::Square;
///
/// let sq = Square::new(6, 2).unwrap();
/// assert_eq!("7g", sq.to_string());
/// assert_eq!(sq, "7g".parse().unwrap());
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    inner: u8,
}

impl Square {
    /// Creates a new instance of `Square`.
    ///
    /// Both `row` and `column` take a value from 0 to 8.
    pub fn new(row: u8, column: u8) -> Option<Square> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return None;
        }

        Some(Square {
            inner: row * BOARD_SIZE + column,
        })
    }

    /// Same as [`Square::new`] but reports which coordinate was rejected.
    pub fn checked(row: u8, column: u8) -> Result<Square, BoardError> {
        Square::new(row, column).ok_or(BoardError::OutOfBounds { row, column })
    }

    /// Creates a new instance of `Square` with the given index value.
    pub fn from_index(index: u8) -> Option<Square> {
        if index as usize >= NUM_CELLS {
            return None;
        }

        Some(Square { inner: index })
    }

    /// Creates a new instance of `Square` from SFEN formatted string.
    pub fn from_sfen(s: &str) -> Option<Square> {
        let bytes: &[u8] = s.as_bytes();

        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(ASCII_1..ASCII_1 + BOARD_SIZE).contains(&file)
            || !(ASCII_LOWER_A..ASCII_LOWER_A + BOARD_SIZE).contains(&rank)
        {
            return None;
        }

        Square::new(rank - ASCII_LOWER_A, BOARD_SIZE - 1 - (file - ASCII_1))
    }

    /// Returns an iterator of all squares on the board in row-major order.
    pub fn iter() -> SquareIter {
        SquareIter { current: 0 }
    }

    pub fn row(self) -> u8 {
        self.inner / BOARD_SIZE
    }

    pub fn column(self) -> u8 {
        self.inner % BOARD_SIZE
    }

    /// Returns both row and column as a tuple.
    pub fn coordinates(self) -> (u8, u8) {
        (self.row(), self.column())
    }

    /// Returns a new `Square` displaced by the given row and column deltas,
    /// or `None` if the result leaves the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use shogiban::Square;
    ///
    /// let sq = Square::new(4, 4).unwrap();
    /// assert_eq!(Square::new(2, 5), sq.shift(-2, 1));
    /// assert_eq!(None, sq.shift(5, 0));
    /// ```
    #[must_use]
    pub fn shift(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row() as i8 + dr;
        let c = self.column() as i8 + dc;

        if !(0..BOARD_SIZE as i8).contains(&r) || !(0..BOARD_SIZE as i8).contains(&c) {
            return None;
        }

        Square::new(r as u8, c as u8)
    }

    /// Returns the row as counted from the given side's far edge.
    ///
    /// 0 is the rank furthest from the side's starting position.
    pub fn relative_row(self, side: Side) -> u8 {
        match side {
            Side::Sente => self.row(),
            Side::Gote => BOARD_SIZE - 1 - self.row(),
        }
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.inner as usize
    }

    /// Returns the file in Japanese notation (full-width numeral).
    pub fn file_japanese(self) -> &'static str {
        match BOARD_SIZE - self.column() {
            1 => "１",
            2 => "２",
            3 => "３",
            4 => "４",
            5 => "５",
            6 => "６",
            7 => "７",
            8 => "８",
            9 => "９",
            _ => "?",
        }
    }

    /// Returns the rank in Japanese notation (kanji numeral).
    pub fn rank_japanese(self) -> &'static str {
        match self.row() {
            0 => "一",
            1 => "二",
            2 => "三",
            3 => "四",
            4 => "五",
            5 => "六",
            6 => "七",
            7 => "八",
            8 => "九",
            _ => "?",
        }
    }

    /// Returns the square in Japanese notation (e.g., "７六").
    pub fn to_japanese(self) -> String {
        format!("{}{}", self.file_japanese(), self.rank_japanese())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}{}",
            (BOARD_SIZE - self.column() - 1 + ASCII_1) as char,
            (self.row() + ASCII_LOWER_A) as char
        )
    }
}

/// Error type for parsing a square from SFEN notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square notation")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_sfen(s).ok_or(ParseSquareError)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = BoardError;

    fn try_from((row, column): (u8, u8)) -> Result<Self, Self::Error> {
        Square::checked(row, column)
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        sq.coordinates()
    }
}

/// This struct is created by the [`iter`] method on [`Square`].
///
/// [`iter`]: Square::iter
pub struct SquareIter {
    current: u8,
}

impl iter::Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = Square::from_index(self.current)?;
        self.current += 1;
        Some(cur)
    }
}
