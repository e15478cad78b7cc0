//! Board coordinates and their chess-style text notation.

use serde::{Deserialize, Serialize};

use crate::game::error::MoveError;

/// A cell on the 9x7 board, addressed by row (0-8, top to bottom) and
/// column (0-6, left to right).
///
/// Plain immutable value type; equality and hashing go by `(row, col)`.
/// Text notation maps columns to `A..G` and rows to `1..9`, so `A1` is the
/// top-left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    row: i8,
    col: i8,
}

impl Coordinate {
    /// Creates a coordinate without bounds checking; use [`Coordinate::is_valid`]
    /// before treating it as a board cell.
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Row index, 0-8.
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// Column index, 0-6.
    pub const fn col(&self) -> i8 {
        self.col
    }

    /// Parses normalized notation: exactly one column letter `A..G` followed
    /// by one row digit `1..9`. Case normalization is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidNotation`] for anything else.
    pub fn from_notation(text: &str) -> Result<Self, MoveError> {
        let mut chars = text.chars();
        let (Some(col_char), Some(row_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(MoveError::invalid_notation(text));
        };

        if !('A'..='G').contains(&col_char) || !('1'..='9').contains(&row_char) {
            return Err(MoveError::invalid_notation(text));
        }

        let col = (col_char as u8 - b'A') as i8;
        let row = (row_char as u8 - b'1') as i8;
        Ok(Self::new(row, col))
    }

    /// Renders the coordinate as notation, e.g. `A1` for row 0, column 0.
    pub fn notation(&self) -> String {
        let col_letter = (b'A' + self.col as u8) as char;
        format!("{}{}", col_letter, self.row + 1)
    }

    /// True iff the coordinate lies on the 9x7 board.
    pub const fn is_valid(&self) -> bool {
        self.row >= 0 && self.row < 9 && self.col >= 0 && self.col < 7
    }

    /// Manhattan distance to another cell.
    pub fn manhattan_distance(&self, other: Coordinate) -> u8 {
        let row_diff = (self.row as i16 - other.row as i16).abs();
        let col_diff = (self.col as i16 - other.col as i16).abs();
        (row_diff + col_diff) as u8
    }

    /// True iff `other` is exactly one orthogonal step away. Diagonal
    /// neighbours have distance 2 and never satisfy this.
    pub fn is_adjacent(&self, other: Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}
