//! Piece placement and the static terrain of the 9x7 board.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::coordinate::Coordinate;
use crate::game::species::{Side, Species};

/// A piece on the board: a species owned by one side.
///
/// Pieces are created once at setup and never mutated, only relocated or
/// removed when captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    species: Species,
    side: Side,
}

impl Piece {
    /// Creates a piece.
    pub const fn new(species: Species, side: Side) -> Self {
        Self { species, side }
    }

    /// The animal kind.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// The owning side.
    pub const fn side(&self) -> Side {
        self.side
    }
}

impl std::fmt::Display for Piece {
    /// Symbol plus owning side, e.g. `E1` for side one's Elephant.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.species.symbol(), self.side)
    }
}

/// The river: two 3x2 pools in the middle rows.
const RIVER_CELLS: [Coordinate; 12] = [
    Coordinate::new(3, 1),
    Coordinate::new(3, 2),
    Coordinate::new(4, 1),
    Coordinate::new(4, 2),
    Coordinate::new(5, 1),
    Coordinate::new(5, 2),
    Coordinate::new(3, 4),
    Coordinate::new(3, 5),
    Coordinate::new(4, 4),
    Coordinate::new(4, 5),
    Coordinate::new(5, 4),
    Coordinate::new(5, 5),
];

/// Traps around side one's sanctuary; they afflict side two's pieces.
const HOME_TRAPS_ONE: [Coordinate; 3] = [
    Coordinate::new(0, 2),
    Coordinate::new(0, 4),
    Coordinate::new(1, 3),
];

/// Traps around side two's sanctuary; they afflict side one's pieces.
const HOME_TRAPS_TWO: [Coordinate; 3] = [
    Coordinate::new(8, 2),
    Coordinate::new(8, 4),
    Coordinate::new(7, 3),
];

const SANCTUARY_ONE: Coordinate = Coordinate::new(0, 3);
const SANCTUARY_TWO: Coordinate = Coordinate::new(8, 3);

/// Sparse piece placement plus the fixed terrain geometry.
///
/// The board is a dumb structural store: it answers occupancy and terrain
/// queries and mutates placement on request, but performs no legality
/// checks. All rule reasoning lives in [`MoveValidator`].
///
/// [`MoveValidator`]: crate::game::validator::MoveValidator
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pieces: HashMap<Coordinate, Piece>,
}

impl Board {
    /// Number of rows.
    pub const ROWS: i8 = 9;
    /// Number of columns.
    pub const COLS: i8 = 7;

    /// Creates a board with the 16 pieces at their fixed starting cells.
    pub fn new() -> Self {
        let mut board = Self::empty();

        // Side one, top three rows
        board.place(Coordinate::new(0, 0), Piece::new(Species::Lion, Side::One));
        board.place(Coordinate::new(0, 6), Piece::new(Species::Tiger, Side::One));
        board.place(Coordinate::new(1, 1), Piece::new(Species::Dog, Side::One));
        board.place(Coordinate::new(1, 5), Piece::new(Species::Cat, Side::One));
        board.place(Coordinate::new(2, 0), Piece::new(Species::Rat, Side::One));
        board.place(Coordinate::new(2, 2), Piece::new(Species::Panther, Side::One));
        board.place(Coordinate::new(2, 4), Piece::new(Species::Wolf, Side::One));
        board.place(Coordinate::new(2, 6), Piece::new(Species::Elephant, Side::One));

        // Side two, bottom three rows
        board.place(Coordinate::new(8, 0), Piece::new(Species::Tiger, Side::Two));
        board.place(Coordinate::new(8, 6), Piece::new(Species::Lion, Side::Two));
        board.place(Coordinate::new(7, 1), Piece::new(Species::Cat, Side::Two));
        board.place(Coordinate::new(7, 5), Piece::new(Species::Dog, Side::Two));
        board.place(Coordinate::new(6, 0), Piece::new(Species::Elephant, Side::Two));
        board.place(Coordinate::new(6, 2), Piece::new(Species::Wolf, Side::Two));
        board.place(Coordinate::new(6, 4), Piece::new(Species::Panther, Side::Two));
        board.place(Coordinate::new(6, 6), Piece::new(Species::Rat, Side::Two));

        board
    }

    /// Creates a board with no pieces; terrain is always present.
    pub fn empty() -> Self {
        Self {
            pieces: HashMap::new(),
        }
    }

    /// The piece at `cell`, if any.
    pub fn piece_at(&self, cell: Coordinate) -> Option<Piece> {
        self.pieces.get(&cell).copied()
    }

    /// True iff no piece occupies `cell`.
    pub fn is_empty(&self, cell: Coordinate) -> bool {
        !self.pieces.contains_key(&cell)
    }

    /// Puts `piece` on `cell`, replacing any occupant.
    pub fn place(&mut self, cell: Coordinate, piece: Piece) {
        self.pieces.insert(cell, piece);
    }

    /// Removes and returns the piece at `cell`, if any.
    pub fn remove(&mut self, cell: Coordinate) -> Option<Piece> {
        self.pieces.remove(&cell)
    }

    /// Iterates over all occupied cells.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.pieces.iter().map(|(cell, piece)| (*cell, *piece))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// True iff `cell` is a river cell.
    pub fn is_river(&self, cell: Coordinate) -> bool {
        RIVER_CELLS.contains(&cell)
    }

    /// True iff `cell` is a trap afflicting `side`, i.e. one of the traps
    /// around the opposing sanctuary. A piece standing there loses its rank
    /// protection.
    pub fn is_trap(&self, cell: Coordinate, side: Side) -> bool {
        Self::home_traps(side.opponent()).contains(&cell)
    }

    /// True iff `cell` is the sanctuary `side` is attacking, i.e. the
    /// opposing side's sanctuary. Reaching it wins the match.
    pub fn is_sanctuary(&self, cell: Coordinate, side: Side) -> bool {
        cell == Self::sanctuary(side.opponent())
    }

    /// True iff `cell` is `side`'s own sanctuary, which its pieces may
    /// never enter.
    pub fn is_own_sanctuary(&self, cell: Coordinate, side: Side) -> bool {
        cell == Self::sanctuary(side)
    }

    /// The river cells.
    pub fn river_cells() -> &'static [Coordinate] {
        &RIVER_CELLS
    }

    /// The trap cells around `side`'s sanctuary (afflicting the opponent).
    pub fn home_traps(side: Side) -> &'static [Coordinate] {
        match side {
            Side::One => &HOME_TRAPS_ONE,
            Side::Two => &HOME_TRAPS_TWO,
        }
    }

    /// The sanctuary cell belonging to `side`.
    pub fn sanctuary(side: Side) -> Coordinate {
        match side {
            Side::One => SANCTUARY_ONE,
            Side::Two => SANCTUARY_TWO,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
