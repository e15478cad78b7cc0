//! The two sides and the eight animal species with their capture hierarchy.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side that moves first (top of the board).
    One,
    /// The side that moves second (bottom of the board).
    Two,
}

impl Side {
    /// Returns the opposing side.
    pub const fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::One => write!(f, "1"),
            Side::Two => write!(f, "2"),
        }
    }
}

/// The eight animal kinds.
///
/// Each species carries a fixed rank (1 strongest, 8 weakest) and two
/// capabilities: leaping across the river (Lion and Tiger) and swimming
/// in it (Rat only). Capture legality is a pure function of rank plus the
/// Rat/Elephant exception pair and the trap override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Species {
    /// Rank 1, strongest; cannot capture the Rat.
    Elephant,
    /// Rank 2; leaps the river.
    Lion,
    /// Rank 3; leaps the river.
    Tiger,
    /// Rank 4.
    Panther,
    /// Rank 5.
    Dog,
    /// Rank 6.
    Wolf,
    /// Rank 7.
    Cat,
    /// Rank 8, weakest; swims, and captures the Elephant.
    Rat,
}

impl Species {
    /// Strength rank; lower is stronger.
    pub const fn rank(self) -> u8 {
        match self {
            Species::Elephant => 1,
            Species::Lion => 2,
            Species::Tiger => 3,
            Species::Panther => 4,
            Species::Dog => 5,
            Species::Wolf => 6,
            Species::Cat => 7,
            Species::Rat => 8,
        }
    }

    /// One-letter symbol used in board rendering and move records.
    pub const fn symbol(self) -> char {
        match self {
            Species::Elephant => 'E',
            Species::Lion => 'L',
            Species::Tiger => 'T',
            Species::Panther => 'P',
            Species::Dog => 'D',
            Species::Wolf => 'W',
            Species::Cat => 'C',
            Species::Rat => 'R',
        }
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Species::Elephant => "Elephant",
            Species::Lion => "Lion",
            Species::Tiger => "Tiger",
            Species::Panther => "Panther",
            Species::Dog => "Dog",
            Species::Wolf => "Wolf",
            Species::Cat => "Cat",
            Species::Rat => "Rat",
        }
    }

    /// True for the species that may leap across the river.
    pub const fn can_leap_river(self) -> bool {
        matches!(self, Species::Lion | Species::Tiger)
    }

    /// True for the species that may occupy river cells.
    pub const fn can_swim(self) -> bool {
        matches!(self, Species::Rat)
    }

    /// Whether this species may capture `target`.
    ///
    /// A target standing in a trap afflicting its own side loses all rank
    /// protection. Outside a trap, the Rat captures the Elephant and the
    /// Elephant never captures the Rat; every other pairing is decided by
    /// rank, equal ranks capturing each other.
    pub fn can_capture(self, target: Species, target_in_trap: bool) -> bool {
        if target_in_trap {
            return true;
        }
        if self == Species::Rat && target == Species::Elephant {
            return true;
        }
        if self == Species::Elephant && target == Species::Rat {
            return false;
        }
        self.rank() <= target.rank()
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
