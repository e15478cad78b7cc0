//! Xou Dou Qi (Jungle chess) rule engine with persistent match history.
//!
//! # Architecture
//!
//! - **Game**: board model, move legality, and the turn/win state machine
//! - **Db**: SQLite-backed player profiles and match history (diesel)
//! - **Console**: plain-text board rendering and command parsing
//!
//! The engine validates and applies moves and emits move/result events to
//! an injected [`MatchRecorder`]; [`MatchRepository`] is the database-backed
//! recorder, [`NullRecorder`] drops everything for untracked play.
//!
//! # Example
//!
//! ```
//! use xoudouqi::MatchEngine;
//!
//! let mut engine = MatchEngine::untracked();
//! // Side one opens by stepping its rat toward the river.
//! engine.apply_move("A3", "B3").expect("legal opening move");
//! assert_eq!(engine.state().move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod db;
mod game;

// Crate-level exports - core rule engine
pub use game::{
    Board, Coordinate, IllegalMoveReason, MatchEngine, MatchRecorder, MatchSnapshot, MatchState,
    MatchStatus, MoveError, MoveEvent, MoveValidator, NullRecorder, Piece, PieceCell,
    RecorderError, Side, Species, TerrainSnapshot,
};

// Crate-level exports - persistence
pub use db::{
    DbError, MatchRecord, MatchRepository, MoveRecord, NewMatchRecord, NewMoveRecord, NewPlayer,
    Player, PlayerStanding,
};

// Crate-level exports - console presentation
pub use console::{Command, help_text, parse_command, render_board, render_frame, rules_text};
