//! Database persistence layer for player profiles and match history.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{
    MatchRecord, MoveRecord, NewMatchRecord, NewMoveRecord, NewPlayer, Player, PlayerStanding,
};
pub use repository::MatchRepository;
