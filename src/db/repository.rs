//! Database repository for player profiles and match history.

use chrono::Utc;
use diesel::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::db::{
    DbError, MatchRecord, MoveRecord, NewMatchRecord, NewMoveRecord, NewPlayer, Player,
    PlayerStanding, schema,
};
use crate::game::{MatchRecorder, MoveEvent, RecorderError};

/// Repository over the SQLite match-history database.
///
/// Also implements [`MatchRecorder`], so it can be handed to a
/// [`MatchEngine`](crate::game::MatchEngine) directly as its persistence
/// collaborator.
#[derive(Debug, Clone)]
pub struct MatchRepository {
    db_path: String,
}

impl MatchRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating MatchRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Creates a new player profile.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the display name is already taken or a
    /// database error occurs.
    #[instrument(skip(self))]
    pub fn create_player(&self, display_name: String) -> Result<Player, DbError> {
        debug!(display_name = %display_name, "Creating player");
        let mut conn = self.connection()?;

        let new_player = NewPlayer::new(display_name);

        let player = diesel::insert_into(schema::players::table)
            .values(&new_player)
            .returning(Player::as_returning())
            .get_result(&mut conn)?;

        info!(player_id = player.id(), display_name = %player.display_name(), "Player created");
        Ok(player)
    }

    /// Gets a player by display name. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_player_by_name(&self, display_name: &str) -> Result<Option<Player>, DbError> {
        debug!(display_name = %display_name, "Looking up player by name");
        let mut conn = self.connection()?;

        let player = schema::players::table
            .filter(schema::players::display_name.eq(display_name))
            .first::<Player>(&mut conn)
            .optional()?;

        if let Some(ref p) = player {
            debug!(player_id = p.id(), "Player found");
        } else {
            debug!("Player not found");
        }

        Ok(player)
    }

    /// Gets a player by id. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_player(&self, player_id: i32) -> Result<Option<Player>, DbError> {
        let mut conn = self.connection()?;

        let player = schema::players::table
            .find(player_id)
            .first::<Player>(&mut conn)
            .optional()?;

        Ok(player)
    }

    /// Gets the player with the given name, creating the profile if it does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_or_create_player(&self, display_name: &str) -> Result<Player, DbError> {
        if let Some(player) = self.get_player_by_name(display_name)? {
            return Ok(player);
        }
        self.create_player(display_name.to_string())
    }

    /// Lists all player profiles, ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_players(&self) -> Result<Vec<Player>, DbError> {
        debug!("Listing all players");
        let mut conn = self.connection()?;

        let players = schema::players::table
            .order(schema::players::created_at.asc())
            .load::<Player>(&mut conn)?;

        info!(count = players.len(), "Players loaded");
        Ok(players)
    }

    /// Registers a new match between two players.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn create_match(&self, player_one_id: i32, player_two_id: i32) -> Result<MatchRecord, DbError> {
        debug!("Creating match");
        let mut conn = self.connection()?;

        let new_match = NewMatchRecord::new(player_one_id, player_two_id);

        let record = diesel::insert_into(schema::matches::table)
            .values(&new_match)
            .returning(MatchRecord::as_returning())
            .get_result(&mut conn)?;

        info!(match_id = record.id(), player_one_id, player_two_id, "Match created");
        Ok(record)
    }

    /// Records one move of a match.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, record), fields(match_id = record.match_id(), move_number = record.move_number()))]
    pub fn record_move(&self, record: NewMoveRecord) -> Result<MoveRecord, DbError> {
        debug!("Recording move");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::match_moves::table)
            .values(&record)
            .returning(MoveRecord::as_returning())
            .get_result(&mut conn)?;

        debug!(move_id = stored.id(), "Move recorded");
        Ok(stored)
    }

    /// Stores the result of a match: winner (or `None` for a draw), final
    /// move count, and the end timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn finish_match(
        &self,
        match_id: i32,
        winner_id: Option<i32>,
        moves_count: i32,
    ) -> Result<(), DbError> {
        debug!("Finishing match");
        let mut conn = self.connection()?;

        let updated = diesel::update(schema::matches::table.find(match_id))
            .set((
                schema::matches::winner_id.eq(winner_id),
                schema::matches::moves_count.eq(moves_count),
                schema::matches::ended_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        if updated == 0 {
            warn!(match_id, "Finish requested for unknown match");
            return Err(DbError::new(format!("No match with id {}", match_id)));
        }

        info!(match_id, ?winner_id, moves_count, "Match result recorded");
        Ok(())
    }

    /// Gets the matches a player took part in, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn recent_matches(&self, player_id: i32, limit: i64) -> Result<Vec<MatchRecord>, DbError> {
        debug!("Loading recent matches");
        let mut conn = self.connection()?;

        let records = schema::matches::table
            .filter(
                schema::matches::player_one_id
                    .eq(player_id)
                    .or(schema::matches::player_two_id.eq(player_id)),
            )
            .order(schema::matches::started_at.desc())
            .limit(limit)
            .load::<MatchRecord>(&mut conn)?;

        info!(player_id, count = records.len(), "Recent matches loaded");
        Ok(records)
    }

    /// Gets all recorded moves of a match in playing order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn moves_for_match(&self, match_id: i32) -> Result<Vec<MoveRecord>, DbError> {
        let mut conn = self.connection()?;

        let moves = schema::match_moves::table
            .filter(schema::match_moves::match_id.eq(match_id))
            .order(schema::match_moves::move_number.asc())
            .load::<MoveRecord>(&mut conn)?;

        Ok(moves)
    }

    /// Computes a player's win/loss/draw standing over finished matches.
    /// Unfinished or abandoned matches are not counted.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn standing(&self, player_id: i32) -> Result<PlayerStanding, DbError> {
        debug!("Computing standing");
        let mut conn = self.connection()?;

        let finished = schema::matches::table
            .filter(
                schema::matches::player_one_id
                    .eq(player_id)
                    .or(schema::matches::player_two_id.eq(player_id)),
            )
            .filter(schema::matches::ended_at.is_not_null())
            .load::<MatchRecord>(&mut conn)?;

        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for record in &finished {
            match record.winner_id() {
                Some(winner) if *winner == player_id => wins += 1,
                Some(_) => losses += 1,
                None => draws += 1,
            }
        }

        let standing = PlayerStanding::new(finished.len() as i32, wins, losses, draws);

        info!(
            player_id,
            total = standing.total_matches(),
            wins,
            losses,
            draws,
            win_rate = %format!("{:.1}%", standing.win_rate()),
            "Standing computed"
        );

        Ok(standing)
    }
}

impl MatchRecorder for MatchRepository {
    #[instrument(skip(self))]
    fn create_match(&self, player_one_id: i32, player_two_id: i32) -> Result<i32, RecorderError> {
        let record = MatchRepository::create_match(self, player_one_id, player_two_id)?;
        Ok(*record.id())
    }

    #[instrument(skip(self, event), fields(move_number = event.move_number()))]
    fn record_move(
        &self,
        match_id: i32,
        player_id: i32,
        event: &MoveEvent,
    ) -> Result<(), RecorderError> {
        let moved = format!("{}{}", event.moved().symbol(), event.side());
        let captured = event
            .captured()
            .map(|species| format!("{}{}", species.symbol(), event.side().opponent()));

        let record = NewMoveRecord::new(
            match_id,
            player_id,
            *event.move_number(),
            event.from().notation(),
            event.to().notation(),
            moved,
            captured,
        );

        MatchRepository::record_move(self, record)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn finish_match(
        &self,
        match_id: i32,
        winner_id: Option<i32>,
        move_count: i32,
    ) -> Result<(), RecorderError> {
        MatchRepository::finish_match(self, match_id, winner_id, move_count)?;
        Ok(())
    }
}
