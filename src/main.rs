//! Xou Dou Qi - console front end
//!
//! Two players on the same machine, with match history and standings kept
//! in a local SQLite database.

#![warn(missing_docs)]

mod cli;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use xoudouqi::{
    Command as ConsoleCommand, MatchEngine, MatchRepository, MoveEvent, Player, help_text,
    parse_command, render_frame, rules_text,
};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { db_path, casual } => {
            if casual {
                run_casual_match()
            } else {
                run_tracked_match(&resolve_db_path(db_path))
            }
        }
        Command::History {
            name,
            db_path,
            limit,
        } => show_history(&resolve_db_path(db_path), &name, limit),
        Command::Stats { name, db_path } => show_stats(&resolve_db_path(db_path), &name),
        Command::Rules => {
            println!("{}", rules_text());
            Ok(())
        }
    }
}

/// Database path from the flag, the `XOUDOUQI_DB` variable, or the default.
fn resolve_db_path(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("XOUDOUQI_DB").ok())
        .unwrap_or_else(|| "xoudouqi.db".to_string())
}

/// Opens the repository and applies pending migrations.
fn setup_repository(db_path: &str) -> Result<MatchRepository> {
    let mut conn = SqliteConnection::establish(db_path)
        .with_context(|| format!("Failed to open database '{}'", db_path))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Migrations failed: {}", e))?;

    info!(db_path, "Database ready");
    Ok(MatchRepository::new(db_path.to_string())?)
}

/// Plays an untracked match: no profiles, nothing recorded.
fn run_casual_match() -> Result<()> {
    let mut engine = MatchEngine::untracked();
    game_loop(&mut engine, None, None)
}

/// Plays a recorded match between two named profiles.
fn run_tracked_match(db_path: &str) -> Result<()> {
    let repo = setup_repository(db_path)?;
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let player_one = prompt_player(&repo, &mut lines, "Player 1 name: ", None)?;
    let player_two = prompt_player(
        &repo,
        &mut lines,
        "Player 2 name: ",
        Some(player_one.display_name().as_str()),
    )?;

    // Release the stdin lock before the game loop takes its own.
    drop(lines);

    println!(
        "\n{} (side 1) vs {} (side 2). Good luck!\n",
        player_one.display_name(),
        player_two.display_name()
    );

    let mut engine = MatchEngine::new(
        *player_one.id(),
        *player_two.id(),
        Box::new(repo.clone()),
    )?;
    game_loop(&mut engine, Some(&repo), Some([player_one, player_two]))
}

/// Reads a player name from stdin and loads or creates the profile.
fn prompt_player(
    repo: &MatchRepository,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    prompt: &str,
    taken: Option<&str>,
) -> Result<Player> {
    loop {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let line = lines
            .next()
            .context("No more input")?
            .context("Failed to read input")?;
        let name = line.trim();

        if name.is_empty() {
            println!("Please enter a name.");
            continue;
        }
        if Some(name) == taken {
            println!("Player 2 must differ from player 1.");
            continue;
        }

        return Ok(repo.get_or_create_player(name)?);
    }
}

/// Runs the move loop until the match ends or a player quits.
fn game_loop(
    engine: &mut MatchEngine,
    repo: Option<&MatchRepository>,
    players: Option<[Player; 2]>,
) -> Result<()> {
    println!("{}", help_text());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !engine.state().ended() {
        println!("{}", render_frame(engine.state()));
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("Input closed, abandoning match.");
            return Ok(());
        };
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(ConsoleCommand::Move { from, to }) => match engine.apply_move(&from, &to) {
                Ok(event) => announce_move(&event),
                Err(error) => println!("Rejected: {}", error),
            },
            Some(ConsoleCommand::Help) => println!("{}", help_text()),
            Some(ConsoleCommand::History) => {
                if let (Some(repo), Some(players)) = (repo, players.as_ref()) {
                    print_history(repo, &players[side_index(engine)], 10)?;
                } else {
                    println!("No history in a casual match.");
                }
            }
            Some(ConsoleCommand::Stats) => {
                if let (Some(repo), Some(players)) = (repo, players.as_ref()) {
                    print_standing(repo, &players[side_index(engine)])?;
                } else {
                    println!("No standings in a casual match.");
                }
            }
            Some(ConsoleCommand::Quit) => {
                println!("Match abandoned.");
                return Ok(());
            }
            None => println!("Invalid command. Use 'A1 B1', 'MOVE A1 B1', or HELP."),
        }
    }

    // Final frame with the winner banner.
    println!("{}", render_frame(engine.state()));
    println!("Thanks for playing!");
    Ok(())
}

/// Index of the side to move into the `players` array.
fn side_index(engine: &MatchEngine) -> usize {
    match engine.state().current_side() {
        xoudouqi::Side::One => 0,
        xoudouqi::Side::Two => 1,
    }
}

fn announce_move(event: &MoveEvent) {
    match event.captured() {
        Some(captured) => println!(
            "Move {}: {} {} -> {}, captured the {}.",
            event.move_number(),
            event.moved(),
            event.from(),
            event.to(),
            captured
        ),
        None => println!(
            "Move {}: {} {} -> {}.",
            event.move_number(),
            event.moved(),
            event.from(),
            event.to()
        ),
    }
}

/// Prints a player's recent matches.
fn show_history(db_path: &str, name: &str, limit: i64) -> Result<()> {
    let repo = setup_repository(db_path)?;
    let Some(player) = repo.get_player_by_name(name)? else {
        println!("No player named '{}'.", name);
        return Ok(());
    };
    print_history(&repo, &player, limit)
}

fn print_history(repo: &MatchRepository, player: &Player, limit: i64) -> Result<()> {
    let records = repo.recent_matches(*player.id(), limit)?;
    if records.is_empty() {
        println!("No matches on record for {}.", player.display_name());
        return Ok(());
    }

    println!("Recent matches for {}:", player.display_name());
    for record in records {
        let opponent_id = if record.player_one_id() == player.id() {
            *record.player_two_id()
        } else {
            *record.player_one_id()
        };
        let opponent = repo
            .get_player(opponent_id)?
            .map(|p| p.display_name().clone())
            .unwrap_or_else(|| format!("player #{}", opponent_id));

        let outcome = match record.winner_id() {
            Some(winner) if winner == player.id() => "won",
            Some(_) => "lost",
            None if record.finished() => "draw",
            None => "unfinished",
        };

        println!(
            "  #{:<4} vs {:<16} {:>10}  {} moves  ({})",
            record.id(),
            opponent,
            outcome,
            record.moves_count(),
            record.started_at().format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

/// Prints a player's aggregate standing.
fn show_stats(db_path: &str, name: &str) -> Result<()> {
    let repo = setup_repository(db_path)?;
    let Some(player) = repo.get_player_by_name(name)? else {
        println!("No player named '{}'.", name);
        return Ok(());
    };
    print_standing(&repo, &player)
}

fn print_standing(repo: &MatchRepository, player: &Player) -> Result<()> {
    let standing = repo.standing(*player.id())?;
    println!("Standing for {}:", player.display_name());
    println!("  Matches: {}", standing.total_matches());
    println!("  Wins:    {}", standing.wins());
    println!("  Losses:  {}", standing.losses());
    println!("  Draws:   {}", standing.draws());
    println!("  Win rate: {:.1}%", standing.win_rate());
    Ok(())
}
