//! Command-line interface for xoudouqi.

use clap::{Parser, Subcommand};

/// Xou Dou Qi - Jungle chess with persistent match history
#[derive(Parser, Debug)]
#[command(name = "xoudouqi")]
#[command(about = "Jungle chess rule engine and console game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a two-player match on this machine
    Play {
        /// Path to the database file (created if it doesn't exist)
        #[arg(long)]
        db_path: Option<String>,

        /// Play without profiles; nothing is recorded
        #[arg(long)]
        casual: bool,
    },

    /// Show a player's recent matches
    History {
        /// Player display name
        name: String,

        /// Path to the database file
        #[arg(long)]
        db_path: Option<String>,

        /// Maximum number of matches listed
        #[arg(long, default_value = "10")]
        limit: i64,
    },

    /// Show a player's win/loss/draw standing
    Stats {
        /// Player display name
        name: String,

        /// Path to the database file
        #[arg(long)]
        db_path: Option<String>,
    },

    /// Print the movement and capture rules
    Rules,
}
