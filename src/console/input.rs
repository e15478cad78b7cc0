//! Parsing of console commands into engine input.

use tracing::debug;

/// A command entered during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move a piece between two cells, given in normalized notation.
    Move {
        /// Origin cell text, uppercased.
        from: String,
        /// Destination cell text, uppercased.
        to: String,
    },
    /// Show the in-game help.
    Help,
    /// Show the current player's recent matches.
    History,
    /// Show the current player's standing.
    Stats,
    /// Abandon the match.
    Quit,
}

/// Parses one input line into a [`Command`].
///
/// Input is case-insensitive; coordinates are uppercased here so the core
/// only ever sees normalized notation. Both `MOVE A1 B1` and the `A1 B1`
/// shorthand are accepted. Returns `None` for empty or unrecognized input.
pub fn parse_command(line: &str) -> Option<Command> {
    let normalized = line.trim().to_uppercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let command = match tokens.as_slice() {
        ["HELP"] => Command::Help,
        ["HISTORY"] => Command::History,
        ["STATS"] => Command::Stats,
        ["QUIT"] => Command::Quit,
        ["MOVE", from, to] => Command::Move {
            from: (*from).to_string(),
            to: (*to).to_string(),
        },
        [from, to] => Command::Move {
            from: (*from).to_string(),
            to: (*to).to_string(),
        },
        _ => {
            debug!(input = %line, "Unrecognized command");
            return None;
        }
    };

    Some(command)
}
