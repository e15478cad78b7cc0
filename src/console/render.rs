//! Plain-text rendering of the board and match state.

use strum::IntoEnumIterator;

use crate::game::{Board, Coordinate, MatchState, MatchStatus, Side, Species};

/// Renders the 9x7 grid with piece and terrain markers.
///
/// Pieces print as symbol plus side (`E1`), rivers as `~~`, sanctuaries as
/// `##`, traps as `XX`, and empty cells as `..`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("   A  B  C  D  E  F  G\n");
    out.push_str("  =====================\n");

    for row in 0..Board::ROWS {
        out.push_str(&format!("{}|", row + 1));
        for col in 0..Board::COLS {
            let cell = Coordinate::new(row, col);
            let marker = if let Some(piece) = board.piece_at(cell) {
                piece.to_string()
            } else if board.is_river(cell) {
                "~~".to_string()
            } else if cell == Board::sanctuary(Side::One) || cell == Board::sanctuary(Side::Two) {
                "##".to_string()
            } else if board.is_trap(cell, Side::One) || board.is_trap(cell, Side::Two) {
                "XX".to_string()
            } else {
                "..".to_string()
            };
            out.push(' ');
            out.push_str(&marker);
        }
        out.push_str(" |\n");
    }

    out.push_str("  =====================\n");
    out.push_str("  ## sanctuary  XX trap  ~~ river\n");

    let legend: Vec<String> = Species::iter()
        .map(|species| format!("{}={}", species.symbol(), species.name()))
        .collect();
    out.push_str(&format!("  {}\n", legend.join(" ")));

    out
}

/// Renders the full game frame: turn banner, board, and status line.
pub fn render_frame(state: &MatchState) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(50));
    out.push('\n');
    out.push_str(&format!(
        "XOU DOU QI - player {}'s turn, {} moves played\n",
        state.current_side(),
        state.move_count()
    ));
    out.push_str(&"=".repeat(50));
    out.push('\n');
    out.push_str(&render_board(state.board()));

    match state.status() {
        MatchStatus::InProgress => {
            out.push_str(&format!(
                "\nPlayer {} to move. Enter a move (e.g. A1 B1) or HELP.\n",
                state.current_side()
            ));
        }
        MatchStatus::Ended { winner: Some(side) } => {
            out.push_str(&format!("\nMATCH OVER. Player {} wins!\n", side));
        }
        MatchStatus::Ended { winner: None } => {
            out.push_str("\nMATCH OVER. Draw.\n");
        }
    }

    out
}

/// In-game command help.
pub fn help_text() -> String {
    "\
Commands:
  MOVE <from> <to>  move a piece (e.g. MOVE A1 B1)
  <from> <to>       shorthand for MOVE (e.g. A1 B1)
  HELP              show this help
  HISTORY           show your recent matches
  STATS             show your standing
  QUIT              abandon the match

Cells are column A-G plus row 1-9; A1 is the top-left corner.
"
    .to_string()
}

/// The movement and capture rules, for the `rules` subcommand.
pub fn rules_text() -> String {
    "\
XOU DOU QI (Jungle chess)

Two players command eight animals each on a 9x7 board split by two river
pools. Side 1 starts at the top, side 2 at the bottom.

Goal: move any of your pieces onto the opposing sanctuary (##). Entering
your own sanctuary is never allowed.

Movement:
  - Pieces move one cell horizontally or vertically.
  - Only the Rat may enter the water (~~).
  - Lion and Tiger may leap in a straight line across a river pool,
    landing on the first cell beyond it. A rat anywhere in the crossed
    water blocks the leap.

Captures:
  - Strength order: Elephant > Lion > Tiger > Panther > Dog > Wolf >
    Cat > Rat. A piece captures enemies of equal or lower strength.
  - Exception: the Rat captures the Elephant, and the Elephant can never
    capture the Rat.
  - A piece standing in an enemy trap (XX) loses its rank protection and
    can be captured by any piece.
  - A Rat leaving the water cannot capture on the same move.
"
    .to_string()
}
