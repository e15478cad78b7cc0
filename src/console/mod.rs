//! Text presentation layer: board rendering and command parsing.

mod input;
mod render;

pub use input::{Command, parse_command};
pub use render::{help_text, render_board, render_frame, rules_text};
