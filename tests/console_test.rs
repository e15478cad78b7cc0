//! Tests for console command parsing and board rendering.

use xoudouqi::{
    Command, Coordinate, MatchEngine, Piece, Side, Species, parse_command, render_board,
    render_frame,
};

#[test]
fn test_parse_move_shorthand_and_keyword() {
    let expected = Command::Move {
        from: "A1".to_string(),
        to: "B1".to_string(),
    };
    assert_eq!(parse_command("A1 B1"), Some(expected.clone()));
    assert_eq!(parse_command("MOVE A1 B1"), Some(expected));
}

#[test]
fn test_parse_normalizes_case_and_whitespace() {
    assert_eq!(
        parse_command("  move a1 b1  "),
        Some(Command::Move {
            from: "A1".to_string(),
            to: "B1".to_string(),
        })
    );
    assert_eq!(parse_command("quit"), Some(Command::Quit));
    assert_eq!(parse_command("Help"), Some(Command::Help));
    assert_eq!(parse_command("HISTORY"), Some(Command::History));
    assert_eq!(parse_command("stats"), Some(Command::Stats));
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(parse_command(""), None);
    assert_eq!(parse_command("A1"), None);
    assert_eq!(parse_command("A1 B1 C1"), None);
    assert_eq!(parse_command("MOVE A1"), None);
    assert_eq!(parse_command("DANCE A1 B1"), None);
}

#[test]
fn test_parsed_coordinates_reach_the_engine_normalized() {
    let Some(Command::Move { from, to }) = parse_command("a3 a4") else {
        panic!("Parse failed");
    };

    let mut engine = MatchEngine::untracked();
    engine.apply_move(&from, &to).expect("Move failed");
    assert_eq!(engine.state().move_count(), 1);
}

#[test]
fn test_render_board_shows_all_markers() {
    let board = xoudouqi::Board::new();
    let rendered = render_board(&board);

    // Terrain markers
    assert!(rendered.contains("~~"));
    assert!(rendered.contains("##"));
    assert!(rendered.contains("XX"));
    // A few pieces of both sides
    assert!(rendered.contains("L1"));
    assert!(rendered.contains("E1"));
    assert!(rendered.contains("T2"));
    assert!(rendered.contains("R2"));
    // Column header and legend
    assert!(rendered.contains("A  B  C  D  E  F  G"));
    assert!(rendered.contains("E=Elephant"));

    // One line per row, each starting with its row number.
    for row in 1..=9 {
        assert!(rendered.contains(&format!("{}|", row)), "row {}", row);
    }
}

#[test]
fn test_render_frame_announces_turn_and_winner() {
    let mut engine = MatchEngine::untracked();
    let frame = render_frame(engine.state());
    assert!(frame.contains("player 1's turn"));
    assert!(frame.contains("Player 1 to move"));

    let board = engine.state_mut().board_mut();
    board.remove(Coordinate::new(2, 4));
    board.place(Coordinate::new(7, 3), Piece::new(Species::Wolf, Side::One));
    engine.apply_move("D8", "D9").expect("Winning move failed");

    let frame = render_frame(engine.state());
    assert!(frame.contains("Player 1 wins!"));
}
