//! Tests for board coordinates and notation.

use xoudouqi::{Coordinate, MoveError};

#[test]
fn test_notation_round_trip_all_cells() {
    for row in 0..9 {
        for col in 0..7 {
            let coord = Coordinate::new(row, col);
            let parsed = Coordinate::from_notation(&coord.notation()).expect("Parse failed");
            assert_eq!(parsed, coord);
        }
    }
}

#[test]
fn test_notation_corners() {
    assert_eq!(Coordinate::new(0, 0).notation(), "A1");
    assert_eq!(Coordinate::new(8, 6).notation(), "G9");
    assert_eq!(
        Coordinate::from_notation("D5").expect("Parse failed"),
        Coordinate::new(4, 3)
    );
}

#[test]
fn test_malformed_notation_rejected() {
    for text in ["", "A", "A10", "H1", "A0", "11", "AA", "1A", "a1", "b2", "A1 "] {
        let result = Coordinate::from_notation(text);
        assert!(
            matches!(result, Err(MoveError::InvalidNotation { .. })),
            "'{}' should be rejected",
            text
        );
    }
}

#[test]
fn test_is_valid_bounds() {
    assert!(Coordinate::new(0, 0).is_valid());
    assert!(Coordinate::new(8, 6).is_valid());
    assert!(!Coordinate::new(-1, 0).is_valid());
    assert!(!Coordinate::new(9, 0).is_valid());
    assert!(!Coordinate::new(0, 7).is_valid());
}

#[test]
fn test_manhattan_distance() {
    let origin = Coordinate::new(4, 3);
    assert_eq!(origin.manhattan_distance(Coordinate::new(4, 3)), 0);
    assert_eq!(origin.manhattan_distance(Coordinate::new(4, 4)), 1);
    assert_eq!(origin.manhattan_distance(Coordinate::new(5, 4)), 2);
    assert_eq!(origin.manhattan_distance(Coordinate::new(0, 0)), 7);
}

#[test]
fn test_adjacency_excludes_diagonals() {
    let origin = Coordinate::new(4, 3);
    assert!(origin.is_adjacent(Coordinate::new(3, 3)));
    assert!(origin.is_adjacent(Coordinate::new(5, 3)));
    assert!(origin.is_adjacent(Coordinate::new(4, 2)));
    assert!(origin.is_adjacent(Coordinate::new(4, 4)));
    // Diagonal neighbours have Manhattan distance 2.
    assert!(!origin.is_adjacent(Coordinate::new(5, 4)));
    assert!(!origin.is_adjacent(Coordinate::new(3, 2)));
    // Same cell is not adjacent to itself.
    assert!(!origin.is_adjacent(origin));
}
