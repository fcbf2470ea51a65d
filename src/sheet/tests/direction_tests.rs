//! Tests for the direction enumeration

use crate::sheet::direction::Direction;
use crate::sheet::errors::ForgeError;

#[test]
fn test_parse_all_tokens() {
    assert_eq!(Direction::parse("s").unwrap(), Direction::South);
    assert_eq!(Direction::parse("w").unwrap(), Direction::West);
    assert_eq!(Direction::parse("n").unwrap(), Direction::North);
    assert_eq!(Direction::parse("e").unwrap(), Direction::East);
    assert_eq!(Direction::parse("ne").unwrap(), Direction::NorthEast);
    assert_eq!(Direction::parse("nw").unwrap(), Direction::NorthWest);
    assert_eq!(Direction::parse("se").unwrap(), Direction::SouthEast);
    assert_eq!(Direction::parse("sw").unwrap(), Direction::SouthWest);
}

#[test]
fn test_parse_unknown_token() {
    let result = Direction::parse("north");
    assert!(matches!(result, Err(ForgeError::UnknownDirection(_))));

    let result = Direction::parse("");
    assert!(matches!(result, Err(ForgeError::UnknownDirection(_))));
}

#[test]
fn test_token_round_trip() {
    for direction in Direction::ALL {
        assert_eq!(Direction::parse(direction.token()).unwrap(), direction);
    }
}

#[test]
fn test_cardinal_row_indices() {
    // Row order is S, W, N, E from the top of the sheet
    assert_eq!(Direction::South.row_index(), Some(0));
    assert_eq!(Direction::West.row_index(), Some(1));
    assert_eq!(Direction::North.row_index(), Some(2));
    assert_eq!(Direction::East.row_index(), Some(3));

    for direction in Direction::DIAGONALS {
        assert_eq!(direction.row_index(), None);
    }
}

#[test]
fn test_diagonal_source_rows() {
    // North-facing diagonals lean the North row, south-facing the South row
    assert_eq!(Direction::NorthEast.source_row(), Some(2));
    assert_eq!(Direction::NorthWest.source_row(), Some(2));
    assert_eq!(Direction::SouthEast.source_row(), Some(0));
    assert_eq!(Direction::SouthWest.source_row(), Some(0));

    for direction in Direction::CARDINALS {
        assert_eq!(direction.source_row(), None);
    }
}

#[test]
fn test_shear_signs() {
    assert_eq!(Direction::NorthEast.shear_sign(), 1.0);
    assert_eq!(Direction::SouthEast.shear_sign(), 1.0);
    assert_eq!(Direction::NorthWest.shear_sign(), -1.0);
    assert_eq!(Direction::SouthWest.shear_sign(), -1.0);

    for direction in Direction::CARDINALS {
        assert_eq!(direction.shear_sign(), 0.0);
    }
}

#[test]
fn test_combined_sheet_order() {
    let tokens: Vec<&str> = Direction::ALL.iter().map(|d| d.token()).collect();
    assert_eq!(tokens, vec!["s", "w", "n", "e", "se", "sw", "ne", "nw"]);
}

#[test]
fn test_is_diagonal() {
    for direction in Direction::CARDINALS {
        assert!(!direction.is_diagonal());
    }
    for direction in Direction::DIAGONALS {
        assert!(direction.is_diagonal());
    }
}
