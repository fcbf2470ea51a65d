//! Facing directions for LPC character sprites
//!
//! The four cardinal directions are present in the source art as sheet rows;
//! the four diagonal directions are synthesized from a cardinal row via a
//! horizontal shear.

use std::fmt;

use crate::sheet::errors::{ForgeError, ForgeResult};

/// A character facing direction
///
/// Cardinal directions map directly to a row of the 4-row sheet layout.
/// Diagonal directions carry a synthesis recipe instead: a source row plus
/// a shear sign (see `transform::shear`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    West,
    North,
    East,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// The four cardinal directions in sheet row order (S, W, N, E)
    pub const CARDINALS: [Direction; 4] = [
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::East,
    ];

    /// The four synthesized diagonal directions
    pub const DIAGONALS: [Direction; 4] = [
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// All eight directions in combined-sheet row order
    pub const ALL: [Direction; 8] = [
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// Parse a direction token
    ///
    /// # Arguments
    /// * `token` - Lowercase compass token ("n", "e", "s", "w", "ne", "nw", "se", "sw")
    ///
    /// # Returns
    /// The parsed direction, or `UnknownDirection` for any other token
    pub fn parse(token: &str) -> ForgeResult<Direction> {
        match token {
            "s" => Ok(Direction::South),
            "w" => Ok(Direction::West),
            "n" => Ok(Direction::North),
            "e" => Ok(Direction::East),
            "ne" => Ok(Direction::NorthEast),
            "nw" => Ok(Direction::NorthWest),
            "se" => Ok(Direction::SouthEast),
            "sw" => Ok(Direction::SouthWest),
            other => Err(ForgeError::UnknownDirection(other.to_string())),
        }
    }

    /// Compass token for this direction
    pub fn token(&self) -> &'static str {
        match self {
            Direction::South => "s",
            Direction::West => "w",
            Direction::North => "n",
            Direction::East => "e",
            Direction::NorthEast => "ne",
            Direction::NorthWest => "nw",
            Direction::SouthEast => "se",
            Direction::SouthWest => "sw",
        }
    }

    /// Whether this is a synthesized diagonal direction
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::NorthWest | Direction::SouthEast | Direction::SouthWest
        )
    }

    /// Sheet row index for a cardinal direction
    ///
    /// Rows are ordered South, West, North, East. This ordering matches the
    /// LPC sheet layout and must not be changed.
    ///
    /// # Returns
    /// The row index 0-3, or None for diagonal directions
    pub fn row_index(&self) -> Option<u32> {
        match self {
            Direction::South => Some(0),
            Direction::West => Some(1),
            Direction::North => Some(2),
            Direction::East => Some(3),
            _ => None,
        }
    }

    /// Sheet row a diagonal direction is synthesized from
    ///
    /// NE and NW lean the back-facing North row; SE and SW lean the
    /// front-facing South row. The adjacent cardinal row shares the most
    /// silhouette with the target diagonal.
    ///
    /// # Returns
    /// The source row index, or None for cardinal directions
    pub fn source_row(&self) -> Option<u32> {
        match self {
            Direction::NorthEast | Direction::NorthWest => Some(2),
            Direction::SouthEast | Direction::SouthWest => Some(0),
            _ => None,
        }
    }

    /// Horizontal shear sign for a diagonal direction
    ///
    /// East-leaning diagonals shear rightward (+1), west-leaning diagonals
    /// shear leftward (-1). Cardinals have no shear.
    pub fn shear_sign(&self) -> f64 {
        match self {
            Direction::NorthEast | Direction::SouthEast => 1.0,
            Direction::NorthWest | Direction::SouthWest => -1.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
