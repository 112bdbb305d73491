use super::Tile;
use crate::anchors::Anchor;

/// A square of the board.
///
/// A board only stores `Empty`, `Letter` and `Border` squares. `Anchor`
/// squares appear in the anchored rows built for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Empty,
    Letter(Tile),
    Border,
    Anchor(Anchor),
}

impl Default for Square {
    fn default() -> Self {
        Square::Empty
    }
}

impl Square {
    /// Get the contained tile or None
    pub fn tile(&self) -> Option<Tile> {
        match self {
            Square::Letter(tile) => Some(*tile),
            _ => None,
        }
    }

    pub fn is_letter(&self) -> bool {
        matches!(self, Square::Letter(_))
    }

    /// Check if a tile can be placed here (anchors included).
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty | Square::Anchor(_))
    }

    pub fn is_border(&self) -> bool {
        matches!(self, Square::Border)
    }

    pub fn anchor(&self) -> Option<Anchor> {
        match self {
            Square::Anchor(anchor) => Some(*anchor),
            _ => None,
        }
    }
}

impl From<Tile> for Square {
    fn from(tile: Tile) -> Self {
        Square::Letter(tile)
    }
}
