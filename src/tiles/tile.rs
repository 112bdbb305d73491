use super::codes::{
    char_from_label, label_from_char, points, Code, Label, IS_WILDCARD, LETTER_MASK, UNINIT,
};
use super::Letter;
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU8;

/// A tile on the board, either a regular letter or a wildcard (blank used as letter)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile(NonZeroU8);

impl Default for Tile {
    fn default() -> Self {
        Self::new(UNINIT)
    }
}

impl Tile {
    fn new(code: Code) -> Tile {
        Tile(NonZeroU8::new(code).expect("tile code can't be 0"))
    }

    /// Return a regular tile for letter `label`
    pub fn from_label(label: Label) -> Tile {
        Tile::new(label & LETTER_MASK)
    }

    /// Create `Tile` from a regular `Letter`.
    /// Returns `None` for a blank, which needs a letter assigned first.
    pub fn from_letter(letter: Letter) -> Option<Tile> {
        if letter.is_blank() {
            None
        } else {
            Some(Tile::from_label(letter.label()))
        }
    }

    /// Return a wildcard tile for letter `label`.
    /// ## Example
    /// ```
    /// use wordplay_solver::Tile;
    /// let tile = Tile::wildcard(1);
    /// assert!(tile.is_wildcard());
    /// assert_eq!(tile.to_string(), "a");
    /// ```
    pub fn wildcard(label: Label) -> Tile {
        Tile::new((label & LETTER_MASK) | IS_WILDCARD)
    }

    /// Check if the tile is a wildcard
    pub fn is_wildcard(&self) -> bool {
        self.code() & IS_WILDCARD != 0
    }

    /// Get label for tile, ignoring the wildcard attribute.
    pub fn label(&self) -> Label {
        self.code() & LETTER_MASK
    }

    pub fn code(&self) -> Code {
        self.0.get()
    }

    /// The rack letter this tile was played from.
    pub fn letter(&self) -> Letter {
        if self.is_wildcard() {
            Letter::blank()
        } else {
            Letter::from_label(self.label())
        }
    }

    /// Points for this tile. A wildcard is worth nothing.
    pub fn points(&self) -> u32 {
        if self.is_wildcard() {
            0
        } else {
            points(self.label())
        }
    }

    /// The uppercase letter this tile stands for.
    pub fn to_char(&self) -> char {
        char_from_label(self.label())
    }
}

/// Uppercase letters are regular tiles, lowercase letters are wildcards.
impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match label_from_char(ch) {
            Some(label) if ch.is_ascii_uppercase() => Ok(Tile::from_label(label)),
            Some(label) => Ok(Tile::wildcard(label)),
            None => Err(Error::InvalidTile(ch)),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ch = self.to_char();
        if self.is_wildcard() {
            write!(f, "{}", ch.to_ascii_lowercase())
        } else {
            write!(f, "{}", ch)
        }
    }
}
