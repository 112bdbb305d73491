use super::{Label, Tile, DIM};
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, Range};
use std::slice::Iter;
use std::str::FromStr;
use tinyvec::TinyVec;

pub(super) type Tiles = TinyVec<[Tile; DIM]>;

/// A list of [`Tile`](crate::Tile)s, in the order they are laid on the board.
///
/// Displayed with uppercase letters for regular tiles, and lowercase letters for wildcards.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word(Tiles);

impl Word {
    pub fn new() -> Word {
        Word(Tiles::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, tile: Tile) {
        self.0.push(tile);
    }

    pub fn iter(&self) -> Iter<Tile> {
        self.0.iter()
    }

    /// Return a copy of this word with `tile` appended.
    pub fn with(&self, tile: Tile) -> Word {
        let mut word = self.clone();
        word.push(tile);
        word
    }

    /// Return the letter labels, ignoring the wildcard attribute.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.0.iter().map(Tile::label)
    }

    /// The word as it is spelled in the dictionary: all uppercase.
    pub fn spelling(&self) -> String {
        self.0.iter().map(Tile::to_char).collect()
    }

    /// Sum of the tile points, without any bonus.
    pub fn points(&self) -> u32 {
        self.0.iter().map(Tile::points).sum()
    }
}

impl Index<usize> for Word {
    type Output = Tile;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Index<Range<usize>> for Word {
    type Output = [Tile];
    fn index(&self, range: Range<usize>) -> &Self::Output {
        &self.0[range]
    }
}

impl FromIterator<Tile> for Word {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Tile;
    type IntoIter = Iter<'a, Tile>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Word {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Tile::try_from).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
