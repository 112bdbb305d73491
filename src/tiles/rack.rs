use super::{Label, Letter, Word, ALPHABET_LEN};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The letters a player holds: a multiset of letters and blanks.
///
/// `Rack` is `Copy`. Removing a letter returns a new rack, so every branch of
/// the search works on its own copy.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rack {
    /// Count per label, index 0 counts the blanks
    counts: [u8; ALPHABET_LEN + 1],
}

impl Rack {
    pub fn new() -> Rack {
        Rack::default()
    }

    fn index(letter: Letter) -> usize {
        letter.label() as usize
    }

    /// Total number of letters, blanks included
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Number of times `letter` occurs on the rack
    pub fn count(&self, letter: Letter) -> usize {
        self.counts[Rack::index(letter)] as usize
    }

    /// Number of blanks
    pub fn blanks(&self) -> usize {
        self.counts[0] as usize
    }

    /// Check if the regular letter `label` is on the rack.
    pub fn has_label(&self, label: Label) -> bool {
        self.counts.get(label as usize).map_or(false, |&n| n > 0)
    }

    pub fn insert(&mut self, letter: Letter) {
        self.counts[Rack::index(letter)] += 1;
    }

    /// Return a copy of the rack without one `letter`, or `None` if the letter is not present.
    pub fn remove(&self, letter: Letter) -> Option<Rack> {
        let i = Rack::index(letter);
        if self.counts[i] == 0 {
            return None;
        }
        let mut rack = *self;
        rack.counts[i] -= 1;
        Some(rack)
    }

    /// Return a copy of the rack without the letters used to play `tiles`.
    /// A wildcard tile uses a blank.
    pub fn without(&self, tiles: &Word) -> Option<Rack> {
        tiles
            .iter()
            .try_fold(*self, |rack, tile| rack.remove(tile.letter()))
    }

    /// Iterate over the distinct letters on the rack, blank last.
    pub fn distinct(&self) -> impl Iterator<Item = Letter> + '_ {
        let letters = (1..=ALPHABET_LEN)
            .filter(move |&i| self.counts[i] > 0)
            .map(|i| Letter::from_label(i as Label));
        let blank = if self.counts[0] > 0 {
            Some(Letter::blank())
        } else {
            None
        };
        letters.chain(blank)
    }

    /// Iterate over all letters on the rack, with repetition, blanks last.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.distinct()
            .flat_map(move |letter| std::iter::repeat(letter).take(self.count(letter)))
    }
}

impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(letters: &str) -> Result<Self, Self::Error> {
        let mut rack = Rack::new();
        for ch in letters.chars() {
            rack.insert(Letter::try_from(ch)?);
        }
        Ok(rack)
    }
}

impl FromStr for Rack {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rack::try_from(s)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
