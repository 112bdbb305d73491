use super::codes::{char_from_label, label_from_char, Code, Label, BLANK, LETTER_MASK};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU8;

/// A letter on the rack, that can be played as a [`Tile`](crate::Tile) on the board.
///
/// Either a regular letter or a `blank` ("*" or "_") that can be used as any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(NonZeroU8);

impl Letter {
    fn new(code: Code) -> Letter {
        Letter(NonZeroU8::new(code).expect("letter code can't be 0"))
    }

    /// Return the regular letter for `label` (1 ..= 26)
    pub fn from_label(label: Label) -> Letter {
        debug_assert!((1..=26).contains(&label));
        Letter::new(label & LETTER_MASK)
    }

    /// Return new blank
    pub fn blank() -> Letter {
        Letter::new(BLANK)
    }

    /// Check if letter is `blank`
    pub fn is_blank(&self) -> bool {
        self.code() == BLANK
    }

    /// Get label for letter, 0 for a blank.
    pub fn label(&self) -> Label {
        self.code() & LETTER_MASK
    }

    pub fn code(&self) -> Code {
        self.0.get()
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '*' | '_' => Ok(Letter::blank()),
            _ => label_from_char(ch)
                .map(Letter::from_label)
                .ok_or(Error::InvalidRackLetter(ch)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_blank() {
            write!(f, "*")
        } else {
            write!(f, "{}", char_from_label(self.label()))
        }
    }
}
