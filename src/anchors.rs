//! Anchor squares: the empty squares where a new word has to touch the board.
use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::letterset::LetterSet;
use crate::tiles::{Label, Square};
use crate::{Direction, Position};
#[cfg(feature = "flame_it")]
use flamer::flame;
use std::fmt;

/// An empty square next to a tile, or the empty start square.
/// Every play covers at least one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Any letter can be placed
    Unrestricted,
    /// Only these letters form a valid word with the letters above and below
    Restricted(LetterSet),
}

impl Anchor {
    /// Check if a tile for `label` may be placed on this anchor.
    pub fn allows(&self, label: Label) -> bool {
        match self {
            Anchor::Unrestricted => true,
            Anchor::Restricted(letters) => letters.contains(label),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Anchor::Unrestricted => write!(f, "*"),
            Anchor::Restricted(letters) => write!(f, "{}", letters),
        }
    }
}

/// Return row `r` of `board` with its anchors marked.
///
/// An empty square is an anchor if it is the start square, or if it has a tile
/// on any side. With a tile above or below, the anchor only allows the letters
/// that make the vertical word a dictionary word.
///
/// ## Examples
/// ```
/// # use wordplay_solver::{anchored_row, Anchor, Board, Dictionary, Grid, Square, Error};
/// let dictionary = Dictionary::from_words(&["at", "it"]);
/// let board = Board::new(Grid::empty(2, 3)).with_state_from_strings(&["...", ".T."])?;
/// let row = anchored_row(&board, 0, &dictionary);
/// assert_eq!(row[0], Square::Empty);
/// assert_eq!(row[1].anchor().map(|a| a.to_string()), Some(String::from("AI")));
/// assert_eq!(row[2], Square::Empty);
/// # Ok::<(), Error>(())
/// ```
#[cfg_attr(feature = "flame_it", flame)]
pub fn anchored_row(board: &Board, r: usize, dictionary: &Dictionary) -> Vec<Square> {
    board
        .row(r)
        .iter()
        .enumerate()
        .map(|(c, &square)| {
            let pos = Position::new(r, c);
            if square != Square::Empty {
                return square;
            }
            if !board.is_start(pos) && !board.neighbors(pos).any_letter() {
                return Square::Empty;
            }
            let cross = board.cross_word_at(pos, Direction::Down);
            if cross.is_empty() {
                Square::Anchor(Anchor::Unrestricted)
            } else {
                Square::Anchor(Anchor::Restricted(dictionary.legal_letters(&cross)))
            }
        })
        .collect()
}

/// Return all anchors of `board` for horizontal plays, row by row.
pub fn anchors(board: &Board, dictionary: &Dictionary) -> Vec<(Position, Anchor)> {
    (0..board.rows())
        .flat_map(|r| {
            anchored_row(board, r, dictionary)
                .into_iter()
                .enumerate()
                .filter_map(move |(c, square)| square.anchor().map(|a| (Position::new(r, c), a)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Grid};

    type Result<T> = std::result::Result<T, Error>;

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(&["cab", "cabs", "hat", "hats", "at", "ta", "tab"])
    }

    fn test_board() -> Result<Board> {
        let grid = Grid::from_strings(&[
            "|||||||", "|3...3|", "|.:.:.|", "|..*..|", "|.;.2.|", "|||||||",
        ])?;
        Board::new(grid).with_state_from_strings(&[
            "|||||||", "|..C..|", "|.HAT.|", "|..B..|", "|.....|", "|||||||",
        ])
    }

    #[test]
    fn test_empty_board() -> Result<()> {
        let grid = Grid::from_strings(&["|||||", "|...|", "|.*.|", "|...|", "|||||"])?;
        let board = Board::new(grid);
        let found = anchors(&board, &test_dictionary());
        assert_eq!(found, vec![(Position::new(2, 2), Anchor::Unrestricted)]);
        Ok(())
    }

    #[test]
    fn test_no_anchors() {
        let board = Board::new(Grid::empty(3, 3));
        assert!(anchors(&board, &test_dictionary()).is_empty());
    }

    #[test]
    fn test_anchored_row() -> Result<()> {
        let board = test_board()?;
        let dictionary = test_dictionary();
        let row = anchored_row(&board, 4, &dictionary);
        assert_eq!(row[0], Square::Border);
        assert_eq!(row[1], Square::Empty);
        assert_eq!(row[2], Square::Empty);
        // below "CAB"
        assert_eq!(row[3], Square::Anchor(Anchor::Restricted(LetterSet::from(vec![19]))));
        assert_eq!(row[4], Square::Empty);
        let row = anchored_row(&board, 2, &dictionary);
        assert_eq!(row[1], Square::Anchor(Anchor::Unrestricted));
        assert!(row[2].is_letter());
        assert_eq!(row[5], Square::Anchor(Anchor::Unrestricted));
        Ok(())
    }

    #[test]
    fn test_restricted_anchor() -> Result<()> {
        let board = test_board()?;
        let dictionary = test_dictionary();
        // no word ends in "H"
        let row = anchored_row(&board, 1, &dictionary);
        assert_eq!(row[2], Square::Anchor(Anchor::Restricted(LetterSet::new())));
        assert_eq!(row[4], Square::Anchor(Anchor::Restricted(LetterSet::from(vec![1]))));
        let anchor = row[4].anchor().unwrap();
        assert!(anchor.allows(1));
        assert!(!anchor.allows(2));
        assert!(Anchor::Unrestricted.allows(26));
        Ok(())
    }

    #[test]
    fn test_anchor_count() -> Result<()> {
        let board = test_board()?;
        // the start square is covered by "B", so all anchors touch a tile
        let found = anchors(&board, &test_dictionary());
        assert_eq!(found.len(), 7);
        Ok(())
    }
}
