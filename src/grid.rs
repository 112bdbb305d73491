use crate::{Error, Position};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

/// Upper left quadrant of a Scrabble board, border included.
const SCRABBLE_QUADRANT: [&str; 9] = [
    "|||||||||",
    "|3..:...3",
    "|.2...;..",
    "|..2...:.",
    "|:..2...:",
    "|....2...",
    "|.;...;..",
    "|..:...:.",
    "|3..:...*",
];

/// Upper left quadrant of a Words With Friends board, border included.
const WWF_QUADRANT: [&str; 9] = [
    "|||||||||",
    "|...3..;.",
    "|..:..2..",
    "|.:..:...",
    "|3..;...2",
    "|..:...:.",
    "|.2...3..",
    "|;...:...",
    "|...:...*",
];

/// The built-in board layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The classic 15x15 Scrabble board
    Scrabble,
    /// The 15x15 Words With Friends board
    WordsWithFriends,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Scrabble
    }
}

impl Layout {
    fn quadrant(self) -> &'static [&'static str] {
        match self {
            Layout::Scrabble => &SCRABBLE_QUADRANT,
            Layout::WordsWithFriends => &WWF_QUADRANT,
        }
    }
}

/// A square of the bonus grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// Not part of the board
    Border,
    NoBonus,
    /// The start square; scores as a double word square
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Cell::{Border, LetterBonus, NoBonus, Start, WordBonus};

impl Cell {
    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterBonus(n) => n,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            WordBonus(n) => n,
            Start => 2,
            _ => 1,
        }
    }

    pub fn is_border(self) -> bool {
        self == Border
    }

    pub fn is_start(self) -> bool {
        self == Start
    }

    fn symbol(self) -> char {
        match self {
            Border => '|',
            NoBonus => '.',
            Start => '*',
            LetterBonus(3) => ';',
            LetterBonus(_) => ':',
            WordBonus(3) => '3',
            WordBonus(_) => '2',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '|' => Ok(Border),
            '.' => Ok(NoBonus),
            '*' => Ok(Start),
            ':' => Ok(LetterBonus(2)),
            ';' => Ok(LetterBonus(3)),
            '2' => Ok(WordBonus(2)),
            '3' => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(ch)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

type Inner = Vec<Vec<Cell>>;

/// Bonus grid of a board.
///
/// Each square is a border square, a plain square, the start square, or carries
/// a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The grid is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::from(Layout::default())
    }
}

impl From<Layout> for Grid {
    fn from(layout: Layout) -> Self {
        // the built-in quadrants are well formed
        Grid::from_quadrant(layout.quadrant()).expect("invalid built-in layout")
    }
}

/// Parse rows of template symbols; all rows must have the same length.
fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Inner, Error> {
    let expected = match rows.first() {
        Some(row) => row.as_ref().chars().count(),
        None => return Err(Error::InvalidRowCount(0)),
    };
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row
                .as_ref()
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<_>, Error>>()?;
            if cells.len() != expected {
                return Err(Error::InvalidRowLength {
                    row: i,
                    len: cells.len(),
                    expected,
                });
            }
            Ok(cells)
        })
        .collect()
}

/// `abc` -> `abcba`
fn mirror<T: Clone>(v: &[T]) -> Vec<T> {
    let mut mirrored = v.to_vec();
    mirrored.extend(v.iter().rev().skip(1).cloned());
    mirrored
}

impl Grid {
    /// Create a grid of `rows` x `cols` plain squares, without a start square.
    pub fn empty(rows: usize, cols: usize) -> Grid {
        Grid(vec![vec![NoBonus; cols]; rows])
    }

    /// Create a `Grid` from a complete template, one string per row.
    ///
    /// Symbols: `|` border, `.` plain square, `*` start square, `:` double letter,
    /// `;` triple letter, `2` double word, `3` triple word.
    /// ## Errors
    /// If the template is empty, rows have different lengths, or contain unknown symbols.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&["3.:", ".*.", ":.2"])?;
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.cols(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        Ok(Grid(parse_rows(rows)?))
    }

    /// Create a symmetrical grid by mirroring the upper left quadrant
    /// horizontally and vertically. The last row and column of the quadrant are
    /// the center row and column of the grid.
    /// ## Errors
    /// As [`from_strings`](Grid::from_strings).
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Grid, Error};
    /// let grid = Grid::from_quadrant(&["|||", "|3.", "|.*"])?;
    /// assert_eq!(grid.to_strings(), vec!["|||||", "|3.3|", "|.*.|", "|3.3|", "|||||"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_quadrant<S: AsRef<str>>(quadrant: &[S]) -> Result<Grid, Error> {
        let rows = parse_rows(quadrant)?;
        let rows: Inner = rows.iter().map(|row| mirror(row)).collect();
        Ok(Grid(mirror(&rows)))
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Return the cell at `pos`; outside the grid everything is `Border`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.0
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(Border)
    }

    /// Return the grid with rows and columns swapped.
    pub fn transpose(&self) -> Grid {
        let inner = (0..self.cols())
            .map(|c| self.0.iter().map(|row| row[c]).collect())
            .collect();
        Grid(inner)
    }

    /// Get grid cells as a list of strings, one per row
    pub fn to_strings(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}
