use crate::Word;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board: `row` from the top, `col` from the left, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// The same square on the transposed board.
    pub fn transposed(self) -> Position {
        Position::new(self.col, self.row)
    }

    /// The position `n` squares further in `direction`.
    pub fn step(self, direction: Direction, n: usize) -> Position {
        match direction {
            Direction::Across => Position::new(self.row, self.col + n),
            Direction::Down => Position::new(self.row + n, self.col),
        }
    }

    /// The position one square back in `direction`, if it is not off the board.
    pub fn back(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Across => self.col.checked_sub(1).map(|c| Position::new(self.row, c)),
            Direction::Down => self.row.checked_sub(1).map(|r| Position::new(r, self.col)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of a word on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// left to right
    Across,
    /// top to bottom
    Down,
}

impl Direction {
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A word placement and its score.
///
/// A `Move` is a plain value; only [`Board::apply`](crate::Board::apply) changes a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// points for this move, cross words included
    pub score: u32,
    /// square of the first letter
    pub position: Position,
    pub direction: Direction,
    /// the complete word, including letters that were already on the board
    pub word: Word,
}

impl Move {
    pub fn new(score: u32, position: Position, direction: Direction, word: Word) -> Move {
        Move {
            score,
            position,
            direction,
            word,
        }
    }

    /// The same move on the transposed board.
    pub fn transposed(self) -> Move {
        Move {
            position: self.position.transposed(),
            direction: self.direction.perpendicular(),
            ..self
        }
    }

    /// Iterate over the squares covered by the word.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.word.len()).map(move |n| self.position.step(self.direction, n))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at {} {}: {}",
            self.word, self.position, self.direction, self.score
        )
    }
}
