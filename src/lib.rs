//! A move generator and scorer for Scrabble-like word games.
//! <br>
//! Given the letters on a player's rack and the tiles on the board, this crate finds
//! every legal play, scores it with the bonus squares of the board, and selects the
//! highest scoring one.
//! It can use the `rayon` crate to search the rows of the board in parallel.
//!
//! # How to use `wordplay_solver`
//! Build a [`Dictionary`] from a word list, create a [`Board`] with a bonus layout
//! and the tiles that were played, and ask a [`Solver`] for the best play.
//! By default the classic Scrabble layout is used, but any layout can be read from
//! a template with [`Grid::from_strings`] or [`Grid::from_quadrant`].
//! The word list must contain words separated by whitespace. Case is ignored.
//!
//! # Basic usage
//! ```
//! use wordplay_solver::{Board, Dictionary, Rack, Solver};
//!
//! let dictionary = Dictionary::from_words(&["rust", "rest", "trust"]);
//! let solver = Solver::new(&dictionary);
//! let board = Board::default();
//! let rack: Rack = "rusta".parse()?;
//! let best = solver.best_play(&rack, &board).unwrap();
//! assert_eq!(best.word.to_string(), "RUST");
//! let board = board.apply(&best);
//! println!("{}\n{}", best, board);
//! # Ok::<(), wordplay_solver::Error>(())
//! ```
//!
//! # About implementation
//! Plays are searched one row at a time. Each row is marked with anchors: the empty
//! squares next to tiles on the board (or the start square on an empty board),
//! with the letters allowed by the tiles above and below them.
//! From every anchor, words are built from a left part and extended to the right,
//! following the dictionary trie letter by letter.
//! Plays from top to bottom are found as plays from left to right on the
//! transposed board.
mod anchors;
mod board;
mod dictionary;
mod error;
mod grid;
mod letterset;
mod movegen;
mod moves;
mod scorer;
mod solver;
mod tiles;

pub use anchors::{anchored_row, anchors, Anchor};
pub use board::{Board, CrossWord, Neighbors};
pub use dictionary::Dictionary;
pub use error::Error;
pub use grid::{Cell, Grid, Layout};
pub use letterset::LetterSet;
pub use movegen::{Extensions, MoveGen, Prefix, PrefixCache};
pub use moves::{Direction, Move, Position};
pub use scorer::Scorer;
pub use solver::Solver;
pub use tiles::{Code, Label, Letter, Rack, Square, Tile, Word};
