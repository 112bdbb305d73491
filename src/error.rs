use crate::Direction;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be deserialized")]
    DeserializeError(String),

    /// Error writing bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be serialized")]
    SerializeError(String),

    /// Rack contains a symbol that is neither a letter nor a blank
    #[error("Invalid rack letter '{0}'")]
    InvalidRackLetter(char),

    /// Character does not represent a tile
    #[error("Invalid tile '{0}'")]
    InvalidTile(char),

    /// Error parsing a bonus template symbol
    #[error("Invalid grid symbol: '{0}'")]
    GridParseError(char),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0}")]
    InvalidRowCount(usize),

    /// All rows of a template or state must have the same length
    #[error("Invalid row {row}: length {len}, expect {expected}")]
    InvalidRowLength {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Character in a board state that does not fit the square below it
    #[error("Invalid square '{ch}' at row {row}, col {col}")]
    InvalidSquare { row: usize, col: usize, ch: char },

    /// Attempt to place (part of) a word outside the board or on a border square
    #[error("Playing {len} tiles at row={row}, col={col} {direction} does not fit")]
    TilePlacementError {
        row: usize,
        col: usize,
        direction: Direction,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },
}
