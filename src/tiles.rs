//! Basic types for working with letter tiles.
mod codes;
mod letter;
mod rack;
mod square;
mod tile;
mod word;

/// Inline capacity of a `Word`; longer words spill to the heap
pub(super) const DIM: usize = 16;
pub use codes::{char_from_label, label_from_char, Code, Label, ALPHABET_LEN};
pub use letter::Letter;
pub use rack::Rack;
pub use square::Square;
pub use tile::Tile;
pub use word::Word;
