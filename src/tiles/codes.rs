/// Code 1..=26 for the letters `A` ..= `Z`
pub type Label = u8;

/// Tile code used to represent `Tile` or `Letter`.
/// - 1 .. 26: `A` .. `Z`
/// - 64: Blank tile (unassigned)
/// - 65 .. 90: Blank tile assigned to `A` .. `Z`
pub type Code = u8;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// code for BLANK tile
pub const BLANK: Code = 0x40;

/// Mask to get label value 0..31
pub const LETTER_MASK: u8 = 0b11111;

/// bitflag for wildcard
pub const IS_WILDCARD: Code = 0x40;

/// An uninitialized tile
pub(super) const UNINIT: Code = 0x7f;

/// Letter points, indexed by label. Index 0 is the blank.
const POINTS: [u32; ALPHABET_LEN + 1] = [
    0, // blank
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A .. M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N .. Z
];

/// Return the points for letter `label`, or 0 if out of range.
pub fn points(label: Label) -> u32 {
    POINTS.get(label as usize).copied().unwrap_or(0)
}

/// Return the label of an ascii letter, ignoring case.
pub fn label_from_char(ch: char) -> Option<Label> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_uppercase() as u8 - b'A' + 1)
    } else {
        None
    }
}

/// Return the uppercase char for `label`.
pub fn char_from_label(label: Label) -> char {
    debug_assert!(label >= 1 && label as usize <= ALPHABET_LEN);
    (b'A' + (label & LETTER_MASK) - 1) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(label_from_char('a'), Some(1));
        assert_eq!(label_from_char('Z'), Some(26));
        assert_eq!(label_from_char('*'), None);
        assert_eq!(label_from_char('é'), None);
        assert_eq!(char_from_label(3), 'C');
    }

    #[test]
    fn test_points() {
        let p = |ch| points(label_from_char(ch).unwrap());
        assert_eq!(p('E'), 1);
        assert_eq!(p('C'), 3);
        assert_eq!(p('Q'), 10);
        assert_eq!(p('Z'), 10);
        assert_eq!(p('X'), 8);
        assert_eq!(points(0), 0);
        assert_eq!(points(99), 0);
    }
}
