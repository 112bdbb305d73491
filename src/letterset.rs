#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::tiles::{char_from_label, Label, ALPHABET_LEN};
use std::fmt;
use std::iter::FromIterator;
use std::iter::Iterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset of letter labels.
///
/// Used for the children of a dictionary node, and for the letters allowed
/// on a restricted anchor square.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// The set of all letters `A` ..= `Z`
    pub fn full() -> LetterSet {
        (1..=ALPHABET_LEN as Label).collect()
    }

    pub fn contains(&self, label: Label) -> bool {
        label < 32 && self.0 & (1 << label) != 0
    }

    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 32);
        let r = (self.0 & (1 << label)) != 0;
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }

    /// Return the bit position corresponding to label if present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, label as u32)) as usize)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(char_from_label).collect();
        write!(f, "{}", s)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}

pub struct IteratorLetterSet {
    count: u32,
    value: u32,
}

impl IteratorLetterSet {
    pub fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { count: 0, value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        while self.count < 32 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i as Label);
            }
        }
        None
    }
}

impl FromIterator<Label> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LetterSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}

impl From<Vec<Label>> for LetterSet {
    fn from(v: Vec<Label>) -> Self {
        LetterSet::from_iter(v.into_iter())
    }
}

impl From<LetterSet> for Vec<Label> {
    fn from(set: LetterSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterset() {
        let mut letters = LetterSet::new();
        for &n in &[2, 25, 2, 1] {
            letters.insert(n);
        }
        for &n in &[1, 2, 25] {
            assert!(letters.contains(n));
        }
        assert!(!letters.contains(5));
        assert_eq!(letters.len(), 3);
        assert_eq!(letters.to_string(), "ABY");
    }

    #[test]
    fn test_index() {
        let letters = LetterSet::from(vec![1u8, 4, 5, 7, 8, 10, 12, 14, 15]);
        assert_eq!(letters.index_of(1), Some(0));
        assert_eq!(letters.index_of(15), Some(8));
        assert_eq!(letters.index_of(2), None);
        assert_eq!(letters.len(), 9);
    }

    #[test]
    fn test_full() {
        let all = LetterSet::full();
        assert_eq!(all.len(), 26);
        assert!(!all.contains(0));
        assert!(all.contains(26));
        let v: Vec<Label> = all.into();
        assert_eq!(v.first(), Some(&1));
        assert_eq!(v.last(), Some(&26));
    }

    #[test]
    fn test_zero_highbits() {
        let n = 0b1111_0010_u32;
        let s = 0b0001_0010_u32;
        assert_eq!(zero_highbits(n, 5), s);
    }

    #[test]
    fn test_count_ones() {
        assert_eq!(count_ones(0b0101_1010u32), 4);
    }
}
