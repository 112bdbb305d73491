//! Move enumeration along one anchored row.
//!
//! For every anchor, a word is built from a legal left part (the letters on the
//! board directly left of the anchor, or a prefix from the rack) and extended
//! to the right over the anchor.
use crate::dictionary::Dictionary;
use crate::tiles::{Rack, Square, Tile, Word};
#[cfg(feature = "flame_it")]
use flamer::flame;
use std::collections::VecDeque;

/// A dictionary prefix built from rack letters, with the letters left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub word: Word,
    /// dictionary node for `word`
    pub node: usize,
    /// rack without the letters of `word`
    pub rack: Rack,
}

/// All prefixes of dictionary words that can be made from a rack, the empty
/// prefix included. Prefixes are ordered by length.
#[derive(Debug, Clone)]
pub struct PrefixCache {
    prefixes: Vec<Prefix>,
}

impl PrefixCache {
    pub fn new(dictionary: &Dictionary, rack: Rack) -> PrefixCache {
        let mut prefixes = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(Prefix {
            word: Word::new(),
            node: dictionary.root(),
            rack,
        });
        // breadth first, so prefixes come out ordered by length
        while let Some(prefix) = queue.pop_front() {
            if !dictionary.has_children(prefix.node) {
                continue;
            }
            for letter in prefix.rack.distinct() {
                let rest = match prefix.rack.remove(letter) {
                    Some(rest) => rest,
                    None => continue,
                };
                if letter.is_blank() {
                    for (label, child) in dictionary.children(prefix.node) {
                        queue.push_back(Prefix {
                            word: prefix.word.with(Tile::wildcard(label)),
                            node: child,
                            rack: rest,
                        });
                    }
                } else if let Some(child) = dictionary.child(prefix.node, letter.label()) {
                    queue.push_back(Prefix {
                        word: prefix.word.with(Tile::from_label(letter.label())),
                        node: child,
                        rack: rest,
                    });
                }
            }
            prefixes.push(prefix);
        }
        PrefixCache { prefixes }
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Prefix> {
        self.prefixes.iter()
    }

    /// Iterate over the prefixes with at most `max_len` letters.
    pub fn up_to(&self, max_len: usize) -> impl Iterator<Item = &Prefix> {
        self.prefixes
            .iter()
            .take_while(move |prefix| prefix.word.len() <= max_len)
    }
}

#[derive(Debug)]
struct Branch {
    node: usize,
    /// square for the next letter
    pos: usize,
    rack: Rack,
    word: Word,
}

/// Iterator over the words that extend a left part to the right over an anchor.
#[derive(Debug)]
pub struct Extensions<'a> {
    dictionary: &'a Dictionary,
    row: &'a [Square],
    anchor: usize,
    queue: VecDeque<Branch>,
}

impl<'a> Extensions<'a> {
    fn new(dictionary: &'a Dictionary, row: &'a [Square], anchor: usize, start: Branch) -> Self {
        let mut queue = VecDeque::with_capacity(16);
        queue.push_back(start);
        Extensions {
            dictionary,
            row,
            anchor,
            queue,
        }
    }

    fn push(&mut self, branch: &Branch, node: usize, rack: Rack, tile: Tile) {
        self.queue.push_back(Branch {
            node,
            pos: branch.pos + 1,
            rack,
            word: branch.word.with(tile),
        });
    }
}

impl<'a> Iterator for Extensions<'a> {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        let dictionary = self.dictionary;
        while let Some(branch) = self.queue.pop_front() {
            let square = self.row.get(branch.pos).copied().unwrap_or(Square::Border);
            match square {
                Square::Letter(tile) => {
                    if let Some(child) = dictionary.child(branch.node, tile.label()) {
                        self.push(&branch, child, branch.rack, tile);
                    }
                }
                Square::Empty | Square::Anchor(_) => {
                    let allows = |label| square.anchor().map_or(true, |a| a.allows(label));
                    for letter in branch.rack.distinct() {
                        let rest = match branch.rack.remove(letter) {
                            Some(rest) => rest,
                            None => continue,
                        };
                        if letter.is_blank() {
                            // a blank can be any letter that continues the word
                            for (label, child) in dictionary.children(branch.node) {
                                if allows(label) {
                                    self.push(&branch, child, rest, Tile::wildcard(label));
                                }
                            }
                        } else if allows(letter.label()) {
                            if let Some(child) = dictionary.child(branch.node, letter.label())
                            {
                                self.push(&branch, child, rest, Tile::from_label(letter.label()));
                            }
                        }
                    }
                }
                Square::Border => {}
            }
            if branch.pos > self.anchor
                && !square.is_letter()
                && branch.word.len() > 1
                && dictionary.is_terminal(branch.node)
            {
                return Some(branch.word);
            }
        }
        None
    }
}

/// Word search for one rack.
///
/// The prefix cache is built once for the rack, and shared by all rows.
#[derive(Debug, Clone)]
pub struct MoveGen<'a> {
    dictionary: &'a Dictionary,
    rack: Rack,
    prefixes: PrefixCache,
}

impl<'a> MoveGen<'a> {
    pub fn new(dictionary: &'a Dictionary, rack: Rack) -> MoveGen<'a> {
        MoveGen {
            dictionary,
            rack,
            prefixes: PrefixCache::new(dictionary, rack),
        }
    }

    pub fn rack(&self) -> Rack {
        self.rack
    }

    pub fn prefixes(&self) -> &PrefixCache {
        &self.prefixes
    }

    /// Returns a list with (`pos`, `word`) tuples for all words that can be
    /// played on the anchored `row`, where `pos` is the index of the first letter.
    ///
    /// Every word covers at least one anchor, is a dictionary word of two or more
    /// letters, and is not directly preceded or followed by a tile. A play is found
    /// only once, from its leftmost anchor.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Anchor, Dictionary, MoveGen, Rack, Square, Error};
    /// let dictionary = Dictionary::from_words(&["ab", "ba", "cab"]);
    /// let rack: Rack = "abc".parse()?;
    /// let row = [
    ///     Square::Border,
    ///     Square::Empty,
    ///     Square::Empty,
    ///     Square::Anchor(Anchor::Unrestricted),
    ///     Square::Border,
    /// ];
    /// let mut plays = MoveGen::new(&dictionary, rack).row_plays(&row);
    /// plays.sort();
    /// let plays: Vec<(usize, String)> = plays.into_iter().map(|(c, w)| (c, w.to_string())).collect();
    /// assert_eq!(plays, vec![(1, "CAB".into()), (2, "AB".into()), (2, "BA".into())]);
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn row_plays(&self, row: &[Square]) -> Vec<(usize, Word)> {
        let mut plays = Vec::new();
        for (i, square) in row.iter().enumerate() {
            if square.anchor().is_none() {
                continue;
            }
            // board letters directly left of the anchor
            let mut start = i;
            while start > 0 && row[start - 1].is_letter() {
                start -= 1;
            }
            if start < i {
                let tiles: Word = row[start..i].iter().filter_map(Square::tile).collect();
                if let Some(node) = self.dictionary.walk(self.dictionary.root(), tiles.labels()) {
                    let branch = Branch {
                        node,
                        pos: i,
                        rack: self.rack,
                        word: tiles,
                    };
                    plays.extend(self.extend_right(row, i, branch).map(|w| (start, w)));
                }
                continue;
            }
            // otherwise the left part comes from the rack, on free squares
            let free = row[..i]
                .iter()
                .rev()
                .take_while(|&&s| s == Square::Empty)
                .count();
            for prefix in self.prefixes.up_to(free) {
                let start = i - prefix.word.len();
                let branch = Branch {
                    node: prefix.node,
                    pos: i,
                    rack: prefix.rack,
                    word: prefix.word.clone(),
                };
                plays.extend(self.extend_right(row, i, branch).map(|w| (start, w)));
            }
        }
        plays
    }

    fn extend_right<'b>(&'b self, row: &'b [Square], anchor: usize, start: Branch) -> Extensions<'b> {
        Extensions::new(self.dictionary, row, anchor, start)
    }
}
