//! Word finding from a rack alone, without a board.
use super::Dictionary;
use crate::{Rack, Tile, Word};
use std::collections::BTreeSet;

impl Dictionary {
    /// Return all words that can be made from the letters on `rack`.
    /// A blank stands for any letter, so a word can be returned several times
    /// with the wildcard on different positions.
    ///
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Dictionary, Error, Rack};
    /// let dictionary = Dictionary::from_words(&["ab", "ba", "cab", "bad"]);
    /// let rack: Rack = "abc".parse()?;
    /// let words: Vec<String> = dictionary.find_words(&rack).iter().map(|w| w.to_string()).collect();
    /// assert_eq!(words, vec!["AB", "BA", "CAB"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_words(&self, rack: &Rack) -> BTreeSet<Word> {
        let mut results = BTreeSet::new();
        self.collect_words(self.root(), *rack, Word::new(), None, &mut results);
        results
    }

    /// Return all words that use one of `board_letters` and any letters of `rack`.
    pub fn word_plays(&self, rack: &Rack, board_letters: &Word) -> BTreeSet<Word> {
        let mut results = BTreeSet::new();
        let distinct: BTreeSet<Tile> = board_letters.iter().copied().collect();
        for tile in distinct {
            self.collect_words(self.root(), *rack, Word::new(), Some(tile), &mut results);
        }
        results
    }

    /// Return the longest words that can be made from `rack`.
    pub fn longest_words(&self, rack: &Rack) -> Vec<Word> {
        let words = self.find_words(rack);
        let longest = words.iter().map(Word::len).max().unwrap_or(0);
        words.into_iter().filter(|w| w.len() == longest).collect()
    }

    /// Return the `n` words from `rack` with the highest [`word_score`](Dictionary::word_score).
    /// Equal scores are ordered alphabetically.
    pub fn top_words(&self, rack: &Rack, n: usize) -> Vec<Word> {
        let mut words: Vec<Word> = self.find_words(rack).into_iter().collect();
        words.sort_by_key(|w| std::cmp::Reverse(Dictionary::word_score(w)));
        words.truncate(n);
        words
    }

    /// Letter points of `word`, without any bonus.
    pub fn word_score(word: &Word) -> u32 {
        word.points()
    }

    /// Depth first search below `node`. While `pending` holds a board tile, it
    /// still has to be used, and no word is recorded.
    fn collect_words(
        &self,
        node: usize,
        rack: Rack,
        word: Word,
        pending: Option<Tile>,
        results: &mut BTreeSet<Word>,
    ) {
        if pending.is_none() && !word.is_empty() && self.is_terminal(node) {
            results.insert(word.clone());
        }
        if !self.has_children(node) {
            return;
        }
        if let Some(tile) = pending {
            if let Some(child) = self.child(node, tile.label()) {
                self.collect_words(child, rack, word.with(tile), None, results);
            }
        }
        let options: Vec<_> = rack
            .distinct()
            .filter_map(|letter| rack.remove(letter).map(|rest| (letter, rest)))
            .collect();
        for (letter, rest) in options {
            if letter.is_blank() {
                for (label, child) in self.children(node) {
                    self.collect_words(child, rest, word.with(Tile::wildcard(label)), pending, results);
                }
            } else if let Some(child) = self.child(node, letter.label()) {
                let tile = Tile::from_label(letter.label());
                self.collect_words(child, rest, word.with(tile), pending, results);
            }
        }
    }
}
