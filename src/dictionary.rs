mod anagram;
mod trievec;

use self::trievec::TrieVec;
use crate::board::CrossWord;
use crate::letterset::LetterSet;
use crate::tiles::{label_from_char, Label};
use crate::{Error, Word};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::read_to_string;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The set of valid words, stored as a trie.
///
/// The trie answers both "is this a word?" and "does any word start with this?",
/// and lets the move search follow a word letter by letter.
/// A `Dictionary` is immutable once built.
pub struct Dictionary {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and a `LetterSet` with the labels of all child nodes.
    nodes: Vec<(u32, LetterSet)>,
    /// Label of the edge leading to each node
    labels: Vec<Label>,
    /// List indicating terminal nodes
    terminal: Vec<bool>,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not built from a file.
    source: String,
    /// The set of all letters used in the dictionary.
    all_letters: LetterSet,
    word_count: usize,
    node_count: usize,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.source
        )
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::from(TrieVec::new())
    }
}

impl From<TrieVec<Label>> for Dictionary {
    fn from(trie: TrieVec<Label>) -> Self {
        let mut nodes: Vec<(u32, LetterSet)> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;
        let mut all_letters = LetterSet::new();

        // breadth first, so the children of a node get consecutive indices
        let mut i: usize = 0;
        let mut queue = VecDeque::new();
        queue.push_back((&trie, i, 0));
        while let Some((node, parent, label)) = queue.pop_front() {
            let mut ls = LetterSet::new();
            for (label, t) in node.children() {
                ls.insert(*label);
                all_letters.insert(*label);
                queue.push_back((t, i, *label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, ls));
            terminal.push(node.terminal());
            labels.push(label);
            if i > 0 && nodes[parent].0 == 0 {
                nodes[parent].0 = i as u32;
            }
            i += 1;
        }
        Dictionary {
            node_count: nodes.len(),
            nodes,
            labels,
            terminal,
            source: String::new(),
            all_letters,
            word_count,
        }
    }
}

/// Labels for `word`, or `None` if it contains anything but ascii letters.
fn labels_of(word: &str) -> Option<Vec<Label>> {
    word.chars().map(label_from_char).collect()
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    ///
    /// Words are case-insensitive. Tokens that are empty or contain anything but
    /// the letters `A` ..= `Z` are dropped.
    /// ## Examples
    /// ```
    /// use wordplay_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["cab", "CAR", "c4t"]);
    /// assert_eq!(dictionary.word_count(), 2);
    /// assert!(dictionary.is_word("CAB"));
    /// assert!(dictionary.is_prefix("CA"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieVec::new();
        let mut dropped = 0;
        for word in words {
            let word = word.as_ref();
            match labels_of(word) {
                Some(labels) if !labels.is_empty() => builder.insert(labels),
                _ => {
                    debug!("dropping malformed token {:?}", word);
                    dropped += 1;
                }
            }
        }
        let dictionary = Dictionary::from(builder);
        debug!("built {}, {} tokens dropped", dictionary, dropped);
        dictionary
    }

    /// Build a dictionary from text with whitespace separated words.
    pub fn from_text(text: &str) -> Dictionary {
        Dictionary::from_words(text.split_whitespace())
    }

    /// Read the dictionary from a file with whitespace separated words.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::from_text(&text);
        dictionary.source = String::from(wordfile);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DeserializeError(String::from(wordfile)))?;
        dictionary.source = String::from(wordfile);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Write the dictionary to a bincoded file, to be read with
    /// [`deserialize_from`](Dictionary::deserialize_from).
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::SerializeError(String::from(wordfile)))
    }

    /// The number of words
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The set of all letters used in the dictionary
    pub fn all_letters(&self) -> LetterSet {
        self.all_letters
    }

    /// Path of the file the dictionary was read from, or empty.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The node for the empty string.
    pub fn root(&self) -> usize {
        0
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn child(&self, i: usize, label: Label) -> Option<usize> {
        let (start, labels) = &self.nodes[i];
        labels.index_of(label).map(|index| *start as usize + index)
    }

    /// Iterate over the (label, node) children of node `i`.
    pub fn children(&self, i: usize) -> impl Iterator<Item = (Label, usize)> + '_ {
        let (start, labels) = self.nodes[i];
        (start as usize..start as usize + labels.len()).map(move |child| (self.labels[child], child))
    }

    /// True if the path to node `i` spells a word.
    pub fn is_terminal(&self, i: usize) -> bool {
        self.terminal[i]
    }

    /// True if the path to node `i` is a proper prefix of some word.
    pub fn has_children(&self, i: usize) -> bool {
        !self.nodes[i].1.is_empty()
    }

    /// Follow `labels` from node `i`.
    pub fn walk<I: IntoIterator<Item = Label>>(&self, i: usize, labels: I) -> Option<usize> {
        labels
            .into_iter()
            .try_fold(i, |node, label| self.child(node, label))
    }

    /// Returns true if `word` is in the dictionary. Case is ignored.
    pub fn is_word(&self, word: &str) -> bool {
        labels_of(word)
            .and_then(|labels| self.walk(self.root(), labels))
            .map_or(false, |node| self.is_terminal(node))
    }

    /// Returns true if `prefix` is a proper prefix of a word in the dictionary.
    /// The empty string is a prefix of every word.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        labels_of(prefix)
            .and_then(|labels| self.walk(self.root(), labels))
            .map_or(false, |node| self.has_children(node))
    }

    /// Returns true if `word` is in the dictionary; wildcards count as the letter they stand for.
    pub fn contains(&self, word: &Word) -> bool {
        self.walk(self.root(), word.labels())
            .map_or(false, |node| self.is_terminal(node))
    }

    /// Return the letters that can go on the open square of `cross` to form a word.
    pub fn legal_letters(&self, cross: &CrossWord) -> LetterSet {
        let mut letters = LetterSet::new();
        if let Some(node) = self.walk(self.root(), cross.prefix.labels()) {
            for (label, child) in self.children(node) {
                if self
                    .walk(child, cross.suffix.labels())
                    .map_or(false, |end| self.is_terminal(end))
                {
                    letters.insert(label);
                }
            }
        }
        letters
    }
}
