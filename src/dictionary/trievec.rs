/// Naive trie supporting dynamic insertion, used to build a [`Dictionary`](crate::Dictionary).
///
/// Children are kept sorted by label, so the flattened dictionary can find a
/// child by its rank in the parent's label set.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &Vec<(T, Box<Self>)> {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) {
        let mut t = self;
        for c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c.clone(), Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        t.terminal = true;
    }

    /// Returns `true` if the trie contains `key`.
    pub fn has<K: AsRef<[T]>>(&self, key: K) -> bool {
        let mut t = self;
        for c in key.as_ref() {
            match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => t = &t.children[pos].1,
                Err(_) => return false,
            }
        }
        t.terminal
    }
}
