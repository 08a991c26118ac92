use std::fmt::{Debug, Formatter};

use crate::alphabet::{indices, symbol};
use crate::error::{Result, TrieError};
use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::store::NodeStore;
use crate::wordlist::trie::trieconfig::TrieConfig;

/// Prefix tree counting how many times each word was inserted.
///
/// Keys are lowercase `a`-`z`. The empty string is a word of length zero and
/// is stored on the root.
#[derive(Clone)]
pub struct Trie {
    store: NodeStore,
    distinct: usize,
    total: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie::with_config(&TrieConfig::default())
    }

    pub fn with_config(config: &TrieConfig) -> Trie {
        Trie {
            store: NodeStore::new(config.max_nodes),
            distinct: 0,
            total: 0,
        }
    }

    pub fn insert(&mut self, word: &str) -> Result<()> {
        self.insert_with_freq(word, 1)
    }

    /// Records `freq` occurrences of `word`. Either the whole word is stored or,
    /// on error, the trie is left untouched.
    pub fn insert_with_freq(&mut self, word: &str, freq: usize) -> Result<()> {
        let path = indices(word)?;
        if freq == 0 {
            return Ok(());
        }

        let (mut current, matched) = self.descend(&path);
        let existing = if matched == path.len() { self.store.get(current).freq } else { 0 };
        if existing.checked_add(freq).is_none() || self.total.checked_add(freq).is_none() {
            return Err(TrieError::CountOverflow { word: word.to_string() });
        }
        self.store.reserve(path.len() - matched)?;
        for &idx in &path[matched..] {
            current = self.store.create_child(current, idx, symbol(idx))?;
        }

        let end = self.store.get_mut(current);
        if !end.is_terminal {
            self.distinct += 1;
        }
        end.mark_word(freq);
        self.total += freq;
        metrics::counter!("trie.words_inserted", freq as u64);
        Ok(())
    }

    pub fn add_all<'f, I>(&mut self, items: I) -> Result<()>
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().try_for_each(|x| self.insert(x))
    }

    /// Number of times `word` was inserted. Words never inserted, including
    /// prefixes of stored words, count 0.
    pub fn lookup(&self, word: &str) -> Result<usize> {
        let path = indices(word)?;
        metrics::increment_counter!("trie.lookups");
        let (node, matched) = self.descend(&path);
        if matched < path.len() {
            return Ok(0);
        }
        Ok(self.store.get(node).occurrences())
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        self.lookup(word).map(|count| count > 0)
    }

    /// Every stored word with its count, in lexicographic order.
    pub fn words(&self) -> Vec<(String, usize)> {
        let mut words = Vec::with_capacity(self.distinct);
        self.store.traverse_prefix(NodeId::ROOT, &mut |path, node| {
            if node.is_terminal {
                words.push((path.to_string(), node.freq));
            }
        });
        words
    }

    /// Nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    pub fn distinct_words(&self) -> usize {
        self.distinct
    }

    pub fn total_words(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Tears the tree down children-first and returns how many nodes below the
    /// root were released.
    pub fn destroy(mut self) -> usize {
        let mut released = 0;
        self.store.traverse_postfix(NodeId::ROOT, &mut |id, store| {
            released += store.take_children(id).len();
        });
        metrics::counter!("trie.nodes_released", released as u64);
        released
    }

    /// Follows `path` from the root as far as the tree goes. Returns the last
    /// node reached and how many symbols were consumed.
    fn descend(&self, path: &[usize]) -> (NodeId, usize) {
        let mut current = NodeId::ROOT;
        for (matched, &idx) in path.iter().enumerate() {
            match self.store.get(current).child(idx) {
                Some(next) => current = next,
                None => return (current, matched),
            }
        }
        (current, path.len())
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.words()).finish()
    }
}
