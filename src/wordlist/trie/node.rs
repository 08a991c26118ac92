use std::fmt::{Debug, Formatter};

use crate::alphabet::{symbol, ALPHABET_SIZE};

/// Handle to a node inside a [`NodeStore`](super::store::NodeStore).
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);
}

#[derive(Clone, Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],
    /// Symbol on the edge from the parent; `None` for the root.
    pub(crate) letter: Option<char>,
    pub(crate) depth: usize,
    pub(crate) is_terminal: bool,
    pub(crate) freq: usize,
}

impl TrieNode {
    pub(crate) fn new(letter: Option<char>, depth: usize) -> TrieNode {
        TrieNode {
            children: [None; ALPHABET_SIZE],
            letter,
            depth,
            is_terminal: false,
            freq: 0,
        }
    }

    pub(crate) fn child(&self, idx: usize) -> Option<NodeId> {
        self.children[idx]
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Count reported for the word ending here; prefixes that were never
    /// inserted themselves report 0.
    pub(crate) fn occurrences(&self) -> usize {
        if self.is_terminal {
            self.freq
        } else {
            0
        }
    }

    pub(crate) fn mark_word(&mut self, freq: usize) {
        self.is_terminal = true;
        self.freq += freq;
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("freq", &self.freq)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .enumerate()
                .filter(|(_, x)| x.is_some())
                .map(|(idx, _)| symbol(idx))
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
