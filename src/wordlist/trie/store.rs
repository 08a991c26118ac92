use crate::error::{Result, TrieError};
use crate::wordlist::trie::node::{NodeId, TrieNode};

/// Arena owning every node of one trie. Nodes are never freed one by one;
/// the whole store goes away with its trie.
#[derive(Clone, Debug)]
pub(crate) struct NodeStore {
    nodes: Vec<TrieNode>,
    max_nodes: Option<usize>,
}

impl NodeStore {
    /// Creates a store holding only the root.
    pub(crate) fn new(max_nodes: Option<usize>) -> NodeStore {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(TrieNode::new(None, 0));
        NodeStore { nodes, max_nodes }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes created below the root.
    pub(crate) fn descendants(&self) -> usize {
        self.nodes.len() - 1
    }

    pub(crate) fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    /// Makes room for `count` more nodes, so the following `create_child`
    /// calls cannot fail halfway through a word.
    pub(crate) fn reserve(&mut self, count: usize) -> Result<()> {
        if let Some(limit) = self.max_nodes {
            if self.descendants() + count > limit {
                return Err(TrieError::CapacityExceeded { limit });
            }
        }
        self.nodes
            .try_reserve(count)
            .map_err(|_| TrieError::AllocationFailed { requested: count })
    }

    /// Creates an empty node and links it under `parent` at slot `idx`.
    pub(crate) fn create_child(&mut self, parent: NodeId, idx: usize, letter: char) -> Result<NodeId> {
        self.reserve(1)?;
        let depth = self.get(parent).depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(Some(letter), depth));
        self.get_mut(parent).children[idx] = Some(id);
        metrics::increment_counter!("trie.nodes_created");
        Ok(id)
    }

    /// Detaches and returns the children of `id`, leaving it a leaf.
    pub(crate) fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let node = self.get_mut(id);
        node.children.iter_mut().filter_map(Option::take).collect()
    }
}
