use crate::alphabet::symbol;
use crate::wordlist::trie::node::{NodeId, TrieNode};
use crate::wordlist::trie::store::NodeStore;

impl NodeStore {
    pub(crate) fn map_child<T, F>(&self, id: NodeId, f: &mut F) -> Vec<T>
        where F: FnMut(NodeId, &TrieNode) -> T {
        self.get(id).children.iter()
            .flatten()
            .map(|&child| f(child, self.get(child)))
            .collect()
    }

    /// Visits nodes parent-first, children in alphabet order, passing the
    /// word spelled by the path to each node.
    pub(crate) fn traverse_prefix<F>(&self, start: NodeId, f: &mut F)
        where F: FnMut(&str, &TrieNode) {
        let mut stack = vec![(start, String::new())];
        while let Some((id, path)) = stack.pop() {
            let node = self.get(id);
            f(&path, node);
            for (idx, child) in node.children.iter().enumerate().rev() {
                if let Some(child) = child {
                    let mut child_path = path.clone();
                    child_path.push(symbol(idx));
                    stack.push((*child, child_path));
                }
            }
        }
    }

    /// Visits every node after all of its children. Uses an explicit stack so
    /// long keys cannot exhaust the call stack.
    pub(crate) fn traverse_postfix<F>(&mut self, start: NodeId, f: &mut F)
        where F: FnMut(NodeId, &mut NodeStore) {
        let mut stack = vec![(start, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded || !self.get(id).has_children() {
                f(id, self);
            } else {
                stack.push((id, true));
                let children = self.map_child(id, &mut |child, _| child);
                stack.extend(children.into_iter().rev().map(|child| (child, false)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NodeStore {
        // root -> c -> a -> {r, t}, root -> d
        let mut store = NodeStore::new(None);
        let c = store.create_child(NodeId::ROOT, 2, 'c').unwrap();
        let a = store.create_child(c, 0, 'a').unwrap();
        store.create_child(a, 19, 't').unwrap();
        store.create_child(a, 17, 'r').unwrap();
        store.create_child(NodeId::ROOT, 3, 'd').unwrap();
        store
    }

    #[test]
    fn prefix_order_is_alphabetical() {
        let store = sample();
        let mut paths = vec![];
        store.traverse_prefix(NodeId::ROOT, &mut |path, _| paths.push(path.to_string()));
        assert_eq!(paths, vec!["", "c", "ca", "car", "cat", "d"]);
    }

    #[test]
    fn postfix_visits_children_first() {
        let mut store = sample();
        let mut letters = vec![];
        store.traverse_postfix(NodeId::ROOT, &mut |id, store| letters.push(store.get(id).letter));
        assert_eq!(letters, vec![Some('r'), Some('t'), Some('a'), Some('c'), Some('d'), None]);
    }

    #[test]
    fn map_child_skips_empty_slots() {
        let store = sample();
        let letters = store.map_child(NodeId::ROOT, &mut |_, node| node.letter);
        assert_eq!(letters, vec![Some('c'), Some('d')]);
    }
}
