pub mod trie;
pub mod trieconfig;

pub(crate) mod node;
pub(crate) mod store;
mod traverse;
