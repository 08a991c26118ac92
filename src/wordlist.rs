pub mod trie;
pub mod loader;
pub mod wordlist;
