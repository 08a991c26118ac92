//! Dictionary backed by a prefix tree that counts word occurrences.
//!
//! Words are read from a text source by [`wordlist::loader`], inserted into a
//! [`Trie`] keyed by lowercase letter, and queried for exact-match counts.

pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use error::{Result, TrieError};
pub use wordlist::loader::{Entry, FileFormat, WordSource};
pub use wordlist::trie::trie::Trie;
pub use wordlist::trie::trieconfig::TrieConfig;
pub use wordlist::wordlist::{LoadReport, QueryResult, Wordlist};

#[cfg(test)]
mod proptest_trie;
