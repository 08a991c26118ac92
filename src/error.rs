//! Error types for trie_dict

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for trie and dictionary operations
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors that can occur while building or querying a dictionary
#[derive(Error, Debug)]
pub enum TrieError {
    #[error("invalid symbol {symbol:?} at position {position} in {word:?}: keys must be lowercase a-z")]
    InvalidSymbol {
        word: String,
        symbol: char,
        position: usize,
    },

    #[error("node limit reached: at most {limit} nodes below the root")]
    CapacityExceeded { limit: usize },

    #[error("occurrence count for {word:?} would overflow")]
    CountOverflow { word: String },

    #[error("failed to allocate {requested} trie nodes")]
    AllocationFailed { requested: usize },

    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}
