use crate::error::{Result, TrieError};

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();
pub const ALPHABET_SIZE: usize = 26;

/// Slot of `c` in a node's child array, or `None` when `c` is not a lowercase letter.
pub fn get_idx(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn symbol(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Maps every character of `word` to its slot, rejecting the whole word on the
/// first character outside the alphabet.
pub fn indices(word: &str) -> Result<Vec<usize>> {
    word.chars()
        .enumerate()
        .map(|(position, c)| {
            get_idx(c).ok_or_else(|| TrieError::InvalidSymbol {
                word: word.to_string(),
                symbol: c,
                position,
            })
        })
        .collect()
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase().chars().filter(|&x| get_idx(x).is_some()).collect()
}
