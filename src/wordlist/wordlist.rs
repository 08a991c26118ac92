use std::fmt::{Display, Formatter};
use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, Instant};

use delegate::delegate;
use derive_new::new;
use serde::Serialize;

use crate::error::{Result, TrieError};
use crate::wordlist::loader::{read_entries, read_file, Entry, FileFormat, WordSource};
use crate::wordlist::trie::trie::Trie;
use crate::wordlist::trie::trieconfig::TrieConfig;

/// A dictionary loaded into a trie.
pub struct Wordlist {
    trie: Trie,
    entries: Vec<Entry>,
    report: LoadReport,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Entries inserted into the trie.
    pub entries: usize,
    /// Source lines that could not be read or parsed.
    pub failures: usize,
    /// Entries whose word has characters outside the alphabet.
    pub rejected: usize,
    pub elapsed: Duration,
}

#[derive(new, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueryResult {
    pub word: String,
    pub count: usize,
}

impl Display for QueryResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\t{} : {}", self.word, self.count)
    }
}

impl Wordlist {
    /// Inserts every entry of `source` in order. Words outside the alphabet are
    /// skipped and counted; running out of nodes or overflowing a count aborts
    /// the build.
    pub fn build(source: WordSource, config: &TrieConfig) -> Result<Wordlist> {
        let start = Instant::now();
        let mut trie = Trie::with_config(config);
        let mut entries = Vec::with_capacity(source.entries.len());
        let mut rejected = 0;

        for entry in source.entries {
            match trie.insert_with_freq(&entry.word, entry.freq) {
                Ok(()) => entries.push(entry),
                Err(TrieError::InvalidSymbol { .. }) => rejected += 1,
                Err(e) => return Err(e),
            }
        }

        let report = LoadReport {
            entries: entries.len(),
            failures: source.failures,
            rejected,
            elapsed: start.elapsed(),
        };
        metrics::counter!("wordlist.rejected_words", rejected as u64);
        metrics::histogram!("wordlist.build_seconds", report.elapsed.as_secs_f64());
        Ok(Wordlist { trie, entries, report })
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat, config: &TrieConfig) -> Result<Wordlist> {
        Wordlist::build(read_entries(reader, format), config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat, config: &TrieConfig) -> Result<Wordlist> {
        Wordlist::build(read_file(path, format)?, config)
    }

    pub fn from_words<'f, I>(words: I, config: &TrieConfig) -> Result<Wordlist>
        where I: IntoIterator<Item=&'f str> {
        let source = WordSource {
            entries: words.into_iter().map(|w| Entry::new(w.to_string(), 1)).collect(),
            failures: 0,
        };
        Wordlist::build(source, config)
    }

    delegate! {
        to self.trie {
            pub fn lookup(&self, word: &str) -> Result<usize>;
            pub fn contains(&self, word: &str) -> Result<bool>;
            pub fn node_count(&self) -> usize;
            pub fn distinct_words(&self) -> usize;
            pub fn total_words(&self) -> usize;
        }
    }

    pub fn query(&self, word: &str) -> Result<QueryResult> {
        Ok(QueryResult::new(word.to_string(), self.lookup(word)?))
    }

    /// Entries that made it into the trie, in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn destroy(self) -> usize {
        self.trie.destroy()
    }
}
