use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use derive_new::new;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Result, TrieError};

/// How a dictionary file lays out its words.
///
/// Without a delimiter every whitespace-separated token is one occurrence.
/// With one, each line is a record and the word (and optionally its count)
/// are read from columns.
#[derive(TypedBuilder, Clone, Debug, Default)]
pub struct FileFormat {
    #[builder(default)]
    pub delimiter: Option<char>,
    #[builder(default)]
    pub word_column: Option<usize>,
    #[builder(default)]
    pub freq_column: Option<usize>,
    /// Lowercase tokens and drop characters outside the alphabet.
    #[builder(default)]
    pub normalize: bool,
}

#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub freq: usize,
}

/// Entries read from a dictionary source, in source order.
#[derive(Clone, Debug, Default)]
pub struct WordSource {
    pub entries: Vec<Entry>,
    /// Lines that could not be read or parsed.
    pub failures: usize,
}

impl FileFormat {
    fn prepare(&self, token: &str) -> Option<String> {
        let word = if self.normalize { normalize(token) } else { token.to_string() };
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    fn parse_line(&self, line: &str, line_no: usize) -> Result<Vec<Entry>> {
        let delimiter = match self.delimiter {
            None => {
                return Ok(line.split_whitespace()
                    .filter_map(|token| self.prepare(token))
                    .map(|word| Entry::new(word, 1))
                    .collect());
            }
            Some(delimiter) => delimiter,
        };

        let columns = line.split(delimiter).map(str::trim).collect::<Vec<_>>();
        let word_idx = self.word_column.unwrap_or(0);
        let word = columns.get(word_idx).ok_or_else(|| TrieError::MalformedLine {
            line: line_no,
            reason: format!("missing word column {}", word_idx),
        })?;
        let freq = match self.freq_column {
            None => 1,
            Some(freq_idx) => {
                let field = columns.get(freq_idx).ok_or_else(|| TrieError::MalformedLine {
                    line: line_no,
                    reason: format!("missing frequency column {}", freq_idx),
                })?;
                field.parse::<usize>().map_err(|e| TrieError::MalformedLine {
                    line: line_no,
                    reason: format!("bad frequency {:?}: {}", field, e),
                })?
            }
        };
        Ok(self.prepare(word).map(|word| Entry::new(word, freq)).into_iter().collect())
    }
}

/// Reads every entry from `reader`. Unreadable or malformed lines are
/// counted in [`WordSource::failures`] and skipped.
pub fn read_entries<R: BufRead>(reader: R, format: &FileFormat) -> WordSource {
    let mut source = WordSource::default();

    for (idx, line) in reader.lines().enumerate() {
        let parsed = line
            .map_err(|e| TrieError::MalformedLine { line: idx + 1, reason: e.to_string() })
            .and_then(|line| {
                if line.trim().is_empty() {
                    Ok(vec![])
                } else {
                    format.parse_line(&line, idx + 1)
                }
            });
        match parsed {
            Ok(entries) => source.entries.extend(entries),
            Err(_) => source.failures += 1,
        }
    }

    metrics::counter!("wordlist.failed_lines", source.failures as u64);
    source
}

pub fn read_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<WordSource> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TrieError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_entries(BufReader::new(file), format))
}
