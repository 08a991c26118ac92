use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use structopt::StructOpt;
use trie_dict::{FileFormat, QueryResult, TrieConfig, WordSource, Wordlist};
use trie_dict::wordlist::loader::read_file;

const DEFAULT_QUERIES: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];

/// Load a dictionary into a trie and print how often each query word occurs.
#[derive(StructOpt)]
struct Cli {
    /// The dictionary file to read
    #[structopt(parse(from_os_str), default_value = "dictionary.txt")]
    path: PathBuf,
    /// Word to look up (repeatable)
    #[structopt(short, long = "query")]
    queries: Vec<String>,
    /// Read one record per line, split on this character
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word in delimited files
    #[structopt(long)]
    word_column: Option<usize>,
    /// Column holding the occurrence count in delimited files
    #[structopt(long)]
    freq_column: Option<usize>,
    /// Lowercase words and drop characters outside a-z before inserting
    #[structopt(long)]
    normalize: bool,
    /// Maximum number of trie nodes below the root
    #[structopt(long)]
    max_nodes: Option<usize>,
    /// Do not echo the dictionary words
    #[structopt(long)]
    quiet: bool,
    /// Print query results as JSON
    #[structopt(long)]
    json: bool,
}

fn main() {
    let args = Cli::from_args();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .freq_column(args.freq_column)
        .normalize(args.normalize)
        .build();
    let config = TrieConfig::builder().max_nodes(args.max_nodes).build();

    let start = Instant::now();
    let source = match read_file(&args.path, &format) {
        Ok(source) => source,
        Err(e) => {
            println!("Error opening file.");
            eprintln!("{}", e);
            WordSource::default()
        }
    };
    if !args.quiet {
        source.entries.iter().for_each(|entry| println!("{}", entry.word));
    }

    let wl = match Wordlist::build(source, &config) {
        Ok(wl) => wl,
        Err(e) => {
            eprintln!("Failed to build dictionary: {}", e);
            exit(1);
        }
    };
    let report = wl.report();
    eprintln!("Read {} words in {}s [{} failed lines, {} rejected words, {} nodes]",
              report.entries, (start.elapsed().as_millis() as f64) / 1000.0,
              report.failures, report.rejected, wl.node_count());

    let queries = if args.queries.is_empty() {
        DEFAULT_QUERIES.iter().map(|x| x.to_string()).collect()
    } else {
        args.queries
    };

    let mut results: Vec<QueryResult> = vec![];
    let mut invalid = 0;
    for word in &queries {
        match wl.query(word) {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("{}", e);
                invalid += 1;
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to encode results: {}", e);
                exit(1);
            }
        }
    } else {
        results.iter().for_each(|result| println!("{}", result));
    }

    let released = wl.destroy();
    eprintln!("Released {} nodes", released);

    if invalid > 0 {
        exit(1);
    }
}
