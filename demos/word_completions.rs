use argh::FromArgs;
use seqtrie::{tests_common::generate_words, visitor::TrieStatsCollector, Trie};
use std::{
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Complete a prefix against a list of words
#[derive(FromArgs)]
struct WordCompletionsArgs {
    /// read the words from this file, one per line, instead of generating them
    #[argh(option)]
    input_file: Option<PathBuf>,

    /// how many words to generate when no input file is given
    #[argh(option, default = "1000")]
    num_words: usize,

    /// print at most this many completions
    #[argh(option, default = "20")]
    limit: usize,

    /// print statistics about the shape of the trie
    #[argh(switch)]
    stats: bool,

    /// the prefix to complete
    #[argh(positional)]
    prefix: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: WordCompletionsArgs = argh::from_env();

    let words = match &args.input_file {
        Some(path) => read_words(path)?,
        None => generate_words(args.num_words)
            .map(|word| word.chars().collect::<Vec<_>>())
            .collect(),
    };

    if words.is_empty() {
        return Err(Box::new(NoWordsError));
    }

    if args.stats {
        println!("{}", TrieStatsCollector::collect(&words));
    }

    let mut completions: Vec<String> = words
        .completions(args.prefix.chars())
        .map(String::from_iter)
        .collect();
    completions.sort();

    println!(
        "{} words start with [{}]",
        completions.len(),
        args.prefix
    );
    for suffix in completions.iter().take(args.limit) {
        println!("{}{suffix}", args.prefix);
    }

    Ok(())
}

fn read_words(path: &Path) -> Result<Trie<char>, Box<dyn Error>> {
    let input_file = OpenOptions::new().read(true).open(path)?;

    let mut words = Trie::new();
    for line in BufReader::new(input_file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.insert(word.chars());
        }
    }

    Ok(words)
}

#[derive(Debug)]
struct NoWordsError;

impl Display for NoWordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no words to insert into the trie!")
    }
}

impl Error for NoWordsError {}
