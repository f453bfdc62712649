use argh::FromArgs;
use seqtrie::{
    tests_common::{
        generate_sequences_exhaustive, generate_sequences_fixed_length, generate_sequences_skewed,
        generate_words,
    },
    visitor::DotPrinter,
    Trie,
};
use std::{
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{self, BufWriter},
    str::FromStr,
};

#[derive(FromArgs)]
/// Render a generated trie as a Graphviz diagram.
struct TrieToDotArgs {
    /// what shape of trie to generate
    #[argh(positional)]
    shape: TrieShape,

    /// how large the trie should be
    #[argh(positional)]
    size: usize,

    /// where to output the trie diagram
    ///
    /// To output to stdout, use '_'.
    #[argh(positional)]
    output_location: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: TrieToDotArgs = argh::from_env();

    let trie = args.shape.generate(args.size);
    if trie.is_empty() {
        return Err(Box::new(EmptyTrieError));
    }

    if args.output_location == "_" {
        let stdout = io::stdout();
        DotPrinter::print_trie(BufWriter::new(stdout.lock()), &trie)?;
    } else {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(args.output_location)?;
        DotPrinter::print_trie(BufWriter::new(file), &trie)?;
    }

    Ok(())
}

#[derive(Debug)]
enum TrieShape {
    Skewed,
    FixedLength,
    Full,
    Words,
}

impl TrieShape {
    fn generate(self, size: usize) -> Trie<String> {
        let as_strings = |sequence: Vec<u8>| sequence.into_iter().map(|elem| elem.to_string());

        match self {
            TrieShape::Skewed => generate_sequences_skewed(size).map(as_strings).collect(),
            TrieShape::FixedLength => generate_sequences_fixed_length(size, 4)
                .map(as_strings)
                .collect(),
            TrieShape::Full => generate_sequences_exhaustive(&[0, 1, 2], size)
                .map(as_strings)
                .collect(),
            TrieShape::Words => generate_words(size)
                .map(|word| word.chars().map(String::from).collect::<Vec<_>>())
                .collect(),
        }
    }
}

impl FromStr for TrieShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skewed" => Ok(TrieShape::Skewed),
            "fixed_length" => Ok(TrieShape::FixedLength),
            "full" => Ok(TrieShape::Full),
            "words" => Ok(TrieShape::Words),
            _ => Err(ShapeParseError(s.into())),
        }
    }
}

#[derive(Debug)]
struct ShapeParseError(String);

impl Display for ShapeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to parse trie shape from argument value [{}].",
            self.0
        )
    }
}

#[derive(Debug)]
struct EmptyTrieError;

impl Display for EmptyTrieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no sequences to insert into the trie!")
    }
}

impl Error for EmptyTrieError {}
