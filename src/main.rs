//! Word Scramble - CLI
//!
//! Anagram word game with TUI and CLI modes: spell words from the letters of
//! a shuffled root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_word, run_simple},
    core::Word,
    dictionary::WordSetDictionary,
    output::print_check_result,
    wordlists::{START_WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell words from the letters of a shuffled root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded root words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Dictionary: 'embedded' (default, offline word set) or path to file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Check a single candidate against a given root word
    Check {
        /// The root word to spell from
        root: String,

        /// The candidate word to classify
        word: String,
    },
}

/// Load root-word candidates based on the -w flag
fn load_start_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "all" => Ok(words_from_slice(START_WORDS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load word list from '{path}'"))?;
            Ok(words)
        }
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary_mode: &str) -> Result<WordSetDictionary> {
    match dictionary_mode {
        "embedded" => Ok(WordSetDictionary::embedded()),
        path => WordSetDictionary::from_file(path)
            .with_context(|| format!("failed to load dictionary from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let start_words = load_start_words(&cli.wordlist)?;
    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&start_words, dictionary),
        Commands::Simple => {
            run_simple(&start_words, dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, word } => run_check_command(&root, &word, dictionary),
    }
}

fn run_play_command(start_words: &[Word], dictionary: WordSetDictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(start_words, dictionary);
    run_tui(app)
}

fn run_check_command(root: &str, word: &str, dictionary: WordSetDictionary) -> Result<()> {
    let mut rng = rand::rng();
    let result =
        check_word(root, word, dictionary, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
