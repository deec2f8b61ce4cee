//! seven wordles - CLI
//!
//! Timed word-guessing game: seven targets in a row, six guesses each, with a
//! 3 second penalty per wrong guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use seven_wordles::{
    commands::run_simple,
    core::Word,
    game::{GameConfig, Session, TargetSource},
    interactive::{App, run_tui},
    wordlists::{
        COMMON, DICTIONARY, Dictionary,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "seven_wordles",
    about = "Guess seven words against the clock; wrong guesses cost 3 seconds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for a reproducible target sequence (shareable games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load wordlists based on the -w flag
///
/// Returns (`accepted_guesses`, `target_pool`)
/// - "embedded": full embedded dictionary for guessing, common words as targets
/// - "<path>": load a custom list; targets are drawn from the same list
fn load_wordlists(wordlist_mode: &str, word_length: usize) -> Result<(Vec<Word>, Vec<Word>)> {
    match wordlist_mode {
        "embedded" => Ok((
            words_from_slice(DICTIONARY, word_length),
            words_from_slice(COMMON, word_length),
        )),
        path => {
            let custom_words = load_from_file(path, word_length)?;
            anyhow::ensure!(
                !custom_words.is_empty(),
                "no valid {word_length}-letter words in {path}"
            );
            Ok((custom_words.clone(), custom_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::default();
    let (accepted, pool) = load_wordlists(&cli.wordlist, config.word_length)?;

    let dictionary = Dictionary::new(&accepted);
    let targets = match cli.seed {
        Some(seed) => TargetSource::seeded(pool, seed),
        None => TargetSource::new(pool),
    };
    let session = Session::new(config, dictionary, targets);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(session).map_err(|e| anyhow::anyhow!(e)),
    }
}
