//! Wordle Game - CLI
//!
//! Play in a terminal UI (default) or a line-based console, or score a single
//! guess against a word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use wordle_game::{
    commands::{GameConfig, run_simple, score_word},
    core::{Dictionary, ScoringPolicy},
    output::print_score,
    wordlists::{DICTIONARY, loader::dictionary_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for choosing the answer (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Cap yellow hints by how often a letter occurs in the answer
    #[arg(long, global = true)]
    count_aware: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode without the TUI
    Simple,

    /// Score a guess against a word and print the feedback
    Score {
        /// The guessed word
        guess: String,

        /// The word to score against
        answer: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    use wordle_game::wordlists::loader::load_from_file;

    let dictionary = match wordlist {
        "embedded" => dictionary_from_slice(DICTIONARY),
        path => load_from_file(path)?,
    };
    debug!("dictionary '{wordlist}' has {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig {
        policy: if cli.count_aware {
            ScoringPolicy::CountAware
        } else {
            ScoringPolicy::PerLetter
        },
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(&dictionary, config)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_simple(&dictionary, &config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, answer } => run_score_command(&guess, &answer, config.policy),
    }
}

fn run_score_command(guess: &str, answer: &str, policy: ScoringPolicy) -> Result<()> {
    let result = score_word(guess, answer, policy).map_err(|e| anyhow::anyhow!(e))?;
    print_score(&result.guess, &result.answer, &result.feedback);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config)?;
    run_tui(app)
}
