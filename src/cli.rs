use crate::game_state::{GameError, GuessOutcome, PlayerInterface, UserAction};
use clap::Parser;
use std::io::BufRead;

/// Fourdle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Play against a fixed target word instead of a random draw
    #[arg(long)]
    pub target: Option<String>,

    /// Seed for the target draw, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

fn is_valid_word(word: &str) -> bool {
    word.len() == 4 && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nEnter your guess (4 letters, or 'exit' to quit, or 'next' to start a new game):");
    let mut input = String::new();
    // A closed input stream means nobody is left to prompt.
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return GuessInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "exit" => GuessInput::Exit,
        "next" => GuessInput::NewGame,
        _ if is_valid_word(&input) => GuessInput::Valid(input),
        _ => {
            println!("Invalid guess. Please enter 4 letters.");
            GuessInput::Invalid
        }
    }
}

pub fn display_game_start(message: &str, guesses_remaining: u8) {
    println!("{message}");
    println!(
        "You have {guesses_remaining} guesses. Hints: 1 = right spot, 0 = wrong spot, - = not in the word."
    );
}

pub fn display_outcome(guess: &str, outcome: &GuessOutcome) {
    println!("{guess} -> {}", outcome.hint());
    println!("{}", outcome.message());
    if outcome.is_terminal() {
        println!("Type 'next' for another word or 'exit' to quit.");
    }
}

pub fn display_error(error: &GameError) {
    println!("{error}");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the PlayerInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PlayerInterface for CliInterface<R> {
    fn show_game_start(&mut self, message: &str, guesses_remaining: u8) {
        display_game_start(message, guesses_remaining);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn show_outcome(&mut self, guess: &str, outcome: &GuessOutcome) {
        display_outcome(guess, outcome);
    }

    fn show_error(&mut self, error: &GameError) {
        display_error(error);
    }

    fn show_exit(&mut self) {
        display_exit_message();
    }
}
