// Library interface for fourdle
// This allows integration tests to access internal modules

pub mod cli;
pub mod game_state;
pub mod hint;
pub mod logging;
pub mod tui;
pub mod wordbank;

/// Characters in every target word and guess.
pub const WORD_LENGTH: usize = 4;

/// Guesses granted per game.
pub const STARTING_GUESSES: u8 = 5;

// Re-export commonly used items for easier testing
pub use game_state::{
    GameError, GameSession, GameState, GuessOutcome, PlayerInterface, UserAction, run_game_loop,
};
pub use hint::{HintMark, generate_hint, generate_hint_checked};
pub use wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
