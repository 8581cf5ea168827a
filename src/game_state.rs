//! Game state and the engine operations that drive it.
//!
//! `GameState` is plain data plus synchronous, in-memory operations; nothing
//! here panics on bad input. `GameSession` wraps one state and its random
//! source in a mutex so each operation's guard checks and mutations happen
//! under a single lock.

use std::sync::Mutex;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::hint::generate_hint;
use crate::{STARTING_GUESSES, WORD_LENGTH};

/// Everything that can go wrong while setting up or playing a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Dictionary must contain at least one 4-letter word")]
    EmptyDictionary,
    #[error("Target word must be exactly 4 letters")]
    InvalidTargetWord,
    #[error("Game not initialized. Start a game first")]
    GameNotInitialized,
    #[error("Guess must be in the dictionary")]
    GuessNotInDictionary,
    #[error("Game is over. Start a new game.")]
    GameAlreadyOver,
    #[error("Guess must be exactly 4 letters")]
    InvalidGuessLength,
    #[error("No dictionary loaded. Initialize a game first")]
    NoDictionaryLoaded,
}

/// Where a processed guess leaves the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Won { hint: String, message: String },
    Continue { hint: String, message: String },
    Lost { hint: String, message: String },
}

impl GuessOutcome {
    /// Per-position hint string for the guess that produced this outcome.
    pub fn hint(&self) -> &str {
        match self {
            GuessOutcome::Won { hint, .. }
            | GuessOutcome::Continue { hint, .. }
            | GuessOutcome::Lost { hint, .. } => hint,
        }
    }

    /// Player-facing summary of the outcome.
    pub fn message(&self) -> &str {
        match self {
            GuessOutcome::Won { message, .. }
            | GuessOutcome::Continue { message, .. }
            | GuessOutcome::Lost { message, .. } => message,
        }
    }

    /// True once the game has been decided either way.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Won { .. } | GuessOutcome::Lost { .. }
        )
    }
}

/// One game of guess-the-word: the word bank, the hidden target, and the
/// progress counters.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    dictionary: Vec<String>,
    target_word: Option<[char; WORD_LENGTH]>,
    guesses_remaining: u8,
    game_over: bool,
    won: bool,
}

impl GameState {
    /// Empty state: no dictionary, no target, no game in progress.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    pub fn target_word(&self) -> Option<&[char; WORD_LENGTH]> {
        self.target_word.as_ref()
    }

    pub fn guesses_remaining(&self) -> u8 {
        self.guesses_remaining
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Loads a dictionary and starts a fresh game against it.
    ///
    /// Words that are not exactly 4 characters long are dropped. The target
    /// is drawn from the filtered dictionary unless `target` pins it (the
    /// pinned word need not be in the dictionary, but must be 4 characters).
    /// On error the previous state is left untouched.
    pub fn initialize<R>(
        &mut self,
        words: &[String],
        target: Option<&str>,
        rng: &mut R,
    ) -> Result<String, GameError>
    where
        R: Rng + ?Sized,
    {
        let dictionary: Vec<String> = words
            .iter()
            .filter(|word| word.chars().count() == WORD_LENGTH)
            .cloned()
            .collect();
        if dictionary.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        let target_word = match target {
            Some(word) => to_target(word).ok_or(GameError::InvalidTargetWord)?,
            None => draw_target(&dictionary, rng)?,
        };

        info!("game initialized, {} words in play", dictionary.len());

        *self = GameState {
            dictionary,
            target_word: Some(target_word),
            guesses_remaining: STARTING_GUESSES,
            game_over: false,
            won: false,
        };
        Ok(format!(
            "Game initialized with {} words",
            self.dictionary.len()
        ))
    }

    /// Starts another round against the dictionary already loaded: new
    /// target, full guess count, cleared outcome flags.
    pub fn start_new_game<R>(&mut self, rng: &mut R) -> Result<String, GameError>
    where
        R: Rng + ?Sized,
    {
        if self.dictionary.is_empty() {
            return Err(GameError::NoDictionaryLoaded);
        }

        self.target_word = Some(draw_target(&self.dictionary, rng)?);
        self.guesses_remaining = STARTING_GUESSES;
        self.game_over = false;
        self.won = false;

        info!("new game started, {} words in play", self.dictionary.len());
        Ok(format!(
            "New game started with {} words",
            self.dictionary.len()
        ))
    }

    /// Scores one guess and advances the game.
    ///
    /// Rejected guesses (no game, unknown word, game already decided, wrong
    /// length) consume no attempt and change nothing. Accepted guesses cost
    /// one attempt and end the game on a win or on the last attempt.
    pub fn apply_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let Some(target) = self.target_word else {
            return Err(GameError::GameNotInitialized);
        };
        if !self.dictionary.iter().any(|word| word == guess) {
            return Err(GameError::GuessNotInDictionary);
        }
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        if guess.chars().count() != WORD_LENGTH {
            return Err(GameError::InvalidGuessLength);
        }

        let hint = generate_hint(&target, guess);
        let lowered: Vec<char> = guess.to_lowercase().chars().collect();
        let is_correct = lowered == target;

        self.guesses_remaining -= 1;
        self.game_over = is_correct || self.guesses_remaining == 0;
        self.won = is_correct;

        debug!(
            "guess '{}' scored '{}', {} attempts left",
            guess, hint, self.guesses_remaining
        );

        Ok(if is_correct {
            GuessOutcome::Won {
                hint,
                message: "Congratulations! You guessed the word!".to_string(),
            }
        } else if self.guesses_remaining == 0 {
            let word: String = target.iter().collect();
            GuessOutcome::Lost {
                hint,
                message: format!("Game over! The word was '{word}'"),
            }
        } else {
            GuessOutcome::Continue {
                hint,
                message: format!("{} guesses remaining", self.guesses_remaining),
            }
        })
    }
}

fn to_target(word: &str) -> Option<[char; WORD_LENGTH]> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    chars.try_into().ok()
}

fn draw_target<R>(dictionary: &[String], rng: &mut R) -> Result<[char; WORD_LENGTH], GameError>
where
    R: Rng + ?Sized,
{
    let word = dictionary.choose(rng).ok_or(GameError::EmptyDictionary)?;
    to_target(word).ok_or(GameError::InvalidTargetWord)
}

/// Shared-access owner of one game.
///
/// Each operation takes the lock for its whole read-check-mutate sequence,
/// so concurrent callers see the game advance one guess at a time and a
/// finished game rejects every late guess.
#[derive(Debug)]
pub struct GameSession {
    inner: Mutex<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    state: GameState,
    rng: StdRng,
}

impl GameSession {
    /// Session whose targets are drawn from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Session whose target draws replay deterministically for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                state: GameState::new(),
                rng,
            }),
        }
    }

    pub fn initialize(&self, words: &[String], target: Option<&str>) -> Result<String, GameError> {
        let mut guard = self.inner.lock().unwrap();
        let SessionInner { state, rng } = &mut *guard;
        state.initialize(words, target, rng)
    }

    pub fn guess(&self, guess: &str) -> Result<GuessOutcome, GameError> {
        self.inner.lock().unwrap().state.apply_guess(guess)
    }

    pub fn new_game(&self) -> Result<String, GameError> {
        let mut guard = self.inner.lock().unwrap();
        let SessionInner { state, rng } = &mut *guard;
        state.start_new_game(rng)
    }

    /// Snapshot of the state as of some point during the call. Concurrent
    /// guesses may land before the snapshot is read.
    pub fn state(&self) -> GameState {
        self.inner.lock().unwrap().state.clone()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// What the player asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Presentation seam between the game loop and a front end, be it the plain
/// terminal, the TUI, or a scripted reader in tests.
pub trait PlayerInterface {
    /// A game just started or restarted.
    fn show_game_start(&mut self, message: &str, guesses_remaining: u8);
    /// Prompt for the next action. `None` means unusable input; ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    /// An accepted guess and where it left the game.
    fn show_outcome(&mut self, guess: &str, outcome: &GuessOutcome);
    /// A rejected action.
    fn show_error(&mut self, error: &GameError);
    /// The player is leaving.
    fn show_exit(&mut self);
}

/// Drives an initialized session with actions from `interface` until the
/// player exits.
pub fn run_game_loop<I: PlayerInterface>(session: &GameSession, interface: &mut I) {
    let snapshot = session.state();
    interface.show_game_start(
        &format!(
            "Guess the {WORD_LENGTH}-letter word! {} words loaded.",
            snapshot.dictionary().len()
        ),
        snapshot.guesses_remaining(),
    );

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.show_exit();
                break;
            }
            UserAction::NewGame => match session.new_game() {
                Ok(message) => interface.show_game_start(&message, STARTING_GUESSES),
                Err(error) => interface.show_error(&error),
            },
            UserAction::Guess(guess) => match session.guess(&guess) {
                Ok(outcome) => interface.show_outcome(&guess, &outcome),
                Err(error) => interface.show_error(&error),
            },
        }
    }
}
