// Integration tests for the fourdle application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use fourdle::cli::CliInterface;
use fourdle::*;

fn bank(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn scripted_session(target: &str, words: &[&str], script: &str) -> GameSession {
    let session = GameSession::seeded(42);
    session.initialize(&bank(words), Some(target)).unwrap();

    let mut interface = CliInterface::new(Cursor::new(script.to_string()));
    run_game_loop(&session, &mut interface);
    session
}

#[test]
fn test_end_to_end_win() {
    // One wrong guess, then the winning one, then quit.
    let session = scripted_session("cast", &["cast", "word", "tell"], "word\ncast\nexit\n");

    let state = session.state();
    assert!(state.won());
    assert!(state.game_over());
    assert_eq!(state.guesses_remaining(), 3);
}

#[test]
fn test_end_to_end_loss_in_five_guesses() {
    let session = scripted_session(
        "cast",
        &["cast", "word", "tell", "acts"],
        "word\ntell\nacts\nword\ntell\n",
    );

    let state = session.state();
    assert!(state.game_over());
    assert!(!state.won());
    assert_eq!(state.guesses_remaining(), 0);
}

#[test]
fn test_next_starts_a_fresh_game() {
    // Win, ask for another word, then quit mid-game.
    let session = scripted_session("cast", &["cast", "word", "tell"], "cast\nnext\nexit\n");

    let state = session.state();
    assert!(!state.game_over());
    assert!(!state.won());
    assert_eq!(state.guesses_remaining(), STARTING_GUESSES);
    assert_eq!(state.dictionary().len(), 3);
}

#[test]
fn test_guess_after_win_is_rejected_without_cost() {
    let session = scripted_session("cast", &["cast", "word"], "cast\nword\nexit\n");

    let state = session.state();
    assert!(state.won());
    assert_eq!(state.guesses_remaining(), 4);
}

#[test]
fn test_closed_input_ends_the_loop() {
    // No explicit exit: the script simply runs out.
    let session = scripted_session("cast", &["cast", "word"], "word\n");

    let state = session.state();
    assert!(!state.game_over());
    assert_eq!(state.guesses_remaining(), 4);
}

#[test]
fn test_unusable_input_consumes_no_attempts() {
    // Too short, non-alphabetic, and not-in-dictionary inputs all bounce.
    let session = scripted_session("cast", &["cast", "word"], "hi\nzz5t\nzzzz\nexit\n");

    let state = session.state();
    assert!(!state.game_over());
    assert_eq!(state.guesses_remaining(), STARTING_GUESSES);
}

#[test]
fn test_session_reports_hints_through_a_game() {
    let session = GameSession::seeded(7);
    session
        .initialize(&bank(&["cast", "acts", "tcsa"]), Some("cast"))
        .unwrap();

    let outcome = session.guess("acts").unwrap();
    assert_eq!(outcome.hint(), "0000");
    let outcome = session.guess("tcsa").unwrap();
    assert_eq!(outcome.hint(), "0010");
    let outcome = session.guess("cast").unwrap();
    assert_eq!(outcome.hint(), "1111");
    assert!(matches!(outcome, GuessOutcome::Won { .. }));

    let state = session.state();
    assert!(state.won());
    assert_eq!(state.guesses_remaining(), 2);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    // Integration test: Load custom wordbank file -> play game
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let wordbank_path = temp_dir.join("fourdle_test_wordbank.txt");

    // Create custom wordbank file; the five-letter word gets filtered out
    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "CAST").unwrap();
        writeln!(file, "word").unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "  tell  ").unwrap();
    }

    let words = load_wordbank_from_file(&wordbank_path).unwrap();
    assert_eq!(words, ["cast", "word", "tell"]);

    let session = GameSession::seeded(11);
    session.initialize(&words, Some("cast")).unwrap();
    let mut interface = CliInterface::new(Cursor::new("word\ncast\n"));
    run_game_loop(&session, &mut interface);

    assert!(session.state().won());

    // Cleanup
    std::fs::remove_file(&wordbank_path).unwrap();
}

#[test]
fn test_embedded_wordbank_supports_a_game() {
    let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
    assert!(!words.is_empty());

    let session = GameSession::seeded(5);
    let message = session.initialize(&words, None).unwrap();
    assert_eq!(message, format!("Game initialized with {} words", words.len()));

    // The draw is seeded but unknown here, so the guess may even win.
    let outcome = session.guess("cast").unwrap();
    assert_eq!(outcome.hint().len(), 4);

    let state = session.state();
    assert!(state.game_over() || state.guesses_remaining() == 4);
}

#[test]
fn test_fixed_target_beats_random_draw() {
    // The pinned target applies even when it is not in the dictionary.
    let session = GameSession::seeded(13);
    session
        .initialize(&bank(&["word", "tell"]), Some("cast"))
        .unwrap();

    let state = session.state();
    assert_eq!(state.target_word(), Some(&['c', 'a', 's', 't']));

    let outcome = session.guess("word").unwrap();
    assert_eq!(outcome.hint(), "----");
}
