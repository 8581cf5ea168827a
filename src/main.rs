use std::io;
use std::process::exit;

use log::{info, warn};

use fourdle::cli::{CliInterface, parse_cli};
use fourdle::game_state::{GameSession, run_game_loop};
use fourdle::logging;
use fourdle::tui::TuiInterface;
use fourdle::wordbank::{
    EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str, user_wordbank_path,
};

fn main() {
    let cli = parse_cli();

    if let Err(e) = logging::init(cli.tui) {
        eprintln!("Failed to set up logging: {e}");
    }

    let words = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                exit(1);
            }
        },
        None => load_user_or_embedded(),
    };

    let session = match cli.seed {
        Some(seed) => GameSession::seeded(seed),
        None => GameSession::new(),
    };

    match session.initialize(&words, cli.target.as_deref()) {
        Ok(message) => info!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    }

    if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => run_game_loop(&session, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the TUI: {e}");
                exit(1);
            }
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        run_game_loop(&session, &mut interface);
    }
}

/// Word bank used when no path is given: the per-user list if one exists,
/// otherwise the built-in bank.
fn load_user_or_embedded() -> Vec<String> {
    match user_wordbank_path().filter(|path| path.exists()) {
        Some(path) => match load_wordbank_from_file(&path) {
            Ok(words) => {
                info!("loaded user word bank from {}", path.display());
                words
            }
            Err(e) => {
                warn!(
                    "could not read {}: {e}, using the built-in bank",
                    path.display()
                );
                load_wordbank_from_str(EMBEDDED_WORDBANK)
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    }
}
