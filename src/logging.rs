use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// Initializes the global logger from `RUST_LOG`, defaulting to `info`.
///
/// With `to_file` set (TUI mode), records go to a timestamped file under the
/// platform cache directory instead of stderr, which the alternate screen
/// owns while the TUI is up.
pub fn init(to_file: bool) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    if to_file {
        let path = log_file_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        builder.target(Target::Pipe(Box::new(File::create(&path)?)));
    }

    builder.init();
    Ok(())
}

fn log_file_path() -> PathBuf {
    let name = format!("fourdle-{}.log", chrono::Local::now().format("%Y%m%d-%H%M%S"));
    match dirs::cache_dir() {
        Some(dir) => dir.join("fourdle").join(name),
        None => PathBuf::from(name),
    }
}

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
