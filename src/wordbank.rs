use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.len() == 4 && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if word.len() == 4 && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user word list consulted when no path is given on the command line.
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("fourdle").join("words.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_keeps_only_four_letter_words() {
        let data = "cast\nhello\nhi\nword\n\ntest\n";
        assert_eq!(load_wordbank_from_str(data), ["cast", "word", "test"]);
    }

    #[test]
    fn test_load_from_str_lowercases_and_trims() {
        let data = "  CAST  \nWoRd\n";
        assert_eq!(load_wordbank_from_str(data), ["cast", "word"]);
    }

    #[test]
    fn test_load_from_str_drops_non_alphabetic_entries() {
        let data = "ca5t\nword\nc-st\nne xt\n";
        assert_eq!(load_wordbank_from_str(data), ["word"]);
    }

    #[test]
    fn test_embedded_wordbank_is_playable() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(!words.is_empty());
        assert!(words.iter().all(|word| word.len() == 4));
        assert!(words.contains(&"cast".to_string()));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        assert!(load_wordbank_from_file("/nonexistent/words.txt").is_err());
    }
}
