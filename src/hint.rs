//! Hint scoring: how close a guess is to the target, position by position.

use std::collections::HashMap;

use crate::WORD_LENGTH;
use crate::game_state::GameError;

/// Match quality of a single guessed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintMark {
    /// Right character in the right position.
    Exact,
    /// Character occurs elsewhere in the target.
    Present,
    /// Character not in the target, or every occurrence already claimed.
    Absent,
}

impl HintMark {
    /// Hint-string character for this mark.
    pub fn to_char(self) -> char {
        match self {
            HintMark::Exact => '1',
            HintMark::Present => '0',
            HintMark::Absent => '-',
        }
    }

    /// Parse a hint-string character back into a mark.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(HintMark::Exact),
            '0' => Some(HintMark::Present),
            '-' => Some(HintMark::Absent),
            _ => None,
        }
    }
}

/// Scores `guess` against `target`, one mark per guessed character:
/// `1` exact match, `0` wrong position, `-` absent.
///
/// Two passes over the guess. The first finds exact matches and removes each
/// matched character from a pool of remaining target characters; only then
/// does the second pass hand out wrong-position marks from what is left.
/// Completing the exact pass first keeps a duplicated letter from being
/// credited more than once per target occurrence, and keeps an exact match
/// from being stolen by an earlier wrong-position one.
///
/// The guess is lower-cased before comparison; `target` is assumed to be
/// lower-cased already. Callers are responsible for handing in a guess of
/// matching length (see `GameState::apply_guess`).
pub fn generate_hint(target: &[char; WORD_LENGTH], guess: &str) -> String {
    let guess: Vec<char> = guess.to_lowercase().chars().collect();

    let mut remaining: HashMap<char, u8> = HashMap::new();
    for &t in target {
        *remaining.entry(t).or_insert(0) += 1;
    }

    let mut marks = vec![HintMark::Absent; guess.len()];

    for (i, g) in guess.iter().enumerate() {
        if target.get(i) == Some(g) {
            marks[i] = HintMark::Exact;
            if let Some(count) = remaining.get_mut(g) {
                *count -= 1;
            }
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if marks[i] == HintMark::Exact {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *count -= 1;
            marks[i] = HintMark::Present;
        }
    }

    marks.iter().map(|mark| mark.to_char()).collect()
}

/// Convenience wrapper that refuses over-long guesses instead of scoring
/// them. Kept for callers that score free-form input without going through
/// the game state machine.
pub fn generate_hint_checked(
    target: &[char; WORD_LENGTH],
    guess: &str,
) -> Result<String, GameError> {
    if guess.chars().count() > WORD_LENGTH {
        return Err(GameError::InvalidGuessLength);
    }
    Ok(generate_hint(target, guess))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(word: &str) -> [char; WORD_LENGTH] {
        let chars: Vec<char> = word.chars().collect();
        chars.try_into().unwrap()
    }

    #[test]
    fn test_all_exact() {
        assert_eq!(generate_hint(&target("cast"), "cast"), "1111");
    }

    #[test]
    fn test_nothing_shared() {
        assert_eq!(generate_hint(&target("cast"), "ring"), "----");
    }

    #[test]
    fn test_full_rotation_all_wrong_position() {
        // Every letter of "acts" is in "cast", none in its own slot.
        assert_eq!(generate_hint(&target("cast"), "acts"), "0000");
    }

    #[test]
    fn test_exact_anchor_among_swaps() {
        // The "s" sits in its own slot; the rest are displaced.
        assert_eq!(generate_hint(&target("cast"), "tcsa"), "0010");
    }

    #[test]
    fn test_duplicate_guess_letter_finds_no_occurrence() {
        // Both "l"s score absent: the target has none.
        assert_eq!(generate_hint(&target("test"), "tell"), "11--");
    }

    #[test]
    fn test_duplicate_guess_letter_no_counts_left() {
        // Only the final "b" matches exactly; the earlier "b" finds no
        // remaining occurrence, and "c" is absent entirely.
        assert_eq!(generate_hint(&target("aaab"), "ccbb"), "---1");
    }

    #[test]
    fn test_exact_match_not_stolen_by_earlier_duplicate() {
        // The lone "o" belongs to the exact match at the end, so the
        // leading "o" scores absent rather than wrong-position.
        assert_eq!(generate_hint(&target("also"), "oslo"), "-001");
    }

    #[test]
    fn test_guess_is_lowercased() {
        assert_eq!(generate_hint(&target("cast"), "CAST"), "1111");
        assert_eq!(generate_hint(&target("test"), "TeLl"), "11--");
    }

    #[test]
    fn test_hint_length_and_alphabet() {
        let pairs = [
            ("cast", "word"),
            ("cast", "cast"),
            ("test", "tell"),
            ("aaab", "ccbb"),
            ("word", "acts"),
        ];
        for (t, g) in pairs {
            let hint = generate_hint(&target(t), g);
            assert_eq!(hint.chars().count(), g.chars().count());
            assert!(hint.chars().all(|c| c == '1' || c == '0' || c == '-'));
        }
    }

    #[test]
    fn test_checked_rejects_long_guess() {
        assert_eq!(
            generate_hint_checked(&target("cast"), "casts"),
            Err(GameError::InvalidGuessLength)
        );
    }

    #[test]
    fn test_checked_scores_exact_length() {
        assert_eq!(
            generate_hint_checked(&target("cast"), "cast"),
            Ok("1111".to_string())
        );
    }

    #[test]
    fn test_mark_chars_round_trip() {
        for mark in [HintMark::Exact, HintMark::Present, HintMark::Absent] {
            assert_eq!(HintMark::from_char(mark.to_char()), Some(mark));
        }
        assert_eq!(HintMark::from_char('x'), None);
    }
}
