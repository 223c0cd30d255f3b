//! Answer matching for typed answers and multiple-choice option building.

use crate::sampling::shuffle;
use crate::types::{Direction, DisplayMode, Item};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of options shown for a multiple-choice question.
pub const CHOICE_COUNT: usize = 4;

/// Upper bound on random draws while collecting distractors.
pub const MAX_DISTRACTOR_ATTEMPTS: usize = 500;

/// Result of comparing a typed answer to the accepted answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized forms that would have been accepted.
    pub accepted_normalized: Vec<String>,
}

/// Whitespace as far as answers are concerned, including a stray BOM.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Normalize Japanese input: all whitespace removed.
pub fn normalize_japanese(s: &str) -> String {
    s.chars().filter(|&c| !is_space(c)).collect()
}

/// Normalize English input: lowercase, whitespace runs collapsed, trimmed.
pub fn normalize_english(s: &str) -> String {
    s.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Raw answers accepted for an item in the given direction.
pub fn accepted_answers(item: &Item, direction: Direction, display: DisplayMode) -> Vec<&str> {
    match (direction, display) {
        (Direction::JpToEn, _) => vec![item.en.as_str()],
        (Direction::EnToJp, DisplayMode::Kana) => vec![item.jp_kana.as_str()],
        (Direction::EnToJp, DisplayMode::Kanji) => vec![item.jp_kanji.as_str()],
        (Direction::EnToJp, DisplayMode::Both) => {
            vec![item.jp_kana.as_str(), item.jp_kanji.as_str()]
        }
    }
}

/// Compare typed input against every accepted answer for the item.
///
/// Accepted forms that normalize to an empty string are ignored, so a blank
/// input never matches a missing reading.
pub fn evaluate_typed(item: &Item, direction: Direction, display: DisplayMode, typed: &str) -> MatchResult {
    let normalize: fn(&str) -> String = match direction {
        Direction::EnToJp => normalize_japanese,
        Direction::JpToEn => normalize_english,
    };

    let typed_normalized = normalize(typed);
    let accepted_normalized: Vec<String> = accepted_answers(item, direction, display)
        .into_iter()
        .map(normalize)
        .filter(|a| !a.is_empty())
        .collect();

    let is_correct = accepted_normalized.iter().any(|a| *a == typed_normalized);

    MatchResult {
        is_correct,
        typed_normalized,
        accepted_normalized,
    }
}

/// Shorthand for [`evaluate_typed`] when only the verdict matters.
pub fn is_accepted(item: &Item, direction: Direction, display: DisplayMode, typed: &str) -> bool {
    evaluate_typed(item, direction, display, typed).is_correct
}

/// Build shuffled multiple-choice options around the correct text.
///
/// Distractors are drawn from `pool` with replacement until there are
/// [`CHOICE_COUNT`] unique non-empty texts or the attempt budget runs out, so
/// small pools yield fewer options.
pub fn build_choices<R: Rng + ?Sized>(
    correct: &str,
    direction: Direction,
    display: DisplayMode,
    pool: &[Item],
    rng: &mut R,
) -> Vec<String> {
    let mut texts = vec![correct.to_string()];

    let mut attempts = 0;
    while texts.len() < CHOICE_COUNT && attempts < MAX_DISTRACTOR_ATTEMPTS {
        attempts += 1;
        let Some(item) = pool.choose(rng) else {
            break;
        };
        let text = item.text_for(direction, display);
        if !text.is_empty() && !texts.contains(&text) {
            texts.push(text);
        }
    }

    shuffle(&mut texts, rng);
    texts
}
