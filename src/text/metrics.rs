//! Word, sentence, paragraph, and syllable counting.
//!
//! These are the load-bearing approximations every score is built on. The
//! score tests pin their exact behavior (including the silent-e syllable
//! rule), so do not "improve" them without re-pinning those tests.

use super::markup::strip_markup;

/// Markup-stripped, whitespace-collapsed, trimmed text.
pub fn clean_text(text: &str) -> String {
    let stripped = strip_markup(text);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of whitespace-separated words after markup removal. Empty or
/// whitespace-only input yields 0.
pub fn word_count(text: &str) -> usize {
    strip_markup(text).split_whitespace().count()
}

/// Sentences are runs of text between `.`, `!`, or `?`; empty fragments are
/// dropped, so trailing punctuation does not create phantom sentences.
pub fn sentence_count(text: &str) -> usize {
    sentences(text).len()
}

pub fn sentences(text: &str) -> Vec<String> {
    clean_text(text)
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Paragraph-level block count. Counts `</p>` boundaries when paragraph
/// markup is present; otherwise splits on blank lines. Non-empty input
/// always counts at least 1.
pub fn paragraph_count(markup: &str) -> usize {
    let lower = markup.to_ascii_lowercase();
    let p_closes = lower.matches("</p>").count();
    let has_breaks = lower.contains("<br");

    if p_closes == 0 && !has_breaks {
        let blocks = markup
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .count();
        return blocks;
    }

    p_closes.max(1)
}

/// Syllables in one word. Words of three letters or fewer count as one
/// syllable; longer words count transitions into vowel groups (a e i o u y),
/// minus one for a trailing silent `e`, floored at one.
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .to_ascii_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }
    if letters.len() <= 3 {
        return 1;
    }

    let mut syllables: isize = 0;
    let mut previous_was_vowel = false;
    for &ch in &letters {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if letters.last() == Some(&'e') {
        syllables -= 1;
    }

    syllables.max(1) as usize
}

/// Total syllables across all words of a text.
pub fn total_syllables(text: &str) -> usize {
    clean_text(text)
        .split_whitespace()
        .map(syllable_count)
        .sum()
}
