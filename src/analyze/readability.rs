//! Readability: Flesch Reading Ease plus structural signals.

use crate::text;
use crate::types::config::ScoringConfig;
use crate::types::report::{CategoryResult, Impact, Issue, IssueKind};
use crate::vocab::{PASSIVE_AUXILIARIES, TRANSITION_WORDS};

/// Seam for passive-voice detection. The default heuristic is deliberately
/// approximate and its exact behavior is pinned by tests; a grammar-based
/// implementation can replace it without touching the analyzer contract.
pub trait PassiveVoiceDetector {
    fn is_passive(&self, sentence: &str) -> bool;
}

/// A sentence is flagged passive when a be-verb/auxiliary is immediately
/// followed by a token ending in "ed". Not grammatical parsing; do not
/// "fix" it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveVoiceHeuristic;

impl PassiveVoiceDetector for PassiveVoiceHeuristic {
    fn is_passive(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        let tokens: Vec<&str> = lower
            .split_whitespace()
            .map(|token| token.trim_matches(|ch: char| !ch.is_alphanumeric()))
            .collect();

        for auxiliary in PASSIVE_AUXILIARIES {
            let parts: Vec<&str> = auxiliary.split_whitespace().collect();
            for window_start in 0..tokens.len() {
                let window = &tokens[window_start..];
                if window.len() <= parts.len() {
                    continue;
                }
                if window[..parts.len()] == parts[..] && window[parts.len()].ends_with("ed") {
                    return true;
                }
            }
        }
        false
    }
}

pub fn analyze(content: &str, config: &ScoringConfig) -> CategoryResult {
    analyze_with_detector(content, config, &PassiveVoiceHeuristic)
}

pub fn analyze_with_detector(
    content: &str,
    config: &ScoringConfig,
    detector: &dyn PassiveVoiceDetector,
) -> CategoryResult {
    if content.trim().is_empty() {
        return CategoryResult::error_only(
            "No content to analyze",
            "Add content to perform readability analysis",
        );
    }

    let mut result = CategoryResult::new();
    let clean = text::clean_text(content);
    let sentences = text::sentences(content);
    let word_count = clean.split_whitespace().count();
    let sentence_count = sentences.len();
    let paragraph_count = text::paragraph_count(content);
    let syllable_count = text::total_syllables(content);

    result.metric("word_count", word_count as u64);
    result.metric("sentence_count", sentence_count as u64);
    result.metric("paragraph_count", paragraph_count as u64);
    result.metric("syllable_count", syllable_count as u64);
    result.metric(
        "avg_words_per_sentence",
        if sentence_count > 0 {
            round1(word_count as f64 / sentence_count as f64)
        } else {
            0.0
        },
    );
    result.metric(
        "avg_syllables_per_word",
        if word_count > 0 {
            round1(syllable_count as f64 / word_count as f64)
        } else {
            0.0
        },
    );

    let flesch = flesch_reading_ease(word_count, sentence_count, syllable_count);
    result.metric("flesch_score", flesch);
    score_flesch(&mut result, flesch);

    score_sentence_length(&mut result, &sentences, config);
    score_paragraph_length(&mut result, content, config);
    score_transition_words(&mut result, &clean, sentence_count, config);
    score_passive_voice(&mut result, &sentences, config, detector);
    score_subheadings(&mut result, content, word_count);

    result.clamp_score();
    result
}

/// `206.835 - 1.015 x (words/sentences) - 84.6 x (syllables/words)`,
/// clamped to [0, 100] and rounded to one decimal. Zero words or zero
/// sentences short-circuits to 0 with no division.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let avg_sentence_length = words as f64 / sentences as f64;
    let avg_syllables_per_word = syllables as f64 / words as f64;
    let score = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    round1(score.clamp(0.0, 100.0))
}

fn score_flesch(result: &mut CategoryResult, flesch: f64) {
    if flesch >= 90.0 {
        result.improvement("Excellent readability (very easy to read)");
        result.score += 100.0;
    } else if flesch >= 80.0 {
        result.improvement("Good readability (easy to read)");
        result.score += 90.0;
    } else if flesch >= 70.0 {
        result.improvement("Fairly easy to read");
        result.score += 80.0;
    } else if flesch >= 60.0 {
        result.improvement("Standard readability");
        result.score += 70.0;
    } else if flesch >= 50.0 {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Fairly difficult to read",
            Impact::Medium,
            "Consider shorter sentences and simpler words",
        ));
        result.score += 50.0;
    } else if flesch >= 30.0 {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Difficult to read",
            Impact::Medium,
            "Simplify language and sentence structure",
        ));
        result.score += 30.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Error,
            "Very difficult to read",
            Impact::High,
            "Significantly simplify language and use shorter sentences",
        ));
        result.score += 10.0;
    }
}

fn score_sentence_length(result: &mut CategoryResult, sentences: &[String], config: &ScoringConfig) {
    let max_length = config.readability.max_sentence_length;
    let lengths: Vec<usize> = sentences
        .iter()
        .map(|sentence| sentence.split_whitespace().count())
        .collect();
    let long_sentences = lengths.iter().filter(|&&len| len > max_length).count();
    let total: usize = lengths.iter().sum();
    let avg = if sentences.is_empty() {
        0.0
    } else {
        total as f64 / sentences.len() as f64
    };

    result.metric("avg_sentence_length", round1(avg));
    result.metric("long_sentences", long_sentences as u64);

    if long_sentences == 0 {
        result.improvement("All sentences are an appropriate length");
        result.score += 20.0;
    } else if long_sentences as f64 <= sentences.len() as f64 * 0.1 {
        result.improvement("Most sentences are an appropriate length");
        result.score += 15.0;
    } else {
        let percentage = (long_sentences as f64 / sentences.len() as f64 * 100.0).round();
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("{percentage}% of sentences are too long"),
            Impact::Medium,
            "Break long sentences into shorter ones for better readability",
        ));
        result.score += (20.0 - long_sentences as f64 * 2.0).max(0.0);
    }
}

fn score_paragraph_length(result: &mut CategoryResult, content: &str, config: &ScoringConfig) {
    let max_length = config.readability.max_paragraph_length;
    let paragraphs = text::paragraphs(content);
    let long_paragraphs = paragraphs
        .iter()
        .filter(|paragraph| paragraph.split_whitespace().count() > max_length)
        .count();

    result.metric("long_paragraphs", long_paragraphs as u64);

    if long_paragraphs == 0 {
        result.improvement("Paragraphs are an appropriate length");
        result.score += 15.0;
    } else {
        let percentage = (long_paragraphs as f64 / paragraphs.len() as f64 * 100.0).round();
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("{percentage}% of paragraphs are too long"),
            Impact::Low,
            "Break long paragraphs into shorter ones",
        ));
        result.score += (15.0 - long_paragraphs as f64).max(0.0);
    }
}

fn score_transition_words(
    result: &mut CategoryResult,
    clean: &str,
    sentence_count: usize,
    config: &ScoringConfig,
) {
    let lower = clean.to_lowercase();
    // Count distinct transition words present, not total occurrences.
    let present = TRANSITION_WORDS
        .iter()
        .filter(|transition| lower.contains(*transition))
        .count();
    let percentage = if sentence_count > 0 {
        present as f64 / sentence_count as f64 * 100.0
    } else {
        0.0
    };
    result.metric("transition_percentage", round1(percentage));

    let threshold = config.readability.transition_word_threshold;
    if percentage >= threshold {
        result.improvement("Good use of transition words for flow");
        result.score += 15.0;
    } else if percentage >= threshold * 0.5 {
        result.improvement("Decent use of transition words");
        result.score += 10.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Limited use of transition words",
            Impact::Low,
            "Add transition words to improve content flow",
        ));
        result.score += 5.0;
    }
}

fn score_passive_voice(
    result: &mut CategoryResult,
    sentences: &[String],
    config: &ScoringConfig,
    detector: &dyn PassiveVoiceDetector,
) {
    let passive = sentences
        .iter()
        .filter(|sentence| detector.is_passive(sentence))
        .count();
    let percentage = if sentences.is_empty() {
        0.0
    } else {
        passive as f64 / sentences.len() as f64 * 100.0
    };
    result.metric("passive_voice_percentage", round1(percentage));

    let threshold = config.readability.passive_voice_threshold;
    if percentage <= threshold {
        result.improvement("Good use of active voice");
        result.score += 15.0;
    } else if percentage <= threshold * 2.0 {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Some passive voice usage detected",
            Impact::Low,
            "Consider using more active voice for better engagement",
        ));
        result.score += 10.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "High passive voice usage detected",
            Impact::Medium,
            "Replace passive voice with active voice where possible",
        ));
        result.score += 5.0;
    }
}

fn score_subheadings(result: &mut CategoryResult, content: &str, word_count: usize) {
    // Subheadings only: the single H1 belongs to the technical checklist.
    let heading_count = text::headings(content)
        .iter()
        .filter(|heading| heading.level >= 2)
        .count();
    result.metric("heading_count", heading_count as u64);

    let recommended = (word_count / 300).max(1);
    if heading_count >= recommended {
        result.improvement("Good use of subheadings for structure");
        result.score += 10.0;
    } else if heading_count as f64 >= recommended as f64 * 0.5 {
        result.improvement("Decent subheading structure");
        result.score += 7.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Content could benefit from more subheadings",
            Impact::Low,
            "Add subheadings to break up long sections of text",
        ));
        result.score += 3.0;
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{Impact, IssueKind};

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn empty_content_yields_single_high_error() {
        let result = analyze("", &config());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Error);
        assert_eq!(result.issues[0].impact, Impact::High);
    }

    #[test]
    fn flesch_formula_matches_pinned_example() {
        // "The cat sat. The dog ran." - 6 words, 2 sentences, 6 syllables.
        // 206.835 - 1.015*3 - 84.6*1.0 = 118.7 -> clamped to 100.0.
        assert_eq!(flesch_reading_ease(6, 2, 6), 100.0);
    }

    #[test]
    fn flesch_short_circuits_on_zero_denominators() {
        assert_eq!(flesch_reading_ease(0, 2, 6), 0.0);
        assert_eq!(flesch_reading_ease(6, 0, 6), 0.0);
    }

    #[test]
    fn simple_prose_scores_excellent_band() {
        let result = analyze("The cat sat. The dog ran.", &config());
        assert_eq!(result.metrics["flesch_score"], 100.0);
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("Excellent readability")));
    }

    #[test]
    fn passive_heuristic_flags_auxiliary_plus_ed() {
        let detector = PassiveVoiceHeuristic;
        assert!(detector.is_passive("the report was finished by the team"));
        assert!(detector.is_passive("mistakes have been corrected"));
        assert!(!detector.is_passive("the team finished the report"));
        // Auxiliary present but not followed by an -ed token.
        assert!(!detector.is_passive("the report was very long"));
    }

    #[test]
    fn long_sentences_produce_percentage_warning() {
        let long = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty twentyone.";
        let content = format!("{long} {long} Short one here.");
        let result = analyze(&content, &config());
        let warning = result
            .issues
            .iter()
            .find(|issue| issue.message.contains("sentences are too long"))
            .expect("long-sentence warning expected");
        assert_eq!(warning.impact, Impact::Medium);
        assert!(warning.message.contains("67%"));
    }

    #[test]
    fn long_paragraph_warns_at_low_impact() {
        let paragraph = (0..160).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let content = format!("<p>{paragraph}.</p><p>Short paragraph.</p>");
        let result = analyze(&content, &config());
        assert!(result.issues.iter().any(|issue| {
            issue.impact == Impact::Low && issue.message.contains("paragraphs are too long")
        }));
    }

    #[test]
    fn subheading_target_scales_with_length() {
        let body = (0..650).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        // 650 words want ceil-ish 2 subheadings; one earns the middle tier.
        let content = format!("<h2>Section</h2><p>{body}.</p>");
        let result = analyze(&content, &config());
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("Decent subheading structure")));
    }

    #[test]
    fn markupless_content_has_zero_headings() {
        let result = analyze("Plain text only. No markup at all.", &config());
        assert_eq!(result.metrics["heading_count"], 0);
    }
}
