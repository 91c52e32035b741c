//! Keyword usage: density, placement, variations, stuffing.

use crate::text;
use crate::types::config::{KeywordThresholds, ScoringConfig};
use crate::types::report::{CategoryResult, Impact, Issue, IssueKind};
use crate::vocab::{MODIFIER_SYNONYMS, STOPWORDS, TOPIC_TERMS};
use serde_json::json;

/// Outcome of the density bucket evaluation, applied after the stuffing
/// check so stuffing can demote a full-credit density.
enum DensityBucket {
    NotFound,
    TooLow,
    TooHigh,
    AboveOptimal,
    Optimal,
}

pub fn analyze(
    content: &str,
    focus_keyword: &str,
    title: &str,
    config: &ScoringConfig,
) -> CategoryResult {
    let mut result = CategoryResult::new();
    let keyword = focus_keyword.trim();

    if keyword.is_empty() {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "No focus keyword specified",
            Impact::Medium,
            "Define a focus keyword to optimize your content",
        ));
        return result;
    }

    let clean = text::clean_text(content);
    let word_count = clean.split_whitespace().count();
    if word_count == 0 {
        return CategoryResult::error_only(
            "No content to analyze",
            "Add content to analyze keyword usage",
        );
    }

    let keyword_lower = keyword.to_lowercase();
    let clean_lower = clean.to_lowercase();

    if keyword_lower
        .split_whitespace()
        .all(|token| STOPWORDS.contains(&token))
    {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "Focus keyword consists only of common stopwords",
            Impact::Low,
            "Choose a more specific keyword that describes the topic",
        ));
    }

    let density = keyword_density(&clean_lower, &keyword_lower, word_count);
    result.metric("density", round1(density));
    result.metric("word_count", word_count as u64);

    let bucket = density_bucket(density, &config.keywords);
    let stuffing = stuffing_check(&clean_lower, &keyword_lower, density);

    // Base density score; a stuffing flag suppresses the full-credit tier.
    match bucket {
        DensityBucket::NotFound => {
            result.issues.push(Issue::new(
                IssueKind::Error,
                "Focus keyword not found in content",
                Impact::High,
                "Include your focus keyword naturally in the content",
            ));
        }
        DensityBucket::TooLow => {
            result.issues.push(Issue::new(
                IssueKind::Warning,
                format!("Keyword density too low ({:.1}%)", density),
                Impact::Medium,
                format!(
                    "Increase keyword usage to at least {:.1}%",
                    config.keywords.min_density
                ),
            ));
            result.score += 40.0;
        }
        DensityBucket::TooHigh => {
            result.issues.push(Issue::new(
                IssueKind::Error,
                format!("Keyword density too high ({:.1}%)", density),
                Impact::High,
                format!(
                    "Reduce keyword usage to under {:.1}%",
                    config.keywords.max_density
                ),
            ));
            result.score += 20.0;
        }
        DensityBucket::AboveOptimal => {
            result.issues.push(Issue::new(
                IssueKind::Warning,
                format!("Keyword density slightly high ({:.1}%)", density),
                Impact::Low,
                format!(
                    "Consider reducing to around {:.1}% for optimal density",
                    config.keywords.optimal_density
                ),
            ));
            result.score += 80.0;
        }
        DensityBucket::Optimal => {
            if stuffing.is_stuffed {
                result.score += 20.0;
            } else {
                result.improvement(format!("Optimal keyword density ({:.1}%)", density));
                result.score += 100.0;
            }
        }
    }

    let placement = placement_signals(content, &keyword_lower, title);
    result.metric(
        "placement",
        json!({
            "in_title": placement.in_title,
            "in_h1": placement.in_h1,
            "in_h2": placement.in_h2,
            "in_h3": placement.in_h3,
            "in_first_paragraph": placement.in_first_paragraph,
            "in_last_paragraph": placement.in_last_paragraph,
            "in_alt_text": placement.in_alt_text,
        }),
    );
    score_placement(&mut result, &placement, config);

    let semantic = semantic_terms(&keyword_lower);
    let semantic_found: Vec<String> = semantic
        .iter()
        .filter(|term| clean_lower.contains(term.as_str()))
        .cloned()
        .collect();
    let coverage = if semantic.is_empty() {
        0.0
    } else {
        round1(semantic_found.len() as f64 / semantic.len() as f64 * 100.0)
    };
    result.metric(
        "semantic",
        json!({
            "suggested": semantic,
            "count": semantic_found.len(),
            "coverage": coverage,
            "found": semantic_found,
        }),
    );

    let variations: Vec<String> = keyword_variations(&keyword_lower)
        .into_iter()
        .filter(|variation| clean_lower.contains(variation.as_str()))
        .collect();
    if !variations.is_empty() {
        let shown: Vec<&str> = variations.iter().take(3).map(String::as_str).collect();
        result.improvement(format!("Keyword variations found: {}", shown.join(", ")));
        result.score += 15.0;
    }
    result.metric("variations", json!(variations));

    if stuffing.is_stuffed {
        result.issues.push(Issue::new(
            IssueKind::Error,
            "Potential keyword stuffing detected",
            Impact::High,
            "Reduce keyword frequency and use more natural language",
        ));
        result.metric("keyword_stuffing", true);
        result.metric("stuffing_reasons", json!(stuffing.reasons));
    } else {
        result.metric("keyword_stuffing", false);
        result.score += 10.0;
    }

    result.clamp_score();
    result
}

fn density_bucket(density: f64, thresholds: &KeywordThresholds) -> DensityBucket {
    if density == 0.0 {
        DensityBucket::NotFound
    } else if density < thresholds.min_density {
        DensityBucket::TooLow
    } else if density > thresholds.max_density {
        DensityBucket::TooHigh
    } else if density > thresholds.optimal_density {
        DensityBucket::AboveOptimal
    } else {
        DensityBucket::Optimal
    }
}

/// Occurrences / words x 100. Occurrences are the larger of raw substring
/// matches and whole-word matches, so hyphenated or compounded uses still
/// count while plain word matching stays authoritative.
fn keyword_density(clean_lower: &str, keyword_lower: &str, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let occurrences = substring_matches(clean_lower, keyword_lower)
        .max(whole_word_matches(clean_lower, keyword_lower));
    occurrences as f64 / word_count as f64 * 100.0
}

fn substring_matches(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

fn whole_word_matches(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = haystack[pos..].find(needle) {
        let start = pos + found;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |ch| !ch.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |ch| !ch.is_alphanumeric());
        if before_ok && after_ok {
            count += 1;
        }
        pos = start + needle.len().max(1);
    }
    count
}

struct PlacementSignals {
    in_title: bool,
    in_h1: bool,
    in_h2: bool,
    in_h3: bool,
    in_first_paragraph: bool,
    in_last_paragraph: bool,
    in_alt_text: bool,
}

fn placement_signals(content: &str, keyword_lower: &str, title: &str) -> PlacementSignals {
    let in_heading = |level: u8| {
        text::headings_of_level(content, level)
            .iter()
            .any(|heading| heading.to_lowercase().contains(keyword_lower))
    };

    let paragraphs = text::paragraphs(content);
    let in_paragraph = |paragraph: Option<&String>| {
        paragraph.is_some_and(|text| text.to_lowercase().contains(keyword_lower))
    };

    PlacementSignals {
        in_title: title.to_lowercase().contains(keyword_lower),
        in_h1: in_heading(1),
        in_h2: in_heading(2),
        in_h3: in_heading(3),
        in_first_paragraph: in_paragraph(paragraphs.first()),
        in_last_paragraph: in_paragraph(paragraphs.last()),
        in_alt_text: text::images(content).iter().any(|image| {
            image
                .alt
                .as_deref()
                .is_some_and(|alt| alt.to_lowercase().contains(keyword_lower))
        }),
    }
}

fn score_placement(result: &mut CategoryResult, placement: &PlacementSignals, config: &ScoringConfig) {
    let bonuses = &config.keywords;

    if placement.in_title {
        result.improvement("Keyword found in title");
        result.score += bonuses.title_bonus;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Keyword not found in title",
            Impact::Medium,
            "Include focus keyword in the title",
        ));
    }

    if placement.in_h1 {
        result.improvement("Keyword found in H1 heading");
        result.score += bonuses.h1_bonus;
    }

    if placement.in_first_paragraph {
        result.improvement("Keyword found in first paragraph");
        result.score += bonuses.first_paragraph_bonus;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Keyword not in first paragraph",
            Impact::Medium,
            "Include focus keyword in the opening paragraph",
        ));
    }

    if placement.in_alt_text {
        result.improvement("Keyword found in image alt text");
        result.score += bonuses.alt_text_bonus;
    }

    if placement.in_h2 || placement.in_h3 {
        result.improvement("Keyword found in subheadings");
        result.score += bonuses.subheading_bonus;
    }
}

/// Morphological variations: plural toggle, -ing/-ed respecting a trailing
/// silent `e`, and modifier synonym substitution. Best-effort, not a
/// stemmer.
pub fn keyword_variations(keyword_lower: &str) -> Vec<String> {
    let mut variations = Vec::new();

    match keyword_lower.strip_suffix('s') {
        Some(singular) => variations.push(singular.to_string()),
        None => variations.push(format!("{keyword_lower}s")),
    }

    let stem = keyword_lower.strip_suffix('e').unwrap_or(keyword_lower);
    variations.push(format!("{stem}ing"));
    variations.push(format!("{stem}ed"));

    for (word, synonyms) in MODIFIER_SYNONYMS {
        if keyword_lower.contains(word) {
            for synonym in *synonyms {
                variations.push(keyword_lower.replace(word, synonym));
            }
        }
    }

    variations.retain(|variation| !variation.is_empty() && variation.as_str() != keyword_lower);
    let mut seen = std::collections::HashSet::new();
    variations.retain(|variation| seen.insert(variation.clone()));
    variations
}

/// Related-term candidates: topic-map entries whose stem appears in the
/// keyword, plus the morphological variations.
fn semantic_terms(keyword_lower: &str) -> Vec<String> {
    let mut terms = Vec::new();
    for (stem, related) in TOPIC_TERMS {
        if keyword_lower.contains(stem) {
            terms.extend(related.iter().map(ToString::to_string));
        }
    }
    terms.extend(keyword_variations(keyword_lower));
    let mut seen = std::collections::HashSet::new();
    terms.retain(|term| seen.insert(term.clone()));
    terms
}

struct StuffingCheck {
    is_stuffed: bool,
    reasons: Vec<&'static str>,
}

/// Stuffing when any of: overall density above the absolute 4% ceiling,
/// more than two consecutive keyword tokens, or over 8% density inside any
/// non-overlapping 100-word segment.
fn stuffing_check(clean_lower: &str, keyword_lower: &str, density: f64) -> StuffingCheck {
    let mut reasons = Vec::new();

    if density > 4.0 {
        reasons.push("High keyword density");
    }

    if consecutive_keyword_tokens(clean_lower, keyword_lower) > 2 {
        reasons.push("Consecutive keyword repetition");
    }

    let tokens: Vec<&str> = clean_lower.split_whitespace().collect();
    for segment in tokens.chunks(100) {
        let joined = segment.join(" ");
        if keyword_density(&joined, keyword_lower, segment.len()) > 8.0 {
            reasons.push("High density in content segment");
            break;
        }
    }

    StuffingCheck {
        is_stuffed: !reasons.is_empty(),
        reasons,
    }
}

fn consecutive_keyword_tokens(clean_lower: &str, keyword_lower: &str) -> usize {
    let mut max_run = 0;
    let mut run = 0;
    for token in clean_lower.split_whitespace() {
        if token.contains(keyword_lower) {
            run += 1;
            max_run = max_run.max(run);
        } else {
            run = 0;
        }
    }
    max_run
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

    fn hundred_words_with(keyword: &str, times: usize) -> String {
        let mut words: Vec<String> = (0..100 - times).map(|i| format!("filler{i}")).collect();
        for i in 0..times {
            words.insert(i * 17, keyword.to_string());
        }
        words.truncate(100);
        words.join(" ")
    }

    #[test]
    fn missing_keyword_warns_without_scoring() {
        let result = analyze("some content here", "", "title", &config());
        assert_eq!(result.score, 0.0);
        assert!(result
            .issues
            .iter()
            .any(|issue| issue.message.contains("No focus keyword")));
    }

    #[test]
    fn empty_content_yields_single_high_error() {
        let result = analyze("", "rust", "title", &config());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Error);
        assert_eq!(result.issues[0].impact, Impact::High);
    }

    #[test]
    fn stopword_only_keyword_gets_low_impact_suggestion() {
        let content = hundred_words_with("the", 2);
        let result = analyze(&content, "the", "title", &config());
        assert!(result.issues.iter().any(|issue| {
            issue.kind == IssueKind::Suggestion
                && issue.impact == Impact::Low
                && issue.message.contains("stopwords")
        }));
    }

    #[test]
    fn density_two_percent_lands_in_above_optimal_tier() {
        // 100 words, keyword twice: density 2.0%, between optimal 1.5 and max 3.0.
        let content = hundred_words_with("coffee", 2);
        let result = analyze(&content, "coffee", "no match", &config());
        assert_eq!(result.metrics["density"], 2.0);
        assert!(result
            .issues
            .iter()
            .any(|issue| issue.message.contains("slightly high")));
    }

    #[test]
    fn keyword_not_found_is_high_impact_error() {
        let content = hundred_words_with("tea", 2);
        let result = analyze(&content, "coffee", "", &config());
        assert!(result.issues.iter().any(|issue| {
            issue.kind == IssueKind::Error
                && issue.impact == Impact::High
                && issue.message.contains("not found in content")
        }));
    }

    #[test]
    fn consecutive_repetition_flags_stuffing_and_demotes_full_credit() {
        // 50 words; keyword 5 consecutive times: 10% density and a run of 5.
        let mut words: Vec<String> = (0..45).map(|i| format!("filler{i}")).collect();
        for _ in 0..5 {
            words.insert(10, "coffee".to_string());
        }
        let content = words.join(" ");
        let result = analyze(&content, "coffee", "", &config());
        assert_eq!(result.metrics["keyword_stuffing"], true);
        assert!(result.issues.iter().any(|issue| {
            issue.impact == Impact::High && issue.message.contains("stuffing")
        }));
        assert!(!result
            .improvements
            .iter()
            .any(|imp| imp.contains("Optimal keyword density")));
    }

    #[test]
    fn placement_bonuses_reward_title_and_first_paragraph() {
        let content = "<h1>Best coffee guide</h1><p>Great coffee starts here with more words to say.</p><p>Closing thoughts about coffee brewing for everyone today.</p>";
        let result = analyze(content, "coffee", "Coffee brewing", &config());
        assert!(result.improvements.iter().any(|imp| imp.contains("in title")));
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("H1 heading")));
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("first paragraph")));
        let placement = &result.metrics["placement"];
        assert_eq!(placement["in_last_paragraph"], true);
    }

    #[test]
    fn variations_earn_flat_bonus() {
        let content = hundred_words_with("brewing", 0) + " brew brews brewed";
        let result = analyze(&content, "brew", "", &config());
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("variations found")));
    }

    #[test]
    fn variation_generation_respects_silent_e() {
        let variations = keyword_variations("bake");
        assert!(variations.contains(&"baking".to_string()));
        assert!(variations.contains(&"baked".to_string()));
        assert!(variations.contains(&"bakes".to_string()));
    }

    #[test]
    fn synonym_substitution_expands_modifiers() {
        let variations = keyword_variations("good coffee");
        assert!(variations.contains(&"great coffee".to_string()));
        assert!(variations.contains(&"best coffee".to_string()));
    }

    #[test]
    fn topic_map_matches_on_substring() {
        let terms = semantic_terms("seo tips");
        assert!(terms.iter().any(|term| term == "organic traffic"));
    }

    #[test]
    fn score_is_always_clamped() {
        let content = format!(
            "<h1>coffee</h1><p>{}</p><img src=\"a.png\" alt=\"coffee beans\">",
            hundred_words_with("coffee", 1)
        );
        let result = analyze(&content, "coffee", "coffee", &config());
        assert!((0.0..=100.0).contains(&result.score));
    }
}
