//! Content-engagement quality: length, power words, CTA, sentiment,
//! lists, media, links, freshness.

use crate::text;
use crate::types::config::ScoringConfig;
use crate::types::report::{CategoryResult, Impact, Issue, IssueKind};
use crate::vocab::{CTA_PHRASES, FRESHNESS_PHRASES, NEGATIVE_WORDS, POSITIVE_WORDS, POWER_WORDS};
use chrono::{Datelike, Utc};
use serde_json::json;

pub fn analyze(content: &str, config: &ScoringConfig) -> CategoryResult {
    analyze_at_year(content, config, Utc::now().year())
}

/// Year-injectable variant so freshness scoring stays testable.
pub fn analyze_at_year(content: &str, config: &ScoringConfig, current_year: i32) -> CategoryResult {
    if content.trim().is_empty() {
        return CategoryResult::error_only(
            "No content to analyze",
            "Add content to perform quality analysis",
        );
    }

    let mut result = CategoryResult::new();
    let clean = text::clean_text(content);
    let clean_lower = clean.to_lowercase();
    let word_count = clean.split_whitespace().count();

    score_length(&mut result, word_count, config);
    score_power_words(&mut result, &clean_lower, word_count, config);
    score_cta(&mut result, content, config);
    score_sentiment(&mut result, &clean_lower);
    score_lists(&mut result, content, word_count);
    score_media(&mut result, content, word_count);
    score_links(&mut result, content, word_count);
    score_freshness(&mut result, &clean_lower, current_year);

    result.clamp_score();
    result
}

fn score_length(result: &mut CategoryResult, word_count: usize, config: &ScoringConfig) {
    result.metric("word_count", word_count as u64);
    let min = config.content.min_word_count;
    let optimal = config.content.optimal_word_count;

    if word_count < min {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("Content is too short ({word_count} words)"),
            Impact::High,
            format!("Consider expanding content to at least {min} words"),
        ));
        result.score += (word_count as f64 / min as f64 * 50.0).max(10.0);
    } else if word_count < optimal {
        result.improvement(format!("Good content length ({word_count} words)"));
        let progress = (word_count - min) as f64 / (optimal - min) as f64;
        result.score += 70.0 + progress * 20.0;
    } else {
        result.improvement(format!("Excellent content length ({word_count} words)"));
        result.score += 90.0;
    }
}

/// Distinct power words present in the text. Presence, not occurrences.
pub(crate) fn power_words_found(text_lower: &str) -> Vec<&'static str> {
    POWER_WORDS
        .iter()
        .copied()
        .filter(|word| text_lower.contains(word))
        .collect()
}

fn score_power_words(
    result: &mut CategoryResult,
    clean_lower: &str,
    word_count: usize,
    config: &ScoringConfig,
) {
    let found = power_words_found(clean_lower);
    let density = if word_count > 0 {
        found.len() as f64 / word_count as f64 * 100.0
    } else {
        0.0
    };
    result.metric(
        "power_words",
        json!({
            "count": found.len(),
            "density": round2(density),
            "words": found,
        }),
    );

    let target = config.content.power_word_density;
    if density >= target {
        result.improvement("Good use of power words for engagement");
        result.score += 20.0;
    } else if density >= target * 0.5 {
        result.improvement("Decent use of power words");
        result.score += 15.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "Limited use of power words",
            Impact::Low,
            "Add more engaging power words to improve content appeal",
        ));
        result.score += 10.0;
    }
}

/// Any CTA phrase present at all. Used for the meta-description check too.
pub(crate) fn has_call_to_action(text: &str) -> bool {
    let lower = text.to_lowercase();
    CTA_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

fn score_cta(result: &mut CategoryResult, content: &str, config: &ScoringConfig) {
    let lower = content.to_lowercase();
    let phrases: Vec<&'static str> = CTA_PHRASES
        .iter()
        .copied()
        .filter(|phrase| lower.contains(phrase))
        .collect();
    let button_count = lower.matches("<button").count() + lower.matches("class=\"button\"").count();
    let total = phrases.len() + button_count;

    result.metric(
        "cta",
        json!({
            "phrase_count": phrases.len(),
            "button_count": button_count,
            "total": total,
            "phrases": phrases,
        }),
    );

    if total >= config.content.min_cta_count {
        result.improvement("Good call-to-action presence");
        result.score += 15.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "No clear call-to-action found",
            Impact::Medium,
            "Add clear calls-to-action to guide user behavior",
        ));
        result.score += 5.0;
    }
}

pub(crate) fn sentiment_counts(text_lower: &str) -> (usize, usize) {
    let positive = POSITIVE_WORDS
        .iter()
        .filter(|word| text_lower.contains(*word))
        .count();
    let negative = NEGATIVE_WORDS
        .iter()
        .filter(|word| text_lower.contains(*word))
        .count();
    (positive, negative)
}

fn sentiment_label(ratio: f64) -> &'static str {
    if ratio >= 0.8 {
        "Very Positive"
    } else if ratio >= 0.6 {
        "Positive"
    } else if ratio >= 0.4 {
        "Neutral"
    } else if ratio >= 0.2 {
        "Negative"
    } else {
        "Very Negative"
    }
}

fn score_sentiment(result: &mut CategoryResult, clean_lower: &str) {
    let (positive, negative) = sentiment_counts(clean_lower);
    let total = positive + negative;
    // Neutral when no sentiment words are found at all.
    let ratio = if total > 0 {
        positive as f64 / total as f64
    } else {
        0.5
    };

    result.metric(
        "sentiment",
        json!({
            "positive_count": positive,
            "negative_count": negative,
            "ratio": round2(ratio),
            "tone": sentiment_label(ratio),
        }),
    );

    if ratio >= 0.7 {
        result.improvement("Positive and engaging tone");
        result.score += 15.0;
    } else if ratio >= 0.5 {
        result.improvement("Balanced tone");
        result.score += 12.0;
    } else if ratio >= 0.3 {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "Tone could be more positive",
            Impact::Low,
            "Consider using more positive language",
        ));
        result.score += 8.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Tone appears negative",
            Impact::Medium,
            "Rewrite content with more positive language",
        ));
        result.score += 5.0;
    }
}

fn score_lists(result: &mut CategoryResult, content: &str, word_count: usize) {
    let lower = content.to_ascii_lowercase();
    let unordered = lower.matches("<ul").count();
    let ordered = lower.matches("<ol").count();
    let items = lower.matches("<li").count();
    let total = unordered + ordered;

    result.metric(
        "lists",
        json!({
            "unordered": unordered,
            "ordered": ordered,
            "total_lists": total,
            "list_items": items,
        }),
    );

    // One list per 500 words keeps long content scannable.
    let recommended = word_count / 500;
    if total >= recommended && total > 0 {
        result.improvement("Good use of lists for scannable content");
        result.score += 10.0;
    } else if total > 0 {
        result.improvement("Some use of lists");
        result.score += 7.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "No lists found",
            Impact::Low,
            "Add bullet points or numbered lists to improve scannability",
        ));
        result.score += 3.0;
    }
}

fn score_media(result: &mut CategoryResult, content: &str, word_count: usize) {
    let lower = content.to_ascii_lowercase();
    let images = text::images(content);
    let image_count = images.len();
    let missing_alt = images.iter().filter(|image| image.alt.is_none()).count();
    let video_count = lower.matches("<video").count()
        + lower.matches("youtube.com").count()
        + lower.matches("vimeo.com").count();
    let alt_coverage = if image_count > 0 {
        round1((image_count - missing_alt) as f64 / image_count as f64 * 100.0)
    } else {
        100.0
    };

    result.metric(
        "media",
        json!({
            "images": image_count,
            "videos": video_count,
            "missing_alt": missing_alt,
            "alt_coverage": alt_coverage,
        }),
    );

    let recommended = (word_count / 300).max(1);
    if image_count >= recommended {
        result.improvement("Good use of images to break up text");
        result.score += 10.0;
    } else if image_count > 0 {
        result.improvement("Some visual content present");
        result.score += 7.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "No images found",
            Impact::Medium,
            "Add relevant images to make content more engaging",
        ));
        result.score += 3.0;
    }

    // Missing alt text is always a medium warning, regardless of coverage.
    if missing_alt > 0 {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("{missing_alt} images missing alt text"),
            Impact::Medium,
            "Add descriptive alt text to all images for accessibility and SEO",
        ));
    } else if image_count > 0 {
        result.improvement("All images have alt text");
        result.score += 5.0;
    }
}

fn score_links(result: &mut CategoryResult, content: &str, word_count: usize) {
    let hrefs = text::links(content);
    // A scheme+host marks a link as external; everything else is internal.
    let external = hrefs
        .iter()
        .filter(|href| href.starts_with("http://") || href.starts_with("https://"))
        .count();
    let internal = hrefs.len() - external;
    let density = if word_count > 0 {
        hrefs.len() as f64 / word_count as f64 * 100.0
    } else {
        0.0
    };

    result.metric(
        "links",
        json!({
            "internal": internal,
            "external": external,
            "total": hrefs.len(),
        }),
    );
    result.metric("link_density", round2(density));

    if internal > 0 {
        result.improvement("Good internal linking structure");
        result.score += 8.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "No internal links found",
            Impact::Low,
            "Add internal links to related content",
        ));
        result.score += 3.0;
    }

    if external > 0 && external <= 5 {
        result.improvement("Appropriate external link usage");
        result.score += 5.0;
    } else if external > 5 {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "High number of external links",
            Impact::Low,
            "Consider reducing external links to keep users on your site",
        ));
        result.score += 3.0;
    }
}

fn score_freshness(result: &mut CategoryResult, clean_lower: &str, current_year: i32) {
    let has_current_year = clean_lower.contains(&current_year.to_string());
    let indicators = FRESHNESS_PHRASES
        .iter()
        .filter(|phrase| clean_lower.contains(*phrase))
        .count();

    result.metric(
        "freshness",
        json!({
            "current_year_mentioned": has_current_year,
            "freshness_indicators": indicators,
            "appears_current": has_current_year || indicators >= 3,
        }),
    );

    if has_current_year && indicators >= 3 {
        result.improvement("Content appears current and fresh");
        result.score += 10.0;
    } else if has_current_year || indicators >= 2 {
        result.improvement("Content has some freshness indicators");
        result.score += 7.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Suggestion,
            "Content may appear outdated",
            Impact::Low,
            "Add current dates or update language to appear more current",
        ));
        result.score += 3.0;
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
