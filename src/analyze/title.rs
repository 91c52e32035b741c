//! Title scoring: length band, keyword presence and position, uniqueness,
//! plus small engagement bonuses.
//!
//! Raw credit tops out around 250, so the final score is scaled down into
//! the 0..=100 range rather than clamped.

use super::content::{power_words_found, sentiment_counts};
use crate::oracle::UniquenessOracle;
use crate::types::config::ScoringConfig;
use crate::types::report::{CategoryResult, Impact, Issue, IssueKind};

const SCALE: f64 = 2.5;

pub fn analyze(
    title: &str,
    focus_keyword: &str,
    post_id: Option<u64>,
    config: &ScoringConfig,
    oracle: &dyn UniquenessOracle,
) -> CategoryResult {
    let title = title.trim();
    if title.is_empty() {
        return CategoryResult::error_only(
            "No title specified",
            "Add a descriptive page title",
        );
    }

    let mut result = CategoryResult::new();
    let title_lower = title.to_lowercase();

    score_length(&mut result, title, config);
    score_keyword(&mut result, &title_lower, focus_keyword);
    score_uniqueness(&mut result, title, post_id, oracle);

    let power_count = power_words_found(&title_lower).len();
    if power_count > 0 {
        result.improvement("Title uses engaging power words");
        result.score += (5.0 * power_count as f64).min(15.0);
    }

    let (positive, negative) = sentiment_counts(&title_lower);
    if positive > negative {
        result.improvement("Title has a positive tone");
        result.score += 5.0;
    }

    result.score = (result.score / SCALE).min(100.0);
    result
}

fn score_length(result: &mut CategoryResult, title: &str, config: &ScoringConfig) {
    let length = title.chars().count();
    result.metric("title_length", length as u64);

    if length < config.content.min_title_length {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("Title is too short ({length} characters)"),
            Impact::Medium,
            format!(
                "Expand the title to at least {} characters",
                config.content.min_title_length
            ),
        ));
        result.score += 40.0;
    } else if length > config.content.max_title_length {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("Title is too long ({length} characters)"),
            Impact::Medium,
            format!(
                "Shorten the title to at most {} characters so it is not truncated",
                config.content.max_title_length
            ),
        ));
        result.score += 70.0;
    } else {
        result.improvement(format!("Good title length ({length} characters)"));
        result.score += 100.0;
    }
}

fn score_keyword(result: &mut CategoryResult, title_lower: &str, focus_keyword: &str) {
    let keyword = focus_keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return;
    }

    if let Some(position) = title_lower.find(&keyword) {
        result.improvement("Focus keyword found in title");
        result.score += 100.0;

        // Words before the match, counted on the lowered title so byte
        // offsets line up.
        let words_before = title_lower[..position].split_whitespace().count();
        if words_before < 5 {
            result.improvement("Keyword appears early in the title");
            result.score += 20.0;
        }
    } else {
        result.issues.push(Issue::new(
            IssueKind::Error,
            "Focus keyword not found in title",
            Impact::High,
            "Include the focus keyword in the page title",
        ));
    }
}

fn score_uniqueness(
    result: &mut CategoryResult,
    title: &str,
    post_id: Option<u64>,
    oracle: &dyn UniquenessOracle,
) {
    match oracle.is_title_unique(title, post_id) {
        Some(true) => {
            result.improvement("Title is unique across the site");
            result.score += 10.0;
        }
        Some(false) => {
            result.issues.push(Issue::new(
                IssueKind::Warning,
                "Title is already used by another page",
                Impact::Medium,
                "Differentiate this title from the existing page",
            ));
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NoOracle;
    use crate::types::report::{Impact, IssueKind};

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    struct FixedOracle(bool);

    impl UniquenessOracle for FixedOracle {
        fn is_title_unique(&self, _title: &str, _post_id: Option<u64>) -> Option<bool> {
            Some(self.0)
        }

        fn is_meta_description_unique(
            &self,
            _description: &str,
            _post_id: Option<u64>,
        ) -> Option<bool> {
            Some(self.0)
        }
    }

    #[test]
    fn empty_title_yields_single_high_error() {
        let result = analyze("", "rust", None, &config(), &NoOracle);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Error);
    }

    #[test]
    fn good_length_with_early_keyword_scores_high() {
        let title = "Rust Error Handling Guide for Working Developers";
        let result = analyze(title, "rust", None, &config(), &NoOracle);
        // 100 length + 100 keyword + 20 early, scaled by 2.5.
        assert_eq!(result.score, 88.0);
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("early in the title")));
    }

    #[test]
    fn late_keyword_skips_position_bonus() {
        let title = "A Complete Working Guide to Modern Systems Programming in Rust";
        let result = analyze(title, "rust", None, &config(), &NoOracle);
        assert!(!result
            .improvements
            .iter()
            .any(|imp| imp.contains("early in the title")));
    }

    #[test]
    fn missing_keyword_is_high_impact_error() {
        let title = "A Guide to Something Else Entirely, Unrelated";
        let result = analyze(title, "rust", None, &config(), &NoOracle);
        let error = result
            .issues
            .iter()
            .find(|issue| issue.kind == IssueKind::Error)
            .expect("keyword error expected");
        assert_eq!(error.impact, Impact::High);
    }

    #[test]
    fn short_title_warns_medium() {
        let result = analyze("Tiny rust title", "rust", None, &config(), &NoOracle);
        assert!(result.issues.iter().any(|issue| {
            issue.impact == Impact::Medium && issue.message.contains("too short")
        }));
    }

    #[test]
    fn duplicate_title_warns_without_failing() {
        let title = "Rust Error Handling Guide for Working Developers";
        let result = analyze(title, "rust", None, &config(), &FixedOracle(false));
        assert!(result
            .issues
            .iter()
            .any(|issue| issue.message.contains("already used")));
    }

    #[test]
    fn unique_title_earns_bonus_over_no_oracle() {
        let title = "Rust Error Handling Guide for Working Developers";
        let base = analyze(title, "rust", None, &config(), &NoOracle);
        let unique = analyze(title, "rust", None, &config(), &FixedOracle(true));
        assert!(unique.score > base.score);
    }

    #[test]
    fn score_never_exceeds_one_hundred() {
        let title = "Ultimate Proven Rust Guide: Amazing Essential Secrets Revealed Now";
        let result = analyze(title, "rust", None, &config(), &FixedOracle(true));
        assert!(result.score <= 100.0);
    }
}
