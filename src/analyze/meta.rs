//! Meta-description scoring: length band, keyword presence, call-to-action,
//! uniqueness. Raw credit is scaled into 0..=100 like the title score.

use super::content::has_call_to_action;
use crate::oracle::UniquenessOracle;
use crate::types::config::ScoringConfig;
use crate::types::report::{CategoryResult, Impact, Issue, IssueKind};

const SCALE: f64 = 1.75;

pub fn analyze(
    description: &str,
    focus_keyword: &str,
    post_id: Option<u64>,
    config: &ScoringConfig,
    oracle: &dyn UniquenessOracle,
) -> CategoryResult {
    let description = description.trim();
    let mut result = CategoryResult::new();

    // An empty description is a warning, not a blocker: search engines fall
    // back to a generated snippet.
    if description.is_empty() {
        result.metric("meta_description_length", 0u64);
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "No meta description specified",
            Impact::Medium,
            "Write a meta description so search engines do not generate one",
        ));
        return result;
    }

    score_length(&mut result, description, config);
    score_keyword(&mut result, description, focus_keyword);

    if has_call_to_action(description) {
        result.improvement("Meta description contains a call-to-action");
        result.score += 15.0;
    }

    score_uniqueness(&mut result, description, post_id, oracle);

    result.score = (result.score / SCALE).min(100.0);
    result
}

fn score_length(result: &mut CategoryResult, description: &str, config: &ScoringConfig) {
    let length = description.chars().count();
    result.metric("meta_description_length", length as u64);

    if length < config.content.min_meta_description {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("Meta description is too short ({length} characters)"),
            Impact::Low,
            format!(
                "Expand the description to at least {} characters",
                config.content.min_meta_description
            ),
        ));
        result.score += 60.0;
    } else if length > config.content.max_meta_description {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("Meta description is too long ({length} characters)"),
            Impact::Low,
            format!(
                "Shorten the description to at most {} characters to avoid truncation",
                config.content.max_meta_description
            ),
        ));
        result.score += 80.0;
    } else {
        result.improvement(format!("Good meta description length ({length} characters)"));
        result.score += 100.0;
    }
}

fn score_keyword(result: &mut CategoryResult, description: &str, focus_keyword: &str) {
    let keyword = focus_keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return;
    }

    if description.to_lowercase().contains(&keyword) {
        result.improvement("Focus keyword found in meta description");
        result.score += 50.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "Focus keyword not found in meta description",
            Impact::Medium,
            "Include the focus keyword in the meta description",
        ));
    }
}

fn score_uniqueness(
    result: &mut CategoryResult,
    description: &str,
    post_id: Option<u64>,
    oracle: &dyn UniquenessOracle,
) {
    match oracle.is_meta_description_unique(description, post_id) {
        Some(true) => {
            result.improvement("Meta description is unique across the site");
            result.score += 10.0;
        }
        Some(false) => {
            result.issues.push(Issue::new(
                IssueKind::Warning,
                "Meta description is already used by another page",
                Impact::Medium,
                "Write a distinct description for this page",
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

    fn good_description() -> String {
        let base = "Learn how rust programs report and recover from failures, \
                    with worked examples covering propagation, context, and \
                    retries in production services.";
        assert!(base.chars().count() >= 120 && base.chars().count() <= 170);
        base.to_string()
    }

    #[test]
    fn empty_description_is_medium_warning_not_error() {
        let result = analyze("", "rust", None, &config(), &NoOracle);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Warning);
        assert_eq!(result.issues[0].impact, Impact::Medium);
    }

    #[test]
    fn good_length_with_keyword_scores_high() {
        let result = analyze(&good_description(), "rust", None, &config(), &NoOracle);
        // 100 length + 50 keyword, scaled by 1.75.
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("Good meta description length")));
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("keyword found")));
        assert!(result.score > 80.0);
    }

    #[test]
    fn short_description_warns_low() {
        let result = analyze("Too short to be useful.", "rust", None, &config(), &NoOracle);
        assert!(result.issues.iter().any(|issue| {
            issue.impact == Impact::Low && issue.message.contains("too short")
        }));
    }

    #[test]
    fn missing_keyword_warns_medium() {
        let description = "A description of reasonable length that talks about \
                           something else entirely, never naming the focus term \
                           the page is optimized around here.";
        let result = analyze(description, "rust", None, &config(), &NoOracle);
        assert!(result.issues.iter().any(|issue| {
            issue.impact == Impact::Medium && issue.message.contains("not found")
        }));
    }

    #[test]
    fn cta_earns_bonus() {
        let with_cta = format!("{} Learn more inside.", good_description());
        let with = analyze(&with_cta, "rust", None, &config(), &NoOracle);
        assert!(with
            .improvements
            .iter()
            .any(|imp| imp.contains("call-to-action")));
    }

    #[test]
    fn score_never_exceeds_one_hundred() {
        let description = format!("{} Learn more and sign up today.", good_description());
        let result = analyze(&description, "rust", None, &config(), &NoOracle);
        assert!(result.score <= 100.0);
    }
}
