//! Analysis orchestration: input sanitization, per-category dispatch, and
//! aggregation into a single weighted score.

pub mod content;
pub mod keywords;
pub mod meta;
pub mod readability;
pub mod technical;
pub mod title;

use crate::oracle::{NoOracle, UniquenessOracle};
use crate::text;
use crate::types::config::ScoringConfig;
use crate::types::report::{AnalysisResult, CategoryResult, Priority, Suggestion};
use crate::types::request::AnalysisRequest;
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Instant;

/// Runs every enabled category against the request and aggregates the
/// weighted overall score. Pure with respect to the request and config;
/// uniqueness checks are skipped entirely.
pub fn analyze(request: &AnalysisRequest, config: &ScoringConfig) -> AnalysisResult {
    analyze_with_oracle(request, config, &NoOracle)
}

/// Like [`analyze`], with an oracle answering title and meta-description
/// uniqueness. The oracle is only consulted when the request opts in.
pub fn analyze_with_oracle(
    request: &AnalysisRequest,
    config: &ScoringConfig,
    oracle: &dyn UniquenessOracle,
) -> AnalysisResult {
    let started = Instant::now();
    let oracle: &dyn UniquenessOracle = if request.check_uniqueness {
        oracle
    } else {
        &NoOracle
    };

    let title = sanitize_line(&request.title);
    let meta_description = sanitize_line(&request.meta_description);
    let focus_keyword = sanitize_line(&request.focus_keyword);
    let content = text::sanitize_markup(&request.content);

    let mut category_results: BTreeMap<String, CategoryResult> = BTreeMap::new();
    for (name, weight) in config.weights.pairs() {
        if weight == 0.0 {
            continue;
        }
        let result = match name {
            "title" => title::analyze(&title, &focus_keyword, request.post_id, config, oracle),
            "content" => content::analyze(&content, config),
            "meta_description" => {
                meta::analyze(&meta_description, &focus_keyword, request.post_id, config, oracle)
            }
            "keywords" => keywords::analyze(&content, &focus_keyword, &title, config),
            "readability" => readability::analyze(&content, config),
            "technical" => technical::analyze(&content, &title),
            _ => unreachable!("unknown category {name}"),
        };
        tracing::debug!(category = name, score = result.score, "category analyzed");
        category_results.insert(name.to_string(), result);
    }

    let overall_score = weighted_overall(&category_results, config);
    let mut suggestions = vec![overall_suggestion(overall_score)];
    suggestions.extend(issue_suggestions(&category_results));

    let technical_issues = technical::detect_technical_issues(&content);
    let performance_metrics = performance_metrics(
        &content,
        &title,
        &meta_description,
        started.elapsed().as_millis() as u64,
    );

    let mut result = AnalysisResult {
        overall_score,
        category_results,
        suggestions,
        technical_issues,
        performance_metrics,
        timestamp: Utc::now(),
    };
    result.sort_suggestions();
    tracing::debug!(overall = result.overall_score, "analysis complete");
    result
}

/// Markup-stripped, whitespace-collapsed single line. Applied to the title,
/// meta description, and focus keyword before any analyzer sees them.
fn sanitize_line(text: &str) -> String {
    text::strip_markup(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Weighted average over the categories that actually ran, normalized by
/// their combined weight. A category with weight 0 never contributes.
fn weighted_overall(results: &BTreeMap<String, CategoryResult>, config: &ScoringConfig) -> u32 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (name, weight) in config.weights.pairs() {
        if let Some(result) = results.get(name) {
            weighted_sum += result.score * weight;
            total_weight += weight;
        }
    }
    if total_weight == 0.0 {
        return 0;
    }
    (weighted_sum / total_weight).round() as u32
}

fn overall_suggestion(overall_score: u32) -> Suggestion {
    let (priority, message, action) = if overall_score < 40 {
        (
            Priority::High,
            "Your content needs significant SEO improvements",
            "Review all SEO elements systematically, starting with high-priority issues",
        )
    } else if overall_score < 75 {
        (
            Priority::Medium,
            "Good foundation with room to improve",
            "Work through the highlighted issues to lift the score",
        )
    } else {
        (
            Priority::Low,
            "Excellent optimization overall",
            "Keep content fresh and review periodically",
        )
    };
    Suggestion {
        priority,
        category: "overall".to_string(),
        message: message.to_string(),
        action: action.to_string(),
    }
}

fn issue_suggestions(results: &BTreeMap<String, CategoryResult>) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    for (category, result) in results {
        for issue in &result.issues {
            suggestions.push(Suggestion {
                priority: Priority::from(issue.impact),
                category: category.clone(),
                message: issue.message.clone(),
                action: issue.suggestion.clone(),
            });
        }
    }
    suggestions
}

fn performance_metrics(
    content: &str,
    title: &str,
    meta_description: &str,
    analysis_time_ms: u64,
) -> BTreeMap<String, Value> {
    let stripped = text::strip_markup(content);
    let mut metrics = BTreeMap::new();
    metrics.insert(
        "analysis_time_ms".to_string(),
        Value::from(analysis_time_ms),
    );
    metrics.insert(
        "content_length".to_string(),
        Value::from(stripped.chars().count() as u64),
    );
    metrics.insert(
        "word_count".to_string(),
        Value::from(text::word_count(content) as u64),
    );
    metrics.insert(
        "sentence_count".to_string(),
        Value::from(text::sentence_count(&stripped) as u64),
    );
    metrics.insert(
        "paragraph_count".to_string(),
        Value::from(text::paragraph_count(content) as u64),
    );
    metrics.insert(
        "heading_count".to_string(),
        Value::from(text::headings(content).len() as u64),
    );
    metrics.insert(
        "image_count".to_string(),
        Value::from(text::images(content).len() as u64),
    );
    metrics.insert(
        "link_count".to_string(),
        Value::from(text::links(content).len() as u64),
    );
    metrics.insert(
        "title_length".to_string(),
        Value::from(title.chars().count() as u64),
    );
    metrics.insert(
        "meta_description_length".to_string(),
        Value::from(meta_description.chars().count() as u64),
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::Priority;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            title: "Rust Error Handling Guide for Working Developers".to_string(),
            content: "<h1>Rust errors</h1><p>Rust programs report failures \
                      with results. However, some failures end the program. \
                      Therefore, handle rust errors early.</p>"
                .to_string(),
            meta_description: "How rust programs report and recover from failures."
                .to_string(),
            focus_keyword: "rust".to_string(),
            check_uniqueness: false,
            post_id: None,
        }
    }

    #[test]
    fn all_default_categories_run() {
        let result = analyze(&request(), &ScoringConfig::default());
        let names: Vec<&str> = result
            .category_results
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            names,
            [
                "content",
                "keywords",
                "meta_description",
                "readability",
                "technical",
                "title",
            ]
        );
        assert!(result.overall_score <= 100);
    }

    #[test]
    fn zero_weight_excludes_category_entirely() {
        let mut config = ScoringConfig::default();
        config.weights.readability = 0.0;
        let result = analyze(&request(), &config);
        assert!(!result.category_results.contains_key("readability"));
    }

    #[test]
    fn zero_weight_matches_removal() {
        let base = ScoringConfig::default();
        let mut zeroed = base.clone();
        zeroed.weights.technical = 0.0;
        let with = analyze(&request(), &zeroed);

        // Recompute over the remaining categories by hand.
        let full = analyze(&request(), &base);
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (name, weight) in base.weights.pairs() {
            if name == "technical" {
                continue;
            }
            weighted_sum += full.category_results[name].score * weight;
            total_weight += weight;
        }
        assert_eq!(with.overall_score, (weighted_sum / total_weight).round() as u32);
    }

    #[test]
    fn markup_in_title_is_stripped_before_scoring() {
        let mut req = request();
        req.title = "<strong>Rust Error Handling Guide for Working Developers</strong>"
            .to_string();
        let plain = analyze(&request(), &ScoringConfig::default());
        let marked = analyze(&req, &ScoringConfig::default());
        assert_eq!(
            plain.category_results["title"].score,
            marked.category_results["title"].score
        );
    }

    #[test]
    fn suggestions_lead_with_highest_priority() {
        let result = analyze(&request(), &ScoringConfig::default());
        assert!(!result.suggestions.is_empty());
        for pair in result.suggestions.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
        }
    }

    #[test]
    fn low_score_produces_high_priority_overall_suggestion() {
        let req = AnalysisRequest {
            content: "<p>Tiny.</p>".to_string(),
            ..AnalysisRequest::default()
        };
        let result = analyze(&req, &ScoringConfig::default());
        assert!(result.overall_score < 40);
        let overall = result
            .suggestions
            .iter()
            .find(|suggestion| suggestion.category == "overall")
            .expect("overall suggestion expected");
        assert_eq!(overall.priority, Priority::High);
    }

    #[test]
    fn performance_metrics_describe_the_input() {
        let result = analyze(&request(), &ScoringConfig::default());
        assert_eq!(result.performance_metrics["heading_count"], 1);
        assert_eq!(result.performance_metrics["image_count"], 0);
        assert!(result.performance_metrics["word_count"].as_u64().unwrap() > 10);
        assert_eq!(result.performance_metrics["title_length"], 48);
    }
}
