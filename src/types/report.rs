use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Suggestion,
}

/// Severity of an issue. Variant order is the sort order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A single finding inside a category. Impact is fixed per rule, never
/// chosen freely: each threshold comparison documents the impact it emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub impact: Impact,
    pub suggestion: String,
}

impl Issue {
    pub fn new(
        kind: IssueKind,
        message: impl Into<String>,
        impact: Impact,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            impact,
            suggestion: suggestion.into(),
        }
    }
}

/// Per-category output before weighted aggregation. Produced fresh by each
/// analyzer per call and never mutated after being returned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryResult {
    pub score: Score,
    pub issues: Vec<Issue>,
    pub improvements: Vec<String>,
    pub metrics: BTreeMap<String, Value>,
}

impl CategoryResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result for an input that cannot be analyzed at all: score 0 and
    /// exactly one high-impact error. The orchestrator never throws for
    /// this; it is an analysis outcome, not a failure.
    pub fn error_only(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        let mut result = Self::new();
        result
            .issues
            .push(Issue::new(IssueKind::Error, message, Impact::High, suggestion));
        result
    }

    pub fn improvement(&mut self, message: impl Into<String>) {
        self.improvements.push(message.into());
    }

    pub fn metric(&mut self, key: &str, value: impl Into<Value>) {
        self.metrics.insert(key.to_string(), value.into());
    }

    /// Clamp the accumulated score into [0, 100]. Every analyzer calls this
    /// before returning.
    pub fn clamp_score(&mut self) {
        self.score = self.score.clamp(0.0, 100.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl From<Impact> for Priority {
    fn from(impact: Impact) -> Self {
        match impact {
            Impact::High => Priority::High,
            Impact::Medium => Priority::Medium,
            Impact::Low => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub priority: Priority,
    pub category: String,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalIssueKind {
    BrokenLink,
    LargeImage,
}

/// Pattern-level technical problem reported outside the category scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalIssue {
    pub kind: TechnicalIssueKind,
    pub severity: Impact,
    pub message: String,
    pub detail: String,
}

/// Complete output of one `analyze()` call. Has no identity beyond the call
/// that produced it: no caching, no versioning.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub category_results: BTreeMap<String, CategoryResult>,
    pub suggestions: Vec<Suggestion>,
    pub technical_issues: Vec<TechnicalIssue>,
    pub performance_metrics: BTreeMap<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Stable sort, so suggestions with equal priority keep category order.
    pub fn sort_suggestions(&mut self) {
        self.suggestions.sort_by_key(|suggestion| suggestion.priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_orders_high_before_low() {
        assert!(Impact::High < Impact::Medium);
        assert!(Impact::Medium < Impact::Low);
    }

    #[test]
    fn error_only_result_has_single_high_error() {
        let result = CategoryResult::error_only("No content to analyze", "Add content");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Error);
        assert_eq!(result.issues[0].impact, Impact::High);
    }

    #[test]
    fn issue_serializes_kind_as_type() {
        let issue = Issue::new(IssueKind::Warning, "m", Impact::Low, "s");
        let json = serde_json::to_value(&issue).expect("issue should serialize");
        assert_eq!(json["type"], "warning");
        assert_eq!(json["impact"], "low");
    }

    #[test]
    fn clamp_score_bounds_both_ends() {
        let mut result = CategoryResult::new();
        result.score = 180.0;
        result.clamp_score();
        assert_eq!(result.score, 100.0);
        result.score = -5.0;
        result.clamp_score();
        assert_eq!(result.score, 0.0);
    }
}
