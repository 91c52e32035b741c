use crate::types::report::{AnalysisResult, IssueKind};

pub fn to_markdown(result: &AnalysisResult) -> String {
    let mut output = String::new();
    output.push_str("# Content Score Report\n\n");
    output.push_str(&format!("Overall score: {}/100\n\n", result.overall_score));

    output.push_str("## Category Scores\n\n");
    for (name, category) in &result.category_results {
        output.push_str(&format!("- {}: {:.1}\n", name, category.score));
    }
    output.push('\n');

    output.push_str("## Issues\n\n");
    let mut any_issue = false;
    for (name, category) in &result.category_results {
        for issue in &category.issues {
            any_issue = true;
            output.push_str(&format!(
                "- [{}/{:?}] {}: {}\n",
                kind_label(issue.kind),
                issue.impact,
                name,
                issue.message
            ));
        }
    }
    if !any_issue {
        output.push_str("- none\n");
    }
    output.push('\n');

    output.push_str("## Suggestions\n\n");
    if result.suggestions.is_empty() {
        output.push_str("- none\n");
    } else {
        for suggestion in &result.suggestions {
            output.push_str(&format!(
                "- [{:?}] {} ({}): {}\n",
                suggestion.priority, suggestion.message, suggestion.category, suggestion.action
            ));
        }
    }
    output.push('\n');

    output.push_str("## Technical Issues\n\n");
    if result.technical_issues.is_empty() {
        output.push_str("- none\n");
    } else {
        for issue in &result.technical_issues {
            output.push_str(&format!("- [{:?}] {}\n", issue.severity, issue.message));
        }
    }

    output
}

fn kind_label(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::Error => "error",
        IssueKind::Warning => "warning",
        IssueKind::Suggestion => "suggestion",
    }
}
