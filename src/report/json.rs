use crate::types::report::AnalysisResult;

pub fn to_json(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ScoringConfig;
    use crate::types::request::AnalysisRequest;

    #[test]
    fn json_report_contains_overall_score_and_categories() {
        let request = AnalysisRequest {
            title: "A title about rust that is long enough to pass".to_string(),
            content: "<p>Rust content with a few words in it.</p>".to_string(),
            focus_keyword: "rust".to_string(),
            ..AnalysisRequest::default()
        };
        let result = crate::analyze(&request, &ScoringConfig::default());

        let rendered = to_json(&result).expect("json should serialize");
        assert!(rendered.contains("\"overall_score\""));
        assert!(rendered.contains("\"category_results\""));
        assert!(rendered.contains("\"readability\""));
        assert!(rendered.contains("\"suggestions\""));
    }

    #[test]
    fn issue_kind_serializes_as_type_field() {
        let request = AnalysisRequest {
            content: "<p>Too short.</p>".to_string(),
            focus_keyword: "absent".to_string(),
            ..AnalysisRequest::default()
        };
        let result = crate::analyze(&request, &ScoringConfig::default());

        let rendered = to_json(&result).expect("json should serialize");
        assert!(rendered.contains("\"type\": \"error\""));
    }
}
