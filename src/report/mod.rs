pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::types::report::AnalysisResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
