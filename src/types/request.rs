use serde::Deserialize;

/// One document to score. The orchestrator never mutates it; sanitized
/// copies of the fields are made before analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub title: String,
    /// Body text; may contain markup. Tags outside the allowed list are
    /// removed (not escaped) during validation.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub focus_keyword: String,
    /// When true, the title and meta description are checked against the
    /// injected uniqueness oracle.
    #[serde(default)]
    pub check_uniqueness: bool,
    /// Opaque identifier forwarded to uniqueness checks so a document is
    /// never compared against itself. Not interpreted by the core.
    #[serde(default)]
    pub post_id: Option<u64>,
}
