//! Injected uniqueness checks.
//!
//! The core never reaches into content storage itself. Callers that can
//! answer "is this title already published elsewhere?" implement the trait;
//! `None` means the answer is unknown (backend missing or failing) and the
//! sub-check is skipped without affecting the rest of the analysis.

/// External oracle consulted only when `AnalysisRequest.check_uniqueness`
/// is set. `excluding_id` is the opaque document id to ignore so a document
/// is never compared against itself.
pub trait UniquenessOracle {
    fn is_title_unique(&self, title: &str, excluding_id: Option<u64>) -> Option<bool>;
    fn is_meta_description_unique(&self, text: &str, excluding_id: Option<u64>) -> Option<bool>;
}

/// Oracle that always answers "unknown". Used by plain `analyze()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOracle;

impl UniquenessOracle for NoOracle {
    fn is_title_unique(&self, _title: &str, _excluding_id: Option<u64>) -> Option<bool> {
        None
    }

    fn is_meta_description_unique(&self, _text: &str, _excluding_id: Option<u64>) -> Option<bool> {
        None
    }
}
