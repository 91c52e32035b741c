//! Deterministic content-quality scoring.
//!
//! One call analyzes one document: title, body markup, meta description,
//! and a focus keyword go in; a weighted 0..=100 score with per-category
//! issues, improvements, and suggestions comes out. Same input plus same
//! config gives the same result.
//!
//! ```no_run
//! use pagescore::{analyze, AnalysisRequest, ScoringConfig};
//!
//! let request = AnalysisRequest {
//!     title: "Rust Error Handling Guide".to_string(),
//!     content: "<p>Errors in rust are values...</p>".to_string(),
//!     focus_keyword: "rust".to_string(),
//!     ..AnalysisRequest::default()
//! };
//! let result = analyze(&request, &ScoringConfig::default());
//! println!("{}", result.overall_score);
//! ```

pub mod analyze;
pub mod config;
pub mod error;
pub mod oracle;
pub mod report;
pub mod text;
pub mod types;
pub mod vocab;

pub use analyze::{analyze, analyze_with_oracle};
pub use error::{Result, ScoreError};
pub use oracle::{NoOracle, UniquenessOracle};
pub use types::config::ScoringConfig;
pub use types::report::{AnalysisResult, CategoryResult, Impact, Issue, IssueKind, Suggestion};
pub use types::request::AnalysisRequest;
