use crate::error::ScoreError;
use serde::Deserialize;

/// Scoring configuration: category weights plus per-metric thresholds.
///
/// A value object: the orchestrator borrows one instance for the whole
/// analysis pass and callers replace it atomically, never field by field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: CategoryWeights,
    #[serde(default)]
    pub content: ContentThresholds,
    #[serde(default)]
    pub keywords: KeywordThresholds,
    #[serde(default)]
    pub readability: ReadabilityThresholds,
}

/// Per-category weights. They do not need to sum to 100: aggregation
/// normalizes by the total weight that is actually present, and a category
/// with weight 0 is excluded from the weighted average entirely.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryWeights {
    #[serde(default = "default_title_weight")]
    pub title: f64,
    #[serde(default = "default_content_weight")]
    pub content: f64,
    #[serde(default = "default_meta_weight")]
    pub meta_description: f64,
    #[serde(default = "default_keyword_weight")]
    pub keywords: f64,
    #[serde(default = "default_readability_weight")]
    pub readability: f64,
    #[serde(default = "default_technical_weight")]
    pub technical: f64,
}

fn default_title_weight() -> f64 {
    20.0
}
fn default_content_weight() -> f64 {
    25.0
}
fn default_meta_weight() -> f64 {
    15.0
}
fn default_keyword_weight() -> f64 {
    20.0
}
fn default_readability_weight() -> f64 {
    10.0
}
fn default_technical_weight() -> f64 {
    10.0
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            content: default_content_weight(),
            meta_description: default_meta_weight(),
            keywords: default_keyword_weight(),
            readability: default_readability_weight(),
            technical: default_technical_weight(),
        }
    }
}

impl CategoryWeights {
    /// Weight per category name, in the fixed category order used by the
    /// orchestrator and the reports.
    pub fn pairs(&self) -> [(&'static str, f64); 6] {
        [
            ("title", self.title),
            ("content", self.content),
            ("meta_description", self.meta_description),
            ("keywords", self.keywords),
            ("readability", self.readability),
            ("technical", self.technical),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContentThresholds {
    #[serde(default = "default_min_word_count")]
    pub min_word_count: usize,
    #[serde(default = "default_optimal_word_count")]
    pub optimal_word_count: usize,
    #[serde(default = "default_max_word_count")]
    pub max_word_count: usize,
    #[serde(default = "default_min_title_length")]
    pub min_title_length: usize,
    #[serde(default = "default_optimal_title_length")]
    pub optimal_title_length: usize,
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
    #[serde(default = "default_min_meta_description")]
    pub min_meta_description: usize,
    #[serde(default = "default_optimal_meta_description")]
    pub optimal_meta_description: usize,
    #[serde(default = "default_max_meta_description")]
    pub max_meta_description: usize,
    #[serde(default = "default_power_word_density")]
    pub power_word_density: f64,
    #[serde(default = "default_min_cta_count")]
    pub min_cta_count: usize,
}

fn default_min_word_count() -> usize {
    300
}
fn default_optimal_word_count() -> usize {
    1000
}
fn default_max_word_count() -> usize {
    3000
}
fn default_min_title_length() -> usize {
    30
}
fn default_optimal_title_length() -> usize {
    60
}
fn default_max_title_length() -> usize {
    70
}
fn default_min_meta_description() -> usize {
    120
}
fn default_optimal_meta_description() -> usize {
    160
}
fn default_max_meta_description() -> usize {
    170
}
fn default_power_word_density() -> f64 {
    1.0
}
fn default_min_cta_count() -> usize {
    1
}

impl Default for ContentThresholds {
    fn default() -> Self {
        Self {
            min_word_count: default_min_word_count(),
            optimal_word_count: default_optimal_word_count(),
            max_word_count: default_max_word_count(),
            min_title_length: default_min_title_length(),
            optimal_title_length: default_optimal_title_length(),
            max_title_length: default_max_title_length(),
            min_meta_description: default_min_meta_description(),
            optimal_meta_description: default_optimal_meta_description(),
            max_meta_description: default_max_meta_description(),
            power_word_density: default_power_word_density(),
            min_cta_count: default_min_cta_count(),
        }
    }
}

/// Keyword density bounds (percent of total words) and placement bonuses.
/// The bonus magnitudes are ordered: title > h1 > first paragraph > alt
/// text > subheadings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordThresholds {
    #[serde(default = "default_min_density")]
    pub min_density: f64,
    #[serde(default = "default_optimal_density")]
    pub optimal_density: f64,
    #[serde(default = "default_max_density")]
    pub max_density: f64,
    #[serde(default = "default_title_bonus")]
    pub title_bonus: f64,
    #[serde(default = "default_h1_bonus")]
    pub h1_bonus: f64,
    #[serde(default = "default_first_paragraph_bonus")]
    pub first_paragraph_bonus: f64,
    #[serde(default = "default_alt_text_bonus")]
    pub alt_text_bonus: f64,
    #[serde(default = "default_subheading_bonus")]
    pub subheading_bonus: f64,
}

fn default_min_density() -> f64 {
    0.5
}
fn default_optimal_density() -> f64 {
    1.5
}
fn default_max_density() -> f64 {
    3.0
}
fn default_title_bonus() -> f64 {
    15.0
}
fn default_h1_bonus() -> f64 {
    10.0
}
fn default_first_paragraph_bonus() -> f64 {
    8.0
}
fn default_alt_text_bonus() -> f64 {
    5.0
}
fn default_subheading_bonus() -> f64 {
    5.0
}

impl Default for KeywordThresholds {
    fn default() -> Self {
        Self {
            min_density: default_min_density(),
            optimal_density: default_optimal_density(),
            max_density: default_max_density(),
            title_bonus: default_title_bonus(),
            h1_bonus: default_h1_bonus(),
            first_paragraph_bonus: default_first_paragraph_bonus(),
            alt_text_bonus: default_alt_text_bonus(),
            subheading_bonus: default_subheading_bonus(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReadabilityThresholds {
    /// A sentence longer than this many words counts as "long".
    #[serde(default = "default_max_sentence_length")]
    pub max_sentence_length: usize,
    /// A paragraph longer than this many words counts as "long".
    #[serde(default = "default_max_paragraph_length")]
    pub max_paragraph_length: usize,
    /// Acceptable passive-sentence percentage.
    #[serde(default = "default_passive_voice_threshold")]
    pub passive_voice_threshold: f64,
    /// Target transition-word percentage relative to sentence count.
    #[serde(default = "default_transition_word_threshold")]
    pub transition_word_threshold: f64,
}

fn default_max_sentence_length() -> usize {
    20
}
fn default_max_paragraph_length() -> usize {
    150
}
fn default_passive_voice_threshold() -> f64 {
    10.0
}
fn default_transition_word_threshold() -> f64 {
    30.0
}

impl Default for ReadabilityThresholds {
    fn default() -> Self {
        Self {
            max_sentence_length: default_max_sentence_length(),
            max_paragraph_length: default_max_paragraph_length(),
            passive_voice_threshold: default_passive_voice_threshold(),
            transition_word_threshold: default_transition_word_threshold(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoreError> {
        for (name, weight) in self.weights.pairs() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoreError::ConfigInvalid(format!(
                    "weights.{name} must be a non-negative number (found {weight})"
                )));
            }
        }
        if self.weights.pairs().iter().all(|(_, weight)| *weight == 0.0) {
            return Err(ScoreError::ConfigInvalid(
                "at least one category weight must be greater than 0".to_string(),
            ));
        }

        if self.content.min_word_count > self.content.optimal_word_count
            || self.content.optimal_word_count > self.content.max_word_count
        {
            return Err(ScoreError::ConfigInvalid(
                "content word counts must satisfy min <= optimal <= max".to_string(),
            ));
        }
        if self.content.min_title_length > self.content.optimal_title_length
            || self.content.optimal_title_length > self.content.max_title_length
        {
            return Err(ScoreError::ConfigInvalid(
                "title lengths must satisfy min <= optimal <= max".to_string(),
            ));
        }
        if self.content.min_meta_description > self.content.optimal_meta_description
            || self.content.optimal_meta_description > self.content.max_meta_description
        {
            return Err(ScoreError::ConfigInvalid(
                "meta description lengths must satisfy min <= optimal <= max".to_string(),
            ));
        }
        if self.content.power_word_density <= 0.0 {
            return Err(ScoreError::ConfigInvalid(
                "content.power_word_density must be greater than 0".to_string(),
            ));
        }

        let kw = &self.keywords;
        if kw.min_density <= 0.0
            || kw.min_density > kw.optimal_density
            || kw.optimal_density > kw.max_density
        {
            return Err(ScoreError::ConfigInvalid(
                "keyword densities must satisfy 0 < min <= optimal <= max".to_string(),
            ));
        }
        for (name, bonus) in [
            ("title_bonus", kw.title_bonus),
            ("h1_bonus", kw.h1_bonus),
            ("first_paragraph_bonus", kw.first_paragraph_bonus),
            ("alt_text_bonus", kw.alt_text_bonus),
            ("subheading_bonus", kw.subheading_bonus),
        ] {
            if !bonus.is_finite() || bonus < 0.0 {
                return Err(ScoreError::ConfigInvalid(format!(
                    "keywords.{name} must be a non-negative number"
                )));
            }
        }

        if self.readability.max_sentence_length == 0 {
            return Err(ScoreError::ConfigInvalid(
                "readability.max_sentence_length must be greater than 0".to_string(),
            ));
        }
        if self.readability.max_paragraph_length == 0 {
            return Err(ScoreError::ConfigInvalid(
                "readability.max_paragraph_length must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.readability.passive_voice_threshold) {
            return Err(ScoreError::ConfigInvalid(
                "readability.passive_voice_threshold must be between 0 and 100".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.readability.transition_word_threshold) {
            return Err(ScoreError::ConfigInvalid(
                "readability.transition_word_threshold must be between 0 and 100".to_string(),
            ));
        }

        Ok(())
    }
}
