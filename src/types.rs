//! Core types for lexsense
//!
//! This module defines the records shared by the summarizer and the
//! research jobs: lexical entries, text units, granularity and the
//! summarization configuration.

use crate::errors::{LexSenseError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sparse feature vector: feature name -> weight
pub type FeatureVector = FxHashMap<String, f64>;

/// Lemma -> occurrence count within a text unit
pub type TokenCounts = FxHashMap<String, u32>;

// ============================================================================
// Lexical Entry
// ============================================================================

/// One sense of a lemma in a feature-vector lexical resource
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalEntry {
    /// Sense (synset) identifier, e.g. `bn:00000010n`
    pub synset_id: String,
    /// Lowercased lemma
    pub lemma: String,
    /// Weighted features of this sense
    pub features: FeatureVector,
}

impl LexicalEntry {
    /// Create a new entry; the lemma is lowercased
    pub fn new(synset_id: impl Into<String>, lemma: &str, features: FeatureVector) -> Self {
        Self {
            synset_id: synset_id.into(),
            lemma: lemma.to_lowercase(),
            features,
        }
    }
}

// ============================================================================
// Text Unit
// ============================================================================

/// A paragraph or sentence of a document
#[derive(Debug, Clone, PartialEq)]
pub struct TextUnit {
    /// Position in the document (0 is the title)
    pub index: usize,
    /// The unit text as it appears in the rendered summary
    pub text: String,
    /// Lemma occurrence counts after normalization
    pub tokens: TokenCounts,
    /// Total cohesion, set by the ranking stage
    pub cohesion: Option<f64>,
}

impl TextUnit {
    /// Create a new unit with no cohesion assigned
    pub fn new(index: usize, text: impl Into<String>, tokens: TokenCounts) -> Self {
        Self {
            index,
            text: text.into(),
            tokens,
            cohesion: None,
        }
    }

    /// Whether this is the title unit
    pub fn is_title(&self) -> bool {
        self.index == 0
    }
}

// ============================================================================
// Granularity
// ============================================================================

/// Level at which a document is split into units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Blank-line delimited paragraphs
    #[default]
    Paragraph,
    /// Sentences
    Sentence,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Paragraph => f.write_str("paragraph"),
            Granularity::Sentence => f.write_str("sentence"),
        }
    }
}

impl FromStr for Granularity {
    type Err = LexSenseError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "paragraph" | "paragraphs" | "p" => Ok(Granularity::Paragraph),
            "sentence" | "sentences" | "s" => Ok(Granularity::Sentence),
            other => Err(LexSenseError::invalid_config(format!(
                "unknown granularity '{other}', expected 'paragraph' or 'sentence'"
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Fraction of units to keep, in (0, 1]
    #[serde(default = "default_percentage")]
    pub percentage: f64,
    /// Unit granularity
    #[serde(default)]
    pub granularity: Granularity,
    /// Language code for stopwords (e.g. "en", "it")
    #[serde(default = "default_language")]
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_percentage() -> f64 {
    0.7
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            percentage: default_percentage(),
            granularity: Granularity::Paragraph,
            language: default_language(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SummaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.percentage > 0.0 && self.percentage <= 1.0) {
            return Err(LexSenseError::invalid_config(format!(
                "percentage must be in (0, 1], got {}",
                self.percentage
            )));
        }
        Ok(())
    }

    /// Builder method: set the kept fraction
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Builder method: set the granularity
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Builder method: set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Number of units kept out of `num_units` (truncating, never rounding)
    pub fn units_to_keep(&self, num_units: usize) -> usize {
        ((num_units as f64 * self.percentage) as usize).min(num_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SummaryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.granularity, Granularity::Paragraph);
        assert!((config.percentage - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(SummaryConfig::new().with_percentage(0.0).validate().is_err());
        assert!(SummaryConfig::new().with_percentage(1.2).validate().is_err());
        assert!(SummaryConfig::new().with_percentage(f64::NAN).validate().is_err());
        assert!(SummaryConfig::new().with_percentage(1.0).validate().is_ok());
    }

    #[test]
    fn test_units_to_keep_truncates() {
        let config = SummaryConfig::new().with_percentage(0.34);
        assert_eq!(config.units_to_keep(3), 1);

        let config = SummaryConfig::new().with_percentage(0.67);
        assert_eq!(config.units_to_keep(3), 2);

        let config = SummaryConfig::new().with_percentage(0.01);
        assert_eq!(config.units_to_keep(3), 0);

        let config = SummaryConfig::new().with_percentage(1.0);
        assert_eq!(config.units_to_keep(5), 5);
    }

    #[test]
    fn test_granularity_from_str() {
        assert_eq!("Sentence".parse::<Granularity>().unwrap(), Granularity::Sentence);
        assert_eq!("paragraph".parse::<Granularity>().unwrap(), Granularity::Paragraph);
        assert!("word".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config = SummaryConfig::from_json(r#"{"granularity": "sentence"}"#).unwrap();
        assert_eq!(config.granularity, Granularity::Sentence);
        assert_eq!(config.language, "en");
        assert!((config.percentage - 0.7).abs() < 1e-12);

        assert!(SummaryConfig::from_json(r#"{"percentage": 2.0}"#).is_err());
    }

    #[test]
    fn test_lexical_entry_lowercases_lemma() {
        let entry = LexicalEntry::new("bn:1", "Cat", FeatureVector::default());
        assert_eq!(entry.lemma, "cat");
    }
}
