//! Document splitting and token normalization
//!
//! A document is first stripped of `#` comments, then split into units
//! (paragraphs or sentences). Each unit is reduced to a bag of lemmas:
//! punctuation removed, lowercased, lemmatized, stopwords dropped.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::lemmatizer::Lemmatizer;
use super::stopwords::StopwordFilter;
use crate::errors::{LexSenseError, Result};
use crate::types::{Granularity, TextUnit, TokenCounts};

const PARAGRAPH_BREAK: &str = "\n\n";

fn comment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // A comment runs from `#` to the end of its line and takes the newline
    // with it. A comment on a last line without a newline is kept.
    PATTERN.get_or_init(|| Regex::new(r"#.*\n").expect("comment pattern is valid"))
}

/// Remove `#` comments
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    comment_pattern().replace_all(text, "")
}

/// Remove ASCII punctuation characters
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Split cleaned document text into unit texts
///
/// Paragraph mode splits on blank lines and keeps every piece, including
/// empty ones. Sentence mode segments sentences (UAX #29) and then splits
/// each sentence again on blank lines, discarding empty pieces.
pub fn split_units(text: &str, granularity: Granularity) -> Vec<String> {
    match granularity {
        Granularity::Paragraph => text.split(PARAGRAPH_BREAK).map(str::to_string).collect(),
        Granularity::Sentence => {
            // Wrapped lines inside a paragraph do not end a sentence.
            let unwrapped = text
                .split(PARAGRAPH_BREAK)
                .map(|p| p.replace('\n', " "))
                .collect::<Vec<_>>()
                .join(PARAGRAPH_BREAK);

            unwrapped
                .unicode_sentences()
                .flat_map(|sentence| sentence.trim().split(PARAGRAPH_BREAK))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }
    }
}

/// Turns documents into normalized text units
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
    lemmatizer: Lemmatizer,
}

impl Tokenizer {
    /// Create a tokenizer with English stopwords and a rule-based lemmatizer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Lemmatizer) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Count surviving lemmas of one unit
    ///
    /// Stopwords are matched after lemmatization. A unit with nothing left
    /// yields an empty map.
    pub fn count_tokens(&self, unit: &str) -> TokenCounts {
        let mut counts = TokenCounts::default();
        let lowered = strip_punctuation(unit).to_lowercase();
        for word in lowered.split_whitespace() {
            let lemma = self.lemmatizer.lemmatize(word);
            if self.stopwords.is_stopword(&lemma) {
                continue;
            }
            *counts.entry(lemma).or_insert(0) += 1;
        }
        counts
    }

    /// Split a raw document into indexed, tokenized units
    pub fn units(&self, document: &str, granularity: Granularity) -> Result<Vec<TextUnit>> {
        let cleaned = strip_comments(document);
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return Err(LexSenseError::EmptyDocument);
        }

        let units: Vec<TextUnit> = split_units(cleaned, granularity)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = self.count_tokens(&text);
                TextUnit::new(index, text, tokens)
            })
            .collect();

        if units.is_empty() {
            return Err(LexSenseError::EmptyDocument);
        }
        Ok(units)
    }
}
