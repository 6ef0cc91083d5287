//! Summarization runner: orchestrates stage execution.
//!
//! A [`Summarizer`] owns the lexical resource together with the long-lived
//! word-similarity cache, and runs each document through four stages:
//!
//! 1. Preprocess: strip comments, split into units, count lemmas
//! 2. Cohesion: score every unit against every other unit
//! 3. Rank: keep the most cohesive fraction, in document order
//! 4. Render: join the kept units
//!
//! The per-document cohesion cache is cleared on entry, so one summarizer
//! can be reused across documents sequentially. It is not meant for
//! concurrent callers.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::{LexSenseError, Result};
use crate::lexicon::Lexicon;
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{
    NoopObserver, StageClock, StageReport, SummaryObserver, STAGE_COHESION, STAGE_PREPROCESS,
    STAGE_RANK, STAGE_RENDER,
};
use crate::summarizer::cohesion::CohesionScorer;
use crate::summarizer::selector::{render, select_units};
use crate::summarizer::similarity::WordSimilarity;
use crate::types::{Granularity, SummaryConfig, TextUnit};

/// Enter a tracing span for a summarization stage until the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

/// The result of summarizing one document
#[derive(Debug, Clone)]
pub struct Summary {
    /// Every unit of the document, with cohesion assigned
    pub units: Vec<TextUnit>,
    /// Indices of the kept units, in document order
    pub selected: Vec<usize>,
    pub granularity: Granularity,
    /// Rendered summary text
    pub text: String,
}

impl Summary {
    pub fn selected_units(&self) -> impl Iterator<Item = &TextUnit> {
        self.selected.iter().filter_map(|&i| self.units.get(i))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Cohesion-based extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    words: WordSimilarity,
    cohesion: CohesionScorer,
    tokenizer: Tokenizer,
    /// Language and extra words the current stopword filter was built from
    stopword_key: (String, Vec<String>),
}

impl Summarizer {
    /// Create a summarizer over a loaded lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        let key = ("en".to_string(), Vec::new());
        Self {
            words: WordSimilarity::new(lexicon),
            cohesion: CohesionScorer::new(),
            tokenizer: Tokenizer::new().with_stopwords(StopwordFilter::new(&key.0)),
            stopword_key: key,
        }
    }

    /// Load the lexical resource from a file
    pub fn from_resource_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Lexicon::from_path(path)?))
    }

    /// Replace the lemmatizer used for preprocessing
    pub fn with_lemmatizer(mut self, lemmatizer: Lemmatizer) -> Self {
        self.tokenizer = self.tokenizer.with_lemmatizer(lemmatizer);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.words.lexicon()
    }

    /// Similarity of two lemmas, memoized across documents
    pub fn similarity(&mut self, w1: &str, w2: &str) -> f64 {
        self.words.similarity(w1, w2)
    }

    pub fn cached_word_pairs(&self) -> usize {
        self.words.cached_pairs()
    }

    /// Summarize document text
    pub fn summarize(&mut self, document: &str, config: &SummaryConfig) -> Result<Summary> {
        self.summarize_observed(document, config, &mut NoopObserver)
    }

    /// Read and summarize a document file
    pub fn summarize_file(
        &mut self,
        path: impl AsRef<Path>,
        config: &SummaryConfig,
    ) -> Result<Summary> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| LexSenseError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = document.len(), "read document");
        self.summarize(&document, config)
    }

    /// Summarize document text, notifying `observer` at stage boundaries
    pub fn summarize_observed(
        &mut self,
        document: &str,
        config: &SummaryConfig,
        observer: &mut impl SummaryObserver,
    ) -> Result<Summary> {
        config.validate()?;
        self.refresh_stopwords(config);
        self.cohesion.clear();

        // Stage 1: Preprocess
        let mut units = {
            trace_stage!(STAGE_PREPROCESS);
            observer.on_stage_start(STAGE_PREPROCESS);
            let clock = StageClock::start();
            let units = self.tokenizer.units(document, config.granularity)?;
            let report = StageReport::new(clock.elapsed()).with_units(units.len());
            observer.on_stage_end(STAGE_PREPROCESS, &report);
            units
        };

        // Stage 2: Cohesion
        {
            trace_stage!(STAGE_COHESION);
            observer.on_stage_start(STAGE_COHESION);
            let clock = StageClock::start();
            let totals = self.cohesion.totals(&mut self.words, &units);
            for (unit, total) in units.iter_mut().zip(totals) {
                unit.cohesion = Some(total);
            }
            let report = StageReport::new(clock.elapsed())
                .with_units(units.len())
                .with_cached_pairs(self.cohesion.cached_pairs());
            observer.on_stage_end(STAGE_COHESION, &report);
            observer.on_units(&units);
        }

        // Stage 3: Rank
        let selected = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let keep = config.units_to_keep(units.len());
            let selected = select_units(&units, keep);
            let report = StageReport::new(clock.elapsed()).with_units(selected.len());
            observer.on_stage_end(STAGE_RANK, &report);
            selected
        };

        // Stage 4: Render
        let text = {
            trace_stage!(STAGE_RENDER);
            observer.on_stage_start(STAGE_RENDER);
            let clock = StageClock::start();
            let text = render(&units, &selected, config.granularity);
            observer.on_stage_end(STAGE_RENDER, &StageReport::new(clock.elapsed()));
            text
        };

        tracing::debug!(
            units = units.len(),
            kept = selected.len(),
            word_pairs = self.words.cached_pairs(),
            granularity = %config.granularity,
            "summarized document"
        );

        Ok(Summary {
            units,
            selected,
            granularity: config.granularity,
            text,
        })
    }

    fn refresh_stopwords(&mut self, config: &SummaryConfig) {
        if self.stopword_key.0 == config.language && self.stopword_key.1 == config.extra_stopwords
        {
            return;
        }
        let filter = StopwordFilter::with_extra(&config.language, &config.extra_stopwords);
        self.tokenizer = std::mem::take(&mut self.tokenizer).with_stopwords(filter);
        self.stopword_key = (config.language.clone(), config.extra_stopwords.clone());
    }
}
