//! # lexsense
//!
//! Lexical-semantic text tools built on sense-annotated resources.
//!
//! The central job is extractive summarization by lexical cohesion: each
//! paragraph (or sentence) of a document is scored by how strongly its
//! lemmas relate to the lemmas of every other unit, using sense feature
//! vectors from a NASARI-style resource, and the most cohesive fraction is
//! kept in document order.
//!
//! ```no_run
//! use lexsense::{Lexicon, Summarizer, SummaryConfig};
//!
//! # fn main() -> lexsense::Result<()> {
//! let lexicon = Lexicon::from_path("nasari.txt")?;
//! let mut summarizer = Summarizer::new(lexicon);
//! let summary = summarizer.summarize_file("article.txt", &SummaryConfig::new())?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```
//!
//! Alongside it the crate carries the related research jobs:
//!
//! - [`similarity::concept`]: Wu-Palmer, shortest-path and Leacock-Chodorow
//!   similarity over a taxonomy, correlated with human ratings
//! - [`similarity::sense`]: best sense pair by embedded-vector cosine, with
//!   gloss output and annotator agreement
//! - [`wsd`]: simplified Lesk disambiguation and its evaluation

pub mod errors;
pub mod lexicon;
pub mod nlp;
pub mod pipeline;
pub mod similarity;
pub mod summarizer;
pub mod types;
pub mod wsd;

pub use errors::{LexSenseError, Result};
pub use lexicon::{Lexicon, SenseEmbeddings, SenseInventory, Synset, Taxonomy};
pub use pipeline::batch::{summarize_batch, BatchOutcome};
pub use pipeline::observer::{NoopObserver, StageReport, StageTimingObserver, SummaryObserver};
pub use pipeline::runner::{Summarizer, Summary};
pub use types::{FeatureVector, Granularity, LexicalEntry, SummaryConfig, TextUnit, TokenCounts};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
