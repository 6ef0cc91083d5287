//! Word similarity research jobs
//!
//! Taxonomy measures scored against human ratings, and sense selection
//! over embedded vectors with annotator agreement.

pub mod concept;
pub mod correlation;
pub mod dataset;
pub mod sense;

pub use concept::{score_dataset, ConceptReport, ConceptSimilarity, ScoredPair};
pub use correlation::Correlation;
pub use dataset::{AnnotatedPair, RatedPair};
pub use sense::{GlossSource, GlossTable, SensePair, TermGloss};
