//! Word-sense disambiguation
//!
//! Simplified Lesk over a [`Taxonomy`](crate::lexicon::Taxonomy): the sense
//! whose definition shares the most words with the sentence wins.

pub mod evaluation;
pub mod lesk;

pub use evaluation::{evaluate, LeskCase, LeskEvaluation, LeskMiss};
pub use lesk::{alternative_sentences, disambiguate_file, find_ambiguous_word, lesk, Disambiguation};
