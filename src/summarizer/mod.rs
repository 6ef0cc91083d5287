//! Summarization components
//!
//! Provides cohesion-based extractive summarization: lemma-pair
//! similarity over feature vectors, unit-pair cohesion, and selection of
//! the most cohesive units.

pub mod cohesion;
pub mod selector;
pub mod similarity;
