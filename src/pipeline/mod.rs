//! Summarization pipeline
//!
//! [`runner::Summarizer`] executes the preprocess, cohesion, rank and
//! render stages; [`observer`] provides stage hooks; [`batch`] runs many
//! documents with per-document failure isolation.

pub mod batch;
pub mod observer;
pub mod runner;
