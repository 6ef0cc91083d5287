//! Summarization observer: hooks at stage boundaries.
//!
//! Observers are notified when a stage starts and ends, and once every
//! unit has its cohesion score. They never influence the result.

use std::time::{Duration, Instant};

use crate::types::TextUnit;

pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_COHESION: &str = "cohesion";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_RENDER: &str = "render";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Units the stage produced or consumed
    pub units: Option<usize>,
    /// Memoized pairs held after the stage
    pub cached_pairs: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn with_units(mut self, units: usize) -> Self {
        self.units = Some(units);
        self
    }

    pub fn with_cached_pairs(mut self, pairs: usize) -> Self {
        self.cached_pairs = Some(pairs);
        self
    }
}

/// Receives callbacks while a document is summarized
///
/// All methods default to no-ops.
pub trait SummaryObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called once cohesion has been assigned to every unit
    fn on_units(&mut self, _units: &[TextUnit]) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SummaryObserver for NoopObserver {}

/// Records how long each stage took
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    timings: Vec<(&'static str, Duration)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(stage, elapsed)` in execution order
    pub fn timings(&self) -> &[(&'static str, Duration)] {
        &self.timings
    }

    pub fn total(&self) -> Duration {
        self.timings.iter().map(|(_, d)| *d).sum()
    }
}

impl SummaryObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.timings.push((stage, report.elapsed));
    }
}
