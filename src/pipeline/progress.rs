//! Progress reporting for pipeline runs
//!
//! The pipeline announces each stage with a weight between 0 and 100 and
//! leaves presentation to the reporter.

use crate::state::PipelineState;

/// Receives stage progress and failures from a running pipeline
pub trait ProgressReporter: Send + Sync {
    /// Called when a stage starts (weight 0..=100, non-decreasing within a run)
    fn on_progress(&self, weight: u8, message: &str);

    /// Called once when a run halts in `state` with an unrecoverable error
    fn on_failure(&self, state: PipelineState, message: &str);
}

/// Reports progress through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn on_progress(&self, weight: u8, message: &str) {
        tracing::info!("[{:>3}%] {}", weight, message);
    }

    fn on_failure(&self, state: PipelineState, message: &str) {
        tracing::error!("Pipeline failed during {}: {}", state, message);
    }
}

/// Discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn on_progress(&self, _weight: u8, _message: &str) {}

    fn on_failure(&self, _state: PipelineState, _message: &str) {}
}
