//! State module for tracking pipeline progress
//!
//! # Components
//!
//! - `PipelineState`: The stage a run is in (crawling, summarizing, ... done or failed)

mod pipeline_state;

// Re-export main types
pub use pipeline_state::PipelineState;
