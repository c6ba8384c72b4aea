//! Diagnostics data model exposed by the analyzer and the tools.
//!
//! [`SpacingReport`] is the main entry point returned by the analyzer. It
//! records the final spacing estimates alongside per-stage counts, the
//! spacing histograms, detected peaks, warnings and stage timings, and
//! serializes to camelCase JSON.

pub mod report;
pub mod timing;

pub use report::{
    CleanupStage, ComponentStage, DirectionReport, GraphStage, InputDescriptor, PipelineWarning,
    SpacingReport,
};
pub use timing::{StageTiming, TimingBreakdown};
