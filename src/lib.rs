#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage modules, public for tools and callers that run stages on their own.
pub mod angle;
pub mod classify;
pub mod cleanup;
pub mod components;
pub mod config;
pub mod graph;
pub mod preprocess;
pub mod render;
pub mod spacing;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalyzerParams, SpacingAnalysis, SpacingAnalyzer};
pub use crate::error::{AnalysisError, Result};
pub use crate::image::BinaryImage;
pub use crate::types::{Point, SpacingResult};

// High-level diagnostics returned by the analyzer.
pub use crate::diagnostics::{PipelineWarning, SpacingReport};

// The individual stage entry points.
pub use crate::classify::classify_edges;
pub use crate::cleanup::remove_components;
pub use crate::components::extract_centroids;
pub use crate::graph::build_spatial_graph;
pub use crate::spacing::{compute_spacings, extract_dominant_peaks};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use spacing_graph::prelude::*;
///
/// # fn main() -> Result<(), AnalysisError> {
/// let (w, h) = (640usize, 480usize);
/// let page = BinaryImage::blank(w, h)?;
///
/// let analyzer = SpacingAnalyzer::new(AnalyzerParams::default());
/// let report = analyzer.analyze(&page)?;
/// println!(
///     "horizontal={:?} vertical={:?} latency_ms={:.3}",
///     report.result.horizontal, report.result.vertical, report.result.latency_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{AnalysisError, AnalyzerParams, BinaryImage, SpacingAnalyzer, SpacingResult};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Injectable backends.
    pub use crate::components::{ComponentExtractor, ContourExtractor};
    pub use crate::graph::{
        build_spatial_graph_with, BruteForceKnn, KnnGraph, Kruskal, NeighborGraphBuilder,
        SpanningTreeBuilder, SpatialGraph,
    };
    pub use crate::preprocess::{Binarizer, RunLengthSmoother, SkewEstimator};

    // Stage outputs and parameters.
    pub use crate::classify::{AngleThresholds, ClassifiedEdge, ClassifiedEdges, EdgeClass};
    pub use crate::cleanup::{CleanupStats, RemovalMode, RemovalThresholds};
    pub use crate::components::{BoundingBox, Component};
    pub use crate::spacing::{Bin, Peak, PeakAnalysis, PeakParams, SpacingFilter, SpacingHistogram};

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        CleanupStage, ComponentStage, DirectionReport, GraphStage, InputDescriptor, StageTiming,
        TimingBreakdown,
    };
}
