use super::params::AnalyzerParams;
use crate::classify::{classify_edges_with, ClassifiedEdge, ClassifiedEdges};
use crate::cleanup::remove_components_multi_with;
use crate::components::{
    centroids_of, mean_component_extent, Component, ComponentExtractor, ContourExtractor,
};
use crate::diagnostics::{
    CleanupStage, ComponentStage, DirectionReport, GraphStage, InputDescriptor, PipelineWarning,
    SpacingReport, TimingBreakdown,
};
use crate::error::Result;
use crate::graph::{
    build_spatial_graph_with, KnnGraph, Kruskal, NeighborGraphBuilder, SpanningTreeBuilder,
};
use crate::image::BinaryImage;
use crate::spacing::{compute_spacings, extract_peaks, gap_estimates};
use crate::types::{Axis, Point, SpacingResult};
use log::{debug, warn};
use rayon::prelude::*;
use std::time::Instant;

/// Everything computed for one page; the report plus the intermediate data a
/// caller may want to inspect or render.
#[derive(Clone, Debug)]
pub struct SpacingAnalysis {
    pub report: SpacingReport,
    pub cleaned: BinaryImage,
    pub components: Vec<Component>,
    pub points: Vec<Point>,
    pub edges: ClassifiedEdges,
}

/// Runs cleanup → centroids → spatial graph → classification → spacing peaks.
pub struct SpacingAnalyzer {
    params: AnalyzerParams,
    extractor: Box<dyn ComponentExtractor>,
    neighbors: Box<dyn NeighborGraphBuilder>,
    forest: Box<dyn SpanningTreeBuilder>,
}

impl SpacingAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self::with_backends(
            params,
            Box::new(ContourExtractor),
            Box::new(KnnGraph),
            Box::new(Kruskal),
        )
    }

    pub fn with_backends(
        params: AnalyzerParams,
        extractor: Box<dyn ComponentExtractor>,
        neighbors: Box<dyn NeighborGraphBuilder>,
        forest: Box<dyn SpanningTreeBuilder>,
    ) -> Self {
        Self {
            params,
            extractor,
            neighbors,
            forest,
        }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    pub fn analyze(&self, image: &BinaryImage) -> Result<SpacingReport> {
        Ok(self.analyze_detailed(image)?.report)
    }

    /// Analyzes pages independently on the rayon pool; results keep the
    /// order of `pages`.
    pub fn analyze_batch(&self, pages: &[BinaryImage]) -> Vec<Result<SpacingReport>> {
        pages.par_iter().map(|page| self.analyze(page)).collect()
    }

    pub fn analyze_detailed(&self, image: &BinaryImage) -> Result<SpacingAnalysis> {
        self.params.validate()?;
        let params = &self.params;
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let input = InputDescriptor {
            width: image.width(),
            height: image.height(),
            ink_pixels: image.ink_count(),
        };

        let stage_start = Instant::now();
        let (cleaned, cleanup_stats) = remove_components_multi_with(
            self.extractor.as_ref(),
            image,
            &params.removal_modes,
            &params.removal,
        );
        timing.push("cleanup", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let components = self.extractor.extract(&cleaned);
        let points = centroids_of(&components);
        timing.push("centroids", elapsed_ms(stage_start));

        let mut warnings = Vec::new();
        if points.len() < 2 {
            warn!(
                "spacing analysis: only {} usable component(s); no spacing estimate",
                points.len()
            );
            warnings.push(PipelineWarning::DegenerateInput {
                centroids: points.len(),
            });
        }

        let stage_start = Instant::now();
        let graph = build_spatial_graph_with(
            &points,
            params.k_neighbors,
            self.neighbors.as_ref(),
            self.forest.as_ref(),
        )?;
        timing.push("graph", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let edges = classify_edges_with(&graph.tree, &points, &params.angles)?;
        timing.push("classify", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let mean_width = mean_component_extent(&components, Axis::Horizontal);
        let mean_height = mean_component_extent(&components, Axis::Vertical);
        let horizontal =
            self.direction_report(Axis::Horizontal, &edges.horizontal, &points, mean_width)?;
        let vertical =
            self.direction_report(Axis::Vertical, &edges.vertical, &points, mean_height)?;
        timing.push("spacing", elapsed_ms(stage_start));

        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "spacing analysis: horizontal={:?} vertical={:?} in {:.3} ms",
            horizontal.dominant_spacings, vertical.dominant_spacings, timing.total_ms
        );

        let report = SpacingReport {
            result: SpacingResult {
                horizontal: horizontal.dominant_spacings.clone(),
                vertical: vertical.dominant_spacings.clone(),
                centroid_count: points.len(),
                latency_ms: timing.total_ms,
            },
            input,
            cleanup: CleanupStage {
                modes: params.removal_modes.clone(),
                examined: cleanup_stats.examined,
                removed: cleanup_stats.removed,
            },
            components: ComponentStage {
                components: components.len(),
                centroids: points.len(),
                degenerate: components.len() - points.len(),
                mean_width,
                mean_height,
            },
            graph: GraphStage {
                nodes: graph.node_count,
                k_effective: graph.k_effective,
                candidate_edges: graph.candidate_edges,
                tree_edges: graph.tree.len(),
                components: graph.components,
            },
            horizontal,
            vertical,
            unclassified_edges: edges.unclassified.len(),
            warnings,
            timing,
        };

        Ok(SpacingAnalysis {
            report,
            cleaned,
            components,
            points,
            edges,
        })
    }

    fn direction_report(
        &self,
        axis: Axis,
        edges: &[ClassifiedEdge],
        points: &[Point],
        mean_extent: Option<f32>,
    ) -> Result<DirectionReport> {
        let spacings = compute_spacings(edges, points, self.params.max_distance)?;
        let peaks = extract_peaks(&spacings, &self.params.peaks);
        let gaps = mean_extent
            .map(|m| gap_estimates(&peaks.dominant, m))
            .unwrap_or_default();
        Ok(DirectionReport {
            axis,
            edge_count: edges.len(),
            spacings_kept: spacings.len(),
            spacings_rejected: edges.len() - spacings.len(),
            histogram_by_count: peaks.histogram_by_count,
            peaks: peaks.peaks,
            dominant_spacings: peaks.dominant,
            mean_extent,
            gap_estimates: gaps,
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BoundingBox;
    use crate::graph::BruteForceKnn;

    /// Returns a fixed 4x3 lattice of square components plus one component
    /// without a contour, whatever the page holds.
    struct LatticeExtractor;

    impl ComponentExtractor for LatticeExtractor {
        fn extract(&self, _image: &BinaryImage) -> Vec<Component> {
            let mut out = Vec::new();
            for row in 0..3u32 {
                for col in 0..4u32 {
                    let (x, y) = (10 + col * 30, 10 + row * 50);
                    let (fx, fy) = (x as f32, y as f32);
                    let contour = vec![
                        Point::new(fx, fy),
                        Point::new(fx + 11.0, fy),
                        Point::new(fx + 11.0, fy + 11.0),
                        Point::new(fx, fy + 11.0),
                    ];
                    out.push(Component::new(BoundingBox::new(x, y, 12, 12), contour));
                }
            }
            out.push(Component::new(BoundingBox::new(200, 200, 12, 12), Vec::new()));
            out
        }
    }

    fn lattice_analyzer() -> SpacingAnalyzer {
        SpacingAnalyzer::with_backends(
            AnalyzerParams::default(),
            Box::new(LatticeExtractor),
            Box::new(BruteForceKnn),
            Box::new(Kruskal),
        )
    }

    #[test]
    fn injected_extractor_drives_the_pipeline() {
        let page = BinaryImage::blank(240, 240).unwrap();
        let analysis = lattice_analyzer().analyze_detailed(&page).unwrap();
        let report = &analysis.report;

        assert_eq!(report.components.components, 13);
        assert_eq!(report.components.degenerate, 1);
        assert_eq!(analysis.points.len(), 12);
        assert_eq!(report.graph.tree_edges, 11);
        assert_eq!(report.horizontal.edge_count, 9);
        assert_eq!(report.vertical.edge_count, 2);
        assert_eq!(report.result.horizontal, vec![30]);
        assert_eq!(report.result.vertical, vec![50]);
        assert_eq!(report.horizontal.gap_estimates, vec![18.0]);
    }

    #[test]
    fn stage_timings_are_recorded() {
        let page = BinaryImage::blank(240, 240).unwrap();
        let report = lattice_analyzer().analyze(&page).unwrap();
        for label in ["cleanup", "centroids", "graph", "classify", "spacing"] {
            assert!(report.timing.stage_ms(label).is_some(), "missing {label}");
        }
        assert!(report.timing.total_ms >= 0.0);
    }

    #[test]
    fn long_edges_are_rejected_per_axis() {
        let params = AnalyzerParams {
            max_distance: 40.0,
            ..Default::default()
        };
        let analyzer = SpacingAnalyzer::with_backends(
            params,
            Box::new(LatticeExtractor),
            Box::new(BruteForceKnn),
            Box::new(Kruskal),
        );
        let page = BinaryImage::blank(240, 240).unwrap();
        let report = analyzer.analyze(&page).unwrap();
        assert_eq!(report.vertical.spacings_rejected, 2);
        assert!(report.result.vertical.is_empty());
        assert_eq!(report.result.horizontal, vec![30]);
    }
}
