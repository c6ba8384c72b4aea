//! Spatial graph over component centroids.
//!
//! Two injectable steps:
//! - [`NeighborGraphBuilder`]: sparse k-nearest-neighbor proximity graph,
//!   weighted by Euclidean distance ([`KnnGraph`], [`BruteForceKnn`]).
//! - [`SpanningTreeBuilder`]: reduces the proximity graph to a minimum
//!   spanning forest ([`Kruskal`]).
//!
//! Edges in a text page's spanning tree mostly link neighbouring glyphs on a
//! line or vertically adjacent lines; their lengths and angles drive the
//! classifier and the spacing statistics downstream.

mod knn;
mod mst;

pub use knn::{BruteForceKnn, KnnGraph};
pub use mst::{count_components, Kruskal};

use crate::error::{AnalysisError, Result};
use crate::types::{GraphEdge, Point};
use log::debug;
use serde::Serialize;

/// Builds the candidate edge set linking each point to its nearest neighbors.
pub trait NeighborGraphBuilder: Send + Sync {
    /// `k` is already clamped to `points.len() - 1`. Edges must be canonical
    /// (`i < j`), unique and free of self loops.
    fn neighbor_edges(&self, points: &[Point], k: usize) -> Vec<GraphEdge>;
}

/// Reduces a weighted graph to a minimum spanning forest.
pub trait SpanningTreeBuilder: Send + Sync {
    fn spanning_forest(&self, node_count: usize, edges: &[GraphEdge]) -> Vec<GraphEdge>;
}

/// Spanning forest together with the size of the proximity graph it came
/// from.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialGraph {
    pub node_count: usize,
    pub k_effective: usize,
    pub candidate_edges: usize,
    pub components: usize,
    pub tree: Vec<GraphEdge>,
}

/// k-NN graph + minimum spanning forest with the default backends.
///
/// Returns an empty edge list for fewer than two points; `k` larger than
/// `points.len() - 1` is clamped. `k == 0` is a configuration error.
pub fn build_spatial_graph(points: &[Point], k: usize) -> Result<Vec<GraphEdge>> {
    Ok(build_spatial_graph_with(points, k, &KnnGraph, &Kruskal)?.tree)
}

pub fn build_spatial_graph_with(
    points: &[Point],
    k: usize,
    neighbors: &dyn NeighborGraphBuilder,
    forest: &dyn SpanningTreeBuilder,
) -> Result<SpatialGraph> {
    if k == 0 {
        return Err(AnalysisError::config("k_neighbors", "must be at least 1"));
    }
    if let Some(idx) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(AnalysisError::input(format!(
            "point {idx} has non-finite coordinates"
        )));
    }
    let n = points.len();
    if n < 2 {
        return Ok(SpatialGraph {
            node_count: n,
            components: n,
            ..Default::default()
        });
    }

    let k_effective = k.min(n - 1);
    let candidates = neighbors.neighbor_edges(points, k_effective);
    let tree = forest.spanning_forest(n, &candidates);
    let components = n - tree.len();
    debug!(
        "spatial graph: nodes={} k={} candidates={} tree_edges={} components={}",
        n,
        k_effective,
        candidates.len(),
        tree.len(),
        components
    );
    Ok(SpatialGraph {
        node_count: n,
        k_effective,
        candidate_edges: candidates.len(),
        components,
        tree,
    })
}

#[cfg(test)]
mod tests;
