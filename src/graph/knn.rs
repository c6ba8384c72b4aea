//! k-nearest-neighbor proximity graphs.
//!
//! Both builders pick, for every point, its `k` closest other points with
//! ties at equal distance resolved towards the smaller index, so they return
//! identical edge sets for the same input.
use super::NeighborGraphBuilder;
use crate::types::{GraphEdge, Point};
use rstar::primitives::GeomWithData;
use rstar::RTree;
use std::collections::BTreeMap;

type IndexedPoint = GeomWithData<[f32; 2], usize>;

/// k-NN graph backed by an R*-tree; `O(N log N)` for page-sized inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnnGraph;

/// Exhaustive k-NN graph; `O(N²)`, useful as a reference on small inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForceKnn;

impl NeighborGraphBuilder for KnnGraph {
    fn neighbor_edges(&self, points: &[Point], k: usize) -> Vec<GraphEdge> {
        if points.len() < 2 || k == 0 {
            return Vec::new();
        }
        let entries: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .map(|(i, p)| GeomWithData::new([p.x, p.y], i))
            .collect();
        let tree = RTree::bulk_load(entries);

        let mut edges = EdgeSet::default();
        let mut found: Vec<(f32, usize)> = Vec::with_capacity(k + 4);
        for (i, p) in points.iter().enumerate() {
            found.clear();
            let mut kth_d2: Option<f32> = None;
            for (entry, d2) in tree.nearest_neighbor_iter_with_distance_2(&[p.x, p.y]) {
                let j = entry.data;
                if j == i {
                    continue;
                }
                // Keep draining candidates tied with the k-th distance so the
                // index tie-break below sees all of them.
                if let Some(limit) = kth_d2 {
                    if d2 > limit {
                        break;
                    }
                }
                found.push((d2, j));
                if kth_d2.is_none() && found.len() == k {
                    kth_d2 = Some(d2);
                }
            }
            keep_nearest(&mut found, k);
            for &(_, j) in found.iter() {
                edges.insert(points, i, j);
            }
        }
        edges.into_edges()
    }
}

impl NeighborGraphBuilder for BruteForceKnn {
    fn neighbor_edges(&self, points: &[Point], k: usize) -> Vec<GraphEdge> {
        if points.len() < 2 || k == 0 {
            return Vec::new();
        }
        let mut edges = EdgeSet::default();
        let mut found: Vec<(f32, usize)> = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            found.clear();
            found.extend(
                points
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(j, q)| ((q - p).norm_squared(), j)),
            );
            keep_nearest(&mut found, k);
            for &(_, j) in found.iter() {
                edges.insert(points, i, j);
            }
        }
        edges.into_edges()
    }
}

fn keep_nearest(found: &mut Vec<(f32, usize)>, k: usize) {
    found.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    found.truncate(k);
}

/// Symmetric edge accumulator keyed by the canonical `(min, max)` pair.
#[derive(Default)]
struct EdgeSet {
    edges: BTreeMap<(usize, usize), f32>,
}

impl EdgeSet {
    fn insert(&mut self, points: &[Point], a: usize, b: usize) {
        let key = if a < b { (a, b) } else { (b, a) };
        self.edges
            .entry(key)
            .or_insert_with(|| nalgebra::distance(&points[a], &points[b]));
    }

    fn into_edges(self) -> Vec<GraphEdge> {
        self.edges
            .into_iter()
            .map(|((i, j), weight)| GraphEdge { i, j, weight })
            .collect()
    }
}
