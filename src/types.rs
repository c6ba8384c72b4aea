use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Centroid of a connected ink component, in pixel coordinates.
///
/// The position of a point in its list is its node id in the spatial graph.
pub type Point = Point2<f32>;

/// Undirected weighted edge between two point indices.
///
/// Edges are stored canonically with `i < j`; `weight` is the Euclidean
/// distance between the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub i: usize,
    pub j: usize,
    pub weight: f32,
}

impl GraphEdge {
    /// Builds a canonical edge, swapping endpoints so that `i < j`.
    pub fn new(a: usize, b: usize, weight: f32) -> Self {
        let (i, j) = if a <= b { (a, b) } else { (b, a) };
        Self { i, j, weight }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

/// Axis along which spacing is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Final spacing estimates of one page.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingResult {
    /// Dominant spacing values along text lines (character/word pitch).
    pub horizontal: Vec<u32>,
    /// Dominant spacing values across text lines (line pitch).
    pub vertical: Vec<u32>,
    pub centroid_count: usize,
    pub latency_ms: f64,
}

impl SpacingResult {
    /// True when at least one dominant spacing was found on either axis.
    pub fn found(&self) -> bool {
        !self.horizontal.is_empty() || !self.vertical.is_empty()
    }
}
