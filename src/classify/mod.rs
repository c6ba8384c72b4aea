//! Text-flow classification of spanning-tree edges.
//!
//! With the default 20° windows:
//! - horizontal: angle in (-20, 20) ∪ (160, 180] ∪ [-180, -160)
//! - vertical: angle in (70, 110) ∪ (-110, -70)
//! - unclassified: everything else (diagonal links between lines/columns)
//!
//! Classification depends on the undirected angle only, so an edge and its
//! reverse always land in the same class.

mod options;

pub use options::AngleThresholds;

use crate::angle::{deviation_from_horizontal_deg, deviation_from_vertical_deg, edge_angle_deg};
use crate::error::{AnalysisError, Result};
use crate::types::{GraphEdge, Point};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeClass {
    Horizontal,
    Vertical,
    Unclassified,
}

/// Tree edge annotated with its direction and length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEdge {
    /// Angle of the vector from `endpoints.0` to `endpoints.1`, (-180, 180].
    pub angle_deg: f32,
    pub length: f32,
    pub endpoints: (usize, usize),
    pub class: EdgeClass,
}

/// Partition of a tree's edges by class. Unclassified edges are retained for
/// inspection but take no part in spacing estimation.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEdges {
    pub horizontal: Vec<ClassifiedEdge>,
    pub vertical: Vec<ClassifiedEdge>,
    pub unclassified: Vec<ClassifiedEdge>,
}

impl ClassifiedEdges {
    pub fn total(&self) -> usize {
        self.horizontal.len() + self.vertical.len() + self.unclassified.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedEdge> {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .chain(self.unclassified.iter())
    }
}

/// Class of a single angle under `thresholds`.
#[inline]
pub fn classify_angle(angle_deg: f32, thresholds: &AngleThresholds) -> EdgeClass {
    if deviation_from_horizontal_deg(angle_deg) < thresholds.horizontal_tolerance_deg {
        EdgeClass::Horizontal
    } else if deviation_from_vertical_deg(angle_deg) < thresholds.vertical_tolerance_deg {
        EdgeClass::Vertical
    } else {
        EdgeClass::Unclassified
    }
}

/// Classifies edges with the default angular windows.
pub fn classify_edges(edges: &[GraphEdge], points: &[Point]) -> Result<ClassifiedEdges> {
    classify_edges_with(edges, points, &AngleThresholds::default())
}

pub fn classify_edges_with(
    edges: &[GraphEdge],
    points: &[Point],
    thresholds: &AngleThresholds,
) -> Result<ClassifiedEdges> {
    thresholds.validate()?;
    let mut out = ClassifiedEdges::default();
    for edge in edges {
        let (a, b) = endpoint_pair(edge, points)?;
        let angle_deg = edge_angle_deg(a, b);
        let class = classify_angle(angle_deg, thresholds);
        let classified = ClassifiedEdge {
            angle_deg,
            length: nalgebra::distance(a, b),
            endpoints: (edge.i, edge.j),
            class,
        };
        match class {
            EdgeClass::Horizontal => out.horizontal.push(classified),
            EdgeClass::Vertical => out.vertical.push(classified),
            EdgeClass::Unclassified => out.unclassified.push(classified),
        }
    }
    Ok(out)
}

pub(crate) fn endpoint_pair<'a>(
    edge: &GraphEdge,
    points: &'a [Point],
) -> Result<(&'a Point, &'a Point)> {
    match (points.get(edge.i), points.get(edge.j)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(AnalysisError::input(format!(
            "edge ({}, {}) references a point outside 0..{}",
            edge.i,
            edge.j,
            points.len()
        ))),
    }
}
