//! Edge-length statistics for classified tree edges.
//!
//! [`compute_spacings`] measures each edge and drops lengths above a cap
//! (links that jump between paragraphs, columns or regions).
//! [`peaks`] turns the surviving lengths into dominant spacing values.

pub mod histogram;
pub mod peaks;

pub use histogram::{Bin, SpacingHistogram};
pub use peaks::{extract_dominant_peaks, extract_peaks, Peak, PeakAnalysis, PeakParams};

use crate::classify::{endpoint_pair, ClassifiedEdge};
use crate::error::{ensure_positive, Result};
use crate::types::{GraphEdge, Point};
use serde::Serialize;

/// Default cap on retained edge lengths, in pixels.
pub const DEFAULT_MAX_DISTANCE: f32 = 120.0;

/// Lengths kept by the outlier cap plus the number rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingFilter {
    pub kept: Vec<f32>,
    pub rejected: usize,
}

/// Euclidean lengths of `edges`, keeping only those `<= max_distance`.
pub fn compute_spacings(
    edges: &[ClassifiedEdge],
    points: &[Point],
    max_distance: f32,
) -> Result<Vec<f32>> {
    let graph_edges = edges
        .iter()
        .map(|e| GraphEdge::new(e.endpoints.0, e.endpoints.1, e.length));
    let lengths = edge_lengths(graph_edges, points)?;
    Ok(filter_lengths(&lengths, max_distance)?.kept)
}

/// Euclidean length of each edge measured on `points`.
pub fn edge_lengths<I>(edges: I, points: &[Point]) -> Result<Vec<f32>>
where
    I: IntoIterator<Item = GraphEdge>,
{
    edges
        .into_iter()
        .map(|e| {
            let (a, b) = endpoint_pair(&e, points)?;
            Ok(nalgebra::distance(a, b))
        })
        .collect()
}

/// Single-pass outlier cap: a new list with every length `<= max_distance`.
pub fn filter_lengths(lengths: &[f32], max_distance: f32) -> Result<SpacingFilter> {
    ensure_positive("max_distance", max_distance)?;
    let kept: Vec<f32> = lengths
        .iter()
        .copied()
        .filter(|&d| d <= max_distance)
        .collect();
    let rejected = lengths.len() - kept.len();
    Ok(SpacingFilter { kept, rejected })
}

/// Whitespace between components: each pitch minus the mean component
/// extent along the same axis, floored at zero.
pub fn gap_estimates(pitches: &[u32], mean_extent: f32) -> Vec<f32> {
    pitches
        .iter()
        .map(|&p| (p as f32 - mean_extent).max(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::EdgeClass;
    use crate::error::AnalysisError;

    #[test]
    fn filter_removes_every_outlier() {
        // Consecutive outliers: remove-while-iterating would keep one of them.
        let lengths = [10.0, 10.0, 10.0, 11.0, 20.0, 20.0, 21.0, 50.0, 50.0];
        let filtered = filter_lengths(&lengths, 30.0).unwrap();
        assert_eq!(filtered.kept, vec![10.0, 10.0, 10.0, 11.0, 20.0, 20.0, 21.0]);
        assert_eq!(filtered.rejected, 2);
        let hist = SpacingHistogram::from_values(&filtered.kept);
        assert_eq!(
            hist.by_value(),
            vec![
                Bin { value: 10, count: 3 },
                Bin { value: 11, count: 1 },
                Bin { value: 20, count: 2 },
                Bin { value: 21, count: 1 },
            ]
        );
        assert_eq!(extract_dominant_peaks(&filtered.kept).first(), Some(&10));
    }

    #[test]
    fn threshold_is_inclusive() {
        let filtered = filter_lengths(&[30.0, 30.001], 30.0).unwrap();
        assert_eq!(filtered.kept, vec![30.0]);
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        for bad in [0.0f32, -5.0, f32::NAN] {
            assert!(matches!(
                filter_lengths(&[1.0], bad),
                Err(AnalysisError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn spacings_measure_on_points() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(300.0, 4.0)];
        let edges = vec![
            ClassifiedEdge {
                angle_deg: 53.1,
                length: 0.0,
                endpoints: (0, 1),
                class: EdgeClass::Unclassified,
            },
            ClassifiedEdge {
                angle_deg: 0.0,
                length: 0.0,
                endpoints: (1, 2),
                class: EdgeClass::Horizontal,
            },
        ];
        let spacings = compute_spacings(&edges, &pts, DEFAULT_MAX_DISTANCE).unwrap();
        assert_eq!(spacings.len(), 1);
        assert!((spacings[0] - 5.0).abs() < 1e-5);
    }

    #[test]
    fn gaps_subtract_mean_extent() {
        assert_eq!(gap_estimates(&[12, 40], 9.0), vec![3.0, 31.0]);
        assert_eq!(gap_estimates(&[4], 9.0), vec![0.0]);
    }
}
