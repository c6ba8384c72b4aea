//! Parameter types configuring the analyzer stages.
//!
//! Every threshold used by the pipeline lives here under one name with one
//! default. Defaults suit pages scanned at roughly 300 dpi; for other
//! resolutions start by scaling the cleanup sizes and `max_distance`.

use crate::classify::AngleThresholds;
use crate::cleanup::{RemovalMode, RemovalThresholds};
use crate::error::{ensure_positive, AnalysisError, Result};
use crate::spacing::{PeakParams, DEFAULT_MAX_DISTANCE};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Neighbors per centroid in the proximity graph (>= 1).
    pub k_neighbors: usize,
    /// Cleanup passes applied before centroid extraction, in order.
    pub removal_modes: Vec<RemovalMode>,
    pub removal: RemovalThresholds,
    pub angles: AngleThresholds,
    /// Longest edge (pixels) still counted as a spacing sample.
    pub max_distance: f32,
    pub peaks: PeakParams,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            k_neighbors: 5,
            removal_modes: vec![RemovalMode::Figures, RemovalMode::Spots],
            removal: RemovalThresholds::default(),
            angles: AngleThresholds::default(),
            max_distance: DEFAULT_MAX_DISTANCE,
            peaks: PeakParams::default(),
        }
    }
}

impl AnalyzerParams {
    pub fn validate(&self) -> Result<()> {
        if self.k_neighbors == 0 {
            return Err(AnalysisError::config("k_neighbors", "must be at least 1"));
        }
        ensure_positive("max_distance", self.max_distance)?;
        self.angles.validate()?;
        if self.peaks.top_n == 0 {
            return Err(AnalysisError::config("peaks.top_n", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AnalyzerParams::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: AnalyzerParams =
            serde_json::from_str(r#"{ "k_neighbors": 3, "removal_modes": ["linesBoth"] }"#)
                .unwrap();
        assert_eq!(params.k_neighbors, 3);
        assert_eq!(params.removal_modes, vec![RemovalMode::LinesBoth]);
        assert_eq!(params.max_distance, DEFAULT_MAX_DISTANCE);
        assert_eq!(params.peaks.min_separation, 25);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let zero_k = AnalyzerParams {
            k_neighbors: 0,
            ..Default::default()
        };
        assert!(zero_k.validate().is_err());
        let negative = AnalyzerParams {
            max_distance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(AnalysisError::InvalidConfig {
                field: "max_distance",
                ..
            })
        ));
    }
}
