use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Angular windows for text-flow classification, in degrees.
///
/// An edge is horizontal when its undirected angle lies strictly within
/// `horizontal_tolerance_deg` of the x axis, and vertical when it lies
/// strictly within `vertical_tolerance_deg` of the y axis. Both tolerances
/// are capped at 45° so the two windows never overlap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleThresholds {
    pub horizontal_tolerance_deg: f32,
    pub vertical_tolerance_deg: f32,
}

impl Default for AngleThresholds {
    fn default() -> Self {
        Self {
            horizontal_tolerance_deg: 20.0,
            vertical_tolerance_deg: 20.0,
        }
    }
}

impl AngleThresholds {
    pub fn validate(&self) -> Result<()> {
        check_tolerance("horizontal_tolerance_deg", self.horizontal_tolerance_deg)?;
        check_tolerance("vertical_tolerance_deg", self.vertical_tolerance_deg)
    }
}

fn check_tolerance(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 && value <= 45.0 {
        Ok(())
    } else {
        Err(AnalysisError::config(
            field,
            format!("must lie in (0, 45], got {value}"),
        ))
    }
}
