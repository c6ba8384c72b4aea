//! Error type shared by the analysis stages.
//!
//! Degenerate inputs (too few components to build a graph) are not errors:
//! the affected stages return empty results and the analyzer records a
//! [`PipelineWarning`](crate::diagnostics::PipelineWarning) instead.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Malformed image buffer (zero size, wrong length, undecodable).
    #[error("invalid image: {reason}")]
    InvalidImage { reason: String },

    /// Structurally inconsistent stage input, e.g. an edge that references a
    /// point outside the point list.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Parameter rejected at the API boundary.
    #[error("invalid configuration `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Failure reported by an injected skew estimator.
    #[error("skew estimation failed: {0}")]
    Skew(String),
}

impl AnalysisError {
    pub(crate) fn image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    pub(crate) fn input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Rejects non-finite or non-positive values for a named parameter.
pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::config(
            field,
            format!("must be finite and > 0, got {value}"),
        ))
    }
}
