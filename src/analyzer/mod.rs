//! Page-level spacing analysis.
//!
//! Overview
//! - Erases figures/spots/rules from the binary page ([`crate::cleanup`]).
//! - Extracts component centroids ([`crate::components`]).
//! - Links centroids with a k-NN graph reduced to a minimum spanning forest
//!   ([`crate::graph`]).
//! - Splits tree edges into horizontal and vertical text-flow links
//!   ([`crate::classify`]).
//! - Caps edge lengths and picks the dominant spacing peaks per axis
//!   ([`crate::spacing`]).
//!
//! Pages are independent: [`SpacingAnalyzer::analyze_batch`] fans pages out
//! over rayon without any shared mutable state.
//!
//! Modules
//! - [`params`] – configuration types used by the analyzer and the tools.
//! - `pipeline` – the [`SpacingAnalyzer`] implementation.

pub mod params;
mod pipeline;

pub use params::AnalyzerParams;
pub use pipeline::{SpacingAnalysis, SpacingAnalyzer};
