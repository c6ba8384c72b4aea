use super::{read_json, BinarizationConfig};
use crate::cleanup::{RemovalMode, RemovalThresholds};
use crate::preprocess::DeskewParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CleanupToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub binarization: BinarizationConfig,
    /// Applied in order; each pass re-extracts components.
    #[serde(default = "default_modes")]
    pub modes: Vec<RemovalMode>,
    #[serde(default)]
    pub thresholds: RemovalThresholds,
    /// When present, the cleaned page is smeared and stripped of figures
    /// the way a skew estimator expects it.
    #[serde(default)]
    pub deskew_preparation: Option<DeskewParams>,
    pub output: CleanupOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CleanupOutputConfig {
    pub cleaned_png: PathBuf,
    pub stats_json: Option<PathBuf>,
}

fn default_modes() -> Vec<RemovalMode> {
    vec![RemovalMode::Figures, RemovalMode::Spots]
}

pub fn load_config(path: &Path) -> Result<CleanupToolConfig, String> {
    read_json(path)
}
