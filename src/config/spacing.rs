use super::{read_json, BinarizationConfig};
use crate::analyzer::AnalyzerParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SpacingToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub binarization: BinarizationConfig,
    #[serde(default)]
    pub params: AnalyzerParams,
    pub output: SpacingOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SpacingOutputConfig {
    /// Where the JSON report goes; printed to stdout when absent.
    pub report_json: Option<PathBuf>,
    /// Cleaned page with component boxes and classified edges drawn on it.
    pub overlay_png: Option<PathBuf>,
    /// Also print the text summary.
    #[serde(default = "default_true")]
    pub summary: bool,
}

fn default_true() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<SpacingToolConfig, String> {
    read_json(path)
}
