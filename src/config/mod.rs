//! JSON configuration for the command-line tools.
//!
//! Each tool reads one JSON file whose path is the first argument; missing
//! optional sections fall back to their `Default`.

pub mod cleanup;
pub mod spacing;

use crate::error::Result;
use crate::image::BinaryImage;
use crate::preprocess::{Binarizer, FixedThreshold, OtsuBinarizer};
use image::GrayImage;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// How a grayscale input is turned into a binary page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum BinarizationConfig {
    #[default]
    Otsu,
    Fixed { level: u8 },
}

impl BinarizationConfig {
    pub fn binarize(&self, gray: &GrayImage) -> Result<BinaryImage> {
        match *self {
            BinarizationConfig::Otsu => OtsuBinarizer.binarize(gray),
            BinarizationConfig::Fixed { level } => FixedThreshold { level }.binarize(gray),
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> std::result::Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
