//! I/O helpers for page images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/TIFF into an 8-bit gray image.
//! - `save_binary_image`: write a [`BinaryImage`] to a grayscale PNG.
//! - `save_rgb_image`: write an overlay produced by [`crate::render`].
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::BinaryImage;
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    Ok(img)
}

/// Save a binary page as a black-on-white grayscale image.
pub fn save_binary_image(image: &BinaryImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .to_gray_image()
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
