//! Removal of figures, spots and ruling lines from a binary page.
//!
//! Runs before centroid extraction so that the spatial graph only links text
//! components. Each qualifying component has its bounding box filled with
//! background; the input page is never modified.

mod options;

pub use options::{RemovalMode, RemovalThresholds};

use crate::components::{BoundingBox, ComponentExtractor, ContourExtractor};
use crate::image::{BinaryImage, ImageViewMut, BACKGROUND};
use log::debug;
use serde::Serialize;

/// Counts reported by a cleanup pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupStats {
    pub examined: usize,
    pub removed: usize,
}

/// Decides whether a component box qualifies for removal under `mode`.
pub fn should_remove(bbox: &BoundingBox, mode: RemovalMode, t: &RemovalThresholds) -> bool {
    let (w, h) = (bbox.width, bbox.height);
    let vertical_rule = h > t.line_min_length && w < t.line_max_thickness;
    let horizontal_rule = w > t.line_min_length && h < t.line_max_thickness;
    match mode {
        RemovalMode::Figures => w > t.figure_min_size || h > t.figure_min_size,
        RemovalMode::Spots => w <= t.spot_max_size && h <= t.spot_max_size,
        RemovalMode::LinesVertical => vertical_rule,
        RemovalMode::LinesHorizontal => horizontal_rule,
        RemovalMode::LinesBoth => vertical_rule || horizontal_rule,
    }
}

/// Returns a copy of `image` with every component matching `mode` erased.
pub fn remove_components(
    image: &BinaryImage,
    mode: RemovalMode,
    thresholds: &RemovalThresholds,
) -> BinaryImage {
    remove_components_with(&ContourExtractor, image, mode, thresholds).0
}

/// Applies several modes in sequence, re-extracting components after each.
pub fn remove_components_multi(
    image: &BinaryImage,
    modes: &[RemovalMode],
    thresholds: &RemovalThresholds,
) -> (BinaryImage, CleanupStats) {
    remove_components_multi_with(&ContourExtractor, image, modes, thresholds)
}

pub fn remove_components_multi_with(
    extractor: &dyn ComponentExtractor,
    image: &BinaryImage,
    modes: &[RemovalMode],
    thresholds: &RemovalThresholds,
) -> (BinaryImage, CleanupStats) {
    let mut current = image.clone();
    let mut total = CleanupStats::default();
    for &mode in modes {
        let (next, stats) = remove_components_with(extractor, &current, mode, thresholds);
        total.examined += stats.examined;
        total.removed += stats.removed;
        current = next;
    }
    (current, total)
}

pub fn remove_components_with(
    extractor: &dyn ComponentExtractor,
    image: &BinaryImage,
    mode: RemovalMode,
    thresholds: &RemovalThresholds,
) -> (BinaryImage, CleanupStats) {
    let components = extractor.extract(image);
    let mut out = image.clone();
    let mut stats = CleanupStats {
        examined: components.len(),
        removed: 0,
    };
    for comp in &components {
        if should_remove(&comp.bbox, mode, thresholds) {
            let b = comp.bbox;
            out.fill_rect(
                b.x as usize,
                b.y as usize,
                b.width as usize,
                b.height as usize,
                BACKGROUND,
            );
            stats.removed += 1;
        }
    }
    debug!(
        "cleanup {:?}: removed {}/{} components",
        mode, stats.removed, stats.examined
    );
    (out, stats)
}
