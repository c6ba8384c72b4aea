//! Connected ink components and their centroids.
//!
//! Contour extraction is an external capability behind [`ComponentExtractor`];
//! the default [`ContourExtractor`] traces outer borders with `imageproc`.
//! Each component carries its bounding box (used by the cleanup stage) and,
//! when its border encloses a non-zero area, a moment-based centroid (used as
//! a node of the spatial graph).
//!
//! Component order is the extractor's scan order and is preserved end to end:
//! the index of a centroid in [`extract_centroids`] output is its node id.

mod contours;
mod moments;

pub use contours::ContourExtractor;
pub use moments::{polygon_area, polygon_centroid, MIN_CENTROID_AREA};

use crate::image::BinaryImage;
use crate::types::{Axis, Point};
use log::debug;
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel box; `width`/`height` count pixels, so a single pixel
/// has size 1×1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Tightest box around a set of pixel coordinates.
    pub fn enclosing(points: &[imageproc::point::Point<u32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in points.iter().skip(1) {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Some(Self::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1))
    }

    /// Inclusive containment test on both edges.
    pub fn contains(&self, p: &Point) -> bool {
        let x1 = self.x as f32 + self.width as f32;
        let y1 = self.y as f32 + self.height as f32;
        p.x >= self.x as f32 && p.y >= self.y as f32 && p.x <= x1 && p.y <= y1
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Extent along an axis: width for horizontal, height for vertical.
    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// One connected ink component as reported by a [`ComponentExtractor`].
#[derive(Clone, Debug)]
pub struct Component {
    pub bbox: BoundingBox,
    pub contour: Vec<Point>,
    pub centroid: Option<Point>,
}

impl Component {
    pub fn new(bbox: BoundingBox, contour: Vec<Point>) -> Self {
        let centroid = polygon_centroid(&contour);
        Self {
            bbox,
            contour,
            centroid,
        }
    }
}

/// Source of connected components for a binary page.
pub trait ComponentExtractor: Send + Sync {
    /// Returns the external components of `image` in a stable scan order.
    fn extract(&self, image: &BinaryImage) -> Vec<Component>;
}

/// Centroids of the non-degenerate components, in extractor order.
pub fn centroids_of(components: &[Component]) -> Vec<Point> {
    let points: Vec<Point> = components.iter().filter_map(|c| c.centroid).collect();
    let skipped = components.len() - points.len();
    if skipped > 0 {
        debug!("centroids: skipped {skipped} degenerate components");
    }
    points
}

/// Finds connected ink components with the default extractor and returns
/// their centroids.
pub fn extract_centroids(image: &BinaryImage) -> Vec<Point> {
    extract_centroids_with(&ContourExtractor, image)
}

pub fn extract_centroids_with(extractor: &dyn ComponentExtractor, image: &BinaryImage) -> Vec<Point> {
    centroids_of(&extractor.extract(image))
}

/// Mean bounding-box extent of the components along `axis`.
pub fn mean_component_extent(components: &[Component], axis: Axis) -> Option<f32> {
    if components.is_empty() {
        return None;
    }
    let sum: u64 = components.iter().map(|c| c.bbox.extent(axis) as u64).sum();
    Some(sum as f32 / components.len() as f32)
}
