//! Image-processing collaborators around the spacing analysis.
//!
//! Each primitive sits behind a small trait so callers can plug in their own
//! implementation (a different thresholding scheme, a Hough-based skew
//! estimator, ...). The crate ships Otsu/fixed binarization and a plain
//! run-length smoother; skew estimation is always supplied by the caller.

mod binarize;
mod deskew;
mod rlsa;

pub use binarize::{FixedThreshold, OtsuBinarizer};
pub use deskew::{deskew, prepare_for_deskew, DeskewParams};
pub use rlsa::Rlsa;

use crate::error::Result;
use crate::image::BinaryImage;
use image::GrayImage;

/// Converts a gray page into the crate's two-level convention.
pub trait Binarizer: Send + Sync {
    fn binarize(&self, gray: &GrayImage) -> Result<BinaryImage>;
}

/// Merges nearby ink runs along rows and/or columns.
pub trait RunLengthSmoother: Send + Sync {
    fn smooth(
        &self,
        image: &BinaryImage,
        horizontal: bool,
        vertical: bool,
        threshold: u32,
    ) -> BinaryImage;
}

/// Estimates page rotation on a prepared binary page and returns `reference`
/// rotated upright together with the angle in degrees.
pub trait SkewEstimator: Send + Sync {
    fn estimate(&self, binary: &BinaryImage, reference: &GrayImage) -> Result<(GrayImage, f32)>;
}
