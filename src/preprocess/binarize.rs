use super::Binarizer;
use crate::error::Result;
use crate::image::BinaryImage;
use image::GrayImage;
use imageproc::contrast::otsu_level;
use serde::{Deserialize, Serialize};

/// Global Otsu threshold; pixels at or below the level become ink.
#[derive(Clone, Copy, Debug, Default)]
pub struct OtsuBinarizer;

impl Binarizer for OtsuBinarizer {
    fn binarize(&self, gray: &GrayImage) -> Result<BinaryImage> {
        let level = otsu_level(gray);
        BinaryImage::from_gray_threshold(gray, level.saturating_add(1))
    }
}

/// Fixed global threshold; pixels strictly below `level` become ink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedThreshold {
    pub level: u8,
}

impl Default for FixedThreshold {
    fn default() -> Self {
        Self { level: 128 }
    }
}

impl Binarizer for FixedThreshold {
    fn binarize(&self, gray: &GrayImage) -> Result<BinaryImage> {
        BinaryImage::from_gray_threshold(gray, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otsu_separates_two_levels() {
        let mut data = vec![230u8; 64];
        for v in data.iter_mut().take(20) {
            *v = 20;
        }
        let gray = GrayImage::from_raw(8, 8, data).unwrap();
        let bin = OtsuBinarizer.binarize(&gray).unwrap();
        assert_eq!(bin.ink_count(), 20);
    }

    #[test]
    fn fixed_threshold_is_strict() {
        let gray = GrayImage::from_raw(2, 1, vec![99, 100]).unwrap();
        let bin = FixedThreshold { level: 100 }.binarize(&gray).unwrap();
        assert!(bin.is_ink(0, 0));
        assert!(!bin.is_ink(1, 0));
    }
}
