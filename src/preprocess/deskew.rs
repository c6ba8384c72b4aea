//! Page preparation for skew estimation.
//!
//! Smearing glyphs into solid text lines and removing figures leaves a page
//! whose dominant straight structures are the baselines, which is what a
//! line-detecting skew estimator needs.
use super::{RunLengthSmoother, SkewEstimator};
use crate::cleanup::{remove_components, RemovalMode, RemovalThresholds};
use crate::components::{mean_component_extent, ComponentExtractor, ContourExtractor};
use crate::error::Result;
use crate::image::BinaryImage;
use crate::types::Axis;
use image::GrayImage;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskewParams {
    /// Horizontal smoothing threshold; `None` uses the mean component width.
    pub rlsa_horizontal: Option<u32>,
    /// Vertical smoothing threshold; `None` uses the mean component height.
    pub rlsa_vertical: Option<u32>,
    pub removal: RemovalThresholds,
}

impl Default for DeskewParams {
    fn default() -> Self {
        Self {
            rlsa_horizontal: None,
            rlsa_vertical: None,
            removal: RemovalThresholds::default(),
        }
    }
}

/// Horizontal then vertical run-length smoothing, then figure removal.
pub fn prepare_for_deskew(
    binary: &BinaryImage,
    smoother: &dyn RunLengthSmoother,
    params: &DeskewParams,
) -> BinaryImage {
    let (h, v) = smoothing_thresholds(binary, params);
    debug!("deskew preparation: rlsa horizontal={h} vertical={v}");
    let smeared = smoother.smooth(binary, true, false, h);
    let smeared = smoother.smooth(&smeared, false, true, v);
    remove_components(&smeared, RemovalMode::Figures, &params.removal)
}

/// Prepares `binary` and asks `estimator` for the rotation of `original`.
pub fn deskew(
    original: &GrayImage,
    binary: &BinaryImage,
    smoother: &dyn RunLengthSmoother,
    estimator: &dyn SkewEstimator,
    params: &DeskewParams,
) -> Result<(GrayImage, f32)> {
    let prepared = prepare_for_deskew(binary, smoother, params);
    let (rotated, angle) = estimator.estimate(&prepared, original)?;
    debug!("deskew: estimated angle {angle:.3}°");
    Ok((rotated, angle))
}

fn smoothing_thresholds(binary: &BinaryImage, params: &DeskewParams) -> (u32, u32) {
    if let (Some(h), Some(v)) = (params.rlsa_horizontal, params.rlsa_vertical) {
        return (h, v);
    }
    let components = ContourExtractor.extract(binary);
    let derive = |axis| {
        mean_component_extent(&components, axis)
            .map(|m| m.round() as u32)
            .unwrap_or(0)
    };
    (
        params
            .rlsa_horizontal
            .unwrap_or_else(|| derive(Axis::Horizontal)),
        params.rlsa_vertical.unwrap_or_else(|| derive(Axis::Vertical)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::image::{ImageViewMut, INK};
    use crate::preprocess::Rlsa;
    use std::sync::Mutex;

    struct RecordingEstimator {
        seen_ink: Mutex<Option<usize>>,
    }

    impl SkewEstimator for RecordingEstimator {
        fn estimate(&self, binary: &BinaryImage, reference: &GrayImage) -> Result<(GrayImage, f32)> {
            *self.seen_ink.lock().unwrap() = Some(binary.ink_count());
            Ok((reference.clone(), 1.5))
        }
    }

    struct FailingEstimator;

    impl SkewEstimator for FailingEstimator {
        fn estimate(&self, _: &BinaryImage, _: &GrayImage) -> Result<(GrayImage, f32)> {
            Err(AnalysisError::Skew("no lines".into()))
        }
    }

    fn word_row() -> BinaryImage {
        let mut img = BinaryImage::blank(400, 400).unwrap();
        for i in 0..5 {
            img.fill_rect(10 + i * 12, 20, 8, 10, INK);
        }
        // Figure: 320x40 block.
        img.fill_rect(20, 200, 320, 40, INK);
        img
    }

    #[test]
    fn preparation_merges_glyphs_and_drops_figures() {
        let img = word_row();
        let params = DeskewParams {
            rlsa_horizontal: Some(6),
            rlsa_vertical: Some(2),
            ..Default::default()
        };
        let prepared = prepare_for_deskew(&img, &Rlsa, &params);
        // Five 8x10 glyphs with 4px gaps become one 56x10 bar.
        assert_eq!(prepared.ink_count(), 56 * 10);
        assert!(!prepared.is_ink(100, 220));
    }

    #[test]
    fn deskew_passes_prepared_page_to_estimator() {
        let img = word_row();
        let original = img.to_gray_image();
        let estimator = RecordingEstimator {
            seen_ink: Mutex::new(None),
        };
        let (rotated, angle) =
            deskew(&original, &img, &Rlsa, &estimator, &DeskewParams::default()).unwrap();
        assert_eq!(angle, 1.5);
        assert_eq!(rotated.dimensions(), original.dimensions());
        assert!(estimator.seen_ink.lock().unwrap().is_some());
    }

    #[test]
    fn estimator_errors_propagate() {
        let img = word_row();
        let err = deskew(
            &img.to_gray_image(),
            &img,
            &Rlsa,
            &FailingEstimator,
            &DeskewParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Skew(_)));
    }
}
