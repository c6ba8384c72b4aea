//! Owned two-level page raster.
//!
//! Pixel convention used throughout the crate: ink is [`INK`] (`0`, black)
//! and background is [`BACKGROUND`] (`255`, white). Any value below
//! [`INK_CUTOFF`] is read as ink, so a lightly noisy gray buffer still
//! behaves as binary. Rows are stored contiguously.
use super::traits::{ImageView, ImageViewMut};
use crate::error::{AnalysisError, Result};
use image::{GrayImage, Luma};

pub const INK: u8 = 0;
pub const BACKGROUND: u8 = 255;
pub const INK_CUTOFF: u8 = 128;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryImage {
    /// Wraps a row-major buffer, validating its dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::image(format!(
                "empty image ({width}x{height})"
            )));
        }
        if data.len() != width * height {
            return Err(AnalysisError::image(format!(
                "buffer holds {} pixels, expected {}x{}={}",
                data.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// All-background page.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, vec![BACKGROUND; width * height])
    }

    /// Converts an 8-bit gray image, mapping every pixel below `level` to ink.
    pub fn from_gray_threshold(gray: &GrayImage, level: u8) -> Result<Self> {
        let data = gray
            .as_raw()
            .iter()
            .map(|&v| if v < level { INK } else { BACKGROUND })
            .collect();
        Self::new(gray.width() as usize, gray.height() as usize, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    #[inline]
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        self.get(x, y) < INK_CUTOFF
    }

    pub fn ink_count(&self) -> usize {
        self.data.iter().filter(|&&v| v < INK_CUTOFF).count()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Gray image with ink as black and background as white.
    pub fn to_gray_image(&self) -> GrayImage {
        let mut out = GrayImage::new(self.width as u32, self.height as u32);
        for (x, y, px) in out.enumerate_pixels_mut() {
            let v = if self.is_ink(x as usize, y as usize) {
                INK
            } else {
                BACKGROUND
            };
            *px = Luma([v]);
        }
        out
    }

    /// Foreground mask with ink as 255 and background as 0, the polarity
    /// expected by contour tracing, surrounded by a `pad`-pixel background
    /// frame. Page pixel `(x, y)` lands at `(x + pad, y + pad)`.
    pub fn padded_ink_mask(&self, pad: u32) -> GrayImage {
        let w = self.width as u32;
        let h = self.height as u32;
        GrayImage::from_fn(w + 2 * pad, h + 2 * pad, |x, y| {
            let inside = x >= pad && y >= pad && x < w + pad && y < h + pad;
            if inside && self.is_ink((x - pad) as usize, (y - pad) as usize) {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }
}

impl ImageView for BinaryImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for BinaryImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            BinaryImage::new(0, 4, Vec::new()),
            Err(AnalysisError::InvalidImage { .. })
        ));
        assert!(matches!(
            BinaryImage::new(4, 4, vec![255; 15]),
            Err(AnalysisError::InvalidImage { .. })
        ));
    }

    #[test]
    fn fill_rect_clips_to_image() {
        let mut img = BinaryImage::new(4, 3, vec![INK; 12]).unwrap();
        img.fill_rect(2, 1, 10, 10, BACKGROUND);
        assert_eq!(img.ink_count(), 12 - 4);
        assert!(img.is_ink(1, 2));
        assert!(!img.is_ink(3, 2));
    }

    #[test]
    fn ink_mask_inverts_polarity_inside_frame() {
        let mut img = BinaryImage::blank(3, 1).unwrap();
        img.set(0, 0, INK);
        let mask = img.padded_ink_mask(1);
        assert_eq!(mask.dimensions(), (5, 3));
        assert_eq!(mask.get_pixel(1, 1)[0], 255);
        assert_eq!(mask.get_pixel(2, 1)[0], 0);
        assert_eq!(mask.get_pixel(0, 1)[0], 0);
        assert_eq!(mask.get_pixel(1, 0)[0], 0);
    }

    #[test]
    fn threshold_maps_dark_pixels_to_ink() {
        let gray = GrayImage::from_raw(3, 1, vec![10, 127, 200]).unwrap();
        let img = BinaryImage::from_gray_threshold(&gray, 128).unwrap();
        assert_eq!(img.data(), &[INK, INK, BACKGROUND]);
        assert_eq!(img.rows().count(), 1);
    }
}
