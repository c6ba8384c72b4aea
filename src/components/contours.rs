//! Contour-tracing backend built on `imageproc`.
use super::{BoundingBox, Component, ComponentExtractor};
use crate::image::BinaryImage;
use crate::types::Point;
use imageproc::contours::{find_contours, BorderType};

/// Traces outer borders of ink regions (external retrieval: borders nested
/// inside holes of another component are skipped).
///
/// The page is traced inside a one-pixel background frame: the tracer treats
/// ink on the image border as the inside of a hole, which would hide that
/// component and every later one on the same rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContourExtractor;

const FRAME: u32 = 1;

impl ComponentExtractor for ContourExtractor {
    fn extract(&self, image: &BinaryImage) -> Vec<Component> {
        let mask = image.padded_ink_mask(FRAME);
        find_contours::<u32>(&mask)
            .into_iter()
            .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
            .filter_map(|c| {
                let pixels: Vec<imageproc::point::Point<u32>> = c
                    .points
                    .iter()
                    .map(|p| {
                        imageproc::point::Point::new(
                            p.x.saturating_sub(FRAME),
                            p.y.saturating_sub(FRAME),
                        )
                    })
                    .collect();
                let bbox = BoundingBox::enclosing(&pixels)?;
                let points = pixels
                    .iter()
                    .map(|p| Point::new(p.x as f32, p.y as f32))
                    .collect();
                Some(Component::new(bbox, points))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageViewMut, INK};

    #[test]
    fn nested_component_inside_hole_is_skipped() {
        let mut img = BinaryImage::blank(40, 40).unwrap();
        // Ring 20x20 with a 2px wall, and a dot inside its hole.
        img.fill_rect(5, 5, 20, 20, INK);
        img.fill_rect(7, 7, 16, 16, crate::image::BACKGROUND);
        img.fill_rect(13, 13, 3, 3, INK);
        let comps = ContourExtractor.extract(&img);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].bbox, BoundingBox::new(5, 5, 20, 20));
    }

    #[test]
    fn components_on_the_page_border_are_kept() {
        let mut img = BinaryImage::blank(40, 40).unwrap();
        img.fill_rect(0, 10, 5, 5, INK);
        img.fill_rect(20, 10, 5, 5, INK);
        img.fill_rect(35, 0, 5, 5, INK);
        let mut boxes: Vec<BoundingBox> =
            ContourExtractor.extract(&img).iter().map(|c| c.bbox).collect();
        boxes.sort_by_key(|b| (b.x, b.y));
        assert_eq!(
            boxes,
            vec![
                BoundingBox::new(0, 10, 5, 5),
                BoundingBox::new(20, 10, 5, 5),
                BoundingBox::new(35, 0, 5, 5),
            ]
        );
    }

    #[test]
    fn border_block_centroid_is_in_page_coordinates() {
        let mut img = BinaryImage::blank(20, 20).unwrap();
        img.fill_rect(0, 0, 5, 5, INK);
        let comps = ContourExtractor.extract(&img);
        assert_eq!(comps.len(), 1);
        let c = comps[0].centroid.expect("solid block has a centroid");
        assert!((c - Point::new(2.0, 2.0)).norm() < 1e-3);
    }

    #[test]
    fn blank_page_has_no_components() {
        let img = BinaryImage::blank(16, 16).unwrap();
        assert!(ContourExtractor.extract(&img).is_empty());
    }
}
