//! Debug overlays: component boxes and classified tree edges drawn over the
//! cleaned page.

use crate::classify::{ClassifiedEdges, EdgeClass};
use crate::components::Component;
use crate::image::BinaryImage;
use crate::types::Point;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

pub const BOX_COLOR: Rgb<u8> = Rgb([0, 160, 0]);
pub const HORIZONTAL_COLOR: Rgb<u8> = Rgb([220, 0, 0]);
pub const VERTICAL_COLOR: Rgb<u8> = Rgb([0, 0, 220]);
pub const UNCLASSIFIED_COLOR: Rgb<u8> = Rgb([160, 160, 160]);

/// Boxes smaller than this on either side are not drawn.
pub const MIN_BOX_SIDE: u32 = 4;

/// Grayscale copy of the page promoted to RGB, ready for drawing.
pub fn page_canvas(page: &BinaryImage) -> RgbImage {
    let gray = page.to_gray_image();
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y)[0];
        Rgb([v, v, v])
    })
}

pub fn draw_component_boxes(canvas: &mut RgbImage, components: &[Component], min_side: u32) {
    for comp in components {
        let b = comp.bbox;
        if b.width < min_side || b.height < min_side {
            continue;
        }
        let rect = Rect::at(b.x as i32, b.y as i32).of_size(b.width, b.height);
        draw_hollow_rect_mut(canvas, rect, BOX_COLOR);
    }
}

/// Edges whose endpoints fall outside `points` are skipped.
pub fn draw_classified_edges(canvas: &mut RgbImage, edges: &ClassifiedEdges, points: &[Point]) {
    for edge in edges.iter() {
        let (i, j) = edge.endpoints;
        let (Some(a), Some(b)) = (points.get(i), points.get(j)) else {
            continue;
        };
        let color = match edge.class {
            EdgeClass::Horizontal => HORIZONTAL_COLOR,
            EdgeClass::Vertical => VERTICAL_COLOR,
            EdgeClass::Unclassified => UNCLASSIFIED_COLOR,
        };
        draw_line_segment_mut(canvas, (a.x, a.y), (b.x, b.y), color);
    }
}
