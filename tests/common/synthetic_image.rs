use spacing_graph::image::{ImageViewMut, INK};
use spacing_graph::BinaryImage;

/// A regular grid of solid rectangular "glyphs".
#[derive(Clone, Copy, Debug)]
pub struct TextLayout {
    pub origin: (usize, usize),
    pub cols: usize,
    pub rows: usize,
    pub glyph: (usize, usize),
    pub pitch: (usize, usize),
}

impl TextLayout {
    pub fn new(cols: usize, rows: usize, pitch_x: usize, pitch_y: usize) -> Self {
        Self {
            origin: (20, 20),
            cols,
            rows,
            glyph: (10, 14),
            pitch: (pitch_x, pitch_y),
        }
    }

    /// Smallest page holding the block with the origin as margin on all sides.
    pub fn page_size(&self) -> (usize, usize) {
        let w = (self.cols - 1) * self.pitch.0 + self.glyph.0;
        let h = (self.rows - 1) * self.pitch.1 + self.glyph.1;
        (w + 2 * self.origin.0, h + 2 * self.origin.1)
    }

    pub fn glyph_count(&self) -> usize {
        self.cols * self.rows
    }
}

pub fn blank_page(width: usize, height: usize) -> BinaryImage {
    assert!(width > 0 && height > 0, "page dimensions must be positive");
    BinaryImage::blank(width, height).expect("valid page dimensions")
}

pub fn fill_block(page: &mut BinaryImage, x: usize, y: usize, w: usize, h: usize) {
    page.fill_rect(x, y, w, h, INK);
}

pub fn draw_text_block(page: &mut BinaryImage, layout: &TextLayout) {
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let x = layout.origin.0 + col * layout.pitch.0;
            let y = layout.origin.1 + row * layout.pitch.1;
            fill_block(page, x, y, layout.glyph.0, layout.glyph.1);
        }
    }
}

/// Page containing only the text block.
pub fn text_page(layout: &TextLayout) -> BinaryImage {
    let (w, h) = layout.page_size();
    let mut page = blank_page(w, h);
    draw_text_block(&mut page, layout);
    page
}
