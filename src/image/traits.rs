/// Read-only row access to a single-channel raster.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Sets every pixel of the clipped rectangle `[x, x+w) × [y, y+h)`.
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, value: Self::Pixel) {
        let x_end = (x + w).min(self.width());
        let y_end = (y + h).min(self.height());
        if x >= x_end {
            return;
        }
        for yy in y..y_end {
            self.row_mut(yy)[x..x_end].fill(value);
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
