use super::RunLengthSmoother;
use crate::image::{BinaryImage, ImageView, ImageViewMut, INK, INK_CUTOFF};

/// Run-length smoothing: background runs no longer than the threshold and
/// bounded by ink on both sides are filled with ink. Runs touching the image
/// border are left alone. With both directions enabled the horizontal pass
/// runs first and the vertical pass sees its output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rlsa;

impl RunLengthSmoother for Rlsa {
    fn smooth(
        &self,
        image: &BinaryImage,
        horizontal: bool,
        vertical: bool,
        threshold: u32,
    ) -> BinaryImage {
        let mut out = image.clone();
        let limit = threshold as usize;
        if limit == 0 {
            return out;
        }
        if horizontal {
            for y in 0..out.height() {
                fill_short_gaps(out.row_mut(y), limit);
            }
        }
        if vertical {
            let mut column = vec![0u8; out.height()];
            for x in 0..out.width() {
                for (y, px) in column.iter_mut().enumerate() {
                    *px = out.get(x, y);
                }
                fill_short_gaps(&mut column, limit);
                for (y, &px) in column.iter().enumerate() {
                    out.set(x, y, px);
                }
            }
        }
        out
    }
}

fn fill_short_gaps(line: &mut [u8], limit: usize) {
    let mut last_ink: Option<usize> = None;
    for i in 0..line.len() {
        if line[i] >= INK_CUTOFF {
            continue;
        }
        if let Some(prev) = last_ink {
            let gap = i - prev - 1;
            if gap > 0 && gap <= limit {
                line[prev + 1..i].fill(INK);
            }
        }
        last_ink = Some(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BACKGROUND;

    fn row(pattern: &str) -> BinaryImage {
        let data = pattern
            .bytes()
            .map(|c| if c == b'#' { INK } else { BACKGROUND })
            .collect::<Vec<_>>();
        BinaryImage::new(pattern.len(), 1, data).unwrap()
    }

    #[test]
    fn bridges_short_gaps_only() {
        let img = row("..#..#.....#..");
        let out = Rlsa.smooth(&img, true, false, 3);
        let expect = row("..####.....#..");
        assert_eq!(out, expect);
    }

    #[test]
    fn vertical_pass_works_on_columns() {
        let mut img = BinaryImage::blank(1, 5).unwrap();
        img.set(0, 0, INK);
        img.set(0, 3, INK);
        let out = Rlsa.smooth(&img, false, true, 2);
        assert_eq!(out.ink_count(), 4);
        assert!(!out.is_ink(0, 4));
    }
}
