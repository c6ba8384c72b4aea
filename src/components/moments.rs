//! Polygon moments of traced contours.
//!
//! Contours are treated as closed polygons through the border pixel centres.
//! Sums are accumulated in `f64`; page coordinates easily overflow the
//! precision of `f32` once squared and summed over long borders.
use crate::types::Point;

/// Minimum enclosed area (pixel²) for a contour to have a centroid.
pub const MIN_CENTROID_AREA: f64 = 1e-6;

/// Unsigned shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        acc += a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64;
    }
    0.5 * acc
}

/// Centroid from first-order moments (`m10 / m00`, `m01 / m00`).
///
/// Returns `None` for degenerate polygons whose enclosed area vanishes, such
/// as single pixels or one-pixel-wide strokes.
pub fn polygon_centroid(points: &[Point]) -> Option<Point> {
    let m00 = signed_area(points);
    if m00.abs() < MIN_CENTROID_AREA {
        return None;
    }
    let n = points.len();
    let mut m10 = 0.0f64;
    let mut m01 = 0.0f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let (ax, ay, bx, by) = (a.x as f64, a.y as f64, b.x as f64, b.y as f64);
        let cross = ax * by - bx * ay;
        m10 += (ax + bx) * cross;
        m01 += (ay + by) * cross;
    }
    let scale = 1.0 / (6.0 * m00);
    Some(Point::new((m10 * scale) as f32, (m01 * scale) as f32))
}
