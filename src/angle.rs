//! Angle utilities used by the edge classifier.
//!
//! All angles here are in degrees. Image coordinates have `y` growing
//! downwards, so an edge pointing "down the page" has a positive angle.
use crate::types::Point;

/// Signed angle of the vector `a → b` relative to the +x axis, in degrees,
/// normalized to the half-open range (-180, 180].
#[inline]
pub fn edge_angle_deg(a: &Point, b: &Point) -> f32 {
    let d = b - a;
    let deg = d.y.atan2(d.x).to_degrees();
    if deg <= -180.0 {
        deg + 360.0
    } else {
        deg
    }
}

/// Folds an angle into [0, 180), treating antipodal directions as equivalent.
#[inline]
pub fn fold_half_turn_deg(angle: f32) -> f32 {
    let folded = angle.rem_euclid(180.0);
    if folded >= 180.0 {
        0.0
    } else {
        folded
    }
}

/// Undirected angular distance from the horizontal axis, in [0, 90].
#[inline]
pub fn deviation_from_horizontal_deg(angle: f32) -> f32 {
    let folded = fold_half_turn_deg(angle);
    folded.min(180.0 - folded)
}

/// Undirected angular distance from the vertical axis, in [0, 90].
#[inline]
pub fn deviation_from_vertical_deg(angle: f32) -> f32 {
    (fold_half_turn_deg(angle) - 90.0).abs()
}
