//! The heart outline and the oscillator that drives its beat.

use std::f32::consts::PI;

use crate::types::Point2D;

/// Maps curve parameter `t` to a canvas point on the heart outline.
///
/// Uses the classic parametric heart
/// `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`,
/// scaled by `scale`, flipped so the heart points down on a y-down
/// canvas, and translated to `center`.
///
/// ### Parameters
/// - `t` - Curve parameter, usually sampled from `[0, 2π)`.
/// - `scale` - Enlargement of the unit curve.
/// - `center` - Canvas center the heart is drawn around.
/// - `snap` - Truncate both coordinates to whole pixels.
pub fn heart_point(t: f32, scale: f32, center: Point2D, snap: bool) -> Point2D {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();

    let p = Point2D::new(x * scale + center.x, -y * scale + center.y);
    if snap { p.trunc() } else { p }
}

/// Heartbeat oscillator, `(4/π)·sin(4p)`.
///
/// Periodic in `p` with period `π/2` and bounded by `±4/π`.
#[inline]
pub fn curve(p: f32) -> f32 {
    4.0 / PI * (4.0 * p).sin()
}

#[inline]
pub fn distance_from_center(p: Point2D, center: Point2D) -> f32 {
    p.distance(center)
}
