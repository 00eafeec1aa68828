//! Radial point transforms relative to the canvas center.
//!
//! - [`scatter_inside`] pulls a point toward the center by a random
//!   fraction; used to give the outline volume.
//! - [`pulse`] pushes a point outward with an inverse-power force; varying
//!   the ratio per frame produces the breathing motion.
//! - [`shrink`] is the inward counterpart of [`pulse`] used for the halo.

use rand::Rng;

use crate::types::Point2D;

/// Lower bound on the squared distance fed into inverse-power forces.
///
/// A point exactly at the center has zero displacement, so the clamp
/// only keeps the force finite; the result is the point itself.
pub const MIN_DISTANCE_SQUARED: f32 = 1e-6;

/// Draws `beta · ln(U)` with `U` uniform in `(0, 1]`.
///
/// The result is never positive. `U` is `1 - random()` so `ln(0)` cannot
/// occur.
fn log_ratio(beta: f32, rng: &mut impl Rng) -> f32 {
    let u: f32 = 1.0 - rng.random::<f32>();
    beta * u.ln()
}

/// Moves a point toward `center` by a randomized fraction per axis.
///
/// Each axis gets an independent ratio `beta·ln(U) <= 0` applied to the
/// displacement from the center, so the point slides along each axis
/// toward it. Small `beta` keeps points close to where they started,
/// larger values spread them deep into the interior; a rare large draw
/// can overshoot the center.
pub fn scatter_inside(p: Point2D, center: Point2D, beta: f32, rng: &mut impl Rng) -> Point2D {
    let ratio = Point2D::new(log_ratio(beta, rng), log_ratio(beta, rng));
    let delta = p - center;
    p + ratio * delta
}

/// Inverse-power radial force `1 / (d²)^exponent`, with `d²` clamped.
#[inline]
fn radial_force(delta: Point2D, exponent: f32) -> f32 {
    let d2 = delta.length_squared().max(MIN_DISTANCE_SQUARED);
    1.0 / d2.powf(exponent)
}

/// Breathing transform: displaces `p` away from `center` by
/// `ratio · force · Δ` and adds uniform jitter in `[-jitter, jitter]`
/// per axis.
///
/// Negative `ratio` contracts instead of expanding.
pub fn pulse(
    p: Point2D,
    center: Point2D,
    ratio: f32,
    exponent: f32,
    jitter: f32,
    rng: &mut impl Rng,
) -> Point2D {
    let delta = p - center;
    let force = radial_force(delta, exponent);
    let noise = if jitter > 0.0 {
        Point2D::new(
            rng.random_range(-jitter..=jitter),
            rng.random_range(-jitter..=jitter),
        )
    } else {
        Point2D::ZERO
    };
    p + ratio * force * delta + noise
}

/// Halo transform: pulls `p` toward `center` by `ratio · force · Δ`.
pub fn shrink(p: Point2D, center: Point2D, ratio: f32, exponent: f32) -> Point2D {
    let delta = p - center;
    let force = radial_force(delta, exponent);
    p - ratio * force * delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const CENTER: Point2D = Point2D::new(320.0, 300.0);

    #[test]
    fn scatter_moves_toward_center_per_axis() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = Point2D::new(420.0, 200.0);

        for _ in 0..500 {
            let q = scatter_inside(p, CENTER, 0.05, &mut rng);
            // ln(U) <= 0, so each axis moves toward (or past) the center.
            assert!(q.x <= p.x);
            assert!(q.y >= p.y);
        }
    }

    #[test]
    fn scatter_with_zero_beta_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Point2D::new(400.0, 250.0);
        assert_eq!(scatter_inside(p, CENTER, 0.0, &mut rng), p);
    }

    #[test]
    fn pulse_without_jitter_pushes_outward() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = CENTER + Point2D::new(100.0, 0.0);

        let q = pulse(p, CENTER, 10.0, 0.52, 0.0, &mut rng);
        let expected = 100.0 + 10.0 * 100.0 / 100.0_f32.powf(1.04);
        assert!((q.x - CENTER.x - expected).abs() < 1e-3);
        assert_eq!(q.y, CENTER.y);

        let back = pulse(p, CENTER, -10.0, 0.52, 0.0, &mut rng);
        assert!(back.x < p.x);
    }

    #[test]
    fn pulse_jitter_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = Point2D::new(250.0, 380.0);
        let still = pulse(p, CENTER, 3.0, 0.52, 0.0, &mut rng);

        for _ in 0..500 {
            let q = pulse(p, CENTER, 3.0, 0.52, 1.0, &mut rng);
            assert!((q - still).abs().max_element() <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn shrink_pulls_inward() {
        let p = CENTER + Point2D::new(0.0, -150.0);
        let q = shrink(p, CENTER, 10.0, 0.6);
        assert!(q.y > p.y);
        assert!(q.y < CENTER.y);
        assert_eq!(q.x, p.x);
    }

    #[test]
    fn forces_are_finite_at_center() {
        let mut rng = StdRng::seed_from_u64(5);
        let q = pulse(CENTER, CENTER, 10.0, 0.52, 0.0, &mut rng);
        assert_eq!(q, CENTER);

        let s = shrink(CENTER, CENTER, 10.0, 0.6);
        assert!(s.is_finite());
        assert_eq!(s, CENTER);
    }
}
