//! Generation phases for the heart point field.
//!
//! Construction runs the build phases once:
//! 1. [`edge_phase`] — samples the heart outline and thickens it with a
//!    light inward scatter.
//! 2. [`diffusion_phase`] — draws from the edge and scatters deeper toward
//!    the center.
//! 3. [`inner_fill_phase`] — acceptance-samples the interior, once per
//!    [`Falloff`].
//!
//! Every frame is then assembled from the frame phases:
//! 1. [`halo_phase`] — a fresh ring of glow points.
//! 2. [`pulse_phase`] — each cached set, displaced by the frame's
//!    breathing ratio and colored by distance.

use std::collections::HashSet;
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::{
    config::Config,
    frame::FrameParams,
    lighting::lighting_color,
    point_set::PointSet,
    shape::{distance_from_center, heart_point},
    transform::{pulse, scatter_inside, shrink},
    types::{PixelKey, RenderPoint},
};

/// Point sizes drawn for outline points.
pub const EDGE_SIZES: RangeInclusive<u8> = 1..=3;
/// Point sizes drawn for center-diffusion points.
pub const DIFFUSION_SIZES: RangeInclusive<u8> = 1..=2;
/// Point sizes drawn for inner-fill points.
pub const INNER_SIZES: RangeInclusive<u8> = 1..=2;
/// Point sizes drawn for halo points.
pub const HALO_SIZES: RangeInclusive<u8> = 1..=3;

/// Acceptance curve for [`inner_fill_phase`].
///
/// Both curves equal `1` at the center and decay with distance `d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Falloff {
    /// `1 / (1 + d/100)`.
    Linear,
    /// `1 / (1 + d²/40)`.
    Quadratic,
}

impl Falloff {
    /// Probability of keeping a sample `distance` away from the center.
    pub fn density(self, distance: f32) -> f32 {
        match self {
            Falloff::Linear => 1.0 / (1.0 + distance / 100.0),
            Falloff::Quadratic => 1.0 / (1.0 + distance * distance / 40.0),
        }
    }
}

/// Samples the heart outline.
///
/// 1. Draws `cfg.edge_samples` parameters `t ~ U(0, 2π)` and inserts
///    [`heart_point`] at `cfg.enlargement` for each.
/// 2. For every point present after step 1, inserts
///    `cfg.edge_scatter_copies` copies moved by [`scatter_inside`] with
///    `cfg.edge_scatter_beta`.
///
/// ### Returns
/// The edge set, outline samples first.
pub fn edge_phase(cfg: &Config, rng: &mut impl Rng) -> PointSet {
    let center = cfg.center();
    let mut edge = PointSet::with_capacity(cfg.edge_samples * (1 + cfg.edge_scatter_copies));

    for _ in 0..cfg.edge_samples {
        let t = rng.random_range(0.0..TAU);
        edge.insert(heart_point(t, cfg.enlargement, center, cfg.snap_curve_to_pixels));
    }

    let outline = edge.as_slice().to_vec();
    for p in outline {
        for _ in 0..cfg.edge_scatter_copies {
            edge.insert(scatter_inside(p, center, cfg.edge_scatter_beta, rng));
        }
    }

    edge
}

/// Spreads points from the edge toward the center.
///
/// Makes `cfg.diffusion_samples` uniform draws (with replacement) from
/// `edge` and inserts each after [`scatter_inside`] with
/// `cfg.diffusion_beta`. An empty `edge` yields an empty set.
pub fn diffusion_phase(edge: &PointSet, cfg: &Config, rng: &mut impl Rng) -> PointSet {
    let center = cfg.center();
    let mut diffusion = PointSet::with_capacity(cfg.diffusion_samples);

    for _ in 0..cfg.diffusion_samples {
        let Some(p) = edge.choose(rng) else {
            break;
        };
        diffusion.insert(scatter_inside(p, center, cfg.diffusion_beta, rng));
    }

    diffusion
}

/// Fills the interior by acceptance sampling.
///
/// Each of the `trials` candidates is a heart point with random scale
/// `cfg.inner_min_scale + cfg.inner_scale_spread·U(0,1)`, offset by
/// uniform jitter in `±cfg.inner_jitter` per axis. A candidate at distance
/// `d` from the center is kept with probability `falloff.density(d)`.
///
/// ### Parameters
/// - `inner` - Set that accepted candidates are inserted into.
/// - `trials` - Number of candidates to draw.
/// - `falloff` - Acceptance curve.
///
/// ### Returns
/// How many candidates were new to `inner`.
pub fn inner_fill_phase(
    inner: &mut PointSet,
    trials: usize,
    falloff: Falloff,
    cfg: &Config,
    rng: &mut impl Rng,
) -> usize {
    let center = cfg.center();
    let j = cfg.inner_jitter;
    let mut added = 0;

    for _ in 0..trials {
        let t = rng.random_range(0.0..TAU);
        let scale = cfg.inner_min_scale + cfg.inner_scale_spread * rng.random::<f32>();
        let mut p = heart_point(t, scale, center, cfg.snap_curve_to_pixels);
        if j > 0.0 {
            p.x += rng.random_range(-j..j);
            p.y += rng.random_range(-j..j);
        }

        let d = distance_from_center(p, center);
        if rng.random::<f32>() < falloff.density(d) && inner.insert(p) {
            added += 1;
        }
    }

    added
}

/// Appends one frame's halo to `out`.
///
/// Runs `params.halo_number` trials. Each samples the outline at
/// `cfg.halo_enlargement` and pulls it in by [`shrink`] with
/// `params.halo_radius`. A trial whose rounded pixel was already taken in
/// this frame is dropped; the rest are jittered by `±cfg.halo_jitter` and
/// get a size from [`HALO_SIZES`]. Halo points carry no color.
///
/// ### Returns
/// Number of halo points appended.
pub fn halo_phase(
    params: &FrameParams,
    cfg: &Config,
    rng: &mut impl Rng,
    out: &mut Vec<RenderPoint>,
) -> usize {
    let center = cfg.center();
    let j = cfg.halo_jitter;
    let mut taken: HashSet<PixelKey> = HashSet::with_capacity(params.halo_number);

    for _ in 0..params.halo_number {
        let t = rng.random_range(0.0..TAU);
        let p = heart_point(t, cfg.halo_enlargement, center, cfg.snap_curve_to_pixels);
        let mut p = shrink(p, center, params.halo_radius, cfg.shrink_exponent);

        if !taken.insert(PixelKey::rounded(p)) {
            continue;
        }

        if j > 0.0 {
            p.x += rng.random_range(-j..=j);
            p.y += rng.random_range(-j..=j);
        }
        out.push(RenderPoint {
            pos: p,
            size: rng.random_range(HALO_SIZES),
            color: None,
        });
    }

    taken.len()
}

/// Appends every point of `set`, breathed by `ratio` and lit by distance.
///
/// Each point goes through [`pulse`] with `cfg.pulse_exponent` and
/// `cfg.pulse_jitter`, gets a size from `sizes`, and is colored with
/// [`lighting_color`] based on its displaced distance from the center.
pub fn pulse_phase(
    set: &PointSet,
    ratio: f32,
    sizes: RangeInclusive<u8>,
    cfg: &Config,
    rng: &mut impl Rng,
    out: &mut Vec<RenderPoint>,
) {
    let center = cfg.center();
    let max_distance = cfg.max_distance();

    out.reserve(set.len());
    for p in set.iter() {
        let pos = pulse(p, center, ratio, cfg.pulse_exponent, cfg.pulse_jitter, rng);
        let size = rng.random_range(sizes.clone());
        let color = lighting_color(distance_from_center(pos, center), max_distance);
        out.push(RenderPoint {
            pos,
            size,
            color: Some(color),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;
    use rand::{SeedableRng, rngs::StdRng};

    fn small_config() -> Config {
        Config {
            edge_samples: 300,
            diffusion_samples: 500,
            inner_dense_trials: 2000,
            inner_sparse_trials: 400,
            ..Config::default()
        }
    }

    #[test]
    fn falloff_is_one_at_center_and_decays() {
        for f in [Falloff::Linear, Falloff::Quadratic] {
            assert_eq!(f.density(0.0), 1.0);
            assert!(f.density(10.0) < 1.0);
            assert!(f.density(200.0) < f.density(10.0));
        }
        assert_eq!(Falloff::Linear.density(100.0), 0.5);
        assert!((Falloff::Quadratic.density(40.0_f32.sqrt()) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn edge_phase_keeps_outline_then_scatter() {
        let cfg = small_config();
        let mut rng = StdRng::seed_from_u64(1);
        let edge = edge_phase(&cfg, &mut rng);

        // Float samples of a continuous curve essentially never collide.
        assert!(edge.len() > cfg.edge_samples);
        assert!(edge.len() <= cfg.edge_samples * (1 + cfg.edge_scatter_copies));

        // The outline comes first and lies within the scaled curve's box.
        let c = cfg.center();
        for p in edge.iter().take(cfg.edge_samples) {
            assert!((p.x - c.x).abs() <= 16.0 * cfg.enlargement + 1e-3);
            assert!((p.y - c.y).abs() <= 17.0 * cfg.enlargement + 1e-3);
        }
    }

    #[test]
    fn snapped_edge_collapses_to_pixels() {
        let cfg = Config {
            snap_curve_to_pixels: true,
            edge_scatter_copies: 0,
            edge_samples: 5000,
            ..small_config()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let edge = edge_phase(&cfg, &mut rng);

        // The outline covers far fewer whole pixels than samples drawn.
        assert!(edge.len() < cfg.edge_samples);
        assert!(edge.iter().all(|p| p.x.fract() == 0.0 && p.y.fract() == 0.0));
    }

    #[test]
    fn diffusion_pulls_points_inside() {
        let cfg = small_config();
        let mut rng = StdRng::seed_from_u64(3);
        let edge = edge_phase(&cfg, &mut rng);
        let diffusion = diffusion_phase(&edge, &cfg, &mut rng);

        assert!(!diffusion.is_empty());
        assert!(diffusion.len() <= cfg.diffusion_samples);

        let c = cfg.center();
        let mean = |s: &PointSet| {
            s.iter().map(|p| distance_from_center(p, c)).sum::<f32>() / s.len() as f32
        };
        assert!(mean(&diffusion) < mean(&edge));
    }

    #[test]
    fn diffusion_from_empty_edge_is_empty() {
        let cfg = small_config();
        let mut rng = StdRng::seed_from_u64(4);
        let diffusion = diffusion_phase(&PointSet::new(), &cfg, &mut rng);
        assert!(diffusion.is_empty());
    }

    #[test]
    fn inner_fill_counts_only_new_points() {
        let cfg = small_config();
        let mut rng = StdRng::seed_from_u64(5);
        let mut inner = PointSet::new();

        let added = inner_fill_phase(&mut inner, 3000, Falloff::Linear, &cfg, &mut rng);
        assert_eq!(added, inner.len());
        assert!(added > 0);
        assert!(added < 3000);

        let more = inner_fill_phase(&mut inner, 0, Falloff::Quadratic, &cfg, &mut rng);
        assert_eq!(more, 0);
    }

    #[test]
    fn halo_points_have_distinct_pixels_and_no_color() {
        let cfg = Config {
            halo_jitter: 0.0,
            ..small_config()
        };
        let mut rng = StdRng::seed_from_u64(6);
        let params = FrameParams::for_frame(3);
        let mut out = Vec::new();

        let n = halo_phase(&params, &cfg, &mut rng, &mut out);
        assert_eq!(n, out.len());
        assert!(n <= params.halo_number);
        assert!(n > 0);

        let pixels: HashSet<PixelKey> = out.iter().map(|p| PixelKey::rounded(p.pos)).collect();
        assert_eq!(pixels.len(), out.len());
        assert!(out.iter().all(|p| p.color.is_none() && HALO_SIZES.contains(&p.size)));
    }

    #[test]
    fn pulse_phase_preserves_order_and_lights_points() {
        let cfg = Config {
            pulse_jitter: 0.0,
            ..small_config()
        };
        let c = cfg.center();
        let set = PointSet::from_positions([
            c + glam::Vec2::new(50.0, 0.0),
            c + glam::Vec2::new(0.0, -120.0),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();

        pulse_phase(&set, 0.0, EDGE_SIZES, &cfg, &mut rng, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].pos, set.as_slice()[0]);
        assert_eq!(out[1].pos, set.as_slice()[1]);
        assert!(out.iter().all(|p| EDGE_SIZES.contains(&p.size)));

        let near = out[0].color.unwrap();
        let far = out[1].color.unwrap();
        assert!(near.r > far.r);
        assert!(near.r < Rgb::HEART.r);
    }
}
