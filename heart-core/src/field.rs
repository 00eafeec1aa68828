//! The precomputed beating-heart animation.

use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::Config,
    error::{Error, Result},
    frame::{FrameCache, FrameParams},
    phases::{self, DIFFUSION_SIZES, EDGE_SIZES, Falloff, INNER_SIZES},
    point_set::PointSet,
    types::{FrameIndex, RenderPoint},
};

/// Sizes of the generated point groups and frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldStats {
    pub edge: usize,
    pub center_diffusion: usize,
    pub inner_scattered: usize,
    pub frames: usize,
    /// Fewest points in any frame.
    pub min_frame_points: usize,
    /// Most points in any frame.
    pub max_frame_points: usize,
}

/// A heart-shaped particle cloud with a precomputed beat cycle.
///
/// All randomness is consumed during construction: the three point groups
/// are built once, then every frame of the cycle is computed from them.
/// Afterwards the field is read-only and [`HeartField::render`] is a plain
/// lookup.
#[derive(Debug, Clone)]
pub struct HeartField {
    cfg: Config,
    edge: PointSet,
    center_diffusion: PointSet,
    inner_scattered: PointSet,
    frames: FrameCache,
}

impl HeartField {
    /// Builds the point groups and precomputes `frame_count` frames.
    ///
    /// ### Parameters
    /// - `frame_count` - Length of the animation cycle.
    /// - `cfg` - Canvas geometry and generation constants.
    /// - `rng` - Source of all randomness; a seeded generator makes the
    ///   result reproducible.
    ///
    /// ### Errors
    /// - [`Error::ZeroFrames`] if `frame_count` is zero.
    /// - Any error from [`Config::validate`].
    pub fn new(frame_count: usize, cfg: &Config, rng: &mut impl Rng) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }
        cfg.validate()?;

        let edge = phases::edge_phase(cfg, rng);
        debug!("edge set: {} points", edge.len());

        let center_diffusion = phases::diffusion_phase(&edge, cfg, rng);
        debug!("center diffusion set: {} points", center_diffusion.len());

        let mut inner_scattered = PointSet::new();
        let dense = phases::inner_fill_phase(
            &mut inner_scattered,
            cfg.inner_dense_trials,
            Falloff::Quadratic,
            cfg,
            rng,
        );
        let sparse = phases::inner_fill_phase(
            &mut inner_scattered,
            cfg.inner_sparse_trials,
            Falloff::Linear,
            cfg,
            rng,
        );
        debug!("inner set: {dense} dense + {sparse} sparse points");

        let frames: Vec<_> = (0..frame_count)
            .map(|f| calc(cfg, [&edge, &center_diffusion, &inner_scattered], f, rng))
            .collect();

        info!(
            "heart field ready: {} frames, {} cached points",
            frame_count,
            edge.len() + center_diffusion.len() + inner_scattered.len()
        );

        Ok(Self {
            cfg: *cfg,
            edge,
            center_diffusion,
            inner_scattered,
            frames: FrameCache::from_frames(frames),
        })
    }

    /// Same as [`HeartField::new`] with a [`StdRng`] seeded from `seed`.
    pub fn seeded(frame_count: usize, cfg: &Config, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(frame_count, cfg, &mut rng)
    }

    /// Points to draw for playback index `frame`.
    ///
    /// Wraps modulo [`HeartField::frame_count`], so `render(f)` and
    /// `render(f + frame_count())` are the same slice.
    #[inline]
    pub fn render(&self, frame: FrameIndex) -> &[RenderPoint] {
        self.frames.get(frame)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn edge(&self) -> &PointSet {
        &self.edge
    }

    pub fn center_diffusion(&self) -> &PointSet {
        &self.center_diffusion
    }

    pub fn inner_scattered(&self) -> &PointSet {
        &self.inner_scattered
    }

    pub fn frames(&self) -> &FrameCache {
        &self.frames
    }

    pub fn stats(&self) -> FieldStats {
        let counts: Vec<usize> = self.frames.iter().map(<[RenderPoint]>::len).collect();
        FieldStats {
            edge: self.edge.len(),
            center_diffusion: self.center_diffusion.len(),
            inner_scattered: self.inner_scattered.len(),
            frames: self.frames.len(),
            min_frame_points: counts.iter().copied().min().unwrap_or(0),
            max_frame_points: counts.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Computes one frame: halo first, then the edge, center diffusion and
/// inner sets in that order.
fn calc(
    cfg: &Config,
    sets: [&PointSet; 3],
    frame: FrameIndex,
    rng: &mut impl Rng,
) -> Vec<RenderPoint> {
    let params = FrameParams::for_frame(frame);
    let cached: usize = sets.iter().map(|s| s.len()).sum();
    let mut points = Vec::with_capacity(params.halo_number + cached);

    let halo = phases::halo_phase(&params, cfg, rng, &mut points);

    for (set, sizes) in sets.into_iter().zip([EDGE_SIZES, DIFFUSION_SIZES, INNER_SIZES]) {
        phases::pulse_phase(set, params.ratio, sizes, cfg, rng, &mut points);
    }

    trace!(
        "frame {frame}: ratio {:.3}, halo {halo}/{}, {} points",
        params.ratio,
        params.halo_number,
        points.len()
    );
    points
}
