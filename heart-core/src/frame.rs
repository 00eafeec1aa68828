//! Per-frame animation parameters and the precomputed frame cache.

use std::f32::consts::PI;

use crate::shape::curve;
use crate::types::{FrameIndex, RenderPoint};

/// Amplitudes driving one frame of the beat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Breathing amplitude passed to [`crate::transform::pulse`].
    pub ratio: f32,
    /// Inward pull applied to halo samples.
    pub halo_radius: f32,
    /// Number of halo trials; distinct-pixel filtering may keep fewer.
    pub halo_number: usize,
}

impl FrameParams {
    /// Computes the amplitudes for frame `frame`.
    ///
    /// Breathing runs on phase `frame/20·π`, the halo on `frame/10·π`, so
    /// the halo oscillates twice per breath. Both repeat exactly every ten
    /// frames.
    pub fn for_frame(frame: FrameIndex) -> Self {
        let f = frame as f32;
        let beat = curve(f / 20.0 * PI);
        let halo = curve(f / 10.0 * PI);

        Self {
            ratio: 10.0 * beat,
            halo_radius: 4.0 + 6.0 * (1.0 + halo),
            halo_number: (3000.0 + 4000.0 * halo * halo) as usize,
        }
    }
}

/// Immutable cycle of precomputed frames.
///
/// Lookups wrap modulo the cycle length, so any playback index is valid.
#[derive(Debug, Clone)]
pub struct FrameCache {
    frames: Vec<Vec<RenderPoint>>,
}

impl FrameCache {
    /// Wraps already computed frames.
    ///
    /// ### Panics
    /// Panics if `frames` is empty.
    pub fn from_frames(frames: Vec<Vec<RenderPoint>>) -> Self {
        assert!(!frames.is_empty(), "frame cache needs at least one frame");
        Self { frames }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Points of frame `frame mod len()`, in drawing order.
    #[inline]
    pub fn get(&self, frame: FrameIndex) -> &[RenderPoint] {
        &self.frames[frame % self.frames.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[RenderPoint]> + '_ {
        self.frames.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn point(x: f32) -> RenderPoint {
        RenderPoint {
            pos: Vec2::new(x, 0.0),
            size: 1,
            color: None,
        }
    }

    #[test]
    fn frame_zero_is_at_rest() {
        let p = FrameParams::for_frame(0);
        assert_eq!(p.ratio, 0.0);
        assert_eq!(p.halo_radius, 10.0);
        assert_eq!(p.halo_number, 3000);
    }

    #[test]
    fn params_repeat_every_ten_frames() {
        for f in 0..10 {
            let a = FrameParams::for_frame(f);
            let b = FrameParams::for_frame(f + 10);
            assert!((a.ratio - b.ratio).abs() < 1e-3, "frame {f}");
            assert!((a.halo_radius - b.halo_radius).abs() < 1e-3, "frame {f}");
            assert!(a.halo_number.abs_diff(b.halo_number) <= 1, "frame {f}");
        }
    }

    #[test]
    fn params_stay_in_range() {
        let bound = 4.0 / PI;
        for f in 0..40 {
            let p = FrameParams::for_frame(f);
            assert!(p.ratio.abs() <= 10.0 * bound + 1e-4);
            assert!(p.halo_radius >= 4.0 + 6.0 * (1.0 - bound) - 1e-4);
            assert!(p.halo_radius <= 4.0 + 6.0 * (1.0 + bound) + 1e-4);
            assert!(p.halo_number >= 3000);
            assert!(p.halo_number <= 3000 + (4000.0 * bound * bound) as usize + 1);
        }
    }

    #[test]
    fn cache_wraps_indices() {
        let cache = FrameCache::from_frames(vec![vec![point(0.0)], vec![point(1.0), point(2.0)]]);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(1).len(), 2);
        assert_eq!(cache.get(3), cache.get(1));
        assert!(std::ptr::eq(cache.get(4), cache.get(0)));
    }

    #[test]
    #[should_panic]
    fn empty_cache_panics() {
        FrameCache::from_frames(Vec::new());
    }
}
