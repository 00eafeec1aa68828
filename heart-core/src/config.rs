use crate::error::{Error, Result};
use crate::types::{Point2D, Rgb};

/// Tunable constants for generating a [`crate::field::HeartField`].
///
/// The defaults reproduce the classic 640×600 beating heart. Canvas
/// geometry is explicit so the generator never depends on a drawing
/// surface.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Scale of the heart outline.
    pub enlargement: f32,
    /// Scale of the curve the halo ring is sampled from.
    pub halo_enlargement: f32,

    pub edge_samples: usize,
    pub edge_scatter_copies: usize,
    pub edge_scatter_beta: f32,
    pub diffusion_samples: usize,
    pub diffusion_beta: f32,

    /// Trials of the quadratic-falloff inner pass.
    pub inner_dense_trials: usize,
    /// Trials of the linear-falloff inner pass.
    pub inner_sparse_trials: usize,
    pub inner_min_scale: f32,
    pub inner_scale_spread: f32,
    pub inner_jitter: f32,

    pub halo_jitter: f32,
    pub pulse_jitter: f32,
    /// Exponent applied to the squared distance in the breathing force.
    pub pulse_exponent: f32,
    /// Exponent applied to the squared distance in the halo shrink force.
    pub shrink_exponent: f32,

    pub base_color: Rgb,
    /// Truncate curve samples to whole pixels before they enter a set.
    pub snap_curve_to_pixels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 640.0,
            canvas_height: 600.0,
            enlargement: 11.0,
            halo_enlargement: 11.6,
            edge_samples: 2000,
            edge_scatter_copies: 3,
            edge_scatter_beta: 0.05,
            diffusion_samples: 4000,
            diffusion_beta: 0.17,
            inner_dense_trials: 30_000,
            inner_sparse_trials: 3500,
            inner_min_scale: 7.0,
            inner_scale_spread: 3.5,
            inner_jitter: 8.0,
            halo_jitter: 14.0,
            pulse_jitter: 1.0,
            pulse_exponent: 0.52,
            shrink_exponent: 0.6,
            base_color: Rgb::HEART,
            snap_curve_to_pixels: false,
        }
    }
}

impl Config {
    /// Canvas center, halving each dimension on whole pixels.
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.canvas_width / 2.0).floor(),
            (self.canvas_height / 2.0).floor(),
        )
    }

    /// Length of the canvas diagonal; points this far from the center are
    /// fully dark.
    pub fn max_distance(&self) -> f32 {
        self.canvas_width.hypot(self.canvas_height)
    }

    /// Checks that the configuration can produce a field.
    ///
    /// ### Errors
    /// - [`Error::InvalidCanvas`] if either dimension is not a positive,
    ///   finite number.
    /// - [`Error::EmptyEdge`] if no edge samples are requested.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.canvas_width) || !ok(self.canvas_height) {
            return Err(Error::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.edge_samples == 0 {
            return Err(Error::EmptyEdge);
        }
        Ok(())
    }
}
