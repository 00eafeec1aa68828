//! Core particle generation for the beating heart animation.
//!
//! Main components:
//! - [`field`] — [`field::HeartField`], the precomputed animation cycle.
//! - [`phases`] — build and per-frame generation phases.
//! - [`shape`] — the parametric heart curve and beat oscillator.
//! - [`transform`] — radial scatter, pulse and shrink transforms.
//! - [`lighting`] — distance-based color falloff.
//! - [`point_set`] — insertion-ordered, deduplicated point groups.
//! - [`frame`] — per-frame parameters and the frame cache.
//! - [`config`] — canvas geometry and generation constants.
//! - [`error`] — construction errors.
//! - [`types`] — shared point, color and key types.

pub mod config;
pub mod error;
pub mod field;
pub mod frame;
pub mod lighting;
pub mod phases;
pub mod point_set;
pub mod shape;
pub mod transform;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use field::{FieldStats, HeartField};
pub use types::{FrameIndex, Point2D, RenderPoint, Rgb};
