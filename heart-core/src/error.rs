//! Error types for heart field construction.

use thiserror::Error;

/// Errors that can occur when building a [`crate::field::HeartField`]
#[derive(Debug, Error)]
pub enum Error {
    /// The animation cycle must contain at least one frame
    #[error("frame count must be at least 1")]
    ZeroFrames,

    /// Canvas dimensions must be positive and finite
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    /// Center diffusion samples from the edge set, which must not be empty
    #[error("edge sample count must be at least 1")]
    EmptyEdge,
}

pub type Result<T> = std::result::Result<T, Error>;
