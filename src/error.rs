//! Match construction errors
//!
//! The per-tick simulation never fails; everything here is raised while
//! building a match from its configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid arena: width {width}, height {height} (both must be positive)")]
    InvalidArena { width: f32, height: f32 },

    #[error("Invalid ball #{index}: radius {radius} must be positive")]
    InvalidBallRadius { index: usize, radius: f32 },

    #[error("Invalid ball #{index}: spawn fraction {fraction} outside [0, 1]")]
    InvalidSpawn { index: usize, fraction: f32 },

    #[error("Invalid {side} paddle: {reason}")]
    InvalidPaddle { side: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl MatchError {
    /// True for errors caused by the layout values rather than by reading them
    pub fn is_layout_error(&self) -> bool {
        !matches!(self, MatchError::Io(_) | MatchError::Config(_))
    }
}
