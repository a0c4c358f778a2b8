//! Multiball Pong - a two-paddle, many-ball arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, scoring, AI paddle)
//! - `config`: Match layout (arena, ball roster, paddles)
//! - `error`: Construction/configuration errors
//!
//! Rendering, input capture and frame scheduling live outside this crate;
//! they talk to the core through [`sim::MatchState`] and [`sim::TickInput`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::{BallSpec, MatchConfig, PaddleSpec};
pub use error::MatchError;

/// Fixed rule constants
pub mod consts {
    /// Lower bound of a freshly drawn velocity component magnitude
    pub const BALL_MIN_SPEED: f32 = 3.0;
    /// Upper bound (exclusive) of a freshly drawn velocity component magnitude
    pub const BALL_MAX_SPEED: f32 = 8.0;

    /// Cosmetic spin range (radians per tick)
    pub const BALL_MIN_SPIN: f32 = 0.02;
    pub const BALL_MAX_SPIN: f32 = 0.08;

    /// Predictive paddle moves this many times faster than its base speed
    pub const AI_SPEED_MULTIPLIER: f32 = 2.5;
    /// Predictive paddle ignores corrections smaller than this
    pub const AI_DEAD_ZONE: f32 = 5.0;

    /// Vertical velocity added per unit of off-center paddle contact
    pub const DEFLECTION_FACTOR: f32 = 2.0;

    /// Upper bound on wall segments walked by the bounce predictor
    pub const PREDICTION_FUEL: u32 = 1024;
}

/// Draw a value in `[min, max)` from a unit sample
#[inline]
pub fn lerp_range(unit: f32, min: f32, max: f32) -> f32 {
    unit * (max - min) + min
}
