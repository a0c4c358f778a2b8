//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed unit of time per tick
//! - Randomness only through a caller-supplied [`RandomSource`]
//! - Stable iteration order (roster index, then left paddle before right)
//! - No rendering, input or timing dependencies

pub mod arena;
pub mod ball;
pub mod paddle;
pub mod predict;
pub mod rng;
pub mod state;
pub mod tick;

pub use arena::{Arena, Side};
pub use ball::{Ball, random_velocity};
pub use paddle::{Paddle, PaddleCommand, PaddleRole};
pub use predict::{Intercept, Kinematics, find_intercept, find_threat, predict_y, time_to_arrival};
pub use rng::{RandomSource, SequenceSource, seeded};
pub use state::{MatchEvent, MatchState, Score};
pub use tick::{InputFlags, TickInput, deflect, tick};
