//! Match state
//!
//! The single mutable aggregate a tick operates on. Renderers read it
//! between ticks; nothing outside holds authoritative copies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Side};
use super::ball::Ball;
use super::paddle::Paddle;
use super::rng::RandomSource;
use crate::config::{MatchConfig, PaddleSpec};
use crate::error::MatchError;

/// Points per side, incremented once per ball exit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Left side (ball left through the right bound)
    pub player: u32,
    /// Right side (ball left through the left bound)
    pub opponent: u32,
}

impl Score {
    pub fn total(&self) -> u32 {
        self.player + self.opponent
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Ball (roster index) deflected by a paddle
    PaddleHit { side: Side, ball: usize },
    /// Ball exited the arena; `scorer` is the side credited with the point
    Scored { scorer: Side, ball: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    pub score: Score,
    /// Fixed roster, index order is stable for the whole match
    pub balls: Vec<Ball>,
    pub left: Paddle,
    pub right: Paddle,
    /// Completed ticks
    pub ticks: u64,
    /// Events from the most recent tick
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

impl MatchState {
    /// Build a match from its layout, drawing each ball's opening velocity
    pub fn new(config: &MatchConfig, rng: &mut impl RandomSource) -> Result<Self, MatchError> {
        let arena = Arena::new(
            config.arena_left,
            config.arena_top,
            config.arena_width,
            config.arena_height,
        )?;

        let left = build_paddle(&config.left_paddle, Side::Left, &arena)?;
        let right = build_paddle(&config.right_paddle, Side::Right, &arena)?;

        let mut balls = Vec::with_capacity(config.balls.len());
        for (index, spec) in config.balls.iter().enumerate() {
            if !(spec.radius.is_finite() && spec.radius > 0.0) {
                return Err(MatchError::InvalidBallRadius {
                    index,
                    radius: spec.radius,
                });
            }
            if !(0.0..=1.0).contains(&spec.spawn_y) {
                return Err(MatchError::InvalidSpawn {
                    index,
                    fraction: spec.spawn_y,
                });
            }
            if spec.radius > arena.height / 2.0 {
                log::warn!(
                    "Ball #{index} radius {} exceeds half the arena height; bounces will misbehave",
                    spec.radius
                );
            }
            let pos = Vec2::new(
                arena.center().x,
                arena.top + spec.spawn_y * arena.height,
            );
            balls.push(Ball::spawn(pos, spec.radius, spec.color, rng));
        }

        log::info!(
            "Match ready: arena {}x{}, {} balls, left {:?}, right {:?}",
            arena.width,
            arena.height,
            balls.len(),
            left.role,
            right.role
        );

        Ok(Self {
            arena,
            score: Score::default(),
            balls,
            left,
            right,
            ticks: 0,
            events: Vec::new(),
        })
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

fn build_paddle(spec: &PaddleSpec, side: Side, arena: &Arena) -> Result<Paddle, MatchError> {
    let invalid = |reason: String| MatchError::InvalidPaddle {
        side: side.as_str(),
        reason,
    };
    let positive = |v: f32| v.is_finite() && v > 0.0;

    if !positive(spec.width) || !positive(spec.height) {
        return Err(invalid(format!(
            "size {}x{} must be positive",
            spec.width, spec.height
        )));
    }
    if !positive(spec.speed) {
        return Err(invalid(format!("speed {} must be positive", spec.speed)));
    }
    if spec.height > arena.height {
        return Err(invalid(format!(
            "height {} exceeds arena height {}",
            spec.height, arena.height
        )));
    }

    let x = match side {
        Side::Left => arena.left + spec.inset,
        Side::Right => arena.right() - spec.inset - spec.width,
    };
    let y = arena.top + arena.height / 2.0 - spec.height / 2.0;

    Ok(Paddle {
        pos: Vec2::new(x, y),
        width: spec.width,
        height: spec.height,
        speed: spec.speed,
        role: spec.role,
        side,
        patrol_dir: 1.0,
        color: spec.color,
    })
}
