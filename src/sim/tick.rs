//! Simulation tick
//!
//! Advances the match by exactly one step: ball flight, paddle
//! deflections, scoring, then paddle motion.

use serde::{Deserialize, Serialize};

use super::arena::Side;
use super::ball::Ball;
use super::paddle::{Paddle, PaddleCommand};
use super::rng::RandomSource;
use super::state::{MatchEvent, MatchState};
use crate::consts::DEFLECTION_FACTOR;

/// Held-key state captured by the input layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub up: bool,
    pub down: bool,
}

impl InputFlags {
    /// Both keys held cancel out
    pub fn command(&self) -> PaddleCommand {
        match (self.up, self.down) {
            (true, false) => PaddleCommand::Up,
            (false, true) => PaddleCommand::Down,
            _ => PaddleCommand::Idle,
        }
    }
}

/// Input commands for a single tick. Only manual paddles read theirs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleCommand,
    pub right: PaddleCommand,
}

impl TickInput {
    /// Command for the left (player) paddle only
    pub fn player(command: PaddleCommand) -> Self {
        Self {
            left: command,
            right: PaddleCommand::Idle,
        }
    }

    pub fn from_flags(left: InputFlags, right: InputFlags) -> Self {
        Self {
            left: left.command(),
            right: right.command(),
        }
    }
}

/// Advance the match by one tick
pub fn tick(state: &mut MatchState, input: &TickInput, rng: &mut impl RandomSource) {
    state.events.clear();
    state.ticks += 1;

    let arena = state.arena;

    for (index, ball) in state.balls.iter_mut().enumerate() {
        ball.advance(&arena);

        for paddle in [&state.left, &state.right] {
            if deflect(ball, paddle) {
                log::trace!("Ball #{index} deflected by {} paddle", paddle.side.as_str());
                state.events.push(MatchEvent::PaddleHit {
                    side: paddle.side,
                    ball: index,
                });
            }
        }

        let scorer = if ball.left_edge() <= arena.left {
            state.score.opponent += 1;
            Some(Side::Right)
        } else if ball.right_edge() >= arena.right() {
            state.score.player += 1;
            Some(Side::Left)
        } else {
            None
        };

        if let Some(scorer) = scorer {
            ball.reset_to_center(&arena, rng);
            state.events.push(MatchEvent::Scored { scorer, ball: index });
            log::debug!(
                "Ball #{index} scored for {} ({} - {})",
                scorer.as_str(),
                state.score.player,
                state.score.opponent
            );
        }
    }

    state.left.update(input.left, &state.balls, &arena);
    state.right.update(input.right, &state.balls, &arena);
}

/// Bounce `ball` off `paddle` if its leading edge has crossed the paddle
/// face while its center is within the paddle's span.
///
/// The ball is sent away from the paddle, placed flush against the face,
/// and gets extra vertical velocity proportional to how far from the
/// paddle's middle it struck. Speed is not renormalized.
pub fn deflect(ball: &mut Ball, paddle: &Paddle) -> bool {
    let face = paddle.face_x();
    let crossed = match paddle.side {
        Side::Left => ball.left_edge() <= face,
        Side::Right => ball.right_edge() >= face,
    };
    if !crossed || !paddle.spans(ball.pos.y) {
        return false;
    }

    match paddle.side {
        Side::Left => {
            ball.vel.x = ball.vel.x.abs();
            ball.pos.x = face + ball.radius;
        }
        Side::Right => {
            ball.vel.x = -ball.vel.x.abs();
            ball.pos.x = face - ball.radius;
        }
    }
    ball.vel.y += (paddle.hit_fraction(ball.pos.y) - 0.5) * DEFLECTION_FACTOR;
    true
}
