//! Trajectory prediction
//!
//! Pure functions over borrowed ball snapshots: pick the most imminent
//! threat for a paddle and walk its vertical motion forward through any
//! number of wall bounces to find where it will meet the paddle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Side};
use super::ball::Ball;
use crate::consts::PREDICTION_FUEL;

/// Kinematic snapshot of a ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Predicted meeting of a ball with a paddle's facing edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    /// Index of the ball in the match roster
    pub ball: usize,
    /// Ticks until the leading edge reaches the paddle face
    pub time: f32,
    /// Ball center y at that moment
    pub y: f32,
}

/// Ticks until the ball's leading edge reaches `face_x`.
///
/// Zero horizontal speed means the ball never arrives (`f32::INFINITY`).
pub fn time_to_arrival(k: &Kinematics, side: Side, face_x: f32) -> f32 {
    if k.vel.x == 0.0 {
        return f32::INFINITY;
    }
    let distance = match side {
        Side::Left => (k.pos.x - k.radius) - face_x,
        Side::Right => face_x - (k.pos.x + k.radius),
    };
    (distance / k.vel.x).abs()
}

/// Ticks until the ball center reaches the wall it is heading for.
/// `low`/`high` are the radius-adjusted wall lines.
fn time_to_wall(y: f32, vy: f32, low: f32, high: f32) -> f32 {
    if vy > 0.0 {
        (high - y) / vy
    } else if vy < 0.0 {
        (low - y) / vy
    } else {
        f32::INFINITY
    }
}

/// Ball center y after `time` ticks, reflecting off the top and bottom
/// walls as many times as the flight takes.
///
/// Walks the flight one wall segment at a time: if the next wall is at
/// least `time` away the ball flies straight, otherwise it is moved onto
/// the wall, its vertical velocity flipped, and the loop continues with
/// the remaining time.
pub fn predict_y(k: &Kinematics, arena: &Arena, time: f32) -> f32 {
    let low = arena.top + k.radius;
    let high = arena.bottom() - k.radius;

    let mut y = k.pos.y;
    let mut vy = k.vel.y;
    let mut remaining = time;

    for _ in 0..PREDICTION_FUEL {
        if remaining <= 0.0 {
            return y;
        }
        let to_wall = time_to_wall(y, vy, low, high);
        if to_wall >= remaining {
            return if vy == 0.0 { y } else { y + vy * remaining };
        }
        y += vy * to_wall;
        vy = -vy;
        remaining -= to_wall;
    }

    log::warn!(
        "bounce prediction ran out of fuel (y={y}, vy={vy}, remaining={remaining})"
    );
    y.max(low.min(high)).min(high.max(low))
}

/// Most imminent ball heading toward `side`, if any.
///
/// Ties keep the earliest ball in roster order. Balls that would never
/// arrive are ignored.
pub fn find_threat(balls: &[Ball], side: Side, face_x: f32) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, ball) in balls.iter().enumerate() {
        if ball.vel.x * side.inbound_sign() <= 0.0 {
            continue;
        }
        let time = time_to_arrival(&ball.kinematics(), side, face_x);
        if !time.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, t)| time < t) {
            best = Some((index, time));
        }
    }
    best
}

/// Where the most imminent inbound ball will meet the paddle face
pub fn find_intercept(balls: &[Ball], side: Side, face_x: f32, arena: &Arena) -> Option<Intercept> {
    let (index, time) = find_threat(balls, side, face_x)?;
    let y = predict_y(&balls[index].kinematics(), arena, time);
    Some(Intercept {
        ball: index,
        time,
        y,
    })
}
