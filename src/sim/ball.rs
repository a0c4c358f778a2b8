//! Ball entity: kinematics and wall reflection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::predict::Kinematics;
use super::rng::RandomSource;
use crate::consts::*;
use crate::lerp_range;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// RGB color for the renderer (0xRRGGBB)
    pub color: u32,
    /// Spin indicator angle (visual only)
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Ball {
    /// Create a ball with a freshly drawn velocity and spin
    pub fn spawn(pos: Vec2, radius: f32, color: u32, rng: &mut impl RandomSource) -> Self {
        let vel = random_velocity(rng);
        let rotation_speed = lerp_range(rng.next_unit(), BALL_MIN_SPIN, BALL_MAX_SPIN);
        Self {
            pos,
            vel,
            radius,
            color,
            rotation: 0.0,
            rotation_speed,
        }
    }

    /// Move by one tick of velocity and bounce off the top/bottom walls.
    ///
    /// Position is not corrected: a ball may sit up to one tick's
    /// displacement inside a wall before it travels back out.
    pub fn advance(&mut self, arena: &Arena) {
        self.pos += self.vel;
        self.rotation += self.rotation_speed;

        if self.pos.y - self.radius <= arena.top || self.pos.y + self.radius >= arena.bottom() {
            self.vel.y = -self.vel.y;
        }
    }

    /// Re-serve from the arena center with a fresh velocity
    pub fn reset_to_center(&mut self, arena: &Arena, rng: &mut impl RandomSource) {
        self.pos = arena.center();
        self.vel = random_velocity(rng);
    }

    #[inline]
    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Read-only snapshot for the trajectory predictor
    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            pos: self.pos,
            vel: self.vel,
            radius: self.radius,
        }
    }
}

/// Both components drawn from `[BALL_MIN_SPEED, BALL_MAX_SPEED)` with an
/// independent random sign, x first.
pub fn random_velocity(rng: &mut impl RandomSource) -> Vec2 {
    let x = random_component(rng);
    let y = random_component(rng);
    Vec2::new(x, y)
}

fn random_component(rng: &mut impl RandomSource) -> f32 {
    let magnitude = lerp_range(rng.next_unit(), BALL_MIN_SPEED, BALL_MAX_SPEED);
    if rng.next_unit() > 0.5 {
        magnitude
    } else {
        -magnitude
    }
}
