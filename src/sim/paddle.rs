//! Paddle entity and its motion policies
//!
//! A paddle is driven one of three ways: by explicit up/down commands, by
//! a deterministic top-to-bottom patrol, or by predicting where the next
//! inbound ball will arrive and racing there.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Side};
use super::ball::Ball;
use super::predict::find_intercept;
use crate::consts::{AI_DEAD_ZONE, AI_SPEED_MULTIPLIER};

/// How a paddle decides where to move each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddleRole {
    /// Follows the player's directional command
    #[default]
    Manual,
    /// Sweeps between the walls
    Patrol,
    /// Intercepts the most imminent inbound ball, patrols when none
    Predictive,
}

/// Directional intent for a manual paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleCommand {
    #[default]
    Idle,
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Base movement per tick
    pub speed: f32,
    pub role: PaddleRole,
    pub side: Side,
    /// Patrol direction: +1 down, -1 up
    pub patrol_dir: f32,
    /// RGB color for the renderer (0xRRGGBB)
    pub color: u32,
}

impl Paddle {
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// X of the edge that faces the arena interior
    #[inline]
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.pos.x + self.width,
            Side::Right => self.pos.x,
        }
    }

    /// Whether `y` lies within the paddle's vertical span (inclusive)
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y >= self.pos.y && y <= self.pos.y + self.height
    }

    /// Where along the paddle `y` falls: 0 at the top, 1 at the bottom
    #[inline]
    pub fn hit_fraction(&self, y: f32) -> f32 {
        (y - self.pos.y) / self.height
    }

    /// Run this tick's motion policy
    pub fn update(&mut self, command: PaddleCommand, balls: &[Ball], arena: &Arena) {
        match self.role {
            PaddleRole::Manual => self.move_manual(command, arena),
            PaddleRole::Patrol => self.patrol(arena),
            PaddleRole::Predictive => self.defend_predictively(balls, arena),
        }
    }

    /// Step by `speed` in the commanded direction, stopping flush with the wall
    pub fn move_manual(&mut self, command: PaddleCommand, arena: &Arena) {
        match command {
            PaddleCommand::Idle => {}
            PaddleCommand::Up => self.step(-self.speed, arena),
            PaddleCommand::Down => self.step(self.speed, arena),
        }
    }

    /// Sweep by `speed` each tick, snapping to and turning at each wall
    pub fn patrol(&mut self, arena: &Arena) {
        self.pos.y += self.speed * self.patrol_dir;

        if self.pos.y <= arena.top {
            self.pos.y = arena.top;
            self.patrol_dir = 1.0;
        }
        if self.pos.y + self.height >= arena.bottom() {
            self.pos.y = arena.bottom() - self.height;
            self.patrol_dir = -1.0;
        }
    }

    /// Move toward where the most imminent inbound ball will cross this
    /// paddle's face, at `speed * AI_SPEED_MULTIPLIER`. Patrols when no
    /// ball is inbound.
    pub fn defend_predictively(&mut self, balls: &[Ball], arena: &Arena) {
        match find_intercept(balls, self.side, self.face_x(), arena) {
            Some(intercept) => self.steer_toward(intercept.y, arena),
            None => self.patrol(arena),
        }
    }

    fn steer_toward(&mut self, target_y: f32, arena: &Arena) {
        let center = self.center_y();
        if (center - target_y).abs() <= AI_DEAD_ZONE {
            return;
        }
        let step = self.speed * AI_SPEED_MULTIPLIER;
        if center > target_y {
            self.step(-step, arena);
        } else {
            self.step(step, arena);
        }
    }

    fn step(&mut self, dy: f32, arena: &Arena) {
        self.pos.y = arena.clamp_span(self.pos.y + dy, self.height);
    }
}
