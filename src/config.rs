//! Match layout configuration
//!
//! Describes where things start: the arena rectangle, the ball roster and
//! the two paddles. Rule constants live in [`crate::consts`] and are not
//! configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::sim::PaddleRole;

/// One ball in the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    /// Spawn height as a fraction of the arena (0 = top, 1 = bottom).
    /// Balls always spawn on the vertical center line.
    pub spawn_y: f32,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
}

impl BallSpec {
    pub const fn new(spawn_y: f32, radius: f32, color: u32) -> Self {
        Self {
            spawn_y,
            radius,
            color,
        }
    }
}

/// One paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleSpec {
    pub width: f32,
    pub height: f32,
    /// Base movement per tick
    pub speed: f32,
    /// Gap between the arena side and the paddle's outer edge
    pub inset: f32,
    pub role: PaddleRole,
    /// 0xRRGGBB
    pub color: u32,
}

/// Full match layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub arena_left: f32,
    pub arena_top: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub balls: Vec<BallSpec>,
    pub left_paddle: PaddleSpec,
    pub right_paddle: PaddleSpec,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            // 800x600 surface with a 50 unit margin
            arena_left: 50.0,
            arena_top: 50.0,
            arena_width: 700.0,
            arena_height: 500.0,

            balls: vec![
                BallSpec::new(0.5, 15.0, 0x00ffff),  // cyan
                BallSpec::new(0.3, 12.0, 0xff00ff),  // magenta
                BallSpec::new(0.7, 8.0, 0xffff00),   // yellow
                BallSpec::new(0.8, 6.0, 0x00ff00),   // lime
                BallSpec::new(0.9, 10.0, 0xffa500),  // orange
                BallSpec::new(0.2, 5.0, 0xffc0cb),   // pink
                BallSpec::new(0.75, 7.0, 0xadd8e6),  // light blue
                BallSpec::new(0.55, 9.0, 0xffd700),  // gold
            ],

            left_paddle: PaddleSpec {
                width: 12.0,
                height: 200.0,
                speed: 6.0,
                inset: 5.0,
                role: PaddleRole::Manual,
                color: 0x008000,
            },
            right_paddle: PaddleSpec {
                width: 12.0,
                height: 100.0,
                speed: 10.0,
                inset: 5.0,
                role: PaddleRole::Predictive,
                color: 0xff0000,
            },
        }
    }
}

impl MatchConfig {
    /// Parse a layout from JSON; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        let config = serde_json::from_str(json)?;
        log::debug!("Parsed match config: {config:?}");
        Ok(config)
    }

    /// Load a layout from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MatchError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("Loading match config from {}", path.display());
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, MatchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = MatchConfig::default();
        assert_eq!(config.balls.len(), 8);
        assert_eq!(config.left_paddle.role, PaddleRole::Manual);
        assert_eq!(config.right_paddle.role, PaddleRole::Predictive);
        // Every default ball spawns clear of both walls
        for ball in &config.balls {
            let y = config.arena_top + ball.spawn_y * config.arena_height;
            assert!(y - ball.radius > config.arena_top);
            assert!(y + ball.radius < config.arena_top + config.arena_height);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MatchConfig::from_json(r#"{ "arena_width": 300.0 }"#).unwrap();
        assert_eq!(config.arena_width, 300.0);
        assert_eq!(config.arena_height, 500.0);
        assert_eq!(config.balls.len(), 8);
    }

    #[test]
    fn test_role_names_in_json() {
        let json = r#"{
            "balls": [{ "spawn_y": 0.5, "radius": 4.0, "color": 255 }],
            "right_paddle": {
                "width": 10.0, "height": 80.0, "speed": 4.0,
                "inset": 2.0, "role": "patrol", "color": 0
            }
        }"#;
        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.balls.len(), 1);
        assert_eq!(config.right_paddle.role, PaddleRole::Patrol);
        assert_eq!(config.left_paddle.role, PaddleRole::Manual);
    }

    #[test]
    fn test_json_roundtrip_and_errors() {
        let config = MatchConfig::default();
        let back = MatchConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);

        assert!(matches!(
            MatchConfig::from_json("{ not json"),
            Err(MatchError::Config(_))
        ));
        assert!(matches!(
            MatchConfig::load("/definitely/not/here.json"),
            Err(MatchError::Io(_))
        ));
    }
}
