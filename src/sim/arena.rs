//! Arena bounds
//!
//! Axis-aligned rectangle the balls travel in. Fixed for a match's lifetime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Which half of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of horizontal velocity pointing at this side
    #[inline]
    pub fn inbound_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Build an arena, rejecting non-positive or non-finite dimensions
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, MatchError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) || !left.is_finite() || !top.is_finite() {
            return Err(MatchError::InvalidArena { width, height });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Clamp a top coordinate so a span of `extent` stays inside the arena
    #[inline]
    pub fn clamp_span(&self, top: f32, extent: f32) -> f32 {
        top.max(self.top).min(self.bottom() - extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_rejects_bad_dimensions() {
        assert!(Arena::new(0.0, 0.0, 0.0, 100.0).is_err());
        assert!(Arena::new(0.0, 0.0, 100.0, -1.0).is_err());
        assert!(Arena::new(0.0, 0.0, f32::NAN, 100.0).is_err());
        assert!(Arena::new(0.0, 0.0, 100.0, 100.0).is_ok());
    }

    #[test]
    fn test_arena_edges_and_center() {
        let arena = Arena::new(50.0, 50.0, 700.0, 500.0).unwrap();
        assert_eq!(arena.right(), 750.0);
        assert_eq!(arena.bottom(), 550.0);
        assert_eq!(arena.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_clamp_span() {
        let arena = Arena::new(0.0, 10.0, 100.0, 100.0).unwrap();
        assert_eq!(arena.clamp_span(0.0, 20.0), 10.0);
        assert_eq!(arena.clamp_span(105.0, 20.0), 90.0);
        assert_eq!(arena.clamp_span(40.0, 20.0), 40.0);
    }
}
