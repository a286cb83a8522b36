//! The player's paddle
//!
//! Moves horizontally only. Walls stop it; it never bounces.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::input::Direction;
use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes after spawn
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity: one of -speed, 0, +speed
    pub dx: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.paddle_spawn(),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            dx: 0.0,
            speed: config.paddle_speed,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.dx = direction.sign() * self.speed;
    }

    /// Advance one tick, clamped to `[0, arena_width - width]`
    pub fn tick(&mut self, arena_width: f32) {
        let max_x = (arena_width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + self.dx).clamp(0.0, max_x);
    }
}
