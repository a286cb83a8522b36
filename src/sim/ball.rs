//! The ball and its per-tick collision resolution

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{
    Circle, circle_intersects_rect, circle_over_rect_top, exceeds_side_walls,
    exceeds_top_or_bottom,
};
use super::grid::{BlockGrid, BlockId};
use super::paddle::Paddle;
use crate::config::GameConfig;

/// Everything the ball touched during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionEvents {
    pub side_wall: bool,
    /// Also set when the ball crosses the bottom wall on a miss
    pub top_bottom_wall: bool,
    pub paddle: bool,
    /// Blocks hidden this tick, in grid iteration order
    pub blocks: Vec<BlockId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Vertical speed after a paddle rebound
    pub speed: f32,
}

impl Ball {
    /// Spawn at arena center with the configured start velocity
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_spawn(),
            vel: config.ball_start_velocity(),
            radius: config.ball_radius,
            speed: config.ball_speed,
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Put the ball back at arena center with the start velocity
    pub fn respawn(&mut self, config: &GameConfig) {
        self.pos = config.ball_spawn();
        self.vel = config.ball_start_velocity();
    }

    /// Move one step, then resolve walls, paddle and blocks in that order.
    ///
    /// Every check runs each tick; a ball can bounce off a wall and break a
    /// block in the same step. Each block hit flips `vel.y` on its own, so two
    /// blocks hit together cancel out vertically.
    pub fn tick(&mut self, paddle: &Paddle, grid: &mut BlockGrid, arena: Vec2) -> CollisionEvents {
        let mut events = CollisionEvents::default();

        self.pos += self.vel;
        let circle = self.circle();

        if exceeds_side_walls(&circle, arena) {
            self.vel.x = -self.vel.x;
            events.side_wall = true;
        }

        // Fires at the bottom too; the session decides whether it was a miss
        if exceeds_top_or_bottom(&circle, arena) {
            self.vel.y = -self.vel.y;
            events.top_bottom_wall = true;
        }

        if circle_over_rect_top(&circle, &paddle.rect()) {
            self.vel.y = -self.speed;
            events.paddle = true;
        }

        grid.for_each_visible(|block| {
            if circle_intersects_rect(&circle, &block.rect) {
                events.blocks.push(block.id);
            }
        });
        for &id in &events.blocks {
            self.vel.y = -self.vel.y;
            grid.hide(id);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameConfig, Ball, Paddle, BlockGrid) {
        let config = GameConfig::default();
        let ball = Ball::new(&config);
        let paddle = Paddle::new(&config);
        let grid = BlockGrid::from_config(&config);
        (config, ball, paddle, grid)
    }

    #[test]
    fn test_moves_by_velocity_in_open_space() {
        let (config, mut ball, paddle, mut grid) = setup();
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert_eq!(ball.pos, Vec2::new(404.0, 296.0));
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
        assert_eq!(events, CollisionEvents::default());
    }

    #[test]
    fn test_side_wall_reflects_dx() {
        let (config, mut ball, paddle, mut grid) = setup();
        ball.pos = Vec2::new(790.0, 400.0);
        ball.vel = Vec2::new(4.0, 4.0);
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert!(events.side_wall);
        assert_eq!(ball.vel.x, -4.0);
        assert_eq!(ball.vel.y, 4.0);

        ball.pos = Vec2::new(10.0, 400.0);
        ball.vel = Vec2::new(-4.0, 4.0);
        ball.tick(&paddle, &mut grid, config.arena_size());
        assert_eq!(ball.vel.x, 4.0);
    }

    #[test]
    fn test_top_wall_reflects_dy() {
        let (config, mut ball, paddle, mut grid) = setup();
        ball.pos = Vec2::new(20.0, 10.0);
        ball.vel = Vec2::new(4.0, -4.0);
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert!(events.top_bottom_wall);
        assert_eq!(ball.vel.y, 4.0);
    }

    #[test]
    fn test_bottom_wall_reflects_even_on_miss() {
        let (config, mut ball, paddle, mut grid) = setup();
        ball.pos = Vec2::new(100.0, 590.0);
        ball.vel = Vec2::new(4.0, 4.0);
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert!(events.top_bottom_wall);
        assert!(!events.paddle);
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn test_paddle_sets_exact_rebound_speed() {
        let (config, mut ball, paddle, mut grid) = setup();
        ball.pos = Vec2::new(400.0, 558.0);
        ball.vel = Vec2::new(-3.0, 6.0);
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert!(events.paddle);
        assert_eq!(ball.vel.y, -config.ball_speed);
        assert_eq!(ball.vel.x, -3.0);
    }

    #[test]
    fn test_block_hit_hides_and_flips() {
        let (config, mut ball, paddle, mut grid) = setup();
        // Below block (0,5) (y 230..254), moving up into it
        ball.pos = Vec2::new(80.0, 265.0);
        ball.vel = Vec2::new(0.0, -4.0);
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert_eq!(events.blocks, vec![BlockId::new(0, 5)]);
        assert!(!grid.get(0, 5).unwrap().visible);
        assert_eq!(ball.vel.y, 4.0);
        assert_eq!(grid.visible_count(), 53);
    }

    #[test]
    fn test_hidden_block_is_not_hit_again() {
        let (config, mut ball, paddle, mut grid) = setup();
        grid.hide(BlockId::new(0, 5));
        ball.pos = Vec2::new(80.0, 265.0);
        ball.vel = Vec2::new(0.0, -4.0);
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert!(events.blocks.is_empty());
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn test_two_blocks_in_one_tick_both_count() {
        // A tall ball spanning the padding between two rows
        let (config, mut ball, paddle, mut grid) = setup();
        ball.radius = 12.0;
        ball.pos = Vec2::new(80.0, 93.0);
        ball.vel = Vec2::new(0.0, -4.0);
        let events = ball.tick(&paddle, &mut grid, config.arena_size());
        assert_eq!(events.blocks, vec![BlockId::new(0, 0), BlockId::new(0, 1)]);
        // Flipped twice
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn test_respawn() {
        let (config, mut ball, _, _) = setup();
        ball.pos = Vec2::new(12.0, 640.0);
        ball.vel = Vec2::new(-4.0, 4.0);
        ball.respawn(&config);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }
}
