//! Demo autopilot
//!
//! Plays the game for attract mode and the headless runner: steer the
//! paddle under the point where the falling ball will cross the paddle line.

use crate::sim::{Direction, GameState};

/// Horizontal slack before the paddle starts chasing (pixels)
const DEAD_ZONE: f32 = 6.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Shifts the aim point along the paddle so rebounds do not loop forever
    pub aim_offset: f32,
}

impl Autopilot {
    pub fn new(aim_offset: f32) -> Self {
        Self { aim_offset }
    }

    /// Pick a direction from the current session state
    pub fn steer(&self, state: &GameState) -> Direction {
        let paddle_center = state.paddle.pos.x + state.paddle.size.x / 2.0 + self.aim_offset;
        let target = self.predict_landing_x(state);
        let delta = target - paddle_center;

        if delta > DEAD_ZONE {
            Direction::Right
        } else if delta < -DEAD_ZONE {
            Direction::Left
        } else {
            Direction::None
        }
    }

    /// Where the ball will cross the paddle's top edge, folding side-wall
    /// bounces back into the arena. Rising balls are tracked directly.
    fn predict_landing_x(&self, state: &GameState) -> f32 {
        let ball = &state.ball;
        if ball.vel.y <= 0.0 {
            return ball.pos.x;
        }

        let ticks = ((state.paddle.pos.y - ball.radius - ball.pos.y) / ball.vel.y).max(0.0);
        let raw_x = ball.pos.x + ball.vel.x * ticks;

        let lo = ball.radius;
        let hi = (state.config.arena_width - ball.radius).max(lo);
        let span = hi - lo;
        if span <= 0.0 {
            return lo;
        }

        // Reflect into [lo, hi]
        let period = 2.0 * span;
        let t = (raw_x - lo).rem_euclid(period);
        if t <= span { lo + t } else { hi - (t - span) }
    }
}
