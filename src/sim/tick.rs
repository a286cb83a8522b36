//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame.

use super::geometry::exceeds_bottom;
use super::input::Direction;
use super::state::{GameEvent, GameState};

/// Outcome of a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Score after the tick
    pub score: u64,
}

impl TickReport {
    /// Number of blocks destroyed this tick
    pub fn blocks_destroyed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::BlockDestroyed { .. }))
            .count()
    }

    pub fn missed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::Miss { .. }))
    }
}

/// Advance the game state by one tick, steering the paddle with `direction`
pub fn tick(state: &mut GameState, direction: Direction) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    // Paddle first so the ball sees its new position
    state.paddle.set_direction(direction);
    state.paddle.tick(state.config.arena_width);

    let arena = state.config.arena_size();
    let collisions = state.ball.tick(&state.paddle, &mut state.grid, arena);

    if collisions.side_wall || collisions.top_bottom_wall {
        report.events.push(GameEvent::WallBounce);
    }
    if collisions.paddle {
        report.events.push(GameEvent::PaddleHit);
    }
    for block in collisions.blocks {
        let cleared = state.increase_score();
        log::debug!("Block ({}, {}) destroyed, score {}", block.column, block.row, state.score);
        report.events.push(GameEvent::BlockDestroyed {
            block,
            score: state.score,
        });
        if cleared {
            report.events.push(GameEvent::GridCleared { score: state.score });
        }
    }

    if exceeds_bottom(&state.ball.circle(), arena) {
        let lost_score = state.reset_after_miss();
        report.events.push(GameEvent::Miss { lost_score });
    }

    report.score = state.score;
    log::trace!(
        "Tick {}: ball ({:.1}, {:.1}) score {}",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.score
    );
    report
}

impl GameState {
    /// Advance one tick using the latched input direction
    pub fn tick(&mut self) -> TickReport {
        let direction = self.direction();
        tick(self, direction)
    }

    /// Advance one tick with an explicit direction, bypassing the latch
    pub fn tick_with(&mut self, direction: Direction) -> TickReport {
        tick(self, direction)
    }
}
