//! Game state and core simulation types
//!
//! A session owns every piece of mutable state. Nothing here is persisted;
//! a restart starts from a fresh `GameState`.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::grid::{BlockGrid, BlockId};
use super::input::{Direction, InputEvent, InputLatch};
use super::paddle::Paddle;
use crate::config::{ConfigError, GameConfig};

/// Current phase of gameplay
///
/// A miss is not a phase of its own: the reset happens inside the tick that
/// detects it and is reported as [`GameEvent::Miss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side, top or bottom wall
    WallBounce,
    /// Ball rebounded off the paddle
    PaddleHit,
    /// A block was hidden; `score` is the score after counting it
    BlockDestroyed { block: BlockId, score: u64 },
    /// Every block was cleared and the grid refilled
    GridCleared { score: u64 },
    /// Ball passed the bottom wall; score and blocks were reset
    Miss { lost_score: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Constants fixed for this session
    pub config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BlockGrid,
    /// Blocks hidden since the last miss
    pub score: u64,
    /// Highest score reached since the process started
    pub best_score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Latched input; written by `handle_input`, read at tick start
    input: InputLatch,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// Create a fresh session. The config is trusted; see [`GameState::try_new`].
    pub fn new(config: GameConfig) -> Self {
        log::info!(
            "New session: {}x{} arena, {}x{} blocks",
            config.arena_width,
            config.arena_height,
            config.block_columns,
            config.block_rows
        );

        Self {
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            grid: BlockGrid::from_config(&config),
            score: 0,
            best_score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            input: InputLatch::default(),
            config,
        }
    }

    /// Validate the config, then create a session
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Apply a press/release event to the latched direction
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.apply(event);
        log::trace!("Input {:?} -> {:?}", event, self.input.direction());
    }

    /// Direction the next tick will use
    #[inline]
    pub fn direction(&self) -> Direction {
        self.input.direction()
    }

    /// Count one destroyed block. Returns true if that cleared the grid, in
    /// which case every block is visible again.
    pub fn increase_score(&mut self) -> bool {
        self.score += 1;
        self.best_score = self.best_score.max(self.score);

        let block_count = self.grid.len() as u64;
        if block_count > 0 && self.score % block_count == 0 {
            log::debug!("Grid cleared at score {}", self.score);
            self.grid.reset_all();
            return true;
        }
        false
    }

    /// Reset after a miss: blocks refill, score drops to zero, ball respawns.
    /// Returns the score that was lost.
    pub fn reset_after_miss(&mut self) -> u64 {
        let lost = self.score;
        self.grid.reset_all();
        self.score = 0;
        self.ball.respawn(&self.config);
        log::info!("Missed the ball (score {} lost)", lost);
        lost
    }
}
