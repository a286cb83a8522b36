//! Block Breaker - A single-screen block breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `scene`: Per-frame scene snapshot and the render sink seam
//! - `renderer`: CPU tessellation of scenes into GPU-ready vertices
//! - `runner`: Fixed timestep frame loop
//! - `config`: Arena, block, ball and paddle constants
//! - `ui`: Rules overlay panel
//! - `autopilot`: Demo controller that plays the game

pub mod autopilot;
pub mod config;
pub mod renderer;
pub mod runner;
pub mod scene;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use scene::{RenderSink, Scene};
pub use sim::{Direction, GameState, InputEvent};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta accepted by the frame loop (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Block grid layout
    pub const BLOCK_COLUMNS: usize = 9;
    pub const BLOCK_ROWS: usize = 6;
    pub const BLOCK_WIDTH: f32 = 70.0;
    pub const BLOCK_HEIGHT: f32 = 24.0;
    pub const BLOCK_PADDING: f32 = 10.0;
    pub const BLOCK_OFFSET_X: f32 = 45.0;
    pub const BLOCK_OFFSET_Y: f32 = 60.0;

    /// Ball defaults - spawns at arena center heading up and right
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 4.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 8.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the paddle's top edge to the arena bottom
    pub const PADDLE_BOTTOM_GAP: f32 = 32.0;
}
