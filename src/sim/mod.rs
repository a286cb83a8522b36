//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Stable iteration order (column-major over the block grid)
//! - No rendering or platform dependencies

pub mod ball;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, CollisionEvents};
pub use geometry::{Circle, Rect, circle_intersects_rect, circle_over_rect_top};
pub use grid::{Block, BlockGrid, BlockId, GridLayout};
pub use input::{Direction, InputEvent, InputLatch};
pub use paddle::Paddle;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickReport, tick};
