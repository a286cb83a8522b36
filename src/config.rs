//! Game configuration
//!
//! Every constant is fixed when a session is created. Defaults come from
//! [`crate::consts`]; a JSON document may override any subset of them.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug)]
pub enum ConfigError {
    /// A size, speed or radius that must be strictly positive is not
    NonPositive { field: &'static str, value: f32 },
    /// The block grid has no columns or no rows
    EmptyGrid { columns: usize, rows: usize },
    /// The paddle does not fit between the side walls
    PaddleTooWide { paddle_width: f32, arena_width: f32 },
    /// A padding, offset or gap that must not be negative is
    Negative { field: &'static str, value: f32 },
    /// The laid-out block grid extends past the arena
    GridOutOfArena { right: f32, bottom: f32 },
    /// The paddle's top edge sits above the top wall
    PaddleOutOfArena { bottom_gap: f32, arena_height: f32 },
    /// The JSON document could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::EmptyGrid { columns, rows } => {
                write!(f, "block grid must not be empty: {columns}x{rows}")
            }
            Self::PaddleTooWide {
                paddle_width,
                arena_width,
            } => write!(
                f,
                "paddle width {paddle_width} does not fit arena width {arena_width}"
            ),
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::GridOutOfArena { right, bottom } => write!(
                f,
                "block grid extends past the arena (right={right}, bottom={bottom})"
            ),
            Self::PaddleOutOfArena {
                bottom_gap,
                arena_height,
            } => write!(
                f,
                "paddle bottom gap {bottom_gap} puts the paddle above arena height {arena_height}"
            ),
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Arena, block grid, ball and paddle constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Block grid ===
    pub block_columns: usize,
    pub block_rows: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub block_padding: f32,
    pub block_offset_x: f32,
    pub block_offset_y: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Magnitude of the upward rebound off the paddle
    pub ball_speed: f32,
    pub ball_start_dx: f32,
    pub ball_start_dy: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_gap: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            block_columns: BLOCK_COLUMNS,
            block_rows: BLOCK_ROWS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_padding: BLOCK_PADDING,
            block_offset_x: BLOCK_OFFSET_X,
            block_offset_y: BLOCK_OFFSET_Y,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_start_dx: BALL_START_DX,
            ball_start_dy: BALL_START_DY,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check that the layout is playable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
        ];
        for (field, value) in positive {
            // Written as a negation so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("block_padding", self.block_padding),
            ("block_offset_x", self.block_offset_x),
            ("block_offset_y", self.block_offset_y),
            ("paddle_bottom_gap", self.paddle_bottom_gap),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.block_columns == 0 || self.block_rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.block_columns,
                rows: self.block_rows,
            });
        }

        if self.paddle_width > self.arena_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                arena_width: self.arena_width,
            });
        }

        let far = self.block_origin(self.block_columns - 1, self.block_rows - 1)
            + self.block_size();
        if far.x > self.arena_width || far.y > self.arena_height {
            return Err(ConfigError::GridOutOfArena {
                right: far.x,
                bottom: far.y,
            });
        }

        if self.paddle_bottom_gap > self.arena_height {
            return Err(ConfigError::PaddleOutOfArena {
                bottom_gap: self.paddle_bottom_gap,
                arena_height: self.arena_height,
            });
        }

        Ok(())
    }

    /// Arena extent as a vector
    #[inline]
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Shared block extent
    #[inline]
    pub fn block_size(&self) -> Vec2 {
        Vec2::new(self.block_width, self.block_height)
    }

    /// Top-left corner of the first block
    #[inline]
    pub fn block_offset(&self) -> Vec2 {
        Vec2::new(self.block_offset_x, self.block_offset_y)
    }

    /// Top-left corner of block (column, row)
    pub fn block_origin(&self, column: usize, row: usize) -> Vec2 {
        let pitch = self.block_size() + Vec2::splat(self.block_padding);
        Vec2::new(column as f32 * pitch.x, row as f32 * pitch.y) + self.block_offset()
    }

    /// Ball spawn point (arena center)
    #[inline]
    pub fn ball_spawn(&self) -> Vec2 {
        self.arena_size() / 2.0
    }

    /// Ball velocity at spawn
    #[inline]
    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_start_dx, self.ball_start_dy)
    }

    /// Paddle starting top-left corner, centered horizontally
    pub fn paddle_spawn(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.paddle_width / 2.0,
            self.arena_height - self.paddle_bottom_gap,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_columns * config.block_rows, 54);
    }

    #[test]
    fn test_default_layout_matches_arcade_board() {
        let config = GameConfig::default();
        assert_eq!(config.block_origin(0, 0), Vec2::new(45.0, 60.0));
        assert_eq!(config.block_origin(1, 0), Vec2::new(125.0, 60.0));
        assert_eq!(config.block_origin(0, 1), Vec2::new(45.0, 94.0));
        assert_eq!(config.paddle_spawn(), Vec2::new(360.0, 568.0));
        assert_eq!(config.ball_spawn(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "paddle_speed": 6.0 }"#).unwrap();
        assert_eq!(config.paddle_speed, 6.0);
        assert_eq!(config.block_columns, BLOCK_COLUMNS);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::default();
        let parsed = GameConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = GameConfig::from_json(r#"{ "ball_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "ball_radius",
                ..
            }
        ));

        let err = GameConfig::from_json(r#"{ "block_rows": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGrid { .. }));

        let err = GameConfig::from_json(r#"{ "paddle_width": 900.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::PaddleTooWide { .. }));

        let err = GameConfig::from_json(r#"{ "block_columns": 12 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::GridOutOfArena { .. }));

        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[test]
    fn test_rejects_layout_outside_arena() {
        let err = GameConfig::from_json(r#"{ "block_padding": -5.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "block_padding",
                ..
            }
        ));

        let err = GameConfig::from_json(r#"{ "block_offset_x": -20.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "block_offset_x",
                ..
            }
        ));

        let err = GameConfig::from_json(r#"{ "block_offset_y": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Negative { .. }));

        let err = GameConfig::from_json(r#"{ "paddle_bottom_gap": 700.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::PaddleOutOfArena { .. }));
        assert!(err.to_string().contains("above arena height 600"));

        // Zero padding and a paddle flush with the floor are fine
        assert!(GameConfig::from_json(r#"{ "block_padding": 0.0 }"#).is_ok());
        assert!(GameConfig::from_json(r#"{ "paddle_bottom_gap": 0.0 }"#).is_ok());
    }
}
