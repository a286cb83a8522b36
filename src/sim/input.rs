//! Player input
//!
//! The input source delivers discrete press/release events; the session keeps
//! the latched direction and reads it once at the start of each tick.

use serde::{Deserialize, Serialize};

/// Horizontal paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    None,
    Right,
}

impl Direction {
    /// Map a keyboard key name to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Sign of the horizontal velocity (-1, 0, +1)
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::None => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Direction),
    Released(Direction),
}

impl InputEvent {
    /// Translate a key-down by name, ignoring keys that do not steer
    pub fn key_down(key: &str) -> Option<Self> {
        Direction::from_key(key).map(InputEvent::Pressed)
    }

    /// Translate a key-up by name, ignoring keys that do not steer
    pub fn key_up(key: &str) -> Option<Self> {
        Direction::from_key(key).map(InputEvent::Released)
    }
}

/// Latched direction: set by a press, cleared only by the matching release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputLatch {
    direction: Direction,
}

impl InputLatch {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(direction) => self.direction = direction,
            InputEvent::Released(direction) if direction == self.direction => {
                self.direction = Direction::None;
            }
            InputEvent::Released(_) => {}
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("Left"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("Right"), Some(Direction::Right));
        assert_eq!(Direction::from_key("Space"), None);
        assert_eq!(InputEvent::key_down("a"), None);
        assert_eq!(
            InputEvent::key_up("ArrowRight"),
            Some(InputEvent::Released(Direction::Right))
        );
    }

    #[test]
    fn test_latch_press_release() {
        let mut latch = InputLatch::default();
        assert_eq!(latch.direction(), Direction::None);

        latch.apply(InputEvent::Pressed(Direction::Left));
        assert_eq!(latch.direction(), Direction::Left);

        latch.apply(InputEvent::Released(Direction::Left));
        assert_eq!(latch.direction(), Direction::None);
    }

    #[test]
    fn test_latch_ignores_non_matching_release() {
        let mut latch = InputLatch::default();
        latch.apply(InputEvent::Pressed(Direction::Left));
        latch.apply(InputEvent::Pressed(Direction::Right));
        // Letting go of the key pressed first keeps the newer direction
        latch.apply(InputEvent::Released(Direction::Left));
        assert_eq!(latch.direction(), Direction::Right);
        latch.apply(InputEvent::Released(Direction::Right));
        assert_eq!(latch.direction(), Direction::None);
    }
}
