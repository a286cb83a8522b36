//! Rules overlay
//!
//! Purely presentational: toggling the panel never touches the simulation.

use serde::{Deserialize, Serialize};

/// Heading shown at the top of the panel
pub const RULES_TITLE: &str = "How To Play:";

/// Body text of the rules panel
pub const RULES_TEXT: &[&str] = &[
    "Use your right and left keys to move the paddle to bounce the ball up and break the blocks.",
    "If you miss the ball, your score and the blocks will reset.",
];

/// Show/hide state of the rules overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesPanel {
    visible: bool,
}

impl RulesPanel {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Flip visibility; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Lines to draw, empty while hidden
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        let visible = self.visible;
        std::iter::once(RULES_TITLE)
            .chain(RULES_TEXT.iter().copied())
            .filter(move |_| visible)
    }
}
