//! Axis-aligned geometry and collision predicates
//!
//! All predicates use the arcade containment test rather than a true
//! circle/rectangle distance: a circle "hits" a rectangle when its horizontal
//! extent lies strictly inside the rectangle and its vertical extent overlaps
//! it. Corner grazes do not register and a fast ball can overlap two adjacent
//! blocks in one tick; gameplay is tuned around that behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at its top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Circle given by center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.radius
    }
}

/// Block collision test: horizontal extent strictly inside, vertical extent
/// strictly overlapping
#[inline]
pub fn circle_intersects_rect(circle: &Circle, rect: &Rect) -> bool {
    circle_over_rect_top(circle, rect) && circle.top() < rect.bottom()
}

/// Paddle collision test: like [`circle_intersects_rect`] but without the
/// bottom edge, so a ball below the paddle's top still counts
#[inline]
pub fn circle_over_rect_top(circle: &Circle, rect: &Rect) -> bool {
    circle.left() > rect.pos.x && circle.right() < rect.right() && circle.bottom() > rect.pos.y
}

/// Circle extends past the left or right wall
#[inline]
pub fn exceeds_side_walls(circle: &Circle, arena: Vec2) -> bool {
    circle.right() > arena.x || circle.left() < 0.0
}

/// Circle extends past the top or bottom wall
#[inline]
pub fn exceeds_top_or_bottom(circle: &Circle, arena: Vec2) -> bool {
    circle.bottom() > arena.y || circle.top() < 0.0
}

/// Circle extends past the bottom wall (a miss)
#[inline]
pub fn exceeds_bottom(circle: &Circle, arena: Vec2) -> bool {
    circle.bottom() > arena.y
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_circle_inside_block_hits() {
        let block = Rect::new(45.0, 60.0, 70.0, 24.0);
        let ball = Circle::new(Vec2::new(80.0, 72.0), 8.0);
        assert!(circle_intersects_rect(&ball, &block));
    }

    #[test]
    fn test_vertical_overlap_from_below_hits() {
        let block = Rect::new(45.0, 60.0, 70.0, 24.0);
        // Center below the block, top edge just inside it
        let ball = Circle::new(Vec2::new(80.0, 90.0), 8.0);
        assert!(circle_intersects_rect(&ball, &block));
    }

    #[test]
    fn test_horizontal_overhang_misses() {
        let block = Rect::new(45.0, 60.0, 70.0, 24.0);
        // Left extent at exactly the block's left edge is not strictly inside
        let ball = Circle::new(Vec2::new(53.0, 72.0), 8.0);
        assert!(!circle_intersects_rect(&ball, &block));
        // Corner graze
        let ball = Circle::new(Vec2::new(112.0, 58.0), 8.0);
        assert!(!circle_intersects_rect(&ball, &block));
    }

    #[test]
    fn test_vertical_miss() {
        let block = Rect::new(45.0, 60.0, 70.0, 24.0);
        let above = Circle::new(Vec2::new(80.0, 52.0), 8.0);
        let below = Circle::new(Vec2::new(80.0, 92.0), 8.0);
        assert!(!circle_intersects_rect(&above, &block));
        assert!(!circle_intersects_rect(&below, &block));
    }

    #[test]
    fn test_paddle_test_ignores_bottom_edge() {
        let paddle = Rect::new(360.0, 568.0, 80.0, 8.0);
        let below = Circle::new(Vec2::new(400.0, 590.0), 8.0);
        assert!(!circle_intersects_rect(&below, &paddle));
        assert!(circle_over_rect_top(&below, &paddle));

        let above = Circle::new(Vec2::new(400.0, 559.0), 8.0);
        assert!(!circle_over_rect_top(&above, &paddle));
    }

    #[test]
    fn test_wall_predicates() {
        let inside = Circle::new(Vec2::new(400.0, 300.0), 8.0);
        assert!(!exceeds_side_walls(&inside, ARENA));
        assert!(!exceeds_top_or_bottom(&inside, ARENA));

        let left = Circle::new(Vec2::new(7.0, 300.0), 8.0);
        let right = Circle::new(Vec2::new(793.0, 300.0), 8.0);
        assert!(exceeds_side_walls(&left, ARENA));
        assert!(exceeds_side_walls(&right, ARENA));

        let top = Circle::new(Vec2::new(400.0, 7.0), 8.0);
        let bottom = Circle::new(Vec2::new(400.0, 593.0), 8.0);
        assert!(exceeds_top_or_bottom(&top, ARENA));
        assert!(exceeds_top_or_bottom(&bottom, ARENA));
        assert!(!exceeds_bottom(&top, ARENA));
        assert!(exceeds_bottom(&bottom, ARENA));

        // Touching is not exceeding
        let touching = Circle::new(Vec2::new(792.0, 592.0), 8.0);
        assert!(!exceeds_side_walls(&touching, ARENA));
        assert!(!exceeds_bottom(&touching, ARENA));
    }
}
