//! CPU-side rendering
//!
//! Tessellates a [`Scene`] into a triangle list in arena pixel coordinates.
//! Any GPU or software rasterizer can upload the batch with
//! [`vertex::as_bytes`] after mapping it to clip space.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::scene::{RenderSink, Scene};
pub use vertex::Vertex;

/// Ball, paddle and block color (#d300d3)
pub const FOREGROUND: [f32; 4] = [0.827, 0.0, 0.827, 1.0];
/// Score text color
pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Clear color for the arena
pub const BACKGROUND: [f32; 4] = [0.94, 0.94, 0.94, 1.0];

const BALL_SEGMENTS: u32 = 24;
const SCORE_HEIGHT: f32 = 18.0;
/// Score sits this far left of the right wall, near the top
const SCORE_INSET: Vec2 = Vec2::new(100.0, 12.0);

/// Render sink that rebuilds a vertex batch every frame
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
    arena: Vec2,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last presented scene, in arena pixel coordinates
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Map the batch into clip space (x right, y up, both in [-1, 1])
    pub fn to_clip_space(&self) -> Vec<Vertex> {
        if self.arena.x <= 0.0 || self.arena.y <= 0.0 {
            return Vec::new();
        }
        self.vertices
            .iter()
            .map(|v| {
                let [x, y] = v.position;
                Vertex::new(
                    x / self.arena.x * 2.0 - 1.0,
                    1.0 - y / self.arena.y * 2.0,
                    v.color,
                )
            })
            .collect()
    }
}

impl RenderSink for ShapeBatch {
    fn present(&mut self, scene: &Scene) {
        self.vertices.clear();
        self.arena = Vec2::new(scene.arena.w, scene.arena.h);

        shapes::rect(&mut self.vertices, Vec2::ZERO, self.arena, BACKGROUND);

        shapes::circle(
            &mut self.vertices,
            Vec2::new(scene.ball.x, scene.ball.y),
            scene.ball.r,
            FOREGROUND,
            BALL_SEGMENTS,
        );

        shapes::number(
            &mut self.vertices,
            Vec2::new(scene.arena.w - SCORE_INSET.x, SCORE_INSET.y),
            SCORE_HEIGHT,
            scene.score,
            TEXT,
        );

        let p = &scene.paddle;
        shapes::rect(
            &mut self.vertices,
            Vec2::new(p.x, p.y),
            Vec2::new(p.w, p.h),
            FOREGROUND,
        );

        // Hidden blocks are simply not drawn
        for block in scene.grid.iter().filter(|b| b.visible) {
            shapes::rect(
                &mut self.vertices,
                Vec2::new(block.x, block.y),
                Vec2::new(block.w, block.h),
                FOREGROUND,
            );
        }
    }
}
