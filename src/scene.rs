//! Scene snapshots and render sinks
//!
//! The simulation never draws. After each frame it hands a [`Scene`] to a
//! [`RenderSink`], which clears its surface and redraws from scratch.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub visible: bool,
}

/// Read-only picture of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub arena: RectView,
    pub ball: BallView,
    pub paddle: RectView,
    /// Every block in grid order, hidden ones included
    pub grid: Vec<BlockView>,
    pub score: u64,
    pub best_score: u64,
    pub tick: u64,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let paddle = state.paddle.rect();
        Self {
            arena: RectView {
                x: 0.0,
                y: 0.0,
                w: state.config.arena_width,
                h: state.config.arena_height,
            },
            ball: BallView {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                r: state.ball.radius,
            },
            paddle: RectView {
                x: paddle.pos.x,
                y: paddle.pos.y,
                w: paddle.size.x,
                h: paddle.size.y,
            },
            grid: state
                .grid
                .iter()
                .map(|b| BlockView {
                    x: b.rect.pos.x,
                    y: b.rect.pos.y,
                    w: b.rect.size.x,
                    h: b.rect.size.y,
                    visible: b.visible,
                })
                .collect(),
            score: state.score,
            best_score: state.best_score,
            tick: state.time_ticks,
        }
    }
}

impl GameState {
    /// Snapshot the current frame for rendering
    pub fn snapshot(&self) -> Scene {
        Scene::capture(self)
    }
}

/// Consumer of one scene per frame
pub trait RenderSink {
    /// Clear and redraw from `scene`
    fn present(&mut self, scene: &Scene);
}

/// Writes each scene as one line of JSON
///
/// Presenting never fails; the first write error is logged, kept, and
/// further frames are dropped until [`JsonLinesSink::take_error`] clears it.
pub struct JsonLinesSink<W: Write> {
    out: W,
    frames: u64,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames: 0,
            error: None,
        }
    }

    /// Frames written successfully
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_scene(&mut self, scene: &Scene) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, scene)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn present(&mut self, scene: &Scene) {
        if self.error.is_some() {
            return;
        }
        match self.write_scene(scene) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                log::warn!("Scene output failed at tick {}: {}", scene.tick, e);
                self.error = Some(e);
            }
        }
    }
}
