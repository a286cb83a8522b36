//! Fixed timestep frame loop
//!
//! Converts elapsed wall time into whole simulation ticks, then hands one
//! scene to the render sink per frame. Input events may arrive between
//! frames; they only update the session's latched direction.

use crate::autopilot::Autopilot;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::scene::RenderSink;
use crate::sim::{GameEvent, GameState, InputEvent};

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Ticks run this frame
    pub ticks: u32,
    pub events: Vec<GameEvent>,
    /// Frames per second over the last 60 presented frames
    pub fps: u32,
}

/// Drives a session from a display refresh callback
pub struct FrameLoop {
    state: GameState,
    accumulator: f32,
    /// Steers instead of the latched input when set
    autopilot: Option<Autopilot>,
    // FPS tracking
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl FrameLoop {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
            autopilot: None,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    pub fn with_autopilot(mut self, autopilot: Autopilot) -> Self {
        self.autopilot = Some(autopilot);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.state.handle_input(event);
    }

    /// Run the ticks owed for `dt` seconds, then present the scene.
    /// `time` is a monotonic timestamp in seconds used for FPS tracking.
    pub fn frame(&mut self, dt: f32, time: f64, sink: &mut impl RenderSink) -> FrameReport {
        let mut report = FrameReport::default();
        if dt.is_finite() {
            self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        } else {
            log::warn!("Ignoring non-finite frame delta {}", dt);
        }

        while self.accumulator >= SIM_DT && report.ticks < MAX_SUBSTEPS {
            let tick = match &self.autopilot {
                Some(pilot) => {
                    let direction = pilot.steer(&self.state);
                    self.state.tick_with(direction)
                }
                None => self.state.tick(),
            };
            report.events.extend(tick.events);
            self.accumulator -= SIM_DT;
            report.ticks += 1;
        }

        // Drop time we could not catch up on
        if report.ticks == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Frame loop fell behind, dropping {:.3}s", self.accumulator);
            self.accumulator = 0.0;
        }

        self.track_fps(time);
        report.fps = self.fps;
        sink.present(&self.state.snapshot());
        report
    }

    /// Run exactly one tick and present it, ignoring wall time
    pub fn step(&mut self, sink: &mut impl RenderSink) -> FrameReport {
        self.accumulator = 0.0;
        self.frame(SIM_DT, 0.0, sink)
    }

    fn track_fps(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % 60;

        // Oldest entry is the one about to be overwritten
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = (59.0 / elapsed).round() as u32;
            }
        }
    }
}
