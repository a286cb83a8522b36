//! Block Breaker entry point
//!
//! Headless native runner: the autopilot plays a session and every frame is
//! handed to the selected render sink. Window and keyboard plumbing live with
//! whatever host embeds the library.

use std::error::Error;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};

use block_breaker::autopilot::Autopilot;
use block_breaker::consts::SIM_DT;
use block_breaker::renderer::ShapeBatch;
use block_breaker::runner::FrameLoop;
use block_breaker::scene::{JsonLinesSink, RenderSink, Scene};
use block_breaker::sim::{GameEvent, GameState};
use block_breaker::ui::RulesPanel;
use block_breaker::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SinkKind {
    /// One JSON scene per line on stdout
    Json,
    /// Tessellate each frame into a triangle batch
    Shapes,
    /// Discard every frame
    None,
}

#[derive(Parser, Debug)]
#[command(name = "block-breaker")]
#[command(about = "Headless block breaker driven by the demo autopilot")]
struct Options {
    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// JSON file overriding arena, block, ball and paddle constants
    #[arg(long = "config")]
    config_path: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = SinkKind::Json)]
    sink: SinkKind,
    /// Pace frames at 60 Hz instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Print the rules and exit
    #[arg(long)]
    rules: bool,
}

/// Sink that discards every scene
struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _scene: &Scene) {}
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let config = GameConfig::from_json(&json)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

fn run_frames(frame_loop: &mut FrameLoop, options: &Options, sink: &mut impl RenderSink) {
    let start = Instant::now();
    let mut last = start;
    let frame_budget = Duration::from_secs_f32(SIM_DT);

    for frame in 0..options.frames {
        let (dt, now) = if options.realtime {
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            (dt, now.duration_since(start).as_secs_f64())
        } else {
            (SIM_DT, 0.0)
        };

        let report = if options.realtime {
            frame_loop.frame(dt, now, sink)
        } else {
            frame_loop.step(sink)
        };

        if options.realtime && frame % 60 == 59 {
            log::debug!("FPS: {}", report.fps);
        }

        for event in &report.events {
            match event {
                GameEvent::Miss { lost_score } => {
                    log::info!("Miss after scoring {}", lost_score);
                }
                GameEvent::GridCleared { score } => {
                    log::info!("Grid cleared at score {}", score);
                }
                _ => {}
            }
        }

        if options.realtime {
            let spent = last.elapsed();
            if spent < frame_budget {
                std::thread::sleep(frame_budget - spent);
            }
        }
    }
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let config = load_config(options.config_path.as_deref())?;
    let state = GameState::try_new(config)?;
    let mut frame_loop = FrameLoop::new(state).with_autopilot(Autopilot::new(10.0));

    match options.sink {
        SinkKind::Json => {
            let stdout = io::stdout();
            let mut sink = JsonLinesSink::new(BufWriter::new(stdout.lock()));
            run_frames(&mut frame_loop, &options, &mut sink);
            if let Some(err) = sink.take_error() {
                return Err(err.into());
            }
        }
        SinkKind::Shapes => {
            let mut sink = ShapeBatch::new();
            run_frames(&mut frame_loop, &options, &mut sink);
            log::info!("Last frame: {} triangles", sink.triangle_count());
        }
        SinkKind::None => run_frames(&mut frame_loop, &options, &mut NullSink),
    }

    let state = frame_loop.state();
    log::info!(
        "Finished {} ticks: score {}, best {}",
        state.time_ticks,
        state.score,
        state.best_score
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let options = Options::parse();

    if options.rules {
        let mut panel = RulesPanel::default();
        panel.show();
        for line in panel.lines() {
            println!("{line}");
        }
        return;
    }

    log::info!("Block Breaker (headless) starting...");
    if let Err(e) = run(options) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let options = Options::try_parse_from(["block-breaker"]).unwrap();
        assert_eq!(options.frames, 600);
        assert_eq!(options.sink, SinkKind::Json);
        assert!(options.config_path.is_none());
        assert!(!options.realtime);
        assert!(!options.rules);
    }

    #[test]
    fn test_parse_all_options() {
        let options = Options::try_parse_from([
            "block-breaker",
            "--frames",
            "30",
            "--sink",
            "shapes",
            "--config",
            "c.json",
            "--realtime",
            "--rules",
        ])
        .unwrap();
        assert_eq!(options.frames, 30);
        assert_eq!(options.sink, SinkKind::Shapes);
        assert_eq!(options.config_path, Some(PathBuf::from("c.json")));
        assert!(options.realtime);
        assert!(options.rules);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Options::try_parse_from(["block-breaker", "--frames"]).is_err());
        assert!(Options::try_parse_from(["block-breaker", "--frames", "many"]).is_err());
        assert!(Options::try_parse_from(["block-breaker", "--sink", "window"]).is_err());
        assert!(Options::try_parse_from(["block-breaker", "--bogus"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }

    #[test]
    fn test_headless_run_without_output() {
        let options = Options::try_parse_from(["block-breaker", "--frames", "120", "--sink", "none"])
            .unwrap();
        let mut frame_loop = FrameLoop::new(GameState::default());
        run_frames(&mut frame_loop, &options, &mut NullSink);
        assert_eq!(frame_loop.state().time_ticks, 120);
    }
}
