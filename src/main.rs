//! Burger Defense headless driver
//!
//! Runs the simulation at a fixed timestep with a scripted pointer and logs
//! what happens. Usage:
//!
//! ```text
//! burger-defense [TUNING.json] [--seed N] [--frames N]
//! ```

use anyhow::{Context, Result, bail};
use glam::Vec2;

use burger_defense::Tuning;
use burger_defense::audio::{AudioManager, AudioSink, LogSink};
use burger_defense::sim::{FrameInput, World, tick};

/// Fixed simulation step in milliseconds (60 Hz)
const SIM_DT: f32 = 1000.0 / 60.0;
/// Cap on catch-up steps per host frame
const MAX_SUBSTEPS: u32 = 4;
/// Host frame time fed to the accumulator
const HOST_FRAME_MS: f32 = 1000.0 / 50.0;
/// Simulation frames between status lines
const STATUS_EVERY: u64 = 600;

struct Args {
    tuning_path: Option<String>,
    seed: u64,
    frames: u64,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        tuning_path: None,
        seed: 0x5EED,
        frames: 3600,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                args.seed = value.parse().with_context(|| format!("bad seed {value:?}"))?;
            }
            "--frames" => {
                let value = iter.next().context("--frames needs a value")?;
                args.frames = value
                    .parse()
                    .with_context(|| format!("bad frame count {value:?}"))?;
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => args.tuning_path = Some(path.to_string()),
        }
    }
    Ok(args)
}

/// Scripted player: sweep side to side near the bottom and tap fire
fn autopilot(frame: u64, tuning: &Tuning, total_frames: u64) -> FrameInput {
    let t = frame as f32 * SIM_DT / 1000.0;
    let x = tuning.window_width * (0.5 + 0.4 * (t * 0.7).sin());
    FrameInput {
        pointer: Vec2::new(x, tuning.window_height * 0.875),
        primary_down: frame % 40 < 20,
        quit: frame >= total_frames,
    }
}

/// A running game plus the driver's bookkeeping
struct Session<S: AudioSink> {
    world: World,
    audio: AudioManager<S>,
    deferred_frames: u64,
    status_lines: u64,
}

impl<S: AudioSink> Session<S> {
    fn new(world: World, sink: S) -> Self {
        Self {
            world,
            audio: AudioManager::new(sink),
            deferred_frames: 0,
            status_lines: 0,
        }
    }

    /// Run one simulation frame. Returns false once the autopilot asks to quit.
    fn step(&mut self, total_frames: u64) -> bool {
        let input = autopilot(self.world.frame, &self.world.tuning, total_frames);
        if input.quit {
            return false;
        }

        let report = tick(&mut self.world, &input, SIM_DT);
        if report.spawn_deferred {
            self.deferred_frames += 1;
        }
        self.audio.dispatch(&self.world.drain_events());

        if report.frame % STATUS_EVERY == 0 {
            self.status_lines += 1;
            log::debug!(
                "Frame {}: health {}, score {}, {} bears, {} projectiles",
                report.frame,
                self.world.burger.health(),
                self.world.score,
                self.world.bears.len(),
                self.world.projectiles.len()
            );
        }
        true
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    // `Tuning::load` validates; the defaults are valid by construction
    let tuning = match &args.tuning_path {
        Some(path) => Tuning::load(path).with_context(|| format!("loading tuning from {path}"))?,
        None => Tuning::default(),
    };

    log::info!("Burger Defense (headless) starting with seed: {}", args.seed);
    let mut session = Session::new(World::new(tuning, args.seed), LogSink::default());

    let mut accumulator = 0.0f32;
    'run: loop {
        accumulator += HOST_FRAME_MS;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if !session.step(args.frames) {
                break 'run;
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    let world = &session.world;
    log::info!(
        "Finished {} frames: score {}, health {}, {} sounds, {} deferred spawns",
        world.frame,
        world.score,
        world.burger.health(),
        session.audio.sink().played,
        session.deferred_frames
    );
    Ok(())
}
