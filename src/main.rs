//! Sling Jump entry point
//!
//! Runs a headless session driven by the autopilot. A windowed front end
//! plugs into the same `Session` API (press/release/step) and draws
//! `Session::state()` each frame.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use sling_jump::autopilot::plan_drag;
use sling_jump::consts::FPS;
use sling_jump::highscores::{DEFAULT_PATH, HighScoreStore};
use sling_jump::sim::GameEvent;
use sling_jump::{GameConfig, Session};

/// Sling Jump headless runner
#[derive(Parser)]
#[command(name = "sling-jump")]
#[command(about = "Run a Sling Jump session with the autopilot")]
struct Cli {
    /// World seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file (defaults used if missing)
    #[arg(long)]
    config: Option<PathBuf>,

    /// High score file
    #[arg(long, default_value = DEFAULT_PATH)]
    scores: PathBuf,

    /// Stop after this many ticks even if the player is still alive
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Pace ticks at the frame rate instead of running flat out
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Sling Jump (headless) starting, seed {}", seed);

    let store = HighScoreStore::new(&cli.scores);
    let frame = Duration::from_secs_f32(1.0 / FPS as f32);
    let mut session = Session::new(config, seed, store);

    let mut recycles = 0u32;
    let mut items = 0u32;
    for _ in 0..cli.max_ticks {
        if session.is_over() {
            break;
        }

        if let Some(drag) = plan_drag(session.state()) {
            session.press(drag.start);
            session.release(drag.end);
        }

        for event in session.step().context("Simulation failed")? {
            match event {
                GameEvent::ItemCollected { id, .. } => {
                    items += 1;
                    log::debug!("Picked up {:?}", id);
                }
                GameEvent::WorldRecycled { .. } => {
                    recycles += 1;
                    log::info!("Climbed to screen {} (score {})", recycles + 1, session.score());
                }
                GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
                _ => {}
            }
        }

        // Also paces the post-recycle freeze, which is counted in ticks
        if cli.realtime {
            std::thread::sleep(frame);
        }
    }

    match session.high_score() {
        Some(best) => println!(
            "Score: {}  High score: {}  Screens: {}  Items: {}",
            session.score(),
            best,
            recycles + 1,
            items
        ),
        None => {
            log::warn!(
                "Stopped before game over; score {} was not recorded to {}",
                session.score(),
                cli.scores.display()
            );
            println!(
                "Stopped after {} ticks. Score: {}  Screens: {}  Items: {}",
                cli.max_ticks,
                session.score(),
                recycles + 1,
                items
            );
        }
    }
    Ok(())
}
