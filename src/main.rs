//! Running Hero entry point
//!
//! Headless native driver: paces the loop at 60 Hz and lets the autopilot
//! play, logging progress. Run with `RUST_LOG=info` (or `debug` for every
//! spawn and jump).

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use running_hero::consts::TICK_RATE;
use running_hero::platform::{EventQueue, FramePacer};
use running_hero::renderer::{tessellate, vertex};
use running_hero::{Game, Tuning};

/// Frames in one minute of play
const DEFAULT_FRAMES: u64 = 60 * TICK_RATE as u64;

/// Command-line arguments for the headless runner.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed for obstacle generation. Defaults to the current time.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Number of frames to simulate before stopping.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_FRAMES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    frames: u64,
    /// JSON file overriding gameplay constants.
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,
    /// Run as fast as possible instead of pacing to 60 Hz.
    #[arg(long)]
    unpaced: bool,
}

fn main() {
    let args = CliArgs::parse();
    env_logger::init();
    log::info!("Running Hero (headless) starting...");

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let tuning = args
        .tuning
        .as_deref()
        .map(Tuning::load)
        .unwrap_or_default();

    let mut game = Game::new(tuning, seed);
    game.idle_mode = true;

    let mut queue = EventQueue::new();
    let mut pacer = FramePacer::default();

    while game.is_running() {
        if game.frames() >= args.frames {
            game.quit();
            break;
        }

        game.frame(&mut queue);

        if game.frames() % (10 * TICK_RATE as u64) == 0 {
            let scene = game.scene();
            let vertices = tessellate(game.state());
            log::info!(
                "Frame {}: {} | obstacles on field: {} | vertex buffer: {} bytes",
                game.frames(),
                scene.hud_lines().join(" | "),
                scene.obstacles.len(),
                vertex::as_bytes(&vertices).len()
            );
        }

        if !args.unpaced {
            pacer.finish_frame();
        }
    }

    let best = game.highscores().top_score().unwrap_or(0);
    log::info!(
        "Stopped after {} frames, {} runs, best score {} ({} slow frames)",
        game.frames(),
        game.state().run,
        best,
        pacer.overruns()
    );
    for (rank, entry) in game.highscores().entries.iter().enumerate() {
        println!(
            "#{:<2} score {:>4}  run {:>3}  {:>6} ticks",
            rank + 1,
            entry.score,
            entry.run,
            entry.ticks
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["running-hero"]).unwrap();
        assert_eq!(args.frames, DEFAULT_FRAMES);
        assert!(args.seed.is_none());
        assert!(args.tuning.is_none());
        assert!(!args.unpaced);
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(CliArgs::try_parse_from(["running-hero", "--frames", "abc"]).is_err());
        assert!(CliArgs::try_parse_from(["running-hero", "--frames", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["running-hero", "--seed", "-3"]).is_err());
        assert!(CliArgs::try_parse_from(["running-hero", "--bogus"]).is_err());
    }

    #[test]
    fn test_all_flags() {
        let args = CliArgs::try_parse_from([
            "running-hero",
            "--seed",
            "42",
            "--frames",
            "120",
            "--tuning",
            "fast.json",
            "--unpaced",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.frames, 120);
        assert_eq!(args.tuning, Some(PathBuf::from("fast.json")));
        assert!(args.unpaced);
    }
}
