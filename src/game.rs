//! Frame driver
//!
//! Owns the single `GameState` for the run of the program and advances it one
//! tick per frame from queued input.

use rand_pcg::Pcg32;

use crate::highscores::HighScores;
use crate::platform::EventQueue;
use crate::renderer::Scene;
use crate::sim::{GameEvent, GameState, SpawnRng, seeded, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game<R: SpawnRng = Pcg32> {
    state: GameState,
    rng: R,
    highscores: HighScores,
    /// Cleared by a quit request; checked once per frame
    running: bool,
    /// Let the autopilot play
    pub idle_mode: bool,
    frames: u64,
}

impl Game<Pcg32> {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::with_rng(tuning, seeded(seed))
    }
}

impl<R: SpawnRng> Game<R> {
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        Self {
            state: GameState::new(tuning),
            rng,
            highscores: HighScores::new(),
            running: true,
            idle_mode: false,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stop after the current frame
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Poll input, advance one tick, and report whether to keep going
    pub fn frame(&mut self, queue: &mut EventQueue) -> bool {
        if !self.running {
            return false;
        }

        let (input, quit) = queue.drain_tick(self.idle_mode);
        if quit {
            log::info!("Quit requested after {} frames", self.frames);
            self.running = false;
            return false;
        }

        let run = self.state.run;
        let ticks = self.state.time_ticks;
        tick(&mut self.state, &input, &mut self.rng);
        self.frames += 1;

        for event in std::mem::take(&mut self.state.events) {
            self.handle_event(event, run, ticks);
        }

        self.running
    }

    fn handle_event(&mut self, event: GameEvent, run: u32, ticks: u64) {
        match event {
            GameEvent::GameOver {
                score,
                new_high_score,
            } => {
                log::info!(
                    "Run {} over: score {} after {} ticks{}",
                    run,
                    score,
                    ticks + 1,
                    if new_high_score { " (new high score!)" } else { "" }
                );
                if let Some(rank) = self.highscores.add_score(score, ticks + 1, run) {
                    log::info!("Run {} ranked #{} this session", run, rank);
                }
            }
            GameEvent::Restarted { run } => log::info!("Starting run {}", run),
            GameEvent::Paused => log::info!("Paused"),
            GameEvent::Resumed => log::info!("Resumed"),
            other => log::debug!("{:?}", other),
        }
    }

    /// Snapshot for the renderer
    pub fn scene(&self) -> Scene {
        Scene::from_state(&self.state)
    }
}
