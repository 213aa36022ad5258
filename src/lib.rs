//! Running Hero - a single-screen arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, scoring, collisions)
//! - `tuning`: Data-driven game balance
//! - `platform`: Input events and frame pacing
//! - `renderer`: Render snapshot and shape tessellation
//! - `game`: Frame driver tying the above together

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Duration of one fixed tick in seconds
    pub const FRAME_DURATION_SECS: f32 = 1.0 / TICK_RATE as f32;

    /// Visible field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
}
