//! Data-driven game balance
//!
//! Every gameplay constant lives here so runs can be rebalanced from a JSON
//! file without recompiling. Missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FIELD_WIDTH;

/// Gameplay constants for one process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    /// Y coordinate of the ground line (obstacle and player bottoms rest here)
    pub ground_y: f32,

    // === Player ===
    /// Fixed x of the player's left edge
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Gravity per tick, scaled by the speed multiplier
    pub gravity: f32,
    /// Upward launch speed per tick, scaled by the speed multiplier
    pub jump_impulse: f32,

    // === Speed ramp ===
    /// Multiplier at the start of every run
    pub base_multiplier: f32,
    /// Added to the multiplier every simulated tick
    pub multiplier_step: f32,
    pub max_multiplier: f32,

    // === Obstacles ===
    /// Horizontal scroll per tick, scaled by the speed multiplier
    pub scroll_speed: f32,
    /// Obstacles spawn at this x plus a random gap
    pub spawn_x: f32,
    /// A new obstacle spawns once the newest one is left of this x
    pub spawn_threshold_x: f32,
    pub min_gap: u32,
    pub max_gap: u32,
    /// The oldest obstacle is removed once its x reaches this
    pub despawn_x: f32,

    // === Autopilot ===
    /// Jump distance ahead of the player, scaled by the speed multiplier
    pub autopilot_lookahead: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ground_y: 500.0,

            player_x: 200.0,
            player_width: 40.0,
            player_height: 60.0,
            gravity: 0.6,
            jump_impulse: 9.0,

            base_multiplier: 1.5,
            multiplier_step: 0.001,
            max_multiplier: 3.0,

            scroll_speed: 5.0,
            spawn_x: FIELD_WIDTH,
            spawn_threshold_x: 600.0,
            min_gap: 200,
            max_gap: 400,
            despawn_x: -20.0,

            autopilot_lookahead: 40.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, then clamp anything unplayable
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate();
        Ok(tuning)
    }

    /// Load tuning from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Malformed tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break the simulation
    pub fn validate(&mut self) {
        let defaults = Self::default();

        if self.player_width <= 0.0 || self.player_height <= 0.0 {
            log::warn!("Player size must be positive, using defaults");
            self.player_width = defaults.player_width;
            self.player_height = defaults.player_height;
        }
        if self.gravity <= 0.0 {
            log::warn!("Gravity must be positive, using {}", defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if self.jump_impulse < 0.0 {
            log::warn!("Negative jump impulse flipped");
            self.jump_impulse = -self.jump_impulse;
        }
        if self.base_multiplier <= 0.0 {
            log::warn!("Base multiplier must be positive, using {}", defaults.base_multiplier);
            self.base_multiplier = defaults.base_multiplier;
        }
        if self.multiplier_step < 0.0 {
            log::warn!("Speed ramp cannot go backwards, disabling it");
            self.multiplier_step = 0.0;
        }
        if self.max_multiplier < self.base_multiplier {
            log::warn!(
                "Max multiplier {} below base {}, raising it",
                self.max_multiplier,
                self.base_multiplier
            );
            self.max_multiplier = self.base_multiplier;
        }
        if self.min_gap >= self.max_gap {
            log::warn!("Gap range [{}, {}) is empty, widening it", self.min_gap, self.max_gap);
            match self.min_gap.checked_add(1) {
                Some(max_gap) => self.max_gap = max_gap,
                None => {
                    self.min_gap = defaults.min_gap;
                    self.max_gap = defaults.max_gap;
                }
            }
        }
    }

    /// Ground-resting y for a box of the given height
    #[inline]
    pub fn rest_y(&self, height: f32) -> f32 {
        self.ground_y - height
    }
}
