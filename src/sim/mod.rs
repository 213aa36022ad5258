//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Injected RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_overlap};
pub use rng::{ScriptedRng, SpawnRng, seeded};
pub use shape::{ObstacleShape, Rgb, ShapeKind};
pub use state::{GameEvent, GameState, Obstacle, Player, PlayerState};
pub use tick::{Command, TickInput, spawn_obstacle, tick};
