//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the frame driver
//! owns exactly one for the lifetime of the process.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::shape::{ObstacleShape, Rgb, ShapeKind};
use crate::tuning::Tuning;

/// Player vertical-motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Grounded,
    /// Rising after a jump, velocity still negative
    Jumping,
    /// Past the apex, coming back down
    Falling,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels per tick (negative = up)
    pub vel_y: f32,
    pub state: PlayerState,
}

impl Player {
    /// A grounded player at its reset position
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        Self {
            pos: Vec2::new(tuning.player_x, tuning.rest_y(size.y)),
            size,
            vel_y: 0.0,
            state: PlayerState::Grounded,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn is_grounded(&self) -> bool {
        self.state == PlayerState::Grounded
    }

    /// Start a jump with the given upward speed
    pub fn jump(&mut self, impulse: f32) {
        self.state = PlayerState::Jumping;
        self.vel_y = -impulse;
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub shape: ObstacleShape,
    /// Top-left corner of the tight bounds
    pub pos: Vec2,
    pub color: Rgb,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.shape.extent())
    }

    /// Right edge; the player clears the obstacle once past it
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.shape.width()
    }
}

/// Something that happened during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped { velocity: f32 },
    Landed,
    ObstacleSpawned { id: u32, kind: ShapeKind, x: f32 },
    ObstaclePassed { id: u32, score: u64 },
    ObstacleDespawned { id: u32 },
    GameOver { score: u64, new_high_score: bool },
    Restarted { run: u32 },
    Paused,
    Resumed,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Gameplay constants for this process
    pub tuning: Tuning,
    pub player: Player,
    /// Oldest (leftmost) first
    obstacles: VecDeque<Obstacle>,
    /// Parallel to `obstacles`
    passed: VecDeque<bool>,
    pub score: u64,
    /// Best score this process; never written to storage
    pub high_score: u64,
    pub speed_multiplier: f32,
    pub paused: bool,
    pub game_over: bool,
    /// Simulated ticks in the current run
    pub time_ticks: u64,
    /// 1-based run counter
    pub run: u32,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let player = Player::new(&tuning);
        let speed_multiplier = tuning.base_multiplier;
        Self {
            tuning,
            player,
            obstacles: VecDeque::new(),
            passed: VecDeque::new(),
            score: 0,
            high_score: 0,
            speed_multiplier,
            paused: false,
            game_over: false,
            time_ticks: 0,
            run: 1,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reinitialize everything except the high score and run counter
    pub fn reset_run(&mut self) {
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.passed.clear();
        self.score = 0;
        self.speed_multiplier = self.tuning.base_multiplier;
        self.game_over = false;
        self.time_ticks = 0;
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Oldest (leftmost) first
    pub fn obstacles(&self) -> &VecDeque<Obstacle> {
        &self.obstacles
    }

    /// Passed flags, index-aligned with [`GameState::obstacles`]
    pub fn passed(&self) -> &VecDeque<bool> {
        &self.passed
    }

    pub fn newest_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    /// Append an obstacle on the right, not yet passed
    pub fn push_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push_back(obstacle);
        self.passed.push_back(false);
    }

    /// Drop the oldest obstacle together with its passed flag
    pub fn pop_oldest(&mut self) -> Option<Obstacle> {
        let oldest = self.obstacles.pop_front()?;
        self.passed.pop_front();
        Some(oldest)
    }

    /// Scroll every obstacle left, scoring the ones the player just cleared
    pub(crate) fn scroll_obstacles(&mut self, dx: f32) {
        let player_x = self.player.pos.x;
        for (obstacle, passed) in self.obstacles.iter_mut().zip(self.passed.iter_mut()) {
            obstacle.pos.x -= dx;

            if !*passed && player_x > obstacle.trailing_edge() {
                *passed = true;
                self.score += 1;
                self.events.push(GameEvent::ObstaclePassed {
                    id: obstacle.id,
                    score: self.score,
                });
            }
        }
    }

    /// End the run, folding the score into the high score
    pub(crate) fn end_run(&mut self) {
        self.game_over = true;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        self.events.push(GameEvent::GameOver {
            score: self.score,
            new_high_score,
        });
    }
}
