//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Units are
//! pixels and ticks; the driver calls [`tick`] once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::first_overlap;
use super::rng::SpawnRng;
use super::shape::{ObstacleShape, Rgb};
use super::state::{GameEvent, GameState, Obstacle, PlayerState};

/// A single player request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Jump,
    PauseToggle,
    /// Start a new run after game over
    Restart,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Requests in arrival order
    pub commands: Vec<Command>,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            idle_mode: false,
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn has(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }
}

/// Advance the game state by one fixed tick
///
/// Commands apply one after another, each guarded against the state the
/// previous ones left behind.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl SpawnRng) {
    state.events.clear();

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    let mut restarted = false;
    for command in &input.commands {
        match command {
            // Honoured in every phase
            Command::PauseToggle => {
                state.paused = !state.paused;
                state.events.push(if state.paused {
                    GameEvent::Paused
                } else {
                    GameEvent::Resumed
                });
            }
            Command::Jump => {
                if state.player.is_grounded() && !state.game_over && !state.paused {
                    let impulse = state.tuning.jump_impulse * state.speed_multiplier;
                    state.player.jump(impulse);
                    state.events.push(GameEvent::Jumped {
                        velocity: state.player.vel_y,
                    });
                }
            }
            Command::Restart => {
                if state.game_over && !state.paused {
                    state.reset_run();
                    state.run += 1;
                    state.events.push(GameEvent::Restarted { run: state.run });
                    restarted = true;
                }
            }
        }
    }

    // A restart skips the rest of its tick; so do pause and game over
    if restarted || state.game_over || state.paused {
        return;
    }

    state.time_ticks += 1;

    state.speed_multiplier =
        (state.speed_multiplier + state.tuning.multiplier_step).min(state.tuning.max_multiplier);

    step_player(state);

    let dx = state.tuning.scroll_speed * state.speed_multiplier;
    state.scroll_obstacles(dx);

    let should_spawn = match state.newest_obstacle() {
        None => true,
        Some(newest) => newest.pos.x < state.tuning.spawn_threshold_x,
    };
    if should_spawn {
        spawn_obstacle(state, rng);
    }

    // One off-screen obstacle per tick at most
    let despawn = state
        .obstacles()
        .front()
        .is_some_and(|oldest| oldest.pos.x <= state.tuning.despawn_x);
    if despawn {
        if let Some(gone) = state.pop_oldest() {
            state.events.push(GameEvent::ObstacleDespawned { id: gone.id });
        }
    }

    let player = state.player.bounds();
    let hit = first_overlap(&player, state.obstacles().iter().map(|o| o.bounds()));
    if let Some(index) = hit {
        log::debug!(
            "Player hit obstacle {} at tick {}",
            state.obstacles()[index].id,
            state.time_ticks
        );
        state.end_run();
    }
}

/// Gravity and ground contact for the player
fn step_player(state: &mut GameState) {
    let gravity = state.tuning.gravity * state.speed_multiplier;
    let rest_y = state.tuning.rest_y(state.player.size.y);
    let player = &mut state.player;

    match player.state {
        PlayerState::Grounded => {}
        PlayerState::Jumping => {
            player.pos.y += player.vel_y;
            player.vel_y += gravity;
            // Apex reached
            if player.vel_y >= 0.0 {
                player.state = PlayerState::Falling;
            }
        }
        PlayerState::Falling => {
            player.pos.y += player.vel_y;
            player.vel_y += gravity;
            if player.pos.y >= rest_y {
                player.pos.y = rest_y;
                player.vel_y = 0.0;
                player.state = PlayerState::Grounded;
                state.events.push(GameEvent::Landed);
            }
        }
    }
}

/// Spawn a random obstacle past the right edge of the field
///
/// The gap is measured from the spawn line; the previous obstacle's width is
/// added so the visible gap never shrinks below `min_gap`.
pub fn spawn_obstacle(state: &mut GameState, rng: &mut impl SpawnRng) {
    let mut gap = rng.range(state.tuning.min_gap, state.tuning.max_gap) as f32;
    if let Some(previous) = state.newest_obstacle() {
        gap += previous.shape.width();
    }

    let shape = ObstacleShape::random(rng);
    let color = Rgb::random(rng);
    let pos = Vec2::new(
        state.tuning.spawn_x + gap,
        state.tuning.rest_y(shape.height()),
    );

    let id = state.next_entity_id();
    state.push_obstacle(Obstacle {
        id,
        shape,
        pos,
        color,
    });
    state.events.push(GameEvent::ObstacleSpawned {
        id,
        kind: shape.kind(),
        x: pos.x,
    });
}

/// Demo mode: jump when the next obstacle is close, restart when dead
fn autopilot(state: &GameState, input: &mut TickInput) {
    if state.game_over {
        input.push(Command::Restart);
        return;
    }

    let player = state.player.bounds();
    let lookahead = state.tuning.autopilot_lookahead * state.speed_multiplier;

    let next = state
        .obstacles()
        .iter()
        .zip(state.passed())
        .filter(|(obstacle, passed)| !**passed && obstacle.trailing_edge() > player.left())
        .map(|(obstacle, _)| obstacle.pos.x - player.right())
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if next.is_some_and(|distance| (0.0..=lookahead).contains(&distance)) {
        input.push(Command::Jump);
    }
}
