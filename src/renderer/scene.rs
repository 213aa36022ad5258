//! Render snapshot
//!
//! A read-only copy of everything a renderer needs for one frame. Building a
//! scene never touches the simulation.

use glam::Vec2;
use serde::Serialize;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Aabb, GameState, Rgb, ShapeKind};

/// One obstacle as drawn
#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub kind: ShapeKind,
    pub bounds: Aabb,
    pub color: Rgb,
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub player: Aabb,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub high_score: u64,
    pub paused: bool,
    pub game_over: bool,
    /// Ground line y
    pub ground_y: f32,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player: state.player.bounds(),
            obstacles: state
                .obstacles()
                .iter()
                .map(|o| ObstacleView {
                    kind: o.shape.kind(),
                    bounds: o.bounds(),
                    color: o.color,
                })
                .collect(),
            score: state.score,
            high_score: state.high_score,
            paused: state.paused,
            game_over: state.game_over,
            ground_y: state.tuning.ground_y,
        }
    }

    /// HUD lines in draw order
    pub fn hud_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Score: {}", self.score),
            format!("High Score: {}", self.high_score),
        ];
        if self.game_over {
            lines.push("Game Over! Press Space to restart".to_string());
        }
        if self.paused {
            lines.push("Game Paused! Press P to resume".to_string());
        }
        lines
    }
}

/// Tessellate the whole field: ground, player, then obstacles
pub fn tessellate(state: &GameState) -> Vec<Vertex> {
    let ground = Aabb::new(
        Vec2::new(0.0, state.tuning.ground_y),
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT - state.tuning.ground_y),
    );

    let mut vertices = shapes::rect(&ground, colors::GROUND);
    vertices.extend(shapes::rect(&state.player.bounds(), colors::PLAYER));
    for obstacle in state.obstacles() {
        vertices.extend(shapes::obstacle(obstacle));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ScriptedRng, spawn_obstacle};
    use crate::tuning::Tuning;

    #[test]
    fn test_scene_mirrors_state() {
        let mut state = GameState::new(Tuning::default());
        // Circle r=10, then rectangle 20x30
        let mut rng = ScriptedRng::new([0, 1, 0, 10, 20, 30, 0, 0]);
        spawn_obstacle(&mut state, &mut rng);
        spawn_obstacle(&mut state, &mut rng);
        state.score = 2;
        state.high_score = 5;

        let scene = Scene::from_state(&state);
        assert_eq!(scene.obstacles.len(), 2);
        assert_eq!(scene.obstacles[0].kind, ShapeKind::Circle);
        assert_eq!(scene.obstacles[0].color, Rgb::new(10, 20, 30));
        assert_eq!(scene.obstacles[1].kind, ShapeKind::Rectangle);
        assert_eq!(scene.player, state.player.bounds());
        assert_eq!(scene.hud_lines(), vec!["Score: 2", "High Score: 5"]);
    }

    #[test]
    fn test_hud_overlays() {
        let mut state = GameState::new(Tuning::default());
        state.game_over = true;
        state.paused = true;
        let lines = Scene::from_state(&state).hud_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Game Over! Press Space to restart");
        assert_eq!(lines[3], "Game Paused! Press P to resume");
    }

    #[test]
    fn test_tessellate_counts() {
        let mut state = GameState::new(Tuning::default());
        let mut rng = ScriptedRng::new([0, 2]);
        spawn_obstacle(&mut state, &mut rng);
        // ground + player + one triangle
        assert_eq!(tessellate(&state).len(), 6 + 6 + 3);
    }
}
