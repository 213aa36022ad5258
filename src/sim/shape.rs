//! Obstacle geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::SpawnRng;

/// Obstacle shape, carrying only the geometry needed for bounds and drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleShape {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
    /// Isosceles triangle, apex at the top-center
    Triangle { base: f32, height: f32 },
}

/// Shape kind without geometry, for HUD and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle];
}

impl ObstacleShape {
    /// Draw a kind uniformly, then its dimensions
    pub fn random(rng: &mut impl SpawnRng) -> Self {
        let kind = ShapeKind::ALL[rng.range(0, ShapeKind::ALL.len() as u32) as usize];
        match kind {
            ShapeKind::Rectangle => ObstacleShape::Rectangle {
                width: rng.range(20, 60) as f32,
                height: rng.range(30, 70) as f32,
            },
            ShapeKind::Circle => ObstacleShape::Circle {
                radius: rng.range(10, 30) as f32,
            },
            ShapeKind::Triangle => ObstacleShape::Triangle {
                base: rng.range(30, 50) as f32,
                height: rng.range(30, 50) as f32,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ObstacleShape::Rectangle { .. } => ShapeKind::Rectangle,
            ObstacleShape::Circle { .. } => ShapeKind::Circle,
            ObstacleShape::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Size of the tight axis-aligned bounds
    pub fn extent(&self) -> Vec2 {
        match *self {
            ObstacleShape::Rectangle { width, height } => Vec2::new(width, height),
            ObstacleShape::Circle { radius } => Vec2::splat(radius * 2.0),
            ObstacleShape::Triangle { base, height } => Vec2::new(base, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.extent().x
    }

    pub fn height(&self) -> f32 {
        self.extent().y
    }
}

/// 8-bit RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel uniform in [0, 256)
    pub fn random(rng: &mut impl SpawnRng) -> Self {
        Self {
            r: rng.range(0, 256) as u8,
            g: rng.range(0, 256) as u8,
            b: rng.range(0, 256) as u8,
        }
    }

    /// Normalized RGBA for vertex colors
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}
