//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{Aabb, Obstacle, ObstacleShape};

/// Segments used for circle fans
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for an axis-aligned rectangle
pub fn rect(bounds: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (bounds.min, bounds.max());
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a triangle filling its bounds, apex at top-center
pub fn triangle(bounds: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let apex = Vec2::new(bounds.center().x, bounds.top());
    vec![
        Vertex::new(apex.x, apex.y, color),
        Vertex::new(bounds.left(), bounds.bottom(), color),
        Vertex::new(bounds.right(), bounds.bottom(), color),
    ]
}

/// Generate vertices for one obstacle
pub fn obstacle(obstacle: &Obstacle) -> Vec<Vertex> {
    let bounds = obstacle.bounds();
    let color = obstacle.color.to_rgba();
    match obstacle.shape {
        ObstacleShape::Rectangle { .. } => rect(&bounds, color),
        ObstacleShape::Circle { radius } => circle(bounds.center(), radius, color, CIRCLE_SEGMENTS),
        ObstacleShape::Triangle { .. } => triangle(&bounds, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rgb;

    fn contained(vertices: &[Vertex], bounds: &Aabb) -> bool {
        let eps = 1e-3;
        vertices.iter().all(|v| {
            v.position[0] >= bounds.left() - eps
                && v.position[0] <= bounds.right() + eps
                && v.position[1] >= bounds.top() - eps
                && v.position[1] <= bounds.bottom() + eps
        })
    }

    fn obstacle_of(shape: ObstacleShape) -> Obstacle {
        Obstacle {
            id: 1,
            shape,
            pos: Vec2::new(300.0, 460.0),
            color: Rgb::new(255, 0, 0),
        }
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let o = obstacle_of(ObstacleShape::Rectangle { width: 30.0, height: 40.0 });
        let verts = obstacle(&o);
        assert_eq!(verts.len(), 6);
        assert!(contained(&verts, &o.bounds()));
        assert!(verts.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_circle_fan_stays_in_bounds() {
        let o = obstacle_of(ObstacleShape::Circle { radius: 20.0 });
        let verts = obstacle(&o);
        assert_eq!(verts.len(), (CIRCLE_SEGMENTS * 3) as usize);
        assert!(contained(&verts, &o.bounds()));
    }

    #[test]
    fn test_triangle_apex_on_top() {
        let o = obstacle_of(ObstacleShape::Triangle { base: 40.0, height: 40.0 });
        let verts = obstacle(&o);
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[0].position, [320.0, 460.0]);
        assert_eq!(verts[1].position, [300.0, 500.0]);
        assert_eq!(verts[2].position, [340.0, 500.0]);
    }
}
