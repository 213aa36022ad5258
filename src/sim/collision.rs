//! Axis-aligned bounding box collision
//!
//! Every entity in the runner is tested by its tight axis-aligned bounds.
//! Coordinates are screen-space: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Index of the first obstacle box overlapping the player, if any
pub fn first_overlap(player: &Aabb, obstacles: impl IntoIterator<Item = Aabb>) -> Option<usize> {
    obstacles.into_iter().position(|b| player.intersects(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_contained() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let right = boxed(10.0, 0.0, 10.0, 10.0);
        let below = boxed(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_separated_on_one_axis() {
        // Overlapping in x, far apart in y (player mid-jump over a block)
        let player = boxed(200.0, 300.0, 40.0, 60.0);
        let block = boxed(210.0, 440.0, 40.0, 60.0);
        assert!(!player.intersects(&block));
    }

    #[test]
    fn test_first_overlap() {
        let player = boxed(200.0, 440.0, 40.0, 60.0);
        let boxes = [
            boxed(0.0, 440.0, 20.0, 60.0),
            boxed(230.0, 460.0, 20.0, 40.0),
            boxed(235.0, 460.0, 20.0, 40.0),
        ];
        assert_eq!(first_overlap(&player, boxes), Some(1));
        assert_eq!(first_overlap(&player, boxes[..1].iter().copied()), None);
    }
}
