//! Axis-aligned rectangle geometry for the paddle and bricks
//!
//! Everything in the arena is an axis-aligned rect in screen space
//! (x grows right, y grows down, positions are top-left corners).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Check if a point is inside the rect, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Check if a point is strictly inside the rect, edges excluded
    pub fn contains_interior(&self, point: Vec2) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }

    /// The rect shrunk by one unit on the right and bottom edges.
    ///
    /// Bricks share edges with their grid neighbors; trimming keeps a point
    /// on a shared edge from counting as inside both bricks.
    pub fn trimmed(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size - Vec2::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 10.0);
        assert!(r.contains(Vec2::new(10.0, 20.0))); // top-left corner
        assert!(r.contains(Vec2::new(110.0, 30.0))); // bottom-right corner
        assert!(r.contains(Vec2::new(60.0, 25.0)));
        assert!(!r.contains(Vec2::new(110.1, 25.0)));
        assert!(!r.contains(Vec2::new(60.0, 19.9)));
    }

    #[test]
    fn test_contains_interior_excludes_edges() {
        let r = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert!(!r.contains_interior(Vec2::new(0.0, 10.0)));
        assert!(!r.contains_interior(Vec2::new(40.0, 10.0)));
        assert!(r.contains_interior(Vec2::new(0.1, 0.1)));
    }

    #[test]
    fn test_trimmed_shrinks_bottom_right() {
        let r = Rect::new(100.0, 100.0, 40.0, 20.0).trimmed();
        assert_eq!(r.left(), 100.0);
        assert_eq!(r.top(), 100.0);
        assert_eq!(r.right(), 139.0);
        assert_eq!(r.bottom(), 119.0);
    }
}
