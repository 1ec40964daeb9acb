//! Axis-aligned rectangles in screen space
//!
//! Screen space is top-left origin with y growing downward, so "higher on
//! screen" means a smaller y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 20.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 40.0);
        assert_eq!(r.center(), Vec2::new(60.0, 30.0));
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(a.overlaps(&Rect::new(25.0, 25.0, 50.0, 50.0)));
        assert!(!a.overlaps(&Rect::new(100.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let player = Rect::new(0.0, 0.0, 50.0, 50.0);
        // Resting exactly on top of a platform
        let platform = Rect::new(0.0, 50.0, 100.0, 20.0);
        assert!(!player.overlaps(&platform));
        assert!(!platform.overlaps(&player));
    }
}
