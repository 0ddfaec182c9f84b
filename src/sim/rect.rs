//! Integer axis-aligned rectangles
//!
//! Pixel-space boxes anchored at their top-left corner. Y grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square box of side `size` anchored at `pos`
    pub fn square(pos: IVec2, size: i32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap test: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(100, 100, 600, 20);
        assert_eq!(r.left(), 100);
        assert_eq!(r.right(), 700);
        assert_eq!(r.top(), 100);
        assert_eq!(r.bottom(), 120);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(45, 45, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_edge_touching_is_not_intersection() {
        let a = Rect::new(0, 0, 50, 50);
        // Right neighbour sharing the x = 50 edge
        assert!(!a.intersects(&Rect::new(50, 0, 10, 10)));
        // Bottom neighbour sharing the y = 50 edge
        assert!(!a.intersects(&Rect::new(0, 50, 10, 10)));
        // Corner touch
        assert!(!a.intersects(&Rect::new(50, 50, 10, 10)));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
