//! Integer axis-aligned rectangles
//!
//! All collision geometry in the sim is integer AABBs: platforms, hazards,
//! water, wind zones, exits, and the actor itself. Velocities are floats;
//! positions are committed to the grid by rounding, so overlap tests stay
//! exact.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with integer position and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height (both positive for non-degenerate rects)
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Move so the right edge sits at `x` (horizontal push-out)
    #[inline]
    pub fn set_right(&mut self, x: i32) {
        self.pos.x = x - self.size.x;
    }

    #[inline]
    pub fn set_left(&mut self, x: i32) {
        self.pos.x = x;
    }

    /// Move so the bottom edge sits at `y` (landing snap)
    #[inline]
    pub fn set_bottom(&mut self, y: i32) {
        self.pos.y = y - self.size.y;
    }

    #[inline]
    pub fn set_top(&mut self, y: i32) {
        self.pos.y = y;
    }

    /// Strict overlap test. Touching edges do not count, matching the
    /// resolved rest state where actor.bottom == platform.top.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True if `self` has positive area
    pub fn is_valid(&self) -> bool {
        self.size.x > 0 && self.size.y > 0
    }
}
