//! Axis-aligned rectangles used as collision volumes
//!
//! Screen-space convention: x grows right, y grows down, `(x, y)` is the
//! top-left corner.

use glam::Vec2;

/// An axis-aligned box in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Copy moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// True when `other` lies entirely inside (or on the edges of) this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// True when the rectangle lies entirely inside `[0, width] x [0, height]`
    pub fn is_within(&self, width: f32, height: f32) -> bool {
        Rect::new(0.0, 0.0, width, height).contains_rect(self)
    }

    /// Overlap depth on each axis (zero or negative when separated on that axis)
    pub fn penetration(&self, other: &Rect) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.left().max(other.left()),
            self.bottom().min(other.bottom()) - self.top().max(other.top()),
        )
    }

    /// Clamp the position so the rectangle stays within `[0, width] x [0, height]`
    ///
    /// Mirrors the reference clamp order: left/bottom first, then right/top, so a
    /// rectangle larger than the area ends up pinned to the top-left.
    pub fn clamped_to(&self, width: f32, height: f32) -> Self {
        let mut r = *self;
        if r.x < 0.0 {
            r.x = 0.0;
        }
        if r.bottom() > height {
            r.y = height - r.height;
        }
        if r.right() > width {
            r.x = width - r.width;
        }
        if r.y < 0.0 {
            r.y = 0.0;
        }
        if r.x < 0.0 {
            r.x = 0.0;
        }
        r
    }
}
