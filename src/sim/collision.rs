//! Collision detection and response for moving rectangles
//!
//! The bear/bear resolver is a pure function: it receives both bodies after
//! this frame's movement and returns corrected values that the caller assigns
//! back. Nothing here touches world state.

use glam::Vec2;

use super::rect::Rect;

/// Axis along which two rectangles collided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Corrected state for one side of a resolved collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBody {
    pub velocity: Vec2,
    pub rect: Rect,
    /// Corrected rectangle is not fully inside the window; the caller should
    /// deactivate the body instead of applying `velocity`/`rect`
    pub out_of_bounds: bool,
}

/// Result of resolving a colliding pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolution {
    pub axis: Axis,
    pub first: ResolvedBody,
    pub second: ResolvedBody,
}

impl CollisionResolution {
    /// Same resolution with the sides exchanged
    pub fn swapped(self) -> Self {
        Self {
            axis: self.axis,
            first: self.second,
            second: self.first,
        }
    }
}

/// Resolve a collision between two moving rectangles
///
/// Returns `None` when the rectangles do not intersect. Otherwise:
/// - The collision axis is the one the pair was separated on before this
///   frame's movement (rectangles moved back by `velocity * dt_ms`). When that
///   is ambiguous, the axis of smaller penetration wins, horizontal on ties.
/// - If the pair is closing along the axis, the velocity components on that
///   axis are exchanged (equal-mass elastic collision).
/// - Both rectangles are pushed apart by half the overlap along the axis so
///   they end up touching but not intersecting.
/// - Each corrected rectangle outside `[0, window.x] x [0, window.y]` is
///   flagged `out_of_bounds`.
///
/// The result is symmetric: swapping the arguments swaps the result sides.
pub fn resolve_pair(
    dt_ms: f32,
    window: Vec2,
    velocity_a: Vec2,
    rect_a: Rect,
    velocity_b: Vec2,
    rect_b: Rect,
) -> Option<CollisionResolution> {
    if !rect_a.intersects(&rect_b) {
        return None;
    }

    let axis = collision_axis(dt_ms, velocity_a, rect_a, velocity_b, rect_b);

    let (mut vel_a, mut vel_b) = (velocity_a, velocity_b);
    let (mut new_a, mut new_b) = (rect_a, rect_b);
    let offset = rect_b.center() - rect_a.center();
    let dv = velocity_b - velocity_a;

    match axis {
        Axis::Horizontal => {
            let dir = direction(offset.x);
            if closing(velocity_a.x, velocity_b.x, dir) {
                std::mem::swap(&mut vel_a.x, &mut vel_b.x);
            }
            let side = push_side(dir, [offset.y, dv.x, dv.y, rect_b.width - rect_a.width]);
            let push = separation(side, rect_a.right(), rect_b.left(), rect_b.right(), rect_a.left());
            new_a.x -= side * push / 2.0;
            new_b.x += side * push / 2.0;
        }
        Axis::Vertical => {
            let dir = direction(offset.y);
            if closing(velocity_a.y, velocity_b.y, dir) {
                std::mem::swap(&mut vel_a.y, &mut vel_b.y);
            }
            let side = push_side(dir, [offset.x, dv.y, dv.x, rect_b.height - rect_a.height]);
            let push = separation(side, rect_a.bottom(), rect_b.top(), rect_b.bottom(), rect_a.top());
            new_a.y -= side * push / 2.0;
            new_b.y += side * push / 2.0;
        }
    }

    Some(CollisionResolution {
        axis,
        first: ResolvedBody {
            velocity: vel_a,
            rect: new_a,
            out_of_bounds: !new_a.is_within(window.x, window.y),
        },
        second: ResolvedBody {
            velocity: vel_b,
            rect: new_b,
            out_of_bounds: !new_b.is_within(window.x, window.y),
        },
    })
}

/// True when `rect` overlaps none of `others`
pub fn is_collision_free(rect: &Rect, others: &[Rect]) -> bool {
    !others.iter().any(|other| rect.intersects(other))
}

/// Pick the collision axis for an intersecting pair
fn collision_axis(
    dt_ms: f32,
    velocity_a: Vec2,
    rect_a: Rect,
    velocity_b: Vec2,
    rect_b: Rect,
) -> Axis {
    if dt_ms > 0.0 {
        let prev_a = rect_a.translated(-velocity_a * dt_ms);
        let prev_b = rect_b.translated(-velocity_b * dt_ms);
        let prev = prev_a.penetration(&prev_b);
        let apart_x = prev.x <= 0.0;
        let apart_y = prev.y <= 0.0;
        if apart_x && !apart_y {
            return Axis::Horizontal;
        }
        if apart_y && !apart_x {
            return Axis::Vertical;
        }
    }

    let pen = rect_a.penetration(&rect_b);
    if pen.x <= pen.y {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// Sign of the offset from the first body to the second (0 when aligned)
#[inline]
fn direction(offset: f32) -> f32 {
    if offset > 0.0 {
        1.0
    } else if offset < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Whether the pair is approaching along an axis. Aligned centers always exchange.
#[inline]
fn closing(first: f32, second: f32, dir: f32) -> bool {
    dir == 0.0 || (first - second) * dir > 0.0
}

/// Side the second body is pushed toward along the collision axis
///
/// Centers that coincide on the axis fall back to the first nonzero key, each
/// measured second minus first so swapping the bodies flips the answer. Only
/// two identical bodies reach the final default.
#[inline]
fn push_side(dir: f32, tie_keys: [f32; 4]) -> f32 {
    if dir != 0.0 {
        return dir;
    }
    tie_keys
        .into_iter()
        .map(direction)
        .find(|d| *d != 0.0)
        .unwrap_or(1.0)
}

/// Total distance needed to separate the pair along an axis
///
/// With `side > 0` the second body goes to the positive side, so the overlap is
/// `first_max - second_min`; otherwise it is `second_max - first_min`.
#[inline]
fn separation(side: f32, first_max: f32, second_min: f32, second_max: f32, first_min: f32) -> f32 {
    if side > 0.0 {
        (first_max - second_min).max(0.0)
    } else {
        (second_max - first_min).max(0.0)
    }
}
