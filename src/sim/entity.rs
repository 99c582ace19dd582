//! Capabilities shared by every entity kind
//!
//! Burger, bears, projectiles and explosions all expose a collision rectangle,
//! advance themselves once per frame, and describe how they should be drawn.

use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::{GameEvent, Projectile};
use super::tick::FrameInput;
use crate::tuning::Tuning;

/// Everything a controller may read or emit during its update
///
/// Controllers never touch the world collections directly: new projectiles go
/// into `spawned` and are appended by the orchestrator after the update pass.
pub struct UpdateContext<'a> {
    /// Elapsed frame time in milliseconds
    pub dt_ms: f32,
    pub input: &'a FrameInput,
    pub tuning: &'a Tuning,
    pub rng: &'a mut Pcg32,
    pub spawned: &'a mut Vec<Projectile>,
    pub events: &'a mut Vec<GameEvent>,
}

/// An entity with a collision rectangle
pub trait HasRectangle {
    fn rect(&self) -> Rect;
}

/// An entity with a per-frame update rule
pub trait Updatable {
    fn update(&mut self, ctx: &mut UpdateContext<'_>);
}

/// An entity the external renderer can draw
pub trait Drawable: HasRectangle {
    fn draw_info(&self) -> DrawInfo;
}

/// Which sprite a renderer should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Burger,
    TeddyBear,
    FrenchFries,
    TeddyBearProjectile,
    Explosion,
}

/// Read-only draw description handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInfo {
    pub sprite: SpriteKind,
    pub rect: Rect,
    /// Animation frame index (always 0 for static sprites)
    pub frame: u32,
}

/// Run `update` on every entity in a slice
pub fn update_all<T: Updatable>(entities: &mut [T], ctx: &mut UpdateContext<'_>) {
    for entity in entities {
        entity.update(ctx);
    }
}
