//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and input-device code:
//! - One writer: `tick` is the only place the world advances
//! - Seeded RNG only
//! - Liveness flags are read during a frame and applied by a single prune

pub mod collision;
pub mod entity;
pub mod interaction;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Axis, CollisionResolution, ResolvedBody, is_collision_free, resolve_pair};
pub use entity::{DrawInfo, Drawable, HasRectangle, SpriteKind, Updatable, UpdateContext};
pub use rect::Rect;
pub use spawn::place_bear;
pub use state::{
    Burger, Explosion, GameEvent, Projectile, ProjectileKind, ShotGate, TeddyBear, World,
};
pub use tick::{FrameInput, FrameReport, tick};
