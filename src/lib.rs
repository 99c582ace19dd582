//! Burger Defense - arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (movement, collisions, spawning, game state)
//! - `tuning`: Data-driven game balance
//! - `audio`: Mapping of simulation events to sound cues
//! - `error`: Error types for tuning and spawning

pub mod audio;
pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{SpawnError, TuningError};
pub use tuning::{SpriteSizes, Tuning};

/// Reference game constants (used by `Tuning::default`)
pub mod consts {
    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Target bear population
    pub const MAX_BEARS: usize = 5;
    /// Distance from each window edge where bears are never spawned
    pub const SPAWN_BORDER_SIZE: f32 = 100.0;
    /// Rejection sampling attempts before a spawn is deferred
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;

    /// Burger defaults
    pub const BURGER_INITIAL_HEALTH: i32 = 100;
    pub const BURGER_COOLDOWN_MS: f32 = 500.0;

    /// Damage and scoring
    pub const BEAR_DAMAGE: i32 = 10;
    pub const TEDDY_BEAR_PROJECTILE_DAMAGE: i32 = 5;
    pub const BEAR_POINTS: u32 = 10;

    /// Upper bound of each bear velocity component (pixels/ms, drawn from `[0, range)`)
    pub const BEAR_SPEED_RANGE: f32 = 0.3;
    /// Bear firing delay: min + uniform(0, range) milliseconds
    pub const BEAR_MIN_FIRING_DELAY_MS: f32 = 500.0;
    pub const BEAR_FIRING_RANGE_MS: f32 = 1000.0;

    /// Projectile speeds (pixels/ms) and spawn offsets from the shooter center
    pub const FRENCH_FRIES_SPEED: f32 = 0.3;
    pub const FRENCH_FRIES_OFFSET: f32 = -20.0;
    pub const TEDDY_BEAR_PROJECTILE_SPEED: f32 = 0.3;
    pub const TEDDY_BEAR_PROJECTILE_OFFSET: f32 = 20.0;

    /// Explosion strip: 3x3 frames, 10 ms each
    pub const EXPLOSION_FRAMES: u32 = 9;
    pub const EXPLOSION_FRAME_MS: f32 = 10.0;
}
