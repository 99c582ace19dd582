//! Data-driven game balance
//!
//! Every constant the simulation reads lives in [`Tuning`]. Defaults match the
//! reference game; a JSON file can override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Sprite dimensions injected by the asset loader (only used for collision sizing)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSizes {
    pub burger: Vec2,
    pub teddy_bear: Vec2,
    pub french_fries: Vec2,
    pub teddy_bear_projectile: Vec2,
    /// Size of a single explosion frame (not the whole strip)
    pub explosion_frame: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            burger: Vec2::new(50.0, 50.0),
            teddy_bear: Vec2::new(50.0, 50.0),
            french_fries: Vec2::new(10.0, 30.0),
            teddy_bear_projectile: Vec2::new(12.0, 12.0),
            explosion_frame: Vec2::new(64.0, 64.0),
        }
    }
}

/// Game balance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub window_width: f32,
    pub window_height: f32,

    // === Population ===
    pub max_bears: usize,
    pub spawn_border: f32,
    pub max_spawn_attempts: u32,

    // === Burger ===
    pub burger_initial_health: i32,
    pub burger_cooldown_ms: f32,

    // === Damage and scoring ===
    pub bear_damage: i32,
    pub teddy_bear_projectile_damage: i32,
    pub bear_points: u32,

    // === Bears ===
    pub bear_speed_range: f32,
    pub bear_min_firing_delay_ms: f32,
    pub bear_firing_range_ms: f32,

    // === Projectiles ===
    pub french_fries_speed: f32,
    pub french_fries_offset: f32,
    pub teddy_bear_projectile_speed: f32,
    pub teddy_bear_projectile_offset: f32,

    // === Explosions ===
    pub explosion_frames: u32,
    pub explosion_frame_ms: f32,

    pub sprites: SpriteSizes,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            max_bears: MAX_BEARS,
            spawn_border: SPAWN_BORDER_SIZE,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,

            burger_initial_health: BURGER_INITIAL_HEALTH,
            burger_cooldown_ms: BURGER_COOLDOWN_MS,

            bear_damage: BEAR_DAMAGE,
            teddy_bear_projectile_damage: TEDDY_BEAR_PROJECTILE_DAMAGE,
            bear_points: BEAR_POINTS,

            bear_speed_range: BEAR_SPEED_RANGE,
            bear_min_firing_delay_ms: BEAR_MIN_FIRING_DELAY_MS,
            bear_firing_range_ms: BEAR_FIRING_RANGE_MS,

            french_fries_speed: FRENCH_FRIES_SPEED,
            french_fries_offset: FRENCH_FRIES_OFFSET,
            teddy_bear_projectile_speed: TEDDY_BEAR_PROJECTILE_SPEED,
            teddy_bear_projectile_offset: TEDDY_BEAR_PROJECTILE_OFFSET,

            explosion_frames: EXPLOSION_FRAMES,
            explosion_frame_ms: EXPLOSION_FRAME_MS,

            sprites: SpriteSizes::default(),
        }
    }
}

impl Tuning {
    /// Window size as a vector
    #[inline]
    pub fn window(&self) -> Vec2 {
        Vec2::new(self.window_width, self.window_height)
    }

    /// Parse tuning from JSON (missing fields take their defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that the values describe a playable world
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(invalid("window dimensions must be positive"));
        }
        if self.spawn_border < 0.0 {
            return Err(invalid("spawn_border must not be negative"));
        }
        if self.spawn_border * 2.0 > self.window_width
            || self.spawn_border * 2.0 > self.window_height
        {
            return Err(invalid("spawn_border leaves no room to spawn"));
        }
        if self.max_spawn_attempts == 0 {
            return Err(invalid("max_spawn_attempts must be at least 1"));
        }
        if self.burger_initial_health <= 0 {
            return Err(invalid("burger_initial_health must be positive"));
        }
        if self.bear_damage < 0 || self.teddy_bear_projectile_damage < 0 {
            return Err(invalid("damage values must not be negative"));
        }
        if self.bear_speed_range < 0.0 {
            return Err(invalid("bear_speed_range must not be negative"));
        }
        if self.bear_min_firing_delay_ms <= 0.0 || self.bear_firing_range_ms < 0.0 {
            return Err(invalid("bear firing delays must be positive"));
        }
        if self.explosion_frames == 0 || self.explosion_frame_ms <= 0.0 {
            return Err(invalid("explosion animation needs frames and a frame time"));
        }
        let s = &self.sprites;
        for (name, size) in [
            ("burger", s.burger),
            ("teddy_bear", s.teddy_bear),
            ("french_fries", s.french_fries),
            ("teddy_bear_projectile", s.teddy_bear_projectile),
            ("explosion_frame", s.explosion_frame),
        ] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(invalid(&format!("sprite size for {name} must be positive")));
            }
        }
        if s.burger.x > self.window_width || s.burger.y > self.window_height {
            return Err(invalid("burger sprite does not fit in the window"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> TuningError {
    TuningError::Invalid(msg.to_string())
}
