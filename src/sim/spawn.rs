//! Collision-free bear placement
//!
//! Rejection sampling: draw a random center inside the spawn border, discard
//! it if the bear's rectangle would overlap anything, and try again. Attempts
//! are capped by `Tuning::max_spawn_attempts` so a crowded field defers the
//! spawn instead of hanging the frame.

use glam::Vec2;
use rand::Rng;

use super::collision::is_collision_free;
use super::rect::Rect;
use super::state::TeddyBear;
use crate::error::SpawnError;
use crate::tuning::Tuning;

/// Place a new bear that overlaps none of `obstacles`
pub fn place_bear(
    rng: &mut impl Rng,
    tuning: &Tuning,
    obstacles: &[Rect],
) -> Result<TeddyBear, SpawnError> {
    let velocity = random_velocity(rng, tuning);
    let firing_delay = TeddyBear::random_firing_delay(rng, tuning);
    let size = tuning.sprites.teddy_bear;

    for _ in 0..tuning.max_spawn_attempts {
        let candidate = Rect::from_center(random_location(rng, tuning), size);
        if is_collision_free(&candidate, obstacles) {
            return Ok(TeddyBear::new(candidate, velocity, firing_delay));
        }
    }

    Err(SpawnError::NoFreeLocation {
        attempts: tuning.max_spawn_attempts,
    })
}

/// Uniform point in `[border, W - border] x [border, H - border]`
pub fn random_location(rng: &mut impl Rng, tuning: &Tuning) -> Vec2 {
    let border = tuning.spawn_border;
    Vec2::new(
        rng.random_range(border..=tuning.window_width - border),
        rng.random_range(border..=tuning.window_height - border),
    )
}

/// Velocity with each component uniform in `[0, range)`, so bears drift right and down
pub fn random_velocity(rng: &mut impl Rng, tuning: &Tuning) -> Vec2 {
    let range = tuning.bear_speed_range;
    if range > 0.0 {
        Vec2::new(rng.random_range(0.0..range), rng.random_range(0.0..range))
    } else {
        Vec2::ZERO
    }
}
