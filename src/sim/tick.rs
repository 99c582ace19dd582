//! Per-frame simulation step
//!
//! Fixed pipeline, run to completion before the next frame:
//! input -> entity updates -> bear/bear collisions -> boundary sweep ->
//! interaction rules -> prune -> respawn.

use glam::Vec2;

use super::collision::resolve_pair;
use super::entity::{UpdateContext, Updatable, update_all};
use super::interaction;
use super::rect::Rect;
use super::state::{GameEvent, World};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position in window pixels
    pub pointer: Vec2,
    /// Primary action (fire) held
    pub primary_down: bool,
    /// Quit requested (handled by the driver loop, not the simulation)
    pub quit: bool,
}

/// Summary of one frame, for logging and drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub frame: u64,
    /// Events emitted during this frame
    pub events: usize,
    /// A bear spawn could not be placed and will be retried next frame
    pub spawn_deferred: bool,
}

/// Advance the world by one frame of `dt_ms` milliseconds
///
/// `world.events` holds only this frame's events afterwards. Anything left
/// over from the previous frame (or from `World::new`) is dropped, so callers
/// that care should drain after every tick.
pub fn tick(world: &mut World, input: &FrameInput, dt_ms: f32) -> FrameReport {
    world.events.clear();
    world.frame += 1;

    update_entities(world, input, dt_ms);
    resolve_bear_collisions(world, dt_ms);
    sweep_escaped_bears(world);

    interaction::resolve_burger_bears(world);
    interaction::resolve_burger_projectiles(world);
    interaction::resolve_bear_projectiles(world);

    world.prune();
    let spawn_deferred = match world.top_up_bears() {
        Ok(()) => false,
        Err(e) => {
            log::warn!("Frame {}: bear spawn deferred ({})", world.frame, e);
            true
        }
    };

    FrameReport {
        frame: world.frame,
        events: world.events.len(),
        spawn_deferred,
    }
}

/// Run every controller; projectiles they fire join the world afterwards
fn update_entities(world: &mut World, input: &FrameInput, dt_ms: f32) {
    let mut spawned = Vec::new();
    {
        let World {
            tuning,
            rng,
            burger,
            bears,
            projectiles,
            explosions,
            events,
            ..
        } = world;

        let mut ctx = UpdateContext {
            dt_ms,
            input,
            tuning,
            rng,
            spawned: &mut spawned,
            events,
        };

        burger.update(&mut ctx);
        update_all(bears, &mut ctx);
        update_all(projectiles, &mut ctx);
        update_all(explosions, &mut ctx);
    }
    world.projectiles.extend(spawned);
}

/// Resolve every unordered pair of active bears exactly once
fn resolve_bear_collisions(world: &mut World, dt_ms: f32) {
    let window = world.tuning.window();
    let bears = &mut world.bears;

    for i in 0..bears.len() {
        for j in (i + 1)..bears.len() {
            if !(bears[i].active && bears[j].active) {
                continue;
            }
            let resolution = resolve_pair(
                dt_ms,
                window,
                bears[i].velocity,
                bears[i].rect,
                bears[j].velocity,
                bears[j].rect,
            );
            if let Some(res) = resolution {
                bears[i].apply_resolution(&res.first);
                bears[j].apply_resolution(&res.second);
                world.events.push(GameEvent::BearBounce);
            }
        }
    }
}

/// Deactivate bears that have drifted completely out of the window
fn sweep_escaped_bears(world: &mut World) {
    let window = Rect::new(0.0, 0.0, world.tuning.window_width, world.tuning.window_height);
    for bear in world.bears.iter_mut() {
        if bear.active && !bear.rect.intersects(&window) {
            bear.active = false;
        }
    }
}
