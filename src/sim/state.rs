//! World state and entity controllers
//!
//! The world owns every live entity. Liveness is signalled only through the
//! `active`/`finished` flags; collections are pruned once per frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{DrawInfo, Drawable, HasRectangle, SpriteKind, UpdateContext, Updatable};
use super::rect::Rect;
use super::spawn;
use crate::error::SpawnError;
use crate::tuning::Tuning;

/// Discrete simulation events for audio and other collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Burger fired french fries
    BurgerShot,
    /// Burger lost health
    BurgerDamaged,
    /// Burger health reached zero (fires once per game)
    BurgerDied,
    /// A bear fired a projectile
    BearShot,
    /// Two bears bounced off each other
    BearBounce,
    /// A bear was destroyed and an explosion spawned
    BearDestroyed,
    /// No free spawn location this frame
    SpawnDeferred,
}

/// Burger shooting gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotGate {
    #[default]
    Ready,
    Cooldown,
}

/// The player-controlled burger
#[derive(Debug, Clone)]
pub struct Burger {
    pub rect: Rect,
    health: i32,
    max_health: i32,
    pub gate: ShotGate,
    /// Milliseconds accumulated while in cooldown
    pub cooldown_elapsed_ms: f32,
}

impl Burger {
    /// Create a burger centered on `center`
    pub fn new(center: Vec2, tuning: &Tuning) -> Self {
        Self {
            rect: Rect::from_center(center, tuning.sprites.burger),
            health: tuning.burger_initial_health,
            max_health: tuning.burger_initial_health,
            gate: ShotGate::Ready,
            cooldown_elapsed_ms: 0.0,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Assign health, clamped to `[0, max_health]`
    ///
    /// The guard looks at the current value, not the incoming one, so it never
    /// rejects anything once health is non-negative. Callers that want to
    /// freeze health must check it themselves.
    pub fn set_health(&mut self, value: i32) {
        if self.health >= 0 {
            self.health = value.clamp(0, self.max_health);
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.set_health(self.health.saturating_sub(amount));
    }
}

impl HasRectangle for Burger {
    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Updatable for Burger {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        // A dead burger stays where it is and ignores input
        if !self.is_alive() {
            return;
        }
        let tuning = ctx.tuning;

        self.rect = Rect::from_center(ctx.input.pointer, self.rect.size())
            .clamped_to(tuning.window_width, tuning.window_height);

        if ctx.input.primary_down && self.gate == ShotGate::Ready {
            self.gate = ShotGate::Cooldown;
            let center = self.rect.center();
            let origin = Vec2::new(center.x, center.y + tuning.french_fries_offset);
            ctx.spawned
                .push(Projectile::new(ProjectileKind::FrenchFries, origin, tuning));
            ctx.events.push(GameEvent::BurgerShot);
        }

        // Releasing the button re-arms immediately; holding waits out the cooldown
        if self.gate == ShotGate::Cooldown {
            self.cooldown_elapsed_ms += ctx.dt_ms;
            if self.cooldown_elapsed_ms >= tuning.burger_cooldown_ms || !ctx.input.primary_down
            {
                self.gate = ShotGate::Ready;
                self.cooldown_elapsed_ms = 0.0;
            }
        }
    }
}

impl Drawable for Burger {
    fn draw_info(&self) -> DrawInfo {
        DrawInfo {
            sprite: SpriteKind::Burger,
            rect: self.rect,
            frame: 0,
        }
    }
}

/// A mobile teddy bear
#[derive(Debug, Clone)]
pub struct TeddyBear {
    pub rect: Rect,
    /// Pixels per millisecond
    pub velocity: Vec2,
    pub active: bool,
    pub shot_elapsed_ms: f32,
    pub firing_delay_ms: f32,
}

impl TeddyBear {
    pub fn new(rect: Rect, velocity: Vec2, firing_delay_ms: f32) -> Self {
        Self {
            rect,
            velocity,
            active: true,
            shot_elapsed_ms: 0.0,
            firing_delay_ms,
        }
    }

    /// Draw a firing delay from `[min, min + range)`
    pub fn random_firing_delay(rng: &mut impl Rng, tuning: &Tuning) -> f32 {
        let jitter = if tuning.bear_firing_range_ms > 0.0 {
            rng.random_range(0.0..tuning.bear_firing_range_ms)
        } else {
            0.0
        };
        tuning.bear_min_firing_delay_ms + jitter
    }

    /// Apply one side of a bear/bear collision resolution
    pub fn apply_resolution(&mut self, body: &super::collision::ResolvedBody) {
        if body.out_of_bounds {
            self.active = false;
        } else {
            self.velocity = body.velocity;
            self.rect = body.rect;
        }
    }
}

impl HasRectangle for TeddyBear {
    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Updatable for TeddyBear {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if !self.active {
            return;
        }
        // No self-clamping: walls are handled by the collision pass and boundary sweep
        self.rect = self.rect.translated(self.velocity * ctx.dt_ms);

        self.shot_elapsed_ms += ctx.dt_ms;
        if self.shot_elapsed_ms >= self.firing_delay_ms {
            self.shot_elapsed_ms = 0.0;
            self.firing_delay_ms = Self::random_firing_delay(ctx.rng, ctx.tuning);
            let center = self.rect.center();
            let origin = Vec2::new(center.x, center.y + ctx.tuning.teddy_bear_projectile_offset);
            ctx.spawned
                .push(Projectile::new(ProjectileKind::TeddyBear, origin, ctx.tuning));
            ctx.events.push(GameEvent::BearShot);
        }
    }
}

impl Drawable for TeddyBear {
    fn draw_info(&self) -> DrawInfo {
        DrawInfo {
            sprite: SpriteKind::TeddyBear,
            rect: self.rect,
            frame: 0,
        }
    }
}

/// Projectile types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Fired upward by the burger
    FrenchFries,
    /// Fired downward by a bear
    TeddyBear,
}

/// A projectile moving vertically at constant speed
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub rect: Rect,
    /// Pixels per millisecond (negative = up)
    pub velocity_y: f32,
    pub active: bool,
}

impl Projectile {
    /// Create a projectile of `kind` centered on `center`
    pub fn new(kind: ProjectileKind, center: Vec2, tuning: &Tuning) -> Self {
        let (size, velocity_y) = match kind {
            ProjectileKind::FrenchFries => {
                (tuning.sprites.french_fries, -tuning.french_fries_speed)
            }
            ProjectileKind::TeddyBear => (
                tuning.sprites.teddy_bear_projectile,
                tuning.teddy_bear_projectile_speed,
            ),
        };
        Self {
            kind,
            rect: Rect::from_center(center, size),
            velocity_y,
            active: true,
        }
    }
}

impl HasRectangle for Projectile {
    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Updatable for Projectile {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if !self.active {
            return;
        }
        self.rect.y += self.velocity_y * ctx.dt_ms;

        let window = Rect::new(0.0, 0.0, ctx.tuning.window_width, ctx.tuning.window_height);
        if !self.rect.intersects(&window) {
            self.active = false;
        }
    }
}

impl Drawable for Projectile {
    fn draw_info(&self) -> DrawInfo {
        let sprite = match self.kind {
            ProjectileKind::FrenchFries => SpriteKind::FrenchFries,
            ProjectileKind::TeddyBear => SpriteKind::TeddyBearProjectile,
        };
        DrawInfo {
            sprite,
            rect: self.rect,
            frame: 0,
        }
    }
}

/// A short explosion animation
#[derive(Debug, Clone)]
pub struct Explosion {
    pub rect: Rect,
    pub frame: u32,
    pub frame_elapsed_ms: f32,
    pub finished: bool,
}

impl Explosion {
    /// Create an explosion centered on `center`
    pub fn new(center: Vec2, tuning: &Tuning) -> Self {
        Self {
            rect: Rect::from_center(center, tuning.sprites.explosion_frame),
            frame: 0,
            frame_elapsed_ms: 0.0,
            finished: false,
        }
    }
}

impl HasRectangle for Explosion {
    fn rect(&self) -> Rect {
        self.rect
    }
}

impl Updatable for Explosion {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.finished {
            return;
        }
        let frame_ms = ctx.tuning.explosion_frame_ms;
        let frames = ctx.tuning.explosion_frames;

        self.frame_elapsed_ms += ctx.dt_ms;
        while self.frame_elapsed_ms >= frame_ms {
            self.frame_elapsed_ms -= frame_ms;
            if self.frame + 1 < frames {
                self.frame += 1;
            } else {
                self.finished = true;
                break;
            }
        }
    }
}

impl Drawable for Explosion {
    fn draw_info(&self) -> DrawInfo {
        DrawInfo {
            sprite: SpriteKind::Explosion,
            rect: self.rect,
            frame: self.frame,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Frames simulated so far
    pub frame: u64,
    pub burger: Burger,
    pub bears: Vec<TeddyBear>,
    pub projectiles: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub score: u32,
    burger_dead: bool,
    /// Events emitted during the current frame (cleared at the start of each `tick`)
    pub events: Vec<GameEvent>,
}

impl World {
    /// Create a world with the burger in place and the bear pool filled
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut world = Self::empty(tuning, seed);
        if let Err(e) = world.top_up_bears() {
            log::warn!("Initial bear population incomplete: {}", e);
        }
        log::info!(
            "World created (seed {}, {} bears, {}x{})",
            seed,
            world.bears.len(),
            world.tuning.window_width,
            world.tuning.window_height
        );
        world
    }

    /// Create a world with only the burger (no bears)
    pub fn empty(tuning: Tuning, seed: u64) -> Self {
        let start = Vec2::new(tuning.window_width / 2.0, tuning.window_height / 8.0 * 7.0);
        Self {
            burger: Burger::new(start, &tuning),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            bears: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            burger_dead: false,
            events: Vec::new(),
        }
    }

    /// Whether the one-time death event has fired
    pub fn burger_dead(&self) -> bool {
        self.burger_dead
    }

    /// Latch the death event the first time health is exactly zero
    pub fn check_burger_kill(&mut self) {
        if self.burger.health() == 0 && !self.burger_dead {
            self.burger_dead = true;
            self.events.push(GameEvent::BurgerDied);
            log::info!("Burger died at frame {} (score {})", self.frame, self.score);
        }
    }

    /// Collision rectangles of everything a new bear must not overlap
    pub fn collision_rectangles(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(
            1 + self.bears.len() + self.projectiles.len() + self.explosions.len(),
        );
        rects.push(self.burger.rect());
        rects.extend(self.bears.iter().map(HasRectangle::rect));
        rects.extend(self.projectiles.iter().map(HasRectangle::rect));
        rects.extend(self.explosions.iter().map(HasRectangle::rect));
        rects
    }

    /// Remove inactive bears and projectiles and finished explosions
    pub fn prune(&mut self) {
        self.bears.retain(|b| b.active);
        self.projectiles.retain(|p| p.active);
        self.explosions.retain(|e| !e.finished);
    }

    /// Spawn bears until the population reaches `max_bears`
    ///
    /// Stops at the first placement failure; the remaining spawns are retried
    /// on a later call.
    pub fn top_up_bears(&mut self) -> Result<(), SpawnError> {
        while self.bears.len() < self.tuning.max_bears {
            let obstacles = self.collision_rectangles();
            match spawn::place_bear(&mut self.rng, &self.tuning, &obstacles) {
                Ok(bear) => {
                    log::debug!("Spawned bear at {:?}", bear.rect.center());
                    self.bears.push(bear);
                }
                Err(e) => {
                    self.events.push(GameEvent::SpawnDeferred);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Draw descriptions for every entity, burger first
    pub fn draw_list(&self) -> Vec<DrawInfo> {
        let mut list = Vec::with_capacity(
            1 + self.bears.len() + self.projectiles.len() + self.explosions.len(),
        );
        list.push(self.burger.draw_info());
        list.extend(self.bears.iter().map(Drawable::draw_info));
        list.extend(self.projectiles.iter().map(Drawable::draw_info));
        list.extend(self.explosions.iter().map(Drawable::draw_info));
        list
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::FrameInput;
    use proptest::prelude::*;

    /// Run one update of `entity` and return what it spawned and emitted
    fn run_update<T: Updatable>(
        entity: &mut T,
        input: &FrameInput,
        dt_ms: f32,
        tuning: &Tuning,
    ) -> (Vec<Projectile>, Vec<GameEvent>) {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut spawned = Vec::new();
        let mut events = Vec::new();
        let mut ctx = UpdateContext {
            dt_ms,
            input,
            tuning,
            rng: &mut rng,
            spawned: &mut spawned,
            events: &mut events,
        };
        entity.update(&mut ctx);
        (spawned, events)
    }

    fn pointer(x: f32, y: f32, down: bool) -> FrameInput {
        FrameInput {
            pointer: Vec2::new(x, y),
            primary_down: down,
            quit: false,
        }
    }

    #[test]
    fn test_burger_tracks_pointer() {
        let tuning = Tuning::default();
        let mut burger = Burger::new(Vec2::new(400.0, 525.0), &tuning);
        run_update(&mut burger, &pointer(200.0, 300.0, false), 16.0, &tuning);
        assert_eq!(burger.rect.center(), Vec2::new(200.0, 300.0));
    }

    #[test]
    fn test_burger_clamped_to_window() {
        let tuning = Tuning::default();
        let mut burger = Burger::new(Vec2::new(400.0, 525.0), &tuning);
        run_update(&mut burger, &pointer(-100.0, 10_000.0, false), 16.0, &tuning);
        assert_eq!(burger.rect, Rect::new(0.0, 550.0, 50.0, 50.0));
    }

    #[test]
    fn test_tap_fires_each_press() {
        let tuning = Tuning::default();
        let mut burger = Burger::new(Vec2::new(400.0, 300.0), &tuning);

        let (shots, events) = run_update(&mut burger, &pointer(400.0, 300.0, true), 16.0, &tuning);
        assert_eq!(shots.len(), 1);
        assert_eq!(events, vec![GameEvent::BurgerShot]);
        assert_eq!(shots[0].kind, ProjectileKind::FrenchFries);
        assert!(shots[0].velocity_y < 0.0);
        assert_eq!(shots[0].rect.center(), Vec2::new(400.0, 280.0));
        assert_eq!(burger.gate, ShotGate::Cooldown);

        // Release re-arms immediately and resets the timer
        let (shots, _) = run_update(&mut burger, &pointer(400.0, 300.0, false), 16.0, &tuning);
        assert!(shots.is_empty());
        assert_eq!(burger.gate, ShotGate::Ready);
        assert_eq!(burger.cooldown_elapsed_ms, 0.0);

        let (shots, _) = run_update(&mut burger, &pointer(400.0, 300.0, true), 16.0, &tuning);
        assert_eq!(shots.len(), 1);
    }

    #[test]
    fn test_hold_waits_for_cooldown() {
        let tuning = Tuning::default();
        let mut burger = Burger::new(Vec2::new(400.0, 300.0), &tuning);
        let held = pointer(400.0, 300.0, true);

        let (shots, _) = run_update(&mut burger, &held, 100.0, &tuning);
        assert_eq!(shots.len(), 1);

        // 100 ms accumulated on the firing frame, three more frames reach 400 ms
        for _ in 0..3 {
            let (shots, _) = run_update(&mut burger, &held, 100.0, &tuning);
            assert!(shots.is_empty());
        }
        // Fifth frame reaches 500 ms and re-arms, sixth fires
        let (shots, _) = run_update(&mut burger, &held, 100.0, &tuning);
        assert!(shots.is_empty());
        assert_eq!(burger.gate, ShotGate::Ready);
        let (shots, _) = run_update(&mut burger, &held, 100.0, &tuning);
        assert_eq!(shots.len(), 1);
    }

    #[test]
    fn test_dead_burger_ignores_input() {
        let tuning = Tuning::default();
        let mut burger = Burger::new(Vec2::new(400.0, 300.0), &tuning);
        burger.set_health(0);
        let before = burger.rect;
        let (shots, events) = run_update(&mut burger, &pointer(10.0, 10.0, true), 16.0, &tuning);
        assert_eq!(burger.rect, before);
        assert!(shots.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_health_setter_clamps() {
        let tuning = Tuning::default();
        let mut burger = Burger::new(Vec2::ZERO, &tuning);
        burger.set_health(-40);
        assert_eq!(burger.health(), 0);
        // Guard checks current value, so assignments still go through at zero
        burger.set_health(30);
        assert_eq!(burger.health(), 30);
        burger.set_health(1000);
        assert_eq!(burger.health(), 100);
    }

    #[test]
    fn test_bear_moves_by_velocity() {
        let tuning = Tuning::default();
        let mut bear = TeddyBear::new(
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Vec2::new(0.1, -0.2),
            10_000.0,
        );
        run_update(&mut bear, &FrameInput::default(), 10.0, &tuning);
        assert!((bear.rect.x - 101.0).abs() < 1e-4);
        assert!((bear.rect.y - 98.0).abs() < 1e-4);
    }

    #[test]
    fn test_bear_fires_after_delay() {
        let tuning = Tuning::default();
        let mut bear = TeddyBear::new(Rect::new(100.0, 100.0, 50.0, 50.0), Vec2::ZERO, 30.0);
        let (shots, _) = run_update(&mut bear, &FrameInput::default(), 20.0, &tuning);
        assert!(shots.is_empty());
        let (shots, events) = run_update(&mut bear, &FrameInput::default(), 20.0, &tuning);
        assert_eq!(shots.len(), 1);
        assert_eq!(events, vec![GameEvent::BearShot]);
        assert_eq!(shots[0].kind, ProjectileKind::TeddyBear);
        assert!(shots[0].velocity_y > 0.0);
        assert_eq!(bear.shot_elapsed_ms, 0.0);
        assert!(bear.firing_delay_ms >= tuning.bear_min_firing_delay_ms);
        assert!(
            bear.firing_delay_ms < tuning.bear_min_firing_delay_ms + tuning.bear_firing_range_ms
        );
    }

    #[test]
    fn test_inactive_bear_is_frozen() {
        let tuning = Tuning::default();
        let mut bear = TeddyBear::new(Rect::new(100.0, 100.0, 50.0, 50.0), Vec2::ONE, 1.0);
        bear.active = false;
        let (shots, _) = run_update(&mut bear, &FrameInput::default(), 50.0, &tuning);
        assert_eq!(bear.rect.position(), Vec2::new(100.0, 100.0));
        assert!(shots.is_empty());
    }

    #[test]
    fn test_projectile_deactivates_off_screen() {
        let tuning = Tuning::default();
        let mut fries = Projectile::new(ProjectileKind::FrenchFries, Vec2::new(400.0, 20.0), &tuning);
        run_update(&mut fries, &FrameInput::default(), 10.0, &tuning);
        assert!(fries.active);
        // 0.3 px/ms for 200 ms moves 60 px up, fully past the top edge
        run_update(&mut fries, &FrameInput::default(), 200.0, &tuning);
        assert!(!fries.active);
    }

    #[test]
    fn test_explosion_finishes_after_all_frames() {
        let tuning = Tuning::default();
        let mut explosion = Explosion::new(Vec2::new(100.0, 100.0), &tuning);
        for expected in 1..tuning.explosion_frames {
            run_update(&mut explosion, &FrameInput::default(), tuning.explosion_frame_ms, &tuning);
            assert_eq!(explosion.frame, expected);
            assert!(!explosion.finished);
        }
        run_update(&mut explosion, &FrameInput::default(), tuning.explosion_frame_ms, &tuning);
        assert!(explosion.finished);
        assert_eq!(explosion.frame, tuning.explosion_frames - 1);
    }

    #[test]
    fn test_world_new_fills_population() {
        let world = World::new(Tuning::default(), 42);
        assert_eq!(world.bears.len(), world.tuning.max_bears);
        assert_eq!(world.burger.rect.center(), Vec2::new(400.0, 525.0));
        assert_eq!(world.burger.health(), 100);
    }

    #[test]
    fn test_death_latch_fires_once() {
        let mut world = World::empty(Tuning::default(), 1);
        world.burger.set_health(0);
        world.check_burger_kill();
        world.check_burger_kill();
        world.burger.take_damage(10);
        world.check_burger_kill();
        let deaths = world
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::BurgerDied)
            .count();
        assert_eq!(deaths, 1);
        assert!(world.burger_dead());
    }

    #[test]
    fn test_prune_removes_dead_entities() {
        let tuning = Tuning::default();
        let mut world = World::empty(tuning.clone(), 1);
        let mut dead_bear = TeddyBear::new(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::ZERO, 100.0);
        dead_bear.active = false;
        world.bears.push(dead_bear);
        world
            .bears
            .push(TeddyBear::new(Rect::new(50.0, 0.0, 10.0, 10.0), Vec2::ZERO, 100.0));
        let mut spent = Projectile::new(ProjectileKind::TeddyBear, Vec2::ZERO, &tuning);
        spent.active = false;
        world.projectiles.push(spent);
        let mut done = Explosion::new(Vec2::ZERO, &tuning);
        done.finished = true;
        world.explosions.push(done);

        world.prune();
        assert_eq!(world.bears.len(), 1);
        assert_eq!(world.bears[0].rect.x, 50.0);
        assert!(world.projectiles.is_empty());
        assert!(world.explosions.is_empty());
    }

    #[test]
    fn test_draw_list_covers_every_entity() {
        let world = World::new(Tuning::default(), 3);
        let list = world.draw_list();
        assert_eq!(list.len(), 1 + world.bears.len());
        assert_eq!(list[0].sprite, SpriteKind::Burger);
        assert!(list[1..].iter().all(|d| d.sprite == SpriteKind::TeddyBear));
    }

    proptest! {
        #[test]
        fn prop_burger_stays_in_window(x in -5000.0f32..5000.0, y in -5000.0f32..5000.0) {
            let tuning = Tuning::default();
            let mut burger = Burger::new(Vec2::new(400.0, 300.0), &tuning);
            run_update(&mut burger, &pointer(x, y, false), 16.0, &tuning);
            prop_assert!(burger.rect.is_within(tuning.window_width, tuning.window_height));
        }

        #[test]
        fn prop_health_never_negative(hits in proptest::collection::vec(0i32..60, 0..40)) {
            let tuning = Tuning::default();
            let mut burger = Burger::new(Vec2::ZERO, &tuning);
            for amount in hits {
                burger.take_damage(amount);
                prop_assert!(burger.health() >= 0);
            }
        }
    }
}
