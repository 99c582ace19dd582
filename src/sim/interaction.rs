//! Game-specific collision outcomes
//!
//! Each rule runs a plain rectangle intersection test over active entities and
//! applies damage, scoring and destruction. Flags are only cleared here; the
//! entities themselves are removed later by `World::prune`.

use super::state::{Explosion, GameEvent, ProjectileKind, World};

/// Burger touching bears: bear destroyed, burger damaged. Returns hit count.
pub fn resolve_burger_bears(world: &mut World) -> usize {
    let burger_rect = world.burger.rect;
    let damage = world.tuning.bear_damage;
    let mut hits = 0;

    for bear in world.bears.iter_mut() {
        if bear.active && burger_rect.intersects(&bear.rect) {
            bear.active = false;
            world.burger.take_damage(damage);
            world
                .explosions
                .push(Explosion::new(bear.rect.center(), &world.tuning));
            world.events.push(GameEvent::BurgerDamaged);
            world.events.push(GameEvent::BearDestroyed);
            hits += 1;
        }
    }

    if hits > 0 {
        world.check_burger_kill();
    }
    hits
}

/// Bear projectiles hitting the burger. Returns hit count.
pub fn resolve_burger_projectiles(world: &mut World) -> usize {
    let burger_rect = world.burger.rect;
    let damage = world.tuning.teddy_bear_projectile_damage;
    let mut hits = 0;

    for projectile in world.projectiles.iter_mut() {
        if projectile.kind == ProjectileKind::TeddyBear
            && projectile.active
            && projectile.rect.intersects(&burger_rect)
        {
            projectile.active = false;
            world.burger.take_damage(damage);
            world.events.push(GameEvent::BurgerDamaged);
            hits += 1;
        }
    }

    if hits > 0 {
        world.check_burger_kill();
    }
    hits
}

/// French fries hitting bears: both destroyed, points awarded. Returns kill count.
pub fn resolve_bear_projectiles(world: &mut World) -> usize {
    let points = world.tuning.bear_points;
    let mut kills = 0;

    for bear in world.bears.iter_mut() {
        for projectile in world.projectiles.iter_mut() {
            if projectile.kind == ProjectileKind::FrenchFries
                && projectile.active
                && bear.active
                && projectile.rect.intersects(&bear.rect)
            {
                projectile.active = false;
                bear.active = false;
                world.score = world.score.saturating_add(points);
                world
                    .explosions
                    .push(Explosion::new(bear.rect.center(), &world.tuning));
                world.events.push(GameEvent::BearDestroyed);
                kills += 1;
            }
        }
    }
    kills
}
