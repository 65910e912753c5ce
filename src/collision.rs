//! Hit-testing and the per-tick collision scan.
//!
//! Detection only reads the world and reports [`CollisionEvent`]s by index;
//! [`crate::combat`] applies them.

use crate::entity::{Entity, Rect};
use crate::world::World;

/// Strict AABB overlap: rectangles that only touch along an edge do not
/// overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right <= b.left || b.right <= a.left || a.bottom <= b.top || b.bottom <= a.top)
}

/// Inset hitboxes of both entities overlap.
pub fn collides(a: &Entity, b: &Entity) -> bool {
    overlaps(&a.hitbox(), &b.hitbox())
}

/// `attacker` lands on `defender`: overlapping and falling, or level with its
/// feet within `band` px of the defender's top. A falling attacker can be
/// deep inside the defender by the time a scan sees it, so the band only
/// applies at `speed_y == 0`.
pub fn collides_from_top(attacker: &Entity, defender: &Entity, band: f64) -> bool {
    collides(attacker, defender)
        && attacker.speed_y <= 0.0
        && (attacker.speed_y < 0.0 || attacker.hitbox().bottom <= defender.hitbox().top + band)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionEvent {
    Stomp { enemy: usize },
    SideHit { enemy: usize },
    Coin { index: usize },
    Bottle { index: usize },
    ProjectileHit { projectile: usize, enemy: usize },
}

/// Scan every pair the game cares about.
pub fn detect(world: &World, now: f64) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    let character = world.character();
    let player = &character.body;

    if !character.is_dead() {
        let band = character.stomp_band();
        for (i, enemy) in world.level().enemies.iter().enumerate() {
            if enemy.is_dead() || !enemy.is_targetable() {
                continue;
            }
            let body = enemy.body();
            let stomped = collides_from_top(player, body, band)
                || (character.landed_since_scan() && collides(player, body));
            if enemy.can_be_stomped() && stomped {
                events.push(CollisionEvent::Stomp { enemy: i });
                continue;
            }
            let touching = collides(player, body)
                || enemy.as_boss().is_some_and(|b| b.attack_reach(player, now));
            if touching && !character.is_invulnerable(now) && enemy.deals_contact_damage(now) {
                events.push(CollisionEvent::SideHit { enemy: i });
            }
        }

        for (i, coin) in world.level().coins.iter().enumerate() {
            if !coin.collected && collides(player, &coin.body) {
                events.push(CollisionEvent::Coin { index: i });
            }
        }
        for (i, bottle) in world.level().bottles.iter().enumerate() {
            if !bottle.collected && collides(player, &bottle.body) {
                events.push(CollisionEvent::Bottle { index: i });
            }
        }
    }

    for (p, projectile) in world.projectiles().iter().enumerate() {
        if !projectile.can_hit() {
            continue;
        }
        let sweep = projectile.sweep();
        let hit = world
            .level()
            .enemies
            .iter()
            .position(|e| !e.is_dead() && e.is_targetable() && overlaps(&sweep, &e.body().hitbox()));
        if let Some(enemy) = hit {
            events.push(CollisionEvent::ProjectileHit { projectile: p, enemy });
        }
    }
    events
}
