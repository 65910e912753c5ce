//! Applies collision events: damage, kills, pickups and projectile hits.

use log::{debug, warn};

use crate::audio::{AudioPlayer, Sound};
use crate::collision::CollisionEvent;
use crate::enemy::{Enemy, ProjectileOutcome};
use crate::world::World;

/// Resolve one tick's events in detection order. Indices refer to the
/// collections as they were when detected; nothing is removed until the world
/// compacts after this returns.
pub fn resolve(world: &mut World, events: &[CollisionEvent], now: f64, audio: &mut dyn AudioPlayer) {
    for event in events {
        match *event {
            CollisionEvent::Stomp { enemy } => stomp(world, enemy, now, audio),
            CollisionEvent::SideHit { enemy } => side_hit(world, enemy, now, audio),
            CollisionEvent::Coin { index } => pick_coin(world, index, audio),
            CollisionEvent::Bottle { index } => pick_bottle(world, index, audio),
            CollisionEvent::ProjectileHit { projectile, enemy } => projectile_hit(world, projectile, enemy, now, audio),
        }
    }
}

fn stomp(world: &mut World, index: usize, now: f64, audio: &mut dyn AudioPlayer) {
    let Some(Enemy::Ground(g)) = world.level.enemies.get_mut(index) else {
        warn!("stomp on enemy #{index} that cannot be stomped");
        return;
    };
    if g.kill(now) {
        world.character.stomp(now);
        audio.play(Sound::ChickenDead, 0.5);
    }
}

fn side_hit(world: &mut World, index: usize, now: f64, audio: &mut dyn AudioPlayer) {
    let Some(enemy) = world.level.enemies.get(index) else {
        warn!("side hit from missing enemy #{index}");
        return;
    };
    // An earlier event this tick may have changed either side.
    if enemy.is_dead() || !enemy.deals_contact_damage(now) || world.character.is_invulnerable(now) {
        return;
    }
    if world.character.hit(now) {
        if world.character.is_dead() {
            audio.stop(Sound::Snore);
            audio.play(Sound::CharacterDead, 0.6);
        } else {
            audio.play(Sound::Hurt, 0.5);
        }
    }
}

fn pick_coin(world: &mut World, index: usize, audio: &mut dyn AudioPlayer) {
    match world.level.coins.get_mut(index) {
        Some(coin) if !coin.collected => {
            coin.collected = true;
            world.coins_collected += 1;
            audio.play(Sound::Coin, 0.4);
        }
        Some(_) => {}
        None => warn!("pickup of missing coin #{index}"),
    }
}

fn pick_bottle(world: &mut World, index: usize, audio: &mut dyn AudioPlayer) {
    if world.bottles_available >= world.config.projectile.max_bottles {
        return;
    }
    match world.level.bottles.get_mut(index) {
        Some(bottle) if !bottle.collected => {
            bottle.collected = true;
            world.bottles_available += 1;
            audio.play(Sound::BottlePickup, 0.4);
        }
        Some(_) => {}
        None => warn!("pickup of missing bottle #{index}"),
    }
}

fn projectile_hit(world: &mut World, projectile: usize, enemy: usize, now: f64, audio: &mut dyn AudioPlayer) {
    let Some(bottle) = world.projectiles.get_mut(projectile) else {
        warn!("hit from missing projectile #{projectile}");
        return;
    };
    // A bottle that reached the ground since the last scan already splashed.
    if bottle.splash() {
        audio.play(Sound::Splash, 0.5);
    } else if !bottle.can_hit() {
        return;
    }
    let Some(target) = world.level.enemies.get_mut(enemy) else {
        warn!("projectile hit on missing enemy #{enemy}");
        return;
    };
    match target.on_projectile_hit(now) {
        ProjectileOutcome::Killed => audio.play(Sound::ChickenDead, 0.5),
        ProjectileOutcome::BossHurt => audio.play(Sound::BossHurt, 0.6),
        ProjectileOutcome::BossKilled => audio.play(Sound::BossDead, 0.7),
        ProjectileOutcome::Ignored => debug!("projectile hit on enemy #{enemy} ignored"),
    }
}
