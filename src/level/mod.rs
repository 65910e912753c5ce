//! Levels: static descriptors (one file per level) and the live entity
//! collections the world builds from them.

use log::debug;
use rand::rngs::SmallRng;

use crate::boss::Boss;
use crate::collectible::{BottlePickup, Coin};
use crate::config::GameConfig;
use crate::enemy::{Enemy, GroundEnemy, GroundKind};
use crate::entity::Entity;
use crate::error::LevelError;

mod level1;

pub use level1::LEVEL1;

/// One enemy placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnemySpawn {
    Chicken { x: f64 },
    Chick { x: f64 },
    Boss { x: f64 },
}

impl EnemySpawn {
    pub fn x(&self) -> f64 {
        match *self {
            EnemySpawn::Chicken { x } | EnemySpawn::Chick { x } | EnemySpawn::Boss { x } => x,
        }
    }
}

/// Static level layout.
#[derive(Debug)]
pub struct LevelDesc {
    pub name: &'static str,
    /// Rightmost x the character may walk to.
    pub level_end_x: f64,
    /// Number of background tiles to the right of the first one.
    pub background_tiles: i32,
    pub enemies: &'static [EnemySpawn],
    pub coins: &'static [(f64, f64)],
    pub bottles: &'static [f64],
    pub clouds: &'static [f64],
}

pub const TILE_WIDTH: f64 = 720.0;
pub const TILE_HEIGHT: f64 = 480.0;
/// Tiles overlap by a pixel so no seam shows between them.
pub const TILE_STEP: f64 = 719.0;
const CLOUD_DRIFT: f64 = 0.15;

/// A drifting cloud band.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub body: Entity,
    pub image: &'static str,
}

/// Live entities for one playthrough.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub name: &'static str,
    pub level_end_x: f64,
    pub background_tiles: i32,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub bottles: Vec<BottlePickup>,
    pub clouds: Vec<Cloud>,
    pub total_coins: usize,
}

impl LevelDesc {
    /// Reject descriptors the world could not simulate.
    pub fn validate(&self) -> Result<(), LevelError> {
        if !self.level_end_x.is_finite() || self.level_end_x <= 0.0 {
            return Err(LevelError::BadBoundary(self.name));
        }
        let non_finite = |what| LevelError::NonFinite { level: self.name, what };
        if self.enemies.iter().any(|e| !e.x().is_finite()) {
            return Err(non_finite("enemy"));
        }
        if self.coins.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(non_finite("coin"));
        }
        if self.bottles.iter().any(|x| !x.is_finite()) {
            return Err(non_finite("bottle"));
        }
        if self.clouds.iter().any(|x| !x.is_finite()) {
            return Err(non_finite("cloud"));
        }
        let bosses = self.enemies.iter().filter(|e| matches!(e, EnemySpawn::Boss { .. })).count();
        if bosses != 1 {
            return Err(LevelError::BossCount { level: self.name, found: bosses });
        }
        Ok(())
    }
}

impl Level {
    pub fn build(desc: &LevelDesc, config: &GameConfig, rng: &mut SmallRng) -> Result<Self, LevelError> {
        desc.validate()?;
        let enemies = desc
            .enemies
            .iter()
            .map(|spawn| match *spawn {
                EnemySpawn::Chicken { x } => Enemy::Ground(GroundEnemy::new(GroundKind::Chicken, x, &config.enemy, rng)),
                EnemySpawn::Chick { x } => Enemy::Ground(GroundEnemy::new(GroundKind::Chick, x, &config.enemy, rng)),
                EnemySpawn::Boss { x } => Enemy::Boss(Boss::new(x, &config.boss)),
            })
            .collect();
        let coins: Vec<Coin> = desc.coins.iter().map(|&(x, y)| Coin::new(x, y)).collect();
        let bottles = desc.bottles.iter().enumerate().map(|(i, &x)| BottlePickup::new(x, i)).collect();
        let clouds = desc
            .clouds
            .iter()
            .enumerate()
            .map(|(i, &x)| Cloud {
                body: Entity::new(x, 20.0, 500.0, 250.0),
                image: crate::sprites::CLOUDS[i % crate::sprites::CLOUDS.len()],
            })
            .collect();
        debug!("built level '{}' with {} enemies, {} coins", desc.name, desc.enemies.len(), coins.len());
        Ok(Self {
            name: desc.name,
            level_end_x: desc.level_end_x,
            background_tiles: desc.background_tiles,
            enemies,
            total_coins: coins.len(),
            coins,
            bottles,
            clouds,
        })
    }

    pub fn boss(&self) -> Option<&crate::boss::Boss> {
        self.enemies.iter().find_map(Enemy::as_boss)
    }

    pub fn boss_mut(&mut self) -> Option<&mut crate::boss::Boss> {
        self.enemies.iter_mut().find_map(Enemy::as_boss_mut)
    }

    /// Leftmost and rightmost x the scenery covers.
    pub fn scenery_span(&self) -> (f64, f64) {
        (-TILE_STEP, (self.background_tiles + 1) as f64 * TILE_STEP)
    }

    /// Clouds drift left and re-enter from the far right.
    pub fn drift_clouds(&mut self) {
        let (start, end) = self.scenery_span();
        for cloud in &mut self.clouds {
            cloud.body.x -= CLOUD_DRIFT;
            if cloud.body.x + cloud.body.width < start {
                cloud.body.x = end;
            }
        }
    }

    /// Drop everything marked for removal.
    pub fn compact(&mut self) {
        self.enemies.retain(|e| !e.to_delete());
        self.coins.retain(|c| !c.collected);
        self.bottles.retain(|b| !b.collected);
    }
}

/// Every level in play order.
pub fn levels() -> &'static [&'static LevelDesc] {
    use std::sync::OnceLock;
    static LEVELS: OnceLock<Vec<&'static LevelDesc>> = OnceLock::new();
    LEVELS.get_or_init(|| vec![&LEVEL1])
}
