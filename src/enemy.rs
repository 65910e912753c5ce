//! Enemies: walking chickens and chicks, and the [`Enemy`] sum type the world
//! stores them in alongside the boss.
//!
//! Behaviour differences are capability methods on [`Enemy`] rather than
//! checks on the concrete kind at the call site.

use log::debug;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::animation::{Animator, Playback};
use crate::boss::Boss;
use crate::config::EnemyTuning;
use crate::entity::{Entity, Inset};
use crate::sprites::{self, Sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroundKind {
    Chicken,
    Chick,
}

impl GroundKind {
    fn body(self, x: f64) -> Entity {
        match self {
            GroundKind::Chicken => Entity::new(x, 360.0, 80.0, 70.0).with_offset(Inset::uniform(5.0)),
            GroundKind::Chick => Entity::new(x, 375.0, 50.0, 50.0).with_offset(Inset::uniform(4.0)),
        }
    }

    fn walk(self) -> Sequence {
        match self {
            GroundKind::Chicken => sprites::CHICKEN_WALK,
            GroundKind::Chick => sprites::CHICK_WALK,
        }
    }

    fn dead(self) -> Sequence {
        match self {
            GroundKind::Chicken => sprites::CHICKEN_DEAD,
            GroundKind::Chick => sprites::CHICK_DEAD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroundPose {
    Walk,
    Dead,
}

/// A chicken or chick walking left at a speed drawn once at spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundEnemy {
    pub body: Entity,
    pub kind: GroundKind,
    speed: f64,
    died_at: Option<f64>,
    linger_ms: f64,
    to_delete: bool,
    animator: Animator<GroundPose>,
}

impl GroundEnemy {
    pub fn new(kind: GroundKind, x: f64, tuning: &EnemyTuning, rng: &mut SmallRng) -> Self {
        let speed = tuning.min_speed + rng.gen_range(0.0..1.0) * tuning.speed_spread;
        Self {
            body: kind.body(x),
            kind,
            speed,
            died_at: None,
            linger_ms: tuning.death_linger_ms,
            to_delete: false,
            animator: Animator::new(kind.walk()[0]),
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_dead(&self) -> bool {
        self.died_at.is_some()
    }

    pub fn to_delete(&self) -> bool {
        self.to_delete
    }

    pub fn image(&self) -> &'static str {
        self.animator.image()
    }

    /// Kill the enemy. Returns false if it was already dead.
    pub fn kill(&mut self, now: f64) -> bool {
        if self.is_dead() {
            return false;
        }
        self.died_at = Some(now);
        debug!("{:?} killed at x={:.0}", self.kind, self.body.x);
        true
    }

    pub fn movement_tick(&mut self) {
        if !self.is_dead() {
            self.body.x -= self.speed;
        }
    }

    pub fn animate(&mut self, now: f64) {
        match self.died_at {
            None => {
                self.animator.play(GroundPose::Walk, self.kind.walk(), Playback::Loop);
            }
            Some(t) => {
                self.animator.play(GroundPose::Dead, self.kind.dead(), Playback::Once);
                if now - t >= self.linger_ms {
                    self.to_delete = true;
                }
            }
        }
    }
}

/// Result of a bottle striking an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileOutcome {
    Killed,
    BossHurt,
    BossKilled,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Enemy {
    Ground(GroundEnemy),
    Boss(Boss),
}

impl Enemy {
    pub fn body(&self) -> &Entity {
        match self {
            Enemy::Ground(g) => &g.body,
            Enemy::Boss(b) => &b.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Entity {
        match self {
            Enemy::Ground(g) => &mut g.body,
            Enemy::Boss(b) => &mut b.body,
        }
    }

    pub fn is_dead(&self) -> bool {
        match self {
            Enemy::Ground(g) => g.is_dead(),
            Enemy::Boss(b) => b.is_dead(),
        }
    }

    pub fn to_delete(&self) -> bool {
        match self {
            Enemy::Ground(g) => g.to_delete(),
            Enemy::Boss(b) => b.to_delete(),
        }
    }

    /// Ground enemies die from a stomp; the boss cannot be stomped.
    pub fn can_be_stomped(&self) -> bool {
        matches!(self, Enemy::Ground(g) if !g.is_dead())
    }

    /// Whether bottles and the character interact with it at all.
    pub fn is_targetable(&self) -> bool {
        match self {
            Enemy::Ground(g) => !g.is_dead(),
            Enemy::Boss(b) => b.is_engaged(),
        }
    }

    pub fn deals_contact_damage(&self, now: f64) -> bool {
        match self {
            Enemy::Ground(g) => !g.is_dead(),
            Enemy::Boss(b) => b.deals_contact_damage(now),
        }
    }

    pub fn on_projectile_hit(&mut self, now: f64) -> ProjectileOutcome {
        use crate::boss::BossHit;
        match self {
            Enemy::Ground(g) => {
                if g.kill(now) {
                    ProjectileOutcome::Killed
                } else {
                    ProjectileOutcome::Ignored
                }
            }
            Enemy::Boss(b) => match b.hit(now) {
                BossHit::Hurt => ProjectileOutcome::BossHurt,
                BossHit::Killed => ProjectileOutcome::BossKilled,
                BossHit::Ignored => ProjectileOutcome::Ignored,
            },
        }
    }

    /// Anchor for a floating health bar, if the enemy shows one.
    pub fn health_bar_offset(&self) -> Option<(f64, f64)> {
        match self {
            Enemy::Boss(b) if b.bar_visible() && !b.is_dead() => Some(b.health_bar_offset()),
            _ => None,
        }
    }

    pub fn image(&self) -> &'static str {
        match self {
            Enemy::Ground(g) => g.image(),
            Enemy::Boss(b) => b.image(),
        }
    }

    pub fn as_boss(&self) -> Option<&Boss> {
        match self {
            Enemy::Boss(b) => Some(b),
            Enemy::Ground(_) => None,
        }
    }

    pub fn as_boss_mut(&mut self) -> Option<&mut Boss> {
        match self {
            Enemy::Boss(b) => Some(b),
            Enemy::Ground(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BossTuning;
    use rand::SeedableRng;

    fn chicken() -> GroundEnemy {
        let mut rng = SmallRng::seed_from_u64(1);
        GroundEnemy::new(GroundKind::Chicken, 700.0, &EnemyTuning::default(), &mut rng)
    }

    #[test]
    fn speed_stays_within_tuning() {
        let tuning = EnemyTuning::default();
        let mut rng = SmallRng::seed_from_u64(99);
        for i in 0..200 {
            let g = GroundEnemy::new(GroundKind::Chick, i as f64, &tuning, &mut rng);
            assert!(g.speed() >= tuning.min_speed);
            assert!(g.speed() < tuning.min_speed + tuning.speed_spread);
        }
    }

    #[test]
    fn dead_enemies_stop_and_linger() {
        let mut g = chicken();
        g.movement_tick();
        assert!(g.body.x < 700.0);
        assert!(g.kill(1000.0));
        assert!(!g.kill(1100.0));
        let x = g.body.x;
        g.movement_tick();
        assert_eq!(g.body.x, x);

        g.animate(1200.0);
        assert_eq!(g.image(), sprites::CHICKEN_DEAD[0]);
        assert!(!g.to_delete());
        g.animate(2500.0);
        assert!(g.to_delete());
    }

    #[test]
    fn capabilities_by_kind() {
        let ground = Enemy::Ground(chicken());
        assert!(ground.can_be_stomped());
        assert!(ground.is_targetable());
        assert_eq!(ground.health_bar_offset(), None);

        let boss = Enemy::Boss(Boss::new(4500.0, &BossTuning::default()));
        assert!(!boss.can_be_stomped());
        assert!(!boss.is_targetable(), "boss is inert before its intro");
        assert!(boss.as_boss().is_some());
    }

    #[test]
    fn projectile_on_dead_chicken_is_ignored() {
        let mut e = Enemy::Ground(chicken());
        assert_eq!(e.on_projectile_hit(0.0), ProjectileOutcome::Killed);
        assert_eq!(e.on_projectile_hit(1.0), ProjectileOutcome::Ignored);
        assert!(!e.deals_contact_damage(1.0));
    }
}
