//! End boss: a giant hen with a small state machine.
//!
//! ```text
//!   Alert ──12 frames──▶ Patrol ◀──far── Attack
//!                          └────near────▶  │
//!   (any, energy 0) ─────────────────────▶ Dead
//! ```
//!
//! `Hurt` is not a mode of its own: it overlays Patrol/Attack for the hurt
//! window after a bottle hit and only changes what is drawn and whether the
//! boss deals contact damage. Movement, combat and animation are methods on
//! the boss operating on its own state; the world feeds in the player body,
//! the clock and the RNG.

use log::debug;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::animation::{Animator, Playback, Step};
use crate::config::BossTuning;
use crate::entity::{Entity, Inset};
use crate::physics::{self, Fall, Gravity};
use crate::sprites;

pub const WIDTH: f64 = 250.0;
pub const HEIGHT: f64 = 400.0;
const HITBOX: Inset = Inset::new(70.0, 20.0, 30.0, 25.0);

/// Observable state, with the hurt overlay folded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossState {
    Alert,
    Patrol,
    Attack,
    Hurt,
    Dead,
}

/// Underlying behaviour mode. Transitions: Alert → Patrol (once),
/// Patrol ⇄ Attack, any → Dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Alert,
    Patrol,
    Attack,
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossPose {
    Alert,
    Walk,
    Attack,
    Jump,
    Hurt,
    Dead,
}

/// Something the world may want to react to (sounds, cut-scene input lock).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossCue {
    AlertStarted,
    CombatBegan,
    AttackStarted,
    Jumped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossHit {
    Hurt,
    Killed,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub body: Entity,
    spawn_x: f64,
    tuning: BossTuning,
    energy: i32,
    mode: Mode,
    alert_frames: u32,
    bar_visible: bool,
    last_hit_ms: Option<f64>,
    patrol_dir: f64,
    to_delete: bool,
    animator: Animator<BossPose>,
}

impl Boss {
    pub fn new(x: f64, tuning: &BossTuning) -> Self {
        let body = Entity::new(x, tuning.ground_y, WIDTH, HEIGHT).with_offset(HITBOX);
        Self {
            body,
            spawn_x: x,
            tuning: tuning.clone(),
            energy: tuning.max_energy,
            mode: Mode::Alert,
            alert_frames: 0,
            bar_visible: false,
            last_hit_ms: None,
            patrol_dir: -1.0,
            to_delete: false,
            animator: Animator::new(sprites::BOSS_ALERT[0]),
        }
    }

    /// Back to the spawn state: Alert, full energy, hidden health bar.
    pub fn reset(&mut self) {
        *self = Boss::new(self.spawn_x, &self.tuning);
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn is_dead(&self) -> bool {
        self.mode == Mode::Dead
    }

    pub fn to_delete(&self) -> bool {
        self.to_delete
    }

    pub fn bar_visible(&self) -> bool {
        self.bar_visible
    }

    pub fn is_hurt(&self, now: f64) -> bool {
        self.last_hit_ms
            .is_some_and(|t| now - t < self.tuning.hurt_window_ms)
    }

    /// True while the alert intro is on screen (started, not yet finished).
    pub fn is_alerting(&self) -> bool {
        self.mode == Mode::Alert && self.alert_frames > 0
    }

    /// Whether bottles and contact count; the alert intro is non-interactive.
    pub fn is_engaged(&self) -> bool {
        matches!(self.mode, Mode::Patrol | Mode::Attack)
    }

    pub fn state(&self, now: f64) -> BossState {
        match self.mode {
            Mode::Dead => BossState::Dead,
            Mode::Alert => BossState::Alert,
            _ if self.is_hurt(now) => BossState::Hurt,
            Mode::Patrol => BossState::Patrol,
            Mode::Attack => BossState::Attack,
        }
    }

    pub fn image(&self) -> &'static str {
        self.animator.image()
    }

    pub fn gravity(&self) -> Gravity {
        Gravity {
            accel: self.tuning.gravity,
            ground_y: Some(self.tuning.ground_y),
        }
    }

    pub fn is_above_ground(&self) -> bool {
        physics::is_above_ground(&self.body, &self.gravity())
    }

    fn distance_to(&self, player: &Entity) -> f64 {
        (player.center_x() - self.body.center_x()).abs()
    }

    /// Decide transitions; runs on the animation cadence before [`Boss::animate`].
    pub fn think(&mut self, player: &Entity, rng: &mut SmallRng) -> Option<BossCue> {
        let distance = self.distance_to(player);
        match self.mode {
            Mode::Dead => None,
            Mode::Alert => {
                if distance > self.tuning.wake_distance && self.alert_frames == 0 {
                    return None;
                }
                self.alert_frames += 1;
                if self.alert_frames >= self.tuning.alert_frames {
                    self.mode = Mode::Patrol;
                    self.bar_visible = true;
                    debug!("boss: alert finished, entering patrol");
                    Some(BossCue::CombatBegan)
                } else if self.alert_frames == 1 {
                    debug!("boss: player spotted at {distance:.0}px");
                    Some(BossCue::AlertStarted)
                } else {
                    None
                }
            }
            Mode::Patrol => {
                if distance <= self.tuning.attack_trigger {
                    self.mode = Mode::Attack;
                    debug!("boss: attacking");
                    Some(BossCue::AttackStarted)
                } else {
                    self.maybe_jump(self.tuning.patrol_jump_chance, rng)
                }
            }
            Mode::Attack => {
                if distance > self.tuning.disengage_distance {
                    self.mode = Mode::Patrol;
                    debug!("boss: player out of reach, back to patrol");
                    None
                } else {
                    self.maybe_jump(self.tuning.attack_jump_chance, rng)
                }
            }
        }
    }

    fn maybe_jump(&mut self, chance: f64, rng: &mut SmallRng) -> Option<BossCue> {
        if self.is_above_ground() || !rng.gen_bool(chance.clamp(0.0, 1.0)) {
            return None;
        }
        self.body.speed_y = self.tuning.jump_speed;
        if self.animator.pose() == Some(BossPose::Jump) {
            self.animator.restart();
        }
        Some(BossCue::Jumped)
    }

    /// Horizontal motion for one movement tick. Attack re-aims at the player
    /// every tick.
    pub fn movement_tick(&mut self, player: &Entity) {
        match self.mode {
            Mode::Alert | Mode::Dead => {}
            Mode::Patrol => {
                self.body.x += self.patrol_dir * self.tuning.patrol_speed;
                if self.body.x <= self.spawn_x - self.tuning.patrol_range {
                    self.patrol_dir = 1.0;
                } else if self.body.x >= self.spawn_x + self.tuning.patrol_range {
                    self.patrol_dir = -1.0;
                }
                self.body.other_direction = self.patrol_dir > 0.0;
            }
            Mode::Attack => {
                let delta = player.center_x() - self.body.center_x();
                if delta.abs() > f64::EPSILON {
                    let dir = delta.signum();
                    self.body.x += dir * self.tuning.attack_speed;
                    self.body.other_direction = dir > 0.0;
                    self.patrol_dir = dir;
                }
            }
        }
    }

    pub fn apply_gravity(&mut self) -> Fall {
        let gravity = self.gravity();
        physics::apply_gravity(&mut self.body, &gravity)
    }

    /// Close enough to peck the player: attacking, within `attack_range`
    /// horizontally and outside the boss's own hurt window.
    pub fn attack_reach(&self, player: &Entity, now: f64) -> bool {
        self.mode == Mode::Attack
            && !self.is_hurt(now)
            && self.body.gap_x(player) < self.tuning.attack_range
    }

    /// Whether touching the boss hurts right now.
    pub fn deals_contact_damage(&self, now: f64) -> bool {
        self.is_engaged() && !self.is_hurt(now)
    }

    /// A bottle hit: fixed damage, restarts the hurt window.
    pub fn hit(&mut self, now: f64) -> BossHit {
        if self.is_dead() {
            debug!("boss: hit ignored, already dead");
            return BossHit::Ignored;
        }
        self.energy = (self.energy - self.tuning.hit_damage).max(0);
        self.last_hit_ms = Some(now);
        if self.energy == 0 {
            self.mode = Mode::Dead;
            self.body.speed_y = self.body.speed_y.min(0.0);
            debug!("boss: defeated");
            BossHit::Killed
        } else {
            debug!("boss: hurt, energy {}", self.energy);
            BossHit::Hurt
        }
    }

    /// Sprite frame for the living boss; runs on the animation cadence.
    pub fn animate(&mut self, now: f64) {
        let (pose, seq, playback) = match self.mode {
            Mode::Dead => return,
            Mode::Alert if self.alert_frames == 0 => return,
            Mode::Alert => (BossPose::Alert, sprites::BOSS_ALERT, Playback::Loop),
            _ if self.is_hurt(now) => (BossPose::Hurt, sprites::BOSS_HURT, Playback::Loop),
            _ if self.is_above_ground() => (BossPose::Jump, sprites::BOSS_JUMP, Playback::Once),
            Mode::Attack => (BossPose::Attack, sprites::BOSS_ATTACK, Playback::Loop),
            Mode::Patrol => (BossPose::Walk, sprites::BOSS_WALK, Playback::Loop),
        };
        self.animator.play(pose, seq, playback);
    }

    /// One frame of the death sequence (slower cadence). Returns true once,
    /// when the last frame is reached; the boss then marks itself for removal.
    pub fn death_tick(&mut self) -> bool {
        if !self.is_dead() || self.to_delete {
            return false;
        }
        let step = self.animator.play(BossPose::Dead, sprites::BOSS_DEAD, Playback::Once);
        if step == Step::Finished {
            self.to_delete = true;
            return true;
        }
        false
    }

    /// Where the floating health bar sits relative to the boss sprite.
    pub fn health_bar_offset(&self) -> (f64, f64) {
        (25.0, -40.0)
    }
}
