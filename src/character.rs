//! The player character.

use log::{debug, info};

use crate::animation::{Animator, Playback, Step};
use crate::config::CharacterTuning;
use crate::entity::{Entity, Inset};
use crate::input::InputState;
use crate::physics::{self, Fall, Gravity};
use crate::sprites;

pub const WIDTH: f64 = 100.0;
pub const HEIGHT: f64 = 250.0;
const HITBOX: Inset = Inset::new(110.0, 15.0, 25.0, 30.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterPose {
    Idle,
    LongIdle,
    Walking,
    Jumping,
    /// Locked in place while the boss intro plays.
    Immobilized,
    Hurt,
    Dead,
}

/// What a movement tick did with the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motion {
    pub moved: bool,
    pub jumped: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    pub body: Entity,
    tuning: CharacterTuning,
    energy: i32,
    last_hit_ms: Option<f64>,
    last_stomp_ms: Option<f64>,
    last_action_ms: f64,
    immobilized: bool,
    moving: bool,
    landed_since_scan: bool,
    animator: Animator<CharacterPose>,
}

impl Character {
    pub fn new(tuning: &CharacterTuning) -> Self {
        let body = Entity::new(tuning.start_x, tuning.ground_y, WIDTH, HEIGHT).with_offset(HITBOX);
        Self {
            body,
            tuning: tuning.clone(),
            energy: tuning.max_energy,
            last_hit_ms: None,
            last_stomp_ms: None,
            last_action_ms: 0.0,
            immobilized: false,
            moving: false,
            landed_since_scan: false,
            animator: Animator::new(sprites::CHARACTER_IDLE[0]),
        }
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn max_energy(&self) -> i32 {
        self.tuning.max_energy
    }

    pub fn is_dead(&self) -> bool {
        self.energy <= 0
    }

    pub fn is_hurt(&self, now: f64) -> bool {
        self.last_hit_ms
            .is_some_and(|t| now - t < self.tuning.hurt_window_ms)
    }

    /// Shortly after a stomp the character cannot be hurt by contact.
    pub fn in_stomp_grace(&self, now: f64) -> bool {
        self.last_stomp_ms
            .is_some_and(|t| now - t < self.tuning.stomp_grace_ms)
    }

    pub fn is_invulnerable(&self, now: f64) -> bool {
        self.is_hurt(now) || self.in_stomp_grace(now)
    }

    pub fn is_immobilized(&self) -> bool {
        self.immobilized
    }

    pub fn set_immobilized(&mut self, on: bool) {
        if self.immobilized != on {
            debug!("character immobilized: {on}");
            self.immobilized = on;
        }
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

    pub fn image(&self) -> &'static str {
        self.animator.image()
    }

    pub fn stomp_band(&self) -> f64 {
        self.tuning.stomp_band
    }

    /// Touched the ground since the previous collision scan. A fall ends in
    /// two or three gravity ticks, often between scans.
    pub fn landed_since_scan(&self) -> bool {
        self.landed_since_scan
    }

    pub fn end_scan(&mut self) {
        self.landed_since_scan = false;
    }

    /// Apply one movement tick of input. Dead or immobilized characters ignore
    /// it. Walking is bounded to `[0, level_end_x]`; jumps start only from
    /// the ground.
    pub fn handle_input(&mut self, input: &InputState, level_end_x: f64, now: f64) -> Motion {
        let mut motion = Motion::default();
        self.moving = false;
        if self.is_dead() || self.immobilized {
            return motion;
        }
        let airborne = self.is_above_ground();
        let t = &self.tuning;
        if input.right && self.body.x < level_end_x {
            self.body.x += physics::horizontal_step(t.speed, airborne, true, t.air_control_right, t.air_control_left);
            self.body.other_direction = false;
            motion.moved = true;
        }
        if input.left && self.body.x > 0.0 {
            self.body.x -= physics::horizontal_step(t.speed, airborne, false, t.air_control_right, t.air_control_left);
            self.body.other_direction = true;
            motion.moved = true;
        }
        // A jump keeps y on the ground until the next gravity tick.
        if input.wants_jump() && !airborne && self.body.speed_y <= 0.0 {
            self.body.speed_y = t.jump_speed;
            self.animator.restart();
            motion.jumped = true;
        }
        self.moving = motion.moved;
        if motion.moved || motion.jumped || input.throw {
            self.last_action_ms = now;
        }
        motion
    }

    pub fn apply_gravity(&mut self) -> Fall {
        let gravity = self.gravity();
        let fall = physics::apply_gravity(&mut self.body, &gravity);
        if fall == Fall::Landed {
            self.landed_since_scan = true;
        }
        fall
    }

    /// Contact damage. Ignored while dead or inside the hurt window; returns
    /// whether damage was applied.
    pub fn hit(&mut self, now: f64) -> bool {
        if self.is_dead() || self.is_hurt(now) {
            return false;
        }
        self.energy = (self.energy - self.tuning.hit_damage).max(0);
        self.last_hit_ms = Some(now);
        self.last_action_ms = now;
        if self.is_dead() {
            info!("character died");
        } else {
            debug!("character hurt, energy {}", self.energy);
        }
        true
    }

    /// Bounce off a stomped enemy.
    pub fn stomp(&mut self, now: f64) {
        self.body.speed_y = self.tuning.stomp_bounce;
        self.last_stomp_ms = Some(now);
        self.last_action_ms = now;
        self.animator.restart();
    }

    pub fn pose(&self, now: f64) -> CharacterPose {
        if self.is_dead() {
            CharacterPose::Dead
        } else if self.is_hurt(now) {
            CharacterPose::Hurt
        } else if self.immobilized {
            CharacterPose::Immobilized
        } else if self.is_above_ground() {
            CharacterPose::Jumping
        } else if self.moving {
            CharacterPose::Walking
        } else if now - self.last_action_ms >= self.tuning.long_idle_ms {
            CharacterPose::LongIdle
        } else {
            CharacterPose::Idle
        }
    }

    /// Advance the sprite for the current pose. `Step::Finished` with the
    /// dead pose means the death sequence is complete.
    pub fn animate(&mut self, now: f64) -> (CharacterPose, Step) {
        let pose = self.pose(now);
        let (seq, playback) = match pose {
            CharacterPose::Dead => (sprites::CHARACTER_DEAD, Playback::Once),
            CharacterPose::Hurt => (sprites::CHARACTER_HURT, Playback::Loop),
            CharacterPose::Immobilized => (sprites::CHARACTER_LONG_IDLE, Playback::Loop),
            CharacterPose::Jumping => (sprites::CHARACTER_JUMP, Playback::Once),
            CharacterPose::Walking => (sprites::CHARACTER_WALK, Playback::Loop),
            CharacterPose::LongIdle => (sprites::CHARACTER_LONG_IDLE, Playback::Loop),
            CharacterPose::Idle => (sprites::CHARACTER_IDLE, Playback::Loop),
        };
        (pose, self.animator.play(pose, seq, playback))
    }
}
