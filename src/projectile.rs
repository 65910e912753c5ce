//! Thrown salsa bottles.

use crate::animation::{Animator, Playback, Step};
use crate::config::ProjectileTuning;
use crate::entity::{Entity, Inset, Rect};
use crate::physics::{self, Gravity};
use crate::sprites;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flight {
    Flying,
    Splashing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThrownBottle {
    pub body: Entity,
    speed_x: f64,
    gravity: Gravity,
    splash_y: f64,
    flight: Flight,
    /// Hitbox at the previous collision scan.
    scanned_at: Rect,
    splashed_unscanned: bool,
    to_delete: bool,
    animator: Animator<Flight>,
}

impl ThrownBottle {
    /// Launch from the thrower's hand in the direction it faces.
    pub fn throw(thrower: &Entity, tuning: &ProjectileTuning) -> Self {
        let (x, speed_x) = if thrower.other_direction {
            (thrower.x - 20.0, -tuning.speed_x)
        } else {
            (thrower.x + 60.0, tuning.speed_x)
        };
        let mut body = Entity::new(x, thrower.y + 100.0, 60.0, 60.0)
            .with_offset(Inset::uniform(8.0))
            .facing_left(thrower.other_direction);
        body.speed_y = tuning.throw_speed_y;
        Self {
            scanned_at: body.hitbox(),
            body,
            speed_x,
            gravity: Gravity { accel: tuning.gravity, ground_y: None },
            splash_y: tuning.splash_y,
            flight: Flight::Flying,
            splashed_unscanned: false,
            to_delete: false,
            animator: Animator::new(sprites::BOTTLE_ROTATION[0]),
        }
    }

    pub fn flight(&self) -> Flight {
        self.flight
    }

    /// Only flying bottles can hit anything.
    pub fn is_active(&self) -> bool {
        self.flight == Flight::Flying
    }

    pub fn to_delete(&self) -> bool {
        self.to_delete
    }

    /// Flying, or hit the ground since the previous scan. A bottle can pass
    /// through a chicken's height between two scans and splash before the
    /// next one, so the scan still gets a say.
    pub fn can_hit(&self) -> bool {
        self.is_active() || self.splashed_unscanned
    }

    /// Area covered since the previous scan.
    pub fn sweep(&self) -> Rect {
        self.scanned_at.union(&self.body.hitbox())
    }

    pub fn end_scan(&mut self) {
        self.scanned_at = self.body.hitbox();
        self.splashed_unscanned = false;
    }

    pub fn image(&self) -> &'static str {
        self.animator.image()
    }

    pub fn fly(&mut self) {
        if self.is_active() {
            self.body.x += self.speed_x;
        }
    }

    /// Falls without a ground baseline and splashes once below `splash_y`.
    /// Returns true on the tick it splashes.
    pub fn apply_gravity(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        physics::apply_gravity(&mut self.body, &self.gravity);
        if self.body.y > self.splash_y {
            self.splash();
            self.splashed_unscanned = true;
            return true;
        }
        false
    }

    /// Stop in place and play the splash. Returns false if already splashing.
    pub fn splash(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.flight = Flight::Splashing;
        self.body.speed_y = 0.0;
        true
    }

    pub fn animate(&mut self) {
        match self.flight {
            Flight::Flying => {
                self.animator.play(Flight::Flying, sprites::BOTTLE_ROTATION, Playback::Loop);
            }
            Flight::Splashing => {
                if self.animator.play(Flight::Splashing, sprites::BOTTLE_SPLASH, Playback::Once) == Step::Finished {
                    self.to_delete = true;
                }
            }
        }
    }
}
