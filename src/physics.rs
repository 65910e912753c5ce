//! Gravity and horizontal movement helpers.

use crate::entity::Entity;

/// Gravity parameters for one body. `ground_y` is the y the body rests at;
/// `None` means it never lands (thrown bottles).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    pub accel: f64,
    pub ground_y: Option<f64>,
}

/// What a gravity step did to the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fall {
    Resting,
    Airborne,
    Landed,
}

pub fn is_above_ground(body: &Entity, gravity: &Gravity) -> bool {
    match gravity.ground_y {
        Some(ground) => body.y < ground,
        None => true,
    }
}

/// One gravity tick: rise or fall by `speed_y`, then decelerate.
pub fn apply_gravity(body: &mut Entity, gravity: &Gravity) -> Fall {
    if !is_above_ground(body, gravity) && body.speed_y <= 0.0 {
        return Fall::Resting;
    }
    body.y -= body.speed_y;
    body.speed_y -= gravity.accel;
    match gravity.ground_y {
        Some(ground) if body.y >= ground => {
            body.y = ground;
            body.speed_y = 0.0;
            Fall::Landed
        }
        _ => Fall::Airborne,
    }
}

/// Horizontal distance for one movement tick. Air control is deliberately
/// asymmetric: `right_factor` when moving right, `left_factor` when moving
/// left, full speed on the ground.
pub fn horizontal_step(speed: f64, airborne: bool, moving_right: bool, right_factor: f64, left_factor: f64) -> f64 {
    match (airborne, moving_right) {
        (false, _) => speed,
        (true, true) => speed * right_factor,
        (true, false) => speed * left_factor,
    }
}
