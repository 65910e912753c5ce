//! Coins and salsa bottles lying in the level.

use crate::animation::{Animator, Playback};
use crate::entity::{Entity, Inset};
use crate::sprites;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Spin;

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub body: Entity,
    pub collected: bool,
    animator: Animator<Spin>,
}

impl Coin {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            body: Entity::new(x, y, 120.0, 120.0).with_offset(Inset::uniform(40.0)),
            collected: false,
            animator: Animator::new(sprites::COIN[0]),
        }
    }

    pub fn animate(&mut self) {
        self.animator.play(Spin, sprites::COIN, Playback::Loop);
    }

    pub fn image(&self) -> &'static str {
        self.animator.image()
    }
}

/// A bottle waiting on the ground. Alternates between the two ground sprites
/// by spawn order so neighbours do not look identical.
#[derive(Clone, Debug, PartialEq)]
pub struct BottlePickup {
    pub body: Entity,
    pub collected: bool,
    image: &'static str,
}

impl BottlePickup {
    pub fn new(x: f64, variant: usize) -> Self {
        let images = sprites::BOTTLE_ON_GROUND;
        Self {
            body: Entity::new(x, 350.0, 80.0, 80.0).with_offset(Inset::new(10.0, 5.0, 20.0, 15.0)),
            collected: false,
            image: images[variant % images.len()],
        }
    }

    pub fn image(&self) -> &'static str {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_spins_through_both_frames() {
        let mut c = Coin::new(0.0, 100.0);
        c.animate();
        assert_eq!(c.image(), sprites::COIN[0]);
        c.animate();
        assert_eq!(c.image(), sprites::COIN[1]);
        c.animate();
        assert_eq!(c.image(), sprites::COIN[0]);
    }

    #[test]
    fn bottle_sprites_alternate() {
        assert_ne!(BottlePickup::new(0.0, 0).image(), BottlePickup::new(0.0, 1).image());
        assert_eq!(BottlePickup::new(0.0, 0).image(), BottlePickup::new(0.0, 2).image());
    }
}
