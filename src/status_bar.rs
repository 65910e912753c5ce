//! HUD bars: a percentage mapped onto one of six bar images.

use crate::sprites::{self, Sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarKind {
    Health,
    Coin,
    Bottle,
    Boss,
}

impl BarKind {
    fn images(self) -> Sequence {
        match self {
            BarKind::Health => sprites::BAR_HEALTH,
            BarKind::Coin => sprites::BAR_COIN,
            BarKind::Bottle => sprites::BAR_BOTTLE,
            BarKind::Boss => sprites::BAR_BOSS,
        }
    }

    /// Fixed screen position of the HUD bars; the boss bar floats instead.
    pub fn screen_pos(self) -> (f64, f64) {
        match self {
            BarKind::Health => (40.0, 0.0),
            BarKind::Coin => (40.0, 45.0),
            BarKind::Bottle => (40.0, 90.0),
            BarKind::Boss => (0.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusBar {
    pub kind: BarKind,
    percentage: f64,
}

impl StatusBar {
    pub const WIDTH: f64 = 200.0;
    pub const HEIGHT: f64 = 60.0;

    pub fn new(kind: BarKind, percentage: f64) -> Self {
        let mut bar = Self { kind, percentage: 0.0 };
        bar.set_percentage(percentage);
        bar
    }

    pub fn set_percentage(&mut self, percentage: f64) {
        self.percentage = if percentage.is_finite() { percentage.clamp(0.0, 100.0) } else { 0.0 };
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn image_index(&self) -> usize {
        match self.percentage {
            p if p >= 100.0 => 5,
            p if p > 80.0 => 4,
            p if p > 60.0 => 3,
            p if p > 40.0 => 2,
            p if p > 20.0 => 1,
            _ => 0,
        }
    }

    pub fn image(&self) -> &'static str {
        self.kind.images()[self.image_index()]
    }
}

/// `part` of `whole` as a percentage; an empty whole counts as full.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        100.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
