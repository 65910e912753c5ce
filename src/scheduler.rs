//! Fixed-tick scheduler owned by the world.
//!
//! Each cadence keeps its own due time. A frame's delta advances the clock and
//! every tick that came due is returned in one timeline, ordered by due time
//! and then by [`Tick`] order, so a frame never runs collision before the
//! movement that preceded it.

use std::cmp::Ordering;

use crate::config::Cadence;

/// Declaration order is the tie-break order for ticks due at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tick {
    Movement,
    Gravity,
    Collision,
    Animation,
    BossDeath,
}

impl Tick {
    pub const ALL: [Tick; 5] = [Tick::Movement, Tick::Gravity, Tick::Collision, Tick::Animation, Tick::BossDeath];
}

#[derive(Clone, Debug, PartialEq)]
struct Timer {
    tick: Tick,
    period: f64,
    next_due: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scheduler {
    timers: Vec<Timer>,
    now: f64,
    max_frame: f64,
    running: bool,
}

impl Scheduler {
    pub fn new(cadence: &Cadence) -> Self {
        let timers = Tick::ALL
            .iter()
            .map(|&tick| {
                let period = match tick {
                    Tick::Movement => cadence.movement_ms,
                    Tick::Gravity => cadence.gravity_ms,
                    Tick::Collision => cadence.collision_ms,
                    Tick::Animation => cadence.animation_ms,
                    Tick::BossDeath => cadence.boss_death_ms,
                };
                Timer { tick, period, next_due: period }
            })
            .filter(|t| t.period.is_finite() && t.period > 0.0)
            .collect();
        Self {
            timers,
            now: 0.0,
            max_frame: cadence.max_frame_ms,
            running: false,
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// No tick is issued after this.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance by `dt` ms (clamped to the max frame) and return every tick
    /// that came due, in execution order.
    pub fn advance(&mut self, dt: f64) -> Vec<(f64, Tick)> {
        if !self.running || !dt.is_finite() || dt <= 0.0 {
            return Vec::new();
        }
        self.now += dt.min(self.max_frame);
        let mut due = Vec::new();
        for timer in &mut self.timers {
            while timer.next_due <= self.now {
                due.push((timer.next_due, timer.tick));
                timer.next_due += timer.period;
            }
        }
        due.sort_by(|a, b| match a.0.total_cmp(&b.0) {
            Ordering::Equal => a.1.cmp(&b.1),
            other => other,
        });
        due
    }
}
