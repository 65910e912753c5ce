//! Tuning constants for the simulation.
//!
//! Every number the gameplay depends on lives here so tests and the browser
//! shell share one source of truth. Defaults are the values the game ships
//! with; the air-control multipliers and the boss gravity set are tuned by
//! feel and kept literally.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Periods (ms) of the fixed-tick cadences owned by the world scheduler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cadence {
    pub movement_ms: f64,
    pub gravity_ms: f64,
    pub animation_ms: f64,
    pub collision_ms: f64,
    pub boss_death_ms: f64,
    /// Longest frame delta fed to the scheduler (tab switches, breakpoints).
    pub max_frame_ms: f64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            movement_ms: 1000.0 / 175.0,
            gravity_ms: 40.0,
            animation_ms: 100.0,
            collision_ms: 100.0,
            boss_death_ms: 200.0,
            max_frame_ms: 250.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterTuning {
    pub start_x: f64,
    pub ground_y: f64,
    pub speed: f64,
    pub air_control_right: f64,
    pub air_control_left: f64,
    pub jump_speed: f64,
    pub gravity: f64,
    pub max_energy: i32,
    pub hit_damage: i32,
    pub hurt_window_ms: f64,
    pub stomp_grace_ms: f64,
    pub stomp_bounce: f64,
    pub stomp_band: f64,
    pub long_idle_ms: f64,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            ground_y: 180.0,
            speed: 3.0,
            air_control_right: 0.9,
            air_control_left: 0.65,
            jump_speed: 30.0,
            gravity: 2.5,
            max_energy: 100,
            hit_damage: 20,
            hurt_window_ms: 500.0,
            stomp_grace_ms: 500.0,
            stomp_bounce: 15.0,
            stomp_band: 30.0,
            long_idle_ms: 6000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyTuning {
    pub min_speed: f64,
    pub speed_spread: f64,
    pub death_linger_ms: f64,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            min_speed: 0.15,
            speed_spread: 0.35,
            death_linger_ms: 1500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BossTuning {
    pub max_energy: i32,
    pub hit_damage: i32,
    pub hurt_window_ms: f64,
    pub attack_range: f64,
    pub alert_frames: u32,
    pub wake_distance: f64,
    pub attack_trigger: f64,
    pub disengage_distance: f64,
    pub patrol_range: f64,
    pub patrol_speed: f64,
    pub attack_speed: f64,
    pub gravity: f64,
    pub jump_speed: f64,
    pub ground_y: f64,
    pub patrol_jump_chance: f64,
    pub attack_jump_chance: f64,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_energy: 100,
            hit_damage: 25,
            hurt_window_ms: 500.0,
            attack_range: 80.0,
            alert_frames: 12,
            wake_distance: 720.0,
            attack_trigger: 400.0,
            disengage_distance: 600.0,
            patrol_range: 300.0,
            patrol_speed: 0.6,
            attack_speed: 1.4,
            gravity: 1.8,
            jump_speed: 22.0,
            ground_y: 55.0,
            patrol_jump_chance: 0.02,
            attack_jump_chance: 0.05,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectileTuning {
    pub speed_x: f64,
    pub throw_speed_y: f64,
    pub gravity: f64,
    pub splash_y: f64,
    pub throw_cooldown_ms: f64,
    pub max_bottles: u32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed_x: 2.5,
            throw_speed_y: 20.0,
            gravity: 2.5,
            splash_y: 350.0,
            throw_cooldown_ms: 500.0,
            max_bottles: 5,
        }
    }
}

/// Complete tuning set handed to [`crate::world::World::new`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub cadence: Cadence,
    pub character: CharacterTuning,
    pub enemy: EnemyTuning,
    pub boss: BossTuning,
    pub projectile: ProjectileTuning,
    /// Screen-space x the character is kept at; equals `character.start_x`
    /// so the camera starts at 0.
    pub camera_lead: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cadence: Cadence::default(),
            character: CharacterTuning::default(),
            enemy: EnemyTuning::default(),
            boss: BossTuning::default(),
            projectile: ProjectileTuning::default(),
            camera_lead: 100.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::error::GameError> {
        serde_json::from_str(json).map_err(|e| crate::error::GameError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_starts_at_zero_for_default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.camera_lead, cfg.character.start_x);
    }

    #[test]
    fn movement_cadence_is_much_faster_than_frames() {
        let c = Cadence::default();
        assert!(c.movement_ms < 6.0);
        assert_eq!(c.animation_ms, 100.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{"character":{"speed":5.0}}"#).unwrap();
        assert_eq!(cfg.character.speed, 5.0);
        assert_eq!(cfg.character.jump_speed, 30.0);
    }
}
