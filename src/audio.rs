//! Sound effects as named cues behind a player trait.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Jump,
    Hurt,
    CharacterDead,
    Snore,
    ChickenDead,
    Coin,
    BottlePickup,
    Throw,
    Splash,
    BossAlert,
    BossHurt,
    BossDead,
    Win,
    Lose,
    Music,
}

impl Sound {
    pub const ALL: [Sound; 15] = [
        Sound::Jump,
        Sound::Hurt,
        Sound::CharacterDead,
        Sound::Snore,
        Sound::ChickenDead,
        Sound::Coin,
        Sound::BottlePickup,
        Sound::Throw,
        Sound::Splash,
        Sound::BossAlert,
        Sound::BossHurt,
        Sound::BossDead,
        Sound::Win,
        Sound::Lose,
        Sound::Music,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sound::Jump => "jump",
            Sound::Hurt => "hurt",
            Sound::CharacterDead => "character_dead",
            Sound::Snore => "snore",
            Sound::ChickenDead => "chicken_dead",
            Sound::Coin => "coin",
            Sound::BottlePickup => "bottle_pickup",
            Sound::Throw => "throw",
            Sound::Splash => "splash",
            Sound::BossAlert => "boss_alert",
            Sound::BossHurt => "boss_hurt",
            Sound::BossDead => "boss_dead",
            Sound::Win => "win",
            Sound::Lose => "lose",
            Sound::Music => "music",
        }
    }

    pub fn path(self) -> String {
        format!("audio/{}.mp3", self.name())
    }

    /// Background music and snoring repeat until stopped.
    pub fn looping(self) -> bool {
        matches!(self, Sound::Music | Sound::Snore)
    }
}

pub trait AudioPlayer {
    /// Volume in `0.0..=1.0`.
    fn play(&mut self, sound: Sound, volume: f64);
    fn stop(&mut self, sound: Sound);
    fn stop_all(&mut self);
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

/// Silent player for headless runs.
#[derive(Debug, Default)]
pub struct NullAudio {
    enabled: bool,
}

impl AudioPlayer for NullAudio {
    fn play(&mut self, _sound: Sound, _volume: f64) {}

    fn stop(&mut self, _sound: Sound) {}

    fn stop_all(&mut self) {}

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Records cues instead of playing them.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<Sound>,
    pub stopped: Vec<Sound>,
    pub stop_all_calls: usize,
}

impl RecordingAudio {
    pub fn count(&self, sound: Sound) -> usize {
        self.played.iter().filter(|s| **s == sound).count()
    }
}

impl AudioPlayer for RecordingAudio {
    fn play(&mut self, sound: Sound, _volume: f64) {
        self.played.push(sound);
    }

    fn stop(&mut self, sound: Sound) {
        self.stopped.push(sound);
    }

    fn stop_all(&mut self) {
        self.stop_all_calls += 1;
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn set_enabled(&mut self, _enabled: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Sound::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Sound::ALL.len());
        assert_eq!(Sound::Coin.path(), "audio/coin.mp3");
    }
}
