//! Start / step / restart around one [`World`].

use log::info;

use crate::audio::{AudioPlayer, Sound};
use crate::config::GameConfig;
use crate::error::LevelError;
use crate::input::InputState;
use crate::level::LevelDesc;
use crate::render::{self, RenderFrame};
use crate::world::World;

/// Restart drops the world and builds a fresh one from the same level,
/// config and seed, so two restarts in a row give identical states and
/// nothing from the old world can tick again.
pub struct Game {
    config: GameConfig,
    seed: u64,
    level: &'static LevelDesc,
    world: World,
}

impl Game {
    pub fn new(level: &'static LevelDesc, config: GameConfig, seed: u64) -> Result<Self, LevelError> {
        let world = World::new(level, config.clone(), seed)?;
        Ok(Self { config, seed, level, world })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn start(&mut self, audio: &mut dyn AudioPlayer) {
        if self.world.phase().game_started {
            return;
        }
        self.world.start();
        audio.play(Sound::Music, 0.2);
    }

    pub fn step(&mut self, dt: f64, input: &InputState, audio: &mut dyn AudioPlayer) -> usize {
        self.world.step(dt, input, audio)
    }

    pub fn restart(&mut self, audio: &mut dyn AudioPlayer) -> Result<(), LevelError> {
        audio.stop_all();
        self.world = World::new(self.level, self.config.clone(), self.seed)?;
        info!("restarted level '{}'", self.level.name);
        self.start(audio);
        Ok(())
    }

    pub fn frame(&self) -> RenderFrame {
        render::compose(&self.world)
    }
}
