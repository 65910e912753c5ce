//! The world: owns every entity, the camera, the phase flags and the
//! scheduler, and runs the fixed ticks.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::animation::Step;
use crate::audio::{AudioPlayer, Sound};
use crate::boss::BossCue;
use crate::character::{Character, CharacterPose};
use crate::collision;
use crate::combat;
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::error::LevelError;
use crate::input::InputState;
use crate::level::{Level, LevelDesc};
use crate::physics::Fall;
use crate::projectile::ThrownBottle;
use crate::scheduler::{Scheduler, Tick};
use crate::status_bar::{self, BarKind, StatusBar};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Phase {
    pub game_started: bool,
    pub game_over: bool,
    pub game_won: bool,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        self.game_over || self.game_won
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bars {
    pub health: StatusBar,
    pub coins: StatusBar,
    pub bottles: StatusBar,
    pub boss: StatusBar,
}

impl Default for Bars {
    fn default() -> Self {
        Self {
            health: StatusBar::new(BarKind::Health, 100.0),
            coins: StatusBar::new(BarKind::Coin, 0.0),
            bottles: StatusBar::new(BarKind::Bottle, 0.0),
            boss: StatusBar::new(BarKind::Boss, 100.0),
        }
    }
}

pub struct World {
    pub(crate) config: GameConfig,
    pub(crate) level: Level,
    pub(crate) character: Character,
    pub(crate) projectiles: Vec<ThrownBottle>,
    pub(crate) camera_x: f64,
    pub(crate) phase: Phase,
    pub(crate) coins_collected: usize,
    pub(crate) bottles_available: u32,
    pub(crate) last_throw_ms: Option<f64>,
    pub(crate) bars: Bars,
    scheduler: Scheduler,
    rng: SmallRng,
    last_pose: CharacterPose,
    ticks_run: u64,
}

impl World {
    pub fn new(desc: &LevelDesc, config: GameConfig, seed: u64) -> Result<World, LevelError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let level = Level::build(desc, &config, &mut rng)?;
        let character = Character::new(&config.character);
        let mut world = World {
            scheduler: Scheduler::new(&config.cadence),
            level,
            character,
            projectiles: Vec::new(),
            camera_x: 0.0,
            phase: Phase::default(),
            coins_collected: 0,
            bottles_available: 0,
            last_throw_ms: None,
            bars: Bars::default(),
            rng,
            last_pose: CharacterPose::Idle,
            ticks_run: 0,
            config,
        };
        world.follow_character();
        world.refresh_bars();
        Ok(world)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn projectiles(&self) -> &[ThrownBottle] {
        &self.projectiles
    }

    pub fn camera_x(&self) -> f64 {
        self.camera_x
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn coins_collected(&self) -> usize {
        self.coins_collected
    }

    pub fn bottles_available(&self) -> u32 {
        self.bottles_available
    }

    pub fn bars(&self) -> &Bars {
        &self.bars
    }

    /// Simulation clock (ms since start).
    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    /// Total ticks executed so far.
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn start(&mut self) {
        if self.phase.game_started {
            return;
        }
        self.phase.game_started = true;
        self.scheduler.start();
        info!("game started on level '{}'", self.level.name);
    }

    /// Advance the simulation by a frame delta. Returns the number of ticks
    /// that ran; zero before `start` and after the game has ended.
    pub fn step(&mut self, dt: f64, input: &InputState, audio: &mut dyn AudioPlayer) -> usize {
        let due = self.scheduler.advance(dt);
        let mut ran = 0;
        for (at, tick) in due {
            if self.phase.is_over() {
                break;
            }
            self.run_tick(tick, at, input, audio);
            ran += 1;
        }
        self.ticks_run += ran as u64;
        ran
    }

    fn run_tick(&mut self, tick: Tick, now: f64, input: &InputState, audio: &mut dyn AudioPlayer) {
        match tick {
            Tick::Movement => self.movement_tick(input, now, audio),
            Tick::Gravity => self.gravity_tick(audio),
            Tick::Collision => self.collision_tick(input, now, audio),
            Tick::Animation => self.animation_tick(now, audio),
            Tick::BossDeath => self.boss_death_tick(audio),
        }
        self.compact();
    }

    fn movement_tick(&mut self, input: &InputState, now: f64, audio: &mut dyn AudioPlayer) {
        let motion = self.character.handle_input(input, self.level.level_end_x, now);
        if motion.jumped {
            audio.play(Sound::Jump, 0.3);
        }
        let player = self.character.body.clone();
        for enemy in &mut self.level.enemies {
            match enemy {
                Enemy::Ground(g) => g.movement_tick(),
                Enemy::Boss(b) => b.movement_tick(&player),
            }
        }
        for bottle in &mut self.projectiles {
            bottle.fly();
        }
        self.level.drift_clouds();
        self.follow_character();
    }

    fn gravity_tick(&mut self, audio: &mut dyn AudioPlayer) {
        self.character.apply_gravity();
        if let Some(boss) = self.level.boss_mut() {
            if boss.apply_gravity() == Fall::Landed {
                debug!("boss landed");
            }
        }
        for bottle in &mut self.projectiles {
            if bottle.apply_gravity() {
                audio.play(Sound::Splash, 0.4);
            }
        }
    }

    fn collision_tick(&mut self, input: &InputState, now: f64, audio: &mut dyn AudioPlayer) {
        if input.throw {
            self.try_throw(now, audio);
        }
        let events = collision::detect(self, now);
        combat::resolve(self, &events, now, audio);
        self.character.end_scan();
        for bottle in &mut self.projectiles {
            bottle.end_scan();
        }
        self.refresh_bars();
    }

    fn animation_tick(&mut self, now: f64, audio: &mut dyn AudioPlayer) {
        let player = self.character.body.clone();
        let mut alerting = false;
        if let Some(boss) = self.level.boss_mut() {
            match boss.think(&player, &mut self.rng) {
                Some(BossCue::AlertStarted) => audio.play(Sound::BossAlert, 0.7),
                Some(cue) => debug!("boss cue {cue:?}"),
                None => {}
            }
            alerting = boss.is_alerting();
        }
        self.character.set_immobilized(alerting);

        let (pose, step) = self.character.animate(now);
        if pose != self.last_pose {
            if pose == CharacterPose::LongIdle {
                audio.play(Sound::Snore, 0.3);
            } else if self.last_pose == CharacterPose::LongIdle {
                audio.stop(Sound::Snore);
            }
            self.last_pose = pose;
        }

        for enemy in &mut self.level.enemies {
            match enemy {
                Enemy::Ground(g) => g.animate(now),
                Enemy::Boss(b) => b.animate(now),
            }
        }
        for coin in &mut self.level.coins {
            coin.animate();
        }
        for bottle in &mut self.projectiles {
            bottle.animate();
        }
        self.refresh_bars();

        if pose == CharacterPose::Dead && step == Step::Finished {
            self.end(false, audio);
        }
    }

    fn boss_death_tick(&mut self, audio: &mut dyn AudioPlayer) {
        let finished = self.level.boss_mut().is_some_and(|b| b.death_tick());
        if finished {
            self.end(true, audio);
        }
    }

    fn end(&mut self, won: bool, audio: &mut dyn AudioPlayer) {
        if self.phase.is_over() {
            return;
        }
        audio.stop_all();
        if won {
            self.phase.game_won = true;
            audio.play(Sound::Win, 0.6);
            info!("game won after {:.1}s", self.now() / 1000.0);
        } else {
            self.phase.game_over = true;
            audio.play(Sound::Lose, 0.6);
            info!("game over after {:.1}s", self.now() / 1000.0);
        }
        self.scheduler.stop();
    }

    /// Throw a bottle if one is carried and the cooldown has passed.
    fn try_throw(&mut self, now: f64, audio: &mut dyn AudioPlayer) -> bool {
        let cooling = self
            .last_throw_ms
            .is_some_and(|t| now - t < self.config.projectile.throw_cooldown_ms);
        if self.bottles_available == 0 || cooling || self.character.is_dead() {
            return false;
        }
        self.projectiles
            .push(ThrownBottle::throw(&self.character.body, &self.config.projectile));
        self.bottles_available -= 1;
        self.last_throw_ms = Some(now);
        audio.play(Sound::Throw, 0.4);
        true
    }

    fn follow_character(&mut self) {
        self.camera_x = -(self.character.body.x - self.config.camera_lead);
    }

    fn refresh_bars(&mut self) {
        let max_energy = self.character.max_energy().max(1) as f64;
        self.bars
            .health
            .set_percentage(self.character.energy() as f64 * 100.0 / max_energy);
        self.bars
            .coins
            .set_percentage(status_bar::percent(self.coins_collected, self.level.total_coins));
        let max_bottles = self.config.projectile.max_bottles.max(1) as f64;
        self.bars
            .bottles
            .set_percentage(self.bottles_available as f64 * 100.0 / max_bottles);
        let boss_energy = self.level.boss().map_or(0, |b| b.energy()) as f64;
        let boss_max = self.config.boss.max_energy.max(1) as f64;
        self.bars.boss.set_percentage(boss_energy * 100.0 / boss_max);
    }

    fn compact(&mut self) {
        self.level.compact();
        self.projectiles.retain(|p| !p.to_delete());
    }
}
