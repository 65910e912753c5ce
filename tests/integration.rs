// Integration tests (native) for the `salsa-run` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use salsa_run::render::{self, Layer, Sprite, Surface};
use salsa_run::{Game, GameConfig, InputState, LEVEL1, NullAudio, Phase, levels};

#[test]
fn first_level_is_level1() {
    assert!(std::ptr::eq(levels()[0], &LEVEL1));
}

// A full headless session: start, walk right for a few seconds, render.
#[test]
fn headless_session_runs_and_renders() {
    let mut audio = NullAudio::default();
    let mut game = Game::new(&LEVEL1, GameConfig::default(), 1).unwrap();
    assert_eq!(game.step(100.0, &InputState::default(), &mut audio), 0);
    game.start(&mut audio);

    let right = InputState { right: true, ..InputState::default() };
    for _ in 0..30 {
        game.step(16.0, &right, &mut audio);
    }
    let w = game.world();
    assert!(w.character().body.x > 100.0);
    assert!(w.camera_x() < 0.0);

    let frame = game.frame();
    assert_eq!(frame.camera_x, w.camera_x());
    assert!(frame.sprites.iter().any(|s| s.layer == Layer::Character));
}

#[test]
fn same_seed_same_game() {
    let run = || {
        let mut audio = NullAudio::default();
        let mut game = Game::new(&LEVEL1, GameConfig::default(), 77).unwrap();
        game.start(&mut audio);
        let input = InputState { right: true, jump: true, ..InputState::default() };
        for _ in 0..50 {
            game.step(33.0, &input, &mut audio);
        }
        game.frame()
    };
    assert_eq!(run(), run());
}

#[test]
fn huge_frame_delta_is_clamped() {
    let mut audio = NullAudio::default();
    let mut game = Game::new(&LEVEL1, GameConfig::default(), 1).unwrap();
    game.start(&mut audio);
    game.step(60_000.0, &InputState::default(), &mut audio);
    assert_eq!(game.world().now(), GameConfig::default().cadence.max_frame_ms);
}

struct Counting {
    frames: usize,
    sprites: usize,
    last_phase: Option<Phase>,
}

impl Surface for Counting {
    fn begin_frame(&mut self) {
        self.frames += 1;
    }

    fn draw(&mut self, _sprite: &Sprite, _camera_x: f64) {
        self.sprites += 1;
    }

    fn end_frame(&mut self, phase: Phase) {
        self.last_phase = Some(phase);
    }
}

#[test]
fn present_draws_every_sprite() {
    let game = Game::new(&LEVEL1, GameConfig::default(), 1).unwrap();
    let frame = game.frame();
    let mut surface = Counting { frames: 0, sprites: 0, last_phase: None };
    render::present(&frame, &mut surface);
    assert_eq!(surface.frames, 1);
    assert_eq!(surface.sprites, frame.sprites.len());
    assert_eq!(surface.last_phase, Some(Phase::default()));
}

#[cfg(feature = "serde_json")]
#[test]
fn json_overrides_tuning() {
    let cfg = GameConfig::from_json(r#"{"boss":{"hit_damage":50}}"#).unwrap();
    assert_eq!(cfg.boss.hit_damage, 50);
    assert!(GameConfig::from_json("{").is_err());
}
