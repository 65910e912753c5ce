//! Browser shell: owns the one runtime, wires keyboard and audio to it, and
//! drives it from a single `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::audio::AudioPlayer;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::input::InputState;
use crate::level::levels;
use crate::render;

mod audio;
mod canvas;
mod console;
mod keyboard;

pub use console::init_logger;

use audio::HtmlAudio;
use canvas::CanvasSurface;

struct Runtime {
    game: Game,
    input: InputState,
    audio: HtmlAudio,
    surface: CanvasSurface,
    last_ts: Option<f64>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
    static SOUND_ENABLED: Cell<bool> = const { Cell::new(true) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Build the runtime on first call (canvas, listeners, frame loop) and start
/// the game. Later calls only start a game that has not started yet.
pub fn start_game() -> Result<(), GameError> {
    let created = RUNTIME.with(|cell| -> Result<bool, GameError> {
        let mut slot = cell.borrow_mut();
        if let Some(rt) = slot.as_mut() {
            rt.game.start(&mut rt.audio);
            return Ok(false);
        }
        let level = levels().first().copied().ok_or(GameError::Missing("level"))?;
        let mut game = Game::new(level, GameConfig::default(), fresh_seed())?;
        let mut audio = HtmlAudio::default();
        audio.set_enabled(sound_enabled());
        game.start(&mut audio);
        *slot = Some(Runtime {
            game,
            input: InputState::default(),
            audio,
            surface: CanvasSurface::attach()?,
            last_ts: None,
        });
        Ok(true)
    })?;
    if created {
        keyboard::install()?;
        start_loop();
        info!("runtime ready");
    }
    Ok(())
}

/// Replace the world with a fresh one. The frame loop keeps running.
pub fn restart_game() -> Result<(), GameError> {
    with_runtime(|rt| {
        rt.input.clear();
        rt.last_ts = None;
        rt.game.restart(&mut rt.audio)
    })
    .ok_or(GameError::Missing("running game"))?
    .map_err(GameError::from)
}

/// Remembered for a runtime that does not exist yet.
pub fn set_sound_enabled(enabled: bool) {
    SOUND_ENABLED.with(|flag| flag.set(enabled));
    with_runtime(|rt| rt.audio.set_enabled(enabled));
}

fn sound_enabled() -> bool {
    SOUND_ENABLED.with(Cell::get)
}

/// Enter starts a fresh page and restarts a finished game.
fn on_enter() {
    let over = with_runtime(|rt| rt.game.world().phase().is_over()).unwrap_or(false);
    let result = if over { restart_game() } else { start_game() };
    if let Err(err) = result {
        log::error!("enter: {err}");
    }
}

fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    RUNTIME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn frame(ts: f64) {
    with_runtime(|rt| {
        let dt = rt.last_ts.map_or(0.0, |last| ts - last);
        rt.last_ts = Some(ts);
        rt.game.step(dt, &rt.input, &mut rt.audio);
        render::present(&rt.game.frame(), &mut rt.surface);
    });
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        frame(ts);
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    if let (Some(w), Some(cb)) = (window(), callback.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn fresh_seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    performance_now().to_bits()
}
