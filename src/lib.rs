//! Salsa Run core crate.
//!
//! A side-scrolling platformer: the character walks a desert level, stomps
//! chickens, collects coins and salsa bottles, and throws the bottles at the
//! end boss. The simulation (`world` and everything below it) is plain Rust
//! and runs natively under `cargo test`; the `web` module is the browser shell
//! that drives it from a canvas and keyboard.

use wasm_bindgen::prelude::*;

pub mod animation;
pub mod audio;
pub mod boss;
pub mod character;
pub mod collectible;
pub mod collision;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod level;
pub mod physics;
pub mod projectile;
pub mod render;
pub mod scheduler;
pub mod sprites;
pub mod status_bar;
pub mod world;

mod web;

pub use audio::{AudioPlayer, NullAudio, RecordingAudio, Sound};
pub use config::GameConfig;
pub use error::{GameError, LevelError};
pub use game::Game;
pub use input::{InputState, Key};
pub use level::{LEVEL1, LevelDesc, levels};
pub use render::{RenderFrame, Surface};
pub use world::{Phase, World};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    web::init_logger(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Browser entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    Ok(web::start_game()?)
}

#[wasm_bindgen]
pub fn restart_game() -> Result<(), JsValue> {
    Ok(web::restart_game()?)
}

#[wasm_bindgen]
pub fn set_sound_enabled(enabled: bool) {
    web::set_sound_enabled(enabled);
}
