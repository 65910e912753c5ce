// Keyboard listeners.
// keydown/keyup on the document update the runtime's held-key snapshot; Enter
// starts or restarts.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, window};

use crate::error::GameError;
use crate::input::Key;

use super::{on_enter, with_runtime};

pub fn map_key(key: &str) -> Option<Key> {
    match key {
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        "ArrowUp" => Some(Key::Up),
        " " | "Spacebar" => Some(Key::Jump),
        "d" | "D" => Some(Key::Throw),
        _ => None,
    }
}

pub fn install() -> Result<(), GameError> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or(GameError::Missing("document"))?;

    for (event, down) in [("keydown", true), ("keyup", false)] {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let name = evt.key();
            if down && name == "Enter" {
                on_enter();
                return;
            }
            if let Some(key) = map_key(&name) {
                evt.prevent_default();
                with_runtime(|rt| rt.input.set(key, down));
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
