// Browser smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_then_restart() {
    salsa_run::start_game().unwrap();
    salsa_run::start_game().unwrap();
    salsa_run::restart_game().unwrap();
    salsa_run::set_sound_enabled(false);
}

#[wasm_bindgen_test]
fn canvas_is_attached() {
    salsa_run::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("salsa-canvas").is_some());
}
