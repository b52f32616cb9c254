//! Sitenav landing page, compiled to WASM and served by Trunk.

#![no_main]

use wasm_bindgen::prelude::wasm_bindgen;

/// Runs when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    sitenav_ui::app::launch();
}
