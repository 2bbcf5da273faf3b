mod api;
mod app;
mod components;
mod dnd;
mod logging;
mod models;
mod shortcuts;
mod state;
mod storage;
mod theme;
mod util;

use crate::api::EnvConfig;
use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EnvConfig::from_window();
    if let Err(e) = logging::init_logging(&config.log_level) {
        web_sys::console::warn_1(&e.into());
        let _ = logging::init_logging("info");
    }
    log::info!(
        "starting against {} ({:?} move protocol)",
        config.api_url,
        config.move_protocol
    );

    mount_to_body(move || view! { <App config=config.clone() /> });
}
