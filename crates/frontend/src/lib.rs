pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use shared::config::app_config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let level = app_config().log.level();
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    log::info!("api base: {}", shared::api_utils::api_base());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
