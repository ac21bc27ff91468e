//! Todo List Frontend Entry Point

mod config;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

/// Install the browser console logger
#[cfg(target_arch = "wasm32")]
pub(crate) fn init_logging(level: log::Level) {
    wasm_logger::init(wasm_logger::Config::new(level));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn init_logging(_level: log::Level) {}
