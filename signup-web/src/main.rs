//! Airdrop signup page - Leptos frontend
//!
//! Renders the join form and wires the browser (fetch, local storage,
//! timers, location) into the shared signup controller.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // tracing events from lib-signup arrive here through the `log` facade
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Airdrop signup page starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
