//! Foodgram web app
//!
//! Browser rendition of the Foodgram pages. The backend serves the same pages
//! pre-rendered; this bundle takes over client-side navigation.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Foodgram web app starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
