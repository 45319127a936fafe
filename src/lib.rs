//! TravelAI Pro - AI-powered travel planning landing site
//!
//! Server-rendered with Leptos and hydrated in the browser through
//! WebAssembly. Page logic lives in [`core`] and is free of any DOM or
//! timer dependencies; [`ui`] wires it to components and browser timers.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
