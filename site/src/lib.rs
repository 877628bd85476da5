//! # site
//!
//! Leptos + WASM frontend for the portfolio: home, skills, portfolio, and
//! contact sections on one scroll-snapped page.
//!
//! This crate contains the page, section components, section state, and the
//! browser helpers behind navigation. The jigsaw on the skills section is
//! driven by the `puzzle` crate; this crate only renders it and forwards
//! pointer input.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
