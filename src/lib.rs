//! # pantry-client
//!
//! Leptos + WASM frontend for the Pantry application.
//!
//! This crate contains pages, components, application state, and the REST
//! helper for the authentication endpoint. Access control is client-side:
//! protected routes are wrapped in a layout that checks the locally stored
//! credential token before rendering, and the sign-in page drives a small
//! submission state machine around the auth endpoint.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
