//! # noteboard-ui
//!
//! Leptos + WASM single-page-application scaffold for Noteboard: a session
//! store holding authentication state, a bootstrap sequence with a
//! server-to-client state handoff, and a route guard that keeps signed-out
//! visitors on the sign-in page.
//!
//! The server (`ssr` feature) renders the initial document and embeds a
//! snapshot of the session store; the browser build (`hydrate` feature)
//! reads the snapshot back while hydrating.

pub mod app;
pub mod bootstrap;
pub mod guard;
pub mod handoff;
pub mod modules;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::bootstrap::RenderPass;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to init console logging");

    leptos::mount::hydrate_body(|| view! { <App pass=RenderPass::Client/> });
}
