//! Browser interaction layer for Pixi, the document-sharing site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders every page. This crate compiles to wasm, mounts Leptos
//! islands for the chat widget, document modal, upload panel and ticket
//! modal, and binds the remaining server markup (vote buttons, genre chips,
//! search box, FAQ entries) through a declarative event table.
//!
//! LAYOUT
//! ======
//! - `net`: endpoint wrappers and wire types for the `/api` surface.
//! - `state`: plain state machines, one per UI surface.
//! - `actions`: gesture flows tying state to the network.
//! - `components`: Leptos views over `state`.
//! - `bindings`: delegated listeners for server-rendered markup.
//!
//! Browser-only code sits behind the `csr` feature so the state and helper
//! modules test natively.

pub mod actions;
pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Wasm entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Logger first so config problems are visible; the configured level applies after.
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    let config = config::ClientConfig::load().unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        config::ClientConfig::default()
    });
    log::set_max_level(config.log_level().to_level_filter());

    app::mount(app::PageContext::new(config));
    log::info!("pixi client started");
}
