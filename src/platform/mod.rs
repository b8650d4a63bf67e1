//! Platform glue
//!
//! The browser build exposes the driver to JavaScript; the page owns the
//! DOM, rendering and requestAnimationFrame and calls in here. Native
//! builds have nothing extra: `main.rs` drives the game directly.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebGame;
