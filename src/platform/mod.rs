//! Platform bindings
//!
//! The simulation core is platform-free; this module adapts it to hosts.
//! - `web`: `wasm_bindgen` surface for a JavaScript page that owns the
//!   canvas and `requestAnimationFrame`

#[cfg(target_arch = "wasm32")]
pub mod web;
