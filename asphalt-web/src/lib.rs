//! Browser front end for the Len Industries paving site.
//!
//! Compiled to WebAssembly, the module mounts two independent page
//! components at DOM-ready: the mobile navigation toggle and the asphalt
//! estimate widget. The pure parts (configuration, view structure, render
//! plans, logging format) build on every target; the DOM adapters are wasm-only.

pub mod logging;
pub mod plan;
pub mod settings;
pub mod styles;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod nav;
#[cfg(target_arch = "wasm32")]
pub mod widget;
