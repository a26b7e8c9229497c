//! # folio
//!
//! Client-side behavior for a static portfolio site, compiled to
//! WebAssembly. The HTML and CSS are served as-is; this crate attaches the
//! interactive parts once the page has loaded: theme switching, the
//! responsive navbar, reveal-on-scroll, contact form validation with a
//! simulated send, smooth in-page scrolling, and an opt-in type-writer.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme resolution and the [`theme::PreferenceStore`] seam |
//! | [`nav`] | Scrolled flag, active section, mobile menu state |
//! | [`reveal`] | Staggered delays and one-way reveal flags |
//! | [`form`] | Field validation rules and submission state |
//! | [`anchor`] | Fragment link parsing |
//! | [`typewriter`] | Type-writer tick state machine |
//! | [`config`] | Page configuration with stock defaults |
//! | [`consts`] | Element ids, class names, thresholds, timings |
//! | [`error`] | Binding errors |
//! | `dom` | Browser bindings (`hydrate` feature only) |
//!
//! Everything outside `dom` is plain Rust and is tested natively.

pub mod anchor;
pub mod config;
pub mod consts;
pub mod error;
pub mod form;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: run once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    dom::page::boot();
}
