//! Interactive behavior for a static portfolio page, compiled to WebAssembly.
//!
//! The page markup and styles are owned elsewhere; this crate only toggles
//! presentation classes and inline styles in response to clicks, scrolling,
//! visibility changes, and pointer movement. Component logic is written
//! against the small capability traits in [`surface`] so it can be tested
//! without a browser; [`dom`] binds it to the live document and [`app`] is
//! the wasm entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark theme, persisted in `localStorage` |
//! | [`nav`] | Mobile navigation panel and toggle icon |
//! | [`header`] | Header `scrolled` state from scroll offset |
//! | [`reveal`] | One-way scroll reveal and active nav link tracking |
//! | [`cursor`] | Custom cursor ring/dot easing and hover state |
//! | [`surface`] | `ClassList` / `InlineStyle` capability traits and `Point` |
//! | [`store`] | `PreferenceStore` trait and storage errors |
//! | [`config`] | `SiteConfig` parsed from the page's JSON config block |
//! | [`consts`] | Class names and default thresholds |
//! | [`dom`] | `web_sys` adapters, listener handles, frame loop, `Site` |
//! | [`app`] | `#[wasm_bindgen(start)]` boot and exported controls |

pub mod app;
pub mod config;
pub mod consts;
pub mod cursor;
pub mod dom;
pub mod header;
pub mod nav;
pub mod reveal;
pub mod store;
pub mod surface;
pub mod theme;

#[cfg(test)]
mod fake;
