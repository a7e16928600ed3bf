//! WebAssembly entry point and the page-wide `Site` slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The module loads as a deferred script. `start` runs on instantiation:
//! it installs the panic hook, reads the optional JSON config block,
//! initializes console logging, and mounts the [`Site`] once the DOM has been
//! parsed. The mounted site lives in a thread-local slot until [`unmount`].

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::{ConfigError, SiteConfig};
use crate::consts::CONFIG_ELEMENT_ID;
use crate::dom::{Site, describe};

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (config, config_error) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || mount(&config));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("DOMContentLoaded listener: {}", describe(&err));
        }
    } else {
        mount(&config);
    }
}

/// Stop the cursor animation loop, leaving the ring where it is.
#[wasm_bindgen]
pub fn pause_cursor() {
    SITE.with(|slot| {
        if let Some(site) = slot.borrow().as_ref() {
            site.pause_cursor();
        }
    });
}

/// Restart the cursor animation loop.
///
/// # Errors
///
/// Returns the browser's error if the next frame cannot be requested.
#[wasm_bindgen]
pub fn resume_cursor() -> Result<(), JsValue> {
    SITE.with(|slot| match slot.borrow().as_ref() {
        Some(site) => site.resume_cursor().map_err(JsValue::from),
        None => Ok(()),
    })
}

/// Whether the cursor animation loop is currently requesting frames.
#[wasm_bindgen]
pub fn is_cursor_running() -> bool {
    SITE.with(|slot| slot.borrow().as_ref().is_some_and(Site::is_cursor_running))
}

/// Remove every listener and observer and stop the cursor loop.
#[wasm_bindgen]
pub fn unmount() {
    let site = SITE.with(|slot| slot.borrow_mut().take());
    if site.is_some() {
        log::info!("unmounted");
    }
}

fn mount(config: &SiteConfig) {
    match Site::mount(config) {
        Ok(site) => {
            log::info!("mounted components: {}", site.mounted().join(", "));
            SITE.with(|slot| *slot.borrow_mut() = Some(site));
        }
        Err(err) => log::error!("mount failed: {err}"),
    }
}

fn load_config(document: &Document) -> Result<SiteConfig, ConfigError> {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(SiteConfig::default());
    };
    SiteConfig::from_json(&el.text_content().unwrap_or_default())
}

fn init_logging(config: &SiteConfig) {
    let level = config.log_level().unwrap_or(log::Level::Warn);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}
