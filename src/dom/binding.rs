//! RAII handles for event listeners and intersection observers.
//!
//! Each handle owns the `Closure` the browser calls back into. Dropping the
//! handle unregisters the callback before the closure is freed, so no JS
//! reference can outlive the Rust side.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{MountError, describe};

pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::Js`] if the browser rejects the listener.
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, MountError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| MountError::js("addEventListener", &err))?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("removeEventListener {}: {}", self.event, describe(&err));
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct ObserverBinding {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ObserverBinding {
    /// Observe every element in `targets`; `handler` receives each batch of
    /// entries in the order the browser reports them.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::Js`] if the observer cannot be created.
    pub fn observe_all<'a>(
        threshold: f64,
        targets: impl IntoIterator<Item = &'a Element>,
        mut handler: impl FnMut(Vec<IntersectionObserverEntry>) + 'static,
    ) -> Result<Self, MountError> {
        let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            handler(entries.iter().map(|entry| entry.unchecked_into::<IntersectionObserverEntry>()).collect());
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| MountError::js("IntersectionObserver", &err))?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
