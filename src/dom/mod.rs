//! Browser adapter: binds the core components to the live document.
//!
//! ARCHITECTURE
//! ============
//! Everything under this module owns `web_sys` handles; nothing above it
//! does. [`Site`] mounts each component independently and holds every
//! listener, observer, and frame loop it creates, so dropping the `Site`
//! tears the page behavior down deterministically.
//!
//! ERROR HANDLING
//! ==============
//! A component whose elements are absent is skipped (logged at `debug`).
//! Any other failure while mounting one component is logged at `warn` and
//! does not stop the others.

mod binding;
mod frame_loop;
mod node;
mod site;
mod storage;

use wasm_bindgen::JsValue;

use crate::store::StorageError;

pub use binding::{EventBinding, ObserverBinding};
pub use frame_loop::{FrameLoop, FrameScheduler, RafScheduler};
pub use node::DomNode;
pub use site::Site;
pub use storage::LocalStore;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
}

impl MountError {
    pub(crate) fn js(context: &'static str, err: &JsValue) -> Self {
        Self::Js { context, message: describe(err) }
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
