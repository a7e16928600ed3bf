//! Light/dark theme: read once at startup, flipped and persisted on toggle.
//!
//! The theme is expressed as exactly one of two classes on the document root
//! (`light-mode` / `dark-mode`). The stored value is `"light"` or `"dark"`;
//! anything else, including a missing key, means dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_MODE_CLASS, LIGHT_MODE_CLASS};
use crate::store::{PreferenceStore, StorageError};
use crate::surface::ClassList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Unrecognized or missing values are dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Presentation class carried by the root while this theme is active.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => LIGHT_MODE_CLASS,
            Self::Dark => DARK_MODE_CLASS,
        }
    }
}

pub struct ThemeController<N, S> {
    root: N,
    store: S,
    key: String,
    current: Theme,
}

impl<N: ClassList, S: PreferenceStore> ThemeController<N, S> {
    /// Read the persisted preference and apply it to `root`.
    ///
    /// Nothing is written back on startup.
    ///
    /// # Errors
    ///
    /// Propagates the store's read failure; `root` is left untouched.
    pub fn init(root: N, store: S, key: impl Into<String>) -> Result<Self, StorageError> {
        let key = key.into();
        let current = Theme::from_stored(store.get(&key)?.as_deref());
        let mut controller = Self { root, store, key, current };
        controller.apply();
        Ok(controller)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, apply it, then persist it.
    ///
    /// # Errors
    ///
    /// Returns the store's write failure. The page has already switched by
    /// then; only persistence is lost.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.current = self.current.flipped();
        self.apply();
        self.store.set(&self.key, self.current.as_str())?;
        Ok(self.current)
    }

    #[must_use]
    pub fn root(&self) -> &N {
        &self.root
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply(&mut self) {
        self.root.remove_class(self.current.flipped().class_name());
        self.root.add_class(self.current.class_name());
    }
}
