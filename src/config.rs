//! Site configuration parsed from an optional JSON block in the page.
//!
//! DESIGN
//! ======
//! Every field has a default taken from [`crate::consts`], so a page without a
//! config element (or with a partial one) behaves like the stock portfolio.
//! Unknown keys are rejected to surface typos instead of silently ignoring them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{
    CURSOR_EASE, DEFAULT_LOG_LEVEL, HEADER_SCROLL_THRESHOLD_PX, MOBILE_BREAKPOINT_PX, REVEAL_THRESHOLD,
    SECTION_ACTIVE_RATIO, THEME_STORAGE_KEY,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// DOM selectors for every element the components bind to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub theme_toggle: String,
    /// Theme button made visible when the mobile menu opens.
    pub menu_theme_button: String,
    pub nav: String,
    pub nav_links: String,
    pub mobile_toggle: String,
    /// Resolved inside the mobile toggle, not the document.
    pub mobile_toggle_icon: String,
    pub header: String,
    pub reveal: String,
    pub sections: String,
    pub cursor_ring: String,
    pub cursor_dot: String,
    pub interactive: String,
    pub year: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-btn".to_owned(),
            menu_theme_button: ".theme-btn".to_owned(),
            nav: ".nav".to_owned(),
            nav_links: ".nav-link".to_owned(),
            mobile_toggle: ".mobile-toggle".to_owned(),
            mobile_toggle_icon: "i".to_owned(),
            header: ".header".to_owned(),
            reveal: ".fade-in-scroll".to_owned(),
            sections: "section[id]".to_owned(),
            cursor_ring: ".cursor".to_owned(),
            cursor_dot: ".cursor-dot".to_owned(),
            interactive: "a, button, .hover-lift, input, textarea".to_owned(),
            year: "#year".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub storage_key: String,
    pub mobile_breakpoint_px: f64,
    pub header_scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub section_active_ratio: f64,
    pub cursor_ease: f64,
    pub log_level: String,
    pub selectors: Selectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            header_scroll_threshold_px: HEADER_SCROLL_THRESHOLD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            section_active_ratio: SECTION_ACTIVE_RATIO,
            cursor_ease: CURSOR_EASE,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            selectors: Selectors::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed, names an unknown
    /// field, or carries an out-of-range value.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields.
    ///
    /// The reveal threshold must lie in `[0, 1]`, the section ratio in
    /// `[0, 1)`, the easing factor in `(0, 1]`, and pixel
    /// values must be finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending field,
    /// or [`ConfigError::LogLevel`] for an unrecognized level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_px("mobile_breakpoint_px", self.mobile_breakpoint_px)?;
        check_px("header_scroll_threshold_px", self.header_scroll_threshold_px)?;
        check_ratio("reveal_threshold", self.reveal_threshold)?;
        // Sections qualify strictly above this ratio, so 1.0 could never match.
        if !(0.0..1.0).contains(&self.section_active_ratio) {
            return Err(ConfigError::OutOfRange { field: "section_active_ratio", value: self.section_active_ratio });
        }
        if !(self.cursor_ease > 0.0 && self.cursor_ease <= 1.0) {
            return Err(ConfigError::OutOfRange { field: "cursor_ease", value: self.cursor_ease });
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] when `log_level` is not a `log` level name.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim()).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

fn check_px(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
