//! Shared constants: class names, selectors, and default thresholds.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const LIGHT_MODE_CLASS: &str = "light-mode";

// ── Navigation ──────────────────────────────────────────────────

/// Viewports at or below this width (CSS px) close the menu on link selection.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const NAV_OPEN_CLASS: &str = "active";
pub const ICON_CLOSED_CLASS: &str = "fa-bars";
pub const ICON_OPEN_CLASS: &str = "fa-xmark";

// ── Header ──────────────────────────────────────────────────────

/// Scroll offset (CSS px) that must be exceeded before the header is `scrolled`.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const HEADER_SCROLLED_CLASS: &str = "scrolled";

// ── Reveal / active link ────────────────────────────────────────

/// Fraction of an element's area that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

pub const REVEALED_CLASS: &str = "visible";

/// A section becomes current once strictly more than this fraction is visible.
pub const SECTION_ACTIVE_RATIO: f64 = 0.5;

pub const LINK_ACTIVE_CLASS: &str = "active";

// ── Cursor ──────────────────────────────────────────────────────

/// Per-frame easing factor for the ring (lower = slower).
pub const CURSOR_EASE: f64 = 0.2;

pub const CURSOR_HOVER_CLASS: &str = "cursor-hover";

pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// ── Boot ────────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
