//! Scroll-driven reveal and active navigation link tracking.
//!
//! Both streams consume visibility batches as delivered by an
//! `IntersectionObserver`:
//!
//! - **Reveal**: an element that intersects gains `visible`. The class is
//!   never removed, so leaving the viewport again has no effect.
//! - **Active section**: within one batch, the last section that is more than
//!   half visible becomes current, and exactly the nav links pointing at it
//!   (`href="#<id>"`) carry `active`. A batch with no qualifying section
//!   leaves the previous highlight alone.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{LINK_ACTIVE_CLASS, REVEALED_CLASS};
use crate::surface::ClassList;

/// One observation of an element's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Visibility {
    pub is_intersecting: bool,
    /// Visible fraction of the element's area, `0.0..=1.0`.
    pub ratio: f64,
}

impl Visibility {
    #[must_use]
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }
}

/// Mark `target` visible if it entered the viewport. Returns whether it was
/// revealed by this call.
pub fn reveal<N: ClassList>(target: &mut N, visibility: Visibility) -> bool {
    if !visibility.is_intersecting || target.has_class(REVEALED_CLASS) {
        return false;
    }
    target.add_class(REVEALED_CLASS);
    true
}

/// A section's visibility within one observer batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSighting {
    pub id: String,
    pub visibility: Visibility,
}

impl SectionSighting {
    pub fn new(id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self { id: id.into(), visibility: Visibility::new(is_intersecting, ratio) }
    }
}

/// The current section for a batch: the last qualifying sighting wins.
#[must_use]
pub fn pick_current_section(batch: &[SectionSighting], min_ratio: f64) -> Option<&str> {
    batch
        .iter()
        .rev()
        .find(|s| !s.id.is_empty() && s.visibility.is_intersecting && s.visibility.ratio > min_ratio)
        .map(|s| s.id.as_str())
}

/// A navigation link and the fragment it targets.
#[derive(Debug, Clone)]
pub struct NavLink<N> {
    pub href: String,
    pub node: N,
}

impl<N> NavLink<N> {
    pub fn new(href: impl Into<String>, node: N) -> Self {
        Self { href: href.into(), node }
    }

    #[must_use]
    pub fn targets(&self, section_id: &str) -> bool {
        self.href.strip_prefix('#') == Some(section_id)
    }
}

pub struct ActiveLinkTracker<N> {
    links: Vec<NavLink<N>>,
    min_ratio: f64,
    current: Option<String>,
}

impl<N: ClassList> ActiveLinkTracker<N> {
    pub fn new(links: Vec<NavLink<N>>, min_ratio: f64) -> Self {
        Self { links, min_ratio, current: None }
    }

    /// Apply one observer batch. Returns the section made current, if any.
    pub fn on_batch(&mut self, batch: &[SectionSighting]) -> Option<&str> {
        let id = pick_current_section(batch, self.min_ratio)?.to_owned();
        for link in &mut self.links {
            let on = link.targets(&id);
            link.node.set_class(LINK_ACTIVE_CLASS, on);
        }
        self.current = Some(id);
        self.current.as_deref()
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink<N>] {
        &self.links
    }
}
