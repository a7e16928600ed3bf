//! Header `scrolled` state as a function of vertical scroll offset.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts::HEADER_SCROLLED_CLASS;
use crate::surface::ClassList;

/// Exclusive: an offset exactly at the threshold is not yet scrolled.
#[must_use]
pub fn is_scrolled(offset_px: f64, threshold_px: f64) -> bool {
    offset_px > threshold_px
}

pub struct HeaderWatcher<N> {
    header: N,
    threshold_px: f64,
}

impl<N: ClassList> HeaderWatcher<N> {
    pub fn new(header: N, threshold_px: f64) -> Self {
        Self { header, threshold_px }
    }

    /// Apply the state for `offset_px` and return it.
    pub fn on_scroll(&mut self, offset_px: f64) -> bool {
        let scrolled = is_scrolled(offset_px, self.threshold_px);
        self.header.set_class(HEADER_SCROLLED_CLASS, scrolled);
        scrolled
    }

    #[must_use]
    pub fn header(&self) -> &N {
        &self.header
    }
}
