//! Custom cursor: an instant dot and a ring that eases toward the pointer.
//!
//! Pointer moves update the target and place the dot immediately. Each
//! display frame moves the ring a fixed fraction of the remaining distance,
//! so after `n` frames from rest at the origin the ring sits at
//! `target * (1 - (1 - ease)^n)`. Scheduling the frames is the host's job
//! (see `dom::FrameLoop`); this type only does the bookkeeping.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::consts::CURSOR_HOVER_CLASS;
use crate::surface::{ClassList, InlineStyle, Point};

/// Move `current` toward `target` by `factor` of the gap, per axis.
#[must_use]
pub fn ease_toward(current: Point, target: Point, factor: f64) -> Point {
    Point {
        x: current.x + (target.x - current.x) * factor,
        y: current.y + (target.y - current.y) * factor,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    /// Last reported pointer position.
    pub target: Point,
    /// Where the ring is drawn.
    pub rendered: Point,
    pub shown: bool,
}

impl CursorState {
    /// Advance the ring one frame and return its new position.
    pub fn step(&mut self, ease: f64) -> Point {
        self.rendered = ease_toward(self.rendered, self.target, ease);
        self.rendered
    }
}

pub struct CursorAnimator<N> {
    ring: N,
    dot: N,
    state: CursorState,
    ease: f64,
}

impl<N: ClassList + InlineStyle> CursorAnimator<N> {
    pub fn new(ring: N, dot: N, ease: f64) -> Self {
        Self { ring, dot, state: CursorState::default(), ease }
    }

    pub fn on_pointer_move(&mut self, point: Point) {
        self.state.target = point;
        if !self.state.shown {
            self.state.shown = true;
            self.ring.set_shown(true);
            self.dot.set_shown(true);
        }
        self.dot.place_at(point);
    }

    /// Hide both elements. The ring keeps easing toward the frozen target.
    pub fn on_pointer_leave(&mut self) {
        self.state.shown = false;
        self.ring.set_shown(false);
        self.dot.set_shown(false);
    }

    pub fn on_hover(&mut self, entered: bool) {
        self.ring.set_class(CURSOR_HOVER_CLASS, entered);
    }

    /// One display frame: ease the ring and place it.
    pub fn frame(&mut self) -> Point {
        let rendered = self.state.step(self.ease);
        self.ring.place_at(rendered);
        rendered
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    #[must_use]
    pub fn ring(&self) -> &N {
        &self.ring
    }

    #[must_use]
    pub fn dot(&self) -> &N {
        &self.dot
    }
}
