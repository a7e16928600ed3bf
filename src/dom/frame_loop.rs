//! A per-frame loop with an explicit pause/resume/drop contract.
//!
//! The loop state (running flag, pending request, tick callback) is driven
//! through a [`FrameScheduler`], so the state machine is independent of
//! `requestAnimationFrame`. [`RafScheduler`] is the browser implementation:
//! its JS closure holds only a weak reference to the loop state, so dropping
//! the [`FrameLoop`] cancels the pending frame and frees the closure with no
//! reference cycle left behind.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::{MountError, describe};

/// Requests and cancels one-shot frame callbacks.
pub trait FrameScheduler {
    /// Ask for the loop's callback on the next frame; returns the request handle.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] when the request is rejected.
    fn request(&self) -> Result<i32, MountError>;

    fn cancel(&self, handle: i32);
}

/// `requestAnimationFrame` on a browser window.
pub struct RafScheduler {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameScheduler for RafScheduler {
    fn request(&self) -> Result<i32, MountError> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Err(MountError::Js {
                context: "requestAnimationFrame",
                message: "frame callback not installed".to_owned(),
            });
        };
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| MountError::js("requestAnimationFrame", &err))
    }

    fn cancel(&self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::debug!("cancelAnimationFrame: {}", describe(&err));
        }
    }
}

struct LoopState<S> {
    scheduler: S,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
}

impl<S: FrameScheduler> LoopState<S> {
    fn schedule(&self) -> Result<(), MountError> {
        let handle = self.scheduler.request()?;
        self.pending.set(Some(handle));
        Ok(())
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// One delivered frame: tick, then request the next while running.
    fn fire(&self, timestamp: f64) {
        self.pending.set(None);
        if !self.running.get() {
            return;
        }
        {
            let mut tick = self.tick.borrow_mut();
            (*tick)(timestamp);
        }
        if let Err(err) = self.schedule() {
            log::warn!("frame loop stopped: {err}");
            self.running.set(false);
        }
    }
}

pub struct FrameLoop<S: FrameScheduler = RafScheduler> {
    state: Rc<LoopState<S>>,
}

impl FrameLoop<RafScheduler> {
    /// Start calling `tick` with the frame timestamp once per display refresh.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::Js`] if the first frame cannot be requested.
    pub fn start(window: Window, tick: impl FnMut(f64) + 'static) -> Result<Self, MountError> {
        let scheduler = RafScheduler { window, callback: RefCell::new(None) };
        let frame_loop = Self::paused(scheduler, tick);

        let weak: Weak<LoopState<RafScheduler>> = Rc::downgrade(&frame_loop.state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(state) = weak.upgrade() {
                state.fire(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        *frame_loop.state.scheduler.callback.borrow_mut() = Some(callback);

        frame_loop.resume()?;
        Ok(frame_loop)
    }
}

impl<S: FrameScheduler> FrameLoop<S> {
    /// A loop that requests nothing until [`FrameLoop::resume`].
    pub fn paused(scheduler: S, tick: impl FnMut(f64) + 'static) -> Self {
        Self {
            state: Rc::new(LoopState {
                scheduler,
                running: Cell::new(false),
                pending: Cell::new(None),
                tick: RefCell::new(Box::new(tick)),
            }),
        }
    }

    /// Stop after the current frame; the pending frame request is cancelled.
    pub fn pause(&self) {
        self.state.running.set(false);
        self.state.cancel_pending();
    }

    /// Restart a paused loop. No-op if already running.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if the next frame cannot be requested; the
    /// loop stays paused.
    pub fn resume(&self) -> Result<(), MountError> {
        if self.state.running.get() {
            return Ok(());
        }
        self.state.running.set(true);
        if let Err(err) = self.state.schedule() {
            self.state.running.set(false);
            return Err(err);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.pause();
    }
}
