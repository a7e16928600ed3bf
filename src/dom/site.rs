//! Mounts every page component and owns the resulting handles.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent, Window};

use super::node::{query, query_all, query_within};
use super::{DomNode, EventBinding, FrameLoop, LocalStore, MountError, ObserverBinding, describe};
use crate::config::SiteConfig;
use crate::consts::COARSE_POINTER_QUERY;
use crate::cursor::CursorAnimator;
use crate::header::HeaderWatcher;
use crate::nav::NavController;
use crate::reveal::{ActiveLinkTracker, NavLink, SectionSighting, Visibility, reveal};
use crate::surface::Point;
use crate::theme::ThemeController;

/// The mounted page. Dropping it removes every listener, disconnects the
/// observers, and stops the cursor loop.
#[derive(Default)]
pub struct Site {
    bindings: Vec<EventBinding>,
    observers: Vec<ObserverBinding>,
    cursor_loop: Option<FrameLoop>,
    mounted: Vec<&'static str>,
}

struct MountContext<'a> {
    window: &'a Window,
    document: &'a Document,
    config: &'a SiteConfig,
}

type Mounter = fn(&mut Site, &MountContext<'_>) -> Result<bool, MountError>;

impl Site {
    /// Mount all components against the current document.
    ///
    /// Components are independent: one that fails or finds no elements does
    /// not affect the others.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::NoWindow`] / [`MountError::NoDocument`] outside a
    /// browsing context.
    pub fn mount(config: &SiteConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let cx = MountContext { window: &window, document: &document, config };

        let components: [(&'static str, Mounter); 7] = [
            ("theme", Self::mount_theme),
            ("nav", Self::mount_nav),
            ("cursor", Self::mount_cursor),
            ("reveal", Self::mount_reveal),
            ("active-link", Self::mount_active_links),
            ("header", Self::mount_header),
            ("year", Self::mount_year),
        ];

        let mut site = Self::default();
        for (name, mount) in components {
            match mount(&mut site, &cx) {
                Ok(true) => site.mounted.push(name),
                Ok(false) => log::debug!("{name}: required elements absent, skipped"),
                Err(err) => log::warn!("{name}: not mounted: {err}"),
            }
        }
        Ok(site)
    }

    /// Names of the components that found their elements and mounted.
    #[must_use]
    pub fn mounted(&self) -> &[&'static str] {
        &self.mounted
    }

    pub fn pause_cursor(&self) {
        if let Some(frame_loop) = &self.cursor_loop {
            frame_loop.pause();
        }
    }

    /// # Errors
    ///
    /// Returns [`MountError::Js`] if the next animation frame cannot be requested.
    pub fn resume_cursor(&self) -> Result<(), MountError> {
        match &self.cursor_loop {
            Some(frame_loop) => frame_loop.resume(),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn is_cursor_running(&self) -> bool {
        self.cursor_loop.as_ref().is_some_and(FrameLoop::is_running)
    }

    fn mount_theme(&mut self, cx: &MountContext<'_>) -> Result<bool, MountError> {
        let Some(button) = query(cx.document, &cx.config.selectors.theme_toggle)? else {
            return Ok(false);
        };
        let Some(body) = cx.document.body() else {
            return Ok(false);
        };
        let store = LocalStore::open(cx.window)?;
        let theme = ThemeController::init(DomNode::new(body.into()), store, cx.config.storage_key.clone())?;
        log::debug!("theme: {}", theme.current().as_str());

        let theme = Rc::new(RefCell::new(theme));
        self.bindings.push(EventBinding::listen(button.element(), "click", move |_: Event| {
            if let Err(err) = theme.borrow_mut().toggle() {
                log::warn!("theme preference not saved: {err}");
            }
        })?);
        Ok(true)
    }

    fn mount_nav(&mut self, cx: &MountContext<'_>) -> Result<bool, MountError> {
        let sel = &cx.config.selectors;
        let (Some(toggle), Some(panel)) = (query(cx.document, &sel.mobile_toggle)?, query(cx.document, &sel.nav)?)
        else {
            return Ok(false);
        };
        let icon = query_within(toggle.element(), &sel.mobile_toggle_icon)?;
        let theme_button = query(cx.document, &sel.menu_theme_button)?;
        let links = query_all(cx.document, &sel.nav_links)?;

        let nav = Rc::new(RefCell::new(NavController::new(
            panel,
            icon,
            theme_button,
            cx.config.mobile_breakpoint_px,
        )));

        let on_toggle = Rc::clone(&nav);
        self.bindings.push(EventBinding::listen(toggle.element(), "click", move |_: Event| {
            on_toggle.borrow_mut().toggle();
        })?);

        for link in &links {
            let on_link = Rc::clone(&nav);
            let window = cx.window.clone();
            self.bindings.push(EventBinding::listen(link.element(), "click", move |_: Event| {
                on_link.borrow_mut().on_link_selected(viewport_width(&window));
            })?);
        }
        Ok(true)
    }

    fn mount_header(&mut self, cx: &MountContext<'_>) -> Result<bool, MountError> {
        let Some(header) = query(cx.document, &cx.config.selectors.header)? else {
            return Ok(false);
        };
        let mut watcher = HeaderWatcher::new(header, cx.config.header_scroll_threshold_px);
        watcher.on_scroll(scroll_offset(cx.window));

        let watcher = Rc::new(RefCell::new(watcher));
        let window = cx.window.clone();
        self.bindings.push(EventBinding::listen(cx.window, "scroll", move |_: Event| {
            watcher.borrow_mut().on_scroll(scroll_offset(&window));
        })?);
        Ok(true)
    }

    fn mount_reveal(&mut self, cx: &MountContext<'_>) -> Result<bool, MountError> {
        let targets = query_all(cx.document, &cx.config.selectors.reveal)?;
        if targets.is_empty() {
            return Ok(false);
        }
        let observer = ObserverBinding::observe_all(
            cx.config.reveal_threshold,
            targets.iter().map(DomNode::element),
            |entries| {
                for entry in entries {
                    let mut node = DomNode::new(entry.target());
                    reveal(&mut node, Visibility::new(entry.is_intersecting(), entry.intersection_ratio()));
                }
            },
        )?;
        self.observers.push(observer);
        Ok(true)
    }

    fn mount_active_links(&mut self, cx: &MountContext<'_>) -> Result<bool, MountError> {
        let sel = &cx.config.selectors;
        let sections = query_all(cx.document, &sel.sections)?;
        let links = query_all(cx.document, &sel.nav_links)?;
        if sections.is_empty() || links.is_empty() {
            return Ok(false);
        }
        let links = links
            .into_iter()
            .map(|node| NavLink::new(node.attribute("href").unwrap_or_default(), node))
            .collect();
        let mut tracker = ActiveLinkTracker::new(links, cx.config.section_active_ratio);

        let observer = ObserverBinding::observe_all(
            cx.config.section_active_ratio,
            sections.iter().map(DomNode::element),
            move |entries| {
                let batch: Vec<SectionSighting> = entries
                    .iter()
                    .map(|entry| {
                        SectionSighting::new(entry.target().id(), entry.is_intersecting(), entry.intersection_ratio())
                    })
                    .collect();
                if let Some(id) = tracker.on_batch(&batch) {
                    log::debug!("active section: {id}");
                }
            },
        )?;
        self.observers.push(observer);
        Ok(true)
    }

    fn mount_cursor(&mut self, cx: &MountContext<'_>) -> Result<bool, MountError> {
        if is_coarse_pointer(cx.window) {
            log::debug!("cursor: coarse pointer, using system cursor");
            return Ok(false);
        }
        let sel = &cx.config.selectors;
        let (Some(ring), Some(dot)) = (query(cx.document, &sel.cursor_ring)?, query(cx.document, &sel.cursor_dot)?)
        else {
            return Ok(false);
        };
        let cursor = Rc::new(RefCell::new(CursorAnimator::new(ring, dot, cx.config.cursor_ease)));

        let on_move = Rc::clone(&cursor);
        self.bindings.push(EventBinding::listen(cx.document, "mousemove", move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let point = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            on_move.borrow_mut().on_pointer_move(point);
        })?);

        let on_leave = Rc::clone(&cursor);
        self.bindings.push(EventBinding::listen(cx.document, "mouseleave", move |_: Event| {
            on_leave.borrow_mut().on_pointer_leave();
        })?);

        for el in query_all(cx.document, &sel.interactive)? {
            let on_enter = Rc::clone(&cursor);
            self.bindings.push(EventBinding::listen(el.element(), "mouseenter", move |_: Event| {
                on_enter.borrow_mut().on_hover(true);
            })?);
            let on_exit = Rc::clone(&cursor);
            self.bindings.push(EventBinding::listen(el.element(), "mouseleave", move |_: Event| {
                on_exit.borrow_mut().on_hover(false);
            })?);
        }

        self.cursor_loop = Some(FrameLoop::start(cx.window.clone(), move |_timestamp| {
            cursor.borrow_mut().frame();
        })?);
        Ok(true)
    }

    fn mount_year(&mut self, cx: &MountContext<'_>) -> Result<bool, MountError> {
        let Some(year) = query(cx.document, &cx.config.selectors.year)? else {
            return Ok(false);
        };
        year.set_text(&js_sys::Date::new_0().get_full_year().to_string());
        Ok(true)
    }
}

/// `window.innerWidth`; unreadable widths count as wide so the menu is left alone.
fn viewport_width(window: &Window) -> f64 {
    match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or(f64::INFINITY),
        Err(err) => {
            log::warn!("innerWidth: {}", describe(&err));
            f64::INFINITY
        }
    }
}

fn scroll_offset(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(offset) => offset,
        Err(err) => {
            log::warn!("scrollY: {}", describe(&err));
            0.0
        }
    }
}

fn is_coarse_pointer(window: &Window) -> bool {
    match window.match_media(COARSE_POINTER_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::debug!("matchMedia: {}", describe(&err));
            false
        }
    }
}
