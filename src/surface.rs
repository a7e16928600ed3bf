//! Capability traits the components drive, plus the screen-space point type.
//!
//! Components only ever toggle presentation classes and write inline styles,
//! so these two traits are the whole surface between the core logic and the
//! document. `dom::DomNode` implements them over real elements; tests use an
//! in-memory fake.

/// A target whose presentation is expressed by named classes.
pub trait ClassList {
    fn add_class(&mut self, name: &str);

    fn remove_class(&mut self, name: &str);

    fn has_class(&self, name: &str) -> bool;

    /// Add `name` when `on`, remove it otherwise.
    fn set_class(&mut self, name: &str, on: bool) {
        if on {
            self.add_class(name);
        } else {
            self.remove_class(name);
        }
    }

    /// Flip `name` and return whether it is now present.
    fn toggle_class(&mut self, name: &str) -> bool {
        let on = !self.has_class(name);
        self.set_class(name, on);
        on
    }
}

/// A target that accepts inline style declarations.
pub trait InlineStyle {
    fn set_style(&mut self, property: &str, value: &str);

    /// Position the element at `point` via `left` / `top` in CSS pixels.
    fn place_at(&mut self, point: Point) {
        self.set_style("left", &format!("{}px", point.x));
        self.set_style("top", &format!("{}px", point.y));
    }

    fn set_shown(&mut self, shown: bool) {
        self.set_style("opacity", if shown { "1" } else { "0" });
    }
}

/// A point in viewport (client) coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
