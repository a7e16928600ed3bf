use super::*;
use crate::fake::FakeNode;

fn watcher() -> HeaderWatcher<FakeNode> {
    HeaderWatcher::new(FakeNode::default(), 50.0)
}

#[test]
fn threshold_is_exclusive() {
    assert!(!is_scrolled(50.0, 50.0));
    assert!(is_scrolled(50.5, 50.0));
    assert!(!is_scrolled(0.0, 50.0));
}

#[test]
fn crossing_upward_adds_scrolled() {
    let mut w = watcher();
    assert!(!w.on_scroll(40.0));
    assert!(!w.header().has_class("scrolled"));
    assert!(w.on_scroll(60.0));
    assert!(w.header().has_class("scrolled"));
}

#[test]
fn crossing_downward_removes_scrolled() {
    let mut w = watcher();
    w.on_scroll(60.0);
    assert!(!w.on_scroll(40.0));
    assert!(!w.header().has_class("scrolled"));
}

#[test]
fn exactly_at_threshold_is_not_scrolled() {
    let mut w = watcher();
    w.on_scroll(60.0);
    assert!(!w.on_scroll(50.0));
    assert!(!w.header().has_class("scrolled"));
}

#[test]
fn repeated_events_are_stable() {
    let mut w = watcher();
    for _ in 0..3 {
        w.on_scroll(120.0);
    }
    assert!(w.header().has_class("scrolled"));
    assert_eq!(w.header().classes.len(), 1);
}
