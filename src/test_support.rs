//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::rc::Rc;

use crate::core::click::Dismiss;
use crate::core::node::NavNode;
use crate::core::sample::sample_menu;

/// A dismiss callback plus a counter of how often it ran.
pub fn counting_dismiss() -> (Dismiss, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let dismiss: Dismiss = Rc::new(move || counter.set(counter.get() + 1));
    (dismiss, count)
}

/// The demo menu: Home, Starred, Dashboards, Explore, Alerting, Bookmarks,
/// Administration, Help.
pub fn sample_tree() -> Vec<NavNode> {
    sample_menu()
}

/// Collects every cell symbol of a rendered test buffer into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
