//! # Application State
//!
//! Core state for the menu demo. No TUI types here; presentation state
//! (cursor position, list scroll) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── items: Vec<NavNode>         // top-level menu entries
//! ├── active_path: Option<Vec<usize>>
//! ├── menu_open: bool
//! └── status_message: String
//! ```
//!
//! The active node is stored as a path of child indices and resolved back to
//! a reference into `items` whenever the menu renders, so identity matching
//! always compares nodes of the same tree.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::node::NavNode;

pub struct App {
    pub items: Vec<NavNode>,
    pub active_path: Option<Vec<usize>>,
    pub menu_open: bool,
    pub status_message: String,
}

impl App {
    pub fn new(items: Vec<NavNode>) -> Self {
        Self {
            items,
            active_path: None,
            menu_open: true,
            status_message: String::from("Press m to toggle the menu"),
        }
    }

    pub fn from_config(items: Vec<NavNode>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(items);
        app.active_path = config
            .active
            .as_deref()
            .and_then(|labels| find_label_path(&app.items, labels));
        app
    }

    /// The currently active node, if the stored path still resolves.
    pub fn active_node(&self) -> Option<&NavNode> {
        let path = self.active_path.as_deref()?;
        let (first, rest) = path.split_first()?;
        self.items.get(*first)?.at_path(rest)
    }
}

/// Resolve a slash-separated label path (`"Dashboards/Browse"`) to child indices.
pub fn find_label_path(items: &[NavNode], labels: &str) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut level = items;
    for label in labels.split('/').map(str::trim).filter(|l| !l.is_empty()) {
        let index = level
            .iter()
            .position(|node| !node.divider && node.text == label)?;
        path.push(index);
        level = level[index].children.as_slice();
    }
    if path.is_empty() { None } else { Some(path) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, MenuConfig, resolve};
    use crate::core::sample::sample_menu;

    #[test]
    fn test_new_app_has_no_active_node() {
        let app = App::new(sample_menu());
        assert!(app.active_node().is_none());
        assert!(app.menu_open);
    }

    #[test]
    fn test_from_config_marks_label_path_active() {
        let config = resolve(
            &MenuConfig::default(),
            &CliOverrides {
                active: Some("Alerting/Contact points"),
                ..Default::default()
            },
        );
        let app = App::from_config(sample_menu(), &config);
        assert_eq!(app.active_path, Some(vec![4, 1]));
        assert_eq!(app.active_node().map(|n| n.text.as_str()), Some("Contact points"));

        let config = resolve(
            &MenuConfig::default(),
            &CliOverrides {
                active: Some("Alerting/Nope"),
                ..Default::default()
            },
        );
        assert!(App::from_config(sample_menu(), &config).active_path.is_none());
    }

    #[test]
    fn test_find_label_path() {
        let items = sample_menu();
        assert_eq!(find_label_path(&items, "Home"), Some(vec![0]));
        assert_eq!(find_label_path(&items, "Dashboards/Snapshots"), Some(vec![2, 3]));
        assert_eq!(find_label_path(&items, "Dashboards/Nope"), None);
        assert_eq!(find_label_path(&items, ""), None);
    }

    #[test]
    fn test_active_node_resolves_into_items() {
        let mut app = App::new(sample_menu());
        app.active_path = Some(vec![2, 4, 0]);
        let active = app.active_node().unwrap();
        assert_eq!(active.text, "Shared panels");
        assert!(std::ptr::eq(active, &app.items[2].children[4].children[0]));
    }

    #[test]
    fn test_stale_path_resolves_to_none() {
        let mut app = App::new(sample_menu());
        app.active_path = Some(vec![99]);
        assert!(app.active_node().is_none());
    }
}
