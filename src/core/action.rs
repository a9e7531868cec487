//! # Actions
//!
//! Everything that can happen in the menu demo becomes an `Action`.
//! User presses `m`? That's `Action::ToggleMenu`.
//! A clicked row's handler succeeds? That's `Action::Navigate(path)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns the follow-up `Effect` for the adapter. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenMenu,
    CloseMenu,
    ToggleMenu,
    /// A row was clicked and its handler finished; the path becomes active.
    Navigate(Vec<usize>),
    /// A row's click effect failed; the message goes to the status bar.
    ClickFailed(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::OpenMenu => {
            app.menu_open = true;
            Effect::None
        }
        Action::CloseMenu => {
            app.menu_open = false;
            Effect::None
        }
        Action::ToggleMenu => {
            app.menu_open = !app.menu_open;
            Effect::None
        }
        Action::Navigate(path) => {
            app.active_path = Some(path);
            app.status_message = match app.active_node() {
                Some(node) => match node.url.as_deref() {
                    Some(url) => format!("Opened {} ({url})", node.text),
                    None => format!("Opened {}", node.text),
                },
                None => {
                    warn!("Navigated to a path that does not resolve");
                    String::from("Unknown destination")
                }
            };
            Effect::None
        }
        Action::ClickFailed(message) => {
            app.status_message = format!("Error: {message}");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
