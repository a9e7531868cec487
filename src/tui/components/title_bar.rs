//! # TitleBar Component
//!
//! Top status bar showing where the user is and the last status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Page and status**: `"megamenu | Dashboards › Browse | Opened Browse"`
//! 2. **Page only**: `"megamenu | Dashboards › Browse"`
//! 3. **Nothing active**: `"megamenu | (no page)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `breadcrumb`: labels from the top-level entry down to the active node
/// - `status_message`: transient status (e.g. "Opened Browse", click errors)
pub struct TitleBar {
    pub breadcrumb: Vec<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(breadcrumb: Vec<String>, status_message: String) -> Self {
        Self {
            breadcrumb,
            status_message,
        }
    }

    fn text(&self) -> String {
        let page = if self.breadcrumb.is_empty() {
            String::from("(no page)")
        } else {
            self.breadcrumb.join(" › ")
        };
        if self.status_message.is_empty() {
            format!("megamenu | {page}")
        } else {
            format!("megamenu | {page} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
