//! # MenuItem Component
//!
//! One clickable menu row:
//!
//! ```text
//!   ⌂  Home  /
//!   ◎  Explore ✦ New!  /explore
//!      Browse  /dashboards                 (child row, indented)
//!      Help  https://example.com/docs ↗    (target = _blank)
//! ```
//!
//! Stateless. The row does not know how it is clicked; the parent owns the
//! cursor and passes `selected` in as a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::render::{IconSlot, ItemView};
use crate::tui::component::{Component, LineComponent};
use crate::tui::theme::{Role, StyleProvider};

/// Columns reserved for the icon glyph, so labels line up.
const ICON_COLUMNS: usize = 3;
const CHILD_INDENT: &str = "  ";

pub struct MenuItem<'a> {
    pub item: &'a ItemView,
    pub selected: bool,
    pub show_url: bool,
    pub theme: &'a dyn StyleProvider,
}

impl<'a> MenuItem<'a> {
    pub fn new(item: &'a ItemView, theme: &'a dyn StyleProvider) -> Self {
        Self {
            item,
            selected: false,
            show_url: true,
            theme,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_url(mut self, show_url: bool) -> Self {
        self.show_url = show_url;
        self
    }

    fn label_style(&self) -> Style {
        let base = if self.item.is_active {
            self.theme.style(Role::Active)
        } else {
            self.theme.style(Role::Text)
        };
        if self.selected {
            base.patch(self.theme.style(Role::Selected))
        } else {
            base
        }
    }
}

/// Pads a glyph to `ICON_COLUMNS`, or returns blank columns for an empty slot.
pub(crate) fn icon_cell(glyph: Option<&str>) -> String {
    match glyph {
        Some(glyph) => {
            let pad = ICON_COLUMNS.saturating_sub(glyph.width());
            format!("{glyph}{}", " ".repeat(pad))
        }
        None => " ".repeat(ICON_COLUMNS),
    }
}

impl LineComponent for MenuItem<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let label_style = self.label_style();
        let mut spans = Vec::new();

        if self.item.is_child {
            spans.push(Span::raw(CHILD_INDENT));
        }

        let glyph = self.item.icon.icon().map(|icon| icon.glyph.as_str());
        spans.push(Span::styled(icon_cell(glyph), label_style));
        spans.push(Span::styled(self.item.text.clone(), label_style));

        if let IconSlot::Highlighted { marker, .. } = &self.item.icon {
            spans.push(Span::styled(
                format!(" ✦ {marker}"),
                self.theme.style(Role::Highlight),
            ));
        }

        if self.show_url
            && let Some(url) = &self.item.url
        {
            spans.push(Span::styled(format!("  {url}"), self.theme.style(Role::Muted)));
        }
        if self.item.target.as_deref() == Some("_blank") {
            spans.push(Span::styled(" ↗", self.theme.style(Role::Muted)));
        }

        vec![Line::from(spans)]
    }
}

impl Component for MenuItem<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
