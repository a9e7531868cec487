//! # MenuSection Component
//!
//! A titled group of rows, or a titled group holding a single empty-state
//! message:
//!
//! ```text
//! ▦  Dashboards            ★  Starred
//!      Browse  /dashboards      Your starred dashboards will appear here
//!      Playlists  /playlists
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::render::{ItemView, SectionHeader};
use crate::tui::component::{Component, LineComponent};
use crate::tui::components::menu_item::{MenuItem, icon_cell};
use crate::tui::theme::{Role, StyleProvider};

pub enum SectionBody<'a> {
    Items {
        items: &'a [ItemView],
        /// Index into `items` of the row under the cursor.
        selected: Option<usize>,
    },
    Empty(&'a str),
}

pub struct MenuSection<'a> {
    pub header: &'a SectionHeader,
    pub body: SectionBody<'a>,
    pub show_urls: bool,
    pub theme: &'a dyn StyleProvider,
}

impl LineComponent for MenuSection<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let header_style = if self.header.is_active {
            self.theme.style(Role::Active)
        } else {
            self.theme.style(Role::Header)
        };
        let glyph = self.header.icon.as_ref().map(|icon| icon.glyph.as_str());
        let mut lines = vec![Line::from(vec![
            Span::styled(icon_cell(glyph), header_style),
            Span::styled(self.header.text.clone(), header_style),
        ])];

        match &self.body {
            SectionBody::Items { items, selected } => {
                for (index, item) in items.iter().enumerate() {
                    let row = MenuItem::new(item, self.theme)
                        .selected(*selected == Some(index))
                        .show_url(self.show_urls);
                    lines.extend(row.lines());
                }
            }
            SectionBody::Empty(message) => {
                lines.push(Line::from(Span::styled(
                    format!("     {message}"),
                    self.theme.style(Role::EmptyMessage),
                )));
            }
        }
        lines
    }
}

impl Component for MenuSection<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
