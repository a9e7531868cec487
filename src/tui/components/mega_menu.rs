//! # Mega Menu Component
//!
//! Overlay panel that stacks every top-level `MenuView` and moves a cursor
//! over the clickable rows. Opened and closed with `m`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MegaMenuState` lives in `TuiState`
//! - `MegaMenu` is created each frame with borrowed state and fresh views

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::click::ClickHandler;
use crate::core::render::MenuView;
use crate::tui::component::{Component, EventHandler, LineComponent, line_count};
use crate::tui::components::menu_item_wrapper::MenuItemWrapper;
use crate::tui::event::TuiEvent;
use crate::tui::theme::{Role, StyleProvider};

/// A clickable row, addressed by its path from the top-level list.
#[derive(Debug, Clone)]
pub struct MenuRow {
    pub path: Vec<usize>,
    pub label: String,
    pub on_click: ClickHandler,
}

/// Flattens views into clickable rows in display order.
pub fn clickable_rows(views: &[MenuView]) -> Vec<MenuRow> {
    views
        .iter()
        .enumerate()
        .flat_map(|(root, view)| {
            view.items().iter().map(move |item| MenuRow {
                path: std::iter::once(root).chain(item.child_index).collect(),
                label: item.text.clone(),
                on_click: item.on_click.clone(),
            })
        })
        .collect()
}

/// Persistent state for the menu overlay.
#[derive(Debug, Default)]
pub struct MegaMenuState {
    /// Index into the flattened clickable rows.
    pub selected: usize,
    pub row_count: usize,
    pub scroll: u16,
}

impl MegaMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-syncs with the rows of the current frame, keeping the cursor in range.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }
}

/// Events emitted by the menu overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MegaMenuEvent {
    /// Click the row at this flat index.
    Click(usize),
    Dismiss,
}

impl EventHandler for MegaMenuState {
    type Event = MegaMenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MegaMenuEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleMenu => Some(MegaMenuEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.row_count > 0 {
                    self.selected = (self.selected + 1).min(self.row_count - 1);
                }
                None
            }
            TuiEvent::Submit if self.row_count > 0 => Some(MegaMenuEvent::Click(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu overlay.
pub struct MegaMenu<'a> {
    state: &'a mut MegaMenuState,
    views: &'a [MenuView],
    show_urls: bool,
    theme: &'a dyn StyleProvider,
}

impl<'a> MegaMenu<'a> {
    pub fn new(
        state: &'a mut MegaMenuState,
        views: &'a [MenuView],
        show_urls: bool,
        theme: &'a dyn StyleProvider,
    ) -> Self {
        Self {
            state,
            views,
            show_urls,
            theme,
        }
    }

    /// All lines plus the line index of the selected row.
    fn layout(&self) -> (Vec<Line<'static>>, u16) {
        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut first_row = 0;

        for view in self.views {
            let row_count = view.items().len();
            let local = self
                .state
                .selected
                .checked_sub(first_row)
                .filter(|local| *local < row_count);
            let wrapper = MenuItemWrapper {
                view,
                selected: local,
                show_urls: self.show_urls,
                theme: self.theme,
            };
            if let Some(local) = local {
                selected_line = line_count(&lines).saturating_add(wrapper.row_line(local));
            }
            lines.extend(wrapper.lines());
            first_row += row_count;
        }
        (lines, selected_line)
    }
}

impl Component for MegaMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.style(Role::Border))
            .title(" Menu ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let inner_height = block.inner(area).height;
        let (lines, selected_line) = self.layout();

        // Keep the selected row inside the viewport
        if selected_line < self.state.scroll {
            self.state.scroll = selected_line;
        } else if inner_height > 0
            && selected_line >= self.state.scroll.saturating_add(inner_height)
        {
            self.state.scroll = selected_line + 1 - inner_height;
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.state.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
