//! # MenuItemWrapper Component
//!
//! Draws one top-level `MenuView`, picking the section or row component
//! that matches the variant the renderer chose.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::render::MenuView;
use crate::tui::component::{Component, LineComponent};
use crate::tui::components::menu_item::MenuItem;
use crate::tui::components::menu_section::{MenuSection, SectionBody};
use crate::tui::theme::StyleProvider;

pub struct MenuItemWrapper<'a> {
    pub view: &'a MenuView,
    /// Index into `view.items()` of the row under the cursor.
    pub selected: Option<usize>,
    pub show_urls: bool,
    pub theme: &'a dyn StyleProvider,
}

impl LineComponent for MenuItemWrapper<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        match self.view {
            MenuView::Section { header, items } => MenuSection {
                header,
                body: SectionBody::Items {
                    items,
                    selected: self.selected,
                },
                show_urls: self.show_urls,
                theme: self.theme,
            }
            .lines(),
            MenuView::EmptySection { header, message } => MenuSection {
                header,
                body: SectionBody::Empty(message),
                show_urls: self.show_urls,
                theme: self.theme,
            }
            .lines(),
            MenuView::Item(item) => MenuItem::new(item, self.theme)
                .selected(self.selected == Some(0))
                .show_url(self.show_urls)
                .lines(),
        }
    }
}

impl Component for MenuItemWrapper<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}

impl MenuItemWrapper<'_> {
    /// Line offset of clickable row `index` within this wrapper's lines.
    pub fn row_line(&self, index: usize) -> u16 {
        match self.view {
            MenuView::Section { .. } => u16::try_from(index)
                .unwrap_or(u16::MAX)
                .saturating_add(1),
            MenuView::EmptySection { .. } | MenuView::Item(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::icons::IconSet;
    use crate::core::render::{FeatureHighlightBadge, MenuRenderer};
    use crate::test_support::{buffer_text, counting_dismiss, sample_tree};
    use crate::tui::component::line_count;
    use crate::tui::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_all() -> Vec<MenuView> {
        let tree = sample_tree();
        let icons = IconSet::builtin();
        let catalog = Catalog::default();
        let (dismiss, _) = counting_dismiss();
        let renderer = MenuRenderer::new(&icons, &catalog, &FeatureHighlightBadge, "en-US");
        tree.iter()
            .map(|node| renderer.render(node, None, &dismiss).unwrap())
            .collect()
    }

    #[test]
    fn test_heights_follow_variant() {
        let views = render_all();
        let theme = Theme::default();
        let heights: Vec<u16> = views
            .iter()
            .map(|view| {
                MenuItemWrapper {
                    view,
                    selected: None,
                    show_urls: true,
                    theme: &theme,
                }
                .lines()
            })
            .map(|lines| line_count(&lines))
            .collect();

        // Home, Starred, Dashboards, Explore, Alerting, Bookmarks, Administration, Help
        assert_eq!(heights, vec![1, 2, 6, 1, 4, 2, 4, 1]);
    }

    #[test]
    fn test_leaf_renders_single_row() {
        let views = render_all();
        let theme = Theme::default();
        let mut wrapper = MenuItemWrapper {
            view: &views[3],
            selected: Some(0),
            show_urls: true,
            theme: &theme,
        };

        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| wrapper.render(f, f.area())).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Explore"));
        assert!(text.contains("✦ New!"));
        assert!(text.contains("/explore"));
    }

    #[test]
    fn test_row_line_offsets() {
        let views = render_all();
        let theme = Theme::default();
        let wrapper = |view| MenuItemWrapper {
            view,
            selected: None,
            show_urls: true,
            theme: &theme,
        };

        assert_eq!(wrapper(&views[2]).row_line(0), 1);
        assert_eq!(wrapper(&views[2]).row_line(3), 4);
        assert_eq!(wrapper(&views[0]).row_line(0), 0);
    }
}
