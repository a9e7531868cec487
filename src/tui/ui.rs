use crate::core::render::{MenuView, RenderError};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MegaMenu, TitleBar};
use crate::tui::theme::{Role, StyleProvider};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Width of the menu panel, in columns.
const MENU_WIDTH: u16 = 56;

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    views: &Result<Vec<MenuView>, RenderError>,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(breadcrumb(app), app.status_message.clone());
    title_bar.render(frame, title_area);

    draw_page(frame, main_area, app, &tui.theme);

    if !app.menu_open {
        return;
    }
    let menu_area = Rect {
        width: main_area.width.min(MENU_WIDTH),
        ..main_area
    };
    match views {
        Ok(views) => {
            let theme = tui.theme;
            MegaMenu::new(&mut tui.mega_menu, views, tui.show_urls, &theme).render(frame, menu_area);
        }
        Err(e) => draw_error_view(frame, menu_area, &e.to_string(), &tui.theme),
    }
}

/// Labels from the top-level entry down to the active node.
pub fn breadcrumb(app: &App) -> Vec<String> {
    let Some(path) = app.active_path.as_deref() else {
        return Vec::new();
    };
    let mut labels = Vec::new();
    let mut level = app.items.as_slice();
    for &index in path {
        let Some(node) = level.get(index) else {
            break;
        };
        labels.push(node.text.clone());
        level = node.children.as_slice();
    }
    labels
}

fn draw_page(frame: &mut Frame, area: Rect, app: &App, theme: &dyn StyleProvider) {
    let lines = match app.active_node() {
        Some(node) => {
            let mut lines = vec![Line::from(Span::styled(
                node.text.clone(),
                theme.style(Role::Header),
            ))];
            if let Some(url) = &node.url {
                lines.push(Line::from(Span::styled(url.clone(), theme.style(Role::Muted))));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "Nothing open yet. Press m for the menu.",
            theme.style(Role::Muted),
        ))],
    };
    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(theme.style(Role::Border)));
    frame.render_widget(page, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str, theme: &dyn StyleProvider) {
    let error_paragraph = Paragraph::new(error_msg)
        .style(theme.style(Role::Error))
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::TranslationError;
    use crate::core::config::ThemeName;
    use crate::test_support::{buffer_text, sample_tree};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(sample_tree())
    }

    #[test]
    fn test_breadcrumb_follows_active_path() {
        let mut app = app();
        assert!(breadcrumb(&app).is_empty());
        app.active_path = Some(vec![4, 2]);
        assert_eq!(breadcrumb(&app), vec!["Alerting", "Notification policies"]);
    }

    #[test]
    fn test_render_error_replaces_menu() {
        let app = app();
        let mut tui = TuiState::new(ThemeName::Dark, true);
        let views: Result<Vec<MenuView>, RenderError> =
            Err(RenderError::Translation(TranslationError::MissingTranslation {
                id: "x-empty".to_string(),
                locale: "en-US".to_string(),
            }));

        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui, &views)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("ERROR"));
        assert!(text.contains("x-empty"));
    }

    #[test]
    fn test_closed_menu_shows_page_only() {
        let mut app = app();
        app.menu_open = false;
        app.active_path = Some(vec![3]);
        let mut tui = TuiState::new(ThemeName::Light, true);
        let views = Ok(Vec::new());

        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui, &views)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("/explore"));
        assert!(!text.contains(" Menu "));
    }
}
