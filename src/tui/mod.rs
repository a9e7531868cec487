//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, draws the `MenuView`s
//! produced by `core::render`, and translates keyboard events into
//! `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Frame Cycle
//!
//! 1. Render every top-level node with `MenuRenderer` (fresh views each frame).
//! 2. Draw, then block on the next key.
//! 3. Enter on a row invokes its composed click handler. The dismiss callback
//!    inside it only queues `Action::CloseMenu` on an mpsc channel; the loop
//!    drains that channel after the event.

mod component;
pub mod components;
mod event;
pub mod theme;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::rc::Rc;
use std::sync::mpsc;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::click::Dismiss;
use crate::core::config::{ResolvedConfig, ThemeName};
use crate::core::icons::IconSet;
use crate::core::render::{FeatureHighlightBadge, MenuRenderer, MenuView, RenderError};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{MegaMenuEvent, MegaMenuState, clickable_rows};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub mega_menu: MegaMenuState,
    pub theme: Theme,
    pub show_urls: bool,
}

impl TuiState {
    pub fn new(theme: ThemeName, show_urls: bool) -> Self {
        Self {
            mega_menu: MegaMenuState::new(),
            theme: Theme::new(theme),
            show_urls,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Render every top-level entry. The first missing translation aborts the frame.
fn render_menu(
    app: &App,
    renderer: &MenuRenderer<'_>,
    dismiss: &Dismiss,
) -> Result<Vec<MenuView>, RenderError> {
    let active = app.active_node();
    app.items
        .iter()
        .map(|node| renderer.render(node, active, dismiss))
        .collect()
}

pub fn run(config: ResolvedConfig, items: Vec<crate::core::node::NavNode>) -> std::io::Result<()> {
    let mut app = App::from_config(items, &config);
    let mut tui = TuiState::new(config.theme, config.show_urls);

    let icons = IconSet::with_overrides(&config.icons);
    let catalog = Catalog::new(config.messages.clone());
    let renderer = MenuRenderer::new(&icons, &catalog, &FeatureHighlightBadge, &config.locale);

    // Dismiss only queues; the loop applies it after the click finishes
    let (tx, rx) = mpsc::channel();
    let dismiss: Dismiss = Rc::new(move || {
        if tx.send(Action::CloseMenu).is_err() {
            warn!("Dismiss after the event loop stopped");
        }
    });

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    info!("Menu ready with {} top-level entries", app.items.len());

    let mut should_quit = false;
    while !should_quit {
        let views = render_menu(&app, &renderer, &dismiss);
        if let Err(e) = &views {
            warn!("Menu render failed: {}", e);
        }
        let rows = views.as_deref().map(clickable_rows).unwrap_or_default();
        tui.mega_menu.set_row_count(rows.len());

        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &views))?;

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if matches!(event, TuiEvent::Quit) {
                should_quit = update(&mut app, Action::Quit) == Effect::Quit;
                break;
            }

            if !app.menu_open {
                match event {
                    TuiEvent::ToggleMenu => {
                        update(&mut app, Action::OpenMenu);
                    }
                    TuiEvent::Escape => {
                        should_quit = update(&mut app, Action::Quit) == Effect::Quit;
                        break;
                    }
                    _ => {}
                }
                continue;
            }

            match tui.mega_menu.handle_event(&event) {
                Some(MegaMenuEvent::Dismiss) => {
                    update(&mut app, Action::CloseMenu);
                }
                Some(MegaMenuEvent::Click(index)) => {
                    let Some(row) = rows.get(index) else {
                        continue;
                    };
                    info!("Clicked {:?} at {:?}", row.label, row.path);
                    match row.on_click.invoke() {
                        Ok(()) => {
                            update(&mut app, Action::Navigate(row.path.clone()));
                        }
                        Err(e) => {
                            warn!("Click on {:?} failed: {}", row.label, e);
                            update(&mut app, Action::ClickFailed(e.to_string()));
                        }
                    }
                    // Rows belong to the frame that was drawn; redraw before the next click
                    break;
                }
                None => {}
            }
        }

        while let Ok(action) = rx.try_recv() {
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    Ok(())
}
