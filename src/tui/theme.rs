//! # Theme
//!
//! Maps semantic roles to ratatui styles. Purely presentational: nothing in
//! `core` sees a `Style`.

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeName;

/// What a piece of text *is*, independent of how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Text,
    Muted,
    Header,
    Active,
    Selected,
    Highlight,
    EmptyMessage,
    Border,
    Error,
}

pub trait StyleProvider {
    fn style(&self, role: Role) -> Style;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub name: ThemeName,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        Self { name }
    }
}

impl StyleProvider for Theme {
    fn style(&self, role: Role) -> Style {
        let (text, muted, accent) = match self.name {
            ThemeName::Dark => (Color::Gray, Color::DarkGray, Color::Cyan),
            ThemeName::Light => (Color::Black, Color::Gray, Color::Blue),
        };
        match role {
            Role::Text => Style::default().fg(text),
            Role::Muted => Style::default().fg(muted),
            Role::Header => Style::default().fg(text).add_modifier(Modifier::BOLD),
            Role::Active => Style::default().fg(accent).add_modifier(Modifier::BOLD),
            Role::Selected => Style::default().add_modifier(Modifier::REVERSED),
            Role::Highlight => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Role::EmptyMessage => Style::default().fg(muted).add_modifier(Modifier::ITALIC),
            Role::Border => Style::default().fg(muted),
            Role::Error => Style::default().fg(Color::Red),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_is_bold_in_both_themes() {
        for name in [ThemeName::Dark, ThemeName::Light] {
            let style = Theme::new(name).style(Role::Active);
            assert!(style.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_themes_differ_in_accent() {
        let dark = Theme::new(ThemeName::Dark).style(Role::Active);
        let light = Theme::new(ThemeName::Light).style(Role::Active);
        assert_ne!(dark.fg, light.fg);
    }

    #[test]
    fn test_empty_message_is_italic() {
        let style = Theme::default().style(Role::EmptyMessage);
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }
}
