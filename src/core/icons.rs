//! # Icon Resolution
//!
//! Nodes carry icon *names*; what actually gets drawn is decided here.
//! An unknown name is not an error: the renderer simply leaves the icon
//! slot empty.

use std::collections::HashMap;

use log::debug;

/// A resolved, renderable icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub glyph: String,
}

pub trait IconResolver {
    /// Returns `None` for names this resolver does not know.
    fn resolve(&self, name: &str) -> Option<Icon>;
}

const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("home", "⌂"),
    ("apps", "▦"),
    ("star", "★"),
    ("bookmark", "⚑"),
    ("compass", "◎"),
    ("bell", "♪"),
    ("cog", "⚙"),
    ("shield", "⛨"),
    ("user", "☺"),
    ("folder", "▤"),
    ("plus", "+"),
    ("history", "↺"),
    ("link", "↗"),
    ("chart", "▁▃▅"),
];

/// Built-in name → glyph table, extended or overridden from config.
#[derive(Debug, Clone)]
pub struct IconSet {
    glyphs: HashMap<String, String>,
}

impl IconSet {
    pub fn builtin() -> Self {
        Self {
            glyphs: BUILTIN_ICONS
                .iter()
                .map(|(name, glyph)| (name.to_string(), glyph.to_string()))
                .collect(),
        }
    }

    /// Built-in icons plus `overrides`; an override replaces a built-in glyph.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut set = Self::builtin();
        for (name, glyph) in overrides {
            set.glyphs.insert(name.clone(), glyph.clone());
        }
        set
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IconResolver for IconSet {
    fn resolve(&self, name: &str) -> Option<Icon> {
        let glyph = self.glyphs.get(name);
        if glyph.is_none() {
            debug!("Unknown icon name {:?}, omitting icon", name);
        }
        glyph.map(|glyph| Icon {
            name: name.to_string(),
            glyph: glyph.clone(),
        })
    }
}
