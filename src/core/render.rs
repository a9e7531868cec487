//! # Menu Rendering
//!
//! Turns one top-level node into a `MenuView`, the view model the TUI draws.
//! The renderer owns no state; it is re-run on every frame.
//!
//! ```text
//! render(node, active, dismiss)
//!   └─ classify(node)
//!        ├─ Branch       → Section { header, items }   (dividers dropped)
//!        ├─ EmptyBranch  → EmptySection { header, message }
//!        └─ Leaf         → Item
//! ```
//!
//! ## Depth Clamp
//!
//! Children of a section are always rendered as items, even when they have
//! children of their own. Grandchildren never appear in the menu.

use std::fmt;

use log::debug;

use crate::core::active::{is_exact_match, is_match_or_child_match};
use crate::core::catalog::{MessageCatalog, TranslationError};
use crate::core::classify::{NodeKind, classify};
use crate::core::click::{ClickHandler, Dismiss, compose_click};
use crate::core::icons::{Icon, IconResolver};
use crate::core::node::NavNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Translation(TranslationError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Translation(e) => write!(f, "render failed: {e}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<TranslationError> for RenderError {
    fn from(e: TranslationError) -> Self {
        RenderError::Translation(e)
    }
}

/// The icon area of a top-level item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSlot {
    Plain(Option<Icon>),
    Highlighted { icon: Option<Icon>, marker: String },
}

impl IconSlot {
    pub fn icon(&self) -> Option<&Icon> {
        match self {
            IconSlot::Plain(icon) | IconSlot::Highlighted { icon, .. } => icon.as_ref(),
        }
    }
}

/// Decorates an item's icon slot when the node carries a highlight marker.
pub trait FeatureHighlight {
    fn wrap(&self, slot: IconSlot, marker: &str) -> IconSlot;
}

/// Default decoration: tags the slot so the TUI draws a badge next to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureHighlightBadge;

impl FeatureHighlight for FeatureHighlightBadge {
    fn wrap(&self, slot: IconSlot, marker: &str) -> IconSlot {
        let icon = match slot {
            IconSlot::Plain(icon) | IconSlot::Highlighted { icon, .. } => icon,
        };
        IconSlot::Highlighted {
            icon,
            marker: marker.to_string(),
        }
    }
}

/// A section title row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub text: String,
    pub icon: Option<Icon>,
    pub is_active: bool,
}

/// A clickable row.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub text: String,
    pub url: Option<String>,
    pub target: Option<String>,
    pub icon: IconSlot,
    pub is_active: bool,
    pub is_child: bool,
    /// Index into the parent's `children`, before dividers were dropped.
    pub child_index: Option<usize>,
    pub on_click: ClickHandler,
}

#[derive(Debug, Clone)]
pub enum MenuView {
    Section {
        header: SectionHeader,
        items: Vec<ItemView>,
    },
    EmptySection {
        header: SectionHeader,
        message: String,
    },
    Item(ItemView),
}

impl MenuView {
    /// Clickable rows in display order.
    pub fn items(&self) -> &[ItemView] {
        match self {
            MenuView::Section { items, .. } => items,
            MenuView::EmptySection { .. } => &[],
            MenuView::Item(item) => std::slice::from_ref(item),
        }
    }
}

pub struct MenuRenderer<'a> {
    icons: &'a dyn IconResolver,
    catalog: &'a dyn MessageCatalog,
    highlight: &'a dyn FeatureHighlight,
    locale: &'a str,
}

impl<'a> MenuRenderer<'a> {
    pub fn new(
        icons: &'a dyn IconResolver,
        catalog: &'a dyn MessageCatalog,
        highlight: &'a dyn FeatureHighlight,
        locale: &'a str,
    ) -> Self {
        Self {
            icons,
            catalog,
            highlight,
            locale,
        }
    }

    pub fn render(
        &self,
        node: &NavNode,
        active: Option<&NavNode>,
        dismiss: &Dismiss,
    ) -> Result<MenuView, RenderError> {
        match classify(node) {
            NodeKind::Branch { children } => {
                let items = children
                    .iter()
                    .enumerate()
                    .filter(|(_, child)| !child.divider)
                    .map(|(index, child)| ItemView {
                        text: child.text.clone(),
                        url: child.url.clone(),
                        target: child.target.clone(),
                        icon: IconSlot::Plain(self.shown_icon(child)),
                        is_active: is_match_or_child_match(child, active),
                        is_child: true,
                        child_index: Some(index),
                        on_click: compose_click(child, dismiss),
                    })
                    .collect();
                Ok(MenuView::Section {
                    header: self.header(node, is_match_or_child_match(node, active)),
                    items,
                })
            }
            NodeKind::EmptyBranch { message_id } => {
                let message = self.catalog.translate(message_id, self.locale)?;
                Ok(MenuView::EmptySection {
                    header: self.header(node, false),
                    message,
                })
            }
            NodeKind::Leaf { node } => {
                let slot = IconSlot::Plain(self.shown_icon(node));
                let icon = match node.highlight_text.as_deref() {
                    Some(marker) => self.highlight.wrap(slot, marker),
                    None => slot,
                };
                Ok(MenuView::Item(ItemView {
                    text: node.text.clone(),
                    url: node.url.clone(),
                    target: node.target.clone(),
                    icon,
                    is_active: is_exact_match(node, active),
                    is_child: false,
                    child_index: None,
                    on_click: compose_click(node, dismiss),
                }))
            }
        }
    }

    fn header(&self, node: &NavNode, is_active: bool) -> SectionHeader {
        SectionHeader {
            text: node.text.clone(),
            icon: self.shown_icon(node),
            is_active,
        }
    }

    fn shown_icon(&self, node: &NavNode) -> Option<Icon> {
        if !node.show_icon {
            return None;
        }
        let icon = node.icon.as_deref().and_then(|name| self.icons.resolve(name));
        if icon.is_none() {
            debug!("No icon rendered for {:?}", node.text);
        }
        icon
    }
}
