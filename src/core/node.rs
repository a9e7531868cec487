//! # Navigation Nodes
//!
//! A `NavNode` is one entry in the navigation tree: a label plus a handful of
//! optional presentation fields. Trees are built once per menu build and then
//! only read; nothing in the core mutates a node after construction.
//!
//! ```text
//! NavNode
//! ├── text: String                    // label
//! ├── children: Vec<NavNode>          // empty = no children
//! ├── url / target: Option<String>    // link destination
//! ├── icon: Option<String>            // icon *name*, resolved later
//! ├── show_icon: bool                 // only then is the icon rendered
//! ├── divider: bool                   // separator, never rendered
//! ├── on_click: Option<ClickEffect>   // runs before the menu is dismissed
//! ├── highlight_text: Option<String>  // feature highlight marker
//! └── empty_message_id: Option<String>
//! ```
//!
//! Nodes are compared by identity (see `core::active`), so there is no
//! `PartialEq` impl. Two entries with the same label are still different nodes.

use std::fmt;
use std::rc::Rc;

/// Failure raised by a node's own click effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEffectError(pub String);

impl fmt::Display for ClickEffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "click effect failed: {}", self.0)
    }
}

impl std::error::Error for ClickEffectError {}

/// A node's own click side effect.
pub type ClickEffect = Rc<dyn Fn() -> Result<(), ClickEffectError>>;

#[derive(Clone, Default)]
pub struct NavNode {
    pub text: String,
    pub children: Vec<NavNode>,
    pub url: Option<String>,
    pub target: Option<String>,
    pub icon: Option<String>,
    pub show_icon: bool,
    pub divider: bool,
    pub on_click: Option<ClickEffect>,
    pub highlight_text: Option<String>,
    pub empty_message_id: Option<String>,
}

impl NavNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// A separator entry. Dividers still count as children for classification.
    pub fn divider() -> Self {
        Self {
            divider: true,
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<NavNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the icon name and turns on `show_icon`.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self.show_icon = true;
        self
    }

    /// Sets the icon name without showing it in the menu.
    pub fn with_hidden_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self.show_icon = false;
        self
    }

    pub fn with_highlight(mut self, text: impl Into<String>) -> Self {
        self.highlight_text = Some(text.into());
        self
    }

    pub fn with_empty_message(mut self, id: impl Into<String>) -> Self {
        self.empty_message_id = Some(id.into());
        self
    }

    pub fn on_click<F>(mut self, effect: F) -> Self
    where
        F: Fn() -> Result<(), ClickEffectError> + 'static,
    {
        self.on_click = Some(Rc::new(effect));
        self
    }

    /// Looks up a descendant by child indices. An empty path is `self`.
    pub fn at_path(&self, path: &[usize]) -> Option<&NavNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}

impl fmt::Debug for NavNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavNode")
            .field("text", &self.text)
            .field("children", &self.children)
            .field("url", &self.url)
            .field("target", &self.target)
            .field("icon", &self.icon)
            .field("show_icon", &self.show_icon)
            .field("divider", &self.divider)
            .field("on_click", &self.on_click.as_ref().map(|_| "<effect>"))
            .field("highlight_text", &self.highlight_text)
            .field("empty_message_id", &self.empty_message_id)
            .finish()
    }
}
