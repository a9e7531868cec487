//! # Node Classification
//!
//! Every node maps to exactly one rendering variant. The rule only looks at
//! `children` and `empty_message_id`:
//!
//! ```text
//! children non-empty        → Branch
//! else empty_message_id set → EmptyBranch
//! else                      → Leaf
//! ```
//!
//! Divider children count toward non-emptiness even though they are never
//! rendered, so a node whose only child is a divider is still a Branch.

use crate::core::node::NavNode;

/// The rendering variant of a node, produced once and consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Branch { children: &'a [NavNode] },
    EmptyBranch { message_id: &'a str },
    Leaf { node: &'a NavNode },
}

pub fn classify(node: &NavNode) -> NodeKind<'_> {
    if !node.children.is_empty() {
        NodeKind::Branch {
            children: &node.children,
        }
    } else if let Some(message_id) = node.empty_message_id.as_deref() {
        NodeKind::EmptyBranch { message_id }
    } else {
        NodeKind::Leaf { node }
    }
}
