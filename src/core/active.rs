//! # Active Matching
//!
//! Decides whether a node should be highlighted as the current location.
//! Matching is by identity: the active node must be a reference into the same
//! tree as the candidate.

use crate::core::node::NavNode;

/// True if `candidate` is `active`, or a strict ancestor of it at any depth.
///
/// Used for section headers and for the children of a section, so a parent
/// entry lights up while one of its descendants is the current page.
pub fn is_match_or_child_match(candidate: &NavNode, active: Option<&NavNode>) -> bool {
    match active {
        Some(active) => std::ptr::eq(candidate, active) || has_child_match(candidate, active),
        None => false,
    }
}

/// Identity only. A top-level leaf has no descendants worth checking.
pub fn is_exact_match(candidate: &NavNode, active: Option<&NavNode>) -> bool {
    active.is_some_and(|active| std::ptr::eq(candidate, active))
}

fn has_child_match(candidate: &NavNode, active: &NavNode) -> bool {
    candidate
        .children
        .iter()
        .any(|child| std::ptr::eq(child, active) || has_child_match(child, active))
}
