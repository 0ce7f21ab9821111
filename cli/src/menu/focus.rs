//! # WebRS Focus Ancestor Highlighting
//!
//! File: cli/src/menu/focus.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Keyboard-accessibility support for the multi-level desktop menu: when a
//! menu link receives focus, the list items between it and the menu root
//! get a `focus` class so CSS can keep the containing dropdowns visible;
//! when focus leaves, every `focus` class is cleared menu-wide.
//!
//! These are pure per-event functions — explicit element parameters in, DOM
//! class mutations out, no state held between events.
//!
//! ## Highlight rules
//!
//! With `chain` being the ordered ancestors of the focused anchor up to
//! (but excluding) the menu root, outermost first and ending with the
//! anchor itself:
//!
//! - One-level dropdown context — the second-from-last element (the
//!   anchor's parent item) carries `menu-item-has-children`: mark that
//!   parent item alone.
//! - Deeper dropdown context — the third-from-last element carries
//!   `sub-menu`: mark every `li` in the chain.
//!
use super::dom::{MenuDom, NodeId};

/// # Focus Handler (`handle_focus`)
///
/// Clears all existing `focus` marks under `root`, then marks the ancestor
/// items of `anchor` according to the highlight rules.
pub fn handle_focus(dom: &mut MenuDom, root: NodeId, anchor: NodeId) {
    clear_focus(dom, root);

    let chain = ancestor_chain(dom, root, anchor);

    // One-level dropdown: the anchor's parent item owns children.
    if chain.len() >= 2 {
        let parent_item = chain[chain.len() - 2];
        if dom.has_class(parent_item, "menu-item-has-children") {
            dom.add_class(parent_item, "focus");
        }
    }

    // Deeper dropdown: every list item in the chain stays highlighted.
    if chain.len() >= 3 && dom.has_class(chain[chain.len() - 3], "sub-menu") {
        for &node in &chain {
            if dom.tag(node) == "li" {
                dom.add_class(node, "focus");
            }
        }
    }
}

/// # Focus-Out Handler (`handle_focus_out`)
///
/// Clears the `focus` class from every list item under the menu root.
pub fn handle_focus_out(dom: &mut MenuDom, root: NodeId) {
    clear_focus(dom, root);
}

fn clear_focus(dom: &mut MenuDom, root: NodeId) {
    for node in dom.descendants(root) {
        if dom.tag(node) == "li" {
            dom.remove_class(node, "focus");
        }
    }
}

/// Ordered ancestors of `anchor` up to (excluding) `root`, outermost first,
/// ending with `anchor` itself.
fn ancestor_chain(dom: &MenuDom, root: NodeId, anchor: NodeId) -> Vec<NodeId> {
    let mut chain = Vec::new();
    let mut current = Some(anchor);
    while let Some(node) = current {
        if node == root {
            break;
        }
        chain.push(node);
        current = dom.parent(node);
    }
    chain.reverse();
    chain
}
