//! # WebRS Submenu Controller
//!
//! File: cli/src/menu/submenu.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Collapsible submenu logic: each submenu toggle tracks expanded/collapsed
//! by inspecting its sibling panel's current inline `max-height` (unset or
//! zero means collapsed) rather than holding separate state, so the DOM is
//! the single source of truth just as in the shipped markup.
//!
//! - Expand: `aria-expanded="true"`, add `open`, then set `max-height` to a
//!   large viewport-relative value after [`SUBMENU_EXPAND_DELAY`] so the
//!   height transition animates from zero.
//! - Collapse: `aria-expanded="false"`, clear `max-height` immediately
//!   (starts the shrink transition), then remove `open` after the longer
//!   [`SUBMENU_COLLAPSE_DELAY`].
//!
//! Like the panel FSM, a re-activation before the pending delay fires
//! replaces it; time is virtual and advanced by the caller.
//!
use super::dom::{MenuDom, NodeId};
use std::time::Duration;

/// Delay before `max-height` is raised after an expand activation.
pub const SUBMENU_EXPAND_DELAY: Duration = Duration::from_millis(100);
/// Delay before the `open` class is dropped after a collapse activation.
pub const SUBMENU_COLLAPSE_DELAY: Duration = Duration::from_millis(275);

/// Viewport-relative value used for the expanded panel height.
const EXPANDED_MAX_HEIGHT: &str = "100vh";

#[derive(Debug, Clone, Copy)]
enum PendingEffect {
    RaiseMaxHeight,
    DropOpenClass,
}

/// Controller for one submenu toggle and its sibling panel.
#[derive(Debug)]
pub struct SubmenuController {
    toggle: NodeId,
    panel: NodeId,
    now: Duration,
    pending: Option<(Duration, PendingEffect)>,
}

impl SubmenuController {
    pub fn new(toggle: NodeId, panel: NodeId) -> Self {
        Self {
            toggle,
            panel,
            now: Duration::ZERO,
            pending: None,
        }
    }

    /// Collapsed means no inline `max-height`, or an explicit zero.
    pub fn is_expanded(&self, dom: &MenuDom) -> bool {
        !matches!(dom.max_height(self.panel), None | Some("0") | Some(""))
    }

    /// Handles one activation of the submenu toggle, expanding or
    /// collapsing based on the panel's current `max-height`.
    pub fn activate(&mut self, dom: &mut MenuDom) {
        if self.is_expanded(dom) {
            dom.set_attr(self.toggle, "aria-expanded", "false");
            dom.set_max_height(self.panel, None);
            self.pending = Some((
                self.now + SUBMENU_COLLAPSE_DELAY,
                PendingEffect::DropOpenClass,
            ));
        } else {
            dom.set_attr(self.toggle, "aria-expanded", "true");
            dom.add_class(self.panel, "open");
            self.pending = Some((
                self.now + SUBMENU_EXPAND_DELAY,
                PendingEffect::RaiseMaxHeight,
            ));
        }
        dom.toggle_class(self.toggle, "active");
    }

    /// Moves the virtual clock forward, firing the pending effect when due.
    pub fn advance(&mut self, dom: &mut MenuDom, delta: Duration) {
        self.now += delta;
        if let Some((due, effect)) = self.pending {
            if self.now >= due {
                match effect {
                    PendingEffect::RaiseMaxHeight => {
                        dom.set_max_height(self.panel, Some(EXPANDED_MAX_HEIGHT));
                    }
                    PendingEffect::DropOpenClass => {
                        dom.remove_class(self.panel, "open");
                    }
                }
                self.pending = None;
            }
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (MenuDom, SubmenuController) {
        let mut dom = MenuDom::new();
        let li = dom.element("li", &["menu-item-has-children"]);
        let toggle = dom.element("button", &["toggle-sub-menu"]);
        let panel = dom.element("ul", &["sub-menu"]);
        dom.append(li, toggle);
        dom.append(li, panel);
        (dom, SubmenuController::new(toggle, panel))
    }

    #[test]
    fn test_expand_sequence() {
        let (mut dom, mut controller) = fixture();
        let (toggle, panel) = (controller.toggle, controller.panel);

        assert!(!controller.is_expanded(&dom));
        controller.activate(&mut dom);

        assert_eq!(dom.attr(toggle, "aria-expanded"), Some("true"));
        assert!(dom.has_class(panel, "open"));
        assert!(dom.max_height(panel).is_none()); // height raised only after the delay

        controller.advance(&mut dom, SUBMENU_EXPAND_DELAY);
        assert_eq!(dom.max_height(panel), Some("100vh"));
        assert!(controller.is_expanded(&dom));
    }

    #[test]
    fn test_collapse_sequence() {
        let (mut dom, mut controller) = fixture();
        let (toggle, panel) = (controller.toggle, controller.panel);

        controller.activate(&mut dom);
        controller.advance(&mut dom, SUBMENU_EXPAND_DELAY);

        controller.activate(&mut dom);
        assert_eq!(dom.attr(toggle, "aria-expanded"), Some("false"));
        assert!(dom.max_height(panel).is_none()); // cleared immediately
        assert!(dom.has_class(panel, "open")); // dropped only after the delay

        controller.advance(&mut dom, SUBMENU_COLLAPSE_DELAY);
        assert!(!dom.has_class(panel, "open"));
        assert!(!controller.is_expanded(&dom));
    }

    /// Each submenu tracks its own panel independently.
    #[test]
    fn test_independent_submenus() {
        let mut dom = MenuDom::new();
        let t1 = dom.element("button", &["toggle-sub-menu"]);
        let p1 = dom.element("ul", &["sub-menu"]);
        let t2 = dom.element("button", &["toggle-sub-menu"]);
        let p2 = dom.element("ul", &["sub-menu"]);
        let mut c1 = SubmenuController::new(t1, p1);
        let c2 = SubmenuController::new(t2, p2);

        c1.activate(&mut dom);
        c1.advance(&mut dom, SUBMENU_EXPAND_DELAY);

        assert!(c1.is_expanded(&dom));
        assert!(!c2.is_expanded(&dom));
    }
}
