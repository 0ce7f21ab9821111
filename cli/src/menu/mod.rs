//! # WebRS Menu Interaction Model
//!
//! File: cli/src/menu/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! A headless, fully testable model of the site's navigation interaction
//! logic: the mobile overlay panel, collapsible submenus, and keyboard
//! focus highlighting for the multi-level desktop menu. The shipped site
//! runs the equivalent logic in the browser (bundled by the script stage);
//! this model is the reference for that behavior, with the callback chains
//! re-architected as explicit state machines driven by a virtual clock.
//!
//! ## Architecture
//!
//! - `dom`: minimal element-tree arena (tags, classes, attributes, inline
//!   `max-height`) — just enough DOM for the controllers to operate on.
//! - `panel`: the overlay FSM (`Closed/Opening/Open/Closing`) with timed
//!   transition guards.
//! - `submenu`: expand/collapse driven by the sibling panel's `max-height`.
//! - `focus`: pure per-event ancestor highlighting for keyboard users.
//!
//! Handlers take the target element and event explicitly — there is no
//! implicit receiver and no module-level state.
//!

/// Minimal element-tree model the controllers operate on.
pub mod dom;
/// Keyboard-focus ancestor highlighting.
pub mod focus;
/// Mobile overlay panel state machine.
pub mod panel;
/// Collapsible submenu controller.
pub mod submenu;
