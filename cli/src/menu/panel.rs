//! # WebRS Mobile Nav Panel Controller
//!
//! File: cli/src/menu/panel.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Explicit finite-state machine for the mobile navigation overlay, replacing
//! the original callback-chained class toggling with named states and timed
//! transition guards. Time is virtual: tests drive it with `advance`, no
//! wall-clock waits.
//!
//! ## State machine
//!
//! States: `Closed → Opening → Open → Closing → Closed`.
//!
//! - Activation while closed: `aria-expanded="true"` on the toggle, `active`
//!   class on the panel immediately (mounts the overlay in its closed visual
//!   state), then `open` after [`PANEL_OPEN_DELAY`] so the CSS transition has
//!   a frame to start from.
//! - Activation while open: `aria-expanded="false"` immediately, `open`
//!   removed immediately (starts the close transition), then `active`
//!   removed after [`PANEL_CLOSE_DELAY`] once the transition has visually
//!   finished.
//! - The toggle button's own `active` class flips on every activation.
//!
//! Re-activating before a pending delay fires *cancels* the stale pending
//! transition and starts the opposite one. The observed original behavior
//! let both delayed callbacks fire, which could leave a visually
//! inconsistent intermediate state; the explicit FSM resolves that race in
//! favor of the most recent activation.
//!
use super::dom::{MenuDom, NodeId};
use std::time::Duration;

/// Delay before the `open` class lands after an open activation.
pub const PANEL_OPEN_DELAY: Duration = Duration::from_millis(50);
/// Delay before the `active` class is dropped after a close activation.
pub const PANEL_CLOSE_DELAY: Duration = Duration::from_millis(375);

/// Named panel states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone, Copy)]
enum PendingTransition {
    FinishOpen,
    FinishClose,
}

/// # Panel Controller (`PanelController`)
///
/// Owns the FSM for one toggle-button/overlay-panel pair. All DOM effects
/// go through the `MenuDom` passed to each call; the controller holds only
/// ids, state, and its virtual clock.
#[derive(Debug)]
pub struct PanelController {
    toggle: NodeId,
    panel: NodeId,
    state: PanelState,
    now: Duration,
    pending: Option<(Duration, PendingTransition)>,
}

impl PanelController {
    pub fn new(toggle: NodeId, panel: NodeId) -> Self {
        Self {
            toggle,
            panel,
            state: PanelState::Closed,
            now: Duration::ZERO,
            pending: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// # Toggle Activation (`activate`)
    ///
    /// Handles one click/keypress of the toggle button: starts opening from
    /// `Closed`/`Closing`, starts closing from `Open`/`Opening`. Any pending
    /// delayed transition is replaced.
    pub fn activate(&mut self, dom: &mut MenuDom) {
        match self.state {
            PanelState::Closed | PanelState::Closing => {
                dom.set_attr(self.toggle, "aria-expanded", "true");
                dom.add_class(self.panel, "active");
                self.state = PanelState::Opening;
                self.pending = Some((self.now + PANEL_OPEN_DELAY, PendingTransition::FinishOpen));
            }
            PanelState::Open | PanelState::Opening => {
                dom.set_attr(self.toggle, "aria-expanded", "false");
                dom.remove_class(self.panel, "open");
                self.state = PanelState::Closing;
                self.pending = Some((self.now + PANEL_CLOSE_DELAY, PendingTransition::FinishClose));
            }
        }
        dom.toggle_class(self.toggle, "active");
    }

    /// # Advance the Virtual Clock (`advance`)
    ///
    /// Moves time forward and fires the pending delayed transition if its
    /// due time has been reached.
    pub fn advance(&mut self, dom: &mut MenuDom, delta: Duration) {
        self.now += delta;
        if let Some((due, transition)) = self.pending {
            if self.now >= due {
                match transition {
                    PendingTransition::FinishOpen => {
                        dom.add_class(self.panel, "open");
                        self.state = PanelState::Open;
                    }
                    PendingTransition::FinishClose => {
                        dom.remove_class(self.panel, "active");
                        self.state = PanelState::Closed;
                    }
                }
                self.pending = None;
            }
        }
    }
}
