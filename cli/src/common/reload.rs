//! # WebRS Live-Reload Channel
//!
//! File: cli/src/common/reload.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This module implements the notification path from a completed build stage
//! to connected browser clients. It is an explicit broadcast object passed by
//! reference to whichever component needs to publish reload events — never a
//! module-level singleton.
//!
//! ## Architecture
//!
//! `ReloadChannel` wraps a `tokio::sync::broadcast` sender:
//! - Stages call `notify` after writing output (fire-and-forget: publishing
//!   with no connected clients is a silent no-op, and there is no
//!   acknowledgment or backpressure).
//! - The dev server calls `subscribe` per connected client and forwards each
//!   event over a server-sent-events response.
//!
//! A `Styles` event lets the browser swap stylesheets in place; `Scripts` and
//! `Full` trigger a full page reload, and the browser-side listener also
//! degrades any failed in-place injection to a full reload.
//!
use tokio::sync::broadcast;
use tracing::debug;

/// What a connected browser should do after a stage completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadEvent {
    /// Reload the whole page.
    Full,
    /// Re-inject stylesheets without a navigation.
    Styles,
    /// Scripts changed; the client treats this as a full reload.
    Scripts,
}

impl ReloadEvent {
    /// Stable wire name used as the SSE event type.
    pub fn as_str(self) -> &'static str {
        match self {
            ReloadEvent::Full => "full",
            ReloadEvent::Styles => "styles",
            ReloadEvent::Scripts => "scripts",
        }
    }
}

/// # Live-Reload Channel (`ReloadChannel`)
///
/// Cloneable handle to the reload broadcast. Clones publish into, and
/// subscribe to, the same underlying channel.
#[derive(Debug, Clone)]
pub struct ReloadChannel {
    tx: broadcast::Sender<ReloadEvent>,
}

impl ReloadChannel {
    /// Creates a channel with a small buffer; slow clients that lag simply
    /// miss intermediate events, which the reload semantics tolerate.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Publishes an event to all connected clients. Returns nothing: with no
    /// subscribers the event is dropped, matching the fire-and-forget model.
    pub fn notify(&self, event: ReloadEvent) {
        let delivered = self.tx.send(event).unwrap_or(0);
        debug!(
            "Reload event '{}' published to {} client(s)",
            event.as_str(),
            delivered
        );
    }

    /// Creates a new subscription; each dev-server client holds one.
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadEvent> {
        self.tx.subscribe()
    }
}

impl Default for ReloadChannel {
    fn default() -> Self {
        Self::new()
    }
}
