//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered once per input
//! intent drained from the
//! [`InputBridge`](crate::resources::inputbridge::InputBridge). The
//! [`InputAction`] enum lists all recognized intents.
//!
//! Observers subscribe to these events to react to input without touching
//! the channel; the dialogue demo advances its script this way.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
///
/// These abstract the physical sources (click, Enter key, synthetic driver)
/// into demo-meaningful intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Advance the dialogue (default: click or Enter).
    Advance,
    /// Quit the app (default: Escape or window close).
    Quit,
}

/// Event emitted inside the world for each drained input intent.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
}
