//! High-level game state resources.
//!
//! [`GameState`] is the authoritative answer to "what is the app doing right
//! now"; [`NextGameState`] carries at most one requested transition. Systems
//! only ever write the request. The observer in
//! `crate::events::gamestate::observe_gamestate_change_event` applies it,
//! runs the lifecycle hooks, and clears the request, so setup and teardown
//! happen exactly once per transition.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the app can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    /// Before the world is wired up. Nothing runs here.
    #[default]
    None,
    /// One-shot initialization: config load, counters, demo selection.
    Setup,
    /// A demo scene is live and ticking.
    Running,
    /// Final summary and drive-loop shutdown.
    Quitting,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] and the event
    /// observer when setup/teardown hooks must be triggered.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
///
/// Marking a transition with [`NextGameState::set`] does nothing by itself;
/// `check_pending_state` notices the pending value at the next frame
/// boundary and emits the change event the observer acts on.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
