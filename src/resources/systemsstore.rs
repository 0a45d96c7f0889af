//! Registry for the state machine's lifecycle hooks.
//!
//! One-shot systems register here under string keys and run later via their
//! [`bevy_ecs::system::SystemId`]. The gamestate observer looks hooks up by
//! name (`"setup"`, `"enter_cards"`, `"teardown"`, `"quit_game"`, ...) so
//! the transition logic never references the hook systems directly.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Name-keyed registry of runnable hook systems.
#[derive(Resource)]
pub struct SystemsStore {
    map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    /// Register a system id under a hook name. A repeated name replaces the
    /// earlier registration.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Look up a hook by name. Ids are `Copy`, so the caller can hand the
    /// result straight to `run_system`.
    pub fn get(&self, name: impl AsRef<str>) -> Option<SystemId> {
        self.map.get(name.as_ref()).copied()
    }
}
