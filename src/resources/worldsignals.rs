//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication without entity queries.
//!
//! Use cases include:
//! - The `"quit_requested"` flag the drive loop polls every frame
//! - Frame statistics counters such as completed transfers
//! - The demo name and script path handed over from the command line

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
///
/// Provides maps for integers, strings, and flags accessible from any
/// system.
#[derive(Debug, Clone, Resource)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}
impl Default for WorldSignals {
    fn default() -> Self {
        Self {
            integers: FxHashMap::default(),
            strings: FxHashMap::default(),
            flags: FxHashSet::default(),
        }
    }
}
impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add `delta` to an integer signal, treating a missing key as zero.
    pub fn add_integer(&mut self, key: impl Into<String>, delta: i32) {
        *self.integers.entry(key.into()).or_insert(0) += delta;
    }
    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    /// Get a string signal by key.
    /// It's recommended to clone the String if you need ownership.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_absent_until_set() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("quit_requested"));
        signals.set_flag("quit_requested");
        assert!(signals.has_flag("quit_requested"));
        // Setting again is idempotent.
        signals.set_flag("quit_requested");
        assert!(signals.has_flag("quit_requested"));
    }

    #[test]
    fn test_add_integer_starts_from_zero() {
        let mut signals = WorldSignals::default();
        signals.add_integer("transfers_completed", 1);
        signals.add_integer("transfers_completed", 2);
        assert_eq!(signals.get_integer("transfers_completed"), Some(3));
        assert_eq!(signals.get_integer("missing"), None);
    }
}
