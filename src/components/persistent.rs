//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive demo teardown. Used
//! for observers and registered systems, which are entities in bevy_ecs 0.18
//! and would otherwise be swept by the scene cleanup.

use bevy_ecs::prelude::Component;

/// Tag component for entities that must not be despawned on scene cleanup.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
