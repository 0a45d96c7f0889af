//! Fixed-rate cadence events.
//!
//! When a [`FixedTimer`](crate::components::fixedtimer::FixedTimer) component
//! accumulates a full period, a [`CadenceTickEvent`] is triggered for the
//! entity. Observers keyed on the timer's signal react to the tick; the card
//! demo uses this to start one transfer per period.
//!
//! # Event Flow
//!
//! 1. `update_fixed_timers` system accumulates frame deltas
//! 2. Emits one `CadenceTickEvent` per elapsed period, with entity and signal
//! 3. Observers such as `observe_transfer_tick` receive the event
//! 4. The timer keeps its remainder, so cadence never drifts
//!
//! # Related
//!
//! - [`crate::components::fixedtimer::FixedTimer`] – the accumulator component
//! - [`crate::systems::cadence::update_fixed_timers`] – system that emits these events
//! - [`crate::systems::transfer::observe_transfer_tick`] – observer that starts transfers

use bevy_ecs::prelude::*;

/// Event emitted when a fixed timer completes a period.
///
/// The `entity` field identifies the entity carrying the timer, and `signal`
/// names the cadence so observers can filter for the ticks they care about.
#[derive(Event, Debug, Clone)]
pub struct CadenceTickEvent {
    /// The entity whose timer ticked.
    pub entity: Entity,
    /// The cadence name, copied from the timer.
    pub signal: String,
}
