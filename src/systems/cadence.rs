//! Fixed-rate cadence systems.
//!
//! This module provides the system that drives
//! [`FixedTimer`](crate::components::fixedtimer::FixedTimer) components:
//!
//! - [`update_fixed_timers`] – accumulates frame deltas and emits one
//!   [`CadenceTickEvent`](crate::events::cadence::CadenceTickEvent) per
//!   elapsed period
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. `update_fixed_timers` adds the frame delta to every timer
//! 2. While `accumulated >= period`, emits a `CadenceTickEvent` and consumes
//!    one period
//! 3. Observers keyed on the signal react to each tick
//!
//! Consuming subtracts the period instead of zeroing the accumulator, so a
//! long frame fires every tick it covers and the cadence never drifts against
//! wall time.

use bevy_ecs::prelude::*;

use crate::components::fixedtimer::FixedTimer;
use crate::events::cadence::CadenceTickEvent;
use crate::resources::worldtime::WorldTime;

/// Accumulate frame time on all fixed timers and emit cadence ticks.
///
/// A frame spanning several periods emits several events, oldest first.
/// Timers with a non-positive period are skipped.
pub fn update_fixed_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut FixedTimer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        if timer.period <= 0.0 {
            continue;
        }
        timer.accumulated += world_time.delta;
        while timer.accumulated >= timer.period {
            commands.trigger(CadenceTickEvent {
                entity,
                signal: timer.signal.clone(),
            });
            timer.consume();
        }
    }
}
