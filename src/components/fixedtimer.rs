//! Fixed-rate cadence timer component.
//!
//! A [`FixedTimer`] fires a [`CadenceTickEvent`](crate::events::cadence::CadenceTickEvent)
//! every `period` seconds of accumulated simulation time, independent of the
//! frame rate. This is the fixed-rate half of the dual-timer model: systems
//! that interpolate read the frame delta from
//! [`WorldTime`](crate::resources::worldtime::WorldTime) directly, while
//! decisions on an exact cadence (one card transfer per second) ride on a
//! timer component.
//!
//! The cadence system subtracts `period` on every firing instead of zeroing
//! the accumulator, so the long-run rate carries no drift, and a frame longer
//! than one period fires once per missed period (catch-up).
//!
//! # Related
//!
//! - [`crate::systems::cadence::update_fixed_timers`] – accumulates and fires
//! - [`crate::events::cadence::CadenceTickEvent`] – the event delivered

use bevy_ecs::prelude::Component;

/// Fires an event every `period` seconds of accumulated time.
#[derive(Component, Clone, Debug)]
pub struct FixedTimer {
    /// Seconds between firings.
    pub period: f32,
    /// Time accumulated towards the next firing.
    pub accumulated: f32,
    /// Signal name carried by the emitted event.
    pub signal: String,
}

impl FixedTimer {
    pub fn new(period: f32, signal: impl Into<String>) -> Self {
        FixedTimer {
            period,
            accumulated: 0.0,
            signal: signal.into(),
        }
    }

    /// Consume one period from the accumulator after a firing.
    pub fn consume(&mut self) {
        self.accumulated -= self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_starts_empty() {
        let t = FixedTimer::new(1.0, "transfer");
        assert!(approx_eq(t.period, 1.0));
        assert!(approx_eq(t.accumulated, 0.0));
        assert_eq!(t.signal, "transfer");
    }

    #[test]
    fn test_consume_subtracts_period() {
        let mut t = FixedTimer::new(0.5, "tick");
        t.accumulated = 1.2;
        t.consume();
        assert!(approx_eq(t.accumulated, 0.7));
        t.consume();
        assert!(approx_eq(t.accumulated, 0.2));
    }

    #[test]
    fn test_consume_keeps_remainder() {
        // Subtracting instead of zeroing keeps sub-period time for the next
        // frame, so cadence stays exact under uneven deltas.
        let mut t = FixedTimer::new(1.0, "tick");
        t.accumulated = 1.25;
        t.consume();
        assert!(approx_eq(t.accumulated, 0.25));
    }
}
