//! Event types and observers used by the demos.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`cadence`] – fixed-rate ticks emitted by timer accumulators
//! - [`gamestate`] – state transition notifications for the high-level app flow
//! - [`input`] – input intents re-emitted from the platform channel
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod cadence;
pub mod gamestate;
pub mod input;
