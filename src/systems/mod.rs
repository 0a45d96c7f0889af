//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`cadence`] – accumulate fixed-period timers and fire their tick events
//! - [`dialogue`] – lay out script lines into glyphs and reveal them over time
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – drain the platform input bridge into actions and events
//! - [`render`] – flatten world state into frame views for the renderer
//! - [`swirl`] – integrate spiral particles and keep the population topped up
//! - [`time`] – update simulation time and delta
//! - [`transfer`] – move cards between stacks on cadence ticks

pub mod cadence;
pub mod dialogue;
pub mod gamestate;
pub mod input;
pub mod render;
pub mod swirl;
pub mod time;
pub mod transfer;
