//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as position, card stacks,
//! dialogue layout, and swirl particle motion.
//!
//! Submodules overview:
//! - [`card`] – playing card data and the ordered stack that owns cards
//! - [`dialoguebox`] – dialogue box state, glyph layout, and reveal cursor
//! - [`fixedtimer`] – fixed-rate accumulator that fires cadence ticks
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor for drawables
//! - [`stageposition`] – stage-space position (pivot) for an entity
//! - [`swirl`] – swirl emitter parameters and per-particle polar state
//! - [`transfer`] – card transfer animation and the stack-to-stack director

pub mod card;
pub mod dialoguebox;
pub mod fixedtimer;
pub mod persistent;
pub mod rotation;
pub mod scale;
pub mod stageposition;
pub mod swirl;
pub mod transfer;
