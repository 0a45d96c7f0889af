//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, timing, the input
//! channel, the presentation adapter, and utilities. Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `gamestate` – authoritative and pending high-level game state
//! - `inputbridge` – channel carrying input intents into the world
//! - `renderer` – frame draw list and the presentation adapter holder
//! - `script` – parsed dialogue script with emoji and avatar tables
//! - `stageconfig` – stage dimensions and demo tunables from an INI file
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `worldsignals` – global key-addressed signals and flags
//! - `worldtime` – simulation time and delta
pub mod gamestate;
pub mod inputbridge;
pub mod renderer;
pub mod script;
pub mod stageconfig;
pub mod systemsstore;
pub mod worldsignals;
pub mod worldtime;
