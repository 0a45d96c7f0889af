//! Input pump system.
//!
//! [`pump_input_bridge`] drains the
//! [`InputBridge`](crate::resources::inputbridge::InputBridge) channel once
//! per frame, before anything else runs. Quit intents request the
//! state transition directly; every other intent is re-emitted as an
//! [`InputEvent`](crate::events::input::InputEvent) for observers.
//!
//! Intents sent while a frame is in progress are picked up at the start of
//! the next frame, so input lands at frame boundaries only.

use crate::events::input::{InputAction, InputEvent};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::inputbridge::InputBridge;
use bevy_ecs::prelude::*;
use log::debug;

/// Drain queued input intents and dispatch them into the world.
pub fn pump_input_bridge(
    bridge: Res<InputBridge>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    for action in bridge.drain() {
        debug!("Input intent: {:?}", action);
        match action {
            InputAction::Quit => next_state.set(GameStates::Quitting),
            other => commands.trigger(InputEvent { action: other }),
        }
    }
}
