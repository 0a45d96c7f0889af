use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

pub fn check_pending_state(mut commands: Commands, next_state: ResMut<NextGameState>) {
    // A pending request is applied by the gamestate observer.
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_running(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Running)
}
