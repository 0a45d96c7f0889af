//! Game state transition event and observer.
//!
//! A transition happens in two steps: a system records the wanted state in
//! [`NextGameState`], and a [`GameStateChangedEvent`] tells the observer in
//! this module to apply it. The observer flips [`GameState`], then runs the
//! exit hook of the old state and the enter hook of the new one out of
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! Splitting intent from application keeps scene setup and teardown in
//! one-shot systems, outside whatever system asked for the change.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Tells the observer to apply whatever transition [`NextGameState`] holds.
///
/// Carries no payload; the pending value is the single source of truth. With
/// [`Unchanged`] pending, triggering this event is a no-op.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// On a [`Pending`] request it copies the new value into [`GameState`],
/// clears the request, then runs the old state's exit hook followed by the
/// new state's enter hook. Missing resources log a diagnostic and leave
/// everything untouched.
///
/// The hooks are executed by looking up system IDs in [`SystemsStore`] under
/// well-known keys. Entering [`GameStates::Running`] runs the hook for the
/// demo recorded in [`WorldSignals`] under `"demo"` (e.g. `"enter_cards"`),
/// and leaving it runs `"teardown"`.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    signals: Option<Res<WorldSignals>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                let old_state = game_state.get().clone();
                info!(
                    "Transitioning from {:?} to {:?}",
                    game_state.get(),
                    new_state
                );
                game_state.set(new_state.clone());
                next_game_state.reset();
                debug!("Calling on_state_exit()");
                on_state_exit(&old_state, &mut commands, &systems_store);
                debug!("Calling on_state_enter()");
                let demo = signals
                    .as_ref()
                    .and_then(|s| s.get_string("demo"))
                    .cloned();
                on_state_enter(&new_state, demo.as_deref(), &mut commands, &systems_store);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Internal: run state-specific "enter" systems for the given state.
fn on_state_enter(
    state: &GameStates,
    demo: Option<&str>,
    commands: &mut Commands,
    systems_store: &SystemsStore,
) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Setup => {
            let setup_system_id = systems_store
                .get("setup")
                .expect("Setup system not found in SystemsStore");
            commands.run_system(setup_system_id);
        }
        GameStates::Running => {
            let hook = format!(
                "enter_{}",
                demo.expect("Demo name not recorded in WorldSignals before Running")
            );
            let enter_system_id = systems_store
                .get(&hook)
                .unwrap_or_else(|| panic!("{} system not found in SystemsStore", hook));
            commands.run_system(enter_system_id);
        }
        GameStates::Quitting => {
            let quit_game_system_id = systems_store
                .get("quit_game")
                .expect("QuitGame system not found in SystemsStore");
            commands.run_system(quit_game_system_id);
        }
    }
}

/// Internal: run state-specific "exit" systems for the given state.
fn on_state_exit(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::Running => {
            let teardown_system_id = systems_store
                .get("teardown")
                .expect("Teardown system not found in SystemsStore");
            commands.run_system(teardown_system_id);
        }
        other => debug!("Exited {:?} state", other),
    }
}
