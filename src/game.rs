use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::{info, warn};

use crate::components::card::{Card, CardStack};
use crate::components::dialoguebox::DialogueBox;
use crate::components::fixedtimer::FixedTimer;
use crate::components::persistent::Persistent;
use crate::components::stageposition::StagePosition;
use crate::components::swirl::SwirlEmitter;
use crate::components::transfer::TransferDirector;
use crate::math::Color;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::script::DialogueScript;
use crate::resources::stageconfig::StageConfig;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::dialogue::stage_line;
use crate::systems::transfer::TRANSFER_SIGNAL;

/// Script file used when the command line does not name one.
pub const DEFAULT_SCRIPT_PATH: &str = "./assets/magicwords.json";

/// One-time world preparation, run on entering [`GameStates::Setup`].
///
/// Loads the optional INI config and hands control to the demo recorded in
/// [`WorldSignals`] by requesting the Running state.
pub fn setup(
    mut config: ResMut<StageConfig>,
    mut next_state: ResMut<NextGameState>,
    mut worldsignals: ResMut<WorldSignals>,
) {
    // The config file is optional; defaults cover a missing one.
    if let Err(e) = config.load_from_file() {
        info!("Using default stage config ({})", e);
    }

    worldsignals.set_integer("transfers_completed", 0);

    next_state.set(GameStates::Running);
    info!("Setup done, next state set to Running");
}

/// Build the card demo scene: two stacks, a full deck on the left, and the
/// director that carries the transfer cadence.
pub fn enter_cards(mut commands: Commands, config: Res<StageConfig>, mut rng: Local<Rng>) {
    let mut left_stack = CardStack::new(config.left_stack, config.slot_offset);
    for i in 0..config.card_count {
        let slot = left_stack.slot_position(i as usize);
        let color = Color::rgb(rng.u8(..), rng.u8(..), rng.u8(..));
        let card = commands.spawn((Card { color }, StagePosition::at(slot))).id();
        left_stack.push(card);
    }
    let left = commands.spawn(left_stack).id();
    let right = commands
        .spawn(CardStack::new(config.right_stack, config.slot_offset))
        .id();

    commands.spawn((
        TransferDirector::new(left, right).with_duration(config.transfer_duration),
        FixedTimer::new(config.transfer_period, TRANSFER_SIGNAL),
    ));

    info!(
        "Card demo: {} cards ({}x{}), one transfer every {}s taking {}s",
        config.card_count,
        config.card_width,
        config.card_height,
        config.transfer_period,
        config.transfer_duration
    );
}

/// Build the dialogue demo scene: load the script and stage its first line.
///
/// A script that cannot be read or parsed produces a terminal error box; an
/// empty script produces a box that is already complete.
pub fn enter_dialogue(
    mut commands: Commands,
    config: Res<StageConfig>,
    worldsignals: Res<WorldSignals>,
) {
    let path = worldsignals
        .get_string("script_path")
        .cloned()
        .unwrap_or_else(|| String::from(DEFAULT_SCRIPT_PATH));
    let pos = config.dialogue_box_pos;
    let size = config.dialogue_box_size;

    match DialogueScript::load_from_file(&path) {
        Ok(script) => {
            let mut dialogue = DialogueBox::new(pos, size, config.reveal_interval, script.len());
            if script.is_empty() {
                warn!("Dialogue script {} has no lines", path);
            } else {
                stage_line(&mut dialogue, &script, 0);
            }
            info!("Dialogue demo: {} lines from {}", script.len(), path);
            commands.spawn(dialogue);
            commands.insert_resource(script);
        }
        Err(e) => {
            warn!("Failed to load dialogue script {}: {}", path, e);
            commands.spawn(DialogueBox::error(
                pos,
                size,
                format!("Failed to load dialogue: {}", e),
            ));
        }
    }
}

/// Build the swirl demo scene: a single emitter at the stage center.
pub fn enter_swirl(mut commands: Commands, config: Res<StageConfig>) {
    let center = config.stage_center();
    commands.spawn(SwirlEmitter::new(center));
    info!("Swirl demo: emitter at ({}, {})", center.x, center.y);
}

/// Despawn everything a demo spawned. Observers, registered systems, and
/// other infrastructure entities are shielded by [`Persistent`].
pub fn clean_scene_entities(
    mut commands: Commands,
    query: Query<Entity, Without<Persistent>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Final hook: raise the flag the drive loop polls to leave its frame loop.
pub fn quit_game(mut worldsignals: ResMut<WorldSignals>, time: Res<WorldTime>) {
    worldsignals.set_flag("quit_requested");
    info!(
        "Quit requested at t={:.2}s after {} frames",
        time.elapsed, time.frame_count
    );
}
