//! Triptych main entry point.
//!
//! Three frame-driven interactive demos sharing one ECS core:
//! - **cards** – a deck of 144 cards marching between two stacks
//! - **dialogue** – a scripted conversation typeset and revealed glyph by glyph
//! - **swirl** – spiral particles orbiting the stage center
//!
//! Built on **bevy_ecs** for entity-component-system architecture. There is no
//! windowing backend; each frame is flattened into a draw list and handed to
//! the active render adapter (a throttled log digest by default).
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (cards, stacks, transfers, dialogue box, particles)
//! - [`events`] – Event types (input actions, cadence ticks, state transitions)
//! - [`game`] – High-level scene lifecycle (setup, per-demo entry, teardown, quit)
//! - [`resources`] – ECS resources (world signals, stage config, script, input bridge)
//! - [`systems`] – ECS systems (cadence, transfer, dialogue, swirl, rendering)
//!
//! # Main Loop
//!
//! 1. Parse the command line, initialize the ECS world and resources
//! 2. Register lifecycle hooks and observers, then enter the Setup state
//! 3. Run the drive loop at a fixed simulated frame rate:
//!    - Advance the clock, pump queued input, fire cadence ticks
//!    - Demo systems mutate model state (transfers, reveal, swirl)
//!    - The render system hands the frame view to the active adapter
//! 4. Leave the loop once the quit signal is raised and log a run summary
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --demo dialogue --advance-every 120
//! ```

mod components;
mod events;
mod game;
mod math;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::input::InputAction;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::inputbridge::setup_input_bridge;
use crate::resources::renderer::ActiveRenderer;
use crate::resources::stageconfig::StageConfig;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::cadence::update_fixed_timers;
use crate::systems::dialogue::{dialogue_reveal_system, observe_dialogue_advance};
use crate::systems::gamestate::{check_pending_state, state_is_running};
use crate::systems::input::pump_input_bridge;
use crate::systems::render::render_frame;
use crate::systems::swirl::{swirl_spawn_system, swirl_update_system};
use crate::systems::time::update_world_time;
use crate::systems::transfer::{card_transfer_system, observe_transfer_tick};
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Triptych demo stage
#[derive(Parser)]
#[command(version, about = "Three frame-driven visual demos on an ECS core")]
struct Cli {
    /// Demo to run: cards, dialogue, or swirl.
    #[arg(long, default_value = "cards", value_name = "DEMO")]
    demo: String,

    /// Path to the dialogue script JSON (dialogue demo only).
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Path to the INI config file (defaults to ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stop after this many simulated frames. 0 runs until a quit action.
    #[arg(long, default_value_t = 600, value_name = "N")]
    frames: u64,

    /// Simulated frame rate; overrides the configured target_fps.
    #[arg(long, value_name = "FPS")]
    fps: Option<u32>,

    /// Emit an Advance action every N frames. 0 never advances.
    #[arg(long, default_value_t = 0, value_name = "N")]
    advance_every: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let demo = cli.demo.to_lowercase();
    if !matches!(demo.as_str(), "cards" | "dialogue" | "swirl") {
        eprintln!("Unknown demo {demo:?}; expected cards, dialogue or swirl");
        std::process::exit(1);
    }

    log::info!("Hello! This is the triptych demo stage, running {demo:?}");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));

    let mut signals = WorldSignals::default();
    signals.set_string("demo", demo.as_str());
    if let Some(script) = &cli.script {
        signals.set_string("script_path", script.display().to_string());
    }
    world.insert_resource(signals);

    // StageConfig starts at compiled defaults; the setup hook loads the INI.
    let config = match &cli.config {
        Some(path) => StageConfig::with_path(path.clone()),
        None => StageConfig::new(),
    };
    world.insert_resource(config);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    let input_sender = setup_input_bridge(&mut world);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    // Game state systems store
    // NOTE: In bevy_ecs 0.18, registered systems are stored as entities.
    // We must mark them as Persistent so they survive scene teardown.
    let mut systems_store = SystemsStore::new();

    let setup_system_id = world.register_system(game::setup);
    world
        .entity_mut(setup_system_id.entity())
        .insert(Persistent);
    systems_store.insert("setup", setup_system_id);

    let enter_cards_system_id = world.register_system(game::enter_cards);
    world
        .entity_mut(enter_cards_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_cards", enter_cards_system_id);

    let enter_dialogue_system_id = world.register_system(game::enter_dialogue);
    world
        .entity_mut(enter_dialogue_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_dialogue", enter_dialogue_system_id);

    let enter_swirl_system_id = world.register_system(game::enter_swirl);
    world
        .entity_mut(enter_swirl_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_swirl", enter_swirl_system_id);

    let teardown_system_id = world.register_system(game::clean_scene_entities);
    world
        .entity_mut(teardown_system_id.entity())
        .insert(Persistent);
    systems_store.insert("teardown", teardown_system_id);

    let quit_game_system_id = world.register_system(game::quit_game);
    world
        .entity_mut(quit_game_system_id.entity())
        .insert(Persistent);
    systems_store.insert("quit_game", quit_game_system_id);

    world.insert_resource(systems_store);

    world.flush();

    // Set next GameState to Setup
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {}); // Call inmediatly to enter Setup state
    // The observer only queues the setup hook as a command; flush so it runs now.
    world.flush();

    // The setup hook has loaded the config by now; derive frame pacing from it.
    let fps = cli
        .fps
        .unwrap_or_else(|| world.resource::<StageConfig>().target_fps)
        .max(1);
    let dt = 1.0 / fps as f32;
    // One digest per simulated second.
    world.insert_non_send_resource(ActiveRenderer::log(fps as u64));

    world.spawn((Observer::new(observe_transfer_tick), Persistent));
    world.spawn((Observer::new(observe_dialogue_advance), Persistent));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(pump_input_bridge);
    update.add_systems(check_pending_state.after(pump_input_bridge));
    update.add_systems(
        update_fixed_timers
            .run_if(state_is_running)
            .after(check_pending_state),
    );
    // Cadence ticks spawn transfers; interpolate them in the same frame.
    update.add_systems(
        card_transfer_system
            .run_if(state_is_running)
            .after(update_fixed_timers),
    );
    update.add_systems(
        dialogue_reveal_system
            .run_if(state_is_running)
            .after(check_pending_state),
    );
    update.add_systems(
        swirl_update_system
            .run_if(state_is_running)
            .after(check_pending_state),
    );
    // Spawning after retirement keeps the population count honest.
    update.add_systems(
        swirl_spawn_system
            .run_if(state_is_running)
            .after(swirl_update_system),
    );
    update.add_systems(
        render_frame
            .after(card_transfer_system)
            .after(dialogue_reveal_system)
            .after(swirl_spawn_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let mut frame: u64 = 0;
    while !world.resource::<WorldSignals>().has_flag("quit_requested") {
        update_world_time(&mut world, dt);

        if cli.advance_every > 0 && frame > 0 && frame % cli.advance_every == 0 {
            input_sender.send(InputAction::Advance);
        }

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        frame += 1;
        if cli.frames != 0 && frame == cli.frames {
            // Frame budget exhausted: request Quitting like any other quit path.
            let mut next_state = world.resource_mut::<NextGameState>();
            next_state.set(GameStates::Quitting);
        }
    }

    let transfers = world
        .resource::<WorldSignals>()
        .get_integer("transfers_completed")
        .unwrap_or(0);
    let elapsed = world.resource::<WorldTime>().elapsed;
    log::info!(
        "Ran {} frames ({:.2}s simulated), {} transfers completed",
        frame,
        elapsed,
        transfers
    );
}
