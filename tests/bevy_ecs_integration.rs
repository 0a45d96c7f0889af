//! Bevy ECS Integration Tests
//!
//! These tests verify that bevy_ecs behaves as the demo runtime expects.
//! They serve as a compatibility layer to detect breaking changes when
//! upgrading bevy_ecs versions.
//!
//! # Test Categories
//!
//! 1. **World & Resources** - Resource insertion, retrieval, optional params
//! 2. **Entity & Component** - Spawning, despawning, component operations
//! 3. **Query Patterns** - Filters, single-result queries, ad-hoc state
//! 4. **Events & Observers** - Triggering, observer registration, flushing
//! 5. **System Registration** - SystemId, system entities, run_system
//! 6. **Schedules** - Ordering, sync points, run conditions
//! 7. **Local/NonSend** - System-local state, main-thread resources
//!
//! # Usage
//!
//! Run these tests after upgrading bevy_ecs to detect API changes:
//!
//! ```sh
//! cargo test --test bevy_ecs_integration
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use std::sync::{Arc, Mutex};

// =============================================================================
// Test Components, Resources, and Events
// =============================================================================

#[derive(Component, Debug, Clone, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

/// Transient animation component, attached and removed at runtime.
#[derive(Component, Debug, Clone, PartialEq)]
struct Flight {
    progress: f32,
}

/// Marker sparing an entity from scene teardown.
#[derive(Component, Debug, Clone)]
struct Keep;

/// Marker component for filtering.
#[derive(Component, Debug, Clone)]
struct Marker;

#[derive(Resource, Debug, Default)]
struct Tally(i32);

#[derive(Resource, Debug)]
struct Toggle(bool);

#[derive(Event, Debug, Clone)]
struct PulseEvent {
    value: i32,
}

// =============================================================================
// CATEGORY 1: World & Resource Tests
// =============================================================================

#[test]
fn world_insert_and_read_resource() {
    let mut world = World::new();
    world.insert_resource(Tally(7));

    assert_eq!(world.resource::<Tally>().0, 7);
}

#[test]
fn world_get_resource_mut() {
    let mut world = World::new();
    world.insert_resource(Tally(0));

    {
        let mut tally = world.resource_mut::<Tally>();
        tally.0 = 42;
    }

    assert_eq!(world.resource::<Tally>().0, 42);
}

#[test]
fn optional_resource_param_absent() {
    // Systems taking Option<ResMut<T>> must run when T is missing.
    let mut world = World::new();
    world.insert_resource(Tally(0));

    fn tolerant_system(toggle: Option<Res<Toggle>>, mut tally: ResMut<Tally>) {
        tally.0 = if toggle.is_some() { 1 } else { -1 };
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(tolerant_system);
    schedule.run(&mut world);

    assert_eq!(world.resource::<Tally>().0, -1);

    world.insert_resource(Toggle(true));
    schedule.run(&mut world);
    assert_eq!(world.resource::<Tally>().0, 1);
}

// =============================================================================
// CATEGORY 2: Entity & Component Tests
// =============================================================================

#[test]
fn entity_spawn_with_components() {
    let mut world = World::new();

    let entity = world
        .spawn((Point { x: 1.0, y: 2.0 }, Flight { progress: 0.0 }))
        .id();

    let pos = world.get::<Point>(entity).unwrap();
    assert!((pos.x - 1.0).abs() < f32::EPSILON);
    assert!(world.get::<Flight>(entity).is_some());
}

#[test]
fn entity_despawn() {
    let mut world = World::new();

    let entity = world.spawn((Point { x: 0.0, y: 0.0 },)).id();
    assert!(world.get_entity(entity).is_ok());

    world.despawn(entity);
    assert!(world.get_entity(entity).is_err());
}

#[test]
fn entity_remove_component() {
    // Settling a card removes its Flight-like component but keeps the rest.
    let mut world = World::new();

    let entity = world
        .spawn((Point { x: 0.0, y: 0.0 }, Flight { progress: 1.0 }))
        .id();

    world.entity_mut(entity).remove::<Flight>();

    assert!(world.get::<Flight>(entity).is_none());
    assert!(world.get::<Point>(entity).is_some());
}

#[test]
fn commands_try_despawn_tolerates_missing_entity() {
    let mut world = World::new();
    let entity = world.spawn((Point { x: 0.0, y: 0.0 },)).id();
    world.despawn(entity);

    // Queuing a try_despawn for an already-gone entity must not panic when
    // the commands are applied.
    let mut state = SystemState::<Commands>::new(&mut world);
    let mut commands = state.get_mut(&mut world);
    commands.entity(entity).try_despawn();
    state.apply(&mut world);

    assert!(world.get_entity(entity).is_err());
}

// =============================================================================
// CATEGORY 3: Query Pattern Tests
// =============================================================================

#[test]
fn query_with_filter() {
    let mut world = World::new();

    world.spawn((Point { x: 1.0, y: 1.0 }, Marker));
    world.spawn((Point { x: 2.0, y: 2.0 },));

    let mut state = SystemState::<Query<&Point, With<Marker>>>::new(&mut world);
    let query = state.get(&world);

    assert_eq!(query.iter().count(), 1);
}

#[test]
fn query_without_filter_matches_empty_entities() {
    // The teardown sweep runs Query<Entity, Without<Keep>> and must see
    // every unmarked entity, component-less ones included.
    let mut world = World::new();

    world.spawn((Point { x: 1.0, y: 1.0 }, Keep));
    world.spawn((Point { x: 2.0, y: 2.0 },));
    world.spawn_empty();

    let mut state = SystemState::<Query<Entity, Without<Keep>>>::new(&mut world);
    let query = state.get(&world);

    assert_eq!(query.iter().count(), 2);
}

#[test]
fn query_single_result() {
    let mut world = World::new();

    let mut state = SystemState::<Query<&Point>>::new(&mut world);
    assert!(state.get(&world).single().is_err()); // Empty world

    let entity = world.spawn((Point { x: 4.0, y: 5.0 },)).id();
    let mut state = SystemState::<Query<(Entity, &Point)>>::new(&mut world);
    let query = state.get(&world);
    let (queried, pos) = query.single().unwrap();
    assert_eq!(queried, entity);
    assert!((pos.y - 5.0).abs() < f32::EPSILON);

    world.spawn((Point { x: 6.0, y: 7.0 },));
    assert!(state.get(&world).single().is_err()); // Two candidates
}

#[test]
fn query_get_mut_by_entity() {
    let mut world = World::new();

    let entity = world.spawn((Flight { progress: 0.0 },)).id();

    let mut state = SystemState::<Query<&mut Flight>>::new(&mut world);
    let mut query = state.get_mut(&mut world);
    if let Ok(mut flight) = query.get_mut(entity) {
        flight.progress = 0.5;
    }

    assert!((world.get::<Flight>(entity).unwrap().progress - 0.5).abs() < f32::EPSILON);
}

// =============================================================================
// CATEGORY 4: Events & Observers Tests
// =============================================================================

#[test]
fn observer_receives_triggered_event() {
    let mut world = World::new();

    let received = Arc::new(Mutex::new(0));
    let received_clone = received.clone();

    world.add_observer(move |trigger: On<PulseEvent>| {
        *received_clone.lock().unwrap() = trigger.event().value;
    });
    world.flush();

    world.trigger(PulseEvent { value: 123 });

    assert_eq!(*received.lock().unwrap(), 123);
}

#[test]
fn observer_spawned_as_entity() {
    // Pattern from the runtime: world.spawn((Observer::new(...), Keep))
    let mut world = World::new();

    let received = Arc::new(Mutex::new(false));
    let received_clone = received.clone();

    let observer = Observer::new(move |_trigger: On<PulseEvent>| {
        *received_clone.lock().unwrap() = true;
    });
    world.spawn((observer, Keep));
    world.flush();

    world.trigger(PulseEvent { value: 1 });

    assert!(*received.lock().unwrap());
}

#[test]
fn world_trigger_defers_observer_commands_until_flush() {
    // The startup path depends on this: world.trigger runs the observer
    // synchronously, but commands the observer queues stay queued until the
    // next flush. Anyone triggering outside a schedule must flush before
    // reading the commands' effects.
    let mut world = World::new();

    world.add_observer(|_trigger: On<PulseEvent>, mut commands: Commands| {
        commands.spawn((Marker,));
    });
    world.flush();

    world.trigger(PulseEvent { value: 0 });

    let mut state = SystemState::<Query<(), With<Marker>>>::new(&mut world);
    assert_eq!(state.get(&world).iter().count(), 0); // Still queued

    world.flush();
    assert_eq!(state.get(&world).iter().count(), 1);
}

#[test]
fn commands_trigger_applies_at_flush() {
    let mut world = World::new();

    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();

    world.add_observer(move |_trigger: On<PulseEvent>| {
        *count_clone.lock().unwrap() += 1;
    });
    world.flush();

    let mut state = SystemState::<Commands>::new(&mut world);
    let mut commands = state.get_mut(&mut world);
    commands.trigger(PulseEvent { value: 1 });
    assert_eq!(*count.lock().unwrap(), 0); // Still queued

    state.apply(&mut world);
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn observer_sees_entity_in_event() {
    let mut world = World::new();

    let seen = Arc::new(Mutex::new(None));
    let seen_clone = seen.clone();

    #[derive(Event, Debug, Clone)]
    struct TaggedEvent {
        entity: Entity,
    }

    world.add_observer(move |trigger: On<TaggedEvent>| {
        *seen_clone.lock().unwrap() = Some(trigger.event().entity);
    });
    world.flush();

    let entity = world.spawn_empty().id();
    world.trigger(TaggedEvent { entity });

    assert_eq!(*seen.lock().unwrap(), Some(entity));
}

// =============================================================================
// CATEGORY 5: System Registration Tests
// =============================================================================

fn bump_tally(mut tally: ResMut<Tally>) {
    tally.0 += 1;
}

#[test]
fn system_register_and_run() {
    let mut world = World::new();
    world.insert_resource(Tally(0));

    let system_id = world.register_system(bump_tally);
    world.run_system(system_id).unwrap();
    world.run_system(system_id).unwrap();

    assert_eq!(world.resource::<Tally>().0, 2);
}

#[test]
fn registered_system_is_an_entity() {
    // The runtime tags system entities with Keep so the teardown sweep
    // spares them. The tag must stick and the system must stay runnable.
    let mut world = World::new();
    world.insert_resource(Tally(0));

    let system_id = world.register_system(bump_tally);
    world.entity_mut(system_id.entity()).insert(Keep);

    let mut state = SystemState::<Query<Entity, Without<Keep>>>::new(&mut world);
    let doomed: Vec<Entity> = state.get(&world).iter().collect();
    for entity in doomed {
        world.despawn(entity);
    }

    world.run_system(system_id).unwrap();
    assert_eq!(world.resource::<Tally>().0, 1);
}

#[test]
fn commands_run_system() {
    // State hooks run through Commands::run_system from inside an observer.
    let mut world = World::new();
    world.insert_resource(Tally(0));

    let system_id = world.register_system(bump_tally);

    let mut state = SystemState::<Commands>::new(&mut world);
    let mut commands = state.get_mut(&mut world);
    commands.run_system(system_id);
    state.apply(&mut world);

    assert_eq!(world.resource::<Tally>().0, 1);
}

#[test]
fn run_system_applies_deferred_commands() {
    // Scene builders spawn through Commands; the spawns must be visible
    // as soon as run_system returns.
    let mut world = World::new();

    fn spawn_markers(mut commands: Commands) {
        commands.spawn((Marker,));
        commands.spawn((Marker,));
    }

    let system_id = world.register_system(spawn_markers);
    world.run_system(system_id).unwrap();

    let mut state = SystemState::<Query<(), With<Marker>>>::new(&mut world);
    assert_eq!(state.get(&world).iter().count(), 2);
}

// =============================================================================
// CATEGORY 6: Schedule Tests
// =============================================================================

#[test]
fn schedule_after_ordering() {
    let mut world = World::new();
    world.insert_resource(Tally(0));

    fn set_to_ten(mut tally: ResMut<Tally>) {
        tally.0 = 10;
    }

    fn add_five(mut tally: ResMut<Tally>) {
        tally.0 += 5;
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(set_to_ten);
    schedule.add_systems(add_five.after(set_to_ten));

    schedule.run(&mut world);

    assert_eq!(world.resource::<Tally>().0, 15);
}

#[test]
fn schedule_after_sees_deferred_commands() {
    // The frame schedule orders spawning systems before consumers with
    // .after and relies on the automatic sync point in between.
    let mut world = World::new();
    world.insert_resource(Tally(0));

    fn spawner(mut commands: Commands) {
        commands.spawn((Marker,));
    }

    fn consumer(query: Query<(), With<Marker>>, mut tally: ResMut<Tally>) {
        tally.0 = query.iter().count() as i32;
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(spawner);
    schedule.add_systems(consumer.after(spawner));

    schedule.run(&mut world);

    assert_eq!(world.resource::<Tally>().0, 1);
}

#[test]
fn schedule_run_if_condition() {
    let mut world = World::new();
    world.insert_resource(Tally(0));
    world.insert_resource(Toggle(true));

    fn is_on(toggle: Res<Toggle>) -> bool {
        toggle.0
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(bump_tally.run_if(is_on));

    schedule.run(&mut world);
    assert_eq!(world.resource::<Tally>().0, 1);

    world.resource_mut::<Toggle>().0 = false;
    schedule.run(&mut world);
    assert_eq!(world.resource::<Tally>().0, 1); // Condition gated the run
}

// =============================================================================
// CATEGORY 7: Local/NonSend Resource Tests
// =============================================================================

#[test]
fn local_state_persists() {
    // Random number generators live in Local params and must keep their
    // state between frames.
    let mut world = World::new();
    world.insert_resource(Tally(0));

    fn system_with_local(mut local: Local<i32>, mut tally: ResMut<Tally>) {
        *local += 1;
        tally.0 = *local;
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(system_with_local);

    schedule.run(&mut world);
    schedule.run(&mut world);
    schedule.run(&mut world);

    assert_eq!(world.resource::<Tally>().0, 3);
}

/// NonSend resource holder (like the frame renderer).
struct FrameSink {
    frames: u64,
    _not_send: std::marker::PhantomData<*const ()>,
}

impl FrameSink {
    fn new() -> Self {
        FrameSink {
            frames: 0,
            _not_send: std::marker::PhantomData,
        }
    }
}

#[test]
fn non_send_resource_in_system() {
    let mut world = World::new();
    world.insert_non_send_resource(FrameSink::new());

    fn record_frame(mut sink: NonSendMut<FrameSink>) {
        sink.frames += 1;
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(record_frame);

    schedule.run(&mut world);
    schedule.run(&mut world);

    assert_eq!(world.non_send_resource::<FrameSink>().frames, 2);
}
