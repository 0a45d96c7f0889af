//! Swirl particle systems.
//!
//! These systems run the swirl demo's outward-spiraling particle fountain:
//!
//! - [`swirl_update_system`] – ages particles, integrates their polar
//!   motion, applies rotation jitter, and retires the expired
//! - [`swirl_spawn_system`] – tops the population back up by at most one
//!   particle per frame
//!
//! # Behavior
//!
//! - A particle orbits the emitter center while its radius grows, so the
//!   path is an outward spiral
//! - Spawn parameters (angular speed, radial speed, scale, lifetime) are
//!   sampled per particle from the emitter's ranges
//! - Retirement and respawn are decoupled: a particle that dies frees its
//!   population slot the same frame, and the spawn system refills one slot
//!   per frame afterwards
//!
//! The demo runs a single emitter; with none present both systems are
//! inert.
//!
//! # Ordering
//!
//! [`swirl_spawn_system`] must run **after** [`swirl_update_system`] so the
//! population count sees this frame's retirements.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::trace;

use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::stageposition::StagePosition;
use crate::components::swirl::{SwirlEmitter, SwirlParticle};
use crate::resources::worldtime::WorldTime;

/// Sample a random f32 in the range [min, max].
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// Age, move, and retire swirl particles.
///
/// Position is recomputed from the particle's polar state around the
/// emitter center every frame; rotation takes a small random jitter scaled
/// by the frame delta. Particles past their lifetime are despawned.
pub fn swirl_update_system(
    time: Res<WorldTime>,
    emitters: Query<&SwirlEmitter>,
    mut particles: Query<(Entity, &mut SwirlParticle, &mut StagePosition, &mut Rotation)>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    let dt = time.delta; // delta is already scaled
    if dt <= 0.0 {
        return;
    }
    let Ok(emitter) = emitters.single() else {
        return;
    };

    for (entity, mut particle, mut pos, mut rotation) in particles.iter_mut() {
        particle.age += dt;
        if particle.expired() {
            commands.entity(entity).try_despawn();
            continue;
        }
        particle.angle += particle.angle_speed * dt;
        particle.radius += particle.radius_speed * dt;
        pos.pos = particle.position(emitter.center);
        rotation.degrees += ((rng.f32() - 0.5) * 20.0 * dt).to_degrees();
    }
}

/// Refill the particle population, one spawn per frame.
///
/// New particles start at the emitter center with zero radius, a uniformly
/// random phase angle, and per-particle parameters sampled from the
/// emitter's ranges.
pub fn swirl_spawn_system(
    emitters: Query<&SwirlEmitter>,
    particles: Query<(), With<SwirlParticle>>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    let Ok(emitter) = emitters.single() else {
        return;
    };
    let population = particles.iter().count();
    if population >= emitter.max_particles {
        return;
    }

    let particle = SwirlParticle {
        angle: rng.f32() * std::f32::consts::TAU,
        radius: 0.0,
        angle_speed: random_f32_range(&mut rng, emitter.angle_speed.0, emitter.angle_speed.1),
        radius_speed: random_f32_range(&mut rng, emitter.radius_speed.0, emitter.radius_speed.1),
        age: 0.0,
        max_life: random_f32_range(&mut rng, emitter.life_range.0, emitter.life_range.1),
    };
    let scale = random_f32_range(&mut rng, emitter.scale_range.0, emitter.scale_range.1);
    trace!(
        "Swirl spawn {}/{}: life {:.2}s",
        population + 1,
        emitter.max_particles,
        particle.max_life
    );
    commands.spawn((
        particle,
        StagePosition::at(emitter.center),
        Rotation::default(),
        Scale::uniform(scale),
    ));
}
