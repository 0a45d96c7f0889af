//! Swirl particle components.
//!
//! A [`SwirlEmitter`] keeps a bounded population of [`SwirlParticle`]s alive
//! around a center point. Particles move in polar coordinates (angle spins,
//! radius grows) and fade out as they age; expired particles are removed the
//! same frame they expire, and the spawner tops the population back up to the
//! cap one particle per frame.
//!
//! # Related
//!
//! - [`crate::systems::swirl::swirl_update_system`] – ages, moves, retires
//! - [`crate::systems::swirl::swirl_spawn_system`] – tops up the population

use bevy_ecs::prelude::Component;

use crate::math::Vec2;

/// Hard population cap. The swirl never holds more particles than this.
pub const MAX_PARTICLES: usize = 10;

/// Spawns swirl particles around a center, up to [`MAX_PARTICLES`].
///
/// The ranges are `(min, max)` pairs sampled uniformly per spawn.
#[derive(Component, Clone, Debug)]
pub struct SwirlEmitter {
    /// Center of the swirl in stage coordinates.
    pub center: Vec2,
    /// Population cap.
    pub max_particles: usize,
    /// Angular velocity range, radians per second.
    pub angle_speed: (f32, f32),
    /// Outward radial velocity range, pixels per second.
    pub radius_speed: (f32, f32),
    /// Visual scale range.
    pub scale_range: (f32, f32),
    /// Lifetime range, seconds.
    pub life_range: (f32, f32),
}

impl SwirlEmitter {
    pub fn new(center: Vec2) -> Self {
        SwirlEmitter {
            center,
            max_particles: MAX_PARTICLES,
            angle_speed: (1.0, 1.5),
            radius_speed: (50.0, 100.0),
            scale_range: (0.4, 1.6),
            life_range: (1.0, 2.0),
        }
    }
}

/// One short-lived particle following outward spiral motion.
///
/// Position is derived each frame from the polar state; the fade factor is
/// derived from age. The particle expires when `age >= max_life`.
#[derive(Component, Clone, Copy, Debug)]
pub struct SwirlParticle {
    /// Current angle in radians.
    pub angle: f32,
    /// Current distance from the swirl center.
    pub radius: f32,
    /// Radians per second.
    pub angle_speed: f32,
    /// Pixels per second.
    pub radius_speed: f32,
    /// Seconds lived so far.
    pub age: f32,
    /// Seconds until retirement.
    pub max_life: f32,
}

impl SwirlParticle {
    /// Opacity factor in [0, 1]: 1 at birth, 0 at end of life.
    pub fn fade(&self) -> f32 {
        (1.0 - self.age / self.max_life).max(0.0)
    }

    pub fn expired(&self) -> bool {
        self.age >= self.max_life
    }

    /// Cartesian position for the current polar state.
    pub fn position(&self, center: Vec2) -> Vec2 {
        center + Vec2::from_angle(self.angle) * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn particle(age: f32, max_life: f32) -> SwirlParticle {
        SwirlParticle {
            angle: 0.0,
            radius: 0.0,
            angle_speed: 1.0,
            radius_speed: 50.0,
            age,
            max_life,
        }
    }

    #[test]
    fn test_fade_full_at_birth() {
        assert!(approx_eq(particle(0.0, 1.0).fade(), 1.0));
    }

    #[test]
    fn test_fade_half_at_half_life() {
        assert!(approx_eq(particle(0.5, 1.0).fade(), 0.5));
    }

    #[test]
    fn test_fade_clamps_to_zero_past_life() {
        assert!(approx_eq(particle(1.0, 1.0).fade(), 0.0));
        assert!(approx_eq(particle(2.5, 1.0).fade(), 0.0));
    }

    #[test]
    fn test_expired_at_max_life() {
        assert!(!particle(0.99, 1.0).expired());
        assert!(particle(1.0, 1.0).expired());
        assert!(particle(1.5, 1.0).expired());
    }

    #[test]
    fn test_position_from_polar_state() {
        let center = Vec2::new(400.0, 300.0);
        let mut p = particle(0.0, 1.0);
        p.radius = 10.0;

        // Angle 0 points along +X.
        let pos = p.position(center);
        assert!(approx_eq(pos.x, 410.0));
        assert!(approx_eq(pos.y, 300.0));

        p.angle = std::f32::consts::FRAC_PI_2;
        let pos = p.position(center);
        assert!(approx_eq(pos.x, 400.0));
        assert!(approx_eq(pos.y, 310.0));
    }

    #[test]
    fn test_emitter_defaults() {
        let e = SwirlEmitter::new(Vec2::new(400.0, 300.0));
        assert_eq!(e.max_particles, MAX_PARTICLES);
        assert!(approx_eq(e.angle_speed.0, 1.0));
        assert!(approx_eq(e.radius_speed.1, 100.0));
        assert!(approx_eq(e.life_range.0, 1.0));
        assert!(approx_eq(e.life_range.1, 2.0));
    }
}
