//! Card transfer components.
//!
//! This module provides the in-flight state of the card-transfer demo:
//! - [`TransferDirector`] – owns the two stacks, the current direction, and
//!   the parameters new transfers are created with
//! - [`CardTransfer`] – one card's animated move between two slots
//! - [`Easing`] – the interpolation curves transfers support
//!
//! The director reacts to cadence ticks (see
//! [`crate::systems::transfer::observe_transfer_tick`]); transfers are
//! advanced every frame by
//! [`crate::systems::transfer::card_transfer_system`].

use bevy_ecs::prelude::{Component, Entity};

use crate::math::Vec2;

/// Easing functions for transfer interpolation.
///
/// These transform a linear `t` value (0.0 to 1.0) into different
/// acceleration/deceleration curves.
#[derive(Copy, Clone, Debug)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
}

/// Which stack feeds the next transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransferDirection {
    /// Pop from the left stack, land on the right.
    ToRight,
    /// Pop from the right stack, land on the left.
    ToLeft,
}

impl TransferDirection {
    pub fn flipped(self) -> Self {
        match self {
            TransferDirection::ToRight => TransferDirection::ToLeft,
            TransferDirection::ToLeft => TransferDirection::ToRight,
        }
    }
}

/// Drives the oscillating card traffic between two stacks.
///
/// One director exists per card scene. On every cadence tick it pops the top
/// card of the current source stack and puts it in flight; when the source is
/// empty it flips direction instead and moves nothing that tick.
#[derive(Component, Clone, Debug)]
pub struct TransferDirector {
    /// Current traffic direction.
    pub direction: TransferDirection,
    /// Entity holding the left [`CardStack`](super::card::CardStack).
    pub left: Entity,
    /// Entity holding the right [`CardStack`](super::card::CardStack).
    pub right: Entity,
    /// Seconds each new transfer animates for.
    pub duration: f32,
    /// Curve each new transfer animates with.
    pub easing: Easing,
}

impl TransferDirector {
    pub fn new(left: Entity, right: Entity) -> Self {
        TransferDirector {
            direction: TransferDirection::ToRight,
            left,
            right,
            duration: 2.0,
            easing: Easing::QuadIn,
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Source and destination stack entities for the current direction.
    pub fn route(&self) -> (Entity, Entity) {
        match self.direction {
            TransferDirection::ToRight => (self.left, self.right),
            TransferDirection::ToLeft => (self.right, self.left),
        }
    }
}

/// One card's animated move between two stack slots.
///
/// Attached to the card entity while it is in flight; removed exactly when
/// the animation completes and the card settles into the destination stack.
/// A card carries at most one `CardTransfer` at any time.
#[derive(Component, Clone, Debug)]
pub struct CardTransfer {
    /// Stage position the card left from.
    pub from: Vec2,
    /// Stage position of the destination slot.
    pub to: Vec2,
    /// Total animation time in seconds.
    pub duration: f32,
    /// Seconds elapsed so far.
    pub elapsed: f32,
    /// Interpolation curve.
    pub easing: Easing,
    /// Stack entity the card is appended to on completion.
    pub dest: Entity,
}

impl CardTransfer {
    pub fn new(from: Vec2, to: Vec2, duration: f32, dest: Entity) -> Self {
        CardTransfer {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::QuadIn,
            dest,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_direction_flipped_toggles() {
        assert_eq!(
            TransferDirection::ToRight.flipped(),
            TransferDirection::ToLeft
        );
        assert_eq!(
            TransferDirection::ToLeft.flipped(),
            TransferDirection::ToRight
        );
    }

    #[test]
    fn test_director_defaults() {
        let mut world = World::new();
        let left = world.spawn_empty().id();
        let right = world.spawn_empty().id();

        let director = TransferDirector::new(left, right);
        assert_eq!(director.direction, TransferDirection::ToRight);
        assert!(approx_eq(director.duration, 2.0));
        assert!(matches!(director.easing, Easing::QuadIn));
    }

    #[test]
    fn test_director_route_follows_direction() {
        let mut world = World::new();
        let left = world.spawn_empty().id();
        let right = world.spawn_empty().id();

        let mut director = TransferDirector::new(left, right);
        assert_eq!(director.route(), (left, right));

        director.direction = director.direction.flipped();
        assert_eq!(director.route(), (right, left));
    }

    #[test]
    fn test_transfer_new() {
        let mut world = World::new();
        let dest = world.spawn_empty().id();

        let tr = CardTransfer::new(Vec2::new(100.0, 100.0), Vec2::new(500.0, 100.0), 2.0, dest);
        assert!(approx_eq(tr.elapsed, 0.0));
        assert!(approx_eq(tr.duration, 2.0));
        assert!(matches!(tr.easing, Easing::QuadIn));
        assert_eq!(tr.dest, dest);
    }

    #[test]
    fn test_transfer_with_easing() {
        let mut world = World::new();
        let dest = world.spawn_empty().id();

        let tr = CardTransfer::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0, dest)
            .with_easing(Easing::Linear);
        assert!(matches!(tr.easing, Easing::Linear));
    }
}
