//! Card and card stack components.
//!
//! A [`CardStack`] owns an ordered list of card entity ids; the top of the
//! stack is the last element. Cards render at the stack origin plus a small
//! vertical offset per slot, so a full stack reads as one thick deck.
//!
//! Ownership is by id: a card entity is listed in exactly one stack, or it is
//! in flight with a [`CardTransfer`](super::transfer::CardTransfer) attached,
//! never both. The transfer systems move ids between these collections; the
//! renderer only looks positions up.

use bevy_ecs::prelude::{Component, Entity};

use crate::math::{Color, Vec2};

/// A single card. Lives in a stack or in flight, nowhere else.
#[derive(Component, Clone, Copy, Debug)]
pub struct Card {
    /// Display color, assigned at spawn.
    pub color: Color,
}

/// An ordered stack of cards anchored at a stage position.
#[derive(Component, Clone, Debug)]
pub struct CardStack {
    /// Card entities, bottom first; the top of the stack is the last element.
    pub cards: Vec<Entity>,
    /// Stage position of the bottom slot.
    pub origin: Vec2,
    /// Vertical offset added per slot index.
    pub slot_offset: f32,
}

impl CardStack {
    pub fn new(origin: Vec2, slot_offset: f32) -> Self {
        CardStack {
            cards: Vec::new(),
            origin,
            slot_offset,
        }
    }

    /// Stage position of the slot at `index` (0 = bottom).
    pub fn slot_position(&self, index: usize) -> Vec2 {
        Vec2 {
            x: self.origin.x,
            y: self.origin.y + index as f32 * self.slot_offset,
        }
    }

    /// Slot the next settled card would occupy.
    pub fn next_slot(&self) -> usize {
        self.cards.len()
    }

    pub fn push(&mut self, card: Entity) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Entity> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
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
    fn test_slot_position_stacks_downward() {
        let stack = CardStack::new(Vec2::new(100.0, 100.0), 0.2);
        let s0 = stack.slot_position(0);
        assert!(approx_eq(s0.x, 100.0));
        assert!(approx_eq(s0.y, 100.0));
        let s10 = stack.slot_position(10);
        assert!(approx_eq(s10.x, 100.0));
        assert!(approx_eq(s10.y, 102.0));
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut stack = CardStack::new(Vec2::ZERO, 0.2);
        stack.push(a);
        stack.push(b);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.next_slot(), 2);

        // Top of the stack is the last pushed card.
        assert_eq!(stack.pop(), Some(b));
        assert_eq!(stack.pop(), Some(a));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}
