//! Card transfer systems.
//!
//! These systems move cards between the two stacks of the card demo:
//! - [`observe_transfer_tick`] – observer that starts one transfer per
//!   cadence tick
//! - [`card_transfer_system`] – animates
//!   [`StagePosition`](crate::components::stageposition::StagePosition) along
//!   each active [`CardTransfer`](crate::components::transfer::CardTransfer)
//!   and settles the card on arrival
//!
//! # System Flow
//!
//! Each cadence tick:
//!
//! 1. `observe_transfer_tick` reads the director's route and pops the top
//!    card of the source stack
//! 2. The flight starts from the card's current position and targets the
//!    destination's next free slot, counting cards already in the air
//! 3. If the source is empty the director flips direction instead; no card
//!    moves that tick
//!
//! Each frame, `card_transfer_system` advances every flight by the scaled
//! delta, eases progress, and on completion snaps the card to its slot,
//! appends it to the destination stack, and removes the flight component.

use crate::components::card::{Card, CardStack};
use crate::components::stageposition::StagePosition;
use crate::components::transfer::{CardTransfer, Easing, TransferDirector};
use crate::events::cadence::CadenceTickEvent;
use crate::math::Vec2;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::{debug, warn};

/// Cadence name the card demo registers its fixed timer under.
pub const TRANSFER_SIGNAL: &str = "transfer";

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    Vec2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Observer that starts one card transfer per cadence tick.
///
/// Contract
/// - Only reacts to ticks whose signal is [`TRANSFER_SIGNAL`], emitted by
///   the director's own fixed timer.
/// - Pops the top card of the route's source stack and attaches a
///   [`CardTransfer`] starting at the card's current position.
/// - The destination slot counts settled cards plus cards already flying
///   toward that stack, so overlapping flights never share a slot.
/// - An empty source flips the director's direction; nothing moves that tick.
pub fn observe_transfer_tick(
    trigger: On<CadenceTickEvent>,
    mut commands: Commands,
    mut directors: Query<&mut TransferDirector>,
    mut stacks: Query<&mut CardStack>,
    card_positions: Query<&StagePosition, With<Card>>,
    in_flight: Query<&CardTransfer>,
) {
    let event = trigger.event();
    if event.signal != TRANSFER_SIGNAL {
        return;
    }
    let Ok(mut director) = directors.get_mut(event.entity) else {
        return;
    };
    let (source, dest) = director.route();

    // Destination geometry first; the mutable source borrow comes after.
    let Ok(dest_stack) = stacks.get(dest) else {
        warn!("Transfer destination stack {:?} not found", dest);
        return;
    };
    let inbound = in_flight.iter().filter(|t| t.dest == dest).count();
    let slot_index = dest_stack.len() + inbound;
    let slot_pos = dest_stack.slot_position(slot_index);

    let Ok(mut source_stack) = stacks.get_mut(source) else {
        warn!("Transfer source stack {:?} not found", source);
        return;
    };
    if source_stack.is_empty() {
        director.direction = director.direction.flipped();
        debug!(
            "Source stack {:?} drained, direction now {:?}",
            source, director.direction
        );
        return;
    }
    let Some(card) = source_stack.pop() else {
        return;
    };
    debug_assert!(
        in_flight.get(card).is_err(),
        "popped card {:?} already has an active transfer",
        card
    );

    let Ok(card_pos) = card_positions.get(card) else {
        warn!("Card {:?} has no position, returning it to {:?}", card, source);
        source_stack.push(card);
        return;
    };

    debug!(
        "Transfer start: card {:?} from {:?} to slot {} of {:?}",
        card, source, slot_index, dest
    );
    commands.entity(card).insert(
        CardTransfer::new(card_pos.pos, slot_pos, director.duration, dest)
            .with_easing(director.easing),
    );
}

/// Advance all card flights and settle the ones that arrive.
///
/// Progress is eased per the flight's easing curve. On completion the card
/// snaps to the exact slot position, joins the destination stack as its new
/// top card, and loses its [`CardTransfer`] component in the same frame.
pub fn card_transfer_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut flights: Query<(Entity, &mut StagePosition, &mut CardTransfer)>,
    mut stacks: Query<&mut CardStack>,
    mut signals: Option<ResMut<WorldSignals>>,
) {
    let dt = world_time.delta.max(0.0);
    let mut completed = 0;
    for (entity, mut pos, mut transfer) in flights.iter_mut() {
        transfer.elapsed += dt;
        let t = if transfer.duration > 0.0 {
            transfer.elapsed / transfer.duration
        } else {
            1.0
        };
        pos.pos = lerp_v2(transfer.from, transfer.to, ease(transfer.easing, t));

        if transfer.elapsed >= transfer.duration {
            pos.pos = transfer.to;
            if let Ok(mut dest_stack) = stacks.get_mut(transfer.dest) {
                dest_stack.push(entity);
            } else {
                warn!(
                    "Transfer destination {:?} is gone, card {:?} left in place",
                    transfer.dest, entity
                );
            }
            commands.entity(entity).remove::<CardTransfer>();
            completed += 1;
        }
    }
    if completed > 0 {
        if let Some(signals) = signals.as_deref_mut() {
            signals.add_integer("transfers_completed", completed);
        }
    }
}
