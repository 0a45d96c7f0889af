//! ECS resources that bridge the drive loop with the ECS world for input.
//!
//! Input intents are produced outside the ECS (by the platform layer driving
//! the frame loop) and consumed inside it. Use [`setup_input_bridge`] once
//! during initialization to create the channel and insert the [`InputBridge`]
//! resource; the returned [`InputSender`] is the producer half and can be
//! cloned freely across threads.
//!
//! The [`pump_input_bridge`] system drains the channel at the start of every
//! frame and re-emits each intent as an observable event.
//!
//! [`pump_input_bridge`]: crate::systems::input::pump_input_bridge

use crate::events::input::InputAction;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Consumer half of the input channel, owned by the ECS world.
#[derive(Resource)]
pub struct InputBridge {
    rx: Receiver<InputAction>,
}

impl InputBridge {
    /// Drain all intents queued since the last frame, oldest first.
    pub fn drain(&self) -> impl Iterator<Item = InputAction> + '_ {
        self.rx.try_iter()
    }
}

/// Producer half of the input channel. Clone-able and thread-safe.
#[derive(Clone)]
pub struct InputSender {
    tx: Sender<InputAction>,
}

impl InputSender {
    /// Queue an intent for the next frame. Sending never blocks; if the
    /// world side is gone the intent is silently dropped.
    pub fn send(&self, action: InputAction) {
        let _ = self.tx.send(action);
    }
}

/// Create the input channel and register the [`InputBridge`] resource.
///
/// Returns the [`InputSender`] for the platform side.
pub fn setup_input_bridge(world: &mut World) -> InputSender {
    let (tx, rx) = unbounded::<InputAction>();
    world.insert_resource(InputBridge { rx });
    InputSender { tx }
}
