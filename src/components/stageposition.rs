use bevy_ecs::prelude::Component;

use crate::math::Vec2;

/// Current rendered position of an entity on the stage, in logical pixels.
#[derive(Component, Clone, Copy, Debug)]
pub struct StagePosition {
    pub pos: Vec2,
}

impl StagePosition {
    pub fn new(x: f32, y: f32) -> Self {
        StagePosition {
            pos: Vec2::new(x, y),
        }
    }

    pub fn at(pos: Vec2) -> Self {
        StagePosition { pos }
    }
}
