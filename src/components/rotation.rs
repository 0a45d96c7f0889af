use bevy_ecs::prelude::Component;

/// Render tilt in degrees, clockwise.
///
/// Swirl particles jitter this a little every frame; everything else leaves
/// it at zero. The presentation adapter applies it when drawing.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}
