use bevy_ecs::prelude::Resource;

/// Simulation clock: elapsed seconds, last frame delta, and frame count.
///
/// Updated once per tick by [`update_world_time`](crate::systems::time::update_world_time).
/// `delta` is already scaled by `time_scale`; systems read it directly.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
