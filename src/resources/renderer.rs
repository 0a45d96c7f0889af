//! Frame presentation adapter.
//!
//! Simulation systems never draw; once per frame the render system collects
//! the visible state into a [`FrameState`] draw list and hands it to the
//! active [`RenderAdapter`]. Adapters are main-thread objects, so the
//! [`ActiveRenderer`] holder is inserted as a NonSend resource.
//!
//! Two adapters ship with the demos: [`LogRenderer`] emits a throttled digest
//! of each frame through the log facade, and [`NullRenderer`] discards frames
//! (useful in tests and benchmarks).
//!
//! # Related
//! - [`render_frame`](crate::systems::render::render_frame) builds the
//!   [`FrameState`] and calls [`RenderAdapter::present`].

use crate::math::{Color, Vec2};
use log::debug;

/// One textured quad to draw: position, rotation, scale, tint, opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteView {
    pub pos: Vec2,
    pub rotation_degrees: f32,
    pub scale: Vec2,
    pub color: Color,
    pub alpha: f32,
}

/// One text run to draw at a position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    pub pos: Vec2,
    pub content: String,
}

/// Everything visible in one frame, in draw order.
#[derive(Debug, Clone, Default)]
pub struct FrameState {
    pub frame: u64,
    pub elapsed: f32,
    pub sprites: Vec<SpriteView>,
    pub texts: Vec<TextView>,
}

/// A presentation backend. Receives one [`FrameState`] per frame.
pub trait RenderAdapter {
    fn present(&mut self, frame: &FrameState);
}

/// Adapter that discards every frame.
#[derive(Default)]
pub struct NullRenderer;

impl RenderAdapter for NullRenderer {
    fn present(&mut self, _frame: &FrameState) {}
}

/// Adapter that logs a digest of every `every`-th frame at debug level.
pub struct LogRenderer {
    every: u64,
}

impl LogRenderer {
    /// Create a digest logger that reports every `every` frames.
    /// An `every` of zero reports every frame.
    pub fn new(every: u64) -> Self {
        LogRenderer {
            every: every.max(1),
        }
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl RenderAdapter for LogRenderer {
    fn present(&mut self, frame: &FrameState) {
        if frame.frame % self.every != 0 {
            return;
        }
        debug!(
            "frame {} (t={:.3}s): {} sprites, {} texts",
            frame.frame,
            frame.elapsed,
            frame.sprites.len(),
            frame.texts.len()
        );
        for text in &frame.texts {
            debug!("  text @({:.0},{:.0}): {:?}", text.pos.x, text.pos.y, text.content);
        }
    }
}

/// NonSend holder for the active adapter.
///
/// Render backends own window or GPU handles that must stay on the main
/// thread, so this is inserted with `insert_non_send_resource`.
pub struct ActiveRenderer {
    pub adapter: Box<dyn RenderAdapter>,
}

impl ActiveRenderer {
    pub fn log(every: u64) -> Self {
        ActiveRenderer {
            adapter: Box::new(LogRenderer::new(every)),
        }
    }

    pub fn null() -> Self {
        ActiveRenderer {
            adapter: Box::new(NullRenderer),
        }
    }
}
