//! Stage configuration resource.
//!
//! Manages demo settings loaded from an INI configuration file. Provides
//! defaults for safe startup so the demos run without any file present.
//!
//! # Configuration File Format
//!
//! ```ini
//! [stage]
//! width = 800
//! height = 600
//! target_fps = 60
//!
//! [cards]
//! count = 144
//! slot_offset = 0.2
//! transfer_period = 1.0
//! transfer_duration = 2.0
//!
//! [dialogue]
//! reveal_interval = 0.003
//! ```

use crate::math::Vec2;
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_STAGE_WIDTH: u32 = 800;
const DEFAULT_STAGE_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CARD_COUNT: u32 = 144;
const DEFAULT_SLOT_OFFSET: f32 = 0.2;
const DEFAULT_TRANSFER_PERIOD: f32 = 1.0;
const DEFAULT_TRANSFER_DURATION: f32 = 2.0;
const DEFAULT_CARD_WIDTH: f32 = 100.0;
const DEFAULT_CARD_HEIGHT: f32 = 140.0;
const DEFAULT_LEFT_STACK: Vec2 = Vec2 { x: 100.0, y: 100.0 };
const DEFAULT_RIGHT_STACK: Vec2 = Vec2 { x: 500.0, y: 100.0 };
const DEFAULT_DIALOGUE_BOX_POS: Vec2 = Vec2 { x: 50.0, y: 400.0 };
const DEFAULT_DIALOGUE_BOX_SIZE: Vec2 = Vec2 { x: 700.0, y: 150.0 };
const DEFAULT_REVEAL_INTERVAL: f32 = 0.003;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Stage configuration resource.
///
/// Stores stage dimensions plus the tunable parameters of each demo. Values
/// come from an INI file when one exists; keys that are absent keep their
/// defaults.
#[derive(Resource, Debug, Clone)]
pub struct StageConfig {
    /// Stage width in pixels.
    pub stage_width: u32,
    /// Stage height in pixels.
    pub stage_height: u32,
    /// Target frames per second for the drive loop.
    pub target_fps: u32,
    /// Number of cards dealt onto the source stack.
    pub card_count: u32,
    /// Vertical offset between stacked cards, in pixels per card.
    pub slot_offset: f32,
    /// Seconds between transfer starts.
    pub transfer_period: f32,
    /// Seconds a single card spends in flight.
    pub transfer_duration: f32,
    /// Card width in pixels.
    pub card_width: f32,
    /// Card height in pixels.
    pub card_height: f32,
    /// Origin of the left stack.
    pub left_stack: Vec2,
    /// Origin of the right stack.
    pub right_stack: Vec2,
    /// Top-left corner of the dialogue box.
    pub dialogue_box_pos: Vec2,
    /// Dialogue box dimensions.
    pub dialogue_box_size: Vec2,
    /// Seconds between glyph reveals.
    pub reveal_interval: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            stage_width: DEFAULT_STAGE_WIDTH,
            stage_height: DEFAULT_STAGE_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            card_count: DEFAULT_CARD_COUNT,
            slot_offset: DEFAULT_SLOT_OFFSET,
            transfer_period: DEFAULT_TRANSFER_PERIOD,
            transfer_duration: DEFAULT_TRANSFER_DURATION,
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            left_stack: DEFAULT_LEFT_STACK,
            right_stack: DEFAULT_RIGHT_STACK,
            dialogue_box_pos: DEFAULT_DIALOGUE_BOX_POS,
            dialogue_box_size: DEFAULT_DIALOGUE_BOX_SIZE,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} stage, fps={}, {} cards every {}s, reveal every {}s",
            self.stage_width,
            self.stage_height,
            self.target_fps,
            self.card_count,
            self.transfer_period,
            self.reveal_interval
        );

        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [stage] section
        if let Some(width) = config.getuint("stage", "width").ok().flatten() {
            self.stage_width = width as u32;
        }
        if let Some(height) = config.getuint("stage", "height").ok().flatten() {
            self.stage_height = height as u32;
        }
        if let Some(fps) = config.getuint("stage", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [cards] section
        if let Some(count) = config.getuint("cards", "count").ok().flatten() {
            self.card_count = count as u32;
        }
        if let Some(offset) = config.getfloat("cards", "slot_offset").ok().flatten() {
            self.slot_offset = offset as f32;
        }
        if let Some(period) = config.getfloat("cards", "transfer_period").ok().flatten() {
            self.transfer_period = period as f32;
        }
        if let Some(duration) = config.getfloat("cards", "transfer_duration").ok().flatten() {
            self.transfer_duration = duration as f32;
        }
        if let Some(width) = config.getfloat("cards", "card_width").ok().flatten() {
            self.card_width = width as f32;
        }
        if let Some(height) = config.getfloat("cards", "card_height").ok().flatten() {
            self.card_height = height as f32;
        }

        // [dialogue] section
        if let Some(interval) = config.getfloat("dialogue", "reveal_interval").ok().flatten() {
            self.reveal_interval = interval as f32;
        }
    }

    /// Get the stage size.
    pub fn stage_size(&self) -> (u32, u32) {
        (self.stage_width, self.stage_height)
    }

    /// Center of the stage, where the swirl emitter sits.
    pub fn stage_center(&self) -> Vec2 {
        Vec2::new(
            self.stage_width as f32 / 2.0,
            self.stage_height as f32 / 2.0,
        )
    }
}
