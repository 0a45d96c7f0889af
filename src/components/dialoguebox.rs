//! Dialogue box component and glyph model.
//!
//! The [`DialogueBox`] is the typesetter's state object: it owns the laid-out
//! glyphs of the current line, the reveal cursor and accumulator, the
//! resolved speaker placement, and the display phase. One box exists per
//! dialogue scene; line transitions rebuild its glyph vector and reset the
//! reveal state, teardown despawns it.
//!
//! Layout and reveal logic live in [`crate::systems::dialogue`]; this module
//! is the data plus the small state transitions (reveal one, reveal all,
//! begin a line) the systems drive.
//!
//! # Related
//!
//! - [`crate::resources::script::DialogueScript`] – the lines and tables fed in
//! - [`crate::systems::dialogue`] – parsing, placement, layout, reveal

use bevy_ecs::prelude::Component;

use crate::math::Vec2;
use crate::resources::script::AvatarSide;

/// One renderable unit of dialogue content.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphContent {
    /// A single character of plain text.
    Char(char),
    /// A resolved emoji token; the string is the emoji image url.
    Emoji(String),
    /// An unresolvable token rendered as its literal bracketed text.
    Literal(String),
}

/// A positioned glyph with its own reveal state.
///
/// Vector order is reveal order: left-to-right, top-to-bottom.
#[derive(Clone, Debug)]
pub struct Glyph {
    pub content: GlyphContent,
    /// Position inside the dialogue box, in stage pixels.
    pub pos: Vec2,
    /// Horizontal space the glyph occupies.
    pub advance: f32,
    pub revealed: bool,
}

/// Where the speaker's avatar sits for the current line.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarPlacement {
    pub url: String,
    pub side: AvatarSide,
    /// Top-left corner, box-local.
    pub pos: Vec2,
}

/// Resolved geometry for one line: avatar, name label, text area.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePlacement {
    /// Avatar placement, absent when the speaker has none.
    pub avatar: Option<AvatarPlacement>,
    /// Top-left of the speaker name label, box-local.
    pub name_pos: Vec2,
    /// Where the first glyph row starts; `x` is also the wrap-return column.
    pub text_origin: Vec2,
    /// Glyphs crossing this x boundary wrap to the next row.
    pub wrap_x: f32,
}

impl Default for LinePlacement {
    fn default() -> Self {
        LinePlacement {
            avatar: None,
            name_pos: Vec2::ZERO,
            text_origin: Vec2::ZERO,
            wrap_x: 0.0,
        }
    }
}

/// Display phase of the dialogue box.
///
/// Laying-out happens synchronously inside a line transition, so only the
/// phases that persist across frames are represented.
#[derive(Clone, Debug, PartialEq)]
pub enum DialoguePhase {
    /// Glyphs are being revealed over time.
    Revealing,
    /// Every glyph of the current line is visible.
    FullyRevealed,
    /// The script failed to load; terminal, carries the failure message.
    Error(String),
}

/// The dialogue typesetter's state object.
#[derive(Component, Clone, Debug)]
pub struct DialogueBox {
    /// Stage position of the box's top-left corner.
    pub pos: Vec2,
    /// Box width and height.
    pub size: Vec2,
    /// Index of the current line within the script.
    pub line_index: usize,
    /// Number of lines in the script.
    pub total_lines: usize,
    /// Speaker name of the current line.
    pub speaker: String,
    /// Resolved geometry for the current line.
    pub placement: LinePlacement,
    /// Laid-out glyphs of the current line, in reveal order.
    pub glyphs: Vec<Glyph>,
    /// Index of the next glyph to reveal; everything before it is visible.
    pub next_unrevealed: usize,
    /// Seconds accumulated towards the next reveal.
    pub reveal_accumulated: f32,
    /// Seconds of accumulated time each glyph costs.
    pub reveal_interval: f32,
    pub phase: DialoguePhase,
    /// Whether the "continue" indicator shows. Hidden on the last line.
    pub indicator_visible: bool,
}

impl DialogueBox {
    pub fn new(pos: Vec2, size: Vec2, reveal_interval: f32, total_lines: usize) -> Self {
        DialogueBox {
            pos,
            size,
            line_index: 0,
            total_lines,
            speaker: String::new(),
            placement: LinePlacement::default(),
            glyphs: Vec::new(),
            next_unrevealed: 0,
            reveal_accumulated: 0.0,
            reveal_interval,
            phase: DialoguePhase::Revealing,
            indicator_visible: false,
        }
    }

    /// A box in the terminal error phase, shown when the script never loaded.
    pub fn error(pos: Vec2, size: Vec2, message: impl Into<String>) -> Self {
        let mut dbox = DialogueBox::new(pos, size, 0.0, 0);
        dbox.phase = DialoguePhase::Error(message.into());
        dbox
    }

    /// Whether the current line is the script's last.
    ///
    /// An empty script counts as "on the last line" so it lands terminal.
    pub fn is_last_line(&self) -> bool {
        self.line_index + 1 >= self.total_lines
    }

    /// Glyphs not yet revealed.
    pub fn remaining(&self) -> usize {
        self.glyphs.len() - self.next_unrevealed
    }

    /// Install a freshly laid-out line and reset the reveal state.
    pub fn begin_line(
        &mut self,
        line_index: usize,
        speaker: impl Into<String>,
        placement: LinePlacement,
        glyphs: Vec<Glyph>,
    ) {
        self.line_index = line_index;
        self.speaker = speaker.into();
        self.placement = placement;
        self.glyphs = glyphs;
        self.next_unrevealed = 0;
        self.reveal_accumulated = 0.0;
        self.phase = DialoguePhase::Revealing;
        self.indicator_visible = !self.is_last_line();
    }

    /// Reveal the next glyph in layout order. Returns false when none remain.
    pub fn reveal_next(&mut self) -> bool {
        if self.next_unrevealed >= self.glyphs.len() {
            return false;
        }
        self.glyphs[self.next_unrevealed].revealed = true;
        self.next_unrevealed += 1;
        true
    }

    /// Instantly reveal every remaining glyph (the skip path).
    pub fn reveal_all(&mut self) {
        while self.next_unrevealed < self.glyphs.len() {
            self.glyphs[self.next_unrevealed].revealed = true;
            self.next_unrevealed += 1;
        }
    }

    /// Mark the line complete and settle the indicator.
    pub fn finish_reveal(&mut self) {
        self.phase = DialoguePhase::FullyRevealed;
        self.indicator_visible = !self.is_last_line();
    }
}
