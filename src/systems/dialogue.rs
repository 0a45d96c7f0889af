//! Dialogue systems.
//!
//! Everything the dialogue demo does per line lives here:
//!
//! - [`parse_segments`] – splits raw line text into plain runs and
//!   `{token}` references
//! - [`resolve_placement`] – computes avatar, name, and text geometry for a
//!   speaker
//! - [`layout_line`] – turns segments into positioned
//!   [`Glyph`](crate::components::dialoguebox::Glyph)s with per-glyph wrapping
//! - [`stage_line`] – composes the above and rebinds the box to a line
//! - [`dialogue_reveal_system`] – reveals glyphs on a fixed per-glyph cadence
//! - [`observe_dialogue_advance`] – reacts to advance input
//!
//! # System Flow
//!
//! Each frame while a line is revealing, `dialogue_reveal_system` adds the
//! frame delta to the box accumulator and reveals one glyph per elapsed
//! interval, keeping the remainder. An advance intent during reveal uncovers
//! the whole line at once; after the reveal it stages the next line, except
//! on the last line where it does nothing.
//!
//! Layout is box-local. The render system offsets everything by the box
//! position when it builds the frame.

use crate::components::dialoguebox::{
    AvatarPlacement, DialogueBox, DialoguePhase, Glyph, GlyphContent, LinePlacement,
};
use crate::events::input::{InputAction, InputEvent};
use crate::math::Vec2;
use crate::resources::script::{AvatarSide, DialogueScript};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use smallvec::SmallVec;

/// Inner padding between the box edge and its content.
pub const BOX_MARGIN: f32 = 10.0;
/// Avatar edge length; avatars render as squares.
pub const AVATAR_SIZE: f32 = 60.0;
/// Avatar top edge, box-local.
pub const AVATAR_TOP: f32 = 45.0;
/// Speaker name top edge, box-local.
pub const NAME_TOP: f32 = 20.0;
/// First text row top edge, box-local.
pub const TEXT_TOP: f32 = 48.0;
/// Vertical distance between wrapped text rows.
pub const LINE_HEIGHT: f32 = 26.0;
/// Horizontal advance of one text character.
pub const GLYPH_ADVANCE: f32 = 9.0;
/// Edge length of an inline emoji.
pub const EMOJI_SIZE: f32 = 24.0;
/// Inset of the continue indicator from the bottom-right corner.
pub const INDICATOR_INSET: f32 = 10.0;
/// Continue indicator caption.
pub const INDICATOR_TEXT: &str = "Click or press Enter to continue";

/// One lexical piece of a dialogue line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TextSegment {
    /// A run of plain text.
    Text(String),
    /// A `{name}` reference, stored without the braces.
    Token(String),
}

fn push_text(segments: &mut SmallVec<[TextSegment; 8]>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(TextSegment::Text(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(TextSegment::Text(text.to_string()));
    }
}

/// Split a line into plain text runs and `{token}` references.
///
/// A token is `{` followed by one or more ASCII alphanumerics or
/// underscores and a closing `}`. Anything else, including unterminated or
/// empty braces, stays plain text.
pub(crate) fn parse_segments(text: &str) -> SmallVec<[TextSegment; 8]> {
    let mut segments = SmallVec::new();
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        if let Some(close) = after.find('}') {
            let name = &after[..close];
            if !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                push_text(&mut segments, &rest[..open]);
                segments.push(TextSegment::Token(name.to_string()));
                rest = &after[close + 1..];
                continue;
            }
        }
        // Not a token; keep the brace as text and move past it.
        push_text(&mut segments, &rest[..open + 1]);
        rest = &rest[open + 1..];
    }
    push_text(&mut segments, rest);
    segments
}

/// Compute avatar, name, and text geometry for a speaker.
///
/// A left avatar pushes the text column right of the portrait; a right
/// avatar leaves text at the margin but shortens the wrap width by the
/// portrait. The name label always shares the text column.
pub(crate) fn resolve_placement(
    speaker: &str,
    script: &DialogueScript,
    box_size: Vec2,
) -> LinePlacement {
    match script.avatar(speaker) {
        Some(info) if info.side == AvatarSide::Right => {
            let text_x = BOX_MARGIN;
            let wrap_width = box_size.x - AVATAR_SIZE - 3.0 * BOX_MARGIN;
            LinePlacement {
                avatar: Some(AvatarPlacement {
                    url: info.url.clone(),
                    side: AvatarSide::Right,
                    pos: Vec2::new(box_size.x - AVATAR_SIZE - BOX_MARGIN, AVATAR_TOP),
                }),
                name_pos: Vec2::new(text_x, NAME_TOP),
                text_origin: Vec2::new(text_x, TEXT_TOP),
                wrap_x: text_x + wrap_width,
            }
        }
        Some(info) => {
            let text_x = BOX_MARGIN + AVATAR_SIZE + BOX_MARGIN;
            let wrap_width = box_size.x - text_x - BOX_MARGIN;
            LinePlacement {
                avatar: Some(AvatarPlacement {
                    url: info.url.clone(),
                    side: AvatarSide::Left,
                    pos: Vec2::new(BOX_MARGIN, AVATAR_TOP),
                }),
                name_pos: Vec2::new(text_x, NAME_TOP),
                text_origin: Vec2::new(text_x, TEXT_TOP),
                wrap_x: text_x + wrap_width,
            }
        }
        None => {
            let text_x = BOX_MARGIN;
            let wrap_width = box_size.x - 2.0 * BOX_MARGIN;
            LinePlacement {
                avatar: None,
                name_pos: Vec2::new(text_x, NAME_TOP),
                text_origin: Vec2::new(text_x, TEXT_TOP),
                wrap_x: text_x + wrap_width,
            }
        }
    }
}

fn wrap_before(cursor: &mut Vec2, width: f32, origin: Vec2, wrap_x: f32) {
    if cursor.x > origin.x && cursor.x + width > wrap_x {
        cursor.x = origin.x;
        cursor.y += LINE_HEIGHT;
    }
}

/// Lay out parsed segments as positioned glyphs, in reveal order.
///
/// Every character, spaces included, becomes one glyph advancing the cursor
/// by [`GLYPH_ADVANCE`]. A glyph that would cross [`LinePlacement::wrap_x`]
/// starts the next row instead. Emoji tokens become square glyphs centered
/// on the text row. Tokens missing from the script's emoji table become a
/// single literal glyph carrying the raw bracketed text.
pub(crate) fn layout_line(
    segments: &[TextSegment],
    placement: &LinePlacement,
    script: &DialogueScript,
) -> Vec<Glyph> {
    let origin = placement.text_origin;
    let mut cursor = origin;
    let mut glyphs = Vec::new();

    for segment in segments {
        match segment {
            TextSegment::Text(text) => {
                for c in text.chars() {
                    wrap_before(&mut cursor, GLYPH_ADVANCE, origin, placement.wrap_x);
                    glyphs.push(Glyph {
                        content: GlyphContent::Char(c),
                        pos: cursor,
                        advance: GLYPH_ADVANCE,
                        revealed: false,
                    });
                    cursor.x += GLYPH_ADVANCE;
                }
            }
            TextSegment::Token(name) => match script.emoji_url(name) {
                Some(url) => {
                    wrap_before(&mut cursor, EMOJI_SIZE, origin, placement.wrap_x);
                    glyphs.push(Glyph {
                        content: GlyphContent::Emoji(url.to_string()),
                        pos: Vec2::new(cursor.x, cursor.y + (LINE_HEIGHT - EMOJI_SIZE) / 2.0),
                        advance: EMOJI_SIZE,
                        revealed: false,
                    });
                    cursor.x += EMOJI_SIZE;
                }
                None => {
                    let raw = format!("{{{}}}", name);
                    let width = raw.chars().count() as f32 * GLYPH_ADVANCE;
                    wrap_before(&mut cursor, width, origin, placement.wrap_x);
                    glyphs.push(Glyph {
                        content: GlyphContent::Literal(raw),
                        pos: cursor,
                        advance: width,
                        revealed: false,
                    });
                    cursor.x += width;
                }
            },
        }
    }
    glyphs
}

/// Rebind the dialogue box to the script line at `index`.
///
/// Resolves placement for the line's speaker, lays out its glyphs, and
/// resets the reveal cursor. Out-of-range indices are logged and ignored.
pub fn stage_line(dialogue: &mut DialogueBox, script: &DialogueScript, index: usize) {
    let Some(line) = script.line(index) else {
        warn!("Dialogue line {} out of range ({})", index, script.len());
        return;
    };
    let placement = resolve_placement(&line.name, script, dialogue.size);
    let segments = parse_segments(&line.text);
    let glyphs = layout_line(&segments, &placement, script);
    info!(
        "Dialogue line {}/{}: {} ({} glyphs)",
        index + 1,
        script.len(),
        line.name,
        glyphs.len()
    );
    dialogue.begin_line(index, line.name.clone(), placement, glyphs);
}

/// Reveal glyphs at the box's fixed per-glyph cadence.
///
/// The accumulator keeps its remainder across frames, so reveal speed does
/// not depend on frame rate. A line with no glyphs completes on its first
/// update.
pub fn dialogue_reveal_system(world_time: Res<WorldTime>, mut boxes: Query<&mut DialogueBox>) {
    let dt = world_time.delta.max(0.0);
    for mut dialogue in boxes.iter_mut() {
        if dialogue.phase != DialoguePhase::Revealing {
            continue;
        }
        dialogue.reveal_accumulated += dt;
        while dialogue.remaining() > 0 && dialogue.reveal_accumulated >= dialogue.reveal_interval {
            dialogue.reveal_next();
            let interval = dialogue.reveal_interval;
            dialogue.reveal_accumulated -= interval;
        }
        if dialogue.remaining() == 0 {
            dialogue.finish_reveal();
            debug!("Line {} fully revealed", dialogue.line_index + 1);
        }
    }
}

/// Observer handling advance intents for all dialogue boxes.
///
/// Contract
/// - During a reveal, uncovers the rest of the line immediately.
/// - After a reveal, stages the next line; on the last line, does nothing.
/// - In the error phase, does nothing; the error text is terminal.
pub fn observe_dialogue_advance(
    trigger: On<InputEvent>,
    mut boxes: Query<&mut DialogueBox>,
    script: Option<Res<DialogueScript>>,
) {
    if trigger.event().action != InputAction::Advance {
        return;
    }
    for mut dialogue in boxes.iter_mut() {
        match dialogue.phase.clone() {
            DialoguePhase::Error(_) => {
                debug!("Advance ignored, dialogue is in error state");
            }
            DialoguePhase::Revealing => {
                dialogue.reveal_all();
                dialogue.finish_reveal();
                debug!("Reveal skipped for line {}", dialogue.line_index + 1);
            }
            DialoguePhase::FullyRevealed => {
                if dialogue.is_last_line() {
                    debug!("Advance ignored, already at the last line");
                    continue;
                }
                let Some(script) = script.as_ref() else {
                    warn!("DialogueScript resource missing, cannot advance");
                    continue;
                };
                let next = dialogue.line_index + 1;
                stage_line(&mut dialogue, script, next);
            }
        }
    }
}
