//! Frame assembly and presentation.
//!
//! [`render_frame`] walks the visible entities once per frame, builds a
//! [`FrameState`](crate::resources::renderer::FrameState) draw list, and
//! hands it to the active adapter. Simulation data never leaks into the
//! adapter; everything it sees is plain values.
//!
//! Draw order: cards, swirl particles, then dialogue chrome (avatar, name,
//! revealed text rows, continue indicator). A box in the error phase renders
//! only its error text.

use bevy_ecs::prelude::*;

use crate::components::card::Card;
use crate::components::dialoguebox::{DialogueBox, DialoguePhase, GlyphContent};
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::stageposition::StagePosition;
use crate::components::swirl::SwirlParticle;
use crate::math::{Color, Vec2};
use crate::resources::renderer::{ActiveRenderer, FrameState, SpriteView, TextView};
use crate::resources::worldtime::WorldTime;
use crate::systems::dialogue::{BOX_MARGIN, INDICATOR_INSET, INDICATOR_TEXT, TEXT_TOP};

fn same_row(a: Vec2, b: Vec2) -> bool {
    (a.y - b.y).abs() < 0.5
}

fn push_row_text(rows: &mut Vec<(Vec2, String)>, pos: Vec2, text: &str) {
    match rows.last_mut() {
        Some((start, row)) if same_row(*start, pos) => row.push_str(text),
        _ => rows.push((pos, text.to_string())),
    }
}

/// Collect the visible state and present it through the active adapter.
///
/// Runs on the main thread; the adapter holder is a NonSend resource.
pub fn render_frame(
    time: Res<WorldTime>,
    mut renderer: NonSendMut<ActiveRenderer>,
    cards: Query<(&StagePosition, &Card)>,
    particles: Query<(&StagePosition, &Rotation, &Scale, &SwirlParticle)>,
    dialogues: Query<&DialogueBox>,
) {
    let mut frame = FrameState {
        frame: time.frame_count,
        elapsed: time.elapsed,
        sprites: Vec::new(),
        texts: Vec::new(),
    };

    for (pos, card) in cards.iter() {
        frame.sprites.push(SpriteView {
            pos: pos.pos,
            rotation_degrees: 0.0,
            scale: Vec2::new(1.0, 1.0),
            color: card.color,
            alpha: 1.0,
        });
    }

    for (pos, rotation, scale, particle) in particles.iter() {
        frame.sprites.push(SpriteView {
            pos: pos.pos,
            rotation_degrees: rotation.degrees,
            scale: scale.scale,
            color: Color::WHITE,
            alpha: particle.fade(),
        });
    }

    for dialogue in dialogues.iter() {
        let base = dialogue.pos;
        if let DialoguePhase::Error(message) = &dialogue.phase {
            frame.texts.push(TextView {
                pos: base + Vec2::new(BOX_MARGIN, TEXT_TOP),
                content: message.clone(),
            });
            continue;
        }

        if let Some(avatar) = &dialogue.placement.avatar {
            frame.sprites.push(SpriteView {
                pos: base + avatar.pos,
                rotation_degrees: 0.0,
                scale: Vec2::new(1.0, 1.0),
                color: Color::WHITE,
                alpha: 1.0,
            });
        }
        if !dialogue.speaker.is_empty() {
            frame.texts.push(TextView {
                pos: base + dialogue.placement.name_pos,
                content: dialogue.speaker.clone(),
            });
        }

        // Revealed glyphs fold into one text run per row; emoji glyphs
        // become inline sprites.
        let mut rows: Vec<(Vec2, String)> = Vec::new();
        for glyph in dialogue.glyphs.iter().take(dialogue.next_unrevealed) {
            match &glyph.content {
                GlyphContent::Char(c) => {
                    push_row_text(&mut rows, glyph.pos, &c.to_string());
                }
                GlyphContent::Literal(text) => {
                    push_row_text(&mut rows, glyph.pos, text);
                }
                GlyphContent::Emoji(_) => {
                    frame.sprites.push(SpriteView {
                        pos: base + glyph.pos,
                        rotation_degrees: 0.0,
                        scale: Vec2::new(1.0, 1.0),
                        color: Color::WHITE,
                        alpha: 1.0,
                    });
                }
            }
        }
        for (pos, content) in rows {
            frame.texts.push(TextView {
                pos: base + pos,
                content,
            });
        }

        if dialogue.indicator_visible {
            frame.texts.push(TextView {
                pos: base
                    + Vec2::new(
                        dialogue.size.x - INDICATOR_INSET,
                        dialogue.size.y - INDICATOR_INSET,
                    ),
                content: INDICATOR_TEXT.to_string(),
            });
        }
    }

    renderer.adapter.present(&frame);
}
