// src/renderer/ricetta.rs

//! Layout for the stretched-line family.
//!
//! One algorithm serves both orientations: characters advance along a main
//! axis while their intervals stretch across the other, and a single swap
//! flag decides which coordinate is which. In the horizontal orientation
//! intervals map to x-extent and rows stack downward; the vertical
//! orientation is the same picture rotated a quarter turn.

use crate::config::{Orientation, RenderConfig};
use crate::patterns;
use crate::primitive::{Primitive, RenderResult};

pub(super) fn stretched_lines(text: &str, config: &RenderConfig) -> RenderResult {
    let opts = &config.ricetta;
    let thickness = 8.0 * opts.weight.multiplier() * config.scale;
    let max_span = 200.0 * config.scale;
    let row_spacing = thickness * 1.8;
    let char_spacing = if config.biometric {
        row_spacing * 0.5
    } else if opts.keep_spaces {
        row_spacing * 2.5
    } else {
        row_spacing * 0.3
    };
    let swap = opts.orientation == Orientation::Vertical;

    let chars: Vec<char> = text.chars().collect();
    let mut primitives = Vec::new();
    let mut pos = 0.0f32;
    for (char_idx, &ch) in chars.iter().enumerate() {
        let glyph = patterns::lookup(&patterns::ricetta::RICETTA, ch);
        if glyph.segments.is_empty() {
            pos += char_spacing * if opts.keep_spaces { 0.3 } else { 0.1 };
            continue;
        }

        for (row_idx, &(start, end)) in glyph.segments.iter().enumerate() {
            let along = start * max_span;
            let length = (end - start) * max_span;
            let across = pos + row_idx as f32 * row_spacing;
            let rx = thickness * 0.2;
            primitives.push(place(swap, along, across, length, thickness, config, rx, None));
        }

        pos += glyph.rows as f32 * row_spacing + char_spacing;

        // Faint boundary marks keep characters legible when the strokes run
        // nearly continuous.
        if config.biometric && char_idx + 1 < chars.len() && opts.keep_spaces {
            let mark_pos = pos - char_spacing * 0.3;
            let mark_len = max_span * 0.05;
            let mark_off = max_span * 0.02;
            primitives.push(place(
                swap,
                mark_off,
                mark_pos,
                mark_len,
                thickness * 0.3,
                config,
                0.0,
                Some(0.2),
            ));
        }

        if ch == ' ' && char_idx + 1 < chars.len() {
            pos += char_spacing * 0.5;
        }
    }

    let main_extent = (pos - char_spacing).max(0.0);
    let (width, height) = if swap {
        (main_extent, max_span)
    } else {
        (max_span, main_extent)
    };
    RenderResult {
        primitives,
        width,
        height,
    }
}

/// Builds one interval primitive in whichever orientation is active.
/// `along` runs across the span axis, `across` down the stacking axis.
#[allow(clippy::too_many_arguments)]
fn place(
    swap: bool,
    along: f32,
    across: f32,
    length: f32,
    thickness: f32,
    config: &RenderConfig,
    rx: f32,
    opacity: Option<f32>,
) -> Primitive {
    let mut p = if swap {
        Primitive::rect(across, along, thickness, length, config.color)
    } else {
        Primitive::rect(along, across, length, thickness, config.color)
    };
    if rx > 0.0 {
        p.rx = Some(rx);
    }
    p.opacity = opacity;
    p
}
