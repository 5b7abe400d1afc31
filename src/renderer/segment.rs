// src/renderer/segment.rs

//! Layout for the 1-D segment families: kvar-v bars, the epetri waveform,
//! and midis-v tiered segments.
//!
//! All three walk a per-character level array and emit one bar per nonzero
//! level. They differ in anchoring: kvar-v stacks bars down the line slots,
//! epetri grows every bar up from a shared baseline, midis-v distributes
//! its segments evenly over the glyph height.

use crate::config::RenderConfig;
use crate::patterns;
use crate::primitive::{Primitive, RenderResult};

/// Tier fractions for three-level systems, rising renderers.
fn epetri_tier(level: u8) -> f32 {
    match level {
        1 => 0.25,
        2 => 0.60,
        _ => 1.0,
    }
}

/// Tier fractions for the evenly-distributed midis-v.
fn midis_tier(level: u8) -> f32 {
    match level {
        1 => 0.3,
        2 => 0.6,
        _ => 1.0,
    }
}

/// Single-column vertical bars, one unit advance per character.
pub(super) fn kvar_v(text: &str, config: &RenderConfig) -> RenderResult {
    let unit = 12.0 * config.scale;
    let line_height = unit * 1.2;
    let spacing = if config.biometric { 0.0 } else { unit * 0.2 };

    let mut primitives = Vec::new();
    let mut x = 0.0;
    for ch in text.chars() {
        let pattern = patterns::lookup(&patterns::grid::KVAR_V, ch);
        for (idx, &slot) in pattern.iter().enumerate() {
            if slot == 1 {
                primitives.push(Primitive::rect(
                    x,
                    idx as f32 * line_height,
                    unit,
                    line_height * 0.8,
                    config.color,
                ));
            }
        }
        x += unit + spacing;
    }

    RenderResult {
        primitives,
        width: (x - spacing).max(0.0),
        height: 5.0 * line_height,
    }
}

/// The readable waveform: bars of tiered heights rising from the baseline.
pub(super) fn epetri(text: &str, config: &RenderConfig) -> RenderResult {
    let opts = &config.epetri;
    let weight = opts.weight.multiplier();
    let block = 4.0 * opts.form.multiplier() * config.scale;
    let base_height = 50.0 * config.scale;
    let spacing = if config.biometric { block * 0.05 } else { block * 0.3 };

    let chars: Vec<char> = text.chars().collect();
    let mut primitives = Vec::new();
    let mut x = 0.0;
    for (char_idx, &ch) in chars.iter().enumerate() {
        let pattern = patterns::lookup(&patterns::segment::EPETRI, ch);
        let glyph_width = pattern.len() as f32 * block;

        for (idx, &level) in pattern.iter().enumerate() {
            if level == 0 {
                continue;
            }
            let height = base_height * epetri_tier(level);
            let line_width = block * 0.8 * weight;
            let line_x = x + idx as f32 * block + (block - line_width) / 2.0;
            primitives.push(Primitive::rounded(
                line_x,
                base_height - height,
                line_width,
                height,
                config.color,
                line_width * 0.1,
            ));

            // Index tick: a faint sliver marking the glyph start.
            if opts.index && idx == 0 {
                let tick_height = base_height * 0.15;
                primitives.push(
                    Primitive::rect(
                        x - 1.0,
                        base_height - tick_height,
                        1.0,
                        tick_height,
                        config.color,
                    )
                    .with_opacity(0.6),
                );
            }
        }

        x += glyph_width + spacing;
        // Biometric output compresses glyphs; word gaps stay audible.
        if config.biometric && ch == ' ' && char_idx + 1 < chars.len() {
            x += spacing * 2.0;
        }
    }

    RenderResult {
        primitives,
        width: (x - spacing).max(0.0),
        height: base_height,
    }
}

/// Vertical segments distributed evenly over the glyph height.
pub(super) fn midis_v(text: &str, config: &RenderConfig) -> RenderResult {
    let block = 8.0 * config.scale;
    let base_height = 45.0 * config.scale;
    let spacing = if config.biometric { block * 0.1 } else { block * 0.4 };

    let chars: Vec<char> = text.chars().collect();
    let mut primitives = Vec::new();
    let mut x = 0.0;
    let mut max_height = 0.0f32;
    for (char_idx, &ch) in chars.iter().enumerate() {
        let pattern = patterns::lookup(&patterns::segment::MIDIS_V, ch);
        let slot_height = base_height / pattern.len().max(1) as f32;

        for (idx, &level) in pattern.iter().enumerate() {
            if level == 0 {
                continue;
            }
            let segment_height = base_height * midis_tier(level);
            let y = idx as f32 * slot_height + (slot_height - segment_height) / 2.0;
            let rect_width = block * 0.85;
            primitives.push(Primitive::rounded(
                x + (block - rect_width) / 2.0,
                y,
                rect_width,
                segment_height,
                config.color,
                rect_width * 0.1,
            ));
            max_height = max_height.max(y + segment_height);
        }

        if config.biometric && pattern.len() > 1 {
            let baseline_width = block * 0.3;
            primitives.push(
                Primitive::rect(
                    x + (block - baseline_width) / 2.0,
                    base_height - 2.0,
                    baseline_width,
                    1.0,
                    config.color,
                )
                .with_opacity(0.2),
            );
        }

        x += block + spacing;
        if config.biometric && ch == ' ' && char_idx + 1 < chars.len() {
            x += spacing * 1.5;
        }
    }

    RenderResult {
        primitives,
        width: (x - spacing).max(0.0),
        height: max_height.max(base_height),
    }
}
