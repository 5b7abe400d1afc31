// src/renderer/vitkovac.rs

//! Layout for the dual-axis family.
//!
//! Every glyph shares one continuous main line drawn in per-glyph stretches;
//! alteration marks branch off it perpendicular at unit positions. Boundary
//! indication is exclusive: with index ticks off, the main line thickens at
//! glyph transitions; with ticks on, a small rectangle sits between
//! consecutive glyphs and the thickening is suppressed. Glyphs flagged for
//! carving split their main-line stretch into exactly two segments around a
//! gap.

use crate::config::{IndexStyle, RenderConfig};
use crate::patterns;
use crate::patterns::vitkovac::{carve_interval, VITKOVAC_H, VITKOVAC_V};
use crate::primitive::{Primitive, RenderResult};

/// Fraction of a unit claimed by each thickened boundary stretch.
const BOUNDARY_FRACTION: f32 = 0.3;

/// Horizontal variant: the main line runs left to right.
pub(super) fn horizontal(text: &str, config: &RenderConfig) -> RenderResult {
    let opts = &config.vitkovac;
    let (main_color, alt_color) = opts.colors(config.color);
    let stroke = opts.weight.stroke_fraction();
    let block = 10.0 * config.scale;
    let alt_length = block * opts.form.alteration_multiplier();
    let main_y = alt_length + block;
    let main_thickness = block * stroke;
    let alt_thickness = block * stroke;
    let ticks = opts.index_style == IndexStyle::Rectangle;

    let chars: Vec<char> = text.chars().collect();
    let mut primitives = Vec::new();
    let mut x = 0.0f32;
    // (start, end, leveled main-line y) per glyph, for tick placement.
    let mut placed: Vec<(f32, f32, f32)> = Vec::new();

    for (char_idx, &ch) in chars.iter().enumerate() {
        let glyph = patterns::lookup(&VITKOVAC_H, ch);
        let char_width = glyph.width as f32 * block;
        let is_last = char_idx + 1 == chars.len();

        // i and 1 are narrow but reach further out than anything else.
        let extension = if ch.eq_ignore_ascii_case(&'i') || ch == '1' {
            alt_length * 0.5
        } else {
            0.0
        };

        let line_y = main_y + glyph.main_line_offset * block;
        placed.push((x, x + char_width, line_y));

        if glyph.carve_main {
            let (cut_start, cut_end) = carve_interval(ch);
            primitives.push(Primitive::rect(
                x,
                line_y,
                char_width * cut_start,
                main_thickness,
                main_color,
            ));
            primitives.push(Primitive::rect(
                x + char_width * cut_end,
                line_y,
                char_width * (1.0 - cut_end),
                main_thickness,
                main_color,
            ));
        } else if ticks {
            primitives.push(Primitive::rect(
                x,
                line_y,
                char_width,
                main_thickness,
                main_color,
            ));
        } else {
            let stub = block * BOUNDARY_FRACTION;
            if char_idx > 0 {
                primitives.push(Primitive::rect(
                    x,
                    line_y,
                    stub,
                    main_thickness * 2.0,
                    main_color,
                ));
            }
            if !is_last {
                primitives.push(Primitive::rect(
                    x + char_width - stub,
                    line_y,
                    stub,
                    main_thickness * 2.0,
                    main_color,
                ));
            }
            if char_width > stub * 2.0 {
                primitives.push(Primitive::rect(
                    x + stub,
                    line_y,
                    char_width - stub * 2.0,
                    main_thickness,
                    main_color,
                ));
            }
        }

        for &pos in glyph.up {
            let mark_x = x + pos as f32 * block + (block - alt_thickness) / 2.0;
            let height = alt_length + extension;
            primitives.push(Primitive::rect(
                mark_x,
                line_y - height,
                alt_thickness,
                height,
                alt_color,
            ));
        }
        for &pos in glyph.down {
            let mark_x = x + pos as f32 * block + (block - alt_thickness) / 2.0;
            let height = alt_length + extension;
            primitives.push(Primitive::rect(
                mark_x,
                line_y + main_thickness,
                alt_thickness,
                height,
                alt_color,
            ));
        }

        // Glyphs share the main line; no inter-glyph spacing.
        x += char_width;
    }

    if ticks {
        for pair in placed.windows(2) {
            let (_, end, y_a) = pair[0];
            let (_, _, y_b) = pair[1];
            let level_y = (y_a + y_b) / 2.0;
            let tick_width = main_thickness;
            let tick_height = main_thickness * 2.0;
            primitives.push(
                Primitive::rect(
                    end - tick_width / 2.0,
                    level_y - tick_height / 2.0 + main_thickness / 2.0,
                    tick_width,
                    tick_height,
                    main_color,
                )
                .with_opacity(0.7),
            );
        }
    }

    RenderResult {
        primitives,
        width: x,
        height: alt_length * 2.0 + block * 2.0,
    }
}

/// Vertical variant: one main line per column, columns split on newlines.
pub(super) fn vertical(text: &str, config: &RenderConfig) -> RenderResult {
    let opts = &config.vitkovac;
    let (main_color, alt_color) = opts.colors(config.color);
    let stroke = opts.weight.stroke_fraction();
    let block = 10.0 * config.scale;
    let alt_width = block * opts.form.alteration_multiplier();
    let main_thickness = block * stroke;
    let alt_thickness = block * stroke;
    let ticks = opts.index_style == IndexStyle::Rectangle;

    let columns: Vec<&str> = text.split('\n').filter(|col| !col.is_empty()).collect();
    let columns = if columns.is_empty() {
        vec![crate::config::DEFAULT_TEXT]
    } else {
        columns
    };

    let mut primitives = Vec::new();
    // Leading room for the first column's left-hand marks.
    let mut column_x = alt_width;

    for column in columns {
        let chars: Vec<char> = column.chars().collect();
        let mut y = 0.0f32;
        let mut placed: Vec<(f32, f32, f32)> = Vec::new();

        for (char_idx, &ch) in chars.iter().enumerate() {
            let glyph = patterns::lookup(&VITKOVAC_V, ch);
            let char_height = glyph.height as f32 * block;
            let is_last = char_idx + 1 == chars.len();
            let line_x = column_x + glyph.main_line_x_offset * block;
            placed.push((y, y + char_height, line_x));

            if ticks {
                primitives.push(Primitive::rect(
                    line_x,
                    y,
                    main_thickness,
                    char_height,
                    main_color,
                ));
            } else {
                let stub = block * BOUNDARY_FRACTION;
                if char_idx > 0 {
                    primitives.push(Primitive::rect(
                        line_x,
                        y,
                        main_thickness * 2.0,
                        stub,
                        main_color,
                    ));
                }
                if !is_last {
                    primitives.push(Primitive::rect(
                        line_x,
                        y + char_height - stub,
                        main_thickness * 2.0,
                        stub,
                        main_color,
                    ));
                }
                if char_height > stub * 2.0 {
                    primitives.push(Primitive::rect(
                        line_x,
                        y + stub,
                        main_thickness,
                        char_height - stub * 2.0,
                        main_color,
                    ));
                }
            }

            for &pos in glyph.left {
                let mark_y = y + pos as f32 * block + (block - alt_thickness) / 2.0;
                primitives.push(Primitive::rect(
                    line_x - alt_width,
                    mark_y,
                    alt_width,
                    alt_thickness,
                    alt_color,
                ));
            }
            for &pos in glyph.right {
                let mark_y = y + pos as f32 * block + (block - alt_thickness) / 2.0;
                primitives.push(Primitive::rect(
                    line_x + main_thickness,
                    mark_y,
                    alt_width,
                    alt_thickness,
                    alt_color,
                ));
            }

            y += char_height;
        }

        if ticks {
            for pair in placed.windows(2) {
                let (_, end, x_a) = pair[0];
                let (_, _, x_b) = pair[1];
                let level_x = (x_a + x_b) / 2.0;
                let tick_height = main_thickness;
                let tick_width = main_thickness * 2.0;
                primitives.push(
                    Primitive::rect(
                        level_x - tick_width / 2.0 + main_thickness / 2.0,
                        end - tick_height / 2.0,
                        tick_width,
                        tick_height,
                        main_color,
                    )
                    .with_opacity(0.7),
                );
            }
        }

        column_x += alt_width * 2.0 + main_thickness + block * 2.0;
    }

    RenderResult {
        primitives,
        width: column_x + alt_width,
        height: 8.0 * block,
    }
}
