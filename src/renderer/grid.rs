// src/renderer/grid.rs

//! Layout for the cell-matrix families: the kvar block grids, the square
//! grid, and the diagonal-block midis-h.
//!
//! One filled cell becomes one square (or, for midis-h, one wide-short)
//! primitive. A glyph advances by its matrix column count times the unit
//! size, plus the inter-glyph gap (zero in biometric mode for the block
//! grids).

use std::collections::HashMap;

use crate::config::RenderConfig;
use crate::patterns::{self, GridPattern};
use crate::primitive::{Primitive, RenderResult};

/// Block-grid layout shared by the brut and tite variants.
pub(super) fn kvar_h(
    text: &str,
    table: &HashMap<char, GridPattern>,
    config: &RenderConfig,
) -> RenderResult {
    let unit = 12.0 * config.scale;
    let spacing = if config.biometric { 0.0 } else { unit * 0.2 };

    let mut primitives = Vec::new();
    let mut x = 0.0;
    for ch in text.chars() {
        let pattern = patterns::lookup(table, ch);
        let char_width = pattern.first().map_or(0, |row| row.len()) as f32 * unit;
        for (row_idx, row) in pattern.iter().enumerate() {
            for (col_idx, &cell) in row.iter().enumerate() {
                if cell == 1 {
                    primitives.push(Primitive::rect(
                        x + col_idx as f32 * unit,
                        row_idx as f32 * unit,
                        unit,
                        unit,
                        config.color,
                    ));
                }
            }
        }
        x += char_width + spacing;
    }

    RenderResult {
        primitives,
        width: (x - spacing).max(0.0),
        height: 5.0 * unit,
    }
}

/// Square-grid layout; glyph heights vary, the box grows to the tallest.
pub(super) fn kvar_sq(text: &str, config: &RenderConfig) -> RenderResult {
    let unit = 15.0 * config.scale;
    let spacing = if config.biometric { unit * 0.1 } else { unit * 0.3 };

    let mut primitives = Vec::new();
    let mut x = 0.0;
    let mut max_height = 0.0f32;
    for ch in text.chars() {
        let pattern = patterns::lookup(&patterns::grid::KVAR_SQ, ch);
        let char_width = pattern.first().map_or(0, |row| row.len()) as f32 * unit;
        max_height = max_height.max(pattern.len() as f32 * unit);
        for (row_idx, row) in pattern.iter().enumerate() {
            for (col_idx, &cell) in row.iter().enumerate() {
                if cell == 1 {
                    primitives.push(Primitive::rect(
                        x + col_idx as f32 * unit,
                        row_idx as f32 * unit,
                        unit,
                        unit,
                        config.color,
                    ));
                }
            }
        }
        x += char_width + spacing;
    }

    RenderResult {
        primitives,
        width: (x - spacing).max(0.0),
        height: max_height,
    }
}

/// Diagonal-block layout: wide-short rectangles centered in their cells.
///
/// In biometric mode a filled cell with a diagonally-filled neighbor on the
/// next row gets a faint connector hint bridging the inter-row gap.
pub(super) fn midis_h(text: &str, config: &RenderConfig) -> RenderResult {
    let unit = 12.0 * config.scale;
    let rect_height = unit * 0.7;
    let spacing = if config.biometric { unit * 0.05 } else { unit * 0.3 };

    let chars: Vec<char> = text.chars().collect();
    let mut primitives = Vec::new();
    let mut x = 0.0;
    let mut max_height = 0.0f32;
    for (char_idx, &ch) in chars.iter().enumerate() {
        let pattern = patterns::lookup(&patterns::grid::MIDIS_H, ch);
        let char_width = pattern.iter().map(|row| row.len()).max().unwrap_or(0) as f32 * unit;
        max_height = max_height.max(pattern.len() as f32 * unit);

        for (row_idx, row) in pattern.iter().enumerate() {
            for (col_idx, &cell) in row.iter().enumerate() {
                if cell != 1 {
                    continue;
                }
                let cell_x = x + col_idx as f32 * unit;
                let cell_y = row_idx as f32 * unit + (unit - rect_height) / 2.0;
                primitives.push(Primitive::rounded(
                    cell_x,
                    cell_y,
                    unit * 0.9,
                    rect_height,
                    config.color,
                    rect_height * 0.1,
                ));

                if config.biometric && row_idx + 1 < pattern.len() {
                    let next_row = pattern[row_idx + 1];
                    let left_diagonal = col_idx > 0
                        && next_row.get(col_idx - 1).copied() == Some(1);
                    let right_diagonal = next_row.get(col_idx + 1).copied() == Some(1);
                    if left_diagonal || right_diagonal {
                        let gap = unit - rect_height;
                        primitives.push(
                            Primitive::rect(
                                cell_x + unit * 0.45,
                                cell_y + rect_height,
                                unit * 0.1,
                                gap * 0.3,
                                config.color,
                            )
                            .with_opacity(0.3),
                        );
                    }
                }
            }
        }

        x += char_width + spacing;
        // Word boundaries keep a hint of separation even when compressed.
        if config.biometric && ch == ' ' && char_idx + 1 < chars.len() {
            x += spacing;
        }
    }

    RenderResult {
        primitives,
        width: (x - spacing).max(0.0),
        height: max_height,
    }
}
