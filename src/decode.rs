// src/decode.rs

//! The decoding guide: renders a character's pattern as a short, readable
//! legend line so viewers can learn to read a typeface.
//!
//! Descriptions derive purely from the pattern tables plus the active
//! configuration, never from a prior render, so `describe` can be called
//! in any order, any number of times, with identical output.

use crate::config::{RenderConfig, Typeface};
use crate::patterns::{self, GridPattern, LevelPattern};

/// Block glyph for a tier level: absent, short, medium, tall.
fn level_glyph(level: u8) -> char {
    match level {
        0 => '\u{00b7}', // ·
        1 => '\u{2581}', // ▁
        2 => '\u{2584}', // ▄
        _ => '\u{2588}', // █
    }
}

fn cell_glyph(cell: u8) -> char {
    if cell == 1 {
        '\u{2588}'
    } else {
        '\u{00b7}'
    }
}

fn grid_string(pattern: GridPattern) -> String {
    pattern
        .iter()
        .map(|row| row.iter().map(|&c| cell_glyph(c)).collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

fn levels_string(pattern: LevelPattern) -> String {
    pattern.iter().map(|&l| level_glyph(l)).collect()
}

fn bars_string(pattern: LevelPattern) -> String {
    pattern
        .iter()
        .map(|&slot| cell_glyph(slot))
        .collect()
}

/// Describes how `c` is written in the given typeface.
pub fn describe(typeface: Typeface, c: char, config: &RenderConfig) -> String {
    match typeface {
        Typeface::KvarHBrut => format!(
            "KVAR-H BRUT | Pattern: {}",
            grid_string(*patterns::lookup(&patterns::grid::KVAR_H_BRUT, c))
        ),
        Typeface::KvarHTite => format!(
            "KVAR-H TITE | Pattern: {}",
            grid_string(*patterns::lookup(&patterns::grid::KVAR_H_TITE, c))
        ),
        Typeface::KvarV => format!(
            "KVAR-V | Pattern: {}",
            bars_string(*patterns::lookup(&patterns::grid::KVAR_V, c))
        ),
        Typeface::KvarSq => format!(
            "KVAR-SQ | Pattern: {}",
            grid_string(*patterns::lookup(&patterns::grid::KVAR_SQ, c))
        ),
        Typeface::Epetri => format!(
            "EPETRI {} {} | Pattern: {}",
            config.epetri.form.label(),
            config.epetri.weight.label(),
            levels_string(*patterns::lookup(&patterns::segment::EPETRI, c))
        ),
        Typeface::MidisH => format!(
            "Diagonal movement | Pattern: {}",
            grid_string(*patterns::lookup(&patterns::grid::MIDIS_H, c))
        ),
        Typeface::MidisV => format!(
            "Vertical segments | Pattern: {}",
            levels_string(*patterns::lookup(&patterns::segment::MIDIS_V, c))
        ),
        Typeface::Ricetta => {
            let glyph = patterns::lookup(&patterns::ricetta::RICETTA, c);
            let rows: Vec<String> = glyph.segments.iter().map(|&s| interval_bar(s)).collect();
            format!(
                "Stretched lines ({} rows) | Pattern:\n{}",
                glyph.rows,
                rows.join("\n")
            )
        }
        Typeface::VitkovacH => {
            let glyph = patterns::lookup(&patterns::vitkovac::VITKOVAC_H, c);
            let up = position_list("\u{2191}", glyph.up);
            let down = position_list("\u{2193}", glyph.down);
            let marks: Vec<&str> = [up.as_str(), "\u{2014}", down.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect();
            format!(
                "{} {} | Index: {} | Pattern: {}",
                config.vitkovac.form.label(),
                config.vitkovac.weight.label(),
                config.vitkovac.index_style.label(),
                marks.join(" ")
            )
        }
        Typeface::VitkovacV => {
            let glyph = patterns::lookup(&patterns::vitkovac::VITKOVAC_V, c);
            let left = position_list("\u{2190}", glyph.left);
            let right = position_list("\u{2192}", glyph.right);
            let marks: Vec<&str> = [left.as_str(), "\u{2502}", right.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect();
            format!(
                "{} {} | Height: {} | Pattern: {}",
                config.vitkovac.form.label(),
                config.vitkovac.weight.label(),
                glyph.height,
                marks.join(" ")
            )
        }
        Typeface::VisualPoetry => format!(
            "VISUAL POETRY | Mode: {} | Spatial composition of rendered words",
            config.poetry.mode.label()
        ),
    }
}

/// A 10-cell bar visualizing one fractional interval.
fn interval_bar((start, end): (f32, f32)) -> String {
    let cells = 10i32;
    let lead = (start * cells as f32).round() as i32;
    let filled = ((end - start) * cells as f32).round() as i32;
    let lead = lead.clamp(0, cells);
    let filled = filled.clamp(0, cells - lead);
    let trail = cells - lead - filled;
    let mut bar = String::new();
    for _ in 0..lead {
        bar.push('\u{00b7}');
    }
    for _ in 0..filled {
        bar.push('\u{2588}');
    }
    for _ in 0..trail {
        bar.push('\u{00b7}');
    }
    bar
}

fn position_list(arrow: &str, positions: &[u8]) -> String {
    if positions.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
    format!("{}{}", arrow, joined.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    #[test]
    fn grid_description_shows_the_cell_matrix() {
        let config = RenderConfig::default();
        let description = describe(Typeface::KvarHBrut, 'a', &config);
        assert!(description.starts_with("KVAR-H BRUT"));
        assert!(description.contains("\u{2588}\u{2588}\u{2588}\u{2588}"));
    }

    #[test]
    fn segment_description_uses_tier_glyphs() {
        let config = RenderConfig::default();
        // 'a' in the waveform is tall, short, absent, tall.
        let description = describe(Typeface::Epetri, 'a', &config);
        assert!(description.ends_with("\u{2588}\u{2581}\u{00b7}\u{2588}"));
    }

    #[test]
    fn dual_axis_description_lists_mark_positions() {
        let config = RenderConfig::default();
        let description = describe(Typeface::VitkovacV, 'a', &config);
        assert!(description.contains("\u{2190}0,2,4"));
        assert!(description.contains("Height: 5"));
    }

    #[test]
    fn description_is_independent_of_render_order() {
        let config = RenderConfig::default();
        let before = describe(Typeface::Ricetta, 'e', &config);
        let _ = crate::renderer::render("unrelated text", &config);
        let after = describe(Typeface::Ricetta, 'e', &config);
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_characters_describe_as_the_space_pattern() {
        let config = RenderConfig::default();
        assert_eq!(
            describe(Typeface::KvarSq, '@', &config),
            describe(Typeface::KvarSq, ' ', &config)
        );
    }

    #[test]
    fn interval_bar_covers_ten_cells() {
        let bar = interval_bar((0.2, 0.7));
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(bar.chars().filter(|&c| c == '\u{2588}').count(), 5);
    }
}
