// src/patterns/vitkovac.rs

//! Dual-axis tables. Each glyph hangs alteration marks off a continuous
//! main line: up/down positions along the glyph width for the horizontal
//! variant, left/right positions along the glyph height for the vertical
//! one.
//!
//! `s`/`z` (and their uppercase forms) carry `carve_main`: their stretch of
//! the main line must be split around a gap or the glyph collapses into its
//! neighbors. Uppercase alternates additionally carry a main-line offset so
//! mixed-case runs level visually.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Horizontal-variant glyph: marks above/below a left-to-right main line.
#[derive(Debug, Clone, Copy)]
pub struct AxisGlyphH {
    /// Glyph width in layout units.
    pub width: u8,
    /// Unit positions of upward alteration lines.
    pub up: &'static [u8],
    /// Unit positions of downward alteration lines.
    pub down: &'static [u8],
    /// Split the main line around a gap instead of drawing it through.
    pub carve_main: bool,
    /// Main-line anchor nudge, in units, for visual leveling.
    pub main_line_offset: f32,
}

/// Vertical-variant glyph: marks left/right of a top-to-bottom main line.
#[derive(Debug, Clone, Copy)]
pub struct AxisGlyphV {
    /// Glyph height in layout units.
    pub height: u8,
    pub left: &'static [u8],
    pub right: &'static [u8],
    pub main_line_x_offset: f32,
}

const STANDARD_WIDTH: u8 = 4;
// i/1 are narrower than everything else but reach further from the line.
const I_WIDTH: u8 = 1;

fn h(width: u8, up: &'static [u8], down: &'static [u8]) -> AxisGlyphH {
    AxisGlyphH {
        width,
        up,
        down,
        carve_main: false,
        main_line_offset: 0.0,
    }
}

fn h_alt(up: &'static [u8], down: &'static [u8], offset: f32) -> AxisGlyphH {
    AxisGlyphH {
        width: STANDARD_WIDTH,
        up,
        down,
        carve_main: false,
        main_line_offset: offset,
    }
}

fn carved(up: &'static [u8], down: &'static [u8]) -> AxisGlyphH {
    AxisGlyphH {
        width: STANDARD_WIDTH,
        up,
        down,
        carve_main: true,
        main_line_offset: 0.0,
    }
}

pub static VITKOVAC_H: Lazy<HashMap<char, AxisGlyphH>> = Lazy::new(|| {
    let w = STANDARD_WIDTH;
    let entries: &[(char, AxisGlyphH)] = &[
        ('a', h(w, &[1], &[1])),
        ('b', h(w, &[0, 2], &[0, 2])),
        ('c', h(w, &[0], &[3])),
        ('d', h(w, &[3], &[0])),
        ('e', h(w, &[0, 3], &[])),
        ('f', h(w, &[0], &[])),
        ('g', h(w, &[0], &[3])),
        ('h', h(w, &[0, 3], &[])),
        ('i', h(I_WIDTH, &[0], &[0])),
        ('j', h(w, &[], &[2])),
        ('k', h(w, &[0], &[0, 2])),
        ('l', h(w, &[0], &[])),
        ('m', h(w, &[0, 1, 2, 3], &[])),
        ('n', h(w, &[0, 3], &[])),
        ('o', h(w, &[0, 3], &[0, 3])),
        ('p', h(w, &[0, 2], &[0])),
        ('q', h(w, &[0, 3], &[3])),
        ('r', h(w, &[0, 2], &[0])),
        ('s', carved(&[3], &[0])),
        ('t', h(w, &[1], &[])),
        ('u', h(w, &[], &[0, 3])),
        ('v', h(w, &[0], &[3])),
        ('w', h(w, &[0, 1, 2, 3], &[])),
        ('x', h(w, &[0, 3], &[0, 3])),
        ('y', h(w, &[0], &[0, 3])),
        ('z', carved(&[0], &[3])),
        (' ', h(w, &[], &[])),
        ('0', h(w, &[0, 3], &[0, 3])),
        ('1', h(I_WIDTH, &[0], &[0])),
        ('2', h(w, &[0, 3], &[0])),
        ('3', h(w, &[3], &[3])),
        ('4', h(w, &[0], &[2])),
        ('5', h(w, &[0], &[3])),
        ('6', h(w, &[0], &[0, 3])),
        ('7', h(w, &[0, 3], &[])),
        ('8', h(w, &[0, 3], &[0, 3])),
        ('9', h(w, &[0, 3], &[3])),
        ('A', h_alt(&[1, 2], &[1], 0.0)),
        ('B', h_alt(&[0, 2, 3], &[0, 2], -0.5)),
        ('C', h_alt(&[0, 1], &[2, 3], 0.5)),
        ('D', h_alt(&[3], &[0, 1], 0.0)),
        ('E', h_alt(&[0, 2, 3], &[1], -0.3)),
        ('F', h_alt(&[0, 1], &[], 0.3)),
        ('G', h_alt(&[0, 1], &[2, 3], 0.0)),
        ('H', h_alt(&[0, 3], &[1], -0.2)),
        ('I', h(I_WIDTH, &[0], &[0])),
        ('J', h_alt(&[1], &[1, 2], 0.4)),
        ('K', h_alt(&[0, 1], &[0, 1, 2], 0.0)),
        ('L', h_alt(&[0, 1], &[2], 0.2)),
        ('M', h_alt(&[0, 1, 2, 3], &[1], 0.0)),
        ('N', h_alt(&[0, 2, 3], &[1], 0.0)),
        ('O', h_alt(&[0, 2, 3], &[0, 1, 3], 0.0)),
        ('P', h_alt(&[0, 1, 2], &[0, 1], 0.0)),
        ('Q', h_alt(&[0, 2, 3], &[1, 3], 0.0)),
        ('R', h_alt(&[0, 1, 2], &[0, 1], 0.0)),
        ('S', carved(&[2, 3], &[0, 1])),
        ('T', h_alt(&[0, 1, 2, 3], &[], 0.5)),
        ('U', h_alt(&[1], &[0, 2, 3], 0.0)),
        ('V', h_alt(&[0, 1], &[2, 3], 0.0)),
        ('W', h_alt(&[0, 1, 2, 3], &[2], 0.0)),
        ('X', h_alt(&[0, 1, 3], &[0, 2, 3], 0.0)),
        ('Y', h_alt(&[0, 1], &[0, 1, 3], 0.0)),
        ('Z', carved(&[0, 1], &[2, 3])),
    ];
    entries.iter().copied().collect()
});

fn v(height: u8, left: &'static [u8], right: &'static [u8]) -> AxisGlyphV {
    AxisGlyphV {
        height,
        left,
        right,
        main_line_x_offset: 0.0,
    }
}

fn v_alt(height: u8, left: &'static [u8], right: &'static [u8], offset: f32) -> AxisGlyphV {
    AxisGlyphV {
        height,
        left,
        right,
        main_line_x_offset: offset,
    }
}

pub static VITKOVAC_V: Lazy<HashMap<char, AxisGlyphV>> = Lazy::new(|| {
    let entries: &[(char, AxisGlyphV)] = &[
        ('a', v(5, &[0, 2, 4], &[])),
        ('b', v(5, &[0, 2], &[0, 2, 4])),
        ('c', v(5, &[0, 4], &[])),
        ('d', v(5, &[], &[0, 4])),
        ('e', v(5, &[0, 2, 4], &[])),
        ('f', v(5, &[0, 2], &[])),
        ('g', v(5, &[0, 4], &[2])),
        ('h', v(5, &[0, 4], &[2])),
        ('i', v(3, &[1], &[1])),
        ('j', v(4, &[], &[0])),
        ('k', v(5, &[1, 3], &[0, 4])),
        ('l', v(4, &[3], &[])),
        ('m', v(5, &[0, 4], &[0, 4])),
        ('n', v(5, &[0, 4], &[0, 4])),
        ('o', v(5, &[0, 4], &[0, 4])),
        ('p', v(5, &[0, 2], &[0, 2])),
        ('q', v(6, &[0, 4], &[0, 4, 5])),
        ('r', v(5, &[0, 2], &[0])),
        ('s', v(5, &[0, 2, 4], &[])),
        ('t', v(5, &[1], &[1])),
        ('u', v(5, &[4], &[4])),
        ('v', v(5, &[0], &[4])),
        ('w', v(5, &[0, 2, 4], &[4])),
        ('x', v(5, &[0, 4], &[0, 4])),
        ('y', v(6, &[0], &[4, 5])),
        ('z', v(5, &[0, 4], &[])),
        (' ', v(2, &[], &[])),
        ('0', v(5, &[0, 4], &[0, 4])),
        ('1', v(3, &[1], &[1])),
        ('2', v(5, &[0, 2, 4], &[0, 2])),
        ('3', v(5, &[], &[0, 2, 4])),
        ('4', v(5, &[0, 2], &[2, 4])),
        ('5', v(5, &[0, 2, 4], &[2, 4])),
        ('6', v(5, &[0, 2, 4], &[4])),
        ('7', v(5, &[0], &[0, 4])),
        ('8', v(5, &[0, 2, 4], &[0, 2, 4])),
        ('9', v(5, &[0, 2], &[0, 2, 4])),
        ('A', v_alt(5, &[0, 1, 2, 4], &[2], 0.0)),
        ('B', v_alt(5, &[0, 2], &[0, 2, 3, 4], -0.3)),
        ('C', v_alt(5, &[0, 3, 4], &[1], 0.2)),
        ('D', v_alt(5, &[1], &[0, 3, 4], 0.0)),
        ('E', v_alt(5, &[0, 1, 2, 3, 4], &[2], -0.2)),
        ('F', v_alt(5, &[0, 1, 2], &[0], 0.3)),
        ('G', v_alt(5, &[0, 3, 4], &[2, 3], 0.0)),
        ('H', v_alt(5, &[0, 3, 4], &[1, 2], 0.0)),
        ('I', v_alt(3, &[0, 2], &[0, 2], 0.0)),
        ('J', v_alt(6, &[2], &[0, 4, 5], 0.0)),
        ('K', v_alt(5, &[0, 1, 3], &[0, 2, 4], 0.0)),
        ('L', v_alt(4, &[2, 3], &[3], 0.0)),
        ('M', v_alt(5, &[0, 3, 4], &[0, 3, 4], 0.0)),
        ('N', v_alt(5, &[0, 3, 4], &[0, 1, 4], 0.0)),
        ('O', v_alt(5, &[0, 2, 4], &[0, 2, 4], 0.0)),
        ('P', v_alt(5, &[0, 1, 2], &[0, 1, 2], 0.0)),
        ('Q', v_alt(6, &[0, 2, 4], &[0, 2, 4, 5], 0.0)),
        ('R', v_alt(5, &[0, 1, 2], &[0, 3], 0.0)),
        ('S', v_alt(5, &[0, 1, 2, 3, 4], &[2], 0.0)),
        ('T', v_alt(5, &[0], &[0], 0.0)),
        ('U', v_alt(5, &[3, 4], &[3, 4], 0.0)),
        ('V', v_alt(5, &[0, 1], &[3, 4], 0.0)),
        ('W', v_alt(5, &[0, 1, 2, 3, 4], &[3, 4], 0.0)),
        ('X', v_alt(5, &[0, 2, 4], &[0, 2, 4], 0.0)),
        ('Y', v_alt(6, &[0, 1], &[3, 4, 5], 0.0)),
        ('Z', v_alt(5, &[0, 2, 4], &[1], 0.0)),
    ];
    entries.iter().copied().collect()
});

/// Carve interval for a split main line, as fractions of the glyph width.
/// Keyed on the lowercase character; anything else takes the generic cut.
pub fn carve_interval(c: char) -> (f32, f32) {
    match c.to_ascii_lowercase() {
        's' => (0.4, 0.8),
        'z' => (0.2, 0.6),
        _ => (0.3, 0.7),
    }
}
