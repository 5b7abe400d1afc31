// src/patterns/ricetta.rs

//! Stretched-line table: each glyph is a stack of fractional intervals.
//! An interval `(start, end)` covers that fraction of the maximum span;
//! the gaps, not the strokes, are what identifies a character.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One stretched-line glyph: its intervals plus the number of rows it
/// occupies along the stacking axis.
#[derive(Debug, Clone, Copy)]
pub struct LineGlyph {
    pub segments: &'static [(f32, f32)],
    pub rows: usize,
}

pub static RICETTA: Lazy<HashMap<char, LineGlyph>> = Lazy::new(|| {
    let entries: &[(char, LineGlyph)] = &[
        ('a', LineGlyph { segments: &[(0.0, 0.8), (0.2, 1.0)], rows: 2 }),
        ('b', LineGlyph { segments: &[(0.0, 0.6), (0.4, 1.0), (0.0, 0.3)], rows: 3 }),
        ('c', LineGlyph { segments: &[(0.1, 0.9)], rows: 1 }),
        ('d', LineGlyph { segments: &[(0.0, 0.7), (0.3, 1.0)], rows: 2 }),
        ('e', LineGlyph { segments: &[(0.0, 0.8), (0.0, 0.5), (0.0, 0.8)], rows: 3 }),
        ('f', LineGlyph { segments: &[(0.0, 0.8), (0.0, 0.5)], rows: 2 }),
        ('g', LineGlyph { segments: &[(0.1, 0.9), (0.0, 0.4), (0.6, 1.0)], rows: 3 }),
        ('h', LineGlyph { segments: &[(0.0, 0.3), (0.7, 1.0), (0.0, 1.0)], rows: 3 }),
        ('i', LineGlyph { segments: &[(0.4, 0.6)], rows: 1 }),
        ('j', LineGlyph { segments: &[(0.4, 0.7), (0.3, 0.5)], rows: 2 }),
        ('k', LineGlyph { segments: &[(0.0, 0.4), (0.3, 0.7), (0.6, 1.0)], rows: 3 }),
        ('l', LineGlyph { segments: &[(0.0, 0.2)], rows: 1 }),
        ('m', LineGlyph { segments: &[(0.0, 0.3), (0.35, 0.65), (0.7, 1.0)], rows: 3 }),
        ('n', LineGlyph { segments: &[(0.0, 0.4), (0.6, 1.0)], rows: 2 }),
        ('o', LineGlyph { segments: &[(0.1, 0.9)], rows: 1 }),
        ('p', LineGlyph { segments: &[(0.0, 0.6), (0.0, 0.4)], rows: 2 }),
        ('q', LineGlyph { segments: &[(0.4, 1.0), (0.1, 0.7)], rows: 2 }),
        ('r', LineGlyph { segments: &[(0.0, 0.5)], rows: 1 }),
        ('s', LineGlyph { segments: &[(0.1, 0.6), (0.4, 0.9), (0.2, 0.7)], rows: 3 }),
        ('t', LineGlyph { segments: &[(0.3, 0.7), (0.2, 0.5)], rows: 2 }),
        ('u', LineGlyph { segments: &[(0.0, 0.4), (0.6, 1.0)], rows: 2 }),
        ('v', LineGlyph { segments: &[(0.0, 0.4), (0.6, 1.0)], rows: 2 }),
        ('w', LineGlyph { segments: &[(0.0, 0.25), (0.35, 0.65), (0.75, 1.0)], rows: 3 }),
        ('x', LineGlyph { segments: &[(0.0, 0.4), (0.6, 1.0), (0.2, 0.8)], rows: 3 }),
        ('y', LineGlyph { segments: &[(0.0, 0.4), (0.6, 1.0)], rows: 2 }),
        ('z', LineGlyph { segments: &[(0.0, 0.8), (0.2, 1.0), (0.0, 0.6)], rows: 3 }),
        ('A', LineGlyph { segments: &[(0.0, 0.9), (0.1, 1.0)], rows: 2 }),
        ('B', LineGlyph { segments: &[(0.0, 0.7), (0.3, 1.0), (0.0, 0.4)], rows: 3 }),
        ('C', LineGlyph { segments: &[(0.05, 0.95)], rows: 1 }),
        ('D', LineGlyph { segments: &[(0.0, 0.8), (0.2, 1.0)], rows: 2 }),
        ('E', LineGlyph { segments: &[(0.0, 0.9), (0.0, 0.6), (0.0, 0.9)], rows: 3 }),
        ('F', LineGlyph { segments: &[(0.0, 0.9), (0.0, 0.6)], rows: 2 }),
        ('G', LineGlyph { segments: &[(0.05, 0.95), (0.0, 0.5), (0.5, 1.0)], rows: 3 }),
        ('H', LineGlyph { segments: &[(0.0, 0.4), (0.6, 1.0), (0.0, 1.0)], rows: 3 }),
        ('I', LineGlyph { segments: &[(0.3, 0.7)], rows: 1 }),
        ('J', LineGlyph { segments: &[(0.3, 0.8), (0.2, 0.6)], rows: 2 }),
        ('K', LineGlyph { segments: &[(0.0, 0.5), (0.25, 0.75), (0.5, 1.0)], rows: 3 }),
        ('L', LineGlyph { segments: &[(0.0, 0.3)], rows: 1 }),
        ('M', LineGlyph { segments: &[(0.0, 0.3), (0.35, 0.65), (0.7, 1.0)], rows: 3 }),
        ('N', LineGlyph { segments: &[(0.0, 0.5), (0.5, 1.0)], rows: 2 }),
        ('O', LineGlyph { segments: &[(0.05, 0.95)], rows: 1 }),
        ('P', LineGlyph { segments: &[(0.0, 0.7), (0.0, 0.5)], rows: 2 }),
        ('Q', LineGlyph { segments: &[(0.3, 1.0), (0.05, 0.75)], rows: 2 }),
        ('R', LineGlyph { segments: &[(0.0, 0.6)], rows: 1 }),
        ('S', LineGlyph { segments: &[(0.05, 0.7), (0.3, 0.95), (0.1, 0.8)], rows: 3 }),
        ('T', LineGlyph { segments: &[(0.2, 0.8), (0.1, 0.6)], rows: 2 }),
        ('U', LineGlyph { segments: &[(0.0, 0.5), (0.5, 1.0)], rows: 2 }),
        ('V', LineGlyph { segments: &[(0.0, 0.5), (0.5, 1.0)], rows: 2 }),
        ('W', LineGlyph { segments: &[(0.0, 0.3), (0.35, 0.65), (0.7, 1.0)], rows: 3 }),
        ('X', LineGlyph { segments: &[(0.0, 0.5), (0.5, 1.0), (0.15, 0.85)], rows: 3 }),
        ('Y', LineGlyph { segments: &[(0.0, 0.5), (0.5, 1.0)], rows: 2 }),
        ('Z', LineGlyph { segments: &[(0.0, 0.9), (0.1, 1.0), (0.0, 0.7)], rows: 3 }),
        ('0', LineGlyph { segments: &[(0.1, 0.9)], rows: 1 }),
        ('1', LineGlyph { segments: &[(0.45, 0.55)], rows: 1 }),
        ('2', LineGlyph { segments: &[(0.0, 0.6), (0.4, 1.0)], rows: 2 }),
        ('3', LineGlyph { segments: &[(0.2, 0.8), (0.4, 1.0)], rows: 2 }),
        ('4', LineGlyph { segments: &[(0.0, 0.3), (0.7, 1.0)], rows: 2 }),
        ('5', LineGlyph { segments: &[(0.0, 0.5), (0.5, 1.0)], rows: 2 }),
        ('6', LineGlyph { segments: &[(0.1, 0.7)], rows: 1 }),
        ('7', LineGlyph { segments: &[(0.3, 1.0), (0.0, 0.4)], rows: 2 }),
        ('8', LineGlyph { segments: &[(0.2, 0.8)], rows: 1 }),
        ('9', LineGlyph { segments: &[(0.3, 0.9)], rows: 1 }),
        ('.', LineGlyph { segments: &[(0.48, 0.52)], rows: 1 }),
        (',', LineGlyph { segments: &[(0.45, 0.55)], rows: 1 }),
        ('?', LineGlyph { segments: &[(0.2, 0.7), (0.48, 0.52)], rows: 2 }),
        ('!', LineGlyph { segments: &[(0.48, 0.52), (0.47, 0.53)], rows: 2 }),
        (':', LineGlyph { segments: &[(0.47, 0.53), (0.47, 0.53)], rows: 2 }),
        (';', LineGlyph { segments: &[(0.47, 0.53), (0.45, 0.55)], rows: 2 }),
        (' ', LineGlyph { segments: &[], rows: 0 }),
    ];
    entries.iter().copied().collect()
});
