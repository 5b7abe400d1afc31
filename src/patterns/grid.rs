// src/patterns/grid.rs

//! Cell-matrix tables: the kvar block-grid variants, the kvar vertical and
//! square sets, and the diagonal-movement midis-h set.
//!
//! Midis-h glyphs obey the typeface's authoring rule that filled cells only
//! ever touch diagonally; the renderer trusts the table and performs no
//! adjacency validation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{GridPattern, LevelPattern};

/// Full-block 5-row letterforms.
pub static KVAR_H_BRUT: Lazy<HashMap<char, GridPattern>> = Lazy::new(|| {
    let entries: &[(char, GridPattern)] = &[
        ('a', &[&[1, 1, 1, 1], &[1, 0, 0, 1], &[1, 1, 1, 1], &[1, 0, 0, 1], &[1, 0, 0, 1]]),
        ('b', &[&[1, 1, 1, 0], &[1, 0, 0, 1], &[1, 1, 1, 0], &[1, 0, 0, 1], &[1, 1, 1, 0]]),
        ('c', &[&[0, 1, 1, 1], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[0, 1, 1, 1]]),
        ('d', &[&[1, 1, 1, 0], &[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 1, 1, 0]]),
        ('e', &[&[1, 1, 1, 1], &[1, 0, 0, 0], &[1, 1, 1, 0], &[1, 0, 0, 0], &[1, 1, 1, 1]]),
        ('f', &[&[1, 1, 1, 1], &[1, 0, 0, 0], &[1, 1, 1, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]]),
        ('g', &[&[0, 1, 1, 1], &[1, 0, 0, 0], &[1, 0, 1, 1], &[1, 0, 0, 1], &[0, 1, 1, 1]]),
        ('h', &[&[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 1, 1, 1], &[1, 0, 0, 1], &[1, 0, 0, 1]]),
        ('i', &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0], &[0, 1, 0], &[1, 1, 1]]),
        ('j', &[&[0, 0, 1], &[0, 0, 1], &[0, 0, 1], &[1, 0, 1], &[0, 1, 0]]),
        ('k', &[&[1, 0, 0, 1], &[1, 0, 1, 0], &[1, 1, 0, 0], &[1, 0, 1, 0], &[1, 0, 0, 1]]),
        ('l', &[&[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 1, 1, 1]]),
        ('m', &[&[1, 0, 0, 1], &[1, 1, 1, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 0, 0, 1]]),
        ('n', &[&[1, 0, 0, 1], &[1, 1, 0, 1], &[1, 0, 1, 1], &[1, 0, 0, 1], &[1, 0, 0, 1]]),
        ('o', &[&[0, 1, 1, 0], &[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[0, 1, 1, 0]]),
        ('p', &[&[1, 1, 1, 0], &[1, 0, 0, 1], &[1, 1, 1, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]]),
        ('q', &[&[0, 1, 1, 0], &[1, 0, 0, 1], &[1, 0, 1, 1], &[0, 1, 1, 0], &[0, 0, 0, 1]]),
        ('r', &[&[1, 1, 1, 0], &[1, 0, 0, 1], &[1, 1, 1, 0], &[1, 0, 1, 0], &[1, 0, 0, 1]]),
        ('s', &[&[0, 1, 1, 1], &[1, 0, 0, 0], &[0, 1, 1, 0], &[0, 0, 0, 1], &[1, 1, 1, 0]]),
        ('t', &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]),
        ('u', &[&[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[0, 1, 1, 0]]),
        ('v', &[&[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[0, 1, 1, 0], &[0, 1, 0, 0]]),
        ('w', &[&[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 1, 1, 1], &[1, 0, 0, 1]]),
        ('x', &[&[1, 0, 0, 1], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[1, 0, 0, 1]]),
        ('y', &[&[1, 0, 0, 1], &[0, 1, 1, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]]),
        ('z', &[&[1, 1, 1, 1], &[0, 0, 1, 0], &[0, 1, 0, 0], &[1, 0, 0, 0], &[1, 1, 1, 1]]),
        (' ', &[&[0, 0], &[0, 0], &[0, 0], &[0, 0], &[0, 0]]),
    ];
    entries.iter().copied().collect()
});

/// Sparse horizontal-band variant of the block grid.
pub static KVAR_H_TITE: Lazy<HashMap<char, GridPattern>> = Lazy::new(|| {
    let entries: &[(char, GridPattern)] = &[
        ('a', &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
        ('b', &[&[1, 1, 1], &[0, 0, 0], &[1, 1, 1], &[0, 0, 0], &[1, 1, 1]]),
        ('c', &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1]]),
        ('d', &[&[1, 1, 1], &[0, 0, 0], &[0, 0, 0], &[0, 0, 0], &[1, 1, 1]]),
        ('e', &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[1, 1, 1], &[0, 0, 0, 0], &[1, 1, 1, 1]]),
        ('f', &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
        ('g', &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 1, 1], &[0, 0, 0, 0], &[1, 1, 1, 1]]),
        ('h', &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
        ('i', &[&[1, 1, 1], &[0, 0, 0], &[0, 0, 0], &[0, 0, 0], &[1, 1, 1]]),
        ('j', &[&[0, 0, 1], &[0, 0, 0], &[0, 0, 0], &[0, 0, 0], &[1, 1, 0]]),
        ('k', &[&[0, 0, 0, 0], &[0, 1, 0, 0], &[1, 0, 0, 0], &[0, 1, 0, 0], &[0, 0, 0, 0]]),
        ('l', &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1]]),
        ('m', &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
        ('n', &[&[0, 0, 0, 0], &[1, 0, 0, 0], &[0, 1, 1, 0], &[0, 0, 0, 1], &[0, 0, 0, 0]]),
        ('o', &[&[1, 1, 1, 0], &[0, 0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 1], &[1, 1, 1, 0]]),
        ('p', &[&[1, 1, 1], &[0, 0, 0], &[1, 1, 1], &[0, 0, 0], &[0, 0, 0]]),
        ('q', &[&[1, 1, 1, 0], &[0, 0, 0, 1], &[0, 1, 1, 1], &[1, 1, 1, 0], &[0, 0, 0, 1]]),
        ('r', &[&[1, 1, 1], &[0, 0, 0], &[1, 1, 1], &[0, 1, 0], &[0, 0, 1]]),
        ('s', &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[1, 1, 1, 1]]),
        ('t', &[&[1, 1, 1], &[0, 0, 0], &[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]),
        ('u', &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 0]]),
        ('v', &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 0, 0], &[0, 1, 0, 0]]),
        ('w', &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0]]),
        ('x', &[&[0, 0, 0, 0], &[1, 1, 0, 0], &[1, 1, 0, 0], &[1, 1, 0, 0], &[0, 0, 0, 0]]),
        ('y', &[&[0, 0, 0, 0], &[1, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]]),
        ('z', &[&[1, 1, 1, 1], &[0, 1, 0, 0], &[1, 0, 0, 0], &[0, 0, 1, 0], &[1, 1, 1, 1]]),
        (' ', &[&[0, 0], &[0, 0], &[0, 0], &[0, 0], &[0, 0]]),
    ];
    entries.iter().copied().collect()
});

/// One vertical bar per line slot; 1 marks a drawn bar.
pub static KVAR_V: Lazy<HashMap<char, LevelPattern>> = Lazy::new(|| {
    let entries: &[(char, LevelPattern)] = &[
        ('a', &[1, 1, 1, 1, 1]),
        ('b', &[1, 1, 1, 1, 1]),
        ('c', &[1, 1, 0, 1, 1]),
        ('d', &[1, 1, 1, 1, 1]),
        ('e', &[1, 1, 0, 1, 1]),
        ('f', &[1, 1, 0, 1, 0]),
        ('g', &[1, 1, 0, 1, 1]),
        ('h', &[1, 0, 1, 0, 1]),
        ('i', &[1]),
        ('j', &[1]),
        ('k', &[1, 0, 1, 0, 1]),
        ('l', &[1]),
        ('m', &[1, 1, 0, 1, 1]),
        ('n', &[1, 1, 0, 1, 1]),
        ('o', &[1, 1, 0, 1, 1]),
        ('p', &[1, 1, 1, 0, 0]),
        ('q', &[1, 1, 0, 1, 1]),
        ('r', &[1, 1, 1, 1, 1]),
        ('s', &[1, 1, 1, 1, 1]),
        ('t', &[1]),
        ('u', &[1, 0, 0, 0, 1]),
        ('v', &[1, 0, 0, 0, 1]),
        ('w', &[1, 1, 0, 1, 1]),
        ('x', &[1, 1, 1, 1, 1]),
        ('y', &[1, 0, 1, 0, 1]),
        ('z', &[1, 1, 1, 1, 1]),
        (' ', &[0]),
    ];
    entries.iter().copied().collect()
});

/// Compact square-grid letterforms, at most 2x2 cells.
pub static KVAR_SQ: Lazy<HashMap<char, GridPattern>> = Lazy::new(|| {
    let entries: &[(char, GridPattern)] = &[
        ('a', &[&[1, 1], &[1, 1]]),
        ('b', &[&[1, 1], &[1, 0]]),
        ('c', &[&[1, 1], &[1, 0]]),
        ('d', &[&[1, 1], &[0, 1]]),
        ('e', &[&[1, 1], &[1, 0]]),
        ('f', &[&[1, 1], &[1, 0]]),
        ('g', &[&[1, 1], &[0, 1]]),
        ('h', &[&[1, 0], &[1, 1]]),
        ('i', &[&[1]]),
        ('j', &[&[1]]),
        ('k', &[&[1, 0], &[1, 1]]),
        ('l', &[&[1], &[1]]),
        ('m', &[&[1, 1], &[1, 1]]),
        ('n', &[&[1, 0], &[1, 1]]),
        ('o', &[&[1, 1], &[1, 1]]),
        ('p', &[&[1, 1], &[1, 0]]),
        ('q', &[&[1, 1], &[0, 1]]),
        ('r', &[&[1, 1], &[1, 0]]),
        ('s', &[&[1, 1], &[0, 1]]),
        ('t', &[&[1]]),
        ('u', &[&[1, 0], &[1, 1]]),
        ('v', &[&[1, 0], &[1, 1]]),
        ('w', &[&[1, 1], &[1, 1]]),
        ('x', &[&[1, 1], &[1, 1]]),
        ('y', &[&[1, 0], &[0, 1]]),
        ('z', &[&[1, 1], &[1, 1]]),
        (' ', &[&[0]]),
    ];
    entries.iter().copied().collect()
});

/// Horizontal-rectangle glyphs built from diagonal movement.
pub static MIDIS_H: Lazy<HashMap<char, GridPattern>> = Lazy::new(|| {
    let entries: &[(char, GridPattern)] = &[
        ('a', &[&[1, 0, 1], &[0, 1, 0]]),
        ('b', &[&[1, 1, 0], &[0, 0, 1]]),
        ('c', &[&[1, 1, 0]]),
        ('d', &[&[0, 1, 1], &[1, 0, 0]]),
        ('e', &[&[1, 0, 1], &[0, 1, 0]]),
        ('f', &[&[1, 1, 0], &[0, 0, 1]]),
        ('g', &[&[1, 0, 1]]),
        ('h', &[&[1, 0, 0], &[0, 1, 1]]),
        ('i', &[&[1]]),
        ('j', &[&[0, 1, 0]]),
        ('k', &[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]),
        ('l', &[&[1, 0, 0]]),
        ('m', &[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]),
        ('n', &[&[1, 0, 1], &[0, 1, 0]]),
        ('o', &[&[0, 1, 0], &[1, 0, 1], &[0, 1, 0]]),
        ('p', &[&[1, 1, 0], &[0, 0, 1]]),
        ('q', &[&[0, 1, 1], &[1, 0, 0]]),
        ('r', &[&[1, 1, 0], &[0, 0, 1]]),
        ('s', &[&[0, 1, 1], &[1, 0, 0], &[0, 1, 1]]),
        ('t', &[&[1, 0, 1]]),
        ('u', &[&[1, 0, 1], &[0, 1, 0]]),
        ('v', &[&[1, 0, 1], &[0, 1, 0]]),
        ('w', &[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]),
        ('x', &[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]),
        ('y', &[&[1, 0, 1], &[0, 1, 0]]),
        ('z', &[&[1, 1, 0], &[0, 0, 1], &[1, 1, 0]]),
        ('A', &[&[0, 1, 0], &[1, 0, 1], &[1, 1, 1]]),
        ('B', &[&[1, 1, 0], &[1, 0, 1], &[1, 1, 0]]),
        ('C', &[&[0, 1, 1], &[1, 0, 0], &[0, 1, 1]]),
        ('D', &[&[1, 1, 0], &[1, 0, 1], &[1, 1, 0]]),
        ('E', &[&[1, 1, 1], &[1, 0, 0], &[1, 1, 1]]),
        ('F', &[&[1, 1, 1], &[1, 0, 0], &[1, 0, 0]]),
        ('G', &[&[0, 1, 1], &[1, 0, 0], &[1, 0, 1]]),
        ('H', &[&[1, 0, 1], &[1, 1, 1], &[1, 0, 1]]),
        ('I', &[&[1, 1, 1], &[0, 1, 0], &[1, 1, 1]]),
        ('J', &[&[1, 1, 1], &[0, 0, 1], &[1, 1, 0]]),
        ('K', &[&[1, 0, 1], &[1, 1, 0], &[1, 0, 1]]),
        ('L', &[&[1, 0, 0], &[1, 0, 0], &[1, 1, 1]]),
        ('M', &[&[1, 0, 1], &[1, 1, 1], &[1, 0, 1]]),
        ('N', &[&[1, 0, 1], &[1, 1, 1], &[1, 0, 1]]),
        ('O', &[&[0, 1, 0], &[1, 0, 1], &[0, 1, 0]]),
        ('P', &[&[1, 1, 0], &[1, 0, 1], &[1, 0, 0]]),
        ('Q', &[&[0, 1, 0], &[1, 0, 1], &[0, 1, 1]]),
        ('R', &[&[1, 1, 0], &[1, 0, 1], &[1, 0, 1]]),
        ('S', &[&[0, 1, 1], &[0, 1, 0], &[1, 1, 0]]),
        ('T', &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
        ('U', &[&[1, 0, 1], &[1, 0, 1], &[0, 1, 0]]),
        ('V', &[&[1, 0, 1], &[1, 0, 1], &[0, 1, 0]]),
        ('W', &[&[1, 0, 1], &[1, 0, 1], &[1, 1, 1]]),
        ('X', &[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]),
        ('Y', &[&[1, 0, 1], &[0, 1, 0], &[0, 1, 0]]),
        ('Z', &[&[1, 1, 1], &[0, 1, 0], &[1, 1, 1]]),
        ('0', &[&[0, 1, 0], &[1, 0, 1], &[0, 1, 0]]),
        ('1', &[&[1]]),
        ('2', &[&[0, 1, 1], &[0, 1, 0], &[1, 1, 0]]),
        ('3', &[&[0, 1, 1], &[0, 1, 1], &[0, 1, 1]]),
        ('4', &[&[1, 0, 1], &[0, 1, 1], &[0, 0, 1]]),
        ('5', &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
        ('6', &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]),
        ('7', &[&[1, 1, 1], &[0, 0, 1], &[0, 0, 1]]),
        ('8', &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]),
        ('9', &[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]),
        (' ', &[&[0]]),
    ];
    entries.iter().copied().collect()
});
