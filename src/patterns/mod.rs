// src/patterns/mod.rs

//! Static character-to-pattern tables for every typeface family.
//!
//! Tables are process-wide constants built once on first access. Lookup is
//! total: an exact match is tried first, then the lowercase form, then the
//! space entry. Every table defines a space pattern with zero visual
//! footprint and nonzero advance, so an unknown character always resolves
//! to something drawable (possibly invisibly).

pub mod grid;
pub mod ricetta;
pub mod segment;
pub mod vitkovac;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

/// A row-major binary cell matrix. Rows may differ in length across glyphs
/// of the same family (narrow letters such as `i`).
pub type GridPattern = &'static [&'static [u8]];

/// A 1-D sequence of integer height levels; 0 means no mark.
pub type LevelPattern = &'static [u8];

/// Resolves a character against a family table with case and space
/// fallback.
pub fn lookup<'a, T>(table: &'a HashMap<char, T>, c: char) -> &'a T {
    table
        .get(&c)
        .or_else(|| table.get(&c.to_ascii_lowercase()))
        .or_else(|| table.get(&' '))
        .expect("every pattern table defines a space entry")
}
