// src/patterns/segment.rs

//! Tiered-height segment tables: epetri (bottom-anchored waveform bars) and
//! midis-v (evenly distributed vertical segments).
//!
//! Levels run 0..=3: absent, short, medium, tall. Epetri keeps one bar per
//! column so a word scans as a readable waveform; uppercase variants shift
//! the heights rather than the layout.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::LevelPattern;

pub static EPETRI: Lazy<HashMap<char, LevelPattern>> = Lazy::new(|| {
    let entries: &[(char, LevelPattern)] = &[
        ('a', &[3, 1, 0, 3]),
        ('b', &[3, 1, 1, 0]),
        ('c', &[0, 3, 1, 1]),
        ('d', &[1, 1, 1, 3]),
        ('e', &[3, 1, 0, 0]),
        ('f', &[3, 1, 2]),
        ('g', &[1, 2, 0]),
        ('h', &[3, 1, 1, 1]),
        ('i', &[1, 1, 1]),
        ('j', &[0, 1, 1]),
        ('k', &[1, 3, 1, 0]),
        ('l', &[1, 1, 0, 0]),
        ('m', &[3, 1, 2, 1, 3]),
        ('n', &[3, 1, 1, 3]),
        ('o', &[0, 3, 1, 0]),
        ('p', &[3, 1, 2, 1]),
        ('q', &[1, 2, 1, 3]),
        ('r', &[1, 3, 2, 1]),
        ('s', &[0, 1, 3, 2]),
        ('t', &[2, 3, 1, 2]),
        ('u', &[1, 0, 0, 1]),
        ('v', &[1, 0, 1, 0]),
        ('w', &[1, 0, 2, 0, 1]),
        ('x', &[0, 1, 3]),
        ('y', &[1, 0, 1, 3]),
        ('z', &[2, 1, 1, 0]),
        ('A', &[3, 2, 0, 3]),
        ('B', &[3, 2, 2, 0]),
        ('C', &[0, 3, 2, 1]),
        ('D', &[2, 1, 1, 3]),
        ('E', &[3, 2, 0, 0]),
        ('F', &[3, 2, 3]),
        ('G', &[2, 3, 0]),
        ('H', &[3, 2, 1, 2]),
        ('I', &[2, 1, 2]),
        ('J', &[0, 2, 2]),
        ('K', &[2, 3, 2, 0]),
        ('L', &[2, 1, 0, 0]),
        ('M', &[3, 2, 3, 2, 3]),
        ('N', &[3, 2, 2, 3]),
        ('O', &[0, 3, 2, 0]),
        ('P', &[3, 2, 3, 1]),
        ('Q', &[2, 3, 1, 3]),
        ('R', &[2, 3, 3, 1]),
        ('S', &[0, 2, 3, 3]),
        ('T', &[3, 3, 2, 3]),
        ('U', &[2, 0, 0, 2]),
        ('V', &[2, 0, 2, 0]),
        ('W', &[2, 0, 3, 0, 2]),
        ('X', &[0, 2, 3]),
        ('Y', &[2, 0, 2, 3]),
        ('Z', &[3, 2, 1, 0]),
        ('0', &[1, 3, 1]),
        ('1', &[3]),
        ('2', &[0, 2, 1, 3]),
        ('3', &[0, 3, 0, 3]),
        ('4', &[1, 3, 0, 1]),
        ('5', &[3, 0, 1, 3]),
        ('6', &[3, 1, 3]),
        ('7', &[0, 0, 2, 1]),
        ('8', &[2, 3, 2]),
        ('9', &[3, 1, 0, 2]),
        ('.', &[1]),
        (',', &[1]),
        ('?', &[0, 3, 1, 1]),
        ('!', &[3, 0, 1]),
        (':', &[1, 0, 1]),
        (';', &[1, 0, 1]),
        (' ', &[0]),
    ];
    entries.iter().copied().collect()
});

pub static MIDIS_V: Lazy<HashMap<char, LevelPattern>> = Lazy::new(|| {
    let entries: &[(char, LevelPattern)] = &[
        ('a', &[1, 0]),
        ('b', &[1, 0]),
        ('c', &[1, 0]),
        ('d', &[1, 0]),
        ('e', &[1, 0]),
        ('f', &[1, 0]),
        ('g', &[1, 0]),
        ('h', &[1, 0]),
        ('i', &[1]),
        ('j', &[0, 1]),
        ('k', &[1, 0]),
        ('l', &[1, 0]),
        ('m', &[1, 1, 1]),
        ('n', &[1, 1, 1]),
        ('o', &[1, 1, 1]),
        ('p', &[1, 1]),
        ('q', &[1, 1, 1]),
        ('r', &[1]),
        ('s', &[0, 1, 2]),
        ('t', &[2, 1, 1]),
        ('u', &[1, 0]),
        ('v', &[1, 1, 1, 1]),
        ('w', &[1, 1, 1]),
        ('x', &[1, 1]),
        ('y', &[1, 2]),
        ('z', &[1, 1, 0]),
        ('A', &[2, 0]),
        ('B', &[2, 0]),
        ('C', &[2, 0]),
        ('D', &[2, 0]),
        ('E', &[2, 0]),
        ('F', &[2, 0]),
        ('G', &[2, 0]),
        ('H', &[2, 0]),
        ('I', &[2]),
        ('J', &[0, 2]),
        ('K', &[2, 0]),
        ('L', &[2, 0]),
        ('M', &[2, 2, 2]),
        ('N', &[2, 2, 2]),
        ('O', &[2, 2, 2]),
        ('P', &[2, 2]),
        ('Q', &[2, 2, 2]),
        ('R', &[2]),
        ('S', &[0, 2, 3]),
        ('T', &[3, 2, 2]),
        ('U', &[2, 0]),
        ('V', &[2, 2, 2, 2]),
        ('W', &[2, 2, 2]),
        ('X', &[2, 2]),
        ('Y', &[2, 3]),
        ('Z', &[2, 2, 0]),
        ('0', &[1, 2, 1]),
        ('1', &[3]),
        ('2', &[0, 2, 3]),
        ('3', &[1, 2, 1]),
        ('4', &[2, 0, 1]),
        ('5', &[2, 1, 2]),
        ('6', &[2, 2, 1]),
        ('7', &[3, 1, 0]),
        ('8', &[1, 3, 1]),
        ('9', &[1, 2, 2]),
        ('.', &[1]),
        (',', &[1]),
        ('?', &[0, 2, 1]),
        ('!', &[2, 0]),
        (':', &[1, 0, 1]),
        (';', &[1, 0, 1]),
        (' ', &[0]),
    ];
    entries.iter().copied().collect()
});
