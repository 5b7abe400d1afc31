// src/patterns/tests.rs

use super::*;
use test_log::test;

#[test]
fn every_family_defines_a_space_entry() {
    assert!(grid::KVAR_H_BRUT.contains_key(&' '));
    assert!(grid::KVAR_H_TITE.contains_key(&' '));
    assert!(grid::KVAR_V.contains_key(&' '));
    assert!(grid::KVAR_SQ.contains_key(&' '));
    assert!(grid::MIDIS_H.contains_key(&' '));
    assert!(segment::EPETRI.contains_key(&' '));
    assert!(segment::MIDIS_V.contains_key(&' '));
    assert!(ricetta::RICETTA.contains_key(&' '));
    assert!(vitkovac::VITKOVAC_H.contains_key(&' '));
    assert!(vitkovac::VITKOVAC_V.contains_key(&' '));
}

#[test]
fn space_entries_have_no_visual_footprint() {
    assert!(grid::KVAR_H_BRUT[&' '].iter().all(|row| row.iter().all(|&c| c == 0)));
    assert!(segment::EPETRI[&' '].iter().all(|&level| level == 0));
    assert!(segment::MIDIS_V[&' '].iter().all(|&level| level == 0));
    assert!(ricetta::RICETTA[&' '].segments.is_empty());
    let sp = &vitkovac::VITKOVAC_H[&' '];
    assert!(sp.up.is_empty() && sp.down.is_empty());
}

#[test]
fn lookup_falls_back_exact_then_lowercase_then_space() {
    // 'Q' exists in the epetri table, so the exact match wins.
    assert_eq!(lookup(&segment::EPETRI, 'Q'), &segment::EPETRI[&'Q']);
    // The block grid only defines lowercase; 'Q' resolves to 'q'.
    let q = lookup(&grid::KVAR_H_BRUT, 'Q');
    assert_eq!(q, &grid::KVAR_H_BRUT[&'q']);
    // Entirely unknown characters resolve to the space entry.
    let unknown = lookup(&grid::KVAR_H_BRUT, '@');
    assert_eq!(unknown, &grid::KVAR_H_BRUT[&' ']);
}

#[test]
fn block_grid_glyphs_are_five_rows_tall() {
    for (c, pattern) in grid::KVAR_H_BRUT.iter() {
        assert_eq!(pattern.len(), 5, "glyph '{}' is not 5 rows", c);
    }
    for (c, pattern) in grid::KVAR_H_TITE.iter() {
        assert_eq!(pattern.len(), 5, "glyph '{}' is not 5 rows", c);
    }
}

#[test]
fn ricetta_intervals_are_ordered_unit_fractions() {
    for (c, glyph) in ricetta::RICETTA.iter() {
        for &(start, end) in glyph.segments {
            assert!(
                (0.0..=1.0).contains(&start) && (0.0..=1.0).contains(&end) && start < end,
                "glyph '{}' has a degenerate interval ({}, {})",
                c,
                start,
                end
            );
        }
        assert_eq!(
            glyph.rows,
            glyph.segments.len(),
            "glyph '{}' row count disagrees with its interval count",
            c
        );
    }
}

#[test]
fn carve_flags_cover_s_and_z_in_both_cases() {
    for c in ['s', 'z', 'S', 'Z'] {
        assert!(
            vitkovac::VITKOVAC_H[&c].carve_main,
            "'{}' must carve its main line",
            c
        );
    }
    // The carve gap sits strictly inside the glyph for every interval.
    for c in ['s', 'z', 'x'] {
        let (start, end) = vitkovac::carve_interval(c);
        assert!(0.0 < start && start < end && end < 1.0);
    }
}

#[test]
fn vitkovac_alteration_positions_stay_inside_the_glyph() {
    for (c, glyph) in vitkovac::VITKOVAC_H.iter() {
        for &p in glyph.up.iter().chain(glyph.down) {
            assert!(p < glyph.width, "glyph '{}' mark at {} exceeds width", c, p);
        }
    }
    for (c, glyph) in vitkovac::VITKOVAC_V.iter() {
        for &p in glyph.left.iter().chain(glyph.right) {
            assert!(p < glyph.height, "glyph '{}' mark at {} exceeds height", c, p);
        }
    }
}
