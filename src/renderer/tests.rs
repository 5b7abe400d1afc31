// src/renderer/tests.rs

#[cfg(test)]
mod render_tests {
    use crate::config::{IndexStyle, RenderConfig, Typeface, MAX_GLYPHS};
    use crate::primitive::{Primitive, RenderResult};
    use crate::renderer::render;
    use test_log::test;

    const EPS: f32 = 1e-3;

    fn config_for(typeface: Typeface) -> RenderConfig {
        RenderConfig {
            typeface,
            ..RenderConfig::default()
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    /// Main-line segments of a horizontal dual-axis render: regular
    /// thickness, sitting on the default main-line level.
    fn main_line_segments(result: &RenderResult) -> Vec<&Primitive> {
        // Default geometry: unit 10, alteration length 25, main line at 35,
        // regular stroke 0.25 -> thickness 2.5.
        result
            .primitives
            .iter()
            .filter(|p| close(p.height, 2.5) && close(p.y, 35.0))
            .collect()
    }

    #[test]
    fn block_grid_hi_scenario() {
        // 'h' is a 4-column matrix, 'i' a 3-column one; unit size is 12 and
        // the inter-glyph gap 0.2 of a unit.
        let result = render("hi", &config_for(Typeface::KvarHBrut));
        assert!(
            close(result.width, (4.0 + 3.0) * 12.0 + 2.4),
            "width was {}",
            result.width
        );
        assert!(close(result.height, 60.0), "height was {}", result.height);
        assert!(!result.is_empty());
    }

    #[test]
    fn biometric_mode_removes_block_grid_spacing() {
        let mut config = config_for(Typeface::KvarHBrut);
        config.biometric = true;
        let result = render("hi", &config);
        assert!(close(result.width, 84.0), "width was {}", result.width);
    }

    #[test]
    fn space_in_segment_families_is_empty_with_unit_advance() {
        for (typeface, unit) in [
            (Typeface::Epetri, 4.0),
            (Typeface::MidisV, 8.0),
            (Typeface::KvarV, 12.0),
        ] {
            let result = render(" ", &config_for(typeface));
            assert!(
                result.is_empty(),
                "{:?} drew primitives for a space",
                typeface
            );
            assert!(
                close(result.width, unit),
                "{:?} advance was {}, expected {}",
                typeface,
                result.width,
                unit
            );
        }
    }

    #[test]
    fn every_alphabet_character_renders_nonempty() {
        let faces = [
            Typeface::KvarHBrut,
            Typeface::KvarHTite,
            Typeface::KvarV,
            Typeface::KvarSq,
            Typeface::Epetri,
            Typeface::MidisH,
            Typeface::MidisV,
            Typeface::Ricetta,
            Typeface::VitkovacH,
            Typeface::VitkovacV,
        ];
        for typeface in faces {
            let config = config_for(typeface);
            for c in 'a'..='z' {
                let result = render(&c.to_string(), &config);
                assert!(
                    !result.is_empty(),
                    "{:?} rendered '{}' as nothing",
                    typeface,
                    c
                );
            }
        }
    }

    #[test]
    fn rendering_is_deterministic_for_every_typeface() {
        let faces = [
            Typeface::KvarHBrut,
            Typeface::KvarHTite,
            Typeface::KvarV,
            Typeface::KvarSq,
            Typeface::Epetri,
            Typeface::MidisH,
            Typeface::MidisV,
            Typeface::Ricetta,
            Typeface::VitkovacH,
            Typeface::VitkovacV,
            Typeface::VisualPoetry,
        ];
        let text = "determinism matters here";
        for typeface in faces {
            let config = config_for(typeface);
            assert_eq!(
                render(text, &config),
                render(text, &config),
                "{:?} diverged between identical calls",
                typeface
            );
        }
    }

    #[test]
    fn empty_input_renders_the_default_text() {
        let config = config_for(Typeface::Epetri);
        assert_eq!(render("", &config), render("hello", &config));
    }

    #[test]
    fn oversized_input_is_truncated() {
        let config = config_for(Typeface::KvarV);
        let long: String = std::iter::repeat('a').take(MAX_GLYPHS + 100).collect();
        let bounded: String = std::iter::repeat('a').take(MAX_GLYPHS).collect();
        assert_eq!(render(&long, &config), render(&bounded, &config));
    }

    #[test]
    fn scale_factor_scales_the_bounding_box() {
        let mut config = config_for(Typeface::KvarSq);
        let base = render("abc", &config);
        config.scale = 2.0;
        let doubled = render("abc", &config);
        assert!(close(doubled.width, base.width * 2.0));
        assert!(close(doubled.height, base.height * 2.0));
    }

    #[test]
    fn carved_glyphs_split_the_main_line_in_two() {
        for c in ["s", "z", "S", "Z"] {
            let result = render(c, &config_for(Typeface::VitkovacH));
            let segments = main_line_segments(&result);
            assert_eq!(
                segments.len(),
                2,
                "'{}' main line should be exactly two segments",
                c
            );
            let first = segments[0];
            let second = segments[1];
            // The gap lies strictly inside the glyph.
            assert!(first.x + first.width < second.x, "'{}' has no gap", c);
            assert!(close(first.x, 0.0));
            assert!(first.x + first.width > 0.0);
            assert!(close(second.x + second.width, result.width));
        }
    }

    #[test]
    fn uncarved_glyphs_keep_a_continuous_main_line() {
        let result = render("a", &config_for(Typeface::VitkovacH));
        let segments = main_line_segments(&result);
        // A single glyph has no boundary neighbors, so one stretch between
        // the stub insets.
        assert_eq!(segments.len(), 1);
        assert!(close(segments[0].width, 34.0));
    }

    #[test]
    fn boundary_styles_are_mutually_exclusive_horizontal() {
        let mut config = config_for(Typeface::VitkovacH);

        // Thickened boundary stubs, no ticks.
        let thickened = render("ab", &config);
        let stubs = thickened
            .primitives
            .iter()
            .filter(|p| close(p.height, 5.0))
            .count();
        let ticks = thickened
            .primitives
            .iter()
            .filter(|p| p.opacity == Some(0.7))
            .count();
        assert!(stubs > 0, "expected thickened boundary stubs");
        assert_eq!(ticks, 0);

        // Ticks, no thickened stubs.
        config.vitkovac.index_style = IndexStyle::Rectangle;
        let ticked = render("ab", &config);
        let stubs = ticked
            .primitives
            .iter()
            .filter(|p| close(p.height, 5.0) && p.opacity.is_none())
            .count();
        let ticks = ticked
            .primitives
            .iter()
            .filter(|p| p.opacity == Some(0.7))
            .count();
        assert_eq!(stubs, 0, "tick style must suppress boundary thickening");
        assert_eq!(ticks, 1, "two glyphs share exactly one boundary tick");
    }

    #[test]
    fn boundary_styles_are_mutually_exclusive_vertical() {
        let mut config = config_for(Typeface::VitkovacV);

        let thickened = render("ab", &config);
        let stubs = thickened
            .primitives
            .iter()
            .filter(|p| close(p.width, 5.0) && close(p.height, 3.0))
            .count();
        assert!(stubs > 0, "expected thickened boundary stubs");
        assert!(thickened
            .primitives
            .iter()
            .all(|p| p.opacity != Some(0.7)));

        config.vitkovac.index_style = IndexStyle::Rectangle;
        let ticked = render("ab", &config);
        let ticks = ticked
            .primitives
            .iter()
            .filter(|p| p.opacity == Some(0.7))
            .count();
        assert_eq!(ticks, 1);
        assert!(ticked
            .primitives
            .iter()
            .filter(|p| p.opacity.is_none())
            .all(|p| !(close(p.width, 5.0) && close(p.height, 3.0))));
    }

    #[test]
    fn narrow_tall_glyphs_get_extended_alteration_lines() {
        let result = render("i", &config_for(Typeface::VitkovacH));
        // Alteration length 25 plus the i-extension of half that.
        let extended = result
            .primitives
            .iter()
            .filter(|p| close(p.height, 37.5))
            .count();
        assert_eq!(extended, 2, "i carries one extended mark per side");
    }

    #[test]
    fn vertical_variant_lays_out_newline_columns_side_by_side() {
        let config = config_for(Typeface::VitkovacV);
        let one = render("ab", &config);
        let two = render("ab\ncd", &config);
        assert!(two.width > one.width);
        assert_eq!(one.height, two.height);
    }

    #[test]
    fn epetri_index_ticks_are_optional() {
        let mut config = config_for(Typeface::Epetri);
        let plain = render("abc", &config);
        assert!(plain.primitives.iter().all(|p| p.opacity != Some(0.6)));

        config.epetri.index = true;
        let ticked = render("abc", &config);
        // 'a' and 'b' start with a drawn column; 'c' starts empty and gets
        // no tick.
        let ticks = ticked
            .primitives
            .iter()
            .filter(|p| p.opacity == Some(0.6))
            .count();
        assert_eq!(ticks, 2, "one tick per glyph whose first column is drawn");
    }

    #[test]
    fn midis_h_connector_hints_only_in_biometric_mode() {
        let mut config = config_for(Typeface::MidisH);
        // 'a' stacks [1,0,1] over [0,1,0]: both top cells see a diagonal
        // neighbor below.
        let plain = render("a", &config);
        assert!(plain.primitives.iter().all(|p| p.opacity != Some(0.3)));

        config.biometric = true;
        let hinted = render("a", &config);
        let connectors = hinted
            .primitives
            .iter()
            .filter(|p| p.opacity == Some(0.3))
            .count();
        assert_eq!(connectors, 2);
    }

    #[test]
    fn ricetta_orientations_swap_the_layout_axes() {
        let mut config = config_for(Typeface::Ricetta);
        let horizontal = render("abc", &config);
        config.ricetta.orientation = crate::config::Orientation::Vertical;
        let vertical = render("abc", &config);
        assert!(close(horizontal.width, vertical.height));
        assert!(close(horizontal.height, vertical.width));
        assert_eq!(
            horizontal.primitives.len(),
            vertical.primitives.len()
        );
    }

    #[test]
    fn ricetta_compressed_spacing_shortens_the_stack() {
        let mut config = config_for(Typeface::Ricetta);
        let wide = render("abc", &config);
        config.ricetta.keep_spaces = false;
        let compressed = render("abc", &config);
        assert!(compressed.height < wide.height);
    }

    #[test]
    fn split_colors_reach_the_dual_axis_marks() {
        let mut config = config_for(Typeface::VitkovacH);
        config.vitkovac.split_colors = true;
        config.vitkovac.main_line_color = crate::color::Color::rgb(10, 0, 0);
        config.vitkovac.alteration_color = crate::color::Color::rgb(0, 10, 0);
        let result = render("a", &config);
        assert!(result
            .primitives
            .iter()
            .any(|p| p.fill == crate::color::Color::rgb(10, 0, 0)));
        assert!(result
            .primitives
            .iter()
            .any(|p| p.fill == crate::color::Color::rgb(0, 10, 0)));
    }

    #[test]
    fn case_falls_back_where_tables_are_lowercase_only() {
        let config = config_for(Typeface::KvarHBrut);
        assert_eq!(render("HELLO", &config), render("hello", &config));
    }

    #[test]
    fn uppercase_variants_differ_where_tables_define_them() {
        let config = config_for(Typeface::Epetri);
        assert_ne!(render("A", &config), render("a", &config));
    }
}
