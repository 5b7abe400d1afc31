// src/poetry/tests.rs

use super::*;
use crate::config::{PoetryMode, RenderConfig, TemplateKind, Typeface};
use test_log::test;

fn poetry_config(mode: PoetryMode) -> RenderConfig {
    let mut config = RenderConfig::default();
    config.typeface = Typeface::VisualPoetry;
    config.poetry.mode = mode;
    config
}

#[test]
fn composition_fills_the_fixed_canvas() {
    let config = poetry_config(PoetryMode::Scattered);
    let result = compose("words drift apart", &config);
    assert_eq!(result.width, CANVAS_WIDTH);
    assert_eq!(result.height, CANVAS_HEIGHT);
    assert!(!result.is_empty());
}

#[test]
fn every_mode_is_deterministic() {
    let text = "the quiet machine\nhums a second line";
    for mode in [
        PoetryMode::Scattered,
        PoetryMode::Layered,
        PoetryMode::Curved,
        PoetryMode::Spiral,
        PoetryMode::Concrete,
        PoetryMode::Template,
    ] {
        let config = poetry_config(mode);
        let first = compose(text, &config);
        let second = compose(text, &config);
        assert_eq!(first, second, "mode {:?} is not deterministic", mode);
    }
}

#[test]
fn every_template_is_deterministic_and_nonempty() {
    let text = "one two three four five six seven eight";
    for template in [
        TemplateKind::FallingWords,
        TemplateKind::HeartShape,
        TemplateKind::TreeGrowth,
        TemplateKind::WaveMotion,
        TemplateKind::Explosion,
        TemplateKind::RiverFlow,
    ] {
        let mut config = poetry_config(PoetryMode::Template);
        config.poetry.template = template;
        let first = compose(text, &config);
        assert_eq!(first, compose(text, &config));
        assert!(!first.is_empty(), "template {:?} drew nothing", template);
    }
}

#[test]
fn spiral_points_follow_the_archimedean_rule() {
    assert_eq!(spiral_point(0), (0.0, 20.0));
    assert_eq!(spiral_point(1), (0.5, 28.0));
    assert_eq!(spiral_point(2), (1.0, 36.0));
}

#[test]
fn biometric_scatter_differs_from_uniform_scatter() {
    let text = "flow against chance";
    let uniform = compose(text, &poetry_config(PoetryMode::Scattered));
    let mut config = poetry_config(PoetryMode::Scattered);
    config.biometric = true;
    let flowing = compose(text, &config);
    assert_ne!(uniform, flowing);
}

#[test]
fn layered_back_bands_carry_shadow_copies() {
    let config = poetry_config(PoetryMode::Layered);
    let result = compose("front line\nback line", &config);
    let shadows = result
        .primitives
        .iter()
        .filter(|p| p.fill == crate::color::Color::SHADOW_GRAY)
        .count();
    assert!(shadows > 0, "second depth band should cast a shadow copy");

    // A single line has no back band, hence no shadows.
    let single = compose("front line only", &config);
    assert!(single
        .primitives
        .iter()
        .all(|p| p.fill != crate::color::Color::SHADOW_GRAY));
}

#[test]
fn word_breaking_scatters_single_characters() {
    let mut config = poetry_config(PoetryMode::Scattered);
    config.poetry.word_breaking = true;
    let whole = compose("ab", &poetry_config(PoetryMode::Scattered));
    let broken = compose("ab", &config);
    // Two scattered characters land at two independently drawn positions,
    // so the layouts cannot coincide.
    assert_ne!(whole, broken);
}

#[test]
fn composition_word_count_is_bounded() {
    let many: Vec<String> = (0..crate::config::MAX_WORDS + 50)
        .map(|i| format!("w{}", i))
        .collect();
    let text = many.join(" ");
    let lines = bound_lines(&text);
    let total: usize = lines
        .iter()
        .map(|line| line.split_whitespace().count())
        .sum();
    assert_eq!(total, crate::config::MAX_WORDS);
}

#[test]
fn empty_input_composes_the_placeholder_phrase() {
    let lines = bound_lines("");
    assert_eq!(lines, vec!["visual poetry".to_string()]);
}

#[test]
fn semantic_concrete_reacts_to_pauses() {
    let mut config = poetry_config(PoetryMode::Concrete);
    config.poetry.semantic_spacing = true;
    let with_pause = compose("wait here. then go", &config);
    let without_pause = compose("wait here then go", &config);
    assert_ne!(with_pause, without_pause);
}

#[test]
fn placement_scales_and_rotates_origins() {
    let image = vec![crate::primitive::Primitive::rect(
        10.0,
        0.0,
        4.0,
        2.0,
        crate::color::Color::BLACK,
    )];
    let placed = Placement {
        tx: 100.0,
        ty: 50.0,
        rotate_deg: 90.0,
        scale: 2.0,
        ..Placement::default()
    }
    .apply(&image);
    assert_eq!(placed.len(), 1);
    let p = &placed[0];
    // (10, 0) scaled to (20, 0), rotated a quarter turn to (0, 20).
    assert!((p.x - 100.0).abs() < 1e-4, "x was {}", p.x);
    assert!((p.y - 70.0).abs() < 1e-4, "y was {}", p.y);
    assert_eq!(p.width, 8.0);
    assert_eq!(p.height, 4.0);
}
