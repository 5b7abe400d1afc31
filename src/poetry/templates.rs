// src/poetry/templates.rs

//! Fixed parametric placement templates for composition.
//!
//! Each template is a pure function from word index to a placement on the
//! canvas: cascading fall, the standard parametric heart curve, a trunk /
//! branches / leaves tree, layered sine waves, a radial burst, and a
//! meandering river. Jitter comes from the shared seeded generator.

use std::f32::consts::PI;

use crate::config::{RenderConfig, TemplateKind};
use crate::primitive::Primitive;

use super::rng::Lcg;
use super::{word_image, Placement, CANVAS_HEIGHT, CANVAS_WIDTH};

pub(super) fn compose(
    kind: TemplateKind,
    lines: &[String],
    config: &RenderConfig,
) -> Vec<Primitive> {
    let joined = lines.join(" ");
    let words: Vec<&str> = joined.split_whitespace().collect();
    // The template seed counts word characters only, not separators.
    let seed: usize = words.iter().map(|w| w.chars().count()).sum();
    let mut rng = Lcg::new(seed);

    match kind {
        TemplateKind::FallingWords => falling_words(&words, config, &mut rng),
        TemplateKind::HeartShape => heart_shape(&words, config),
        TemplateKind::TreeGrowth => tree_growth(&words, config, &mut rng),
        TemplateKind::WaveMotion => wave_motion(&words, config),
        TemplateKind::Explosion => explosion(&words, config, &mut rng),
        TemplateKind::RiverFlow => river_flow(&words, config, &mut rng),
    }
}

/// Words cascade down the canvas, drifting sideways and shrinking as they
/// fall.
fn falling_words(words: &[&str], config: &RenderConfig, rng: &mut Lcg) -> Vec<Primitive> {
    let mut primitives = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        let x = CANVAS_WIDTH * 0.1 + rng.next_f32() * CANVAS_WIDTH * 0.8;
        let y = CANVAS_HEIGHT * 0.1 + idx as f32 * (CANVAS_HEIGHT * 0.8) / words.len() as f32;
        let drift = if config.biometric {
            (rng.next_f32() - 0.5) * 100.0
        } else {
            (rng.next_f32() - 0.5) * 50.0
        };
        let fall_progress = idx as f32 / words.len() as f32;
        let font_size = 28.0 - fall_progress * 8.0;

        let image = word_image(word, config, font_size, config.color);
        primitives.extend(Placement::at(x + drift, y).apply(&image));
    }
    primitives
}

/// The standard parametric heart:
/// `x = 16 sin^3 t`, `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`.
fn heart_shape(words: &[&str], config: &RenderConfig) -> Vec<Primitive> {
    let center_x = CANVAS_WIDTH / 2.0;
    let center_y = CANVAS_HEIGHT / 2.0;
    let scale = 60.0;

    let mut primitives = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        let t = idx as f32 / words.len() as f32 * PI * 2.0;
        let heart_x = 16.0 * t.sin().powi(3) * scale / 16.0;
        let heart_y = -(13.0 * t.cos()
            - 5.0 * (2.0 * t).cos()
            - 2.0 * (3.0 * t).cos()
            - (4.0 * t).cos())
            * scale
            / 16.0;

        let distance = (heart_x * heart_x + heart_y * heart_y).sqrt();
        let font_size = 16.0 + distance / 20.0;

        let image = word_image(word, config, font_size, config.color);
        primitives.extend(Placement::at(center_x + heart_x, center_y + heart_y).apply(&image));
    }
    primitives
}

/// Words grow a tree: the first third forms the trunk, the middle the
/// branches, the rest scatters as leaves.
fn tree_growth(words: &[&str], config: &RenderConfig, rng: &mut Lcg) -> Vec<Primitive> {
    let center_x = CANVAS_WIDTH / 2.0;
    let ground_y = CANVAS_HEIGHT * 0.8;

    let mut primitives = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        let progress = idx as f32 / words.len() as f32;

        let (x, y, font_size) = if progress < 0.3 {
            let y = ground_y - progress * CANVAS_HEIGHT * 0.4;
            let x = center_x + (rng.next_f32() - 0.5) * 30.0;
            (x, y, 20.0)
        } else if progress < 0.7 {
            let branch_progress = (progress - 0.3) / 0.4;
            let branch_angle = (rng.next_f32() - 0.5) * PI / 2.0;
            let branch_length = 80.0 + branch_progress * 60.0;
            let x = center_x + branch_angle.cos() * branch_length;
            let y = ground_y - CANVAS_HEIGHT * 0.3 - branch_progress * CANVAS_HEIGHT * 0.2;
            (x, y, 18.0)
        } else {
            let leaf_progress = (progress - 0.7) / 0.3;
            let leaf_angle = rng.next_f32() * PI * 2.0;
            let leaf_radius = 40.0 + leaf_progress * 80.0;
            let x = center_x + leaf_angle.cos() * leaf_radius;
            let y = CANVAS_HEIGHT * 0.3 + leaf_angle.sin() * leaf_radius * 0.5;
            (x, y, 14.0 + leaf_progress * 6.0)
        };

        let image = word_image(word, config, font_size, config.color);
        primitives.extend(Placement::at(x, y).apply(&image));
    }
    primitives
}

/// Three superimposed sine frequencies carry the words across the canvas;
/// size and rotation follow the motion.
fn wave_motion(words: &[&str], config: &RenderConfig) -> Vec<Primitive> {
    let mut primitives = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        let progress = idx as f32 / words.len() as f32;
        let x = CANVAS_WIDTH * 0.1 + progress * CANVAS_WIDTH * 0.8;

        let wave1 = (progress * PI * 4.0).sin() * 80.0;
        let wave2 = (progress * PI * 8.0).sin() * 30.0;
        let wave3 = (progress * PI * 12.0).sin() * 15.0;
        let y = CANVAS_HEIGHT / 2.0 + wave1 + wave2 + wave3;

        let font_size = 18.0 + (progress * PI * 6.0).sin() * 8.0;
        let rotation = (wave1 + wave2)
            .atan2(CANVAS_WIDTH / words.len() as f32)
            .to_degrees();

        let image = word_image(word, config, font_size, config.color);
        primitives.extend(
            Placement {
                tx: x,
                ty: y,
                rotate_deg: rotation,
                ..Placement::default()
            }
            .apply(&image),
        );
    }
    primitives
}

/// Words burst outward from the center; later words fly further and
/// shrink.
fn explosion(words: &[&str], config: &RenderConfig, rng: &mut Lcg) -> Vec<Primitive> {
    let center_x = CANVAS_WIDTH / 2.0;
    let center_y = CANVAS_HEIGHT / 2.0;
    let reach = CANVAS_WIDTH.min(CANVAS_HEIGHT) * 0.4;

    let mut primitives = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        let progress = idx as f32 / words.len() as f32;
        let angle = progress * PI * 2.0 + (rng.next_f32() - 0.5) * 0.5;
        let radius = progress * reach;

        let distance_factor = 1.0 - radius / reach;
        let font_size = 12.0 + distance_factor * 16.0;

        let image = word_image(word, config, font_size, config.color);
        primitives.extend(
            Placement {
                tx: center_x + angle.cos() * radius,
                ty: center_y + angle.sin() * radius,
                rotate_deg: angle.to_degrees(),
                ..Placement::default()
            }
            .apply(&image),
        );
    }
    primitives
}

/// A meandering S-curve with natural jitter, like text drifting down a
/// river.
fn river_flow(words: &[&str], config: &RenderConfig, rng: &mut Lcg) -> Vec<Primitive> {
    let mut primitives = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        let progress = idx as f32 / words.len() as f32;

        let base_x = CANVAS_WIDTH * 0.1 + progress * CANVAS_WIDTH * 0.8;
        let meander = (progress * PI * 3.0).sin() * CANVAS_WIDTH * 0.15;
        let flow_y = (progress * PI * 2.0).sin() * 20.0;

        let x = base_x + meander + (rng.next_f32() - 0.5) * 40.0;
        let y = CANVAS_HEIGHT / 2.0 + flow_y + (rng.next_f32() - 0.5) * 30.0;

        let flow_intensity = (progress * PI * 4.0).sin().abs();
        let font_size = 16.0 + flow_intensity * 12.0;
        let rotation = ((progress * PI * 3.0).cos() * PI / 8.0).to_degrees();

        let image = word_image(word, config, font_size, config.color);
        primitives.extend(
            Placement {
                tx: x,
                ty: y,
                rotate_deg: rotation,
                ..Placement::default()
            }
            .apply(&image),
        );
    }
    primitives
}
