// src/poetry.rs

//! Visual Poetry: spatial composition of whole rendered words.
//!
//! Every mode treats a word as a sub-image produced by the ordinary glyph
//! renderers, then computes a placement transform (translate, rotate,
//! scale) per word, or per character for the distorting modes. Randomness
//! comes from a linear-congruential generator seeded by the input length,
//! so identical input always composes identically.
//!
//! The canvas is fixed at 1200x800 with a 100-unit safe margin; finished
//! compositions are shifted into the margin so nothing clips at the edge.

mod rng;
pub mod semantic;
mod templates;

#[cfg(test)]
mod tests;

use std::f32::consts::PI;

use log::warn;

use crate::color::Color;
use crate::config::{PoetryMode, RenderConfig, Typeface, MAX_WORDS};
use crate::primitive::{Primitive, RenderResult};

use self::rng::Lcg;

pub const CANVAS_WIDTH: f32 = 1200.0;
pub const CANVAS_HEIGHT: f32 = 800.0;
pub const SAFE_MARGIN: f32 = 100.0;

const SAFE_WIDTH: f32 = CANVAS_WIDTH - SAFE_MARGIN * 2.0;
const SAFE_HEIGHT: f32 = CANVAS_HEIGHT - SAFE_MARGIN * 2.0;

/// Composes `text` across the canvas in the configured mode.
pub fn compose(text: &str, config: &RenderConfig) -> RenderResult {
    let lines = bound_lines(text);

    let mut primitives = match config.poetry.mode {
        PoetryMode::Scattered => scattered(&lines, config),
        PoetryMode::Layered => layered(&lines, config),
        PoetryMode::Curved => curved(&lines, config),
        PoetryMode::Spiral => spiral(&lines, config),
        PoetryMode::Concrete => concrete(&lines, config),
        PoetryMode::Template => templates::compose(config.poetry.template, &lines, config),
    };

    for p in &mut primitives {
        p.x += SAFE_MARGIN;
        p.y += SAFE_MARGIN;
    }

    RenderResult {
        primitives,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    }
}

/// Splits input into non-empty trimmed lines, bounded to `MAX_WORDS` words
/// overall. Empty input composes a fixed placeholder phrase.
fn bound_lines(text: &str) -> Vec<String> {
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    let lines = if lines.is_empty() {
        vec!["visual poetry".to_string()]
    } else {
        lines
    };

    let mut remaining = MAX_WORDS;
    let mut bounded = Vec::new();
    for line in lines {
        let count = line.split_whitespace().count();
        if count <= remaining {
            remaining -= count;
            bounded.push(line);
        } else {
            if remaining > 0 {
                let kept: Vec<&str> = line.split_whitespace().take(remaining).collect();
                bounded.push(kept.join(" "));
            }
            warn!(
                "Composition input exceeds {} words; truncating.",
                MAX_WORDS
            );
            break;
        }
    }
    bounded
}

/// Seed for the composition generator: total character count of the lines.
fn seed_of(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count()).sum()
}

/// Renders one word in the configured base typeface and rescales the
/// sub-image so its height matches `font_size`.
fn word_image(word: &str, config: &RenderConfig, font_size: f32, color: Color) -> Vec<Primitive> {
    let mut sub = config.clone();
    sub.typeface = match config.poetry.base_typeface {
        // Composition cannot nest inside itself.
        Typeface::VisualPoetry => Typeface::Epetri,
        face => face,
    };
    sub.color = color;
    sub.scale = 1.0;
    let rendered = crate::renderer::render(word, &sub);
    let factor = if rendered.height > 0.0 {
        font_size / rendered.height
    } else {
        1.0
    };
    rendered
        .primitives
        .into_iter()
        .map(|p| Primitive {
            x: p.x * factor,
            y: p.y * factor,
            width: p.width * factor,
            height: p.height * factor,
            rx: p.rx.map(|r| r * factor),
            ..p
        })
        .collect()
}

/// A per-word (or per-character) placement transform. Applied to primitive
/// origins: the rectangles themselves stay axis-aligned.
#[derive(Debug, Clone, Copy)]
struct Placement {
    tx: f32,
    ty: f32,
    rotate_deg: f32,
    scale: f32,
    skew_deg: f32,
    opacity: Option<f32>,
}

impl Default for Placement {
    fn default() -> Self {
        Placement {
            tx: 0.0,
            ty: 0.0,
            rotate_deg: 0.0,
            scale: 1.0,
            skew_deg: 0.0,
            opacity: None,
        }
    }
}

impl Placement {
    fn at(tx: f32, ty: f32) -> Self {
        Placement {
            tx,
            ty,
            ..Placement::default()
        }
    }

    /// Transform order: shear, scale, rotate, translate.
    fn apply(&self, image: &[Primitive]) -> Vec<Primitive> {
        let (sin, cos) = self.rotate_deg.to_radians().sin_cos();
        let shear = self.skew_deg.to_radians().tan();
        image
            .iter()
            .map(|p| {
                let sheared_x = p.x + shear * p.y;
                let sx = sheared_x * self.scale;
                let sy = p.y * self.scale;
                Primitive {
                    x: self.tx + sx * cos - sy * sin,
                    y: self.ty + sx * sin + sy * cos,
                    width: p.width * self.scale,
                    height: p.height * self.scale,
                    fill: p.fill,
                    rx: p.rx.map(|r| r * self.scale),
                    opacity: merge_opacity(p.opacity, self.opacity),
                }
            })
            .collect()
    }
}

fn merge_opacity(own: Option<f32>, applied: Option<f32>) -> Option<f32> {
    match (own, applied) {
        (Some(a), Some(b)) => Some(a * b),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

/// Random placement in the safe area; biometric mode follows an organic
/// flow curve instead of uniform scatter.
fn scattered(lines: &[String], config: &RenderConfig) -> Vec<Primitive> {
    let opts = &config.poetry;
    let mut rng = Lcg::new(seed_of(lines));

    let base_size = 24.0;
    let min_scale = 0.8;
    let max_scale = 1.0 + opts.scale_variance / 100.0;
    let inner = SAFE_WIDTH * 0.05;
    let effective_w = SAFE_WIDTH - inner * 2.0;
    let effective_h = SAFE_HEIGHT - inner * 2.0;

    let mut primitives = Vec::new();
    for (line_idx, line) in lines.iter().enumerate() {
        let words: Vec<String> = if opts.word_breaking {
            line.chars().map(|c| c.to_string()).collect()
        } else {
            line.split_whitespace().map(String::from).collect()
        };

        for (word_idx, word) in words.iter().enumerate() {
            if word.trim().is_empty() {
                continue;
            }

            let (x, y) = if config.biometric {
                let flow = line_idx as f32 * PI / 4.0 + word_idx as f32 * 0.3;
                let radius = effective_w / 4.0 + rng.next_f32() * opts.spacing_intensity * 20.0;
                (
                    inner + effective_w / 2.0 + flow.cos() * radius,
                    inner + effective_h / 2.0 + flow.sin() * radius * 0.6,
                )
            } else {
                (
                    inner + rng.next_f32() * effective_w,
                    inner + rng.next_f32() * effective_h,
                )
            };
            let x = x.clamp(inner, SAFE_WIDTH - inner);
            let y = y.clamp(inner, SAFE_HEIGHT - inner);

            let rotation = (rng.next_f32() - 0.5) * 2.0 * opts.rotation_variance;
            let scale = min_scale + rng.next_f32() * (max_scale - min_scale);

            let image = word_image(word, config, base_size * scale, config.color);
            primitives.extend(
                Placement {
                    tx: x,
                    ty: y,
                    rotate_deg: rotation,
                    scale,
                    ..Placement::default()
                }
                .apply(&image),
            );
        }
    }
    primitives
}

/// Depth bands: each line scales up, dims, and drifts; back bands get a
/// dimmed shadow duplicate drawn first.
fn layered(lines: &[String], config: &RenderConfig) -> Vec<Primitive> {
    let opts = &config.poetry;
    let mut rng = Lcg::new(seed_of(lines));
    let center_x = SAFE_WIDTH / 2.0;
    let center_y = SAFE_HEIGHT / 2.0;

    let mut primitives = Vec::new();
    for (depth, line) in lines.iter().enumerate() {
        let depth_f = depth as f32;
        let base_scale = 1.0 + depth_f * 0.15;
        let band_opacity = (opts.layer_opacity - depth_f * 0.12).max(0.15);
        let font_size = 28.0 + depth_f * 4.0;

        for word in line.split_whitespace() {
            let (offset_x, offset_y) = if config.biometric {
                (
                    (rng.next_f32() - 0.5) * 100.0 * (depth_f + 1.0),
                    (rng.next_f32() - 0.5) * 60.0 * (depth_f + 1.0) + depth_f * 25.0,
                )
            } else {
                (
                    (rng.next_f32() - 0.5) * 80.0,
                    depth_f * 40.0 + (rng.next_f32() - 0.5) * 30.0,
                )
            };
            let scale_variation = 1.0 + (rng.next_f32() - 0.5) * (opts.scale_variance / 200.0);
            let final_scale = base_scale * scale_variation;
            let tx = center_x + offset_x;
            let ty = center_y + offset_y;

            if depth > 0 {
                let shadow_offset = depth_f * 2.0;
                let shadow = word_image(word, config, font_size, Color::SHADOW_GRAY);
                primitives.extend(
                    Placement {
                        tx: tx + shadow_offset * final_scale,
                        ty: ty + shadow_offset * final_scale,
                        scale: final_scale,
                        opacity: Some(0.2 * band_opacity),
                        ..Placement::default()
                    }
                    .apply(&shadow),
                );
            }

            let image = word_image(word, config, font_size, config.color);
            primitives.extend(
                Placement {
                    tx,
                    ty,
                    scale: final_scale,
                    opacity: Some(band_opacity),
                    ..Placement::default()
                }
                .apply(&image),
            );
        }
    }
    primitives
}

/// Words along curves: an organic elliptical flow in biometric mode, a
/// radial arrangement with perspective distortion otherwise.
fn curved(lines: &[String], config: &RenderConfig) -> Vec<Primitive> {
    let mut rng = Lcg::new(seed_of(lines));
    let center_x = CANVAS_WIDTH / 2.0;
    let center_y = CANVAS_HEIGHT / 2.0;

    let mut primitives = Vec::new();
    for (line_idx, line) in lines.iter().enumerate() {
        let words: Vec<&str> = line.split_whitespace().collect();
        if config.biometric {
            flowing_curve(
                &words,
                line_idx,
                center_x,
                center_y,
                config,
                &mut rng,
                &mut primitives,
            );
        } else {
            geometric_curve(
                &words,
                line_idx,
                center_x,
                center_y,
                config,
                &mut rng,
                &mut primitives,
            );
        }
    }
    primitives
}

/// Biometric curved mode: an elliptical flow path with per-character
/// progressive distortion toward each word's tail.
fn flowing_curve(
    words: &[&str],
    line_idx: usize,
    center_x: f32,
    center_y: f32,
    config: &RenderConfig,
    rng: &mut Lcg,
    out: &mut Vec<Primitive>,
) {
    let point_count = words.len() + 3;
    let mut path = Vec::with_capacity(point_count);
    for i in 0..point_count {
        let t = i as f32 / (point_count - 1) as f32;
        let angle = t * PI * 2.0 + line_idx as f32 * PI / 3.0;
        let radius_variation = 1.0 + (rng.next_f32() - 0.5) * 0.6;
        let radius = (CANVAS_WIDTH * 0.2 + line_idx as f32 * 40.0) * radius_variation;
        path.push((
            center_x + angle.cos() * radius,
            center_y + angle.sin() * radius * 0.7,
        ));
    }

    for (word_idx, word) in words.iter().enumerate() {
        if word.trim().is_empty() {
            continue;
        }
        let t = (word_idx + 1) as f32 / (words.len() + 1) as f32;
        let point_idx = ((t * (path.len() - 1) as f32) as usize).min(path.len() - 1);
        let (px, py) = path[point_idx];
        let (nx, ny) = path[(point_idx + 1).min(path.len() - 1)];
        let rotation = (ny - py).atan2(nx - px).to_degrees();

        let chars: Vec<char> = word.chars().collect();
        let mut char_x = 0.0;
        for (char_idx, ch) in chars.iter().enumerate() {
            let distortion = char_idx as f32 / chars.len() as f32 * 0.3;
            let char_scale = 1.0 + (rng.next_f32() - 0.5) * distortion;
            let char_rotation = rotation + (rng.next_f32() - 0.5) * 15.0 * distortion;

            let image = word_image(&ch.to_string(), config, 20.0, config.color);
            out.extend(
                Placement {
                    tx: px + char_x,
                    ty: py,
                    rotate_deg: char_rotation,
                    scale: char_scale,
                    ..Placement::default()
                }
                .apply(&image),
            );
            char_x += 15.0 * char_scale;
        }
    }
}

/// Standard curved mode: words around a circle with perspective scale and
/// a positional shear, wave-jittered per character.
fn geometric_curve(
    words: &[&str],
    line_idx: usize,
    center_x: f32,
    center_y: f32,
    config: &RenderConfig,
    rng: &mut Lcg,
    out: &mut Vec<Primitive>,
) {
    let radius = 150.0 + line_idx as f32 * 60.0;
    let angle_step = PI * 2.0 / words.len().max(1) as f32;

    for (word_idx, word) in words.iter().enumerate() {
        let angle = word_idx as f32 * angle_step + line_idx as f32 * PI / 4.0;
        let x = center_x + angle.cos() * radius;
        let y = center_y + angle.sin() * radius;

        let perspective = 1.0 + angle.sin() * 0.3;
        let skew = (angle + PI / 2.0).cos() * 10.0;
        let base_size = 18.0 + config.poetry.spacing_intensity * 2.0;
        let font_size = base_size * (1.0 + (rng.next_f32() - 0.5) * 0.4);

        let chars: Vec<char> = word.chars().collect();
        let mut char_offset = 0.0;
        for (char_idx, ch) in chars.iter().enumerate() {
            let wave = (char_idx as f32 * 0.8).sin() * 5.0;
            let char_scale = perspective * (0.8 + char_idx as f32 / chars.len() as f32 * 0.4);
            let rotation = angle.to_degrees() + 90.0;

            let image = word_image(&ch.to_string(), config, font_size, config.color);
            out.extend(
                Placement {
                    tx: x + char_offset,
                    ty: y + wave,
                    rotate_deg: rotation,
                    scale: char_scale,
                    skew_deg: skew,
                    ..Placement::default()
                }
                .apply(&image),
            );
            char_offset += font_size * 0.6 * char_scale;
        }
    }
}

/// Archimedean spiral point for a word index: (angle radians, radius).
pub(crate) fn spiral_point(index: usize) -> (f32, f32) {
    (index as f32 * 0.5, 20.0 + index as f32 * 8.0)
}

/// Words wound outward along an Archimedean spiral, each rotated to its
/// tangent.
fn spiral(lines: &[String], config: &RenderConfig) -> Vec<Primitive> {
    let center_x = CANVAS_WIDTH / 2.0;
    let center_y = CANVAS_HEIGHT / 2.0;
    let joined = lines.join(" ");

    let mut primitives = Vec::new();
    for (idx, word) in joined.split_whitespace().enumerate() {
        let (angle, radius) = spiral_point(idx);
        let x = center_x + angle.cos() * radius;
        let y = center_y + angle.sin() * radius;

        let image = word_image(word, config, 20.0, config.color);
        primitives.extend(
            Placement {
                tx: x,
                ty: y,
                rotate_deg: angle.to_degrees(),
                ..Placement::default()
            }
            .apply(&image),
        );
    }
    primitives
}

/// Grid arrangement filtered to a diamond silhouette, or the semantic
/// radial arrangement when semantic spacing is on.
fn concrete(lines: &[String], config: &RenderConfig) -> Vec<Primitive> {
    if config.poetry.semantic_spacing {
        return semantic_concrete(lines, config);
    }

    let joined = lines.join(" ");
    let words: Vec<&str> = joined.split_whitespace().collect();
    let cols = (words.len() as f32).sqrt().ceil().max(1.0);
    let cell_width = CANVAS_WIDTH / cols;
    let cell_height = CANVAS_HEIGHT / cols;
    let center = cols / 2.0;

    let mut primitives = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        let col = (idx % cols as usize) as f32;
        let row = (idx / cols as usize) as f32;
        let distance = (col - center).abs() + (row - center).abs();
        if distance > cols / 2.0 {
            continue;
        }
        let x = col * cell_width + cell_width / 2.0;
        let y = row * cell_height + cell_height / 2.0;
        let image = word_image(word, config, 18.0, config.color);
        primitives.extend(Placement::at(x, y).apply(&image));
    }
    primitives
}

/// Semantic concrete mode: lines fan out radially; word size follows
/// semantic weight, and pauses push the radius outward.
fn semantic_concrete(lines: &[String], config: &RenderConfig) -> Vec<Primitive> {
    let center_x = SAFE_WIDTH / 2.0;
    let center_y = SAFE_HEIGHT / 2.0;

    let mut primitives = Vec::new();
    for (line_idx, line) in lines.iter().enumerate() {
        let words = semantic::analyze(line);
        let line_angle = line_idx as f32 * PI * 2.0 / lines.len() as f32;
        let mut radius = 100.0 + line_idx as f32 * 60.0;

        for (word_idx, analysis) in words.iter().enumerate() {
            let angle = line_angle + word_idx as f32 * 0.3;
            let x = center_x + angle.cos() * radius;
            let y = center_y + angle.sin() * radius;

            let font_size = 16.0
                + analysis.semantic_weight * 8.0
                + if analysis.emphasized() { 6.0 } else { 0.0 };
            let image = word_image(&analysis.word, config, font_size, config.color);
            primitives.extend(Placement::at(x, y).apply(&image));

            if analysis.pause_after > 0.0 {
                radius += analysis.pause_after * 30.0;
            }
        }
    }
    primitives
}
