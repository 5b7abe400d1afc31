// src/renderer.rs

//! Translates input text plus a `RenderConfig` into drawing primitives.
//!
//! Each typeface family has its own layout routine under this module; the
//! top level owns the dispatch and the shared input normalization (default
//! text substitution, glyph-count bounding). Rendering is a pure function
//! of its arguments: no renderer reads ambient state, and repeated calls
//! with identical inputs produce identical primitive lists.

mod grid;
mod ricetta;
mod segment;
mod vitkovac;

#[cfg(test)]
mod tests;

use log::{debug, warn};

use crate::config::{RenderConfig, Typeface, DEFAULT_TEXT, MAX_GLYPHS};
use crate::primitive::RenderResult;

/// Renders `text` in the typeface selected by `config`.
///
/// Total: unknown characters fall back to the space glyph, empty input is
/// substituted with a fixed default, and oversized input is truncated. The
/// result carries the primitive list in draw order plus the bounding box
/// that sizes the output coordinate frame.
pub fn render(text: &str, config: &RenderConfig) -> RenderResult {
    let text = effective_text(text);

    let result = match config.typeface {
        Typeface::KvarHBrut => grid::kvar_h(&text, &crate::patterns::grid::KVAR_H_BRUT, config),
        Typeface::KvarHTite => grid::kvar_h(&text, &crate::patterns::grid::KVAR_H_TITE, config),
        Typeface::KvarV => segment::kvar_v(&text, config),
        Typeface::KvarSq => grid::kvar_sq(&text, config),
        Typeface::Epetri => segment::epetri(&text, config),
        Typeface::MidisH => grid::midis_h(&text, config),
        Typeface::MidisV => segment::midis_v(&text, config),
        Typeface::Ricetta => ricetta::stretched_lines(&text, config),
        Typeface::VitkovacH => vitkovac::horizontal(&text, config),
        Typeface::VitkovacV => vitkovac::vertical(&text, config),
        Typeface::VisualPoetry => crate::poetry::compose(&text, config),
    };

    debug!(
        "Rendered {} chars as {:?}: {} primitives, {}x{}",
        text.chars().count(),
        config.typeface,
        result.primitives.len(),
        result.width,
        result.height
    );
    result
}

/// Normalizes input: trims, substitutes the default text for empty input,
/// and truncates pathological lengths. Whitespace-only input is kept
/// verbatim; spaces are legitimate glyphs with an advance of their own.
fn effective_text(text: &str) -> String {
    let trimmed = text.trim();
    let source = if text.is_empty() {
        DEFAULT_TEXT
    } else if trimmed.is_empty() {
        text
    } else {
        trimmed
    };
    if source.chars().count() > MAX_GLYPHS {
        warn!(
            "Input of {} characters exceeds the {} glyph bound; truncating.",
            source.chars().count(),
            MAX_GLYPHS
        );
        source.chars().take(MAX_GLYPHS).collect()
    } else {
        source.to_string()
    }
}
