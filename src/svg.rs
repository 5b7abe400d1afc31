// src/svg.rs

//! Lowers a `RenderResult` to an SVG document string.
//!
//! This is the only place markup exists: layout produces structured
//! primitives, and everything the adapter needs is already in them. Numbers
//! are formatted compactly (trailing zeros trimmed) so the output is stable
//! across runs and friendly to snapshot comparison.

use crate::color::Color;
use crate::primitive::{Primitive, RenderResult};

/// Serializes a render result as a standalone SVG document. When
/// `background` is given, a full-bleed rectangle in that color is emitted
/// first; otherwise the image is transparent.
pub fn document(result: &RenderResult, background: Option<Color>) -> String {
    let mut out = String::with_capacity(128 + result.primitives.len() * 96);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        num(result.width),
        num(result.height)
    ));
    if let Some(bg) = background {
        out.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            bg.to_hex()
        ));
    }
    for primitive in &result.primitives {
        out.push_str(&rect(primitive));
    }
    out.push_str("</svg>");
    out
}

fn rect(p: &Primitive) -> String {
    let mut attrs = format!(
        r#"x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        num(p.x),
        num(p.y),
        num(p.width),
        num(p.height),
        p.fill.to_hex()
    );
    if let Some(rx) = p.rx {
        attrs.push_str(&format!(r#" rx="{}""#, num(rx)));
    }
    if let Some(opacity) = p.opacity {
        attrs.push_str(&format!(r#" fill-opacity="{}""#, num(opacity)));
    }
    format!("<rect {}/>", attrs)
}

/// Formats a coordinate with three decimal places, trimming trailing zeros
/// so whole numbers print bare.
fn num(value: f32) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    fn sample() -> RenderResult {
        RenderResult {
            primitives: vec![
                Primitive::rect(0.0, 0.0, 12.0, 12.0, Color::BLACK),
                Primitive::rounded(14.4, 0.0, 12.0, 12.0, Color::rgb(255, 0, 0), 1.2)
                    .with_opacity(0.6),
            ],
            width: 26.4,
            height: 12.0,
        }
    }

    #[test]
    fn document_carries_viewbox_and_rects() {
        let svg = document(&sample(), None);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 26.4 12">"#));
        assert_eq!(svg.matches("<rect ").count(), 2);
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn background_adds_a_leading_full_bleed_rect() {
        let svg = document(&sample(), Some(Color::WHITE));
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##));
    }

    #[test]
    fn optional_attributes_only_appear_when_set() {
        let svg = document(&sample(), None);
        assert_eq!(svg.matches("rx=").count(), 1);
        assert_eq!(svg.matches("fill-opacity=").count(), 1);
    }

    #[test]
    fn numbers_print_compactly() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(2.4), "2.4");
        assert_eq!(num(0.125), "0.125");
        assert_eq!(num(0.0), "0");
    }
}
