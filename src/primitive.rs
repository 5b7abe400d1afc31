// src/primitive.rs

//! Defines the drawable output of the layout engine.
//!
//! A `Primitive` is an axis-aligned, colored rectangle with optional corner
//! rounding and opacity. Every typeface renderer and every composition mode
//! lowers to a flat list of these; serialization to a concrete image format
//! happens later, at the `svg` adapter.

use crate::color::Color;
use serde::Serialize;

/// A positioned rectangle, the sole drawable unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
    /// Corner radius, when the shape is softened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx: Option<f32>,
    /// Fill opacity in `[0, 1]`; `None` means fully opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl Primitive {
    pub fn rect(x: f32, y: f32, width: f32, height: f32, fill: Color) -> Self {
        Primitive {
            x,
            y,
            width,
            height,
            fill,
            rx: None,
            opacity: None,
        }
    }

    pub fn rounded(x: f32, y: f32, width: f32, height: f32, fill: Color, rx: f32) -> Self {
        Primitive {
            rx: Some(rx),
            ..Primitive::rect(x, y, width, height, fill)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// The result of one render call: an ordered primitive list plus the
/// bounding box that sizes the output coordinate frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderResult {
    pub primitives: Vec<Primitive>,
    pub width: f32,
    pub height: f32,
}

impl RenderResult {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
