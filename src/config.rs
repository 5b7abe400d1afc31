// src/config.rs

//! Defines the configuration structures for the rendering engine.
//!
//! Every render call receives an immutable `RenderConfig` assembled by the
//! caller (the CLI, or whatever front end embeds the engine); renderers never
//! reach out to ambient state. The structs deserialize from a JSON config
//! file and carry documented defaults for every field.
//!
//! String parsing of option values is total: an unrecognized name logs a
//! warning and falls back to the documented default, so a stale or mistyped
//! config can never fail a render.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Upper bound on characters consumed by one render call. Input beyond this
/// is truncated with a warning to keep primitive lists bounded.
pub const MAX_GLYPHS: usize = 4096;

/// Upper bound on words consumed by one composition render.
pub const MAX_WORDS: usize = 1024;

/// Substitute for empty input text.
pub const DEFAULT_TEXT: &str = "hello";

// --- Typeface selection ---

/// The closed set of supported typeface families.
///
/// Dispatch over this enum is exhaustive; adding a family means the compiler
/// walks you through every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Typeface {
    /// Block-grid letterforms, full 5-row matrices.
    KvarHBrut,
    /// Block-grid letterforms, sparse horizontal-band variant.
    KvarHTite,
    /// Single-column vertical bars.
    KvarV,
    /// Compact square-grid letterforms.
    KvarSq,
    /// Readable waveform: bars of tiered heights on a shared baseline.
    Epetri,
    /// Horizontal rectangles arranged by diagonal movement.
    MidisH,
    /// Vertical segments of tiered heights.
    MidisV,
    /// Extremely stretched lines with identifying gaps.
    Ricetta,
    /// Continuous horizontal main line with perpendicular alteration marks.
    VitkovacH,
    /// Vertical main line per column, alteration marks left/right.
    VitkovacV,
    /// Spatial word composition across a fixed canvas.
    VisualPoetry,
}

impl Typeface {
    /// Total parser for CLI input. Unknown names fall back to the default.
    pub fn parse(s: &str) -> Typeface {
        match s {
            "kvar-h-brut" => Typeface::KvarHBrut,
            "kvar-h-tite" => Typeface::KvarHTite,
            "kvar-v" => Typeface::KvarV,
            "kvar-sq" => Typeface::KvarSq,
            "epetri" => Typeface::Epetri,
            "midis-h" => Typeface::MidisH,
            "midis-v" => Typeface::MidisV,
            "ricetta" => Typeface::Ricetta,
            "vitkovac-h" => Typeface::VitkovacH,
            "vitkovac-v" => Typeface::VitkovacV,
            "visual-poetry" => Typeface::VisualPoetry,
            other => {
                warn!("Unknown typeface '{}'; using kvar-h-brut.", other);
                Typeface::KvarHBrut
            }
        }
    }
}

impl Default for Typeface {
    fn default() -> Self {
        Typeface::KvarHBrut
    }
}

// --- Epetri options ---

/// Epetri stroke weight. Affects bar width only, never layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpetriWeight {
    #[serde(rename = "anorexic-1")]
    Anorexic1,
    #[serde(rename = "anorexic-2")]
    Anorexic2,
    #[serde(rename = "anorexic-3")]
    Anorexic3,
    #[serde(rename = "regular-1")]
    Regular1,
    #[serde(rename = "regular-2")]
    Regular2,
    #[serde(rename = "bold-1")]
    Bold1,
    #[serde(rename = "bold-2")]
    Bold2,
}

impl EpetriWeight {
    pub fn multiplier(self) -> f32 {
        match self {
            EpetriWeight::Anorexic1 => 0.3,
            EpetriWeight::Anorexic2 => 0.4,
            EpetriWeight::Anorexic3 => 0.5,
            EpetriWeight::Regular1 => 0.7,
            EpetriWeight::Regular2 => 0.8,
            EpetriWeight::Bold1 => 1.0,
            EpetriWeight::Bold2 => 1.2,
        }
    }

    pub fn parse(s: &str) -> EpetriWeight {
        match s {
            "anorexic-1" => EpetriWeight::Anorexic1,
            "anorexic-2" => EpetriWeight::Anorexic2,
            "anorexic-3" => EpetriWeight::Anorexic3,
            "regular-1" => EpetriWeight::Regular1,
            "regular-2" => EpetriWeight::Regular2,
            "bold-1" => EpetriWeight::Bold1,
            "bold-2" => EpetriWeight::Bold2,
            other => {
                warn!("Unknown epetri weight '{}'; using regular-1.", other);
                EpetriWeight::Regular1
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EpetriWeight::Anorexic1 => "ANOREXIC 1",
            EpetriWeight::Anorexic2 => "ANOREXIC 2",
            EpetriWeight::Anorexic3 => "ANOREXIC 3",
            EpetriWeight::Regular1 => "REGULAR 1",
            EpetriWeight::Regular2 => "REGULAR 2",
            EpetriWeight::Bold1 => "BOLD 1",
            EpetriWeight::Bold2 => "BOLD 2",
        }
    }
}

impl Default for EpetriWeight {
    fn default() -> Self {
        EpetriWeight::Regular1
    }
}

/// Epetri form. The airy form widens columns for extra breathing room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EpetriForm {
    Airy,
    Regular,
}

impl EpetriForm {
    pub fn multiplier(self) -> f32 {
        match self {
            EpetriForm::Airy => 1.5,
            EpetriForm::Regular => 1.0,
        }
    }

    pub fn parse(s: &str) -> EpetriForm {
        match s {
            "airy" => EpetriForm::Airy,
            "regular" => EpetriForm::Regular,
            other => {
                warn!("Unknown epetri form '{}'; using regular.", other);
                EpetriForm::Regular
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EpetriForm::Airy => "AIRY",
            EpetriForm::Regular => "REGULAR",
        }
    }
}

impl Default for EpetriForm {
    fn default() -> Self {
        EpetriForm::Regular
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EpetriOptions {
    pub weight: EpetriWeight,
    pub form: EpetriForm,
    /// Draw a faint index tick at the start of each glyph.
    pub index: bool,
}

// --- Ricetta options ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RicettaWeight {
    Normal,
    Semibold,
    Bold,
    PixelCrack,
}

impl RicettaWeight {
    pub fn multiplier(self) -> f32 {
        match self {
            RicettaWeight::Normal => 1.0,
            RicettaWeight::Semibold => 1.4,
            RicettaWeight::Bold => 1.8,
            RicettaWeight::PixelCrack => 0.5,
        }
    }

    pub fn parse(s: &str) -> RicettaWeight {
        match s {
            "normal" => RicettaWeight::Normal,
            "semibold" => RicettaWeight::Semibold,
            "bold" => RicettaWeight::Bold,
            "pixel-crack" => RicettaWeight::PixelCrack,
            other => {
                warn!("Unknown ricetta weight '{}'; using normal.", other);
                RicettaWeight::Normal
            }
        }
    }
}

impl Default for RicettaWeight {
    fn default() -> Self {
        RicettaWeight::Normal
    }
}

/// Axis along which stretched lines run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn parse(s: &str) -> Orientation {
        match s {
            "horizontal" => Orientation::Horizontal,
            "vertical" => Orientation::Vertical,
            other => {
                warn!("Unknown orientation '{}'; using horizontal.", other);
                Orientation::Horizontal
            }
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RicettaOptions {
    pub weight: RicettaWeight,
    pub orientation: Orientation,
    /// Keep wide word/character separation; when false the strokes compress
    /// toward a near-continuous line.
    pub keep_spaces: bool,
}

impl Default for RicettaOptions {
    fn default() -> Self {
        RicettaOptions {
            weight: RicettaWeight::default(),
            orientation: Orientation::default(),
            keep_spaces: true,
        }
    }
}

// --- Vitkovac options ---

/// Alteration-line length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitkovacForm {
    Perm,
    Tite,
}

impl VitkovacForm {
    pub fn alteration_multiplier(self) -> f32 {
        match self {
            VitkovacForm::Perm => 2.5,
            VitkovacForm::Tite => 1.8,
        }
    }

    pub fn parse(s: &str) -> VitkovacForm {
        match s {
            "perm" => VitkovacForm::Perm,
            "tite" => VitkovacForm::Tite,
            other => {
                warn!("Unknown vitkovac form '{}'; using perm.", other);
                VitkovacForm::Perm
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VitkovacForm::Perm => "PERM",
            VitkovacForm::Tite => "TITE",
        }
    }
}

impl Default for VitkovacForm {
    fn default() -> Self {
        VitkovacForm::Perm
    }
}

/// Stroke weight class for both the main line and alteration marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitkovacWeight {
    Thin,
    Regular,
    Bold,
    Heavy,
}

impl VitkovacWeight {
    pub fn stroke_fraction(self) -> f32 {
        match self {
            VitkovacWeight::Thin => 0.08,
            VitkovacWeight::Regular => 0.25,
            VitkovacWeight::Bold => 0.45,
            VitkovacWeight::Heavy => 0.8,
        }
    }

    pub fn parse(s: &str) -> VitkovacWeight {
        match s {
            "thin" => VitkovacWeight::Thin,
            "regular" => VitkovacWeight::Regular,
            "bold" => VitkovacWeight::Bold,
            "heavy" => VitkovacWeight::Heavy,
            other => {
                warn!("Unknown vitkovac weight '{}'; using regular.", other);
                VitkovacWeight::Regular
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VitkovacWeight::Thin => "THIN",
            VitkovacWeight::Regular => "REGULAR",
            VitkovacWeight::Bold => "BOLD",
            VitkovacWeight::Heavy => "HEAVY",
        }
    }
}

impl Default for VitkovacWeight {
    fn default() -> Self {
        VitkovacWeight::Regular
    }
}

/// How glyph boundaries are indicated along the main line. The two styles
/// are mutually exclusive within one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexStyle {
    /// No tick; the main line thickens locally at glyph transitions.
    Off,
    /// A small rectangular tick between consecutive glyphs; thickening off.
    Rectangle,
}

impl IndexStyle {
    pub fn parse(s: &str) -> IndexStyle {
        match s {
            "off" => IndexStyle::Off,
            "rectangle" => IndexStyle::Rectangle,
            other => {
                warn!("Unknown index style '{}'; using off.", other);
                IndexStyle::Off
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IndexStyle::Off => "off",
            IndexStyle::Rectangle => "rectangle",
        }
    }
}

impl Default for IndexStyle {
    fn default() -> Self {
        IndexStyle::Off
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VitkovacOptions {
    pub form: VitkovacForm,
    pub weight: VitkovacWeight,
    pub index_style: IndexStyle,
    /// When set, the main line and alteration marks take their own colors
    /// instead of the shared fill color.
    pub split_colors: bool,
    pub main_line_color: Color,
    pub alteration_color: Color,
}

impl VitkovacOptions {
    /// Resolves the (main line, alteration) color pair against the shared
    /// fill color.
    pub fn colors(&self, shared: Color) -> (Color, Color) {
        if self.split_colors {
            (self.main_line_color, self.alteration_color)
        } else {
            (shared, shared)
        }
    }
}

// --- Visual Poetry options ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoetryMode {
    Scattered,
    Layered,
    Curved,
    Spiral,
    Concrete,
    Template,
}

impl PoetryMode {
    pub fn parse(s: &str) -> PoetryMode {
        match s {
            "scattered" => PoetryMode::Scattered,
            "layered" => PoetryMode::Layered,
            "curved" => PoetryMode::Curved,
            "spiral" => PoetryMode::Spiral,
            "concrete" => PoetryMode::Concrete,
            "template" => PoetryMode::Template,
            other => {
                warn!("Unknown poetry mode '{}'; using scattered.", other);
                PoetryMode::Scattered
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PoetryMode::Scattered => "SCATTERED",
            PoetryMode::Layered => "LAYERED",
            PoetryMode::Curved => "CURVED",
            PoetryMode::Spiral => "SPIRAL",
            PoetryMode::Concrete => "CONCRETE",
            PoetryMode::Template => "TEMPLATE",
        }
    }
}

impl Default for PoetryMode {
    fn default() -> Self {
        PoetryMode::Scattered
    }
}

/// Fixed parametric placement shapes for template mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    FallingWords,
    HeartShape,
    TreeGrowth,
    WaveMotion,
    Explosion,
    RiverFlow,
}

impl TemplateKind {
    pub fn parse(s: &str) -> TemplateKind {
        match s {
            "falling-words" => TemplateKind::FallingWords,
            "heart-shape" => TemplateKind::HeartShape,
            "tree-growth" => TemplateKind::TreeGrowth,
            "wave-motion" => TemplateKind::WaveMotion,
            "explosion" => TemplateKind::Explosion,
            "river-flow" => TemplateKind::RiverFlow,
            other => {
                warn!("Unknown template '{}'; using falling-words.", other);
                TemplateKind::FallingWords
            }
        }
    }
}

impl Default for TemplateKind {
    fn default() -> Self {
        TemplateKind::FallingWords
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoetryOptions {
    pub mode: PoetryMode,
    pub template: TemplateKind,
    /// Typeface used to render the individual word sub-images.
    pub base_typeface: Typeface,
    /// Placement spread factor, nominally 1–10.
    pub spacing_intensity: f32,
    /// Maximum rotation jitter in degrees.
    pub rotation_variance: f32,
    /// Maximum scale jitter in percent.
    pub scale_variance: f32,
    /// Opacity of the front depth band in `[0, 1]`.
    pub layer_opacity: f32,
    /// Enable the semantic spacing analyzer in concrete mode.
    pub semantic_spacing: bool,
    /// Scatter individual characters instead of whole words.
    pub word_breaking: bool,
}

impl Default for PoetryOptions {
    fn default() -> Self {
        PoetryOptions {
            mode: PoetryMode::default(),
            template: TemplateKind::default(),
            base_typeface: Typeface::Epetri,
            spacing_intensity: 5.0,
            rotation_variance: 15.0,
            scale_variance: 20.0,
            layer_opacity: 0.8,
            semantic_spacing: false,
            word_breaking: false,
        }
    }
}

// --- Top-level configuration ---

/// The complete, immutable configuration for one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub typeface: Typeface,
    /// Shared fill color.
    pub color: Color,
    /// Compress inter-character spacing toward continuous, waveform-like
    /// output.
    pub biometric: bool,
    /// Global geometry scale factor.
    pub scale: f32,
    pub epetri: EpetriOptions,
    pub ricetta: RicettaOptions,
    pub vitkovac: VitkovacOptions,
    pub poetry: PoetryOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            typeface: Typeface::default(),
            color: Color::BLACK,
            biometric: false,
            scale: 1.0,
            epetri: EpetriOptions::default(),
            ricetta: RicettaOptions::default(),
            vitkovac: VitkovacOptions::default(),
            poetry: PoetryOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_option_strings_fall_back_to_defaults() {
        assert_eq!(Typeface::parse("not-a-face"), Typeface::KvarHBrut);
        assert_eq!(EpetriWeight::parse("bogus"), EpetriWeight::Regular1);
        assert_eq!(VitkovacWeight::parse(""), VitkovacWeight::Regular);
        assert_eq!(PoetryMode::parse("cubist"), PoetryMode::Scattered);
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = RenderConfig::default();
        config.typeface = Typeface::VitkovacH;
        config.vitkovac.weight = VitkovacWeight::Heavy;
        config.color = Color::rgb(10, 20, 30);
        let json = serde_json::to_string(&config).expect("serialize");
        let back: RenderConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn partial_config_takes_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"typeface":"epetri"}"#).expect("deserialize");
        assert_eq!(config.typeface, Typeface::Epetri);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.epetri.weight, EpetriWeight::Regular1);
    }

    #[test]
    fn split_colors_resolve_against_shared_fill() {
        let mut opts = VitkovacOptions::default();
        let shared = Color::rgb(1, 2, 3);
        assert_eq!(opts.colors(shared), (shared, shared));
        opts.split_colors = true;
        opts.main_line_color = Color::rgb(9, 9, 9);
        opts.alteration_color = Color::rgb(4, 4, 4);
        assert_eq!(
            opts.colors(shared),
            (Color::rgb(9, 9, 9), Color::rgb(4, 4, 4))
        );
    }
}
