// src/main.rs

// Declare modules
pub mod color;
pub mod config;
pub mod decode;
pub mod patterns;
pub mod poetry;
pub mod primitive;
pub mod renderer;
pub mod svg;

use std::path::PathBuf;

use anyhow::Context;
use log::info;

use crate::color::Color;
use crate::config::{
    EpetriForm, EpetriWeight, IndexStyle, Orientation, PoetryMode, RenderConfig, RicettaWeight,
    TemplateKind, Typeface, VitkovacForm, VitkovacWeight,
};

const USAGE: &str = "\
Usage: atypo [OPTIONS] [TEXT]...

Renders TEXT in a constructed biometric typeface and writes an SVG document
to stdout (or to --output).

Options:
      --typeface NAME      kvar-h-brut | kvar-h-tite | kvar-v | kvar-sq |
                           epetri | midis-h | midis-v | ricetta |
                           vitkovac-h | vitkovac-v | visual-poetry
      --color HEX          shared fill color, e.g. '#1a1a1a'
      --biometric          compress spacing toward continuous output
      --scale FACTOR       global geometry scale (default 1.0)
      --config FILE        JSON render configuration (options may override)
      --output FILE        write the SVG document to FILE
      --background         opaque white background instead of transparent
      --describe           print the decoding guide instead of rendering
      --epetri-weight W    anorexic-1..3 | regular-1..2 | bold-1..2
      --epetri-form F      airy | regular
      --epetri-index       draw index ticks at glyph starts
      --ricetta-weight W   normal | semibold | bold | pixel-crack
      --orientation O      horizontal | vertical
      --compress-spacing   drop wide character separation (ricetta)
      --form F             perm | tite
      --weight W           thin | regular | bold | heavy
      --index-style S      off | rectangle
      --main-color HEX     separate main-line color (enables split colors)
      --alt-color HEX      separate alteration color (enables split colors)
      --poetry-mode M      scattered | layered | curved | spiral |
                           concrete | template
      --template T         falling-words | heart-shape | tree-growth |
                           wave-motion | explosion | river-flow
      --base-typeface NAME word typeface for composition modes
      --semantic           semantic spacing in concrete mode
      --word-breaking      scatter characters instead of words
  -h, --help               print this help
";

fn main() -> anyhow::Result<()> {
    // Default filter is "info" unless RUST_LOG overrides it.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = RenderConfig::default();
    let mut output: Option<PathBuf> = None;
    let mut background = false;
    let mut describe_only = false;
    let mut text_parts: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .with_context(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{}", USAGE);
                return Ok(());
            }
            "--typeface" => config.typeface = Typeface::parse(&value("--typeface")?),
            "--color" => config.color = Color::parse_lenient(&value("--color")?),
            "--biometric" => config.biometric = true,
            "--scale" => {
                let raw = value("--scale")?;
                config.scale = raw
                    .parse()
                    .with_context(|| format!("invalid --scale value '{}'", raw))?;
            }
            "--config" => {
                let path = value("--config")?;
                let data = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file '{}'", path))?;
                config = serde_json::from_str(&data)
                    .with_context(|| format!("failed to parse config file '{}'", path))?;
            }
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--background" => background = true,
            "--describe" => describe_only = true,
            "--epetri-weight" => {
                config.epetri.weight = EpetriWeight::parse(&value("--epetri-weight")?)
            }
            "--epetri-form" => config.epetri.form = EpetriForm::parse(&value("--epetri-form")?),
            "--epetri-index" => config.epetri.index = true,
            "--ricetta-weight" => {
                config.ricetta.weight = RicettaWeight::parse(&value("--ricetta-weight")?)
            }
            "--orientation" => {
                config.ricetta.orientation = Orientation::parse(&value("--orientation")?)
            }
            "--compress-spacing" => config.ricetta.keep_spaces = false,
            "--form" => config.vitkovac.form = VitkovacForm::parse(&value("--form")?),
            "--weight" => config.vitkovac.weight = VitkovacWeight::parse(&value("--weight")?),
            "--index-style" => {
                config.vitkovac.index_style = IndexStyle::parse(&value("--index-style")?)
            }
            "--main-color" => {
                config.vitkovac.split_colors = true;
                config.vitkovac.main_line_color = Color::parse_lenient(&value("--main-color")?);
            }
            "--alt-color" => {
                config.vitkovac.split_colors = true;
                config.vitkovac.alteration_color = Color::parse_lenient(&value("--alt-color")?);
            }
            "--poetry-mode" => {
                config.poetry.mode = PoetryMode::parse(&value("--poetry-mode")?)
            }
            "--template" => config.poetry.template = TemplateKind::parse(&value("--template")?),
            "--base-typeface" => {
                config.poetry.base_typeface = Typeface::parse(&value("--base-typeface")?)
            }
            "--semantic" => config.poetry.semantic_spacing = true,
            "--word-breaking" => config.poetry.word_breaking = true,
            other => text_parts.push(other.to_string()),
        }
    }

    let text = text_parts.join(" ");

    if describe_only {
        for ch in text.chars().filter(|c| *c != ' ') {
            println!("{}  {}", ch, decode::describe(config.typeface, ch, &config));
        }
        return Ok(());
    }

    let result = renderer::render(&text, &config);
    info!(
        "Rendered {:?}: {} primitives, {}x{}",
        config.typeface,
        result.primitives.len(),
        result.width,
        result.height
    );

    let bg = if background { Some(Color::WHITE) } else { None };
    let doc = svg::document(&result, bg);

    match output {
        Some(path) => {
            std::fs::write(&path, &doc)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            info!("Wrote {} bytes to {}", doc.len(), path.display());
        }
        None => println!("{}", doc),
    }

    Ok(())
}
