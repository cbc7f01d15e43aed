// src/theme/mod.rs
//! Style factory: resolved display settings in, immutable theme out.

pub mod color;

pub use color::Rgb;

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::types::ResolvedSettings;

const FALLBACK_ACCENT: Rgb = Rgb::new(0x25, 0x63, 0xeb);
const MIN_LINE_HEIGHT: f32 = 1.0;
const MAX_LINE_HEIGHT: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingCase {
    Uppercase,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub accent: String,
    pub accent_soft: String,
    pub accent_strong: String,
    pub on_accent: String,
    pub text: String,
    pub muted_text: String,
    pub background: String,
    pub sidebar_background: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub template: String,
    pub palette: Palette,
    pub colors: BTreeMap<String, String>,
    pub font_stack: String,
    pub line_height: f32,
    pub heading_case: HeadingCase,
    pub dark_mode: bool,
    pub pdf_mode: bool,
    /// Transitions and entrance effects; off for PDF export.
    pub animations: bool,
    pub page_shadow: bool,
}

impl Theme {
    pub fn derive(settings: &ResolvedSettings) -> Self {
        let accent = Rgb::parse_hex(&settings.accent_color).unwrap_or_else(|| {
            debug!("Unparseable accent colour '{}', using fallback", settings.accent_color);
            FALLBACK_ACCENT
        });

        let (background, text) = if settings.dark_mode {
            (Rgb::new(0x11, 0x18, 0x27), Rgb::new(0xf3, 0xf4, 0xf6))
        } else {
            (Rgb::WHITE, Rgb::new(0x1f, 0x29, 0x37))
        };

        let palette = Palette {
            accent: accent.to_hex(),
            accent_soft: accent.mix(background, 0.85).to_hex(),
            accent_strong: accent.mix(Rgb::BLACK, 0.2).to_hex(),
            on_accent: accent.contrasting_text().to_hex(),
            text: text.to_hex(),
            muted_text: text.mix(background, 0.4).to_hex(),
            background: background.to_hex(),
            sidebar_background: accent.mix(background, 0.92).to_hex(),
            border: text.mix(background, 0.85).to_hex(),
        };

        let colors = settings
            .colors
            .iter()
            .filter_map(|(name, value)| Rgb::parse_hex(value).map(|c| (name.clone(), c.to_hex())))
            .collect();

        Self {
            template: settings.template.clone(),
            palette,
            colors,
            font_stack: font_stack(&settings.font_family),
            line_height: settings.line_spacing.clamp(MIN_LINE_HEIGHT, MAX_LINE_HEIGHT),
            heading_case: if settings.headings_uppercase {
                HeadingCase::Uppercase
            } else {
                HeadingCase::None
            },
            dark_mode: settings.dark_mode,
            pdf_mode: settings.pdf_mode,
            animations: !settings.pdf_mode,
            page_shadow: !settings.pdf_mode,
        }
    }

    pub fn heading(&self, text: &str) -> String {
        match self.heading_case {
            HeadingCase::Uppercase => text.to_uppercase(),
            HeadingCase::None => text.to_string(),
        }
    }
}

fn font_stack(family: &str) -> String {
    let family = family.trim().trim_matches(|c| c == '\'' || c == '"');
    let generic = if is_serif(family) { "serif" } else { "sans-serif" };
    if family.is_empty() {
        return generic.to_string();
    }
    format!("'{}', {}", family, generic)
}

fn is_serif(family: &str) -> bool {
    let lower = family.to_lowercase();
    (lower.contains("serif") && !lower.contains("sans"))
        || ["merriweather", "playfair", "georgia", "garamond", "times"]
            .iter()
            .any(|name| lower.contains(name))
}
