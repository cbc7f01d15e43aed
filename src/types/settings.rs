// src/types/settings.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::template_system::TemplateProfile;
use crate::theme::Rgb;

/// Display settings chosen in the editor. Every field is optional; gaps are
/// filled from the active template's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
    pub line_spacing: Option<f32>,
    pub headings_uppercase: Option<bool>,
    pub hide_skill_level: Option<bool>,
    pub dark_mode: Option<bool>,
    pub pdf_mode: Option<bool>,
    /// Extra named colours for templates with richer palettes.
    pub colors: BTreeMap<String, String>,
}

/// Settings after template defaults have been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSettings {
    pub template: String,
    pub accent_color: String,
    pub font_family: String,
    pub line_spacing: f32,
    pub headings_uppercase: bool,
    pub hide_skill_level: bool,
    pub dark_mode: bool,
    pub pdf_mode: bool,
    pub colors: BTreeMap<String, String>,
}

impl DisplaySettings {
    pub fn resolve(&self, profile: &TemplateProfile) -> ResolvedSettings {
        let mut colors = profile.colors.clone();
        colors.extend(self.colors.clone());

        ResolvedSettings {
            template: profile.id.clone(),
            accent_color: self
                .accent_color
                .clone()
                .filter(|c| Rgb::parse_hex(c).is_some())
                .unwrap_or_else(|| profile.accent_color.clone()),
            font_family: self
                .font_family
                .clone()
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| profile.font_family.clone()),
            line_spacing: self
                .line_spacing
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(profile.line_spacing),
            headings_uppercase: self.headings_uppercase.unwrap_or(profile.headings_uppercase),
            hide_skill_level: self.hide_skill_level.unwrap_or(profile.hide_skill_level),
            dark_mode: self.dark_mode.unwrap_or(false),
            pdf_mode: self.pdf_mode.unwrap_or(false),
            colors,
        }
    }
}
