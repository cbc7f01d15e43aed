// src/template_system.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::normalizer::NormalizeOptions;
use crate::types::Section;
use crate::utils::normalize_template_id;

pub const DEFAULT_TEMPLATE: &str = "sydney";

/// Per-template defaults. Templates disagree on several defaults, so each one
/// carries its own instead of sharing a canonical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub accent_color: String,
    pub font_family: String,
    pub line_spacing: f32,
    pub headings_uppercase: bool,
    pub hide_skill_level: bool,
    /// `providedOnRequest` assumed when the record has no referrals at all.
    pub referrals_on_request: bool,
    pub sections: BTreeSet<Section>,
    pub colors: BTreeMap<String, String>,
}

/// Partial override read from `<templates>/<id>/manifest.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
    pub line_spacing: Option<f32>,
    pub headings_uppercase: Option<bool>,
    pub hide_skill_level: Option<bool>,
    pub referrals_on_request: Option<bool>,
    pub sections: Option<Vec<Section>>,
    pub colors: Option<BTreeMap<String, String>>,
}

impl TemplateProfile {
    fn new(id: &str, name: &str, description: &str, accent: &str, font: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            accent_color: accent.to_string(),
            font_family: font.to_string(),
            line_spacing: 1.5,
            headings_uppercase: false,
            hide_skill_level: false,
            referrals_on_request: false,
            sections: Section::ALL.into_iter().collect(),
            colors: BTreeMap::new(),
        }
    }

    fn uppercase_headings(mut self) -> Self {
        self.headings_uppercase = true;
        self
    }

    fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    fn references_on_request(mut self) -> Self {
        self.referrals_on_request = true;
        self
    }

    fn without(mut self, sections: &[Section]) -> Self {
        for section in sections {
            self.sections.remove(section);
        }
        self
    }

    fn color(mut self, name: &str, value: &str) -> Self {
        self.colors.insert(name.to_string(), value.to_string());
        self
    }

    pub fn supports(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            referrals_on_request: self.referrals_on_request,
        }
    }

    pub fn apply(&mut self, manifest: TemplateManifest) {
        if let Some(name) = manifest.name {
            self.name = name;
        }
        if let Some(description) = manifest.description {
            self.description = description;
        }
        if let Some(accent) = manifest.accent_color {
            self.accent_color = accent;
        }
        if let Some(font) = manifest.font_family {
            self.font_family = font;
        }
        if let Some(spacing) = manifest.line_spacing {
            self.line_spacing = spacing;
        }
        if let Some(uppercase) = manifest.headings_uppercase {
            self.headings_uppercase = uppercase;
        }
        if let Some(hide) = manifest.hide_skill_level {
            self.hide_skill_level = hide;
        }
        if let Some(on_request) = manifest.referrals_on_request {
            self.referrals_on_request = on_request;
        }
        if let Some(sections) = manifest.sections {
            self.sections = sections.into_iter().collect();
        }
        if let Some(colors) = manifest.colors {
            self.colors.extend(colors);
        }
    }
}

fn builtin_profiles() -> Vec<TemplateProfile> {
    use Section::*;

    vec![
        TemplateProfile::new("babylon", "Babylon", "Two columns with a solid sidebar", "#1e3a5f", "Lato")
            .uppercase_headings()
            .color("sidebar", "#1e3a5f")
            .color("sidebar_text", "#ffffff"),
        TemplateProfile::new("baghdad", "Baghdad", "Classic serif layout with ornamented rules", "#8b5e34", "Merriweather")
            .line_spacing(1.4)
            .color("ornament", "#d4a373"),
        TemplateProfile::new("basra", "Basra", "Compact single column with skill bars", "#0f766e", "Open Sans")
            .uppercase_headings(),
        TemplateProfile::new("eridu", "Eridu", "Timeline layout with a tinted header", "#7c3aed", "Poppins")
            .line_spacing(1.6)
            .references_on_request()
            .color("header", "#ede9fe"),
        TemplateProfile::new("newyork", "New York", "Editorial layout with large headings", "#111827", "Playfair Display")
            .uppercase_headings()
            .line_spacing(1.4)
            .without(&[Internships, Extracurriculars]),
        TemplateProfile::new("nineveh", "Nineveh", "Bold header band with a right sidebar", "#b91c1c", "Roboto")
            .uppercase_headings()
            .references_on_request()
            .color("band", "#7f1d1d"),
        TemplateProfile::new("osaka", "Osaka", "Minimal layout with generous whitespace", "#db2777", "Noto Sans")
            .without(&[CustomSections]),
        TemplateProfile::new("sumer", "Sumer", "Serif layout with a warm palette", "#ca8a04", "Source Serif Pro")
            .uppercase_headings()
            .without(&[Courses])
            .color("paper", "#fffbeb"),
        TemplateProfile::new("sydney", "Sydney", "Clean single column", "#2563eb", "Inter"),
        TemplateProfile::new("toronto", "Toronto", "Two columns with an accent stripe", "#dc2626", "Raleway")
            .uppercase_headings()
            .references_on_request()
            .color("stripe", "#dc2626"),
    ]
}

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateProfile>,
    default_id: String,
}

impl TemplateRegistry {
    /// The ten bundled templates.
    pub fn builtin() -> Self {
        let templates = builtin_profiles()
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect();
        Self {
            templates,
            default_id: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Built-ins overlaid with any `manifest.toml` found under `templates_dir`.
    pub fn load(templates_dir: &Path) -> Result<Self> {
        let mut registry = Self::builtin();
        info!("Discovering template manifests in: {}", templates_dir.display());

        if !templates_dir.exists() {
            warn!(
                "Templates directory does not exist: {}, using built-in templates",
                templates_dir.display()
            );
            return Ok(registry);
        }

        let entries = fs::read_dir(templates_dir).with_context(|| {
            format!(
                "Failed to read templates directory: {}",
                templates_dir.display()
            )
        })?;

        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            let manifest_path = path.join("manifest.toml");
            if !path.is_dir() || !manifest_path.exists() {
                continue;
            }

            let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            match read_manifest(&manifest_path) {
                Ok(manifest) => {
                    let id = normalize_template_id(dir_name);
                    registry.register_manifest(&id, dir_name, manifest);
                    info!("Loaded template manifest: {} from {}", id, path.display());
                }
                Err(e) => {
                    warn!("Failed to load template manifest {}: {:#}", manifest_path.display(), e);
                }
            }
        }

        info!("Loaded {} templates", registry.templates.len());
        Ok(registry)
    }

    fn register_manifest(&mut self, id: &str, display_name: &str, manifest: TemplateManifest) {
        if !self.templates.contains_key(id) {
            let mut derived = self.default_profile().clone();
            derived.id = id.to_string();
            derived.name = display_name.to_string();
            derived.description = format!("{} CV template", display_name);
            derived.colors.clear();
            self.templates.insert(id.to_string(), derived);
        }
        if let Some(profile) = self.templates.get_mut(id) {
            profile.apply(manifest);
        }
    }

    pub fn get(&self, template_id: &str) -> Option<&TemplateProfile> {
        self.templates.get(&normalize_template_id(template_id))
    }

    pub fn template_exists(&self, template_id: &str) -> bool {
        self.get(template_id).is_some()
    }

    pub fn default_profile(&self) -> &TemplateProfile {
        self.templates
            .get(&self.default_id)
            .or_else(|| self.templates.values().next())
            .expect("template registry always holds the built-in templates")
    }

    /// Requested template, or the default one when absent or unknown.
    pub fn resolve(&self, template_id: Option<&str>) -> &TemplateProfile {
        match template_id {
            Some(id) => self.get(id).unwrap_or_else(|| {
                warn!("Unknown template '{}', falling back to {}", id, self.default_id);
                self.default_profile()
            }),
            None => {
                debug!("No template requested, using {}", self.default_id);
                self.default_profile()
            }
        }
    }

    pub fn set_default(&mut self, template_id: &str) -> Result<()> {
        let id = normalize_template_id(template_id);
        if !self.templates.contains_key(&id) {
            anyhow::bail!(
                "Unknown default template: {}. Available templates: {:?}",
                template_id,
                self.list_templates()
            );
        }
        self.default_id = id;
        Ok(())
    }

    pub fn list_templates(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &TemplateProfile> {
        self.templates.values()
    }
}

fn read_manifest(path: &Path) -> Result<TemplateManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse manifest: {}", path.display()))
}
