// src/i18n/catalog.rs
//! Message catalogs keyed by dotted paths such as `resume.sections.skills`.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{info, warn};

use super::{LocaleTag, Translate};
use crate::utils::{get_file_extension, read_structured_file};

const EN: &[(&str, &str)] = &[
    ("resume.personal_info.full_name_placeholder", "Your Name"),
    ("resume.personal_info.job_title_placeholder", "Your Job Title"),
    ("resume.personal_info.email_placeholder", "email@example.com"),
    ("resume.personal_info.phone_placeholder", "+1 234 567 890"),
    ("resume.personal_info.summary_placeholder", "A short summary of your profile"),
    ("resume.present", "Present"),
    ("resume.languages.levels.native", "Native"),
    ("resume.languages.levels.fluent", "Fluent"),
    ("resume.languages.levels.advanced", "Advanced"),
    ("resume.languages.levels.intermediate", "Intermediate"),
    ("resume.languages.levels.beginner", "Beginner"),
    ("resume.references.provided_on_request", "References available upon request"),
    ("resume.sections.personal_details", "Personal Details"),
    ("resume.sections.experiences", "Experience"),
    ("resume.sections.education", "Education"),
    ("resume.sections.internships", "Internships"),
    ("resume.sections.courses", "Courses"),
    ("resume.sections.skills", "Skills"),
    ("resume.sections.languages", "Languages"),
    ("resume.sections.hobbies", "Hobbies"),
    ("resume.sections.extracurriculars", "Extracurricular Activities"),
    ("resume.sections.custom_sections", "Additional Information"),
    ("resume.sections.references", "References"),
];

const FR: &[(&str, &str)] = &[
    ("resume.personal_info.full_name_placeholder", "Votre nom"),
    ("resume.personal_info.job_title_placeholder", "Votre poste"),
    ("resume.personal_info.email_placeholder", "email@exemple.com"),
    ("resume.personal_info.phone_placeholder", "+33 1 23 45 67 89"),
    ("resume.personal_info.summary_placeholder", "Un court résumé de votre profil"),
    ("resume.present", "Présent"),
    ("resume.languages.levels.native", "Langue maternelle"),
    ("resume.languages.levels.fluent", "Courant"),
    ("resume.languages.levels.advanced", "Avancé"),
    ("resume.languages.levels.intermediate", "Intermédiaire"),
    ("resume.languages.levels.beginner", "Débutant"),
    ("resume.references.provided_on_request", "Références disponibles sur demande"),
    ("resume.sections.personal_details", "Informations personnelles"),
    ("resume.sections.experiences", "Expérience professionnelle"),
    ("resume.sections.education", "Formation"),
    ("resume.sections.internships", "Stages"),
    ("resume.sections.courses", "Cours"),
    ("resume.sections.skills", "Compétences"),
    ("resume.sections.languages", "Langues"),
    ("resume.sections.hobbies", "Centres d'intérêt"),
    ("resume.sections.extracurriculars", "Activités extra-professionnelles"),
    ("resume.sections.custom_sections", "Informations complémentaires"),
    ("resume.sections.references", "Références"),
];

/// One language's messages. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    messages: BTreeMap<String, String>,
}

impl Catalog {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            messages: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Flattens a nested message tree (`{resume: {present: "…"}}`) into dotted keys.
    pub fn from_value(value: &Value) -> Self {
        let mut messages = BTreeMap::new();
        flatten("", value, &mut messages);
        Self { messages }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let value: Value = read_structured_file(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        if !value.is_object() {
            anyhow::bail!("Catalog {} must contain a mapping", path.display());
        }
        Ok(Self::from_value(&value))
    }

    /// Entries of `other` win over ours.
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        Value::String(s) if !prefix.is_empty() => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) if !prefix.is_empty() => {
            out.insert(prefix.to_string(), n.to_string());
        }
        _ => {}
    }
}

/// Catalogs for every known language, English always present.
#[derive(Debug, Clone)]
pub struct Catalogs {
    catalogs: HashMap<String, Catalog>,
}

impl Catalogs {
    pub fn builtin() -> Self {
        let english = Catalog::from_pairs(EN);
        let mut french = english.clone();
        french.merge(Catalog::from_pairs(FR));

        Self {
            catalogs: HashMap::from([("en".to_string(), english), ("fr".to_string(), french)]),
        }
    }

    /// Built-ins extended by `<lang>.yaml|yml|json` files in `locales_dir`.
    pub fn load(locales_dir: &Path) -> Result<Self> {
        let mut catalogs = Self::builtin();

        if !locales_dir.exists() {
            warn!(
                "Locales directory does not exist: {}, using built-in catalogs",
                locales_dir.display()
            );
            return Ok(catalogs);
        }

        let entries = std::fs::read_dir(locales_dir).with_context(|| {
            format!("Failed to read locales directory: {}", locales_dir.display())
        })?;

        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            let file_name = path.to_string_lossy().to_string();
            if !path.is_file()
                || !matches!(get_file_extension(&file_name).as_deref(), Some("yaml" | "yml" | "json"))
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let language = LocaleTag::parse(stem).language().to_string();

            match Catalog::load(&path) {
                Ok(catalog) => {
                    info!("Loaded {} messages for '{}' from {}", catalog.len(), language, path.display());
                    catalogs.insert(&language, catalog);
                }
                Err(e) => warn!("Skipping catalog {}: {:#}", path.display(), e),
            }
        }

        Ok(catalogs)
    }

    /// Adds messages for a language, layered over English so gaps still read naturally.
    pub fn insert(&mut self, language: &str, catalog: Catalog) {
        let base = self
            .catalogs
            .get(language)
            .or_else(|| self.catalogs.get("en"))
            .cloned()
            .unwrap_or_default();
        let mut merged = base;
        merged.merge(catalog);
        self.catalogs.insert(language.to_string(), merged);
    }

    pub fn for_locale(&self, locale: &LocaleTag) -> &Catalog {
        self.catalogs
            .get(locale.language())
            .or_else(|| self.catalogs.get("en"))
            .unwrap_or(&EMPTY)
    }

    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.catalogs.keys().cloned().collect();
        languages.sort();
        languages
    }
}

static EMPTY: Catalog = Catalog {
    messages: BTreeMap::new(),
};
