// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::i18n::{Catalogs, LocaleTag};
use crate::template_system::{TemplateRegistry, DEFAULT_TEMPLATE};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub templates_path: PathBuf,
    pub locales_path: PathBuf,
    pub default_locale: String,
    pub default_template: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            templates_path: PathBuf::from("templates"),
            locales_path: PathBuf::from("locales"),
            default_locale: "en".to_string(),
            default_template: DEFAULT_TEMPLATE.to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: AppConfig,
    #[serde(default)]
    production: AppConfig,
}

impl AppConfig {
    /// Load configuration for the current environment, falling back to defaults
    /// when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml(&content, &environment)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            info!("{} not found, using default configuration", path.display());
            Self::default()
        };

        config.with_port_override(std::env::var("CV_TEMPLATES_PORT").ok())?.resolved()
    }

    fn get_environment() -> String {
        std::env::var("CV_TEMPLATES_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    fn with_port_override(mut self, port: Option<String>) -> Result<Self> {
        if let Some(port) = port {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("CV_TEMPLATES_PORT must be a valid port number"))?;
        }
        Ok(self)
    }

    /// Make paths absolute
    fn resolved(self) -> Result<Self> {
        Ok(Self {
            templates_path: Self::resolve_path(&self.templates_path)?,
            locales_path: Self::resolve_path(&self.locales_path)?,
            ..self
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    pub fn default_locale(&self) -> LocaleTag {
        LocaleTag::parse(&self.default_locale)
    }

    /// Built-in templates plus manifests from `templates_path`.
    pub fn registry(&self) -> Result<TemplateRegistry> {
        let mut registry = TemplateRegistry::load(&self.templates_path)?;
        registry.set_default(&self.default_template)?;
        Ok(registry)
    }

    pub fn catalogs(&self) -> Result<Catalogs> {
        Catalogs::load(&self.locales_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
local:
  templates_path: ./templates
  default_locale: fr
production:
  templates_path: /app/templates
  locales_path: /app/locales
  default_template: toronto
  port: 9000
"#;

    #[test]
    fn test_from_yaml_selects_environment() {
        let local = AppConfig::from_yaml(SAMPLE, "local").unwrap();
        assert_eq!(local.templates_path, PathBuf::from("./templates"));
        assert_eq!(local.default_locale, "fr");
        assert_eq!(local.locales_path, PathBuf::from("locales"));
        assert_eq!(local.port, 8000);

        let production = AppConfig::from_yaml(SAMPLE, "production").unwrap();
        assert_eq!(production.default_template, "toronto");
        assert_eq!(production.port, 9000);

        let unknown = AppConfig::from_yaml(SAMPLE, "staging").unwrap();
        assert_eq!(unknown, local);
    }

    #[test]
    fn test_from_yaml_rejects_bad_types() {
        assert!(AppConfig::from_yaml("local:\n  port: many\n", "local").is_err());
    }

    #[test]
    fn test_port_override() {
        let config = AppConfig::default()
            .with_port_override(Some("8123".to_string()))
            .unwrap();
        assert_eq!(config.port, 8123);
        assert!(AppConfig::default()
            .with_port_override(Some("http".to_string()))
            .is_err());
    }

    #[test]
    fn test_resolved_paths_are_absolute() {
        let config = AppConfig::default().resolved().unwrap();
        assert!(config.templates_path.is_absolute());
        assert!(config.locales_path.is_absolute());
    }

    #[test]
    fn test_registry_uses_default_template() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            templates_path: dir.path().to_path_buf(),
            locales_path: dir.path().to_path_buf(),
            default_template: "Nineveh".to_string(),
            ..Default::default()
        };
        assert_eq!(config.registry().unwrap().default_profile().id, "nineveh");
        assert_eq!(config.catalogs().unwrap().languages(), vec!["en", "fr"]);

        let broken = AppConfig {
            default_template: "atlantis".to_string(),
            ..config
        };
        assert!(broken.registry().is_err());
    }
}
