// src/utils.rs
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Normalize template name for lookup: "New York", "new-york" and "newyork" are the same template
pub fn normalize_template_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy();
        validate_file_extension(&name, &["json", "yaml", "yml", "toml"])?;
        match get_file_extension(&name).as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Ok(Self::Toml),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        match self {
            Self::Json => serde_json::from_str(content).context("Failed to parse JSON"),
            Self::Yaml => serde_yaml::from_str(content).context("Failed to parse YAML"),
            Self::Toml => toml::from_str(content).context("Failed to parse TOML"),
        }
    }
}

/// Read a JSON, YAML or TOML file, picking the parser from the extension
pub fn read_structured_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DataFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    format
        .parse(&content)
        .with_context(|| format!("Invalid content in {}", path.display()))
}
