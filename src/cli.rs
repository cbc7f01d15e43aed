// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::core::{normalize_with, ResumeView};
use crate::i18n::{Catalog, Catalogs, LocaleTag};
use crate::template_system::TemplateRegistry;
use crate::types::{DisplaySettings, RawResumeRecord};
use crate::utils::read_structured_file;

#[derive(Parser)]
#[command(name = "cv-templates")]
#[command(about = "Normalize résumé data for CV templates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a raw résumé record (JSON, YAML or TOML) and print it as JSON
    Normalize {
        input: PathBuf,
        #[arg(long)]
        template: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        /// Display settings file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Extra translations layered over the locale's catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print the full template view instead of the normalized record
        #[arg(long)]
        view: bool,
    },
    /// List available templates
    Templates,
    /// Start the HTTP API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

pub struct NormalizeArgs<'a> {
    pub input: &'a Path,
    pub template: Option<&'a str>,
    pub locale: Option<&'a str>,
    pub settings: Option<&'a Path>,
    pub catalog: Option<&'a Path>,
    pub view: bool,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Normalize {
            input,
            template,
            locale,
            settings,
            catalog,
            view,
        } => {
            let registry = config.registry()?;
            let catalogs = config.catalogs()?;
            let args = NormalizeArgs {
                input: &input,
                template: template.as_deref(),
                locale: locale.as_deref(),
                settings: settings.as_deref(),
                catalog: catalog.as_deref(),
                view,
            };
            let output = run_normalize(&args, &registry, catalogs, &config.default_locale())?;
            println!("{}", output);
        }

        Command::Templates => {
            let registry = config.registry()?;
            for profile in registry.profiles() {
                let marker = if profile.id == registry.default_profile().id {
                    " (default)"
                } else {
                    ""
                };
                println!("{:<10} {}{}", profile.id, profile.description, marker);
            }
        }

        Command::Serve { port } => {
            let config = AppConfig {
                port: port.unwrap_or(config.port),
                ..config
            };
            crate::web::start_web_server(config).await?;
        }
    }

    Ok(())
}

/// Pretty JSON for one raw record.
pub fn run_normalize(
    args: &NormalizeArgs<'_>,
    registry: &TemplateRegistry,
    mut catalogs: Catalogs,
    default_locale: &LocaleTag,
) -> Result<String> {
    let value: Value = read_structured_file(args.input)?;
    let raw = RawResumeRecord::new(value);

    let locale = args
        .locale
        .map(LocaleTag::parse)
        .unwrap_or_else(|| default_locale.clone());

    if let Some(path) = args.catalog {
        let extra = Catalog::load(path)?;
        info!("Layering {} translations over '{}'", extra.len(), locale.language());
        catalogs.insert(locale.language(), extra);
    }

    let profile = registry.resolve(args.template);
    let translations = catalogs.for_locale(&locale);

    let output = if args.view {
        let settings: DisplaySettings = match args.settings {
            Some(path) => read_structured_file(path)?,
            None => DisplaySettings::default(),
        };
        let view = ResumeView::build(&raw, &settings, profile, translations, &locale);
        serde_json::to_string_pretty(&view)
    } else {
        let resume = normalize_with(&raw, translations, &profile.normalize_options());
        serde_json::to_string_pretty(&resume)
    };

    output.context("Failed to serialize output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(input: &Path) -> NormalizeArgs<'_> {
        NormalizeArgs {
            input,
            template: None,
            locale: None,
            settings: None,
            catalog: None,
            view: false,
        }
    }

    fn run(args: &NormalizeArgs<'_>) -> Value {
        let output = run_normalize(
            args,
            &TemplateRegistry::builtin(),
            Catalogs::builtin(),
            &LocaleTag::english(),
        )
        .unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_cli_parses_normalize() {
        let cli = Cli::try_parse_from([
            "cv-templates",
            "normalize",
            "cv.json",
            "--template",
            "toronto",
            "--view",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        match cli.command {
            Command::Normalize { input, template, view, .. } => {
                assert_eq!(input, PathBuf::from("cv.json"));
                assert_eq!(template.as_deref(), Some("toronto"));
                assert!(view);
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn test_cli_parses_serve_with_global_config() {
        let cli =
            Cli::try_parse_from(["cv-templates", "serve", "--port", "9100", "--config", "prod.yaml"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("prod.yaml"));
        assert!(matches!(cli.command, Command::Serve { port: Some(9100) }));
    }

    #[test]
    fn test_normalize_yaml_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cv.yaml");
        fs::write(
            &input,
            "personal_info:\n  name: Ada Lovelace\nskills:\n  - name: Analysis\n    level: Expert\n",
        )
        .unwrap();

        let value = run(&args(&input));
        assert_eq!(value["personal_info"]["full_name"], "Ada Lovelace");
        assert_eq!(value["skills"][0]["level"], "Expert");
        assert!(value["photolink"].as_str().unwrap().starts_with("data:image/svg+xml"));
    }

    #[test]
    fn test_normalize_view_with_settings_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cv.json");
        fs::write(&input, r#"{"experiences": [{"company": "Acme", "start_date": "2020-01"}]}"#).unwrap();
        let settings = dir.path().join("settings.json");
        fs::write(&settings, r#"{"headingsUppercase": true}"#).unwrap();
        let catalog = dir.path().join("fr.yaml");
        fs::write(&catalog, "resume:\n  present: Aujourd'hui\n").unwrap();

        let value = run(&NormalizeArgs {
            locale: Some("fr-FR"),
            settings: Some(&settings),
            catalog: Some(&catalog),
            view: true,
            ..args(&input)
        });

        assert_eq!(value["template"], "sydney");
        assert_eq!(value["derived"]["experience_dates"][0], "janvier 2020 - Aujourd'hui");
        assert_eq!(value["sections"][0]["title"], "EXPÉRIENCE PROFESSIONNELLE");
    }

    #[test]
    fn test_locale_without_catalog_keeps_month_names() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cv.json");
        fs::write(&input, r#"{"experiences": [{"company": "Acme", "start_date": "2019-05"}]}"#).unwrap();

        let value = run(&NormalizeArgs {
            locale: Some("es"),
            view: true,
            ..args(&input)
        });

        assert_eq!(value["locale"], "es");
        assert_eq!(value["derived"]["experience_dates"][0], "mayo 2019 - Present");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let result = run_normalize(
            &args(&missing),
            &TemplateRegistry::builtin(),
            Catalogs::builtin(),
            &LocaleTag::english(),
        );
        assert!(result.is_err());
    }
}
