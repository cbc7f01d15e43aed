//! Résumé data normalization and template presentation helpers.
//!
//! Raw records go through [`core::normalize`] to become a
//! [`NormalizedResume`]; [`ResumeView`] adds visibility, theme and the
//! localized display strings a template renders.

pub mod cli;
pub mod config;
pub mod core;
pub mod i18n;
pub mod template_system;
pub mod theme;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::core::{
    format_month_year, normalize, normalize_with, proficiency_label, resolve_photo,
    section_visibility, skill_level_to_width_percent, NormalizeOptions, ResumeView,
    SectionVisibility,
};
pub use crate::i18n::{Catalog, Catalogs, LocaleTag, Translate};
pub use crate::template_system::{TemplateProfile, TemplateRegistry};
pub use crate::theme::Theme;
pub use crate::types::{DisplaySettings, NormalizedResume, RawResumeRecord};
pub use crate::web::start_web_server;
