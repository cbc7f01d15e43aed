// src/core/mod.rs
//! Normalization and presentation derivation shared by every template

pub mod formatters;
pub mod normalizer;
pub mod photo;
pub mod view;
pub mod visibility;

pub use formatters::{
    format_date_range, format_month_year, proficiency_label, skill_level_percent,
    skill_level_to_width_percent,
};
pub use normalizer::{normalize, normalize_with, NormalizeOptions};
pub use photo::{resolve_photo, PLACEHOLDER_PHOTO};
pub use view::{DerivedValues, ResumeView, SectionHeading};
pub use visibility::{section_visibility, SectionVisibility};
