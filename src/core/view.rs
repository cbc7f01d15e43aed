// src/core/view.rs
//! Everything a template needs for one render pass, derived in one go.

use serde::Serialize;

use super::formatters::{format_date_range, proficiency_label, skill_level_to_width_percent};
use super::normalizer::normalize_with;
use super::visibility::SectionVisibility;
use crate::i18n::{LocaleTag, Translate};
use crate::template_system::TemplateProfile;
use crate::theme::Theme;
use crate::types::{DisplaySettings, NormalizedResume, RawResumeRecord, ResolvedSettings, Section};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHeading {
    pub section: Section,
    pub title: String,
}

/// Display strings aligned index-for-index with the normalized lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedValues {
    pub experience_dates: Vec<String>,
    pub internship_dates: Vec<String>,
    pub education_dates: Vec<String>,
    pub course_dates: Vec<String>,
    pub extracurricular_dates: Vec<String>,
    /// `None` when levels are hidden or the skill has no level.
    pub skill_widths: Vec<Option<String>>,
    pub language_labels: Vec<String>,
    pub language_widths: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeView {
    pub template: String,
    pub locale: LocaleTag,
    pub settings: ResolvedSettings,
    pub theme: Theme,
    pub data: NormalizedResume,
    pub visibility: SectionVisibility,
    pub photo: String,
    /// Visible sections, in display order, with their translated titles.
    pub sections: Vec<SectionHeading>,
    pub derived: DerivedValues,
}

impl ResumeView {
    pub fn build<T: Translate + ?Sized>(
        raw: &RawResumeRecord,
        settings: &DisplaySettings,
        profile: &TemplateProfile,
        translate: &T,
        locale: &LocaleTag,
    ) -> Self {
        let settings = settings.resolve(profile);
        let theme = Theme::derive(&settings);
        let data = normalize_with(raw, translate, &profile.normalize_options());
        let visibility = SectionVisibility::evaluate(&data).restrict_to(|s| profile.supports(s));

        let sections = visibility
            .visible_sections()
            .into_iter()
            .map(|section| SectionHeading {
                section,
                title: theme.heading(&translate.translate(&section.title_key())),
            })
            .collect();

        let derived = derive_values(&data, &settings, translate, locale);

        Self {
            template: profile.id.clone(),
            locale: locale.clone(),
            photo: data.photolink.clone(),
            settings,
            theme,
            data,
            visibility,
            sections,
            derived,
        }
    }
}

fn derive_values<T: Translate + ?Sized>(
    data: &NormalizedResume,
    settings: &ResolvedSettings,
    translate: &T,
    locale: &LocaleTag,
) -> DerivedValues {
    let range = |start: &Option<String>, end: &Option<String>| {
        format_date_range(start.as_deref(), end.as_deref(), locale, translate)
    };
    let width = |level: Option<&str>| {
        level
            .filter(|l| !l.trim().is_empty())
            .map(skill_level_to_width_percent)
    };

    DerivedValues {
        experience_dates: data
            .experiences
            .iter()
            .map(|e| range(&e.start_date, &e.end_date))
            .collect(),
        internship_dates: data
            .internships
            .iter()
            .map(|e| range(&e.start_date, &e.end_date))
            .collect(),
        education_dates: data
            .educations
            .iter()
            .map(|e| range(&e.start_date, &e.end_date))
            .collect(),
        course_dates: data
            .courses
            .iter()
            .map(|c| range(&c.start_date, &c.end_date))
            .collect(),
        extracurricular_dates: data
            .extracurriculars
            .iter()
            .map(|e| range(&e.start_date, &e.end_date))
            .collect(),
        skill_widths: data
            .skills
            .iter()
            .map(|s| {
                if settings.hide_skill_level {
                    None
                } else {
                    width(s.level.as_deref())
                }
            })
            .collect(),
        language_labels: data
            .languages
            .iter()
            .map(|l| proficiency_label(l.proficiency.as_deref().unwrap_or_default(), translate))
            .collect(),
        language_widths: data
            .languages
            .iter()
            .map(|l| width(l.level.as_deref()))
            .collect(),
        references_note: data
            .referrals
            .provided_on_request
            .then(|| translate.translate("resume.references.provided_on_request")),
    }
}
