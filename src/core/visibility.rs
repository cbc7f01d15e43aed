// src/core/visibility.rs
//! Whether each section has enough data to be worth rendering.

use serde::Serialize;

use crate::types::raw::is_populated;
use crate::types::{Hobbies, Identified, NormalizedResume, Section};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionVisibility {
    pub personal_details: bool,
    pub experiences: bool,
    pub education: bool,
    pub internships: bool,
    pub courses: bool,
    pub skills: bool,
    pub languages: bool,
    pub hobbies: bool,
    pub extracurriculars: bool,
    pub custom_sections: bool,
    pub references: bool,
}

impl SectionVisibility {
    pub fn evaluate(data: &NormalizedResume) -> Self {
        Self {
            personal_details: data
                .personal_info
                .details()
                .into_iter()
                .any(is_populated),
            experiences: any_identified(&data.experiences),
            education: any_identified(&data.educations),
            internships: any_identified(&data.internships),
            courses: any_identified(&data.courses),
            skills: any_identified(&data.skills),
            languages: any_identified(&data.languages),
            hobbies: hobbies_visible(&data.hobbies),
            extracurriculars: any_identified(&data.extracurriculars),
            custom_sections: data
                .custom_sections
                .iter()
                .any(|section| is_populated(section.identifier()) && section.has_body()),
            references: data.referrals.provided_on_request
                || any_identified(&data.referrals.references),
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::PersonalDetails => self.personal_details,
            Section::Experiences => self.experiences,
            Section::Education => self.education,
            Section::Internships => self.internships,
            Section::Courses => self.courses,
            Section::Skills => self.skills,
            Section::Languages => self.languages,
            Section::Hobbies => self.hobbies,
            Section::Extracurriculars => self.extracurriculars,
            Section::CustomSections => self.custom_sections,
            Section::References => self.references,
        }
    }

    fn set(&mut self, section: Section, visible: bool) {
        let slot = match section {
            Section::PersonalDetails => &mut self.personal_details,
            Section::Experiences => &mut self.experiences,
            Section::Education => &mut self.education,
            Section::Internships => &mut self.internships,
            Section::Courses => &mut self.courses,
            Section::Skills => &mut self.skills,
            Section::Languages => &mut self.languages,
            Section::Hobbies => &mut self.hobbies,
            Section::Extracurriculars => &mut self.extracurriculars,
            Section::CustomSections => &mut self.custom_sections,
            Section::References => &mut self.references,
        };
        *slot = visible;
    }

    /// Hides every section the predicate rejects, e.g. sections a template does not lay out.
    pub fn restrict_to(mut self, supported: impl Fn(Section) -> bool) -> Self {
        for section in Section::ALL {
            if !supported(section) {
                self.set(section, false);
            }
        }
        self
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.is_visible(*section))
            .collect()
    }
}

pub fn section_visibility(data: &NormalizedResume) -> SectionVisibility {
    SectionVisibility::evaluate(data)
}

fn any_identified<E: Identified>(entries: &[E]) -> bool {
    entries.iter().any(|entry| is_populated(entry.identifier()))
}

fn hobbies_visible(hobbies: &Hobbies) -> bool {
    match hobbies {
        Hobbies::Text(text) => !text.trim().is_empty(),
        Hobbies::Items(items) => items.iter().any(|item| is_populated(item.label())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize;
    use crate::types::RawResumeRecord;
    use serde_json::{json, Value};

    fn visibility(value: Value) -> SectionVisibility {
        let data = normalize(&RawResumeRecord::new(value), &|key: &str| key.to_string());
        section_visibility(&data)
    }

    #[test]
    fn test_experience_boundary() {
        assert!(visibility(json!({ "experiences": [{ "company": "" }, { "company": "Acme" }] })).experiences);
        assert!(!visibility(json!({ "experiences": [{ "company": "" }] })).experiences);
        assert!(!visibility(json!({ "experiences": [] })).experiences);
        assert!(!visibility(json!({ "experiences": [{ "position": "CTO" }] })).experiences);
    }

    #[test]
    fn test_identifying_fields_per_section() {
        let v = visibility(json!({
            "education": [{ "degree": "BSc" }],
            "internships": [{ "company": "Lab" }],
            "courses": [{ "name": "Rust" }],
            "skills": [{ "level": "Expert" }],
            "languages": [{ "language": "Dutch" }],
            "extracurriculars": [{ "title": "Chess club" }]
        }));
        assert!(!v.education);
        assert!(v.internships);
        assert!(v.courses);
        assert!(!v.skills);
        assert!(v.languages);
        assert!(v.extracurriculars);
    }

    #[test]
    fn test_custom_sections_need_a_body() {
        assert!(!visibility(json!({ "custom_sections": [{ "title": "Awards" }] })).custom_sections);
        assert!(!visibility(json!({ "custom_sections": [{ "content": "Gold" }] })).custom_sections);
        assert!(visibility(json!({ "custom_sections": [{ "title": "Awards", "content": "Gold" }] })).custom_sections);
        assert!(visibility(json!({ "custom_sections": [{ "title": "Awards", "items": [{ "name": "Gold" }] }] })).custom_sections);
    }

    #[test]
    fn test_hobbies() {
        assert!(visibility(json!({ "hobbies": "reading" })).hobbies);
        assert!(!visibility(json!({ "hobbies": "   " })).hobbies);
        assert!(!visibility(json!({ "hobbies": [] })).hobbies);
        assert!(!visibility(json!({ "hobbies": ["", { "name": "" }] })).hobbies);
        assert!(visibility(json!({ "hobbies": [{ "name": "diving" }] })).hobbies);
    }

    #[test]
    fn test_personal_details() {
        assert!(!visibility(json!({ "personal_info": { "full_name": "Ada", "email": "a@b.c" } })).personal_details);
        assert!(visibility(json!({ "personal_info": { "nationality": "Swiss" } })).personal_details);
        assert!(visibility(json!({ "personal_info": { "postal_code": 8001 } })).personal_details);
        assert!(!visibility(json!({})).personal_details);
    }

    #[test]
    fn test_references_variants() {
        assert!(visibility(json!({ "referrals": { "providedOnRequest": true } })).references);
        assert!(visibility(json!({ "referrals": { "references": [{ "name": "Jane" }] } })).references);
        assert!(visibility(json!({ "referrals": [{ "name": "Jane" }] })).references);
        assert!(!visibility(json!({ "referrals": [] })).references);
        assert!(!visibility(json!({ "referrals": [{ "name": "" }] })).references);
        assert!(!visibility(json!({})).references);
    }

    #[test]
    fn test_restrict_to_template_sections() {
        let v = visibility(json!({
            "experiences": [{ "company": "Acme" }],
            "internships": [{ "company": "Lab" }]
        }));
        let restricted = v.restrict_to(|s| s != Section::Internships);
        assert!(restricted.experiences);
        assert!(!restricted.internships);
        assert_eq!(restricted.visible_sections(), vec![Section::Experiences]);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let data = normalize(
            &RawResumeRecord::new(json!({ "skills": [{ "name": "Go" }], "hobbies": "x" })),
            &|key: &str| key.to_string(),
        );
        assert_eq!(section_visibility(&data), section_visibility(&data));
    }
}
