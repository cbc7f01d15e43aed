// src/core/normalizer.rs
//! Turns a loosely shaped record into a `NormalizedResume`.
//!
//! Every list comes out as a list, every language entry carries both key
//! spellings, and the photo is resolved once. Malformed input degrades to
//! defaults; nothing here fails.

use serde_json::{Map, Value};
use tracing::debug;

use super::photo::resolve_photo;
use crate::i18n::Translate;
use crate::types::raw::text;
use crate::types::{
    FromEntry, Hobbies, Hobby, HobbyEntry, Language, NormalizedResume, PersonalInfo,
    RawResumeRecord, References,
};

/// Template-dependent knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// `providedOnRequest` assumed when the record has no `referrals` field.
    pub referrals_on_request: bool,
}

pub fn normalize<T: Translate + ?Sized>(raw: &RawResumeRecord, translate: &T) -> NormalizedResume {
    normalize_with(raw, translate, &NormalizeOptions::default())
}

pub fn normalize_with<T: Translate + ?Sized>(
    raw: &RawResumeRecord,
    translate: &T,
    options: &NormalizeOptions,
) -> NormalizedResume {
    NormalizedResume {
        personal_info: personal_info(raw, translate),
        educations: entries(raw.list(&["educations", "education"])),
        experiences: entries(raw.list(&["experiences"])),
        internships: entries(raw.list(&["internships"])),
        skills: entries(raw.list(&["skills"])),
        languages: languages(raw.list(&["languages"])),
        courses: entries(raw.list(&["courses"])),
        hobbies: hobbies(raw.field("hobbies")),
        extracurriculars: entries(raw.list(&["extracurriculars"])),
        custom_sections: entries(raw.list(&["custom_sections"])),
        referrals: referrals(raw.field("referrals"), options),
        photolink: resolve_photo(raw),
    }
}

fn personal_info<T: Translate + ?Sized>(raw: &RawResumeRecord, translate: &T) -> PersonalInfo {
    match raw.object("personal_info") {
        Some(map) => PersonalInfo::from_entry(map),
        None => {
            debug!("Record has no personal_info, using placeholders");
            placeholder_personal_info(translate)
        }
    }
}

/// Identity fields only; the details block stays empty so it is not displayed.
fn placeholder_personal_info<T: Translate + ?Sized>(translate: &T) -> PersonalInfo {
    let placeholder = |field: &str| {
        Some(translate.translate(&format!(
            "resume.personal_info.{}_placeholder",
            field
        )))
    };

    PersonalInfo {
        full_name: placeholder("full_name"),
        job_title: placeholder("job_title"),
        email: placeholder("email"),
        phone: placeholder("phone"),
        summary: placeholder("summary"),
        ..Default::default()
    }
}

/// Object entries only; nulls and stray scalars are dropped.
fn entries<E: FromEntry>(list: Option<&Vec<Value>>) -> Vec<E> {
    list.map(|items| {
        items
            .iter()
            .filter_map(Value::as_object)
            .map(E::from_entry)
            .collect()
    })
    .unwrap_or_default()
}

fn languages(list: Option<&Vec<Value>>) -> Vec<Language> {
    list.map(|items| {
        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(Language::from_entry(map)),
                Value::String(name) if !name.trim().is_empty() => {
                    Some(Language::new(Some(name.clone()), None))
                }
                _ => None,
            })
            .collect()
    })
    .unwrap_or_default()
}

fn hobbies(value: Option<&Value>) -> Hobbies {
    match value {
        Some(Value::String(s)) => Hobbies::Text(s.clone()),
        Some(Value::Array(items)) => Hobbies::Items(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(HobbyEntry::Named(Hobby::from_entry(map))),
                    other => text(other).map(HobbyEntry::Text),
                })
                .collect(),
        ),
        _ => Hobbies::default(),
    }
}

fn referrals(value: Option<&Value>, options: &NormalizeOptions) -> References {
    match value {
        Some(Value::Array(list)) => References {
            provided_on_request: false,
            references: entries(Some(list)),
        },
        Some(Value::Object(map)) => References {
            provided_on_request: on_request_flag(map),
            references: entries(map.get("references").and_then(Value::as_array)),
        },
        _ => References {
            provided_on_request: options.referrals_on_request,
            references: Vec::new(),
        },
    }
}

fn on_request_flag(map: &Map<String, Value>) -> bool {
    ["providedOnRequest", "provided_on_request"]
        .iter()
        .any(|key| map.get(*key) == Some(&Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::photo::PLACEHOLDER_PHOTO;
    use serde_json::json;

    fn keys(key: &str) -> String {
        format!("<{}>", key)
    }

    fn run(value: Value) -> NormalizedResume {
        normalize(&RawResumeRecord::new(value), &keys)
    }

    #[test]
    fn test_missing_lists_become_empty() {
        let out = run(json!({ "personal_info": { "full_name": "Ada" } }));
        assert!(out.educations.is_empty());
        assert!(out.experiences.is_empty());
        assert!(out.internships.is_empty());
        assert!(out.skills.is_empty());
        assert!(out.languages.is_empty());
        assert!(out.courses.is_empty());
        assert!(out.extracurriculars.is_empty());
        assert!(out.custom_sections.is_empty());
        assert_eq!(out.hobbies, Hobbies::Items(vec![]));
        assert_eq!(out.referrals, References::default());
        assert_eq!(out.photolink, PLACEHOLDER_PHOTO);
    }

    #[test]
    fn test_placeholder_personal_info() {
        let out = run(json!({}));
        let info = out.personal_info;
        assert_eq!(
            info.full_name.as_deref(),
            Some("<resume.personal_info.full_name_placeholder>")
        );
        assert_eq!(
            info.job_title.as_deref(),
            Some("<resume.personal_info.job_title_placeholder>")
        );
        assert!(info.details().iter().all(Option::is_none));
    }

    #[test]
    fn test_education_alias() {
        let out = run(json!({ "education": [{ "institution": "ETH" }] }));
        assert_eq!(out.educations[0].institution.as_deref(), Some("ETH"));

        let both = run(json!({
            "educations": [{ "institution": "EPFL" }],
            "education": [{ "institution": "ETH" }]
        }));
        assert_eq!(both.educations.len(), 1);
        assert_eq!(both.educations[0].institution.as_deref(), Some("EPFL"));
    }

    #[test]
    fn test_language_aliasing() {
        let a = run(json!({ "languages": [{ "name": "French", "level": "Fluent" }] }));
        let b = run(json!({ "languages": [{ "language": "French", "proficiency": "Fluent" }] }));
        assert_eq!(a.languages, b.languages);

        let lang = &a.languages[0];
        assert_eq!(lang.name.as_deref(), Some("French"));
        assert_eq!(lang.language.as_deref(), Some("French"));
        assert_eq!(lang.level.as_deref(), Some("Fluent"));
        assert_eq!(lang.proficiency.as_deref(), Some("Fluent"));
    }

    #[test]
    fn test_bare_language_strings() {
        let out = run(json!({ "languages": ["Italian", "", null, 7] }));
        assert_eq!(out.languages.len(), 1);
        assert_eq!(out.languages[0].language.as_deref(), Some("Italian"));
        assert_eq!(out.languages[0].level, None);
    }

    #[test]
    fn test_hobbies_shapes() {
        assert_eq!(
            run(json!({ "hobbies": "chess, hiking" })).hobbies,
            Hobbies::Text("chess, hiking".to_string())
        );

        let out = run(json!({ "hobbies": ["golf", { "name": "sailing" }, null, true] }));
        match out.hobbies {
            Hobbies::Items(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].label(), Some("golf"));
                assert_eq!(items[1].label(), Some("sailing"));
            }
            other => panic!("expected items, got {:?}", other),
        }

        assert_eq!(run(json!({ "hobbies": 12 })).hobbies, Hobbies::default());
    }

    #[test]
    fn test_referrals_shapes() {
        let list = run(json!({ "referrals": [{ "name": "Jane" }] }));
        assert!(!list.referrals.provided_on_request);
        assert_eq!(list.referrals.references.len(), 1);

        let object = run(json!({
            "referrals": { "providedOnRequest": true, "references": [{ "name": "Joe" }] }
        }));
        assert!(object.referrals.provided_on_request);
        assert_eq!(object.referrals.references[0].name.as_deref(), Some("Joe"));

        let truthy_string = run(json!({ "referrals": { "providedOnRequest": "yes" } }));
        assert!(!truthy_string.referrals.provided_on_request);
    }

    #[test]
    fn test_referrals_default_follows_options() {
        let raw = RawResumeRecord::new(json!({}));
        let options = NormalizeOptions {
            referrals_on_request: true,
        };
        let out = normalize_with(&raw, &keys, &options);
        assert!(out.referrals.provided_on_request);
        assert!(out.referrals.references.is_empty());

        let explicit = RawResumeRecord::new(json!({ "referrals": [] }));
        assert!(!normalize_with(&explicit, &keys, &options).referrals.provided_on_request);
    }

    #[test]
    fn test_malformed_input_never_fails() {
        let inputs = [
            json!(null),
            json!("resume"),
            json!([1, 2, 3]),
            json!({
                "personal_info": "nope",
                "experiences": { "company": "Acme" },
                "skills": [null, 1, "x", []],
                "languages": "French",
                "custom_sections": [{ "items": "not a list" }],
                "referrals": "on request",
                "photos": [],
            }),
        ];
        for input in inputs {
            let out = run(input);
            assert!(out.experiences.is_empty());
            assert!(out.skills.is_empty());
            assert!(out.languages.is_empty());
            assert_eq!(out.photolink, PLACEHOLDER_PHOTO);
        }
    }

    #[test]
    fn test_normalizing_twice_is_a_no_op() {
        let raw = json!({
            "personal_info": { "full_name": "Ada Lovelace", "nationality": "British", "github": "ada" },
            "education": [{ "institution": "Home", "degree": "Mathematics", "start_date": 1830 }],
            "experiences": [{ "company": "Analytical Engines", "position": "Programmer" }, null],
            "skills": [{ "name": "Algorithms", "level": "Expert" }],
            "languages": [{ "language": "French", "proficiency": "Fluent" }, "English"],
            "hobbies": ["poetry", { "name": "horses", "since": 1820 }],
            "custom_sections": [{ "title": "Notes", "items": ["Note G"] }],
            "referrals": { "providedOnRequest": true, "references": [{ "name": "Babbage" }] },
            "photos": [{ "photolink": "https://example.com/ada.png" }]
        });
        let first = run(raw);
        let reembedded = serde_json::to_value(&first).unwrap();
        let second = run(reembedded);
        assert_eq!(first, second);
        assert_eq!(second.photolink, "https://example.com/ada.png");
    }

    #[test]
    fn test_placeholder_output_is_stable() {
        let first = run(json!({}));
        let second = run(serde_json::to_value(&first).unwrap());
        assert_eq!(first, second);
    }
}
