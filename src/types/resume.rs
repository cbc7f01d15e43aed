// src/types/resume.rs
//! Normalized résumé shape shared by every template.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::raw::text;

// ===== Sections =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    PersonalDetails,
    Experiences,
    Education,
    Internships,
    Courses,
    Skills,
    Languages,
    Hobbies,
    Extracurriculars,
    CustomSections,
    References,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::PersonalDetails,
        Section::Experiences,
        Section::Education,
        Section::Internships,
        Section::Courses,
        Section::Skills,
        Section::Languages,
        Section::Hobbies,
        Section::Extracurriculars,
        Section::CustomSections,
        Section::References,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::PersonalDetails => "personal_details",
            Section::Experiences => "experiences",
            Section::Education => "education",
            Section::Internships => "internships",
            Section::Courses => "courses",
            Section::Skills => "skills",
            Section::Languages => "languages",
            Section::Hobbies => "hobbies",
            Section::Extracurriculars => "extracurriculars",
            Section::CustomSections => "custom_sections",
            Section::References => "references",
        }
    }

    /// Translation key of the section heading.
    pub fn title_key(&self) -> String {
        format!("resume.sections.{}", self.as_str())
    }

    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|s| s.as_str() == wanted)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Entry extraction =====

/// Consumes known keys out of a raw entry, leaving the rest as passthrough fields.
pub(crate) struct EntryFields(Map<String, Value>);

impl EntryFields {
    pub(crate) fn new(map: &Map<String, Value>) -> Self {
        Self(map.clone())
    }

    pub(crate) fn text(&mut self, key: &str) -> Option<String> {
        self.0.remove(key).as_ref().and_then(text)
    }

    /// First key that reads as text. `keys[0]` names the output field and is always
    /// consumed; the other aliases are consumed only when read, so a non-text
    /// value under an alias stays in the passthrough fields.
    pub(crate) fn text_any(&mut self, keys: &[&str]) -> Option<String> {
        let Some((field, aliases)) = keys.split_first() else {
            return None;
        };
        let mut found = self.text(field);
        for alias in aliases {
            let readable = self
                .0
                .get(*alias)
                .is_some_and(|value| value.is_null() || text(value).is_some());
            if readable {
                let value = self.text(alias);
                found = found.or(value);
            }
        }
        found
    }

    /// Drops passthrough keys that would collide with the entry's own fields.
    pub(crate) fn finish_without(mut self, fields: &[&str]) -> Map<String, Value> {
        for field in fields {
            self.0.remove(*field);
        }
        self.0
    }

    pub(crate) fn list(&mut self, key: &str) -> Vec<Value> {
        match self.0.remove(key) {
            Some(Value::Array(items)) => items.into_iter().filter(|v| !v.is_null()).collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Map<String, Value> {
        self.0
    }
}

/// Builds a typed entry from one raw list element.
pub trait FromEntry: Sized {
    fn from_entry(map: &Map<String, Value>) -> Self;
}

/// The field whose presence makes an entry worth showing.
pub trait Identified {
    fn identifier(&self) -> Option<&str>;
}

// ===== Personal info =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driving_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonalInfo {
    /// The six fields that make up the personal details block.
    pub fn details(&self) -> [Option<&str>; 6] {
        [
            self.address.as_deref(),
            self.postal_code.as_deref(),
            self.driving_license.as_deref(),
            self.nationality.as_deref(),
            self.place_of_birth.as_deref(),
            self.date_of_birth.as_deref(),
        ]
    }
}

impl FromEntry for PersonalInfo {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            full_name: f.text_any(&["full_name", "name"]),
            job_title: f.text("job_title"),
            email: f.text("email"),
            phone: f.text("phone"),
            address: f.text("address"),
            postal_code: f.text("postal_code"),
            city: f.text("city"),
            driving_license: f.text("driving_license"),
            nationality: f.text("nationality"),
            place_of_birth: f.text("place_of_birth"),
            date_of_birth: f.text("date_of_birth"),
            linkedin: f.text("linkedin"),
            website: f.text("website"),
            summary: f.text("summary"),
            extra: f.finish(),
        }
    }
}

// ===== Experience & internships =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Experience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromEntry for Experience {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            company: f.text("company"),
            position: f.text_any(&["position", "job_title"]),
            location: f.text_any(&["location", "city"]),
            start_date: f.text("start_date"),
            end_date: f.text("end_date"),
            description: f.text("description"),
            extra: f.finish(),
        }
    }
}

impl Identified for Experience {
    fn identifier(&self) -> Option<&str> {
        self.company.as_deref()
    }
}

// ===== Education =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromEntry for Education {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            institution: f.text_any(&["institution", "school"]),
            degree: f.text("degree"),
            field_of_study: f.text("field_of_study"),
            location: f.text("location"),
            start_date: f.text("start_date"),
            end_date: f.text("end_date"),
            description: f.text("description"),
            extra: f.finish(),
        }
    }
}

impl Identified for Education {
    fn identifier(&self) -> Option<&str> {
        self.institution.as_deref()
    }
}

// ===== Skills & languages =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromEntry for Skill {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            name: f.text("name"),
            level: f.text("level"),
            extra: f.finish(),
        }
    }
}

impl Identified for Skill {
    fn identifier(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Language entry carrying both historical spellings of each key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Language {
    pub name: Option<String>,
    pub language: Option<String>,
    pub level: Option<String>,
    pub proficiency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Language {
    pub fn new(name: Option<String>, level: Option<String>) -> Self {
        Self {
            language: name.clone(),
            name,
            proficiency: level.clone(),
            level,
            extra: Map::new(),
        }
    }
}

impl FromEntry for Language {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        let name = f.text_any(&["name", "language"]);
        let level = f.text_any(&["level", "proficiency"]);
        Self {
            extra: f.finish_without(&["language", "proficiency"]),
            ..Self::new(name, level)
        }
    }
}

impl Identified for Language {
    fn identifier(&self) -> Option<&str> {
        self.language.as_deref().or(self.name.as_deref())
    }
}

// ===== Courses =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromEntry for Course {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            name: f.text("name"),
            institution: f.text("institution"),
            start_date: f.text("start_date"),
            end_date: f.text("end_date"),
            description: f.text("description"),
            extra: f.finish(),
        }
    }
}

impl Identified for Course {
    fn identifier(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ===== Extracurriculars =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extracurricular {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromEntry for Extracurricular {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            title: f.text("title"),
            organization: f.text_any(&["organization", "employer"]),
            location: f.text("location"),
            start_date: f.text("start_date"),
            end_date: f.text("end_date"),
            description: f.text("description"),
            extra: f.finish(),
        }
    }
}

impl Identified for Extracurricular {
    fn identifier(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

// ===== Custom sections =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub items: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomSection {
    pub fn has_body(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.trim().is_empty()) || !self.items.is_empty()
    }
}

impl FromEntry for CustomSection {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            title: f.text("title"),
            content: f.text("content"),
            items: f.list("items"),
            extra: f.finish(),
        }
    }
}

impl Identified for CustomSection {
    fn identifier(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

// ===== Hobbies =====

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Hobbies {
    Text(String),
    Items(Vec<HobbyEntry>),
}

impl Default for Hobbies {
    fn default() -> Self {
        Hobbies::Items(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HobbyEntry {
    Text(String),
    Named(Hobby),
}

impl HobbyEntry {
    pub fn label(&self) -> Option<&str> {
        match self {
            HobbyEntry::Text(s) => Some(s),
            HobbyEntry::Named(h) => h.name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hobby {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromEntry for Hobby {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            name: f.text("name"),
            extra: f.finish(),
        }
    }
}

// ===== References =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromEntry for Reference {
    fn from_entry(map: &Map<String, Value>) -> Self {
        let mut f = EntryFields::new(map);
        Self {
            name: f.text("name"),
            company: f.text("company"),
            position: f.text("position"),
            email: f.text("email"),
            phone: f.text("phone"),
            extra: f.finish(),
        }
    }
}

impl Identified for Reference {
    fn identifier(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Referrals in their single normalized shape, whichever form the input used.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct References {
    #[serde(rename = "providedOnRequest")]
    pub provided_on_request: bool,
    pub references: Vec<Reference>,
}

// ===== Normalized résumé =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedResume {
    pub personal_info: PersonalInfo,
    pub educations: Vec<Education>,
    pub experiences: Vec<Experience>,
    pub internships: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub courses: Vec<Course>,
    pub hobbies: Hobbies,
    pub extracurriculars: Vec<Extracurricular>,
    pub custom_sections: Vec<CustomSection>,
    pub referrals: References,
    pub photolink: String,
}
