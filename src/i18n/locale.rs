// src/i18n/locale.rs
use chrono::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Caller's active locale, e.g. `en`, `fr-FR`, `pt_BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleTag {
    language: String,
    region: Option<String>,
}

impl LocaleTag {
    /// Never fails: anything unrecognisable becomes English.
    pub fn parse(tag: &str) -> Self {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts
            .next()
            .map(normalize_language)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let region = parts
            .next()
            .map(|r| r.trim().to_uppercase())
            .filter(|r| r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()));

        Self { language, region }
    }

    pub fn english() -> Self {
        Self::parse(DEFAULT_LANGUAGE)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Locale used for month names.
    pub fn chrono_locale(&self) -> Locale {
        match (self.language.as_str(), self.region.as_deref()) {
            ("en", Some("GB")) => Locale::en_GB,
            ("en", _) => Locale::en_US,
            ("fr", Some("CA")) => Locale::fr_CA,
            ("fr", _) => Locale::fr_FR,
            ("de", _) => Locale::de_DE,
            ("es", _) => Locale::es_ES,
            ("it", _) => Locale::it_IT,
            ("pt", Some("BR")) => Locale::pt_BR,
            ("pt", _) => Locale::pt_PT,
            ("nl", _) => Locale::nl_NL,
            ("pl", _) => Locale::pl_PL,
            ("sv", _) => Locale::sv_SE,
            ("tr", _) => Locale::tr_TR,
            ("ru", _) => Locale::ru_RU,
            ("ar", _) => Locale::ar_SA,
            ("ja", _) => Locale::ja_JP,
            ("zh", _) => Locale::zh_CN,
            _ => Locale::en_US,
        }
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl From<String> for LocaleTag {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.to_string()
    }
}

/// Normalize language code, accepting common language names
fn normalize_language(lang: &str) -> String {
    match lang.trim().to_lowercase().as_str() {
        "" => DEFAULT_LANGUAGE.to_string(),
        "english" | "anglais" => "en".to_string(),
        "french" | "français" | "francais" => "fr".to_string(),
        "german" | "deutsch" => "de".to_string(),
        "spanish" | "español" | "espanol" => "es".to_string(),
        code if code.len() <= 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
            code.to_string()
        }
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        let tag = LocaleTag::parse("fr-CA");
        assert_eq!(tag.language(), "fr");
        assert_eq!(tag.region(), Some("CA"));
        assert_eq!(tag.to_string(), "fr-CA");

        let tag = LocaleTag::parse("pt_br");
        assert_eq!(tag.to_string(), "pt-BR");

        assert_eq!(LocaleTag::parse("EN").to_string(), "en");
    }

    #[test]
    fn test_parse_language_names() {
        assert_eq!(LocaleTag::parse("French").language(), "fr");
        assert_eq!(LocaleTag::parse("Deutsch").language(), "de");
        assert_eq!(LocaleTag::parse("").language(), "en");
        assert_eq!(LocaleTag::parse("$$$").language(), "en");
    }

    #[test]
    fn test_chrono_locale() {
        assert_eq!(LocaleTag::parse("en").chrono_locale(), Locale::en_US);
        assert_eq!(LocaleTag::parse("fr").chrono_locale(), Locale::fr_FR);
        assert_eq!(LocaleTag::parse("pt-BR").chrono_locale(), Locale::pt_BR);
        assert_eq!(LocaleTag::parse("xx").chrono_locale(), Locale::en_US);
    }

    #[test]
    fn test_serde_as_string() {
        let tag: LocaleTag = serde_json::from_str("\"de_DE\"").unwrap();
        assert_eq!(tag.to_string(), "de-DE");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"de-DE\"");
    }
}
