// src/core/formatters.rs
//! Display-ready values derived from normalized fields. All total.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::i18n::{LocaleTag, Translate};

/// Width used for levels outside the known vocabulary.
pub const DEFAULT_SKILL_PERCENT: u8 = 50;

const SKILL_LEVELS: &[(&str, u8)] = &[
    ("beginner", 20),
    ("novice", 15),
    ("learning", 25),
    ("basic", 30),
    ("elementary", 40),
    ("familiar", 45),
    ("intermediate", 60),
    ("conversational", 60),
    ("competent", 65),
    ("skilled", 75),
    ("advanced", 80),
    ("proficient", 80),
    ("very advanced", 85),
    ("fluent", 90),
    ("near expert", 95),
    ("expert", 100),
    ("native", 100),
];

const PROFICIENCY_KEYS: &[&str] = &["native", "fluent", "advanced", "intermediate", "beginner"];

/// `"2021-03"` → `"March 2021"` in the given locale.
///
/// Empty input gives an empty string; anything unparseable is returned as-is.
pub fn format_month_year(date_str: &str, locale: &LocaleTag) -> String {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match parse_year_month(trimmed) {
        Some(naive) => Utc
            .from_utc_datetime(&naive)
            .format_localized("%B %Y", locale.chrono_locale())
            .to_string(),
        None => date_str.to_string(),
    }
}

/// Accepts `YYYY-MM` and `YYYY-MM-DD`; the day is ignored.
fn parse_year_month(s: &str) -> Option<NaiveDateTime> {
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

    let mut parts = s.split('-');
    let year = parts.next().filter(|y| y.len() == 4 && all_digits(*y))?;
    let month = parts.next().filter(|m| m.len() <= 2 && all_digits(*m))?;
    if let Some(day) = parts.next() {
        if day.len() != 2 || !all_digits(day) {
            return None;
        }
    }
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?.and_hms_opt(0, 0, 0)
}

/// `"March 2019 - May 2021"`, or `"March 2019 - Present"` while ongoing.
pub fn format_date_range<T: Translate + ?Sized>(
    start: Option<&str>,
    end: Option<&str>,
    locale: &LocaleTag,
    translate: &T,
) -> String {
    let start = start.map(|s| format_month_year(s, locale)).unwrap_or_default();
    let end = end.map(|e| format_month_year(e, locale)).unwrap_or_default();

    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => end,
        (false, true) => format!("{} - {}", start, translate.translate("resume.present")),
        (false, false) => format!("{} - {}", start, end),
    }
}

/// Bar fill for a skill or language level, 0–100.
pub fn skill_level_percent(level: &str) -> u8 {
    let wanted = level.trim().to_lowercase();
    SKILL_LEVELS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, percent)| *percent)
        .unwrap_or(DEFAULT_SKILL_PERCENT)
}

/// CSS width for a level, e.g. `"80%"`.
pub fn skill_level_to_width_percent(level: &str) -> String {
    format!("{}%", skill_level_percent(level))
}

/// Localized name of the five core levels; other labels pass through untouched.
pub fn proficiency_label<T: Translate + ?Sized>(level: &str, translate: &T) -> String {
    let trimmed = level.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let wanted = trimmed.to_lowercase();
    match PROFICIENCY_KEYS.iter().find(|key| **key == wanted) {
        Some(key) => translate.translate(&format!("resume.languages.levels.{}", key)),
        None => level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalogs;

    fn en() -> LocaleTag {
        LocaleTag::parse("en")
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year("2021-03", &en()), "March 2021");
        assert_eq!(format_month_year("2019-12-24", &en()), "December 2019");
        assert_eq!(format_month_year("2021-3", &en()), "March 2021");
        assert_eq!(format_month_year("", &en()), "");
        assert_eq!(format_month_year("   ", &en()), "");
    }

    #[test]
    fn test_format_month_year_localized() {
        assert_eq!(format_month_year("2021-03", &LocaleTag::parse("fr")), "mars 2021");
        assert_eq!(format_month_year("2020-01", &LocaleTag::parse("de-DE")), "Januar 2020");
    }

    #[test]
    fn test_format_month_year_passthrough() {
        assert_eq!(format_month_year("not-a-date", &en()), "not-a-date");
        assert_eq!(format_month_year("2021", &en()), "2021");
        assert_eq!(format_month_year("2021-13", &en()), "2021-13");
        assert_eq!(format_month_year("21-03", &en()), "21-03");
        assert_eq!(format_month_year("2021-03-01-09", &en()), "2021-03-01-09");
        assert_eq!(format_month_year("Summer 2020", &en()), "Summer 2020");
    }

    #[test]
    fn test_format_date_range() {
        let catalogs = Catalogs::builtin();
        let t = catalogs.for_locale(&en());
        assert_eq!(
            format_date_range(Some("2019-03"), Some("2021-05"), &en(), t),
            "March 2019 - May 2021"
        );
        assert_eq!(format_date_range(Some("2019-03"), None, &en(), t), "March 2019 - Present");
        assert_eq!(format_date_range(Some("2019-03"), Some(""), &en(), t), "March 2019 - Present");
        assert_eq!(format_date_range(None, Some("2021-05"), &en(), t), "May 2021");
        assert_eq!(format_date_range(None, None, &en(), t), "");

        let fr = LocaleTag::parse("fr");
        assert_eq!(
            format_date_range(Some("2019-03"), None, &fr, catalogs.for_locale(&fr)),
            "mars 2019 - Présent"
        );
    }

    #[test]
    fn test_skill_width_table() {
        assert_eq!(skill_level_to_width_percent("Expert"), "100%");
        assert_eq!(skill_level_to_width_percent("Native"), "100%");
        assert_eq!(skill_level_to_width_percent("Beginner"), "20%");
        assert_eq!(skill_level_to_width_percent("Novice"), "15%");
        assert_eq!(skill_level_to_width_percent("Intermediate"), "60%");
        assert_eq!(skill_level_to_width_percent("Very Advanced"), "85%");
        assert_eq!(skill_level_to_width_percent("Near Expert"), "95%");
        assert_eq!(skill_level_to_width_percent(" fluent "), "90%");
        assert_eq!(skill_level_to_width_percent("Unknown Level"), "50%");
        assert_eq!(skill_level_to_width_percent(""), "50%");
    }

    #[test]
    fn test_proficiency_label() {
        let catalogs = Catalogs::builtin();
        let fr = catalogs.for_locale(&LocaleTag::parse("fr"));
        assert_eq!(proficiency_label("Fluent", fr), "Courant");
        assert_eq!(proficiency_label("native", fr), "Langue maternelle");
        assert_eq!(proficiency_label("Conversational", fr), "Conversational");
        assert_eq!(proficiency_label("", fr), "");

        let keys = |key: &str| key.to_string();
        assert_eq!(proficiency_label("Beginner", &keys), "resume.languages.levels.beginner");
    }
}
