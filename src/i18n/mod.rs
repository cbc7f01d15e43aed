// src/i18n/mod.rs
//! Translation lookup and locale handling

pub mod catalog;
pub mod locale;

pub use catalog::{Catalog, Catalogs};
pub use locale::LocaleTag;

/// Translation lookup. Implementations always return something displayable,
/// typically the key itself when no message exists.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_translate() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.translate("resume.present"), "RESUME.PRESENT");
    }
}
