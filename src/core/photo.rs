// src/core/photo.rs
//! Profile photo resolution across the shapes the editor has used over time.

use serde_json::Value;

use crate::types::raw::{field, text};
use crate::types::RawResumeRecord;

/// Neutral silhouette shown when the record carries no photo.
pub const PLACEHOLDER_PHOTO: &str = "data:image/svg+xml;charset=UTF-8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E%3Crect width='100' height='100' fill='%23e5e7eb'/%3E%3Ccircle cx='50' cy='38' r='18' fill='%239ca3af'/%3E%3Cpath d='M16 96c0-20 15-32 34-32s34 12 34 32z' fill='%239ca3af'/%3E%3C/svg%3E";

type PhotoSource = fn(&Value) -> Option<&Value>;

/// Tried in order; the first non-blank link wins.
const PHOTO_SOURCES: [PhotoSource; 4] = [photo_object, first_of_photos, photos_object, direct_link];

fn photo_object(raw: &Value) -> Option<&Value> {
    field(raw, "photo").and_then(|photo| field(photo, "photolink"))
}

fn first_of_photos(raw: &Value) -> Option<&Value> {
    field(raw, "photos")
        .and_then(Value::as_array)
        .and_then(|photos| photos.first())
        .and_then(|photo| field(photo, "photolink"))
}

fn photos_object(raw: &Value) -> Option<&Value> {
    field(raw, "photos")
        .filter(|photos| photos.is_object())
        .and_then(|photo| field(photo, "photolink"))
}

fn direct_link(raw: &Value) -> Option<&Value> {
    field(raw, "photolink")
}

/// Photo URL or data URI; never empty.
pub fn resolve_photo(raw: &RawResumeRecord) -> String {
    PHOTO_SOURCES
        .iter()
        .find_map(|source| {
            source(raw.value())
                .and_then(text)
                .filter(|link| !link.trim().is_empty())
        })
        .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: Value) -> String {
        resolve_photo(&RawResumeRecord::new(value))
    }

    #[test]
    fn test_photo_wins_over_photos() {
        let link = resolve(json!({
            "photo": { "photolink": "A" },
            "photos": [{ "photolink": "B" }],
            "photolink": "C"
        }));
        assert_eq!(link, "A");
    }

    #[test]
    fn test_photos_list_then_object_then_direct() {
        assert_eq!(resolve(json!({ "photos": [{ "photolink": "B" }], "photolink": "C" })), "B");
        assert_eq!(resolve(json!({ "photos": { "photolink": "D" }, "photolink": "C" })), "D");
        assert_eq!(resolve(json!({ "photolink": "C" })), "C");
    }

    #[test]
    fn test_blank_links_are_skipped() {
        assert_eq!(
            resolve(json!({ "photo": { "photolink": "  " }, "photos": [], "photolink": "C" })),
            "C"
        );
    }

    #[test]
    fn test_placeholder_when_nothing_usable() {
        assert_eq!(resolve(json!({})), PLACEHOLDER_PHOTO);
        assert_eq!(resolve(json!(null)), PLACEHOLDER_PHOTO);
        assert_eq!(resolve(json!({ "photo": "x", "photos": 3, "photolink": false })), PLACEHOLDER_PHOTO);
        assert!(PLACEHOLDER_PHOTO.starts_with("data:image/svg+xml"));
    }
}
