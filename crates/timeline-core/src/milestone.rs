//! Milestone Entity
//!
//! The single persisted record, plus the closed category set it draws from.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Milliseconds since the Unix epoch at creation time
pub type MilestoneId = u64;

/// Milestone category. Adding one is a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Education,
    Work,
    Travel,
    Celebration,
    HappyMind,
    SadMind,
    Personal,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Education,
        Category::Work,
        Category::Travel,
        Category::Celebration,
        Category::HappyMind,
        Category::SadMind,
        Category::Personal,
    ];

    /// Label shown in the form and stored on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Work => "Work",
            Category::Travel => "Travel",
            Category::Celebration => "Celebration",
            Category::HappyMind => "Happy Mind",
            Category::SadMind => "Sad Mind",
            Category::Personal => "Personal",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    /// Class suffix for per-category card styling
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Work => "work",
            Category::Travel => "travel",
            Category::Celebration => "celebration",
            Category::HappyMind => "happy-mind",
            Category::SadMind => "sad-mind",
            Category::Personal => "personal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A personal milestone as stored in local storage.
///
/// Every field tolerates being absent or `null` on read, so records written
/// by older versions still load. Required fields are only enforced by the
/// save flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// `None` for a draft that has never been saved
    #[serde(default)]
    pub id: Option<MilestoneId>,
    /// `YYYY-MM-DD` or `DD-MM-YYYY`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    /// Collected but never rendered
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Category label, see [`Category::as_str`]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
    /// Data URL of the attached image, empty when there is none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_base64: String,
}

impl Milestone {
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    pub fn has_image(&self) -> bool {
        !self.image_base64.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inline-encoded image produced by reading a picked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `data:image/...` URLs
    pub fn is_image(&self) -> bool {
        self.0.starts_with("data:image/")
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::HappyMind.as_str(), "Happy Mind");
        assert_eq!(Category::from_label("Sad Mind"), Some(Category::SadMind));
        assert_eq!(Category::from_label("sad mind"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn test_category_roundtrip_all() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let milestone = Milestone {
            id: Some(7),
            date: "2024-03-01".to_string(),
            category: "Work".to_string(),
            note: "started".to_string(),
            image_base64: "data:image/png;base64,AAAA".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&milestone).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["imageBase64"], "data:image/png;base64,AAAA");
        assert_eq!(json["name"], "");
    }

    #[test]
    fn test_draft_id_serializes_as_null() {
        let json = serde_json::to_value(Milestone::default()).unwrap();
        assert!(json["id"].is_null());
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let milestone: Milestone =
            serde_json::from_str(r#"{"date":"2024-01-01","note":null}"#).unwrap();
        assert_eq!(milestone.id, None);
        assert_eq!(milestone.date, "2024-01-01");
        assert_eq!(milestone.note, "");
        assert_eq!(milestone.image_base64, "");
        assert!(!milestone.has_image());
    }

    #[test]
    fn test_encoded_image() {
        assert!(EncodedImage::new("data:image/jpeg;base64,/9j/").is_image());
        assert!(!EncodedImage::new("data:text/plain;base64,aGk=").is_image());
    }
}
