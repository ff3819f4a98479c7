use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// One blog entry as read from the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub author: String,
    pub permlink: String,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub metadata: PostMetadata,
}

impl Post {
    /// UTC calendar date of publication.
    pub fn date(&self) -> NaiveDate {
        self.created.date_naive()
    }

    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata.tags.iter().any(|t| t == tag)
    }
}

/// The parts of a post's `json_metadata` the archive uses.
///
/// Chains store this field as free-form JSON, frequently double-encoded as
/// a string, and authoring tools disagree on its shape. Anything that does
/// not fit yields empty lists rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostMetadata {
    pub tags: Vec<String>,
    pub image: Vec<String>,
}

impl PostMetadata {
    pub fn from_json(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }
        serde_json::from_str::<Value>(raw)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                tags: string_list(map.get("tags")),
                image: string_list(map.get("image")),
            },
            // Double-encoded metadata; each level strips one layer of quoting.
            Value::String(inner) => Self::from_json(inner),
            _ => Self::default(),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(non_empty)
            .collect(),
        Some(Value::String(single)) => non_empty(single).into_iter().collect(),
        _ => Vec::new(),
    }
}
