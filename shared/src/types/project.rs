//! Project data model and manifest normalization
//!
//! Raw manifest records are loosely typed JSON. Every field is optional and a
//! wrongly typed field is treated as absent, so a [`ProjectItem`] can always be
//! built from whatever object a manifest contains.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Title used when a record has none
pub const DEFAULT_TITLE: &str = "Project";

/// Link used when a record has none; never opened in a new context
pub const PLACEHOLDER_LINK: &str = "#";

/// Identifier naming one manifest source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One normalized portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub image_ref: String,
    pub description: String,
    pub link: String,
    pub tag: String,
    pub gallery_refs: Vec<String>,
}

impl Default for ProjectItem {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            image_ref: String::new(),
            description: String::new(),
            link: PLACEHOLDER_LINK.to_string(),
            tag: String::new(),
            gallery_refs: Vec::new(),
        }
    }
}

impl ProjectItem {
    /// Normalize a raw manifest record.
    ///
    /// Returns `None` only when the record is not a JSON object at all, so
    /// bare strings, numbers and nulls in a manifest yield no card.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let record = raw.as_object()?;
        let defaults = Self::default();

        Some(Self {
            title: text_field(record, &["title"]).unwrap_or(defaults.title),
            image_ref: text_field(record, &["cover", "img"]).unwrap_or_default(),
            description: text_field(record, &["desc"]).unwrap_or_default(),
            link: text_field(record, &["href", "url"]).unwrap_or(defaults.link),
            tag: text_field(record, &["tag", "category"]).unwrap_or_default(),
            gallery_refs: record
                .get("gallery")
                .and_then(Value::as_array)
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Whether the link points somewhere other than the placeholder anchor
    pub fn has_real_link(&self) -> bool {
        !self.link.is_empty() && self.link != PLACEHOLDER_LINK
    }

    /// Label shown on the card pill
    pub fn tag_label(&self) -> &str {
        if self.tag.is_empty() { DEFAULT_TITLE } else { &self.tag }
    }
}

/// First non-empty string among `keys`, in priority order
fn text_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// A parsed category manifest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub projects: Vec<ProjectItem>,
}

impl Manifest {
    /// Parse a manifest document `{ "projects": [...] }`.
    ///
    /// A document without a `projects` sequence is malformed. Entries that are
    /// not objects are dropped.
    pub fn from_value(value: &Value) -> SharedResult<Self> {
        let projects = value
            .get("projects")
            .and_then(Value::as_array)
            .ok_or_else(|| SharedError::DeserializationError {
                message: "manifest has no `projects` sequence".to_string(),
            })?;

        Ok(Self {
            projects: projects.iter().filter_map(ProjectItem::from_raw).collect(),
        })
    }
}
