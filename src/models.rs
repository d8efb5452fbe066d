//! Frontend Models
//!
//! Data structures matching the patch server's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Patch as shown in list rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
    /// Base64-encoded JPEG thumbnail
    #[serde(default)]
    pub image: Option<String>,
    /// Ids of users who like this patch
    #[serde(default)]
    pub likes: Vec<String>,
}

impl PatchSummary {
    pub fn like_count(&self) -> u32 {
        u32::try_from(self.likes.len()).unwrap_or(u32::MAX)
    }
}

/// Patch as shown on its detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Sent either as one comma-joined string or as an array
    #[serde(default, deserialize_with = "tags_from_string_or_list")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: Vec<String>,
}

/// Editable metadata returned by `getFullPatchInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchMetadata {
    #[serde(default)]
    pub name: String,
    /// Comma-joined, e.g. "synth, glitch"
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    One(String),
    Many(Vec<String>),
}

fn tags_from_string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsRepr>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TagsRepr::One(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Some(TagsRepr::Many(list)) => list,
    };
    Ok(tags)
}
