//! dev.to output schema and the remap that produces it.

use serde::{Deserialize, Serialize};

/// Metadata after translation, before remapping into the output schema.
///
/// `description` is carried here even though the output schema drops it,
/// so the narrowing happens in exactly one place
/// ([`DevtoFrontMatter::from_translated`]).
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedFrontMatter {
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<serde_yaml::Value>,
}

/// Front matter written to translated articles, matching the dev.to
/// article schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevtoFrontMatter {
    pub title: String,

    /// Translated body, duplicated into metadata for the dev.to API.
    pub body_markdown: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<serde_yaml::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl DevtoFrontMatter {
    /// Remaps translated metadata into the dev.to schema.
    ///
    /// `tags` and `published` are moved over verbatim; `description` is not
    /// carried into the output.
    pub fn from_translated(meta: TranslatedFrontMatter, body_markdown: String) -> Self {
        Self {
            title: meta.title,
            body_markdown,
            published: meta.published,
            tags: meta.tags,
        }
    }
}
