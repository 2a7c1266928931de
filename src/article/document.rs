use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while splitting or decoding a front matter document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document does not start with a '---' front matter block")]
    MissingFrontMatter,

    #[error("front matter block is not closed by a '---' line")]
    UnterminatedFrontMatter,

    #[error("invalid front matter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Metadata recognized in source articles.
///
/// Keys outside this set are ignored during parsing and therefore never
/// reach the output document. `title` is optional here; the pipeline
/// enforces its presence before translating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Boolean or date; carried through opaquely.
    #[serde(default)]
    pub published: Option<serde_yaml::Value>,
}

/// A source article: recognized front matter plus Markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Article {
    /// Parses a front matter Markdown document into an `Article`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let (front_matter, body) = parse_document(raw)?;
        Ok(Self { front_matter, body })
    }
}

/// Splits a document into a typed front matter block and its body.
///
/// The document must open with a `---` line; the block runs until the next
/// `---` line. An empty block deserializes as an empty mapping. The body
/// is stripped of surrounding whitespace.
pub fn parse_document<T>(raw: &str) -> Result<(T, String), ParseError>
where
    T: DeserializeOwned,
{
    let rest = raw
        .strip_prefix("---")
        .ok_or(ParseError::MissingFrontMatter)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or(ParseError::MissingFrontMatter)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];

            let front_matter = if yaml.trim().is_empty() {
                serde_yaml::from_value(serde_yaml::Value::Mapping(serde_yaml::Mapping::new()))?
            } else {
                serde_yaml::from_str(yaml)?
            };

            return Ok((front_matter, body.trim().to_string()));
        }
        offset += line.len();
    }

    Err(ParseError::UnterminatedFrontMatter)
}

/// Serializes metadata and body back into a front matter document.
///
/// Output mirrors the input convention: a YAML block between `---` lines,
/// one blank line, then the body with a single trailing newline.
pub fn to_document<T: Serialize>(front_matter: &T, body: &str) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(front_matter)?;
    Ok(format!("---\n{yaml}---\n\n{body}\n"))
}
