//! dev.to publishing client.
//!
//! Posts previously translated articles to the dev.to REST API. One POST
//! per article; the caller decides what to do with failures.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::article::DevtoFrontMatter;

/// Errors from the dev.to API.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("dev.to rejected the API key (status {0})")]
    Authentication(u16),

    #[error("dev.to request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request to dev.to failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct CreateArticleRequest<'a> {
    article: ArticlePayload<'a>,
}

/// Article fields accepted by `POST /api/articles`.
#[derive(Debug, Serialize)]
struct ArticlePayload<'a> {
    title: &'a str,
    body_markdown: &'a str,
    published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
}

impl<'a> ArticlePayload<'a> {
    /// Builds the payload from written front matter.
    ///
    /// `published` only maps through when it is a boolean; date values fall
    /// back to an unpublished draft.
    fn from_front_matter(front_matter: &'a DevtoFrontMatter) -> Self {
        Self {
            title: &front_matter.title,
            body_markdown: &front_matter.body_markdown,
            published: front_matter
                .published
                .as_ref()
                .and_then(serde_yaml::Value::as_bool)
                .unwrap_or(false),
            tags: front_matter.tags.as_deref(),
        }
    }
}

/// A created article as reported back by dev.to.
#[derive(Debug, Deserialize)]
pub struct CreatedArticle {
    pub id: u64,
    pub url: String,
}

/// Client for the dev.to articles API.
pub struct DevtoClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DevtoClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Creates one article on dev.to.
    pub async fn create_article(
        &self,
        front_matter: &DevtoFrontMatter,
    ) -> Result<CreatedArticle, PublishError> {
        let url = format!("{}/api/articles", self.base_url.trim_end_matches('/'));
        let request = CreateArticleRequest {
            article: ArticlePayload::from_front_matter(front_matter),
        };

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => PublishError::Authentication(status.as_u16()),
                _ => PublishError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn front_matter() -> DevtoFrontMatter {
        DevtoFrontMatter {
            title: "Hello".to_string(),
            body_markdown: "Body".to_string(),
            published: Some(serde_yaml::Value::Bool(true)),
            tags: Some(vec!["rust".to_string()]),
        }
    }

    #[test]
    fn test_payload_maps_published_bool() {
        let fm = front_matter();
        let payload = ArticlePayload::from_front_matter(&fm);

        assert!(payload.published);
        assert_eq!(payload.tags, Some(&["rust".to_string()][..]));
    }

    #[test]
    fn test_payload_defaults_non_bool_published_to_draft() {
        let fm = DevtoFrontMatter {
            published: Some(serde_yaml::Value::String("2024-03-01".to_string())),
            ..front_matter()
        };
        let payload = ArticlePayload::from_front_matter(&fm);

        assert!(!payload.published);
    }

    #[test]
    fn test_payload_envelope_shape() {
        let fm = front_matter();
        let request = CreateArticleRequest {
            article: ArticlePayload::from_front_matter(&fm),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["article"]["title"], "Hello");
        assert_eq!(json["article"]["body_markdown"], "Body");
        assert_eq!(json["article"]["published"], true);
        assert_eq!(json["article"]["tags"][0], "rust");
    }

    #[tokio::test]
    async fn test_create_article_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/articles"))
            .and(header("api-key", "token"))
            .and(body_partial_json(serde_json::json!({
                "article": { "title": "Hello", "published": true }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 42,
                "url": "https://dev.to/someone/hello-abc"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DevtoClient::new(server.uri(), "token".to_string());
        let created = client.create_article(&front_matter()).await.unwrap();

        assert_eq!(created.id, 42);
        assert_eq!(created.url, "https://dev.to/someone/hello-abc");
    }

    #[tokio::test]
    async fn test_create_article_bad_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = DevtoClient::new(server.uri(), "bad".to_string());
        let result = client.create_article(&front_matter()).await;

        assert!(matches!(result, Err(PublishError::Authentication(401))));
    }

    #[tokio::test]
    async fn test_create_article_api_error_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/articles"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string("{\"error\":\"title is missing\"}"),
            )
            .mount(&server)
            .await;

        let client = DevtoClient::new(server.uri(), "token".to_string());
        let result = client.create_article(&front_matter()).await;

        match result {
            Err(PublishError::Api { status, message }) => {
                assert_eq!(status, 422);
                assert!(message.contains("title is missing"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
