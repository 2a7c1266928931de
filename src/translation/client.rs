use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host for paid DeepL API keys.
pub const PAID_ENDPOINT: &str = "https://api.deepl.com";

/// Host for free-tier DeepL API keys (suffixed with `:fx`).
pub const FREE_ENDPOINT: &str = "https://api-free.deepl.com";

/// DeepL returns 456 when the translation quota is used up.
const STATUS_QUOTA_EXCEEDED: u16 = 456;

/// Errors from the translation provider.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("no DeepL API key configured; set the DEEPL_API_KEY environment variable")]
    MissingApiKey,

    #[error("DeepL rejected the API key (status {0})")]
    Authentication(u16),

    #[error("DeepL translation quota exceeded")]
    QuotaExceeded,

    #[error("DeepL request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request to DeepL failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("DeepL returned no translations")]
    EmptyResponse,
}

/// Translation capability consumed by the pipeline.
///
/// The production implementation is [`DeeplClient`]; tests substitute
/// their own.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translates `text` into the client's target language.
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Client for the DeepL `/v2/translate` endpoint.
///
/// Stateless apart from the connection pool; construct once and share by
/// reference. Each call performs exactly one outbound request: no caching,
/// no batching, no retries.
pub struct DeeplClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    target_lang: String,
}

impl DeeplClient {
    /// Creates a client for `endpoint` translating into `target_lang`.
    ///
    /// A missing API key is not an error here; every `translate` call will
    /// fail with [`TranslationError::MissingApiKey`] instead, so a keyless
    /// run still completes file by file.
    pub fn new(endpoint: String, api_key: Option<String>, target_lang: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            target_lang,
        }
    }

    /// Picks the DeepL host matching the key flavor.
    pub fn endpoint_for_key(api_key: Option<&str>) -> &'static str {
        match api_key {
            Some(key) if key.ends_with(":fx") => FREE_ENDPOINT,
            _ => PAID_ENDPOINT,
        }
    }
}

#[async_trait]
impl Translate for DeeplClient {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TranslationError::MissingApiKey)?;

        let url = format!("{}/v2/translate", self.endpoint.trim_end_matches('/'));
        let request = TranslateRequest {
            text: [text],
            target_lang: &self.target_lang,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {api_key}"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    TranslationError::Authentication(status.as_u16())
                }
                _ if status.as_u16() == STATUS_QUOTA_EXCEEDED => TranslationError::QuotaExceeded,
                _ => TranslationError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let body: TranslateResponse = response.json().await?;
        body.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or(TranslationError::EmptyResponse)
    }
}
