//! DeepL REST provider.
//!
//! Sends one `POST {host}/v2/translate` per text with a `DeepL-Auth-Key` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use super::provider::{ProviderError, TranslationProvider};
use crate::config::DeepLConfig;
use crate::core::LanguageCode;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct DeepLProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

impl DeepLProvider {
    pub fn new(host: &Url, api_key: Option<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint: format!("{}/v2/translate", host.as_str().trim_end_matches('/')),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }

    pub fn from_config(config: &DeepLConfig) -> Result<Self, ProviderError> {
        Self::new(&config.host, config.api_key.clone())
    }

    fn request_body(text: &str, target: &LanguageCode, source: Option<&LanguageCode>) -> Value {
        let mut body = Map::new();
        body.insert("text".to_string(), json!([text]));
        body.insert(
            "target_lang".to_string(),
            Value::String(target.as_str().to_uppercase()),
        );
        if let Some(source) = source {
            // Source languages are accepted without region only.
            let primary = source.as_str().split('-').next().unwrap_or_default();
            body.insert(
                "source_lang".to_string(),
                Value::String(primary.to_uppercase()),
            );
        }
        Value::Object(body)
    }
}

impl std::fmt::Debug for DeepLProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for DeepLProvider {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
        source: Option<&LanguageCode>,
    ) -> Result<String, ProviderError> {
        let Some(api_key) = &self.api_key else {
            return Err(ProviderError::MissingCredentials);
        };

        debug!("DeepL request {:?} -> {}", source.map(LanguageCode::as_str), target);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("DeepL-Auth-Key {}", api_key))
            .json(&Self::request_body(text, target, source))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        body.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| ProviderError::InvalidResponse("no translations returned".to_string()))
    }

    fn name(&self) -> &str {
        "DeepL"
    }
}
