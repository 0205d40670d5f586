use async_trait::async_trait;
use thiserror::Error;

use crate::core::LanguageCode;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No API key configured. Set deepL.apiKey or D18N_DEEPL_API_KEY")]
    MissingCredentials,

    #[error("Translation request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from translation provider: {0}")]
    InvalidResponse(String),
}

/// A machine translation backend.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` into `target`. `source` is detected by the provider when absent.
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
        source: Option<&LanguageCode>,
    ) -> Result<String, ProviderError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}
