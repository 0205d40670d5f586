//! Machine translation of missing keys.
//!
//! - `provider`: the [`TranslationProvider`] trait and its error type
//! - `deepl`: DeepL REST implementation
//! - `fill`: the collect-and-continue fill algorithm

pub mod deepl;
pub mod fill;
pub mod provider;

use std::time::Duration;

use tracing::info;

use crate::config::{Config, DEFAULT_REQUEST_DELAY_MS};
use crate::core::{CompileError, Dictionaries, load_or_create, write_dictionary};

pub use deepl::DeepLProvider;
pub use fill::{FillFailure, FillReport, fill_missing};
pub use provider::{ProviderError, TranslationProvider};

/// Fill missing translations of the configured unit and rewrite updated message files.
///
/// Absent message files are created empty first. Only languages with at least one
/// successful translation are written back.
pub async fn translate_unit(
    config: &Config,
    provider: &dyn TranslationProvider,
) -> Result<FillReport, CompileError> {
    let languages = config.ordered_languages();

    let mut dictionaries = Dictionaries::new();
    for language in &languages {
        let dictionary = load_or_create(language, &config.messages_path)?;
        dictionaries.insert(language.clone(), dictionary);
    }

    let delay = config
        .deep_l
        .as_ref()
        .map(|deep_l| deep_l.request_delay)
        .unwrap_or(Duration::from_millis(DEFAULT_REQUEST_DELAY_MS));

    let report = fill_missing(&languages, &mut dictionaries, provider, delay).await;

    for language in report.updated_languages() {
        if let Some(dictionary) = dictionaries.get(language) {
            write_dictionary(language, &config.messages_path, dictionary)?;
            info!(
                "Updated {} with {} translations",
                language,
                report.updated[language].len()
            );
        }
    }

    Ok(report)
}
