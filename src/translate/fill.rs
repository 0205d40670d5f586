//! Filling missing translations through a [`TranslationProvider`].

use std::time::Duration;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use super::provider::TranslationProvider;
use crate::core::{Dictionaries, LanguageCode, TranslationDictionary, is_missing};

/// A request that failed. The key may still have been filled from a later source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillFailure {
    pub language: LanguageCode,
    pub key: String,
    pub source: LanguageCode,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Keys filled per target language, in fill order.
    pub updated: IndexMap<LanguageCode, Vec<String>>,
    /// Keys still missing per target language after every source was tried.
    pub unresolved: IndexMap<LanguageCode, Vec<String>>,
    pub failures: Vec<FillFailure>,
}

impl FillReport {
    /// Languages whose dictionaries changed and need rewriting.
    pub fn updated_languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.updated.keys()
    }

    pub fn translated_count(&self) -> usize {
        self.updated.values().map(Vec::len).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

fn translation<'a>(
    dictionaries: &'a Dictionaries,
    language: &LanguageCode,
    key: &str,
) -> Option<&'a str> {
    dictionaries
        .get(language)
        .and_then(|dictionary| dictionary.get(key))
        .filter(|text| !is_missing(language.as_str(), text))
}

/// Translate every key that is absent or a sentinel in some language.
///
/// Languages are visited in `languages` order and keys in first-seen order of the key
/// union. For each missing key the other languages holding a real translation are tried
/// in order until one request succeeds; `delay` is awaited after every request,
/// failed or not. Sources are read from the dictionaries as they were before the run, so
/// machine translations are never translated again. Failures are recorded and never
/// abort the run.
pub async fn fill_missing(
    languages: &[LanguageCode],
    dictionaries: &mut Dictionaries,
    provider: &dyn TranslationProvider,
    delay: Duration,
) -> FillReport {
    let mut report = FillReport::default();
    let originals = dictionaries.clone();

    let keys: Vec<String> = languages
        .iter()
        .filter_map(|language| dictionaries.get(language))
        .flat_map(TranslationDictionary::keys)
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    for target in languages {
        for key in &keys {
            if translation(dictionaries, target, key).is_some() {
                continue;
            }

            let sources: Vec<(LanguageCode, String)> = languages
                .iter()
                .filter(|source| *source != target)
                .filter_map(|source| {
                    translation(&originals, source, key)
                        .map(|text| (source.clone(), text.to_string()))
                })
                .collect();

            let mut filled = false;
            for (source, text) in sources {
                let result = provider.translate(&text, target, Some(&source)).await;
                tokio::time::sleep(delay).await;

                match result {
                    Ok(translated) => {
                        debug!("Translated {} from {} to {}", key, source, target);
                        dictionaries
                            .entry(target.clone())
                            .or_default()
                            .insert(key.clone(), translated);
                        report
                            .updated
                            .entry(target.clone())
                            .or_default()
                            .push(key.clone());
                        filled = true;
                        break;
                    }
                    Err(err) => {
                        warn!(
                            "{} failed to translate {} from {} to {}: {}",
                            provider.name(),
                            key,
                            source,
                            target,
                            err
                        );
                        report.failures.push(FillFailure {
                            language: target.clone(),
                            key: key.clone(),
                            source,
                            error: err.to_string(),
                        });
                    }
                }
            }

            if !filled {
                report
                    .unresolved
                    .entry(target.clone())
                    .or_default()
                    .push(key.clone());
            }
        }
    }

    report
}
