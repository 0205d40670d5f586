//! Cross-language key reconciliation.
//!
//! After reconciliation every language of a compilation unit holds the same keys in
//! the same order. Keys a language lacks are filled with its missing-translation
//! sentinel, in both directions: the default language is backfilled too.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::{Dictionaries, LanguageCode, TranslationDictionary, language::missing_translation};

/// A compilation unit whose dictionaries share one key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledUnit {
    default_language: LanguageCode,
    keys: Vec<String>,
    dictionaries: Dictionaries,
    /// Number of sentinels inserted per language, only for languages that gained any.
    backfilled: IndexMap<LanguageCode, usize>,
}

impl ReconciledUnit {
    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Languages in unit order, default language first.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.dictionaries.keys()
    }

    /// The union of keys, in first-seen order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn dictionary(&self, language: &LanguageCode) -> Option<&TranslationDictionary> {
        self.dictionaries.get(language)
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &TranslationDictionary)> {
        self.dictionaries.iter()
    }

    /// Languages that received sentinel entries, with the number inserted.
    pub fn backfilled(&self) -> impl Iterator<Item = (&LanguageCode, usize)> {
        self.backfilled.iter().map(|(lang, count)| (lang, *count))
    }

    pub fn into_dictionaries(self) -> Dictionaries {
        self.dictionaries
    }
}

/// Equalize the key sets of `dictionaries`.
///
/// Languages are processed in the map's order with `default_language` moved to the
/// front; a default language without a dictionary starts out empty. The key union is
/// collected in first-seen order and every returned dictionary follows that order.
pub fn reconcile(
    default_language: &LanguageCode,
    mut dictionaries: Dictionaries,
) -> ReconciledUnit {
    let default_index = match dictionaries.get_index_of(default_language) {
        Some(index) => index,
        None => {
            dictionaries.insert(default_language.clone(), TranslationDictionary::new());
            dictionaries.len() - 1
        }
    };
    dictionaries.move_index(default_index, 0);

    let all_keys: IndexSet<&str> = dictionaries
        .values()
        .flat_map(TranslationDictionary::keys)
        .collect();
    let keys: Vec<String> = all_keys.iter().map(|k| k.to_string()).collect();

    let mut backfilled = IndexMap::new();
    let reconciled: Dictionaries = dictionaries
        .iter()
        .map(|(language, dictionary)| {
            let mut filled = 0;
            let complete: TranslationDictionary = keys
                .iter()
                .map(|key| match dictionary.get(key) {
                    Some(text) => (key.clone(), text.to_string()),
                    None => {
                        filled += 1;
                        (key.clone(), missing_translation(language.as_str()))
                    }
                })
                .collect();

            if filled > 0 {
                debug!("Backfilled {} missing keys for {}", filled, language);
                backfilled.insert(language.clone(), filled);
            }
            (language.clone(), complete)
        })
        .collect();

    ReconciledUnit {
        default_language: default_language.clone(),
        keys,
        dictionaries: reconciled,
        backfilled,
    }
}
