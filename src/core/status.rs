//! Translation completeness across languages.
//!
//! Works on dictionaries as loaded from disk (before reconciliation). A key counts as
//! missing in a language when it is absent or holds that language's sentinel.

use indexmap::{IndexMap, IndexSet};

use super::{Dictionaries, LanguageCode, TranslationDictionary, language::is_missing};

/// Translation state of one key, seen from the language being displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStatus {
    pub has_current_translation: bool,
    /// Other languages without a translation, in unit order.
    pub missing_languages: Vec<LanguageCode>,
}

impl TranslationStatus {
    pub fn is_complete(&self) -> bool {
        self.has_current_translation && self.missing_languages.is_empty()
    }
}

fn has_translation(language: &LanguageCode, dictionary: &TranslationDictionary, key: &str) -> bool {
    dictionary
        .get(key)
        .is_some_and(|text| !is_missing(language.as_str(), text))
}

/// Status of `key` when `current` is the language shown to the user.
pub fn key_status(
    key: &str,
    current: &LanguageCode,
    dictionaries: &Dictionaries,
) -> TranslationStatus {
    let has_current_translation = dictionaries
        .get(current)
        .is_some_and(|dictionary| has_translation(current, dictionary, key));

    let missing_languages = dictionaries
        .iter()
        .filter(|(language, _)| *language != current)
        .filter(|(language, dictionary)| !has_translation(language, dictionary, key))
        .map(|(language, _)| language.clone())
        .collect();

    TranslationStatus {
        has_current_translation,
        missing_languages,
    }
}

/// Per-language counts of a [`CompletenessReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCoverage {
    pub translated: usize,
    pub total: usize,
}

impl LanguageCoverage {
    pub fn missing(&self) -> usize {
        self.total - self.translated
    }
}

/// Completeness of every key across every language of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    /// Keys lacking at least one translation, mapped to the languages that lack them.
    pub missing: IndexMap<String, Vec<LanguageCode>>,
    pub coverage: IndexMap<LanguageCode, LanguageCoverage>,
    pub key_count: usize,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compute completeness over the key union of `dictionaries`.
pub fn completeness(dictionaries: &Dictionaries) -> CompletenessReport {
    let keys: IndexSet<&str> = dictionaries
        .values()
        .flat_map(TranslationDictionary::keys)
        .collect();

    let mut missing: IndexMap<String, Vec<LanguageCode>> = IndexMap::new();
    let mut coverage: IndexMap<LanguageCode, LanguageCoverage> = dictionaries
        .keys()
        .map(|language| {
            (
                language.clone(),
                LanguageCoverage {
                    translated: 0,
                    total: keys.len(),
                },
            )
        })
        .collect();

    for key in &keys {
        for (language, dictionary) in dictionaries {
            if has_translation(language, dictionary, key) {
                if let Some(entry) = coverage.get_mut(language) {
                    entry.translated += 1;
                }
            } else {
                missing
                    .entry(key.to_string())
                    .or_default()
                    .push(language.clone());
            }
        }
    }

    CompletenessReport {
        missing,
        coverage,
        key_count: keys.len(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::parse(code).unwrap()
    }

    fn fixture() -> Dictionaries {
        Dictionaries::from([
            (
                lang("en"),
                [("hello", "Hello"), ("goodbye", "Goodbye")]
                    .into_iter()
                    .collect(),
            ),
            (
                lang("es"),
                [("hello", "Hola"), ("goodbye", "<missing es translation>")]
                    .into_iter()
                    .collect(),
            ),
            (
                lang("fr"),
                [("hello", "Bonjour"), ("thanks", "Merci")]
                    .into_iter()
                    .collect(),
            ),
        ])
    }

    #[test]
    fn test_key_status_complete() {
        let status = key_status("hello", &lang("en"), &fixture());
        assert!(status.has_current_translation);
        assert!(status.missing_languages.is_empty());
        assert!(status.is_complete());
    }

    #[test]
    fn test_key_status_sentinel_counts_as_missing() {
        let status = key_status("goodbye", &lang("en"), &fixture());
        assert!(status.has_current_translation);
        assert_eq!(status.missing_languages, vec![lang("es"), lang("fr")]);

        let status = key_status("goodbye", &lang("es"), &fixture());
        assert!(!status.has_current_translation);
        assert_eq!(status.missing_languages, vec![lang("fr")]);
    }

    #[test]
    fn test_key_status_unknown_current_language() {
        let status = key_status("hello", &lang("de"), &fixture());
        assert!(!status.has_current_translation);
        assert!(status.missing_languages.is_empty());
    }

    #[test]
    fn test_completeness_report() {
        let report = completeness(&fixture());

        assert_eq!(report.key_count, 3);
        assert!(!report.is_complete());
        assert_eq!(
            report.missing.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["goodbye", "thanks"]
        );
        assert_eq!(report.missing["goodbye"], vec![lang("es"), lang("fr")]);
        assert_eq!(report.missing["thanks"], vec![lang("en"), lang("es")]);

        let en = report.coverage[&lang("en")];
        assert_eq!(en, LanguageCoverage { translated: 2, total: 3 });
        assert_eq!(report.coverage[&lang("es")].missing(), 2);
    }

    #[test]
    fn test_completeness_of_complete_unit() {
        let dictionaries = Dictionaries::from([
            (lang("en"), [("a", "A")].into_iter().collect()),
            (lang("es"), [("a", "A!")].into_iter().collect()),
        ]);

        let report = completeness(&dictionaries);
        assert!(report.is_complete());
        assert_eq!(report.key_count, 1);
    }
}
