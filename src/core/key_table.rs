//! Per-key function tables built from a reconciled unit.
//!
//! A [`KeyTable`] is the intermediate representation handed to module renderers: for
//! every key, one [`LanguageVariant`] per language plus the union of parameter names
//! that the public accessor accepts.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use super::{
    CompileError, LanguageCode, ReconciledUnit,
    language::is_missing,
    placeholder::{ParsedTemplate, parse_template},
};

/// One language's implementation of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageVariant {
    pub language: LanguageCode,
    /// The translation exactly as written in the message file.
    pub raw: String,
    pub template: ParsedTemplate,
    /// True when `raw` is this language's missing-translation sentinel.
    pub missing: bool,
}

impl LanguageVariant {
    pub fn params(&self) -> &[String] {
        &self.template.params
    }

    /// Name of the private per-language function (`en_US_greet`).
    pub fn function_name(&self, key: &str) -> String {
        format!("{}_{}", self.language.identifier(), key)
    }
}

/// Everything known about one translation key across the unit's languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub key: String,
    /// Variants in unit language order.
    pub variants: Vec<LanguageVariant>,
    /// Union of all variants' parameters, first-seen across languages.
    pub params: Vec<String>,
}

impl KeyRecord {
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Variants that carry a real translation.
    pub fn translated(&self) -> impl Iterator<Item = &LanguageVariant> {
        self.variants.iter().filter(|v| !v.missing)
    }

    /// The variant dispatched for `locale`, if any.
    pub fn variant_for(&self, locale: &str) -> Option<&LanguageVariant> {
        self.translated().find(|v| v.language.as_str() == locale)
    }

    /// Evaluate the accessor for `locale`, falling back to the key itself.
    pub fn evaluate(&self, inputs: &HashMap<String, String>, locale: &str) -> String {
        match self.variant_for(locale) {
            Some(variant) => variant.template.render(inputs),
            None => self.key.clone(),
        }
    }
}

/// The function table of a whole compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    default_language: LanguageCode,
    languages: Vec<LanguageCode>,
    records: IndexMap<String, KeyRecord>,
}

impl KeyTable {
    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Languages in unit order, default first.
    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    pub fn get(&self, key: &str) -> Option<&KeyRecord> {
        self.records.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = &KeyRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build the key table for a reconciled unit.
///
/// Iteration follows the unit's key order and language order, so building the same
/// unit twice yields identical tables.
pub fn build_key_table(unit: &ReconciledUnit) -> Result<KeyTable, CompileError> {
    let languages: Vec<LanguageCode> = unit.languages().cloned().collect();
    let mut records = IndexMap::with_capacity(unit.keys().len());

    for key in unit.keys() {
        let record = build_key_record(unit, key)?;
        debug!(
            "Key {} has {} variants and params [{}]",
            key,
            record.variants.len(),
            record.params.join(", ")
        );
        records.insert(key.clone(), record);
    }

    Ok(KeyTable {
        default_language: unit.default_language().clone(),
        languages,
        records,
    })
}

fn build_key_record(unit: &ReconciledUnit, key: &str) -> Result<KeyRecord, CompileError> {
    let mut variants = Vec::new();
    let mut params: Vec<String> = Vec::new();

    for (language, dictionary) in unit.iter() {
        let Some(raw) = dictionary.get(key) else {
            continue;
        };

        let template = parse_template(raw);
        for param in &template.params {
            if !params.contains(param) {
                params.push(param.clone());
            }
        }

        variants.push(LanguageVariant {
            language: language.clone(),
            raw: raw.to_string(),
            missing: is_missing(language.as_str(), raw),
            template,
        });
    }

    if variants.is_empty() {
        return Err(CompileError::EmptyKeyRecord {
            key: key.to_string(),
        });
    }

    Ok(KeyRecord {
        key: key.to_string(),
        variants,
        params,
    })
}
