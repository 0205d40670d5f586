use std::collections::HashMap;

use super::{KeyTable, LocaleRegistry};

/// In-process evaluation of compiled accessors.
///
/// Mirrors the behaviour of the generated modules: the explicit locale wins, then the
/// registry's current locale; a key without a translation for that locale evaluates
/// to the key itself.
#[derive(Debug)]
pub struct Catalog<'a> {
    table: &'a KeyTable,
    registry: &'a LocaleRegistry,
}

impl<'a> Catalog<'a> {
    pub fn new(table: &'a KeyTable, registry: &'a LocaleRegistry) -> Self {
        Self { table, registry }
    }

    pub fn translate(
        &self,
        key: &str,
        inputs: &HashMap<String, String>,
        locale: Option<&str>,
    ) -> String {
        let locale = locale.unwrap_or_else(|| self.registry.current().as_str());
        match self.table.get(key) {
            Some(record) => record.evaluate(inputs, locale),
            None => key.to_string(),
        }
    }
}
