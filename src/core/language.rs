//! Language codes, reserved identifiers and the missing-translation sentinel.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::CompileError;

static LANGUAGE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").unwrap());

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Words that cannot be used as translation keys.
///
/// Keys become exported constants and function names in the generated modules, so
/// they must not collide with declaration, control-flow or literal keywords.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "new",
    "var",
    "let",
    "const",
    "function",
    "class",
    "return",
    "if",
    "else",
    "switch",
    "case",
    "default",
    "break",
    "continue",
    "for",
    "while",
    "do",
    "try",
    "catch",
    "finally",
    "throw",
    "this",
    "super",
    "import",
    "export",
    "delete",
    "void",
    "typeof",
    "instanceof",
    "in",
    "of",
    "await",
    "async",
    "yield",
    "debugger",
    "with",
    "null",
    "undefined",
    "true",
    "false",
];

/// Names exported by the generated core module.
///
/// Key modules import from the core module and the index re-exports both, so a key
/// with one of these names would shadow or clash with the core export.
pub const CORE_EXPORTS: &[&str] = &[
    "UnknownLocaleError",
    "languages",
    "Language",
    "defaultLanguage",
    "languageExists",
    "isLocale",
    "getCurrentLanguage",
    "getLocale",
    "onChangeLanguage",
    "subscribe",
    "setLanguage",
    "setLocale",
];

/// A validated language code such as `en` or `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn parse(code: impl Into<String>) -> Result<Self, CompileError> {
        let code = code.into();
        if is_valid_language_code(&code) {
            Ok(Self(code))
        } else {
            Err(CompileError::InvalidLanguage { code })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language as it appears inside generated identifiers (`en-US` -> `en_US`).
    pub fn identifier(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = CompileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

pub fn is_valid_language_code(code: &str) -> bool {
    LANGUAGE_CODE_REGEX.is_match(code)
}

pub fn is_reserved_keyword(key: &str) -> bool {
    RESERVED_KEYWORDS.contains(&key) || CORE_EXPORTS.contains(&key)
}

/// Checks that `name` can be emitted as a bare identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

/// The sentinel value that marks a known-missing translation.
pub fn missing_translation(language: &str) -> String {
    format!("<missing {} translation>", language)
}

/// Returns true when `text` is the sentinel for `language`.
pub fn is_missing(language: &str, text: &str) -> bool {
    text.strip_prefix("<missing ")
        .and_then(|rest| rest.strip_suffix(" translation>"))
        .is_some_and(|lang| lang == language)
}
