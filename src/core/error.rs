use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a single compile invocation.
///
/// Every variant is fatal to the compile that raised it. Nothing is written to the
/// output directory once one of these has been returned.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The `{language}.json` file is absent from the messages directory.
    #[error("Language file for {language} not found at {}", path.display())]
    FileNotFound { language: String, path: PathBuf },

    /// The file is not a flat JSON object of string values.
    #[error("Failed to parse {}: {reason}", path.display())]
    MalformedJson { path: PathBuf, reason: String },

    /// A key collides with a reserved identifier of the generated code.
    #[error("Reserved words like {key} are not allowed to be used as keys ({language}.json)")]
    ReservedKeyUsed { key: String, language: String },

    /// A key that cannot become a generated identifier.
    #[error("Key \"{key}\" in {language}.json is not a valid identifier")]
    InvalidKey { key: String, language: String },

    /// A language code outside the `xx` / `xx-XX` format.
    #[error("Language code \"{code}\" must be in format \"xx\" or \"xx-XX\"")]
    InvalidLanguage { code: String },

    /// A key ended up with no language variants at all.
    #[error("Translation key \"{key}\" has no language variants")]
    EmptyKeyRecord { key: String },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Raised by [`LocaleRegistry::set`](crate::core::LocaleRegistry::set) for a locale that
/// is not part of the configured language set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Language {locale} does not exist")]
pub struct UnknownLocaleError {
    pub locale: String,
}
