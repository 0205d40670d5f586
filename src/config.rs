use std::{
    env, fmt, fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::LanguageCode;
use crate::core::language::is_valid_language_code;

pub const CONFIG_FILE_NAME: &str = "do-easy-i18n.config.json";
pub const DEFAULT_MESSAGES_PATH: &str = "messages";
pub const DEFAULT_DEEPL_HOST: &str = "https://api-free.deepl.com";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

/// Environment variable consulted when `deepL.apiKey` is not set in the file.
pub const API_KEY_ENV: &str = "D18N_DEEPL_API_KEY";

const LANGUAGE_CODE_MESSAGE: &str =
    r#"Language code must be in format "xx" or "xx-XX" (e.g., "en" or "en-US")"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub languages: Vec<LanguageCode>,
    pub default_language: LanguageCode,
    /// Directory holding `{language}.json` files, already resolved against the config file.
    pub messages_path: PathBuf,
    pub deep_l: Option<DeepLConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLConfig {
    pub host: Url,
    pub api_key: Option<String>,
    pub request_delay: Duration,
}

impl Config {
    /// Configured languages with the default first. Duplicates of the default are dropped.
    pub fn ordered_languages(&self) -> Vec<LanguageCode> {
        let mut ordered = vec![self.default_language.clone()];
        ordered.extend(
            self.languages
                .iter()
                .filter(|l| **l != self.default_language)
                .cloned(),
        );
        ordered
    }

    /// Parse and validate config JSON. Relative `messagesPath` values resolve against
    /// `base_dir`.
    pub fn from_json(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content).map_err(ConfigError::Parse)?;
        validate(&value, base_dir).map_err(ConfigError::Invalid)
    }

    /// Fill a missing DeepL key from `value`, usually the environment.
    pub fn apply_api_key_fallback(&mut self, value: Option<String>) {
        if let Some(deep_l) = self.deep_l.as_mut()
            && deep_l.api_key.is_none()
        {
            deep_l.api_key = value.filter(|key| !key.trim().is_empty());
        }
    }
}

/// One violated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted field path, e.g. `languages.1` or `deepL.host`.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file: {0}")]
    Io(#[source] io::Error),

    #[error("Config file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid configuration:\n{}", format_validation_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read, validate and return the config at `path`, applying the API key fallback.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(ConfigError::Io(err)),
    };

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut config = Config::from_json(&content, base_dir)?;
    config.apply_api_key_fallback(env::var(API_KEY_ENV).ok());
    Ok(config)
}

/// Find the config file in `start_dir` or its ancestors, stopping at a git root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// On-disk shape written by `init`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    languages: Vec<String>,
    default_language: String,
    #[serde(rename = "deepL")]
    deep_l: DeepLFile,
}

#[derive(Debug, Serialize)]
struct DeepLFile {
    host: String,
}

pub fn default_config_json() -> Result<String> {
    let config = ConfigFile {
        languages: vec!["en".to_string()],
        default_language: "en".to_string(),
        deep_l: DeepLFile {
            host: DEFAULT_DEEPL_HOST.to_string(),
        },
    };
    let mut json =
        serde_json::to_string_pretty(&config).context("Failed to generate default config.")?;
    json.push('\n');
    Ok(json)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(path: &str, expected: &str, value: &Value) -> ValidationError {
    ValidationError::new(
        path,
        format!("Expected {}, received {}", expected, type_name(value)),
    )
}

fn validate(value: &Value, base_dir: &Path) -> Result<Config, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let Some(root) = value.as_object() else {
        return Err(vec![expected("", "object", value)]);
    };

    let languages = validate_languages(root, &mut errors);
    let default_language = validate_default_language(root, languages.as_deref(), &mut errors);
    let messages_path = validate_messages_path(root, base_dir, &mut errors);
    let deep_l = validate_deep_l(root, &mut errors);

    match (languages, default_language, messages_path, deep_l) {
        (Some(languages), Some(default_language), Some(messages_path), Some(deep_l))
            if errors.is_empty() =>
        {
            Ok(Config {
                languages,
                default_language,
                messages_path,
                deep_l,
            })
        }
        _ => Err(errors),
    }
}

fn validate_languages(
    root: &Map<String, Value>,
    errors: &mut Vec<ValidationError>,
) -> Option<Vec<LanguageCode>> {
    let Some(value) = root.get("languages") else {
        errors.push(ValidationError::new("languages", "Required"));
        return None;
    };
    let Some(items) = value.as_array() else {
        errors.push(expected("languages", "array", value));
        return None;
    };
    if items.is_empty() {
        errors.push(ValidationError::new(
            "languages",
            "At least one language must be specified",
        ));
        return None;
    }

    let before = errors.len();
    let mut languages: Vec<LanguageCode> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let path = format!("languages.{}", index);
        let Some(code) = item.as_str() else {
            errors.push(expected(&path, "string", item));
            continue;
        };
        match LanguageCode::parse(code) {
            Ok(language) if languages.contains(&language) => {
                errors.push(ValidationError::new(
                    path,
                    format!("Language {} is listed more than once", code),
                ));
            }
            Ok(language) => languages.push(language),
            Err(_) => errors.push(ValidationError::new(path, LANGUAGE_CODE_MESSAGE)),
        }
    }

    (errors.len() == before).then_some(languages)
}

fn validate_default_language(
    root: &Map<String, Value>,
    languages: Option<&[LanguageCode]>,
    errors: &mut Vec<ValidationError>,
) -> Option<LanguageCode> {
    let Some(value) = root.get("defaultLanguage") else {
        errors.push(ValidationError::new("defaultLanguage", "Required"));
        return None;
    };
    let Some(code) = value.as_str() else {
        errors.push(expected("defaultLanguage", "string", value));
        return None;
    };
    if !is_valid_language_code(code) {
        errors.push(ValidationError::new("defaultLanguage", LANGUAGE_CODE_MESSAGE));
        return None;
    }

    let language = LanguageCode::parse(code).ok()?;
    if let Some(languages) = languages
        && !languages.contains(&language)
    {
        errors.push(ValidationError::new(
            "defaultLanguage",
            "Default language must be included in the languages array",
        ));
        return None;
    }
    Some(language)
}

fn validate_messages_path(
    root: &Map<String, Value>,
    base_dir: &Path,
    errors: &mut Vec<ValidationError>,
) -> Option<PathBuf> {
    let relative = match root.get("messagesPath") {
        None => DEFAULT_MESSAGES_PATH,
        Some(Value::String(path)) if !path.trim().is_empty() => path.as_str(),
        Some(Value::String(_)) => {
            errors.push(ValidationError::new(
                "messagesPath",
                "Messages path must not be empty",
            ));
            return None;
        }
        Some(value) => {
            errors.push(expected("messagesPath", "string", value));
            return None;
        }
    };
    Some(base_dir.join(relative))
}

/// Outer `None` means invalid; `Some(None)` means the section is absent.
fn validate_deep_l(
    root: &Map<String, Value>,
    errors: &mut Vec<ValidationError>,
) -> Option<Option<DeepLConfig>> {
    let Some(value) = root.get("deepL") else {
        return Some(None);
    };
    let Some(section) = value.as_object() else {
        errors.push(expected("deepL", "object", value));
        return None;
    };

    let before = errors.len();

    let host = match section.get("host") {
        None => {
            errors.push(ValidationError::new("deepL.host", "Required"));
            None
        }
        Some(Value::String(host)) => match Url::parse(host) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
            _ => {
                errors.push(ValidationError::new(
                    "deepL.host",
                    "DeepL host must be a valid URL",
                ));
                None
            }
        },
        Some(value) => {
            errors.push(expected("deepL.host", "string", value));
            None
        }
    };

    let api_key = match section.get("apiKey") {
        None | Some(Value::Null) => None,
        Some(Value::String(key)) => Some(key.clone()).filter(|key| !key.trim().is_empty()),
        Some(value) => {
            errors.push(expected("deepL.apiKey", "string", value));
            None
        }
    };

    let request_delay = match section.get("requestDelay") {
        None => Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
        Some(Value::Number(number)) => match number.as_u64() {
            Some(ms) => Duration::from_millis(ms),
            None => {
                errors.push(ValidationError::new(
                    "deepL.requestDelay",
                    "Request delay must be a non-negative integer",
                ));
                Duration::ZERO
            }
        },
        Some(value) => {
            errors.push(expected("deepL.requestDelay", "number", value));
            Duration::ZERO
        }
    };

    if errors.len() != before {
        return None;
    }
    Some(host.map(|host| DeepLConfig {
        host,
        api_key,
        request_delay,
    }))
}
