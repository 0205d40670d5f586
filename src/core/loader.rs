//! Reading and writing `{language}.json` message files.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::debug;

use super::{
    CompileError, LanguageCode, TranslationDictionary,
    language::{is_reserved_keyword, is_valid_identifier},
};

/// Path of the message file for `language` inside `dir`.
pub fn language_file_path(language: &LanguageCode, dir: &Path) -> PathBuf {
    dir.join(format!("{}.json", language))
}

/// Load one language's dictionary from `{dir}/{language}.json`.
///
/// The file must hold a flat JSON object of string values. The loader never creates
/// files; see [`load_or_create`] for the workflow that does.
pub fn load_dictionary(
    language: &LanguageCode,
    dir: &Path,
) -> Result<TranslationDictionary, CompileError> {
    let path = language_file_path(language, dir);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CompileError::FileNotFound {
                language: language.to_string(),
                path,
            });
        }
        Err(err) => return Err(CompileError::io(path, err)),
    };

    let dictionary = parse_dictionary(language, &path, &content)?;
    debug!(
        "Loaded {} keys for {} from {}",
        dictionary.len(),
        language,
        path.display()
    );
    Ok(dictionary)
}

/// Parse the content of a message file.
pub fn parse_dictionary(
    language: &LanguageCode,
    path: &Path,
    content: &str,
) -> Result<TranslationDictionary, CompileError> {
    let malformed = |reason: String| CompileError::MalformedJson {
        path: path.to_path_buf(),
        reason,
    };

    let json: Value = serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;

    let Value::Object(map) = json else {
        return Err(malformed("root must be an object".to_string()));
    };

    let mut dictionary = TranslationDictionary::new();
    for (key, value) in map {
        if is_reserved_keyword(&key) {
            return Err(CompileError::ReservedKeyUsed {
                key,
                language: language.to_string(),
            });
        }
        if !is_valid_identifier(&key) {
            return Err(CompileError::InvalidKey {
                key,
                language: language.to_string(),
            });
        }

        let Value::String(text) = value else {
            return Err(malformed(format!("value of \"{}\" must be a string", key)));
        };
        dictionary.insert(key, text);
    }

    Ok(dictionary)
}

/// Write a dictionary back to `{dir}/{language}.json`.
///
/// Output is pretty-printed with 2-space indentation, keeps key order and ends with
/// a newline. The directory is created when absent.
pub fn write_dictionary(
    language: &LanguageCode,
    dir: &Path,
    dictionary: &TranslationDictionary,
) -> Result<(), CompileError> {
    fs::create_dir_all(dir).map_err(|e| CompileError::io(dir, e))?;

    let map: Map<String, Value> = dictionary
        .iter()
        .map(|(key, text)| (key.to_string(), Value::String(text.to_string())))
        .collect();

    let path = language_file_path(language, dir);
    let mut content = serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
        CompileError::MalformedJson {
            path: path.clone(),
            reason: e.to_string(),
        }
    })?;
    if !content.ends_with('\n') {
        content.push('\n');
    }

    fs::write(&path, content).map_err(|e| CompileError::io(&path, e))?;
    debug!("Wrote {} keys to {}", dictionary.len(), path.display());
    Ok(())
}

/// Load a dictionary, synthesizing an empty file when it does not exist yet.
///
/// Any other failure (malformed JSON, reserved keys) is still returned.
pub fn load_or_create(
    language: &LanguageCode,
    dir: &Path,
) -> Result<TranslationDictionary, CompileError> {
    match load_dictionary(language, dir) {
        Err(CompileError::FileNotFound { .. }) => {
            let empty = TranslationDictionary::new();
            write_dictionary(language, dir, &empty)?;
            Ok(empty)
        }
        other => other,
    }
}
