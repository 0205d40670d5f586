use std::{fs, io, path::Path};

use anyhow::{Context, Result};

use super::super::exit_status::ExitStatus;
use super::super::report::{print_created_to, print_failure_to};
use crate::config::{CONFIG_FILE_NAME, DEFAULT_MESSAGES_PATH, default_config_json};
use crate::core::{LanguageCode, TranslationDictionary, write_dictionary};

/// Create the config file and an empty `messages/en.json` in `root`.
pub fn init(root: &Path) -> Result<ExitStatus> {
    let config_path = root.join(CONFIG_FILE_NAME);
    let messages_dir = root.join(DEFAULT_MESSAGES_PATH);

    let mut stderr = io::stderr().lock();
    if config_path.exists() {
        print_failure_to(&format!("{} already exists", CONFIG_FILE_NAME), &mut stderr);
        return Ok(ExitStatus::Failure);
    }
    if messages_dir.exists() {
        print_failure_to(
            &format!("{} folder already exists", DEFAULT_MESSAGES_PATH),
            &mut stderr,
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let language = LanguageCode::parse("en")?;
    write_dictionary(&language, &messages_dir, &TranslationDictionary::new())?;

    let mut stdout = io::stdout().lock();
    print_created_to(Path::new(CONFIG_FILE_NAME), &mut stdout);
    print_created_to(&Path::new(DEFAULT_MESSAGES_PATH).join("en.json"), &mut stdout);

    Ok(ExitStatus::Success)
}
