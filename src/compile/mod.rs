//! Compile orchestration.
//!
//! Loads every configured language, reconciles, builds the key table and renders all
//! output in memory. Files are written only after every step succeeded, so a failed
//! compile leaves the previous output untouched.

pub mod schedule;

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Local;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::{
    CompileError, Dictionaries, KeyTable, LanguageCode, ReconciledUnit, build_key_table,
    load_dictionary, reconcile, write_dictionary,
};
use crate::render::{FileKind, GeneratedFile, ModuleRenderer, TypeScriptRenderer};

pub const SUCCESS_MESSAGE: &str = "Compilation completed successfully";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Write reconciled dictionaries that gained sentinels back to the messages directory.
    pub persist_backfill: bool,
}

/// Outcome of one compile, shown to users as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub success: bool,
    pub message: String,
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
    pub key_count: usize,
    /// Written paths, relative to the output directory.
    pub files_written: Vec<PathBuf>,
}

impl CompileReport {
    fn succeeded(key_count: usize, files_written: Vec<PathBuf>) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            timestamp: timestamp(),
            key_count,
            files_written,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            timestamp: timestamp(),
            key_count: 0,
            files_written: Vec::new(),
        }
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Compile the unit described by `config` into TypeScript modules under `output_dir`.
pub fn compile(config: &Config, output_dir: &Path, options: CompileOptions) -> CompileReport {
    compile_with(&TypeScriptRenderer, config, output_dir, options)
}

/// Like [`compile`], with a caller-chosen renderer.
pub fn compile_with(
    renderer: &dyn ModuleRenderer,
    config: &Config,
    output_dir: &Path,
    options: CompileOptions,
) -> CompileReport {
    match run(renderer, config, output_dir, options) {
        Ok((key_count, files_written)) => {
            info!(
                "Compiled {} keys into {} files under {}",
                key_count,
                files_written.len(),
                output_dir.display()
            );
            CompileReport::succeeded(key_count, files_written)
        }
        Err(err) => CompileReport::failed(err.to_string()),
    }
}

/// Load the configured languages, default first.
pub fn load_unit(config: &Config) -> Result<Dictionaries, CompileError> {
    config
        .ordered_languages()
        .into_iter()
        .map(|language| {
            let dictionary = load_dictionary(&language, &config.messages_path)?;
            Ok((language, dictionary))
        })
        .collect()
}

/// Load, reconcile and build the key table without writing anything.
pub fn build_unit(config: &Config) -> Result<(ReconciledUnit, KeyTable), CompileError> {
    let unit = reconcile(&config.default_language, load_unit(config)?);
    let table = build_key_table(&unit)?;
    Ok((unit, table))
}

fn run(
    renderer: &dyn ModuleRenderer,
    config: &Config,
    output_dir: &Path,
    options: CompileOptions,
) -> Result<(usize, Vec<PathBuf>), CompileError> {
    let (unit, table) = build_unit(config)?;
    let files = renderer.render(&table);

    if options.persist_backfill {
        persist_backfill(&unit, &config.messages_path)?;
    }

    let written = write_files(output_dir, &files)?;
    prune_stale_modules(renderer, output_dir, &files)?;

    Ok((table.len(), written))
}

fn persist_backfill(unit: &ReconciledUnit, messages_path: &Path) -> Result<(), CompileError> {
    let languages: Vec<LanguageCode> = unit.backfilled().map(|(l, _)| l.clone()).collect();
    for language in &languages {
        if let Some(dictionary) = unit.dictionary(language) {
            write_dictionary(language, messages_path, dictionary)?;
        }
    }
    Ok(())
}

fn write_files(output_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, CompileError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CompileError::io(parent, e))?;
        }
        fs::write(&path, &file.contents).map_err(|e| CompileError::io(&path, e))?;
        debug!("Wrote {}", path.display());
        written.push(file.path.clone());
    }

    Ok(written)
}

/// Remove key modules whose key is not among the rendered files.
fn prune_stale_modules(
    renderer: &dyn ModuleRenderer,
    output_dir: &Path,
    files: &[GeneratedFile],
) -> Result<(), CompileError> {
    let dir = output_dir.join(renderer.key_module_dir());
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(CompileError::io(dir, err)),
    };

    let current: HashSet<&str> = files
        .iter()
        .filter_map(|file| match &file.kind {
            FileKind::Key(key) => Some(key.as_str()),
            _ => None,
        })
        .collect();

    for entry in entries {
        let path = entry.map_err(|e| CompileError::io(&dir, e))?.path();
        let is_module = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == renderer.extension());
        let is_current = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| current.contains(stem));
        if is_module && !is_current {
            fs::remove_file(&path).map_err(|e| CompileError::io(&path, e))?;
            debug!("Removed stale module {}", path.display());
        }
    }

    Ok(())
}
