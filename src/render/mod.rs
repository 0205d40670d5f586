//! Rendering of key tables into source modules.
//!
//! Renderers only turn data into text. They never touch the filesystem; the compile
//! step decides where and whether the returned files are written.

pub mod typescript;

use std::path::PathBuf;

use crate::core::KeyTable;

pub use typescript::TypeScriptRenderer;

/// What a generated file provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// Shared locale state, language list and setters.
    Core,
    /// The accessor module for one key.
    Key(String),
    /// Re-exports of everything else.
    Index,
}

/// A rendered file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: FileKind,
    pub path: PathBuf,
    pub contents: String,
}

/// Turns a [`KeyTable`] into source files for one target language.
pub trait ModuleRenderer {
    /// Render every file of the unit: one module per key, the core module and the index.
    fn render(&self, table: &KeyTable) -> Vec<GeneratedFile>;

    /// File extension of the generated modules, without the dot.
    fn extension(&self) -> &str;

    /// Directory, relative to the output directory, that holds the per-key modules.
    fn key_module_dir(&self) -> PathBuf;
}
