//! d18n - translation key compiler
//!
//! Compiles per-language JSON message dictionaries into typed accessor modules: one
//! function per translation key that dispatches on the active locale and substitutes
//! named placeholders. The crate is both the `d18n` CLI and a library.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `compile`: Compile orchestration and serialized recompiles
//! - `config`: Configuration file loading and validation
//! - `core`: Loader, reconciler, placeholder parser, key tables and locale runtime
//! - `render`: Module renderers (TypeScript)
//! - `translate`: Machine translation of missing keys

pub mod cli;
pub mod compile;
pub mod config;
pub mod core;
pub mod render;
pub mod translate;
