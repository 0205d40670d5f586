//! Translation key compiler.
//!
//! The pipeline runs in four steps, each a pure function over the previous step's
//! output except for the loader:
//!
//! 1. `loader`: read each `{language}.json` into a [`TranslationDictionary`]
//! 2. `reconcile`: equalize key sets across languages into a [`ReconciledUnit`]
//! 3. `key_table`: parse placeholders and build one [`KeyRecord`] per key
//! 4. rendering, see [`crate::render`]
//!
//! ## Module Structure
//!
//! - `catalog`: in-process evaluation of compiled accessors
//! - `dictionary`: ordered key/text mapping for one language
//! - `error`: compile and locale errors
//! - `key_table`: per-key function tables
//! - `language`: language codes, reserved words, missing-translation sentinel
//! - `loader`: message file I/O
//! - `locale`: explicit current-locale registry with subscriptions
//! - `placeholder`: placeholder parsing
//! - `reconcile`: cross-language reconciliation
//! - `status`: translation completeness

pub mod catalog;
pub mod dictionary;
pub mod error;
pub mod key_table;
pub mod language;
pub mod loader;
pub mod locale;
pub mod placeholder;
pub mod reconcile;
pub mod status;

pub use catalog::Catalog;
pub use dictionary::{Dictionaries, TranslationDictionary};
pub use error::{CompileError, UnknownLocaleError};
pub use key_table::{KeyRecord, KeyTable, LanguageVariant, build_key_table};
pub use language::{LanguageCode, is_missing, missing_translation};
pub use loader::{load_dictionary, load_or_create, write_dictionary};
pub use locale::{LocaleRegistry, Subscription};
pub use placeholder::{ParsedTemplate, Segment, extract_placeholders, parse_template};
pub use reconcile::{ReconciledUnit, reconcile};
pub use status::{
    CompletenessReport, LanguageCoverage, TranslationStatus, completeness, key_status,
};
