//! TypeScript module renderer.
//!
//! Output layout relative to the output directory:
//!
//! - `core.ts`: language list, current-language state, listeners and setters
//! - `messages/{key}.ts`: one accessor per key
//! - `index.ts`: re-exports `core` and every key module

use std::fmt::Write as _;
use std::path::PathBuf;

use super::{FileKind, GeneratedFile, ModuleRenderer};
use crate::core::{KeyRecord, KeyTable, LanguageVariant, Segment};

const GENERATED_HEADER: &str = "// This file is generated by d18n. Do not edit it by hand.\n";
const MESSAGES_DIR: &str = "messages";

const CORE_TEMPLATE: &str = r#"export class UnknownLocaleError extends Error {
  constructor(public readonly locale: string) {
    super(`Language ${locale} does not exist`);
    this.name = 'UnknownLocaleError';
  }
}

/**
 * The languages supported by the application, default first.
 */
export const languages = [__LANGUAGES__] as const;

export type Language = (typeof languages)[number];

export const defaultLanguage: Language = '__DEFAULT__';

let currentLanguage: string = defaultLanguage;

const listeners = new Map<string, (language: string) => void>();

/**
 * Checks whether a language is part of `languages`.
 */
export const languageExists = (language: string): language is Language => {
  return (languages as readonly string[]).includes(language);
};

export const isLocale = languageExists;

/**
 * The language accessors use when no locale is passed.
 */
export const getCurrentLanguage = (): string => {
  return currentLanguage;
};

export const getLocale = getCurrentLanguage;

/**
 * Registers a listener called after every successful language change.
 *
 * Registering again under the same name replaces the previous listener.
 * Returns a function that removes the listener.
 */
export const onChangeLanguage = (
  listenerName: string,
  listener: (language: string) => void,
): (() => void) => {
  listeners.set(listenerName, listener);

  return () => {
    listeners.delete(listenerName);
  };
};

export const subscribe = onChangeLanguage;

/**
 * Sets the current language and notifies listeners in registration order.
 *
 * Throws an `UnknownLocaleError` when the language does not exist.
 */
export const setLanguage = (language: string): void => {
  if (!languageExists(language)) {
    throw new UnknownLocaleError(language);
  }

  currentLanguage = language;

  for (const listener of listeners.values()) {
    listener(language);
  }
};

export const setLocale = setLanguage;
"#;

/// Renders a key table as ES modules with typed accessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl ModuleRenderer for TypeScriptRenderer {
    fn render(&self, table: &KeyTable) -> Vec<GeneratedFile> {
        let mut files = Vec::with_capacity(table.len() + 2);

        files.push(GeneratedFile {
            kind: FileKind::Core,
            path: PathBuf::from("core.ts"),
            contents: render_core(table),
        });

        for record in table.records() {
            files.push(GeneratedFile {
                kind: FileKind::Key(record.key.clone()),
                path: PathBuf::from(MESSAGES_DIR).join(format!("{}.ts", record.key)),
                contents: render_key_module(record),
            });
        }

        files.push(GeneratedFile {
            kind: FileKind::Index,
            path: PathBuf::from("index.ts"),
            contents: render_index(table),
        });

        files
    }

    fn extension(&self) -> &str {
        "ts"
    }

    fn key_module_dir(&self) -> PathBuf {
        PathBuf::from(MESSAGES_DIR)
    }
}

fn render_core(table: &KeyTable) -> String {
    let languages = table
        .languages()
        .iter()
        .map(|l| format!("'{}'", l))
        .collect::<Vec<_>>()
        .join(", ");

    let body = CORE_TEMPLATE
        .replace("__LANGUAGES__", &languages)
        .replace("__DEFAULT__", table.default_language().as_str());

    format!("{}\n{}", GENERATED_HEADER, body)
}

fn render_index(table: &KeyTable) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str("\nexport * from './core';\n");

    if !table.is_empty() {
        out.push('\n');
        for key in table.keys() {
            let _ = writeln!(out, "export * from './{}/{}';", MESSAGES_DIR, key);
        }
    }

    out
}

fn render_key_module(record: &KeyRecord) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str("\nimport { getCurrentLanguage } from '../core';\n");

    for variant in record.translated() {
        out.push('\n');
        out.push_str(&render_variant(&record.key, variant));
    }

    out.push('\n');
    out.push_str(&render_doc_comment(record));
    out.push_str(&render_accessor(record));
    out
}

/// `const en_greet = ({ name }: { name: string }): string => `Hi ${name}`;`
fn render_variant(key: &str, variant: &LanguageVariant) -> String {
    let signature = if variant.params().is_empty() {
        "()".to_string()
    } else {
        format!(
            "({{ {} }}: {})",
            variant.params().join(", "),
            params_type(variant.params())
        )
    };

    format!(
        "const {} = {}: string => `{}`;\n",
        variant.function_name(key),
        signature,
        template_literal_body(variant)
    )
}

fn render_doc_comment(record: &KeyRecord) -> String {
    let mut out = String::from("/**\n");
    for variant in &record.variants {
        let raw = variant.raw.replace("*/", "*\\/").replace('\n', "\n *   ");
        let _ = writeln!(out, " * @{} {}", variant.language, raw);
    }
    out.push_str(" */\n");
    out
}

fn render_accessor(record: &KeyRecord) -> String {
    let inputs = if record.has_params() {
        format!("inputs: {}", params_type(&record.params))
    } else {
        "inputs: Record<string, never> = {}".to_string()
    };

    let mut out = format!(
        "export const {} = ({}, locale?: string): string => {{\n",
        record.key, inputs
    );
    out.push_str("  const _locale = locale ?? getCurrentLanguage();\n");

    let mut translated = record.translated().peekable();
    if translated.peek().is_some() {
        out.push('\n');
    }
    for variant in translated {
        let args = if variant.params().is_empty() {
            ""
        } else {
            "inputs"
        };
        let _ = writeln!(
            out,
            "  if (_locale === '{}') return {}({});",
            variant.language,
            variant.function_name(&record.key),
            args
        );
    }

    let _ = write!(out, "\n  return '{}';\n}};\n", record.key);
    out
}

/// `{ name: string; count: string }`
fn params_type(params: &[String]) -> String {
    let fields = params
        .iter()
        .map(|p| format!("{}: string", p))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{{ {} }}", fields)
}

fn template_literal_body(variant: &LanguageVariant) -> String {
    let mut out = String::new();
    for segment in &variant.template.segments {
        match segment {
            Segment::Text(text) => out.push_str(&escape_template_text(text)),
            Segment::Param(name) => {
                let _ = write!(out, "${{{}}}", name);
            }
        }
    }
    out
}

/// Escape text for use inside a template literal.
fn escape_template_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
