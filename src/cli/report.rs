//! Report formatting and printing utilities.
//!
//! Every printer writes to a caller-supplied writer so output can be tested. Colors
//! follow `colored`'s global switch, which honours `NO_COLOR`.

use std::{io::Write, path::Path};

use colored::Colorize;

use crate::compile::CompileReport;
use crate::config::ConfigError;
use crate::core::{CompletenessReport, LanguageCode};
use crate::translate::FillReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}

pub fn print_created_to<W: Write>(path: &Path, writer: &mut W) {
    print_success_to(&format!("Created {}", path.display()), writer);
}

/// Print a config problem. Validation failures list every field.
pub fn print_config_error_to<W: Write>(err: &ConfigError, writer: &mut W) {
    match err {
        ConfigError::Invalid(errors) => {
            print_failure_to("Invalid configuration", writer);
            for error in errors {
                let _ = writeln!(
                    writer,
                    "  {} {}",
                    format!("{}:", error.path).bold(),
                    error.message
                );
            }
        }
        other => print_failure_to(&other.to_string(), writer),
    }
}

pub fn print_compile_report_to<W: Write>(report: &CompileReport, writer: &mut W) {
    if report.success {
        print_success_to(
            &format!("{} at {}", report.message, report.timestamp),
            writer,
        );
        let _ = writeln!(
            writer,
            "  {} into {}",
            plural(report.key_count, "key", "keys"),
            plural(report.files_written.len(), "file", "files")
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {}",
            FAILURE_MARK.red(),
            format!("[{}]", report.timestamp).dimmed(),
            report.message.red()
        );
    }
}

pub fn print_fill_report_to<W: Write>(report: &FillReport, writer: &mut W) {
    for (language, keys) in &report.updated {
        print_success_to(
            &format!(
                "{}: translated {}",
                language,
                plural(keys.len(), "key", "keys")
            ),
            writer,
        );
    }

    for failure in &report.failures {
        let _ = writeln!(
            writer,
            "{} {} {} ({} -> {}): {}",
            "warning:".bold().yellow(),
            failure.key,
            "failed".yellow(),
            failure.source,
            failure.language,
            failure.error
        );
    }

    for (language, keys) in &report.unresolved {
        print_failure_to(
            &format!("{}: still missing {}", language, keys.join(", ")),
            writer,
        );
    }

    if report.updated.is_empty() && report.unresolved.is_empty() {
        print_success_to("Nothing to translate", writer);
    }
}

/// Print completeness, optionally restricted to one language.
pub fn print_completeness_to<W: Write>(
    report: &CompletenessReport,
    language: Option<&LanguageCode>,
    writer: &mut W,
) {
    for (code, coverage) in &report.coverage {
        if language.is_some_and(|l| l != code) {
            continue;
        }
        let line = format!("{}: {}/{} translated", code, coverage.translated, coverage.total);
        if coverage.missing() == 0 {
            print_success_to(&line, writer);
        } else {
            print_failure_to(&line, writer);
        }
    }

    let mut missing_count = 0;
    for (key, languages) in &report.missing {
        let shown: Vec<&str> = languages
            .iter()
            .filter(|l| language.is_none_or(|only| only == *l))
            .map(LanguageCode::as_str)
            .collect();
        if shown.is_empty() {
            continue;
        }
        missing_count += 1;
        let _ = writeln!(
            writer,
            "  {} {} {}",
            "-->".blue(),
            key.bold(),
            format!("missing in {}", shown.join(", ")).dimmed()
        );
    }

    let _ = writeln!(writer);
    if missing_count == 0 {
        print_success_to(
            &format!(
                "All {} translated",
                plural(report.key_count, "key is", "keys are")
            ),
            writer,
        );
    } else {
        print_failure_to(
            &format!(
                "{} missing translations",
                plural(missing_count, "key has", "keys have")
            ),
            writer,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ValidationError;
    use crate::core::{Dictionaries, completeness};

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::parse(code).unwrap()
    }

    fn render(print: impl FnOnce(&mut Vec<u8>)) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        print(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_compile_success() {
        let report = CompileReport {
            success: true,
            message: "Compilation completed successfully".to_string(),
            timestamp: "12:30:05".to_string(),
            key_count: 1,
            files_written: vec![PathBuf::from("core.ts"), PathBuf::from("index.ts")],
        };

        let output = render(|w| print_compile_report_to(&report, w));
        assert_eq!(
            output,
            "\u{2713} Compilation completed successfully at 12:30:05\n  1 key into 2 files\n"
        );
    }

    #[test]
    fn test_compile_failure() {
        let report = CompileReport {
            success: false,
            message: "Language file for fr not found at messages/fr.json".to_string(),
            timestamp: "08:00:00".to_string(),
            key_count: 0,
            files_written: Vec::new(),
        };

        let output = render(|w| print_compile_report_to(&report, w));
        assert_eq!(
            output,
            "\u{2718} [08:00:00] Language file for fr not found at messages/fr.json\n"
        );
    }

    #[test]
    fn test_config_errors_list_every_field() {
        let err = ConfigError::Invalid(vec![
            ValidationError {
                path: "languages.0".to_string(),
                message: "bad".to_string(),
            },
            ValidationError {
                path: "defaultLanguage".to_string(),
                message: "Required".to_string(),
            },
        ]);

        let output = render(|w| print_config_error_to(&err, w));
        assert_eq!(
            output,
            "\u{2718} Invalid configuration\n  languages.0: bad\n  defaultLanguage: Required\n"
        );
    }

    #[test]
    fn test_completeness_filtered_by_language() {
        let dictionaries = Dictionaries::from([
            (lang("en"), [("a", "A"), ("b", "B")].into_iter().collect()),
            (lang("es"), [("a", "A")].into_iter().collect()),
            (lang("fr"), [("a", "A"), ("b", "B")].into_iter().collect()),
        ]);
        let report = completeness(&dictionaries);

        let output = render(|w| print_completeness_to(&report, Some(&lang("fr")), w));
        assert_eq!(output, "\u{2713} fr: 2/2 translated\n\n\u{2713} All 2 keys are translated\n");

        let output = render(|w| print_completeness_to(&report, None, w));
        assert!(output.contains("\u{2718} es: 1/2 translated\n"));
        assert!(output.contains("  --> b missing in es\n"));
        assert!(output.ends_with("\u{2718} 1 key has missing translations\n"));
    }
}
