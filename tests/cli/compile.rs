use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CONFIG, CliTest, stderr, stdout};

#[test]
fn test_compile_generates_modules() -> Result<()> {
    let test = CliTest::with_project(
        &["en", "es"],
        &[
            ("en", r#"{ "greet": "Hi {{name}}", "title": "Welcome" }"#),
            ("es", r#"{ "title": "Bienvenido" }"#),
        ],
    )?;

    let output = test.run(&["compile"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("\u{2713} Compilation completed successfully at "));
    assert!(out.contains("  2 keys into 4 files\n"));

    let greet = test.read_file("dist/messages/greet.ts")?;
    assert!(greet.contains(
        "export const greet = (inputs: { name: string }, locale?: string): string => {"
    ));
    assert!(greet.contains("if (_locale === 'en') return en_greet(inputs);"));
    assert!(!greet.contains("if (_locale === 'es')"));

    let title = test.read_file("dist/messages/title.ts")?;
    assert!(title.contains("if (_locale === 'es') return es_title();"));

    assert_eq!(
        test.read_file("dist/index.ts")?,
        "// This file is generated by d18n. Do not edit it by hand.\n\nexport * from './core';\n\nexport * from './messages/greet';\nexport * from './messages/title';\n"
    );

    // Message files are left untouched without --backfill.
    assert_eq!(test.read_file("messages/es.json")?, r#"{ "title": "Bienvenido" }"#);

    Ok(())
}

#[test]
fn test_compile_custom_output_and_backfill() -> Result<()> {
    let test = CliTest::with_project(
        &["en", "es"],
        &[("en", r#"{ "title": "Welcome" }"#), ("es", "{}")],
    )?;

    let output = test.run(&["compile", "-o", "src/i18n", "--backfill"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.root().join("src/i18n/messages/title.ts").exists());
    assert_eq!(
        test.read_file("messages/es.json")?,
        "{\n  \"title\": \"<missing es translation>\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_compile_reports_reserved_key() -> Result<()> {
    let test = CliTest::with_project(&["en"], &[("en", r#"{ "class": "Class" }"#)])?;

    let output = test.run(&["compile"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(
        "Reserved words like class are not allowed to be used as keys (en.json)"
    ));
    assert!(!test.root().join("dist").exists());

    Ok(())
}

#[test]
fn test_compile_reports_missing_language_file() -> Result<()> {
    let test = CliTest::with_project(&["en", "fr"], &[("en", "{}")])?;

    let output = test.run(&["compile"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Language file for fr not found at"));

    Ok(())
}

#[test]
fn test_compile_lists_every_config_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        CONFIG,
        r#"{ "languages": ["en", "english"], "defaultLanguage": "de", "deepL": { "host": "nope" } }"#,
    )?;

    let output = test.run(&["compile"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        concat!(
            "\u{2718} Invalid configuration\n",
            "  languages.1: Language code must be in format \"xx\" or \"xx-XX\" (e.g., \"en\" or \"en-US\")\n",
            "  deepL.host: DeepL host must be a valid URL\n",
        )
    );

    Ok(())
}

#[test]
fn test_compile_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/settings.json",
        r#"{ "languages": ["en"], "defaultLanguage": "en" }"#,
    )?;
    test.write_file("i18n/messages/en.json", r#"{ "title": "Welcome" }"#)?;

    let output = test.run(&["compile", "-c", "i18n/settings.json"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.root().join("dist/messages/title.ts").exists());

    Ok(())
}
