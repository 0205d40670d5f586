use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_status_complete() -> Result<()> {
    let test = CliTest::with_project(
        &["en", "es"],
        &[("en", r#"{ "a": "A" }"#), ("es", r#"{ "a": "A!" }"#)],
    )?;

    let output = test.run(&["status"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} en: 1/1 translated\n\u{2713} es: 1/1 translated\n\n\u{2713} All 1 key is translated\n"
    );

    Ok(())
}

#[test]
fn test_status_lists_missing_keys() -> Result<()> {
    let test = CliTest::with_project(
        &["en", "es", "fr"],
        &[
            ("en", r#"{ "a": "A", "b": "B" }"#),
            ("es", r#"{ "a": "A!", "b": "<missing es translation>" }"#),
        ],
    )?;

    let output = test.run(&["status"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("\u{2718} es: 1/2 translated\n"));
    assert!(out.contains("\u{2718} fr: 0/2 translated\n"));
    assert!(out.contains("  --> a missing in fr\n"));
    assert!(out.contains("  --> b missing in es, fr\n"));

    Ok(())
}

#[test]
fn test_status_single_language() -> Result<()> {
    let test = CliTest::with_project(
        &["en", "es"],
        &[("en", r#"{ "a": "A", "b": "B" }"#), ("es", r#"{ "a": "A!" }"#)],
    )?;

    let output = test.run(&["status", "-l", "en"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let output = test.run(&["status", "--language", "es"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("  --> b missing in es\n"));

    let output = test.run(&["status", "-l", "de"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Language de is not configured"));

    Ok(())
}
