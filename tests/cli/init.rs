use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CONFIG, CliTest, stderr, stdout};

#[test]
fn test_init_creates_config_and_messages() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Created do-easy-i18n.config.json\n\u{2713} Created messages/en.json\n"
    );

    let config: Value =
        serde_json::from_str(&test.read_file(CONFIG)?).context("Config should be valid JSON")?;
    assert_eq!(config["languages"], serde_json::json!(["en"]));
    assert_eq!(config["defaultLanguage"], "en");
    assert_eq!(config["deepL"]["host"], "https://api-free.deepl.com");

    assert_eq!(test.read_file("messages/en.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_init_fails_if_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(CONFIG, "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("do-easy-i18n.config.json already exists"));
    assert!(!test.root().join("messages").exists());

    Ok(())
}

#[test]
fn test_init_fails_if_messages_exist() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("messages folder already exists"));
    assert!(!test.root().join(CONFIG).exists());

    Ok(())
}

#[test]
fn test_init_then_compile() -> Result<()> {
    let test = CliTest::new()?;

    assert_eq!(test.run(&["init"])?.status.code(), Some(0));
    let output = test.run(&["compile"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.root().join("dist/core.ts").exists());
    assert!(test.root().join("dist/index.ts").exists());

    Ok(())
}
