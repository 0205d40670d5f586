use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{CONFIG, CliTest, stderr, stdout};

fn project(host: &str, api_key: Option<&str>) -> Result<CliTest> {
    let test = CliTest::with_project(
        &["en", "es"],
        &[("en", r#"{ "hello": "Hello" }"#), ("es", "{}")],
    )?;

    let mut deep_l = json!({ "host": host, "requestDelay": 0 });
    if let Some(api_key) = api_key {
        deep_l["apiKey"] = json!(api_key);
    }
    let config = json!({
        "languages": ["en", "es"],
        "defaultLanguage": "en",
        "deepL": deep_l,
    });
    test.write_file(CONFIG, &config.to_string())?;

    Ok(test)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_translate_without_api_key_sends_nothing() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let test = project(&server.uri(), None)?;

    let output = test.run(&["translate"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No API key configured"));
    assert_eq!(test.read_file("messages/es.json")?, "{}");

    Ok(())
}

#[test]
fn test_translate_without_deepl_section() -> Result<()> {
    let test = CliTest::with_project(&["en", "es"], &[("en", r#"{ "hello": "Hello" }"#)])?;

    let output = test.run(&["translate"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No deepL section in the config file"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_translate_fills_missing_keys() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/translate"))
        .and(header("Authorization", "DeepL-Auth-Key secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "translations": [{ "text": "Hola" }]
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let test = project(&server.uri(), Some("secret"))?;

    let output = test.run(&["translate"])?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "\u{2713} es: translated 1 key\n");
    assert_eq!(
        test.read_file("messages/es.json")?,
        "{\n  \"hello\": \"Hola\"\n}\n"
    );

    Ok(())
}
