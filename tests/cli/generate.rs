use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

const MANIFEST: &str = r#"{
    "VBtn": {
        "props": {
            "color": { "type": ["String"] }
        }
    },
    "VCard": {
        "props": {
            "title": { "type": ["String"] },
            "label": { "type": ["String"], "source": "VInput" }
        },
        "slots": { "default": {} }
    }
}"#;

const EDIT_URL: &str =
    "https://github.com/vuetifyjs/vuetify/tree/next/packages/api-generator/src/locale";

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_missing_translation_file_gets_placeholder() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let content = test.read_file("src/locale/en/v-btn.json")?;
    assert_eq!(
        content,
        format!(
            "{{\n  \"props\": {{\n    \"color\": \"MISSING DESCRIPTION ([edit in github]({}/en/v-btn.json))\"\n  }}\n}}\n",
            EDIT_URL
        )
    );

    let out = stdout(&output);
    assert!(out.contains("note: 2 component(s) have props without a source:"));
    assert!(out.contains("  - VBtn\n  - VCard\n"));
    assert!(out.contains("Processed 2 components, wrote 3 locale file(s)"));
    Ok(())
}

#[test]
fn test_inherited_prop_keeps_existing_description() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;
    test.write_file(
        "src/locale/en/v-input.json",
        r#"{"props": {"label": "Existing text"}}"#,
    )?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0));

    let input: Value = serde_json::from_str(&test.read_file("src/locale/en/v-input.json")?)?;
    assert_eq!(input["props"]["label"], "Existing text");

    let card: Value = serde_json::from_str(&test.read_file("src/locale/en/v-card.json")?)?;
    assert!(card["props"].get("label").is_none());
    assert!(card["props"]["title"]
        .as_str()
        .unwrap()
        .starts_with("MISSING DESCRIPTION"));
    Ok(())
}

#[test]
fn test_components_flag_restricts_processing() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;
    let stale = "{\"props\": {\"title\": \"MISSING DESCRIPTION (old)\"}}";
    test.write_file("src/locale/en/v-card.json", stale)?;

    let output = test.run(&["--components", "VBtn"])?;
    assert_eq!(output.status.code(), Some(0));

    assert!(test.root().join("src/locale/en/v-btn.json").exists());
    assert_eq!(test.read_file("src/locale/en/v-card.json")?, stale);
    assert!(!test.root().join("src/locale/en/v-input.json").exists());
    assert!(!test.root().join("src/tmp/VCard.d.ts").exists());
    assert!(test.root().join("src/tmp/VBtn.d.ts").exists());
    assert!(stdout(&output).contains("Processed 1 component,"));
    Ok(())
}

#[test]
fn test_unknown_component_is_reported() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;

    let output = test.run(&["--components", "VBtn", "VNope"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: unknown component \"VNope\" in --components"));
    Ok(())
}

#[test]
fn test_second_run_is_idempotent() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;
    test.write_file(
        "src/locale/en/v-card.json",
        r#"{"props": {"title": "The title", "removed": "MISSING DESCRIPTION (gone)"}}"#,
    )?;

    test.run(&[])?;
    let first = test.read_file("src/locale/en/v-card.json")?;
    test.run(&[])?;
    let second = test.read_file("src/locale/en/v-card.json")?;

    assert_eq!(first, second);
    let card: Value = serde_json::from_str(&second)?;
    assert_eq!(card["props"]["title"], "The title");
    assert!(card["props"].get("removed").is_none());
    assert!(card["slots"]["default"].is_string());
    Ok(())
}

#[test]
fn test_write_failure_does_not_stop_other_files() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;
    // A directory where the file should go: unreadable and unwritable
    fs::create_dir_all(test.root().join("src/locale/en/v-btn.json"))?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0));

    let err = stderr(&output);
    assert!(err.contains("error: failed to write"));
    assert!(err.contains("v-btn.json"));
    assert!(test.root().join("src/locale/en/v-card.json").is_file());
    assert!(test.root().join("src/locale/en/v-input.json").is_file());
    assert!(stdout(&output).contains("1 failed"));
    Ok(())
}

#[test]
fn test_worker_artifacts_are_written() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;

    test.run(&[])?;

    assert_eq!(
        test.read_file("src/tmp/VCard.d.ts")?,
        "import { VCard } from 'vuetify/components'\n"
    );
    let raw: Value = serde_json::from_str(&test.read_file("dist/api/en/v-card.json")?)?;
    assert_eq!(raw["locale"], "en");
    assert_eq!(raw["kebabName"], "v-card");
    assert_eq!(raw["props"]["label"]["source"], "VInput");
    Ok(())
}

#[test]
fn test_config_file_overrides_layout() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".apigenrc.json",
        r#"{
            "locales": ["en", "ja"],
            "localeRoot": "./i18n",
            "manifest": "./meta/components.json",
            "template": "./meta/template.d.ts",
            "editUrlBase": "https://example.com/i18n"
        }"#,
    )?;
    test.write_file("meta/components.json", r#"{"VChip": {"events": {"click": {}}}}"#)?;
    test.write_file("meta/template.d.ts", "__component__\n")?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let ja: Value = serde_json::from_str(&test.read_file("i18n/ja/v-chip.json")?)?;
    assert_eq!(
        ja["events"]["click"],
        "MISSING DESCRIPTION ([edit in github](https://example.com/i18n/ja/v-chip.json))"
    );
    assert!(test.root().join("i18n/en/v-chip.json").is_file());
    Ok(())
}

#[test]
fn test_single_worker_when_inspecting() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;

    let output = test
        .command()
        .arg("-v")
        .env("APIGEN_INSPECT", "1")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Extraction pool started with 1 worker(s)"));
    assert!(test.root().join("src/locale/en/v-card.json").is_file());
    Ok(())
}

#[test]
fn test_missing_manifest_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read component manifest"));
    assert!(!test.root().join("src/locale").exists());
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;
    test.write_file(".apigenrc.json", r#"{ "locales": [] }"#)?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("locales"));
    Ok(())
}

#[test]
fn test_hand_ordered_file_keeps_its_order() -> Result<()> {
    let test = CliTest::with_manifest(MANIFEST)?;
    let card = "{\n  \"slots\": {\n    \"default\": \"Card body\"\n  },\n  \"props\": {\n    \"title\": \"The title\"\n  }\n}\n";
    test.write_file("src/locale/en/v-card.json", card)?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(test.read_file("src/locale/en/v-card.json")?, card);
    Ok(())
}
