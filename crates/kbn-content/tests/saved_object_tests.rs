//! Standalone saved objects across schema generations

use kbn_content::{
    describe_saved_object, Classifier, ClassifierConfig, ConfigError, ContentError, Editor,
    LegacyPolicy, Link,
};
use kbn_test_utils::{init_tracing, legacy_saved_visualization};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;

#[test]
fn lens_without_attribute_type() -> anyhow::Result<()> {
    let desc = describe_saved_object(json!({
        "type": "lens",
        "attributes": { "title": "Unique visitors", "visualizationType": "lnsMetric" }
    }))?;
    assert_eq!(desc.vis_type(), "");
    assert_eq!(desc.editor()?, Editor::Lens);
    assert!(!desc.is_legacy());
    assert_eq!(desc.link(), Link::ByReference);
    Ok(())
}

#[test]
fn saved_search() -> anyhow::Result<()> {
    let desc = describe_saved_object(json!({
        "type": "search",
        "attributes": {
            "title": "Errors",
            "kibanaSavedObjectMeta": {
                "searchSourceJSON": "{\"query\":{\"query\":\"level:error\",\"language\":\"kuery\"},\"filter\":[]}"
            }
        }
    }))?;
    assert!(!desc.can_use_filter());
    assert_eq!(desc.editor()?, Editor::Discover);
    assert_eq!(desc.title(), "");
    assert!(desc.has_filters()?);
    Ok(())
}

#[test]
fn pre_8x_tsvb_markdown() -> anyhow::Result<()> {
    init_tracing();
    let doc = legacy_saved_visualization(
        "metrics",
        "Notes",
        json!({ "type": "markdown", "markdown": "hi" }),
    );
    let desc = describe_saved_object(doc)?;
    assert_eq!(desc.title(), "Notes");
    assert_eq!(desc.vis_type(), "metrics");
    assert_eq!(desc.tsvb_type(), "markdown");
    assert_eq!(desc.semantic_type(), "markdown");
    assert_eq!(desc.editor()?, Editor::Tsvb);
    assert!(!desc.is_legacy());
    assert!(!desc.has_filters()?);
    Ok(())
}

#[test]
fn pre_8x_timelion_is_legacy() -> anyhow::Result<()> {
    let doc = legacy_saved_visualization("timelion", "Rates", json!({ "expression": ".es(*)" }));
    let desc = describe_saved_object(doc)?;
    assert_eq!(desc.editor()?, Editor::Timelion);
    assert!(desc.is_legacy());
    Ok(())
}

#[test]
fn inflated_document_is_exposed() -> anyhow::Result<()> {
    let doc = legacy_saved_visualization("pie", "Share", json!({}));
    let desc = describe_saved_object(doc)?;
    assert!(desc.document()["attributes"]["visState"].is_object());
    assert!(desc.document()["attributes"]["uiStateJSON"].is_object());
    Ok(())
}

#[test]
fn malformed_search_source_fails() {
    let result = describe_saved_object(json!({
        "type": "visualization",
        "attributes": {
            "visState": "{\"type\":\"pie\"}",
            "kibanaSavedObjectMeta": { "searchSourceJSON": "{\"query\":" }
        }
    }));
    match result {
        Err(ContentError::Decode { path, .. }) => {
            assert_eq!(path.to_string(), "attributes.kibanaSavedObjectMeta.searchSourceJSON");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn unknown_saved_object_type() -> anyhow::Result<()> {
    let desc = describe_saved_object(json!({ "type": "dashboard", "attributes": {} }))?;
    assert!(matches!(desc.editor(), Err(ContentError::UnknownEditor(t)) if t == "dashboard"));
    assert_eq!(desc.saved_object_type().as_str(), "dashboard");
    assert!(!desc.is_legacy());
    Ok(())
}

#[test]
fn config_loaded_from_yaml_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    writeln!(file, "legacy:")?;
    writeln!(file, "  exempt_types: [markdown, vega]")?;
    writeln!(file, "  exempt_tsvb_types: [markdown]")?;

    let config = ClassifierConfig::from_path(file.path())?;
    assert_eq!(config.legacy, LegacyPolicy::without_input_control());

    let classifier = Classifier::new(config);
    let desc = classifier.describe_saved_object(json!({
        "type": "visualization",
        "attributes": { "visState": { "type": "input_control_vis" } }
    }))?;
    assert!(desc.is_legacy());
    Ok(())
}

#[test]
fn config_loaded_from_toml_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "panel_reference_marker = \"embeddable_\"")?;

    let config = ClassifierConfig::from_path(file.path())?;
    assert_eq!(config.panel_reference_marker, "embeddable_");
    assert_eq!(config.legacy, LegacyPolicy::current());
    Ok(())
}

#[test]
fn missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ClassifierConfig::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}
