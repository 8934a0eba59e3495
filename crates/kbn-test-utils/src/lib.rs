//! Testing utilities for the kbn workspace
//!
//! Shared panel/dashboard builders and fixtures.

#![allow(missing_docs)]

use serde_json::{json, Value};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Raw dashboard export with fifteen by-value and two by-reference panels
pub const DASHBOARD_FIXTURE: &str = include_str!("../testdata/dashboard.json");

/// How a dashboard stores its panel list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEncoding {
    /// `panelsJSON` holds JSON text (saved object export)
    JsonText,
    /// `panelsJSON` holds the list itself
    List,
}

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn dashboard_fixture() -> Value {
    serde_json::from_str(DASHBOARD_FIXTURE).unwrap()
}

pub fn vis_panel(vis_type: &str, title: Option<&str>) -> Value {
    let mut saved_vis = json!({
        "type": vis_type,
        "params": {},
        "data": { "searchSource": {} }
    });
    if let Some(title) = title {
        saved_vis["title"] = json!(title);
    }
    json!({
        "type": "visualization",
        "embeddableConfig": { "savedVis": saved_vis }
    })
}

pub fn tsvb_panel(tsvb_type: &str, title: Option<&str>) -> Value {
    let mut panel = vis_panel("metrics", title);
    panel["embeddableConfig"]["savedVis"]["params"]["type"] = json!(tsvb_type);
    panel
}

pub fn lens_panel() -> Value {
    json!({
        "type": "lens",
        "embeddableConfig": { "attributes": {
            "visualizationType": "lnsXY",
            "state": { "query": { "query": "", "language": "kuery" }, "filters": [] }
        } }
    })
}

pub fn map_panel() -> Value {
    json!({
        "type": "map",
        "embeddableConfig": { "attributes": { "layerListJSON": "[]" } }
    })
}

pub fn by_reference_panel(index: usize) -> Value {
    json!({
        "panelIndex": format!("ref-{index}"),
        "panelRefName": format!("panel_{index}"),
        "embeddableConfig": {}
    })
}

/// Attach a by-value search source with the given query and filters
pub fn with_search_source(mut panel: Value, query: &str, filters: Vec<Value>) -> Value {
    panel["embeddableConfig"]["savedVis"]["data"]["searchSource"] = json!({
        "query": { "query": query, "language": "kuery" },
        "filter": filters
    });
    panel
}

pub fn dashboard_with_panels(panels: Vec<Value>, encoding: PanelEncoding) -> Value {
    let panels = Value::Array(panels);
    let panels = match encoding {
        PanelEncoding::JsonText => Value::String(panels.to_string()),
        PanelEncoding::List => panels,
    };
    json!({
        "type": "dashboard",
        "attributes": { "title": "Test dashboard", "panelsJSON": panels },
        "references": []
    })
}

/// Saved visualization in the pre-8.x layout, `visState` stored as text
pub fn legacy_saved_visualization(vis_type: &str, title: &str, params: Value) -> Value {
    let vis_state = json!({ "title": title, "type": vis_type, "params": params });
    json!({
        "type": "visualization",
        "id": format!("{vis_type}-vis"),
        "attributes": {
            "title": title,
            "visState": vis_state.to_string(),
            "uiStateJSON": "{}",
            "kibanaSavedObjectMeta": {
                "searchSourceJSON": "{\"query\":{\"query\":\"\",\"language\":\"kuery\"},\"filter\":[]}"
            }
        }
    })
}
