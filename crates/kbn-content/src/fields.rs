//! Known document locations
//!
//! Each chain lists the current schema first, then older saved-object
//! layouts, then the by-value dashboard panel layout.

use kbn_path::{DocPath, PathChain};
use once_cell::sync::Lazy;

pub(crate) static TYPE: Lazy<DocPath> = Lazy::new(|| DocPath::dotted("type"));

pub(crate) static VIS_TYPE: Lazy<PathChain> = Lazy::new(|| {
    PathChain::dotted(&[
        "attributes.type",
        "attributes.visState.type",
        "embeddableConfig.savedVis.type",
    ])
});

pub(crate) static TSVB_TYPE: Lazy<PathChain> = Lazy::new(|| {
    PathChain::dotted(&[
        "attributes.visState.params.type",
        "embeddableConfig.savedVis.params.type",
    ])
});

pub(crate) static TITLE: Lazy<PathChain> = Lazy::new(|| {
    PathChain::dotted(&["attributes.title", "title", "embeddableConfig.savedVis.title"])
});

/// Query strings; any non-empty one counts
pub(crate) static QUERY: Lazy<PathChain> = Lazy::new(|| {
    PathChain::dotted(&[
        "attributes.kibanaSavedObjectMeta.searchSourceJSON.query.query",
        "attributes.state.query.query",
        "embeddableConfig.savedVis.data.searchSource.query.query",
        "embeddableConfig.attributes.state.query.query",
    ])
});

/// Filter lists; any non-empty one counts
pub(crate) static FILTERS: Lazy<PathChain> = Lazy::new(|| {
    PathChain::dotted(&[
        "attributes.kibanaSavedObjectMeta.searchSourceJSON.filter",
        "attributes.state.filters",
        "embeddableConfig.savedVis.data.searchSource.filter",
        "embeddableConfig.attributes.state.filters",
    ])
});

/// Fields that may hold their structure as JSON text
pub(crate) static JSON_TEXT_FIELDS: Lazy<[DocPath; 3]> = Lazy::new(|| {
    [
        DocPath::dotted("attributes.kibanaSavedObjectMeta.searchSourceJSON"),
        DocPath::dotted("attributes.visState"),
        DocPath::dotted("attributes.uiStateJSON"),
    ]
});

pub(crate) static PANELS: Lazy<DocPath> = Lazy::new(|| DocPath::dotted("attributes.panelsJSON"));
pub(crate) static SAVED_VIS: Lazy<DocPath> =
    Lazy::new(|| DocPath::dotted("embeddableConfig.savedVis"));
pub(crate) static EMBEDDED_ATTRIBUTES: Lazy<DocPath> =
    Lazy::new(|| DocPath::dotted("embeddableConfig.attributes"));

pub(crate) static REFERENCES: Lazy<DocPath> = Lazy::new(|| DocPath::dotted("references"));
pub(crate) static DASHBOARD_TITLE: Lazy<DocPath> =
    Lazy::new(|| DocPath::dotted("attributes.title"));
