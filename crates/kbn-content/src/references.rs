//! Dashboard references and title

use crate::error::{ContentError, ContentResult};
use crate::fields::{DASHBOARD_TITLE, REFERENCES};
use kbn_path::{DocPath, NestedValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entry of a dashboard's reference list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Id of the referenced saved object
    pub id: String,
    /// Saved object type of the target
    #[serde(rename = "type")]
    pub ref_type: String,
    /// Reference name, e.g. `panel_0`
    pub name: String,
}

/// Decode the dashboard's reference list
///
/// # Errors
/// Returns [`ContentError::UnexpectedShape`] if `references` is missing or
/// not a list, or an entry is not an `{id, type, name}` object
pub fn references(dashboard: &Value) -> ContentResult<Vec<Reference>> {
    let entries = dashboard.get_list(&REFERENCES).ok_or_else(|| {
        ContentError::unexpected_shape(DocPath::clone(&REFERENCES), "a reference list")
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Reference::deserialize(entry).map_err(|_| {
                ContentError::unexpected_shape(
                    REFERENCES.child(index.to_string()),
                    "an {id, type, name} reference",
                )
            })
        })
        .collect()
}

/// Ids of references whose name contains `marker`, in list order
///
/// # Errors
/// Same as [`references`]
pub fn by_reference_panel_ids(dashboard: &Value, marker: &str) -> ContentResult<Vec<String>> {
    let ids: Vec<String> = references(dashboard)?
        .into_iter()
        .filter(|reference| reference.name.contains(marker))
        .map(|reference| reference.id)
        .collect();
    tracing::debug!(panels = ids.len(), marker, "found by-reference panels");
    Ok(ids)
}

/// Dashboard title, empty when absent
#[must_use]
pub fn dashboard_title(dashboard: &Value) -> String {
    dashboard
        .get_str(&DASHBOARD_TITLE)
        .unwrap_or_default()
        .to_string()
}
