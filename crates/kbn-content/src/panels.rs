//! By-value dashboard panels
//!
//! A dashboard keeps its panels at `attributes.panelsJSON`, either as JSON
//! text or as an already-parsed list. Panels without a `type` point at a
//! separate saved object and are skipped here.

use crate::config::ClassifierConfig;
use crate::descriptor::Descriptor;
use crate::error::{ContentError, ContentResult};
use crate::fields::{EMBEDDED_ATTRIBUTES, PANELS, SAVED_VIS, TYPE};
use crate::kind::{Link, SavedObjectType};
use kbn_path::{DocPath, NestedValue};
use serde_json::Value;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Lazily built descriptors for a dashboard's by-value panels
///
/// Yields in panel order. Each panel is described when reached, so a
/// malformed panel surfaces as an `Err` item without stopping the rest.
#[derive(Debug)]
pub struct ByValuePanels {
    panels: std::vec::IntoIter<Value>,
    config: Arc<ClassifierConfig>,
    index: usize,
}

impl ByValuePanels {
    /// Read the panel list of `dashboard`
    ///
    /// # Errors
    /// Returns [`ContentError::UnexpectedShape`] if the panel list is missing
    /// or neither text nor a list, and [`ContentError::Decode`] if the text
    /// is not a JSON list
    pub fn new(config: Arc<ClassifierConfig>, dashboard: &Value) -> ContentResult<Self> {
        let panels = panel_list(dashboard)?;
        tracing::debug!(panels = panels.len(), "collecting by-value panels");
        Ok(Self {
            panels: panels.into_iter(),
            config,
            index: 0,
        })
    }
}

impl Iterator for ByValuePanels {
    type Item = ContentResult<Descriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        for panel in self.panels.by_ref() {
            let index = self.index;
            self.index += 1;
            if let Some(saved_object_type) = by_value_type(&panel, index) {
                return Some(Descriptor::build_with(
                    Arc::clone(&self.config),
                    panel,
                    saved_object_type,
                    Link::ByValue,
                ));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.panels.size_hint().1)
    }
}

impl FusedIterator for ByValuePanels {}

fn panel_list(dashboard: &Value) -> ContentResult<Vec<Value>> {
    match dashboard.lookup(&PANELS) {
        Some(Value::String(text)) => {
            serde_json::from_str(text)
                .map_err(|e| ContentError::decode(DocPath::clone(&PANELS), e))
        }
        Some(Value::Array(panels)) => Ok(panels.clone()),
        _ => Err(ContentError::unexpected_shape(
            DocPath::clone(&PANELS),
            "a panel list or its JSON text",
        )),
    }
}

/// Saved object type of a by-value panel worth describing
fn by_value_type(panel: &Value, index: usize) -> Option<SavedObjectType> {
    let Some(panel_type) = panel.get_str(&TYPE) else {
        tracing::trace!(index, "skipping by-reference panel");
        return None;
    };

    // TODO: confirm with the dashboards team why the embedded-definition
    // checks are needed before relaxing them.
    let saved_object_type = SavedObjectType::from(panel_type);
    let embedded = match saved_object_type {
        SavedObjectType::Visualization => panel.has(&SAVED_VIS),
        SavedObjectType::Lens | SavedObjectType::Map => panel.has(&EMBEDDED_ATTRIBUTES),
        _ => {
            tracing::debug!(index, panel_type, "skipping unsupported by-value panel type");
            return None;
        }
    };

    if embedded {
        Some(saved_object_type)
    } else {
        tracing::debug!(index, panel_type, "skipping panel without embedded definition");
        None
    }
}
