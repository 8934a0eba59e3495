//! Classification rules
//!
//! Pure mappings from (saved object type, root type, TSVB sub-type) to the
//! derived fields of a descriptor. Missing data takes the "no" branch; only
//! an unknown saved object type is an error, and only for [`editor`].

use crate::config::LegacyPolicy;
use crate::error::{ContentError, ContentResult};
use crate::kind::{Editor, SavedObjectType};

/// Root type shared by every TSVB visualization
pub const TSVB_VIS_TYPE: &str = "metrics";

/// Root type of markdown visualizations, which issue no queries
pub const MARKDOWN_VIS_TYPE: &str = "markdown";

/// Check if a root visualization type is TSVB
#[inline]
#[must_use]
pub fn is_tsvb(vis_type: &str) -> bool {
    vis_type == TSVB_VIS_TYPE
}

/// Editor-agnostic kind: the TSVB sub-type for TSVB, else the root type
#[inline]
#[must_use]
pub fn semantic_type<'a>(vis_type: &'a str, tsvb_type: &'a str) -> &'a str {
    if is_tsvb(vis_type) {
        tsvb_type
    } else {
        vis_type
    }
}

/// Authoring tool for a saved object
///
/// # Errors
/// Returns [`ContentError::UnknownEditor`] for a saved object type outside
/// visualization, lens, map and search
pub fn editor(saved_object_type: &SavedObjectType, vis_type: &str) -> ContentResult<Editor> {
    match saved_object_type {
        SavedObjectType::Lens => Ok(Editor::Lens),
        SavedObjectType::Map => Ok(Editor::Maps),
        SavedObjectType::Search => Ok(Editor::Discover),
        SavedObjectType::Visualization => Ok(match vis_type {
            TSVB_VIS_TYPE => Editor::Tsvb,
            "vega" => Editor::Vega,
            "timelion" => Editor::Timelion,
            _ => Editor::AggsBased,
        }),
        SavedObjectType::Other(other) => Err(ContentError::UnknownEditor(other.clone())),
    }
}

/// Whether a visualization is slated for removal
///
/// Only `visualization` saved objects can be legacy. TSVB is judged by its
/// sub-type, everything else by its root type.
#[must_use]
pub fn is_legacy(
    policy: &LegacyPolicy,
    saved_object_type: &SavedObjectType,
    vis_type: &str,
    tsvb_type: &str,
) -> bool {
    if !saved_object_type.is_visualization() {
        return false;
    }
    if is_tsvb(vis_type) {
        !policy.is_exempt_tsvb_type(tsvb_type)
    } else {
        !policy.is_exempt_type(vis_type)
    }
}

/// Whether a query or filter can be applied to the visualization
#[must_use]
pub fn can_use_filter(saved_object_type: &SavedObjectType, vis_type: &str) -> bool {
    match saved_object_type {
        SavedObjectType::Search => false,
        SavedObjectType::Visualization => vis_type != MARKDOWN_VIS_TYPE,
        _ => true,
    }
}
