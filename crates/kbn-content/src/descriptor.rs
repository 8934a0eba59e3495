//! Visualization descriptors
//!
//! A [`Descriptor`] owns one inflated document and answers questions about
//! it. Derived values are computed on first use and cached; the document is
//! never touched after construction.

use crate::config::ClassifierConfig;
use crate::error::{ContentError, ContentResult};
use crate::fields::{TITLE, TSVB_TYPE, VIS_TYPE};
use crate::filters;
use crate::inflate::inflate;
use crate::kind::{Editor, Link, SavedObjectType};
use crate::rules;
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Normalized description of a saved visualization or by-value panel
#[derive(Debug, Clone)]
pub struct Descriptor {
    document: Value,
    saved_object_type: SavedObjectType,
    link: Link,
    config: Arc<ClassifierConfig>,
    /// Set only by [`Descriptor::build_lenient`]
    inflation_error: Option<ContentError>,
    vis_type: OnceCell<String>,
    tsvb_type: OnceCell<String>,
    title: OnceCell<String>,
}

impl Descriptor {
    /// Build with the default configuration
    ///
    /// # Errors
    /// Returns [`ContentError::Decode`] if a JSON-text field is malformed
    pub fn build(
        document: Value,
        saved_object_type: SavedObjectType,
        link: Link,
    ) -> ContentResult<Self> {
        Self::build_with(ClassifierConfig::shared_default(), document, saved_object_type, link)
    }

    /// Build with an explicit configuration
    ///
    /// # Errors
    /// Returns [`ContentError::Decode`] if a JSON-text field is malformed
    pub fn build_with(
        config: Arc<ClassifierConfig>,
        document: Value,
        saved_object_type: SavedObjectType,
        link: Link,
    ) -> ContentResult<Self> {
        let document = inflate(document)?;
        Ok(Self::assemble(config, document, saved_object_type, link, None))
    }

    /// Build even when inflation fails
    ///
    /// The raw document is kept. Type, title and editor still resolve from
    /// root-level fields; [`has_filters`](Self::has_filters) reports the
    /// recorded decode error.
    #[must_use]
    pub fn build_lenient(
        config: Arc<ClassifierConfig>,
        document: Value,
        saved_object_type: SavedObjectType,
        link: Link,
    ) -> Self {
        match inflate(document.clone()) {
            Ok(inflated) => Self::assemble(config, inflated, saved_object_type, link, None),
            Err(err) => {
                tracing::debug!(error = %err, "keeping raw document after failed inflation");
                Self::assemble(config, document, saved_object_type, link, Some(err))
            }
        }
    }

    fn assemble(
        config: Arc<ClassifierConfig>,
        document: Value,
        saved_object_type: SavedObjectType,
        link: Link,
        inflation_error: Option<ContentError>,
    ) -> Self {
        Self {
            document,
            saved_object_type,
            link,
            config,
            inflation_error,
            vis_type: OnceCell::new(),
            tsvb_type: OnceCell::new(),
            title: OnceCell::new(),
        }
    }

    /// The (inflated) source document
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Give back the source document
    #[must_use]
    pub fn into_document(self) -> Value {
        self.document
    }

    /// Declared saved object type
    #[inline]
    #[must_use]
    pub fn saved_object_type(&self) -> &SavedObjectType {
        &self.saved_object_type
    }

    /// Provenance of the document
    #[inline]
    #[must_use]
    pub fn link(&self) -> Link {
        self.link
    }

    /// Inflation failure recorded by [`build_lenient`](Self::build_lenient)
    #[inline]
    #[must_use]
    pub fn inflation_error(&self) -> Option<&ContentError> {
        self.inflation_error.as_ref()
    }

    /// Root visualization type, empty for non-visualization saved objects
    #[must_use]
    pub fn vis_type(&self) -> &str {
        self.vis_type.get_or_init(|| {
            if self.saved_object_type.is_visualization() {
                VIS_TYPE.resolve_str(&self.document)
            } else {
                String::new()
            }
        })
    }

    /// TSVB sub-type (gauge, markdown, ...), empty unless the type is TSVB
    #[must_use]
    pub fn tsvb_type(&self) -> &str {
        self.tsvb_type.get_or_init(|| {
            if rules::is_tsvb(self.vis_type()) {
                TSVB_TYPE.resolve_str(&self.document)
            } else {
                String::new()
            }
        })
    }

    /// TSVB sub-type for TSVB, otherwise the root type
    #[must_use]
    pub fn semantic_type(&self) -> &str {
        rules::semantic_type(self.vis_type(), self.tsvb_type())
    }

    /// Display title, empty for non-visualization saved objects
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.get_or_init(|| {
            if self.saved_object_type.is_visualization() {
                TITLE.resolve_str(&self.document)
            } else {
                String::new()
            }
        })
    }

    /// Authoring tool
    ///
    /// # Errors
    /// Returns [`ContentError::UnknownEditor`] for an unrecognised saved
    /// object type; other accessors are unaffected
    pub fn editor(&self) -> ContentResult<Editor> {
        rules::editor(&self.saved_object_type, self.vis_type())
    }

    /// Whether the visualization is legacy under the configured policy
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        rules::is_legacy(
            &self.config.legacy,
            &self.saved_object_type,
            self.vis_type(),
            self.tsvb_type(),
        )
    }

    /// Whether a query or filter can be applied to the visualization
    #[must_use]
    pub fn can_use_filter(&self) -> bool {
        rules::can_use_filter(&self.saved_object_type, self.vis_type())
    }

    /// Whether the document carries a non-empty query or filter
    ///
    /// # Errors
    /// Returns the decode error recorded when inflation failed
    pub fn has_filters(&self) -> ContentResult<bool> {
        match &self.inflation_error {
            Some(err) => Err(err.clone()),
            None => Ok(filters::has_filters(&self.document)),
        }
    }

    /// Every derived field in one serializable value
    #[must_use]
    pub fn summary(&self) -> VisualizationSummary {
        VisualizationSummary {
            saved_object_type: self.saved_object_type.clone(),
            link: self.link,
            vis_type: self.vis_type().to_string(),
            tsvb_type: self.tsvb_type().to_string(),
            semantic_type: self.semantic_type().to_string(),
            editor: self.editor().ok(),
            title: self.title().to_string(),
            is_legacy: self.is_legacy(),
            can_use_filter: self.can_use_filter(),
            has_filters: self.has_filters().ok(),
        }
    }
}

/// Snapshot of a descriptor for reporting
///
/// Partial fields are `None` where the descriptor reported an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualizationSummary {
    /// Declared saved object type
    pub saved_object_type: SavedObjectType,
    /// Provenance
    pub link: Link,
    /// Root visualization type
    #[serde(rename = "type")]
    pub vis_type: String,
    /// TSVB sub-type
    pub tsvb_type: String,
    /// TSVB sub-type or root type
    pub semantic_type: String,
    /// Authoring tool, if known
    pub editor: Option<Editor>,
    /// Display title
    pub title: String,
    /// Legacy under the configured policy
    pub is_legacy: bool,
    /// Query or filter can be applied
    pub can_use_filter: bool,
    /// Query or filter present, unknown if inflation failed
    pub has_filters: Option<bool>,
}
