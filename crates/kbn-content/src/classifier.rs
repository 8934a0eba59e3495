//! Classification entry points
//!
//! [`Classifier`] binds a configuration to the descriptor builder, panel
//! collector and reference extractor. The free functions use the default
//! configuration.

use crate::config::ClassifierConfig;
use crate::descriptor::Descriptor;
use crate::error::{ContentError, ContentResult};
use crate::fields::TYPE;
use crate::kind::{Link, SavedObjectType};
use crate::panels::ByValuePanels;
use crate::references;
use kbn_path::NestedValue;
use serde_json::Value;
use std::sync::Arc;

/// Describes saved objects and dashboards under one configuration
#[derive(Debug, Clone)]
pub struct Classifier {
    config: Arc<ClassifierConfig>,
}

impl Classifier {
    /// Create classifier with its own configuration
    #[inline]
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create classifier sharing an existing configuration
    #[inline]
    #[must_use]
    pub fn with_shared(config: Arc<ClassifierConfig>) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Describe a document whose saved object type is already known
    ///
    /// # Errors
    /// Returns [`ContentError::Decode`] if a JSON-text field is malformed
    pub fn describe(
        &self,
        document: Value,
        saved_object_type: SavedObjectType,
        link: Link,
    ) -> ContentResult<Descriptor> {
        Descriptor::build_with(Arc::clone(&self.config), document, saved_object_type, link)
    }

    /// Describe a standalone saved object, reading its own `type`
    ///
    /// # Errors
    /// Returns [`ContentError::MissingType`] if `type` is absent or not a
    /// string, and [`ContentError::Decode`] if a JSON-text field is malformed
    pub fn describe_saved_object(&self, document: Value) -> ContentResult<Descriptor> {
        let saved_object_type = document
            .get_str(&TYPE)
            .map(SavedObjectType::from)
            .ok_or(ContentError::MissingType)?;
        tracing::debug!(saved_object_type = %saved_object_type, "describing saved object");
        self.describe(document, saved_object_type, Link::ByReference)
    }

    /// Descriptors for the dashboard's by-value panels, built lazily
    ///
    /// # Errors
    /// Returns an error if the panel list is missing or malformed
    pub fn collect_by_value_panels(&self, dashboard: &Value) -> ContentResult<ByValuePanels> {
        ByValuePanels::new(Arc::clone(&self.config), dashboard)
    }

    /// Ids of the dashboard's by-reference panels
    ///
    /// # Errors
    /// Returns [`ContentError::UnexpectedShape`] if the reference list is
    /// missing or malformed
    pub fn by_reference_panel_ids(&self, dashboard: &Value) -> ContentResult<Vec<String>> {
        references::by_reference_panel_ids(dashboard, &self.config.panel_reference_marker)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_shared(ClassifierConfig::shared_default())
    }
}

/// Describe a standalone saved object with the default configuration
///
/// # Errors
/// See [`Classifier::describe_saved_object`]
pub fn describe_saved_object(document: Value) -> ContentResult<Descriptor> {
    Classifier::default().describe_saved_object(document)
}

/// Collect by-value panel descriptors with the default configuration
///
/// # Errors
/// See [`Classifier::collect_by_value_panels`]
pub fn collect_by_value_panels(dashboard: &Value) -> ContentResult<ByValuePanels> {
    Classifier::default().collect_by_value_panels(dashboard)
}

/// By-reference panel ids with the default configuration
///
/// # Errors
/// See [`Classifier::by_reference_panel_ids`]
pub fn by_reference_panel_ids(dashboard: &Value) -> ContentResult<Vec<String>> {
    Classifier::default().by_reference_panel_ids(dashboard)
}
