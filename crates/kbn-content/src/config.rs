//! Classifier configuration
//!
//! Policy knobs that are product decisions rather than facts about the
//! documents: which visualization types are exempt from the legacy flag, and
//! how by-reference panels are recognised in a dashboard's reference list.

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

static DEFAULT_CONFIG: Lazy<Arc<ClassifierConfig>> =
    Lazy::new(|| Arc::new(ClassifierConfig::default()));

/// Which visualization types are exempt from the legacy flag
///
/// Only applies to `visualization` saved objects. TSVB (`metrics`) documents
/// are judged by their sub-type against `exempt_tsvb_types`; every other
/// root type is judged against `exempt_types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyPolicy {
    /// Root visualization types that are not legacy
    pub exempt_types: BTreeSet<String>,
    /// TSVB sub-types that are not legacy
    pub exempt_tsvb_types: BTreeSet<String>,
}

impl LegacyPolicy {
    /// Markdown, Vega and input controls are exempt
    #[must_use]
    pub fn current() -> Self {
        Self {
            exempt_types: ["markdown", "vega", "input_control_vis"]
                .into_iter()
                .map(String::from)
                .collect(),
            exempt_tsvb_types: std::iter::once("markdown".to_string()).collect(),
        }
    }

    /// Older policy where input controls still count as legacy
    #[must_use]
    pub fn without_input_control() -> Self {
        let mut policy = Self::current();
        policy.exempt_types.remove("input_control_vis");
        policy
    }

    /// Add a root type to the exemption set
    #[must_use]
    pub fn with_exempt_type(mut self, vis_type: impl Into<String>) -> Self {
        self.exempt_types.insert(vis_type.into());
        self
    }

    /// Add a TSVB sub-type to the exemption set
    #[must_use]
    pub fn with_exempt_tsvb_type(mut self, tsvb_type: impl Into<String>) -> Self {
        self.exempt_tsvb_types.insert(tsvb_type.into());
        self
    }

    /// Check if a root type is exempt
    #[inline]
    #[must_use]
    pub fn is_exempt_type(&self, vis_type: &str) -> bool {
        self.exempt_types.contains(vis_type)
    }

    /// Check if a TSVB sub-type is exempt
    #[inline]
    #[must_use]
    pub fn is_exempt_tsvb_type(&self, tsvb_type: &str) -> bool {
        self.exempt_tsvb_types.contains(tsvb_type)
    }
}

impl Default for LegacyPolicy {
    fn default() -> Self {
        Self::current()
    }
}

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Legacy exemption policy
    pub legacy: LegacyPolicy,
    /// Substring that marks a dashboard reference as a panel
    pub panel_reference_marker: String,
}

impl ClassifierConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the default configuration
    #[must_use]
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&*DEFAULT_CONFIG)
    }

    /// With legacy policy
    #[inline]
    #[must_use]
    pub fn with_legacy_policy(mut self, policy: LegacyPolicy) -> Self {
        self.legacy = policy;
        self
    }

    /// With panel reference marker
    #[inline]
    #[must_use]
    pub fn with_panel_reference_marker(mut self, marker: impl Into<String>) -> Self {
        self.panel_reference_marker = marker.into();
        self
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a `.json`, `.yaml`/`.yml` or `.toml` file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, has an unknown extension,
    /// or does not parse
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let parse: fn(&str) -> Result<Self, ConfigError> =
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => Self::from_json,
                Some("yaml" | "yml") => Self::from_yaml,
                Some("toml") => Self::from_toml,
                _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
            };
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = parse(&text)?;
        tracing::debug!(path = %path.display(), "loaded classifier config");
        Ok(config)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            legacy: LegacyPolicy::current(),
            panel_reference_marker: "panel_".to_string(),
        }
    }
}
