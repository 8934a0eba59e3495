//! Error types for content classification
//!
//! Provides error handling for:
//! - Malformed JSON text inside a document (decode)
//! - Documents or dashboards missing a required field
//! - Saved object types with no known editor
//! - Classifier configuration loading

use kbn_path::DocPath;
use std::path::PathBuf;
use std::sync::Arc;

/// Errors raised while describing a document or dashboard
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    /// A field expected to hold JSON text is malformed
    #[error("invalid JSON in '{path}': {source}")]
    Decode {
        /// Field holding the text
        path: DocPath,
        /// Underlying parse error
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// Top-level `type` is absent or not a string
    #[error("document has no string 'type' field")]
    MissingType,

    /// A required field is absent or of the wrong kind
    #[error("unexpected shape at '{path}': expected {expected}")]
    UnexpectedShape {
        /// Offending field
        path: DocPath,
        /// What the field should have held
        expected: &'static str,
    },

    /// Saved object type outside the known set
    #[error("no editor known for saved object type '{0}'")]
    UnknownEditor(String),
}

impl ContentError {
    /// Create decode error for the field at `path`
    pub fn decode(path: DocPath, source: serde_json::Error) -> Self {
        Self::Decode {
            path,
            source: Arc::new(source),
        }
    }

    /// Create shape error for the field at `path`
    pub fn unexpected_shape(path: DocPath, expected: &'static str) -> Self {
        Self::UnexpectedShape { path, expected }
    }

    /// Check if error came from malformed JSON text
    #[inline]
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Errors while loading a classifier configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse error
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// YAML parse error
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// TOML parse error
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// IO error during config read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// File extension has no known format
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for classification operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_field() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ContentError::decode(DocPath::dotted("attributes.visState"), source);
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("invalid JSON in 'attributes.visState'"));
    }

    #[test]
    fn shape_error_display() {
        let err = ContentError::unexpected_shape(DocPath::dotted("references"), "a list");
        assert_eq!(err.to_string(), "unexpected shape at 'references': expected a list");
    }

    #[test]
    fn unknown_editor_display() {
        let err = ContentError::UnknownEditor("canvas-workpad".to_string());
        assert_eq!(
            err.to_string(),
            "no editor known for saved object type 'canvas-workpad'"
        );
    }

    #[test]
    fn decode_error_is_cloneable() {
        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = ContentError::decode(DocPath::dotted("attributes.uiStateJSON"), source);
        let copy = err.clone();
        assert_eq!(err.to_string(), copy.to_string());
    }

    #[test]
    fn config_error_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }
}
