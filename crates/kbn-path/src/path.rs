//! Dotted document paths
//!
//! Provides [`DocPath`] for addressing a field inside a nested document.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Path to a field inside a nested document
///
/// Each segment is an object key, or an array index when it is purely
/// numeric.
///
/// # Examples
/// - `["attributes", "visState", "type"]` → `attributes.visState.type`
/// - `["references", "0", "id"]` → `references.0.id`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocPath(Vec<String>);

impl DocPath {
    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Split dotted text into a path without validating segments
    ///
    /// Malformed input never fails here; a path with an empty segment simply
    /// never matches anything.
    #[must_use]
    pub fn dotted(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self(path.split('.').map(str::to_string).collect())
    }

    /// Empty path (the document itself)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is empty (root)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get parent path (if not root)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Get last segment (if not root)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for DocPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for DocPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let segments: Vec<String> = s
            .split('.')
            .map(|seg| {
                if seg.is_empty() {
                    Err(PathError::EmptySegment)
                } else if seg.contains(|c: char| !c.is_alphanumeric() && c != '_' && c != '$') {
                    Err(PathError::InvalidSegment(seg.to_string()))
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(segments))
    }
}

impl From<Vec<String>> for DocPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl Default for DocPath {
    fn default() -> Self {
        Self::root()
    }
}

/// Errors related to document paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Empty segment in path
    #[error("path contains empty segment")]
    EmptySegment,

    /// Invalid segment characters
    #[error("invalid segment: {0} (must be alphanumeric, '_' or '$')")]
    InvalidSegment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_splits_segments() {
        let path = DocPath::dotted("attributes.visState.type");
        assert_eq!(path.segments(), &["attributes", "visState", "type"]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn dotted_empty_is_root() {
        assert!(DocPath::dotted("").is_empty());
    }

    #[test]
    fn dotted_keeps_empty_segments() {
        let path = DocPath::dotted("a..b");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn parent_and_last() {
        let path = DocPath::dotted("attributes.kibanaSavedObjectMeta.searchSourceJSON");
        assert_eq!(path.last(), Some("searchSourceJSON"));
        assert_eq!(
            path.parent().unwrap().to_string(),
            "attributes.kibanaSavedObjectMeta"
        );
        assert!(DocPath::root().parent().is_none());
    }

    #[test]
    fn child_appends() {
        let path = DocPath::dotted("embeddableConfig").child("savedVis");
        assert_eq!(path.to_string(), "embeddableConfig.savedVis");
    }

    #[test]
    fn from_str_valid() {
        let path: DocPath = "attributes.panelsJSON".parse().unwrap();
        assert_eq!(path.segments(), &["attributes", "panelsJSON"]);
    }

    #[test]
    fn from_str_accepts_index_and_dollar() {
        let path: DocPath = "references.0.$state".parse().unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn from_str_empty_segment() {
        let result: Result<DocPath, _> = "a..b".parse();
        assert_eq!(result, Err(PathError::EmptySegment));
    }

    #[test]
    fn from_str_invalid_chars() {
        let result: Result<DocPath, _> = "a.b-c".parse();
        assert!(matches!(result, Err(PathError::InvalidSegment(_))));
    }

    #[test]
    fn iter_collects() {
        let path = DocPath::dotted("a.b");
        let collected: Vec<_> = path.iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }
}
