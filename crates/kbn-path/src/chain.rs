//! Ordered candidate paths
//!
//! A [`PathChain`] lists the places a logical field has lived across schema
//! generations, most recent first. Adding a generation means adding a path.

use crate::nested::NestedValue;
use crate::path::{DocPath, PathError};
use serde_json::Value;

/// Ordered list of candidate paths for one logical field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathChain {
    candidates: Vec<DocPath>,
}

impl PathChain {
    /// Create chain from already-built paths, in precedence order
    #[inline]
    #[must_use]
    pub fn new(candidates: Vec<DocPath>) -> Self {
        Self { candidates }
    }

    /// Create chain from dotted paths without validation
    #[must_use]
    pub fn dotted(candidates: &[&str]) -> Self {
        Self::new(candidates.iter().map(|p| DocPath::dotted(p)).collect())
    }

    /// Create chain from dotted paths, validating each segment
    ///
    /// # Errors
    /// Returns the first [`PathError`] encountered
    pub fn parse(candidates: &[&str]) -> Result<Self, PathError> {
        let candidates = candidates
            .iter()
            .map(|p| p.parse::<DocPath>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(candidates))
    }

    /// Append a lower-precedence candidate
    #[must_use]
    pub fn or(mut self, path: DocPath) -> Self {
        self.candidates.push(path);
        self
    }

    /// Candidate paths in precedence order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[DocPath] {
        &self.candidates
    }

    /// First candidate holding a string
    ///
    /// A present value of another shape is skipped, not an error.
    #[must_use]
    pub fn first_str<'a, V: NestedValue + ?Sized>(&self, doc: &'a V) -> Option<&'a str> {
        self.candidates.iter().find_map(|path| doc.get_str(path))
    }

    /// Like [`first_str`](Self::first_str), empty when no candidate matches
    #[must_use]
    pub fn resolve_str<V: NestedValue + ?Sized>(&self, doc: &V) -> String {
        self.first_str(doc).unwrap_or_default().to_string()
    }

    /// First candidate present at all, with the path that matched
    #[must_use]
    pub fn first_present<'a, V: NestedValue + ?Sized>(
        &self,
        doc: &'a V,
    ) -> Option<(&DocPath, &'a Value)> {
        self.candidates
            .iter()
            .find_map(|path| doc.lookup(path).map(|value| (path, value)))
    }

    /// Whether any candidate holds a string satisfying `pred`
    #[must_use]
    pub fn any_str<V, F>(&self, doc: &V, mut pred: F) -> bool
    where
        V: NestedValue + ?Sized,
        F: FnMut(&str) -> bool,
    {
        self.candidates
            .iter()
            .filter_map(|path| doc.get_str(path))
            .any(|s| pred(s))
    }

    /// Whether any candidate holds a list satisfying `pred`
    #[must_use]
    pub fn any_list<V, F>(&self, doc: &V, mut pred: F) -> bool
    where
        V: NestedValue + ?Sized,
        F: FnMut(&[Value]) -> bool,
    {
        self.candidates
            .iter()
            .filter_map(|path| doc.get_list(path))
            .any(|items| pred(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn type_chain() -> PathChain {
        PathChain::dotted(&[
            "attributes.type",
            "attributes.visState.type",
            "embeddableConfig.savedVis.type",
        ])
    }

    #[test]
    fn first_candidate_wins() {
        let doc = json!({
            "attributes": { "type": "current", "visState": { "type": "legacy" } }
        });
        assert_eq!(type_chain().first_str(&doc), Some("current"));
    }

    #[test]
    fn falls_back_in_order() {
        let doc = json!({ "attributes": { "visState": { "type": "legacy" } } });
        assert_eq!(type_chain().first_str(&doc), Some("legacy"));

        let panel = json!({ "embeddableConfig": { "savedVis": { "type": "pie" } } });
        assert_eq!(type_chain().first_str(&panel), Some("pie"));
    }

    #[test]
    fn non_string_is_skipped() {
        let doc = json!({
            "attributes": { "type": { "nested": true }, "visState": { "type": "table" } }
        });
        assert_eq!(type_chain().first_str(&doc), Some("table"));
    }

    #[test]
    fn total_absence_is_empty() {
        let doc = json!({ "attributes": {} });
        assert_eq!(type_chain().first_str(&doc), None);
        assert_eq!(type_chain().resolve_str(&doc), "");
    }

    #[test]
    fn first_present_reports_path() {
        let doc = json!({ "attributes": { "visState": { "type": 7 } } });
        let chain = type_chain();
        let (path, value) = chain.first_present(&doc).unwrap();
        assert_eq!(path.to_string(), "attributes.visState.type");
        assert_eq!(value, &json!(7));
    }

    #[test]
    fn any_list_is_a_union() {
        let chain = PathChain::dotted(&["a.filters", "b.filters"]);
        let doc = json!({ "a": { "filters": [] }, "b": { "filters": [1] } });
        assert!(chain.any_list(&doc, |items| !items.is_empty()));
        assert!(!chain.any_str(&doc, |_| true));
    }

    #[test]
    fn parse_rejects_bad_segment() {
        assert!(PathChain::parse(&["ok.path", "bad..path"]).is_err());
        assert_eq!(PathChain::parse(&["a", "b.c"]).unwrap().candidates().len(), 2);
    }

    #[test]
    fn or_appends_lowest_precedence() {
        let chain = PathChain::dotted(&["title"]).or(DocPath::dotted("attributes.title"));
        let doc = json!({ "title": "top", "attributes": { "title": "nested" } });
        assert_eq!(chain.first_str(&doc), Some("top"));
        assert_eq!(chain.candidates().len(), 2);
    }
}
