//! Query and filter detection
//!
//! Runs on an inflated document. Query and filter locations are checked as a
//! union: a match at any known location is enough.

use crate::fields::{FILTERS, QUERY};
use serde_json::Value;

/// Whether any known query string is non-empty
#[must_use]
pub fn has_query(doc: &Value) -> bool {
    QUERY.any_str(doc, |query| !query.is_empty())
}

/// Whether any known filter list is non-empty
#[must_use]
pub fn has_filter_list(doc: &Value) -> bool {
    FILTERS.any_list(doc, |filters| !filters.is_empty())
}

/// Whether the document carries a user-defined query or filter
#[must_use]
pub fn has_filters(doc: &Value) -> bool {
    has_query(doc) || has_filter_list(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document() {
        assert!(!has_filters(&json!({})));
    }

    #[test]
    fn saved_object_query() {
        let doc = json!({
            "attributes": { "kibanaSavedObjectMeta": { "searchSourceJSON": {
                "query": { "query": "host:web-1", "language": "kuery" },
                "filter": []
            } } }
        });
        assert!(has_query(&doc));
        assert!(!has_filter_list(&doc));
        assert!(has_filters(&doc));
    }

    #[test]
    fn empty_query_and_filters() {
        let doc = json!({
            "attributes": { "state": { "query": { "query": "" }, "filters": [] } }
        });
        assert!(!has_filters(&doc));
    }

    #[test]
    fn lens_state_filters() {
        let doc = json!({
            "attributes": { "state": { "filters": [ { "meta": { "key": "agent" } } ] } }
        });
        assert!(has_filters(&doc));
    }

    #[test]
    fn by_value_search_source() {
        let doc = json!({
            "embeddableConfig": { "savedVis": { "data": { "searchSource": {
                "filter": [ { "query": { "match_phrase": { "geo.dest": "US" } } } ]
            } } } }
        });
        assert!(has_filters(&doc));
    }

    #[test]
    fn later_location_still_counts() {
        let doc = json!({
            "attributes": { "state": { "query": { "query": "" } } },
            "embeddableConfig": { "attributes": { "state": { "query": { "query": "bytes > 0" } } } }
        });
        assert!(has_query(&doc));
    }

    #[test]
    fn non_string_query_is_ignored() {
        let doc = json!({
            "attributes": { "state": { "query": { "query": { "bool": {} } } } }
        });
        assert!(!has_filters(&doc));
    }
}
