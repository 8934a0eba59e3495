//! Tolerant traversal over nested values
//!
//! Every accessor degrades to `None` on a missing key, an out-of-range
//! index or a value of the wrong shape. Callers decide whether absence
//! matters.

use crate::path::DocPath;
use serde_json::{Map, Value};

/// Read access to a nested map/list structure by [`DocPath`]
pub trait NestedValue {
    /// Value at `path`, if every segment resolves
    fn lookup(&self, path: &DocPath) -> Option<&Value>;

    /// Mutable value at `path`, if every segment resolves
    fn lookup_mut(&mut self, path: &DocPath) -> Option<&mut Value>;

    /// Whether anything (including `null`) is present at `path`
    #[inline]
    fn has(&self, path: &DocPath) -> bool {
        self.lookup(path).is_some()
    }

    /// String at `path`; other shapes count as absent
    #[inline]
    fn get_str(&self, path: &DocPath) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// List at `path`; other shapes count as absent
    #[inline]
    fn get_list(&self, path: &DocPath) -> Option<&Vec<Value>> {
        self.lookup(path).and_then(Value::as_array)
    }

    /// Object at `path`; other shapes count as absent
    #[inline]
    fn get_object(&self, path: &DocPath) -> Option<&Map<String, Value>> {
        self.lookup(path).and_then(Value::as_object)
    }
}

impl NestedValue for Value {
    fn lookup(&self, path: &DocPath) -> Option<&Value> {
        let mut current = self;
        for segment in path.iter() {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    fn lookup_mut(&mut self, path: &DocPath) -> Option<&mut Value> {
        let mut current = self;
        for segment in path.iter() {
            current = match current {
                Value::Object(map) => map.get_mut(segment)?,
                Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}
