//! Sub-document inflation
//!
//! Older saved objects store some nested structures as JSON text. Inflation
//! parses those fields so path lookups can see inside them.

use crate::error::{ContentError, ContentResult};
use crate::fields::JSON_TEXT_FIELDS;
use kbn_path::{DocPath, NestedValue};
use serde_json::Value;

/// Parse every known JSON-text field of `doc` into its structure
///
/// Already-structured fields are left alone, so inflating twice is the same
/// as inflating once. The document is consumed: on failure nothing of it is
/// returned, there is no partially inflated state.
///
/// # Errors
/// Returns [`ContentError::Decode`] naming the first field whose text is not
/// valid JSON
pub fn inflate(mut doc: Value) -> ContentResult<Value> {
    for path in JSON_TEXT_FIELDS.iter() {
        inflate_field(&mut doc, path)?;
    }
    Ok(doc)
}

/// Check if no known field still holds JSON text with structure inside
#[must_use]
pub fn is_inflated(doc: &Value) -> bool {
    JSON_TEXT_FIELDS.iter().all(|path| match doc.get_str(path) {
        Some(text) => !matches!(
            serde_json::from_str::<Value>(text),
            Ok(Value::Object(_) | Value::Array(_))
        ),
        None => true,
    })
}

fn inflate_field(doc: &mut Value, path: &DocPath) -> ContentResult<()> {
    let Some(slot) = doc.lookup_mut(path) else {
        return Ok(());
    };
    let Value::String(text) = &*slot else {
        return Ok(());
    };

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| ContentError::decode(path.clone(), e))?;

    // Scalars carry no nested keys; keeping the text keeps inflation idempotent.
    if parsed.is_object() || parsed.is_array() {
        tracing::trace!(field = %path, "inflated JSON text field");
        *slot = parsed;
    } else {
        tracing::debug!(field = %path, "JSON text field holds a scalar, left as text");
    }
    Ok(())
}
