//! Key extraction from JSON bodies

use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Keys of the top-level object, or of the first element of a top-level array
///
/// Keys are returned in the order they appear in the document.
pub fn top_level_keys(body: &[u8]) -> Result<Vec<String>> {
    let value: JsonValue = serde_json::from_slice(body)
        .map_err(|e| Error::malformed(format!("body is not valid JSON: {e}")))?;

    let object = match &value {
        JsonValue::Array(items) => match items.first() {
            Some(JsonValue::Object(first)) => first,
            Some(other) => {
                return Err(Error::malformed(format!(
                    "first array element is {}, expected an object",
                    kind(other)
                )))
            }
            None => return Err(Error::malformed("array is empty, no element to inspect")),
        },
        JsonValue::Object(object) => object,
        other => {
            return Err(Error::malformed(format!(
                "top-level value is {}, expected an array or object",
                kind(other)
            )))
        }
    };

    Ok(object.keys().cloned().collect())
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
