//! Ordered field records and serde bridges for variant payloads.

use serde::{de::DeserializeOwned, ser::Error as _, Serialize};
use serde_json::Value;

/// An ordered mapping of field name to value.
///
/// Field order is preserved as inserted, which keeps records in the
/// declaration order of the payload types they were built from.
pub type Fields = serde_json::Map<String, Value>;

/// Converts a payload value into its field record through serde.
///
/// The payload must serialize to an object; anything else (a bare
/// number, a string, an array) cannot act as a named-field record
/// and is rejected.
pub fn to_fields<P: Serialize>(payload: &P) -> serde_json::Result<Fields> {
    match serde_json::to_value(payload)? {
        Value::Object(fields) => Ok(fields),
        other => Err(serde_json::Error::custom(format_args!(
            "expected payload to serialize to an object, got {}",
            value_kind(&other)
        ))),
    }
}

/// Builds a payload value from its field record through serde.
pub fn from_fields<P: DeserializeOwned>(fields: &Fields) -> serde_json::Result<P> {
    serde_json::from_value(Value::Object(fields.clone()))
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
