//! Response envelope extraction
//!
//! Upstream list endpoints wrap their items in differently-keyed objects
//! (`Resources`, `seats`, `teams`, ...) or return a bare array. Extraction is
//! fail-fast: an unrecognized shape aborts the run rather than being treated
//! as an empty page, which would silently truncate the report.

use ghreport_domain::{ReportError, Result};
use serde_json::Value;

/// Pull the item list out of a page payload.
///
/// A bare array is accepted as-is; an object is probed for the given keys in
/// order and the first array-valued key wins. Anything else is an envelope
/// error naming the endpoint.
pub fn items_from_payload(payload: Value, keys: &[&str], endpoint: &str) -> Result<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for key in keys {
                if let Some(Value::Array(items)) = map.remove(*key) {
                    return Ok(items);
                }
            }
            Err(ReportError::Envelope(format!(
                "unexpected payload shape from {endpoint}: object without any of {keys:?}"
            )))
        }
        other => Err(ReportError::Envelope(format!(
            "unexpected payload shape from {endpoint}: {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
