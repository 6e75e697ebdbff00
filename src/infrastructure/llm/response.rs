use reqwest::StatusCode;
use serde_json::Value;

use crate::application::ports::MappingError;
use crate::domain::{FormSchema, RawFieldMapping};

/// Normalize a backend's structured output into a `RawFieldMapping`,
/// isolating the rest of the pipeline from provider response shapes.
///
/// Tolerated shapes: the declared wrapper `{"mapped_fields": {...}}` and
/// the bare mapping `{...}` some models emit despite the schema. Scalar
/// values are coerced to strings; nulls and nested values are dropped;
/// ids not present in the schema are hallucinations and get filtered.
/// Anything that is not a JSON object fails with `InvalidResponse` —
/// a backend producing garbage should fail the pipeline loudly, not look
/// like "nothing was extracted".
pub fn parse_mapping_response(
    body: &str,
    schema: &FormSchema,
) -> Result<RawFieldMapping, MappingError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| MappingError::InvalidResponse(format!("not valid JSON: {}", e)))?;

    let object = match value {
        Value::Object(map) => match map.get("mapped_fields") {
            Some(Value::Object(inner)) => inner.clone(),
            Some(other) => {
                return Err(MappingError::InvalidResponse(format!(
                    "mapped_fields is not an object: {}",
                    other
                )));
            }
            None => map,
        },
        other => {
            return Err(MappingError::InvalidResponse(format!(
                "expected a JSON object, got: {}",
                other
            )));
        }
    };

    let allowed_ids = schema.field_ids();
    let mut mapping = RawFieldMapping::new();

    for (field_id, value) in object {
        let Some(text) = coerce_scalar(&value) else {
            tracing::debug!(field = %field_id, "Dropping non-scalar value from mapping response");
            continue;
        };

        if !allowed_ids.contains(field_id.as_str()) {
            tracing::warn!(field = %field_id, "Dropping hallucinated field id from mapping response");
            continue;
        }

        mapping.insert(field_id, text);
    }

    Ok(mapping)
}

fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Map an unsuccessful HTTP status to the mapping error taxonomy. Shared
/// by every provider client.
pub fn error_for_status(status: StatusCode, body: String) -> MappingError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            MappingError::AuthFailed(format!("status {}: {}", status, body))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            MappingError::RateLimited(format!("status {}: {}", status, body))
        }
        _ => MappingError::ApiRequestFailed(format!("status {}: {}", status, body)),
    }
}
