use serde_json::{Map, Value, json};

use crate::domain::FormSchema;

/// JSON schema for the constrained-output mode of Ollama and OpenAI:
/// `{"mapped_fields": {<field_id>: string, ...}}` where every field id is
/// optional and no other keys are allowed.
pub fn mapping_response_schema(schema: &FormSchema) -> Value {
    let mut properties = Map::new();
    for field in &schema.fields {
        properties.insert(field.id.clone(), json!({ "type": "string" }));
    }

    json!({
        "type": "object",
        "properties": {
            "mapped_fields": {
                "type": "object",
                "properties": properties,
                "additionalProperties": false
            }
        },
        "required": ["mapped_fields"]
    })
}

/// Same shape in Gemini's schema dialect: uppercase type names, no
/// `additionalProperties` support.
pub fn gemini_response_schema(schema: &FormSchema) -> Value {
    let mut properties = Map::new();
    for field in &schema.fields {
        properties.insert(field.id.clone(), json!({ "type": "STRING" }));
    }

    json!({
        "type": "OBJECT",
        "properties": {
            "mapped_fields": {
                "type": "OBJECT",
                "properties": properties
            }
        },
        "required": ["mapped_fields"]
    })
}
