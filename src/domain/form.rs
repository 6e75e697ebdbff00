use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of form fields a client wants populated, as sent alongside the
/// audio upload. Immutable for the duration of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// One form input as described by the client: a stable id, the label shown
/// to the user, the declared input type, and whatever extra hints the client
/// scraped from the page (placeholder, options, current value, ...). The
/// extra hints are kept verbatim so they can be surfaced to the language
/// model, but nothing in this crate branches on them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldDescriptor {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    #[serde(alias = "tel")]
    Phone,
    Date,
    Checkbox,
    Radio,
    Select,
    #[serde(other)]
    Other,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid JSON in form schema: {0}")]
pub struct SchemaParseError(#[from] serde_json::Error);

impl FormSchema {
    pub fn parse(json: &str) -> Result<Self, SchemaParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Ids a mapping response is allowed to mention; anything else is a
    /// hallucination and gets filtered.
    pub fn field_ids(&self) -> BTreeSet<&str> {
        self.fields.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            metadata: serde_json::Map::new(),
        }
    }
}
