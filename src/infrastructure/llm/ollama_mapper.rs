use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{FieldMapper, MappingError};
use crate::domain::{FormSchema, RawFieldMapping};
use crate::infrastructure::observability::transcript_preview;

use super::prompt::build_mapping_prompt;
use super::response::{error_for_status, parse_mapping_response};
use super::response_schema::mapping_response_schema;

/// Field mapping against a local Ollama instance. The response JSON
/// schema goes in the `format` field, which puts the model into
/// constrained decoding so the reply is machine-parseable JSON.
pub struct OllamaMapper {
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OllamaMapper {
    pub fn new(base_url: String, model: String, temperature: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            model,
            temperature,
        }
    }
}

#[async_trait]
impl FieldMapper for OllamaMapper {
    async fn map_fields(
        &self,
        transcript: &str,
        schema: &FormSchema,
    ) -> Result<RawFieldMapping, MappingError> {
        if schema.is_empty() {
            return Ok(RawFieldMapping::new());
        }

        let url = format!("{}/api/chat", self.base_url);
        let body = json!({
            "model": self.model,
            "stream": false,
            "messages": [{ "role": "user", "content": build_mapping_prompt(transcript, schema) }],
            "format": mapping_response_schema(schema),
            "options": { "temperature": self.temperature }
        });

        tracing::debug!(
            model = %self.model,
            transcript = %transcript_preview(transcript),
            "Requesting field mapping from Ollama"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MappingError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(error_for_status(status, body));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| MappingError::InvalidResponse(format!("body: {}", e)))?;

        parse_mapping_response(&chat.message.content, schema)
    }
}
