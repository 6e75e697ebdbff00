use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{FieldMapper, MappingError};
use crate::domain::{FormSchema, RawFieldMapping};
use crate::infrastructure::observability::transcript_preview;

use super::prompt::build_mapping_prompt;
use super::response::{error_for_status, parse_mapping_response};
use super::response_schema::mapping_response_schema;

/// Field mapping via the OpenAI chat completions API in `json_schema`
/// response mode. Not strict mode: strict schemas force every property
/// into `required`, which would contradict "unmentioned fields stay
/// absent".
pub struct OpenAiMapper {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiMapper {
    pub fn new(api_key: String, base_url: Option<String>, model: String, temperature: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model,
            temperature,
        }
    }
}

#[async_trait]
impl FieldMapper for OpenAiMapper {
    async fn map_fields(
        &self,
        transcript: &str,
        schema: &FormSchema,
    ) -> Result<RawFieldMapping, MappingError> {
        if schema.is_empty() {
            return Ok(RawFieldMapping::new());
        }

        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [{ "role": "user", "content": build_mapping_prompt(transcript, schema) }],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "form_field_mapping",
                    "schema": mapping_response_schema(schema)
                }
            }
        });

        tracing::debug!(
            model = %self.model,
            transcript = %transcript_preview(transcript),
            "Requesting field mapping from OpenAI"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
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

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| MappingError::InvalidResponse(format!("body: {}", e)))?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| {
                MappingError::InvalidResponse("response contains no choices".to_string())
            })?;

        parse_mapping_response(content, schema)
    }
}
