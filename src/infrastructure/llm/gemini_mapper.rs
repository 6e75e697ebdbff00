use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{FieldMapper, MappingError};
use crate::domain::{FormSchema, RawFieldMapping};
use crate::infrastructure::observability::transcript_preview;

use super::prompt::build_mapping_prompt;
use super::response::{error_for_status, parse_mapping_response};
use super::response_schema::gemini_response_schema;

/// Field mapping via the Gemini generateContent API, with
/// `responseMimeType: application/json` plus a `responseSchema` so the
/// model replies in constrained JSON mode.
pub struct GeminiMapper {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiMapper {
    pub fn new(api_key: String, base_url: Option<String>, model: String, temperature: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
            model,
            temperature,
        }
    }
}

#[async_trait]
impl FieldMapper for GeminiMapper {
    async fn map_fields(
        &self,
        transcript: &str,
        schema: &FormSchema,
    ) -> Result<RawFieldMapping, MappingError> {
        if schema.is_empty() {
            return Ok(RawFieldMapping::new());
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "contents": [{
                "parts": [{ "text": build_mapping_prompt(transcript, schema) }]
            }],
            "generationConfig": {
                "temperature": self.temperature,
                "responseMimeType": "application/json",
                "responseSchema": gemini_response_schema(schema)
            }
        });

        tracing::debug!(
            model = %self.model,
            transcript = %transcript_preview(transcript),
            "Requesting field mapping from Gemini"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
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

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| MappingError::InvalidResponse(format!("body: {}", e)))?;

        let text = generated
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                MappingError::InvalidResponse("response contains no candidates".to_string())
            })?;

        parse_mapping_response(text, schema)
    }
}
