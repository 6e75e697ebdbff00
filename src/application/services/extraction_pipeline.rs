use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::application::ports::{
    FieldMapper, MappingError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::normalizer;
use crate::domain::{AudioSource, FormSchema, NormalizedFieldMapping, SchemaParseError};
use crate::infrastructure::observability::transcript_preview;

/// Composes transcription, field mapping, and normalization into the one
/// operation the HTTP boundary calls. Strictly sequential: schema parse,
/// transcribe, map, normalize, each stage able to fail the whole run.
pub struct ExtractionPipeline<E, M>
where
    E: TranscriptionEngine + ?Sized,
    M: FieldMapper + ?Sized,
{
    engine: Arc<E>,
    mapper: Arc<M>,
    stage_timeout: Duration,
}

impl<E, M> ExtractionPipeline<E, M>
where
    E: TranscriptionEngine + ?Sized,
    M: FieldMapper + ?Sized,
{
    pub fn new(engine: Arc<E>, mapper: Arc<M>, stage_timeout: Duration) -> Self {
        Self {
            engine,
            mapper,
            stage_timeout,
        }
    }

    /// Run one extraction end to end. Never panics and never escapes an
    /// error: every failure becomes a well-formed result with
    /// `success: false`, an empty mapping, and a human-readable cause.
    pub async fn process(&self, audio: AudioSource, schema_json: &str) -> PipelineResult {
        match self.run(audio, schema_json).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Pipeline run failed");
                PipelineResult::failure(e.to_string())
            }
        }
    }

    async fn run(
        &self,
        audio: AudioSource,
        schema_json: &str,
    ) -> Result<PipelineResult, PipelineError> {
        // Fail fast on a bad schema before any expensive backend work.
        let schema = FormSchema::parse(schema_json)?;
        tracing::info!(fields = schema.fields.len(), "Form schema parsed");

        let transcript =
            match tokio::time::timeout(self.stage_timeout, self.engine.transcribe(&audio)).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(PipelineError::Transcription(TranscriptionError::TimedOut(
                        self.stage_timeout,
                    )));
                }
            };
        tracing::info!(
            chars = transcript.text.len(),
            language = %transcript.language,
            preview = %transcript_preview(&transcript.text),
            "Transcription completed"
        );

        let raw = match tokio::time::timeout(
            self.stage_timeout,
            self.mapper.map_fields(&transcript.text, &schema),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(PipelineError::Mapping(MappingError::TimedOut(
                    self.stage_timeout,
                )));
            }
        };
        tracing::info!(fields = raw.len(), "Field mapping completed");

        let form_data = normalizer::normalize(&raw);
        tracing::info!(
            raw_fields = raw.len(),
            normalized_fields = form_data.len(),
            "Normalization completed"
        );

        Ok(PipelineResult::success(transcript.text, form_data))
    }
}

/// The sole externally observable artifact of one pipeline run. Success is
/// all-or-nothing: a failed run carries an empty transcript and mapping,
/// while an empty mapping with `success: true` just means nothing relevant
/// was said.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub success: bool,
    pub transcribed_text: String,
    pub form_data: NormalizedFieldMapping,
    pub message: String,
}

impl PipelineResult {
    pub fn success(transcribed_text: String, form_data: NormalizedFieldMapping) -> Self {
        Self {
            success: true,
            transcribed_text,
            form_data,
            message: "ok".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            transcribed_text: String::new(),
            form_data: NormalizedFieldMapping::new(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Schema(#[from] SchemaParseError),
    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("field mapping failed: {0}")]
    Mapping(#[from] MappingError),
}
