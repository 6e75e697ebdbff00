use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::local_whisper_engine::LocalWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    Local,
    OpenAi,
}

impl TranscriptionProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionProvider::Local => "local-whisper",
            TranscriptionProvider::OpenAi => "openai-whisper",
        }
    }
}

impl std::str::FromStr for TranscriptionProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "openai" => Ok(Self::OpenAi),
            other => Err(format!(
                "Invalid transcription provider: {}. Expected: local or openai",
                other
            )),
        }
    }
}

/// Builds the one transcription engine the process will use. Selection
/// happens here and nowhere else; the rest of the code only sees the
/// `TranscriptionEngine` port.
pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        model: &str,
        language: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::Local => {
                let engine = LocalWhisperEngine::new(model, language)?;
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::ModelLoadFailed(
                        "API key required for OpenAI transcription".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(
                    key,
                    base_url,
                    Some(model.to_string()),
                    language.to_string(),
                );
                Ok(Arc::new(engine))
            }
        }
    }
}
