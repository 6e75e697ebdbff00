use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioSource, Transcript};

use super::audio_decoder::decode_audio_to_pcm;

/// Decoding effort is fixed; per-request tuning would make latency
/// unpredictable for no quality gain on short utterances.
const BEAM_SIZE: i32 = 5;

/// Local speech-to-text over a GGML whisper model. The context (model
/// weights) is loaded once at construction and shared read-only across
/// concurrent calls; every transcription creates its own decode state, so
/// no locking is needed. Language is pinned to the configured tag rather
/// than auto-detected.
pub struct LocalWhisperEngine {
    ctx: Arc<WhisperContext>,
    language: String,
}

impl LocalWhisperEngine {
    pub fn new(model_path: &str, language: &str) -> Result<Self, TranscriptionError> {
        if !Path::new(model_path).exists() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "model file not found: {}",
                model_path
            )));
        }

        tracing::info!(
            model = model_path,
            language = language,
            "Loading local whisper model"
        );

        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;

        tracing::info!("Local whisper model loaded");

        Ok(Self {
            ctx: Arc::new(ctx),
            language: language.to_string(),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for LocalWhisperEngine {
    async fn transcribe(&self, audio: &AudioSource) -> Result<Transcript, TranscriptionError> {
        let data = audio.data.clone();
        let extension = audio.extension.clone();
        let ctx = Arc::clone(&self.ctx);
        let language = self.language.clone();

        // Whisper inference is CPU-bound; keep it off the async runtime.
        let text = tokio::task::spawn_blocking(move || {
            let pcm = decode_audio_to_pcm(&data, extension.as_deref())?;
            run_inference(&ctx, &pcm, &language)
        })
        .await
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("task join: {}", e)))??;

        tracing::info!(chars = text.len(), "Local whisper transcription completed");

        Ok(Transcript::new(text, self.language.clone()))
    }
}

fn run_inference(
    ctx: &WhisperContext,
    pcm: &[f32],
    language: &str,
) -> Result<String, TranscriptionError> {
    let mut params = FullParams::new(SamplingStrategy::BeamSearch {
        beam_size: BEAM_SIZE,
        patience: -1.0,
    });
    params.set_language(Some(language));
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_special(false);

    let mut state = ctx
        .create_state()
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("state: {}", e)))?;

    state
        .full(params, pcm)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("inference: {}", e)))?;

    let n_segments = state
        .full_n_segments()
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segments: {}", e)))?;

    // Segments come back in temporal order; join them into one blob.
    let mut text = String::new();
    for i in 0..n_segments {
        let segment = state
            .full_get_segment_text(i)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segment {}: {}", i, e)))?;
        text.push_str(&segment);
    }

    Ok(text.trim().to_string())
}
