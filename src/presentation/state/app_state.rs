use std::sync::Arc;

use crate::application::ports::{FieldMapper, TranscriptionEngine};
use crate::application::services::ExtractionPipeline;

/// Shared per-process state handed to every handler. The pipeline holds
/// the two model handles, both initialized once at startup and read-only
/// afterwards.
pub struct AppState<E, M>
where
    E: TranscriptionEngine + ?Sized,
    M: FieldMapper + ?Sized,
{
    pub pipeline: Arc<ExtractionPipeline<E, M>>,
    pub transcription_provider: String,
    pub mapping_provider: String,
}

impl<E, M> Clone for AppState<E, M>
where
    E: TranscriptionEngine + ?Sized,
    M: FieldMapper + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            transcription_provider: self.transcription_provider.clone(),
            mapping_provider: self.mapping_provider.clone(),
        }
    }
}
