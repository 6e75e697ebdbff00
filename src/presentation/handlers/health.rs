use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FieldMapper, TranscriptionEngine};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub transcription_provider: String,
    pub mapping_provider: String,
}

pub async fn health_handler<E, M>(State(state): State<AppState<E, M>>) -> impl IntoResponse
where
    E: TranscriptionEngine + ?Sized + 'static,
    M: FieldMapper + ?Sized + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            transcription_provider: state.transcription_provider,
            mapping_provider: state.mapping_provider,
        }),
    )
}
