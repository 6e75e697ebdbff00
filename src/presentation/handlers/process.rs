use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FieldMapper, TranscriptionEngine};
use crate::domain::AudioSource;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /api/process` — one spoken utterance plus the target form's field
/// descriptors, in; a populated field mapping, out. Pipeline outcomes are
/// always HTTP 200 with `success` set accordingly; 400 is reserved for a
/// malformed multipart body.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler<E, M>(
    State(state): State<AppState<E, M>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TranscriptionEngine + ?Sized + 'static,
    M: FieldMapper + ?Sized + 'static,
{
    let mut audio: Option<AudioSource> = None;
    let mut schema_json = String::from("{}");

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let part_name = field.name().map(str::to_string);
        match part_name.as_deref() {
            Some("audio_file") => {
                let filename = field.file_name().unwrap_or("audio").to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read audio bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read audio file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
                tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");
                audio = Some(AudioSource::from_upload(&filename, data.to_vec()));
            }
            Some("form_data_json") => {
                schema_json = match field.text().await {
                    Ok(t) => t,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read form schema part");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read form_data_json: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
            }
            other => {
                tracing::debug!(part = ?other, "Ignoring unknown multipart part");
            }
        }
    }

    let Some(audio) = audio else {
        tracing::warn!("Process request without an audio file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No audio file uploaded".to_string(),
            }),
        )
            .into_response();
    };

    let result = state.pipeline.process(audio, &schema_json).await;

    (StatusCode::OK, Json(result)).into_response()
}
