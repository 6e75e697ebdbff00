use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FieldMapper, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, info_handler, process_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, M>(state: AppState<E, M>) -> Router
where
    E: TranscriptionEngine + ?Sized + 'static,
    M: FieldMapper + ?Sized + 'static,
{
    // The caller is a browser extension running on arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler::<E, M>))
        .route("/api/process", post(process_handler::<E, M>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
