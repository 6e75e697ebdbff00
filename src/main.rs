use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use voxform::application::services::ExtractionPipeline;
use voxform::infrastructure::audio::TranscriptionEngineFactory;
use voxform::infrastructure::llm::{FieldMapperFactory, MapperConfig};
use voxform::infrastructure::observability::{TracingConfig, init_tracing};
use voxform::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig {
        json_format: settings.logging.json_format,
        ..TracingConfig::default()
    });

    // Both backends are constructed exactly once; the local whisper path
    // loads the model here so the first request does not pay for it.
    let engine = TranscriptionEngineFactory::create(
        settings.transcription.provider,
        &settings.transcription.model,
        &settings.transcription.language,
        settings.transcription.openai_api_key.clone(),
        settings.transcription.openai_base_url.clone(),
    )?;

    let (mapper, mapping_provider) = FieldMapperFactory::create(&MapperConfig {
        gemini_api_key: settings.mapping.gemini_api_key.clone(),
        gemini_model: settings.mapping.gemini_model.clone(),
        openai_api_key: settings.mapping.openai_api_key.clone(),
        openai_base_url: settings.mapping.openai_base_url.clone(),
        openai_model: settings.mapping.openai_model.clone(),
        ollama_base_url: settings.mapping.ollama_base_url.clone(),
        ollama_model: settings.mapping.ollama_model.clone(),
        temperature: settings.mapping.temperature,
    });

    tracing::info!(
        transcription_provider = settings.transcription.provider.as_str(),
        mapping_provider = mapping_provider.as_str(),
        "Backends initialized"
    );

    let pipeline = Arc::new(ExtractionPipeline::new(
        engine,
        mapper,
        Duration::from_secs(settings.pipeline.stage_timeout_secs),
    ));

    let state = AppState {
        pipeline,
        transcription_provider: settings.transcription.provider.as_str().to_string(),
        mapping_provider: mapping_provider.as_str().to_string(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
