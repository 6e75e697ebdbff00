use std::sync::Arc;

use crate::application::ports::FieldMapper;

use super::gemini_mapper::GeminiMapper;
use super::ollama_mapper::OllamaMapper;
use super::openai_mapper::OpenAiMapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingProvider {
    Gemini,
    OpenAi,
    Ollama,
}

impl MappingProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingProvider::Gemini => "gemini",
            MappingProvider::OpenAi => "openai",
            MappingProvider::Ollama => "ollama",
        }
    }
}

/// Everything the factory needs to pick and construct a mapper. Values
/// arrive already resolved from configuration; empty strings are treated
/// as absent credentials.
#[derive(Debug, Clone, Default)]
pub struct MapperConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub temperature: f32,
}

/// Picks the mapping backend once, at startup, by credential availability:
/// Gemini wins if its key is set, then OpenAI, then the local Ollama
/// instance which needs no credentials. The choice is fixed for the
/// process lifetime; nothing outside this factory branches on provider
/// identity.
pub struct FieldMapperFactory;

impl FieldMapperFactory {
    pub fn create(config: &MapperConfig) -> (Arc<dyn FieldMapper>, MappingProvider) {
        if let Some(key) = present(&config.gemini_api_key) {
            let mapper = GeminiMapper::new(
                key,
                None,
                config.gemini_model.clone(),
                config.temperature,
            );
            return (Arc::new(mapper), MappingProvider::Gemini);
        }

        if let Some(key) = present(&config.openai_api_key) {
            let mapper = OpenAiMapper::new(
                key,
                config.openai_base_url.clone(),
                config.openai_model.clone(),
                config.temperature,
            );
            return (Arc::new(mapper), MappingProvider::OpenAi);
        }

        let mapper = OllamaMapper::new(
            config.ollama_base_url.clone(),
            config.ollama_model.clone(),
            config.temperature,
        );
        (Arc::new(mapper), MappingProvider::Ollama)
    }
}

fn present(key: &Option<String>) -> Option<String> {
    key.as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
}
