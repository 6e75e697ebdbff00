mod field_mapper_factory;
mod gemini_mapper;
mod ollama_mapper;
mod openai_mapper;
pub mod prompt;
pub mod response;
pub mod response_schema;

pub use field_mapper_factory::{FieldMapperFactory, MapperConfig, MappingProvider};
pub use gemini_mapper::GeminiMapper;
pub use ollama_mapper::OllamaMapper;
pub use openai_mapper::OpenAiMapper;
