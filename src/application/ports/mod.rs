mod field_mapper;
mod transcription_engine;

pub use field_mapper::{FieldMapper, MappingError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
