mod audio;
mod form;
mod mapping;
pub mod normalizer;
mod transcript;

pub use audio::AudioSource;
pub use form::{FieldDescriptor, FieldType, FormSchema, SchemaParseError};
pub use mapping::{NormalizedFieldMapping, RawFieldMapping};
pub use transcript::Transcript;
