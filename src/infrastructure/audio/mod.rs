pub mod audio_decoder;
mod local_whisper_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use local_whisper_engine::LocalWhisperEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
