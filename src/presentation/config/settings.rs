use std::str::FromStr;

use crate::infrastructure::audio::TranscriptionProvider;

/// Process configuration, resolved from the environment once at startup.
/// The pipeline components never read the environment themselves; they
/// receive these values through their constructors.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub mapping: MappingSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    /// GGML model path for the local engine, model name for the cloud one.
    pub model: String,
    pub language: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MappingSettings {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub stage_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid value for {variable}: {message}")]
pub struct SettingsError {
    variable: &'static str,
    message: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let transcription_model = match parsed_var::<TranscriptionProvider>(
            "TRANSCRIPTION_PROVIDER",
            TranscriptionProvider::Local,
        )? {
            TranscriptionProvider::Local => {
                var("WHISPER_MODEL_PATH").unwrap_or_else(|| "models/ggml-base.en.bin".to_string())
            }
            TranscriptionProvider::OpenAi => {
                var("OPENAI_WHISPER_MODEL").unwrap_or_else(|| "whisper-1".to_string())
            }
        };

        Ok(Self {
            server: ServerSettings {
                host: var("VOXFORM_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parsed_var("VOXFORM_PORT", 8000)?,
            },
            transcription: TranscriptionSettings {
                provider: parsed_var("TRANSCRIPTION_PROVIDER", TranscriptionProvider::Local)?,
                model: transcription_model,
                language: var("TRANSCRIPTION_LANGUAGE").unwrap_or_else(|| "en".to_string()),
                openai_api_key: var("OPENAI_API_KEY"),
                openai_base_url: var("OPENAI_BASE_URL"),
            },
            mapping: MappingSettings {
                gemini_api_key: var("GOOGLE_API_KEY"),
                gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.0-flash".to_string()),
                openai_api_key: var("OPENAI_API_KEY"),
                openai_base_url: var("OPENAI_BASE_URL"),
                openai_model: var("OPENAI_CHAT_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
                ollama_base_url: var("OLLAMA_BASE_URL")
                    .unwrap_or_else(|| "http://localhost:11434".to_string()),
                ollama_model: var("OLLAMA_MODEL").unwrap_or_else(|| "llama3.2:3b".to_string()),
                temperature: parsed_var("LLM_TEMPERATURE", 0.2)?,
            },
            pipeline: PipelineSettings {
                stage_timeout_secs: parsed_var("STAGE_TIMEOUT_SECS", 120)?,
            },
            logging: LoggingSettings {
                json_format: var("LOG_FORMAT").map(|v| v.to_lowercase() == "json").unwrap_or(false),
            },
        })
    }
}

/// Read a variable, treating unset and blank as absent.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T>(name: &'static str, default: T) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(name) {
        Some(raw) => raw.parse().map_err(|e: T::Err| SettingsError {
            variable: name,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
