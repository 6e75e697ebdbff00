mod settings;

pub use settings::{
    LoggingSettings, MappingSettings, PipelineSettings, ServerSettings, Settings, SettingsError,
    TranscriptionSettings,
};
