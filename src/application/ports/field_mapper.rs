use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{FormSchema, RawFieldMapping};

/// The one capability every language-model backend provides: given a
/// transcript and the form's field descriptors, return a constrained
/// field-id to value mapping. Implementations must return `Ok(empty)`
/// for an empty schema without calling their backend.
#[async_trait]
pub trait FieldMapper: Send + Sync {
    async fn map_fields(
        &self,
        transcript: &str,
        schema: &FormSchema,
    ) -> Result<RawFieldMapping, MappingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("authentication failed: {0}")]
    AuthFailed(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("field mapping timed out after {0:?}")]
    TimedOut(Duration),
}
