use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiProviderError {
    #[error("Gemini API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("{0}")]
    NotConfigured(String),
}
