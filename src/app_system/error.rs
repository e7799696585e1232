use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors returned by StorefrontClient calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    #[error("Product is not discounted: {0}")]
    NotDiscounted(String),
    #[error("Unexpected actor result: {0}")]
    UnexpectedResult(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for StorefrontError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => StorefrontError::SessionNotFound(id),
            other => StorefrontError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Invalid runtime settings.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
