//! Shared error types and utilities for the podium project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive number of milliseconds, got {value:?}")]
    InvalidDuration { key: &'static str, value: String },
    #[error("{key} must be one of true/false/1/0/yes/no, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Identity provider is not configured")]
    Unavailable,
    #[error("Identity provider error: {0}")]
    Provider(String),
    #[error("Malformed user from identity provider: {0}")]
    MalformedUser(#[from] serde_json::Error),
}
