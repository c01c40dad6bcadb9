//! Homepage-specific error types

use shared::CategoryId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomepageError {
    #[error("Manifest source unavailable for {category}: {message}")]
    SourceUnavailable { category: CategoryId, message: String },

    #[error("Malformed manifest for {category}: {message}")]
    MalformedSource { category: CategoryId, message: String },

    #[error("Static file not found: {path}")]
    StaticFileNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Invalid manifest location: {0}")]
    InvalidLocation(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),
}

impl HomepageError {
    pub fn unavailable(category: &CategoryId, message: impl ToString) -> Self {
        Self::SourceUnavailable {
            category: category.clone(),
            message: message.to_string(),
        }
    }

    pub fn malformed(category: &CategoryId, message: impl ToString) -> Self {
        Self::MalformedSource {
            category: category.clone(),
            message: message.to_string(),
        }
    }
}

pub type HomepageResult<T> = Result<T, HomepageError>;
