//! Shared error types for the portfolio homepage

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Config file unreadable: {path}: {message}")]
    ConfigFileError { path: String, message: String },
}

impl SharedError {
    pub fn invalid_config(field: &str, value: impl ToString) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
