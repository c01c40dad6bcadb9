//! Shared types for the portfolio homepage
//!
//! Contains the project data model, the homepage configuration, error types
//! and the logging setup used by every binary in the workspace.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::HomeConfig;
pub use errors::*;
pub use types::*;
