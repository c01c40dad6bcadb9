//! Core types used throughout the homepage workspace

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub mod project;

pub use project::{CategoryId, DEFAULT_TITLE, Manifest, PLACEHOLDER_LINK, ProjectItem};

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for the binaries in the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Long running HTTP server rendering the page per request
    Server,
    /// One-shot static build writing a rendered page to disk
    Builder,
}

impl ProcessId {
    /// Initialize the global process ID for the server
    pub fn init_server() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Server)
    }

    /// Initialize the global process ID for the static builder
    pub fn init_builder() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Builder)
    }

    /// Get the global process ID, falling back to the server when unset (tests)
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Server)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Server => write!(f, "server"),
            ProcessId::Builder => write!(f, "builder"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_id_display() {
        assert_eq!(ProcessId::Server.to_string(), "server");
        assert_eq!(ProcessId::Builder.to_string(), "builder");
    }
}
