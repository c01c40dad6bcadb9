//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;
use serde_json::Value;
use shared::CategoryId;

use crate::core::render::MountPoint;
use crate::error::HomepageResult;

/// Manifest retrieval service trait
#[mockall::automock]
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch the raw manifest document of one category, bypassing any cache
    async fn fetch_manifest(&self, category: &CategoryId) -> HomepageResult<Value>;

    /// Human readable location of a category manifest, for logs
    fn location(&self, category: &CategoryId) -> String;
}

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    /// Serve static file
    async fn serve_file(&self, path: &str) -> HomepageResult<StaticFileResponse>;
}

/// A document exposing mount points cards can be rendered into
pub trait DisplaySurface {
    /// Look up a mount point by element id
    fn mount_point(&mut self, id: &str) -> Option<&mut MountPoint>;
}

/// Static file response
#[derive(Debug, Clone)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    /// Create new static file response
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    /// Set cache control header
    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
