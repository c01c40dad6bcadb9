//! Static file serving service
//!
//! Serves manifests, images and other site assets from the static directory

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{ProcessId, process_debug, process_warn};

use crate::error::{HomepageError, HomepageResult};
use crate::traits::{StaticFileResponse, StaticFileServer};

/// Real static file server implementation
#[derive(Debug, Clone)]
pub struct RealStaticFileServer {
    /// Base directory for static files
    base_dir: PathBuf,

    /// MIME type mappings
    mime_types: HashMap<&'static str, &'static str>,
}

impl RealStaticFileServer {
    /// Create new static file server
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let mime_types = HashMap::from([
            ("html", "text/html; charset=utf-8"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("webp", "image/webp"),
            ("avif", "image/avif"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("mp4", "video/mp4"),
            ("woff", "font/woff"),
            ("woff2", "font/woff2"),
        ]);

        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            mime_types,
        }
    }

    fn extension(path: &str) -> Option<String> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    /// Get MIME type from file extension
    pub fn mime_type(&self, path: &str) -> &'static str {
        Self::extension(path)
            .and_then(|ext| self.mime_types.get(ext.as_str()).copied())
            .unwrap_or("application/octet-stream")
    }

    /// Get cache control header based on file type
    pub fn cache_control(&self, path: &str) -> Option<&'static str> {
        match Self::extension(path)?.as_str() {
            // Manifests are re-read on every page initialization
            "html" | "json" => Some("no-cache"),
            "js" | "css" => Some("public, max-age=3600"),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "avif" | "svg" | "ico" => Some("public, max-age=86400"),
            "woff" | "woff2" => Some("public, max-age=604800"),
            _ => None,
        }
    }

    /// Resolve file path and prevent directory traversal
    fn resolve_path(&self, request_path: &str) -> HomepageResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        if clean_path.is_empty() {
            return Err(HomepageError::StaticFileNotFound {
                path: request_path.to_string(),
            });
        }

        let canonical_path = self
            .base_dir
            .join(clean_path)
            .canonicalize()
            .map_err(|_| HomepageError::StaticFileNotFound {
                path: request_path.to_string(),
            })?;

        let canonical_base = self.base_dir.canonicalize().map_err(|e| {
            shared::process_error!(ProcessId::current(), "Failed to canonicalize base directory: {}", e);
            HomepageError::StaticFileNotFound {
                path: request_path.to_string(),
            }
        })?;

        // Ensure the resolved path is within the base directory
        if !canonical_path.starts_with(&canonical_base) {
            return Err(HomepageError::AccessDenied {
                path: request_path.to_string(),
            });
        }

        Ok(canonical_path)
    }
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> HomepageResult<StaticFileResponse> {
        let file_path = self.resolve_path(path)?;

        if file_path.is_dir() {
            return Err(HomepageError::StaticFileNotFound {
                path: path.to_string(),
            });
        }

        match fs::read(&file_path).await {
            Ok(content) => {
                process_debug!(ProcessId::current(), "📄 Served static file: {} ({} bytes)", path, content.len());

                let mut response = StaticFileResponse::new(content, self.mime_type(path).to_string());
                if let Some(cache) = self.cache_control(path) {
                    response = response.with_cache_control(cache.to_string());
                }
                Ok(response)
            }
            Err(e) => {
                process_warn!(ProcessId::current(), "❌ Failed to read static file {}: {}", path, e);
                Err(HomepageError::StaticFileNotFound {
                    path: path.to_string(),
                })
            }
        }
    }
}

impl Default for RealStaticFileServer {
    fn default() -> Self {
        Self::new("./static")
    }
}
