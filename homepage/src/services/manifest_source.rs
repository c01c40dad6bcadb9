//! Manifest sources
//!
//! `HttpManifestSource` fetches `<base>/<category>/<manifest>` over HTTP with
//! caching disabled; `FsManifestSource` reads the same layout from disk for
//! static builds.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use shared::{CategoryId, HomeConfig};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{HomepageError, HomepageResult};
use crate::traits::ManifestSource;

/// Manifest source backed by an HTTP server
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    client: reqwest::Client,
    base_url: Url,
    manifest_name: String,
}

impl HttpManifestSource {
    /// Create a source rooted at `base_url`
    pub fn new(base_url: &str, manifest_name: impl Into<String>) -> HomepageResult<Self> {
        // Without a trailing slash `Url::join` would replace the last segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| HomepageError::InvalidLocation(format!("{base_url}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            manifest_name: manifest_name.into(),
        })
    }

    pub fn from_config(base_url: &str, config: &HomeConfig) -> HomepageResult<Self> {
        Self::new(base_url, config.manifest_name.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of one category manifest
    pub fn manifest_url(&self, category: &CategoryId) -> HomepageResult<Url> {
        let relative = format!("{}/{}", urlencoding::encode(category.as_str()), self.manifest_name);
        self.base_url
            .join(&relative)
            .map_err(|e| HomepageError::InvalidLocation(format!("{relative}: {e}")))
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch_manifest(&self, category: &CategoryId) -> HomepageResult<Value> {
        let url = self.manifest_url(category)?;

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| HomepageError::unavailable(category, e))?;

        if !response.status().is_success() {
            return Err(HomepageError::unavailable(category, format!("HTTP {}", response.status())));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HomepageError::malformed(category, e))
    }

    fn location(&self, category: &CategoryId) -> String {
        self.manifest_url(category)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}{}/{}", self.base_url, category, self.manifest_name))
    }
}

/// Manifest source backed by a local directory
#[derive(Debug, Clone)]
pub struct FsManifestSource {
    root: PathBuf,
    manifest_name: String,
}

impl FsManifestSource {
    pub fn new<P: AsRef<Path>>(root: P, manifest_name: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            manifest_name: manifest_name.into(),
        }
    }

    pub fn from_config<P: AsRef<Path>>(root: P, config: &HomeConfig) -> Self {
        Self::new(root, config.manifest_name.clone())
    }

    pub fn manifest_path(&self, category: &CategoryId) -> PathBuf {
        self.root.join(category.as_str()).join(&self.manifest_name)
    }
}

#[async_trait]
impl ManifestSource for FsManifestSource {
    async fn fetch_manifest(&self, category: &CategoryId) -> HomepageResult<Value> {
        let content = tokio::fs::read(self.manifest_path(category))
            .await
            .map_err(|e| HomepageError::unavailable(category, e))?;

        serde_json::from_slice(&content).map_err(|e| HomepageError::malformed(category, e))
    }

    fn location(&self, category: &CategoryId) -> String {
        self.manifest_path(category).display().to_string()
    }
}
