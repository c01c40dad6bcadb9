//! Homepage configuration
//!
//! Loaded once at startup and passed explicitly to the loader, selector and
//! renderer. Every key is optional in the JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};
use crate::types::CategoryId;

/// Configuration for the homepage grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HomeConfig {
    /// Manifest sources, in display-independent load order
    pub categories: Vec<CategoryId>,
    /// File name of each category manifest
    pub manifest_name: String,
    /// Length of one rotation window
    pub rotate_window_ms: u64,
    /// Number of cards on the homepage
    pub home_count: usize,
    /// Id of the grid element cards are rendered into
    pub mount_id: String,
    /// Re-evaluate the selection in the browser every N seconds
    pub live_refresh_secs: Option<u64>,
    /// First hour (inclusive) of the light theme
    pub day_start_hour: u32,
    /// First hour of the dark theme
    pub day_end_hour: u32,
    pub site_title: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            categories: ["Modelado", "Programacion", "Edicion", "Musica", "IA", "Juegos"]
                .into_iter()
                .map(CategoryId::from)
                .collect(),
            manifest_name: "manifest.json".to_string(),
            rotate_window_ms: 60 * 60 * 1000,
            home_count: 6,
            mount_id: "project-grid".to_string(),
            live_refresh_secs: None,
            day_start_hour: 7,
            day_end_hour: 19,
            site_title: "Portfolio".to_string(),
        }
    }
}

impl HomeConfig {
    /// Read a JSON config file and validate it
    pub fn from_file(path: impl AsRef<Path>) -> SharedResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| SharedError::ConfigFileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON config document
    pub fn from_json(raw: &str) -> SharedResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn rotate_window(&self) -> Duration {
        Duration::from_millis(self.rotate_window_ms)
    }

    /// Check invariants the loader and selector rely on
    pub fn validate(&self) -> SharedResult<()> {
        if self.rotate_window_ms == 0 {
            return Err(SharedError::invalid_config("rotate_window_ms", 0));
        }
        if self.categories.is_empty() {
            return Err(SharedError::invalid_config("categories", "[]"));
        }
        // Category ids become path segments of the manifest location
        if let Some(bad) = self.categories.iter().find(|c| {
            let id = c.as_str();
            id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..")
        }) {
            return Err(SharedError::invalid_config("categories", bad));
        }
        if self.manifest_name.is_empty() || self.manifest_name.contains('/') {
            return Err(SharedError::invalid_config("manifest_name", &self.manifest_name));
        }
        if self.mount_id.trim().is_empty() {
            return Err(SharedError::invalid_config("mount_id", &self.mount_id));
        }
        if self.day_start_hour >= 24 || self.day_end_hour > 24 || self.day_start_hour >= self.day_end_hour {
            return Err(SharedError::invalid_config(
                "day_start_hour..day_end_hour",
                format!("{}..{}", self.day_start_hour, self.day_end_hour),
            ));
        }
        if self.live_refresh_secs == Some(0) {
            return Err(SharedError::invalid_config("live_refresh_secs", 0));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = HomeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.categories.len(), 6);
        assert_eq!(config.home_count, 6);
        assert_eq!(config.rotate_window(), Duration::from_secs(3600));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = HomeConfig::from_json(r#"{ "home_count": 3, "categories": ["IA"] }"#).unwrap();
        assert_eq!(config.home_count, 3);
        assert_eq!(config.categories, vec![CategoryId::from("IA")]);
        assert_eq!(config.rotate_window_ms, 3_600_000);
        assert_eq!(config.mount_id, "project-grid");
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = HomeConfig::from_json(r#"{ "rotate_window_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SharedError::InvalidConfig { ref field, .. } if field == "rotate_window_ms"));
    }

    #[test]
    fn test_path_like_category_rejected() {
        for bad in [r#"["../etc"]"#, r#"["a/b"]"#, r#"[""]"#, "[]"] {
            let raw = format!(r#"{{ "categories": {bad} }}"#);
            assert!(HomeConfig::from_json(&raw).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_day_bounds_validated() {
        assert!(HomeConfig::from_json(r#"{ "day_start_hour": 19, "day_end_hour": 7 }"#).is_err());
        assert!(HomeConfig::from_json(r#"{ "day_start_hour": 24 }"#).is_err());
        assert!(HomeConfig::from_json(r#"{ "day_start_hour": 6, "day_end_hour": 20 }"#).is_ok());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            HomeConfig::from_json("{ not json"),
            Err(SharedError::DeserializationError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "site_title": "Studio", "live_refresh_secs": 30 }}"#).unwrap();

        let config = HomeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.site_title, "Studio");
        assert_eq!(config.live_refresh_secs, Some(30));

        assert!(matches!(
            HomeConfig::from_file("/definitely/not/here.json"),
            Err(SharedError::ConfigFileError { .. })
        ));
    }
}
