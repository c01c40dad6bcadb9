//! Homepage grid initialization
//!
//! Wires the loader, selector and renderer together: fetch every category,
//! pick the items of the current rotation window and mount them as cards.

use serde::Serialize;
use shared::{HomeConfig, ProcessId, ProjectItem, process_info};

use crate::core::loader::ManifestLoader;
use crate::core::render::Renderer;
use crate::core::selector::{RotationSelector, now_ms};
use crate::traits::{DisplaySurface, ManifestSource};

/// Outcome of one page initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitStatus {
    /// Items loaded across all categories
    pub loaded: usize,
    /// Items selected for display
    pub displayed: usize,
    /// Rotation window the selection belongs to
    pub bucket: u64,
    /// False when the surface had no mount point
    pub rendered: bool,
}

/// Items picked for one rotation window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub bucket: u64,
    pub loaded: usize,
    pub items: Vec<ProjectItem>,
}

#[derive(Debug, Clone)]
pub struct HomeGrid<S> {
    loader: ManifestLoader<S>,
    selector: RotationSelector,
    renderer: Renderer,
}

impl<S: ManifestSource> HomeGrid<S> {
    pub fn new(source: S, config: &HomeConfig) -> Self {
        Self {
            loader: ManifestLoader::from_config(source, config),
            selector: RotationSelector::from_config(config),
            renderer: Renderer::new(config.mount_id.clone()),
        }
    }

    pub fn loader(&self) -> &ManifestLoader<S> {
        &self.loader
    }

    pub fn selector(&self) -> &RotationSelector {
        &self.selector
    }

    /// Load fresh manifests and select the items of the window at `now_ms`
    pub async fn selection_at(&self, now_ms: u64) -> Selection {
        let all = self.loader.load_all().await;

        Selection {
            bucket: self.selector.bucket_at(now_ms),
            loaded: all.len(),
            items: self.selector.select_at(&all, now_ms),
        }
    }

    pub async fn selection(&self) -> Selection {
        self.selection_at(now_ms()).await
    }

    /// Fetch, select and render for the window at `now_ms`
    pub async fn initialize_at<D>(&self, surface: &mut D, now_ms: u64) -> InitStatus
    where
        D: DisplaySurface + ?Sized,
    {
        let selection = self.selection_at(now_ms).await;
        let rendered = self.renderer.render(surface, &selection.items);

        let status = InitStatus {
            loaded: selection.loaded,
            displayed: if rendered { selection.items.len() } else { 0 },
            bucket: selection.bucket,
            rendered,
        };

        process_info!(
            ProcessId::current(),
            "🖼️ Homepage initialized: {} of {} projects shown (window {})",
            status.displayed,
            status.loaded,
            status.bucket
        );
        status
    }

    /// Fetch, select and render for the current window
    pub async fn initialize<D>(&self, surface: &mut D) -> InitStatus
    where
        D: DisplaySurface + ?Sized,
    {
        self.initialize_at(surface, now_ms()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::PageSurface;
    use crate::traits::MockManifestSource;
    use serde_json::json;

    const HOUR_MS: u64 = 60 * 60 * 1000;

    fn config() -> HomeConfig {
        HomeConfig::from_json(r#"{ "categories": ["A", "B"], "home_count": 3 }"#).unwrap()
    }

    fn source() -> MockManifestSource {
        let mut source = MockManifestSource::new();
        source.expect_location().returning(|c| c.to_string());
        source.expect_fetch_manifest().returning(|category| {
            let projects: Vec<_> = (0..4)
                .map(|i| json!({ "title": format!("{category}{i}"), "tag": category.as_str() }))
                .collect();
            Ok(json!({ "projects": projects }))
        });
        source
    }

    #[tokio::test]
    async fn test_initialize_renders_selection() {
        let grid = HomeGrid::new(source(), &config());
        let mut surface = PageSurface::with_mount("project-grid");

        let status = grid.initialize_at(&mut surface, 10 * HOUR_MS).await;

        assert_eq!(
            status,
            InitStatus { loaded: 8, displayed: 3, bucket: 10, rendered: true }
        );
        assert_eq!(surface.mount("project-grid").unwrap().cards().len(), 3);
    }

    #[tokio::test]
    async fn test_initialize_is_stable_within_window() {
        let grid = HomeGrid::new(source(), &config());

        let mut first = PageSurface::with_mount("project-grid");
        let mut second = PageSurface::with_mount("project-grid");
        grid.initialize_at(&mut first, 10 * HOUR_MS + 5).await;
        grid.initialize_at(&mut second, 11 * HOUR_MS - 5).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_initialize_without_mount_point() {
        let grid = HomeGrid::new(source(), &config());
        let mut surface = PageSurface::empty();

        let status = grid.initialize_at(&mut surface, 0).await;
        assert!(!status.rendered);
        assert_eq!(status.displayed, 0);
        assert_eq!(status.loaded, 8);
    }

    #[tokio::test]
    async fn test_selection_reports_bucket() {
        let grid = HomeGrid::new(source(), &config());
        let selection = grid.selection_at(3 * HOUR_MS).await;

        assert_eq!(selection.bucket, 3);
        assert_eq!(selection.loaded, 8);
        assert_eq!(selection.items.len(), 3);
        assert_eq!(grid.selector().count(), 3);
        assert_eq!(grid.loader().categories().len(), 2);
    }
}
