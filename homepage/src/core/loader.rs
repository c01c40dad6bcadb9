//! Manifest loader
//!
//! Loads every configured category concurrently and normalizes the records
//! into [`ProjectItem`]s. A category that cannot be fetched or parsed
//! contributes nothing; the failure is logged and never reaches the caller.

use futures_util::future::join_all;
use shared::{CategoryId, HomeConfig, Manifest, ProcessId, ProjectItem, process_debug, process_warn};

use crate::error::{HomepageError, HomepageResult};
use crate::traits::ManifestSource;

/// Loads project items from a [`ManifestSource`]
#[derive(Debug, Clone)]
pub struct ManifestLoader<S> {
    source: S,
    categories: Vec<CategoryId>,
}

impl<S: ManifestSource> ManifestLoader<S> {
    pub fn new(source: S, categories: Vec<CategoryId>) -> Self {
        Self { source, categories }
    }

    pub fn from_config(source: S, config: &HomeConfig) -> Self {
        Self::new(source, config.categories.clone())
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    /// Items of one category, or an empty list when the source is unusable
    pub async fn load_category(&self, category: &CategoryId) -> Vec<ProjectItem> {
        match self.try_load_category(category).await {
            Ok(items) => {
                process_debug!(
                    ProcessId::current(),
                    "📂 Loaded {} projects from {}",
                    items.len(),
                    category
                );
                items
            }
            Err(e) => {
                process_warn!(
                    ProcessId::current(),
                    "⚠️ Skipping category {} ({}): {}",
                    category,
                    self.source.location(category),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn try_load_category(&self, category: &CategoryId) -> HomepageResult<Vec<ProjectItem>> {
        let document = self.source.fetch_manifest(category).await?;
        let manifest = Manifest::from_value(&document).map_err(|e| HomepageError::malformed(category, e))?;
        Ok(manifest.projects)
    }

    /// Items of every category, flattened in category order.
    ///
    /// All categories are requested at once; a slow or failing one does not
    /// hold back the others beyond the final join.
    pub async fn load_all(&self) -> Vec<ProjectItem> {
        let groups = join_all(self.categories.iter().map(|category| self.load_category(category))).await;
        groups.into_iter().flatten().collect()
    }
}
