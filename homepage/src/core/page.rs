//! Page document
//!
//! [`PageSurface`] is the in-memory display surface cards are mounted on, and
//! [`HomePage`] serializes a surface into the full HTML document.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use shared::HomeConfig;

use crate::core::render::MountPoint;
use crate::core::theme::Theme;
use crate::traits::DisplaySurface;

const BASE_CSS: &str = "\
body{margin:0;background:var(--bg);color:var(--text);font-family:Poppins,system-ui,sans-serif}\
header{padding:32px 24px 8px}\
.grid{display:grid;gap:20px;padding:24px;grid-template-columns:repeat(auto-fill,minmax(280px,1fr))}\
.card{background:var(--card);border-radius:16px;overflow:hidden;box-shadow:0 6px 24px rgba(0,0,0,.08)}\
.thumb{width:100%;aspect-ratio:8/5;object-fit:cover;display:block}\
.content{padding:16px}\
.content p{color:var(--muted)}\
.pill{font-size:12px;padding:2px 10px;border-radius:999px;border:1px solid var(--muted)}";

/// Mount points of one page, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSurface {
    mounts: Vec<(String, MountPoint)>,
}

impl PageSurface {
    /// A surface with no mount points at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_mount(id: impl Into<String>) -> Self {
        Self::empty().and_mount(id)
    }

    pub fn and_mount(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if self.mount(&id).is_none() {
            self.mounts.push((id, MountPoint::new()));
        }
        self
    }

    /// Surface holding the configured grid mount
    pub fn for_config(config: &HomeConfig) -> Self {
        Self::with_mount(config.mount_id.clone())
    }

    pub fn mount(&self, id: &str) -> Option<&MountPoint> {
        self.mounts.iter().find(|(mount_id, _)| mount_id.as_str() == id).map(|(_, mount)| mount)
    }
}

impl DisplaySurface for PageSurface {
    fn mount_point(&mut self, id: &str) -> Option<&mut MountPoint> {
        self.mounts
            .iter_mut()
            .find(|(mount_id, _)| mount_id.as_str() == id)
            .map(|(_, mount)| mount)
    }
}

/// The homepage document
#[derive(Debug, Clone, Copy)]
pub struct HomePage<'a> {
    config: &'a HomeConfig,
    theme: Theme,
}

impl<'a> HomePage<'a> {
    pub fn new(config: &'a HomeConfig, theme: Theme) -> Self {
        Self { config, theme }
    }

    pub fn to_markup(&self, surface: &PageSurface) -> Markup {
        let palette = self.theme.palette();
        let grid = surface.mount(&self.config.mount_id);

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    meta name="theme-color" content=(palette.theme_color);
                    @if let Some(secs) = self.config.live_refresh_secs {
                        meta http-equiv="refresh" content=(secs);
                    }
                    title { (self.config.site_title) }
                    style {
                        (PreEscaped(self.theme.css_variables()))
                        (PreEscaped(BASE_CSS))
                    }
                }
                body {
                    header { h1 { (self.config.site_title) } }
                    main {
                        @if let Some(grid) = grid {
                            section.grid id=(self.config.mount_id) {
                                (grid.to_markup())
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn to_html(&self, surface: &PageSurface) -> String {
        self.to_markup(surface).into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::Renderer;
    use shared::ProjectItem;

    #[test]
    fn test_surface_mounts_are_unique() {
        let mut surface = PageSurface::with_mount("grid").and_mount("grid").and_mount("aside");
        assert!(surface.mount_point("grid").is_some());
        assert!(surface.mount_point("aside").is_some());
        assert!(surface.mount_point("missing").is_none());
        assert!(PageSurface::empty().mount("grid").is_none());
    }

    #[test]
    fn test_document_contains_grid_and_theme() {
        let config = HomeConfig::default();
        let mut surface = PageSurface::for_config(&config);
        let items = vec![ProjectItem {
            title: "Lamp".to_string(),
            ..ProjectItem::default()
        }];
        Renderer::new(config.mount_id.clone()).render(&mut surface, &items);

        let html = HomePage::new(&config, Theme::Night).to_html(&surface);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="project-grid""#));
        assert!(html.contains(r#"class="grid""#));
        assert!(html.contains("<h3>Lamp</h3>"));
        assert!(html.contains(r##"<meta name="theme-color" content="#0b0e13">"##));
        assert!(html.contains("--bg:#0b0e13"));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn test_live_refresh_meta() {
        let config = HomeConfig {
            live_refresh_secs: Some(30),
            ..HomeConfig::default()
        };
        let html = HomePage::new(&config, Theme::Day).to_html(&PageSurface::for_config(&config));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="30">"#));
    }

    #[test]
    fn test_missing_grid_renders_empty_main() {
        let config = HomeConfig::default();
        let html = HomePage::new(&config, Theme::Day).to_html(&PageSurface::empty());
        assert!(html.contains("<main></main>"));
    }
}
