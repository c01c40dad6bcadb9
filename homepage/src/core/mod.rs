//! Core homepage logic
//!
//! Loading, selection and rendering, free of any HTTP concerns.

pub mod grid;
pub mod loader;
pub mod page;
pub mod render;
pub mod selector;
pub mod theme;

pub use grid::{HomeGrid, InitStatus, Selection};
pub use loader::ManifestLoader;
pub use page::{HomePage, PageSurface};
pub use render::{Card, CardImage, CardLink, LinkTarget, MountPoint, Renderer, placeholder_svg};
pub use selector::{RotationSelector, seeded_shuffle, select, select_at, window_bucket};
pub use theme::{Palette, Theme};
