//! Portfolio homepage library
//!
//! Loads per-category project manifests, picks a rotating subset that stays
//! stable within a time window, and renders it as a themed card grid. The
//! same flow backs the HTTP server and the static `build` command.

pub mod core;
pub mod error;
pub mod homepage_impl;
pub mod services;
pub mod state;
pub mod traits;

// Re-export main types
pub use error::{HomepageError, HomepageResult};
pub use homepage_impl::HomepageServer;
pub use state::ServerState;

// Re-export trait definitions
pub use traits::{DisplaySurface, ManifestSource, StaticFileResponse, StaticFileServer};

// Re-export service implementations
pub use services::{FsManifestSource, HttpManifestSource, RealStaticFileServer};
