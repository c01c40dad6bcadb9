//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod manifest_source;
pub mod static_server;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use manifest_source::{FsManifestSource, HttpManifestSource};
pub use static_server::RealStaticFileServer;
