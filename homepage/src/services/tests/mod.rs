//! Service tests for the homepage
//!
//! This module contains tests for the manifest sources and the static file
//! server against real HTTP mocks and temporary directories.
