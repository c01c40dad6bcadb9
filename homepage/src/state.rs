//! Homepage server state
//!
//! This module contains the state shared between request handlers.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use shared::HomeConfig;

/// Core server state
#[derive(Debug)]
pub struct ServerState {
    // Server configuration
    pub bind_address: SocketAddr,
    pub config: Arc<HomeConfig>,

    // Counters
    pub page_views: AtomicU64,
    pub server_start_time: Instant,
}

impl ServerState {
    pub fn new(bind_address: SocketAddr, config: Arc<HomeConfig>) -> Self {
        Self {
            bind_address,
            config,
            page_views: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    /// Count one homepage render, returning the new total
    pub fn record_page_view(&self) -> u64 {
        self.page_views.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn page_views(&self) -> u64 {
        self.page_views.load(Ordering::Relaxed)
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
