//! Main homepage server implementation
//!
//! The `HomepageServer` owns the home grid and the static file service and
//! exposes them through an axum router. Every request to `/` is a fresh page
//! initialization: manifests are re-fetched, the current window's selection is
//! taken and the themed document is rendered.

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
};
use serde_json::json;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use shared::{HomeConfig, ProcessId, process_info};

use crate::core::{HomeGrid, HomePage, PageSurface, Theme};
use crate::error::{HomepageError, HomepageResult};
use crate::state::ServerState;
use crate::traits::{ManifestSource, StaticFileServer};

/// Homepage server with dependency injection
pub struct HomepageServer<S, F> {
    state: Arc<ServerState>,
    grid: Arc<HomeGrid<S>>,
    static_server: Arc<F>,
}

impl<S, F> Clone for HomepageServer<S, F> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            grid: self.grid.clone(),
            static_server: self.static_server.clone(),
        }
    }
}

impl<S, F> HomepageServer<S, F>
where
    S: ManifestSource + 'static,
    F: StaticFileServer + 'static,
{
    /// Create a new server with injected manifest source and static file service
    pub fn new(bind_address: SocketAddr, config: HomeConfig, manifest_source: S, static_server: F) -> Self {
        let grid = HomeGrid::new(manifest_source, &config);
        let state = Arc::new(ServerState::new(bind_address, Arc::new(config)));

        Self {
            state,
            grid: Arc::new(grid),
            static_server: Arc::new(static_server),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(serve_index::<S, F>))
            .route("/static/*path", get(serve_static::<S, F>))
            .route("/api/selection", get(selection_handler::<S, F>))
            .route("/health", get(health_check::<S, F>))
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()).into_inner())
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<G>(&self, shutdown: G) -> HomepageResult<()>
    where
        G: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| HomepageError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        process_info!(ProcessId::current(), "🌐 Homepage listening on http://{}", bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| HomepageError::ServerStartup(e.to_string()))
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }

    /// Render the full homepage document for the current window and hour
    pub async fn render_page(&self) -> String {
        let config = &self.state.config;
        let mut surface = PageSurface::for_config(config);
        self.grid.initialize(&mut surface).await;

        HomePage::new(config, Theme::current(config)).to_html(&surface)
    }
}

// HTTP Handlers

/// Serve the homepage
async fn serve_index<S, F>(State(server): State<HomepageServer<S, F>>) -> Response
where
    S: ManifestSource + 'static,
    F: StaticFileServer + 'static,
{
    server.state.record_page_view();
    let html = server.render_page().await;

    ([(header::CACHE_CONTROL, "no-cache")], Html(html)).into_response()
}

/// Serve static files
async fn serve_static<S, F>(Path(path): Path<String>, State(server): State<HomepageServer<S, F>>) -> Response
where
    S: ManifestSource + 'static,
    F: StaticFileServer + 'static,
{
    match server.static_server.serve_file(&path).await {
        Ok(file_response) => {
            let mut response = Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, file_response.content_type);

            if let Some(cache_control) = file_response.cache_control {
                response = response.header(header::CACHE_CONTROL, cache_control);
            }

            response
                .body(file_response.content.into())
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Current selection as JSON
async fn selection_handler<S, F>(State(server): State<HomepageServer<S, F>>) -> impl IntoResponse
where
    S: ManifestSource + 'static,
    F: StaticFileServer + 'static,
{
    Json(server.grid.selection().await)
}

/// Health check endpoint
async fn health_check<S, F>(State(server): State<HomepageServer<S, F>>) -> impl IntoResponse
where
    S: ManifestSource + 'static,
    F: StaticFileServer + 'static,
{
    Json(json!({
        "status": "ok",
        "uptime_seconds": server.state.get_uptime_seconds(),
        "page_views": server.state.page_views(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
