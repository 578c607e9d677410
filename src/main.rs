// Main entry point - Page registration and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{Router, routing::get};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::application::monitoring::MonitoringView;
use crate::application::page_registry::PageRegistry;
use crate::infrastructure::config::load_server_config;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, render_page};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;

    // Register pages (the explicit counterpart of route annotations)
    let mut registry = PageRegistry::new();
    registry.register(Arc::new(MonitoringView::new()))?;

    for (name, version) in registry.npm_dependencies() {
        tracing::info!("pinned npm dependency: {} {}", name, version);
    }

    // Build router: one GET route per registered page, plus health and the
    // static stylesheet directory
    let mut router = Router::new().route("/healthz", get(health_check));
    for page in registry.pages() {
        let path = page.view.descriptor().path();
        tracing::info!("registering page '{}' at {}", page.route, path);
        router = router.route(&path, get(render_page));
    }

    let styles_dir = Path::new(&server_config.server.asset_root).join("styles");
    let state = Arc::new(AppState { registry });
    let router = router
        .nest_service("/styles", ServeDir::new(styles_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr =
        format!("{}:{}", server_config.server.host, server_config.server.port).parse()?;
    println!("Starting monitoring-console service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
