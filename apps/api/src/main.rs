mod config;
mod errors;
mod pdf;
mod render;
mod routes;
mod schema;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pdf::HttpPdfExporter;
use crate::render::{MarkupRenderer, TemplateRegistry};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Render API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the rendering pipeline: built-in template registry plus the
    // configured asset directory.
    let renderer = Arc::new(MarkupRenderer::new(
        TemplateRegistry::default(),
        config.templates_dir.clone(),
    ));
    info!("Markup renderer initialized (assets: {})", config.templates_dir);

    // Initialize the PDF exporter collaborator
    let pdf = Arc::new(HttpPdfExporter::new(config.pdf_service_url.clone()));
    info!("PDF exporter initialized ({})", config.pdf_service_url);

    // Build app state
    let state = AppState {
        config: config.clone(),
        renderer,
        pdf,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
