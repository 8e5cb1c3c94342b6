mod config;
mod docs;
mod error;
mod llm;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ptl_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::load()?;
    info!(
        "Loaded configuration: model={}, region={}",
        config.model_id,
        config.aws_region.as_deref().unwrap_or("<default>")
    );

    if !config.openapi_path.is_empty() {
        match docs::write_openapi(&config.openapi_path) {
            Ok(()) => info!("Wrote OpenAPI document to {}", config.openapi_path),
            Err(e) => warn!("Failed to write OpenAPI document to {}: {}", config.openapi_path, e),
        }
    }

    // Initialize app state
    let app_state = AppState::new(&config).await?;
    info!(
        "Translation backend: {}",
        app_state.translation_service.provider_name()
    );

    // Build application
    let mut app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    if let Some(cors) = cors_layer(&config) {
        app = app.layer(cors);
    }

    // Start server
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Cross-origin access for the configured origins only
fn cors_layer(config: &Config) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    info!("CORS enabled for {:?}", origins);
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
