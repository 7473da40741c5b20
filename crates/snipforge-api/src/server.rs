use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{
    generate_routes, health_routes, prompt_routes, render_routes, rubric_routes,
    similarity_routes, snippet_routes,
};
use crate::state::AppState;
use crate::{ApiError, Result};

/// Uploaded rubrics and large templates fit comfortably in 10 MB
const MAX_BODY_SIZE_10MB: usize = 10 * 1024 * 1024;

/// Bind address configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Assemble the full application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(snippet_routes())
        .merge(prompt_routes())
        .merge(render_routes())
        .merge(similarity_routes())
        .merge(generate_routes())
        .merge(rubric_routes())
        .with_state(state)
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_10MB))
        .layer(cors)
}

/// Start the HTTP server and serve until the process exits
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ApiError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Starting web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
