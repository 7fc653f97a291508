//! # Server Setup
//!
//! Tracing initialization, route registration and HTTP server startup.

// region: --- Imports
use axum::{middleware, routing::get, Router};
use shared::page::TECHNOLOGIES_PATH;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::handlers;
use crate::middleware::{log_requests, stamp_req, RequestStamp};
// endregion: --- Imports

// region: --- Server Setup
/// Install the global tracing subscriber.
///
/// Calling it again (tests, embedding) keeps the first subscriber.
pub fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .try_init();
}

/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration is invalid
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_level);

    info!(" FOODGRAM PAGE SERVER STARTING");
    info!(" Log level: {}", config.log_level);

    config.validate()?;

    if !config.dist_dir.join("index.html").exists() {
        tracing::warn!(
            dist_dir = %config.dist_dir.display(),
            "index.html not found, static routes will answer 404 until the web bundle is built"
        );
    }

    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info(&config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(" Server stopped");
    Ok(())
}

/// Create the application router with all routes
pub fn create_router(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_files = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    info!("[ROUTE SETUP] Registering HTTP routes...");
    Router::new()
        .route(TECHNOLOGIES_PATH, get(handlers::pages::technologies))
        .route("/health", get(handlers::health::health))
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(middleware::from_fn(log_requests))
        // Outermost, so the layers above see the stamp
        .layer(middleware::from_fn(stamp_req))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!(" Shutdown signal received");
}

/// Log server information
fn log_server_info(config: &ServerConfig) {
    info!(" PAGES:");
    info!("   • GET  {}", TECHNOLOGIES_PATH);
    info!(" STATIC:");
    info!("   • GET  /*  (from {})", config.dist_dir.display());
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        create_router(&ServerConfig {
            dist_dir: "does-not-exist".into(),
            ..Default::default()
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_technologies_page() {
        let (status, headers, body) = get(test_app(), "/technologies").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body.contains("<title>О проекте</title>"));
        assert!(body.contains("<meta property=\"og:title\" content=\"О проекте\">"));
        assert_eq!(body.matches("<li class=\"textItem\">").count(), 15);
    }

    #[tokio::test]
    async fn test_technologies_page_is_identical_across_requests() {
        let (_, _, first) = get(test_app(), "/technologies").await;
        let (_, _, second) = get(test_app(), "/technologies").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_request_id_header() {
        let (_, headers, _) = get(test_app(), "/health").await;
        assert!(headers.contains_key("x-request-id"));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "from-proxy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "from-proxy");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get(test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "foodgram-backend");
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_found() {
        let (status, _, _) = get(test_app(), "/recipes").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
