//! # Folio Server Logic
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Axum implementation of `folio srv`:
//! - `/api/ask` and `/api/contact` JSON routes
//! - static files from the served directory for every other path
//! - permissive CORS (unless disabled) and request tracing
//! - automatic port fallback and graceful shutdown
//!
//! The handlers are stateless: the assistant and the validator only read
//! `'static` tables.
//!
use super::config::ServerConfig;
use super::utils;
use crate::assistant::{Resolver, Topic};
use crate::content::ContactForm;
use crate::core::error::{FolioError, Result};
use anyhow::Context;
use axum::{http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

/// `topic` is `null` when the fallback answer was used.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub topic: Option<Topic>,
    pub answer: &'static str,
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;

    utils::inspect_site_directory(&config.directory);
    let app = create_app(&config);

    println!(
        "\n================================================================="
    );
    println!("📂 Serving site from:  {}", config.directory.display());
    println!("🌐 Local URL:          http://localhost:{}", addr.port());
    if let Some(ip) = utils::local_network_ip() {
        println!("🔗 Network URL:        http://{}:{}", ip, addr.port());
    }
    println!("⚙️  Binding to address: {}", addr);
    println!("💬 Assistant endpoint: POST /api/ask");
    println!("🔒 CORS enabled:       {}", config.enable_cors);
    println!(
        "=================================================================\n"
    );

    info!(
        "Starting server on {} for directory {}",
        addr,
        config.directory.display()
    );
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Tries `start_port` and the ports after it, returning the first one that binds.
async fn find_available_port(
    req_host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                match current_port.checked_add(1) {
                    Some(next) => current_port = next,
                    None => break,
                }
            }
        }
    }

    Err(FolioError::Server(format!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host, start_port, max_attempts
    ))
    .into())
}

/// Builds the router: API routes first, static files as the fallback.
pub fn create_app(config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/ask", post(ask))
        .route("/api/contact", post(contact))
        .fallback_service(ServeDir::new(&config.directory))
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}

async fn ask(Json(request): Json<AskRequest>) -> Json<AskResponse> {
    let resolver = Resolver::default();
    let topic = resolver.classify(&request.question);
    match topic {
        Some(topic) => debug!(
            "Question {:?} matched topic '{}'",
            request.question, topic
        ),
        None => debug!(
            "Question {:?} matched no topic, using fallback",
            request.question
        ),
    }
    Json(AskResponse {
        topic,
        answer: resolver.resolve(&request.question),
    })
}

async fn contact(Json(form): Json<ContactForm>) -> (StatusCode, Json<serde_json::Value>) {
    match form.validate() {
        Ok(()) => {
            info!(
                "Contact message received from {} <{}> ({} chars)",
                form.name.trim(),
                form.email.trim(),
                form.message.chars().count()
            );
            (StatusCode::OK, Json(json!({ "ok": true })))
        }
        Err(errors) => {
            debug!("Rejected contact form: {}", errors);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "ok": false, "errors": errors })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::FALLBACK_ANSWER;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use std::net::Ipv4Addr;
    use tempfile::TempDir;
    use tokio::fs;
    use tower::ServiceExt;

    async fn test_app() -> (TempDir, Router) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("index.html"), "<html>Portfolio</html>")
            .await
            .unwrap();
        let config = ServerConfig {
            port: 0,
            host: Ipv4Addr::LOCALHOST.into(),
            directory: temp_dir.path().to_path_buf(),
            enable_cors: true,
        };
        let app = create_app(&config);
        (temp_dir, app)
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_find_available_port_start_is_free() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = 50000;
        let addr = find_available_port(host, start_port, 5).await?;
        assert_eq!(addr.port(), start_port);
        assert_eq!(addr.ip(), host);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_available_port_start_occupied() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = 51000;
        let _listener = TcpListener::bind(SocketAddr::new(host, start_port)).await?;

        let addr = find_available_port(host, start_port, 5).await?;
        assert!(addr.port() > start_port);
        assert!(addr.port() < start_port + 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_available_port_gives_up() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = 52000;
        let _listener = TcpListener::bind(SocketAddr::new(host, start_port)).await?;

        let err = find_available_port(host, start_port, 1).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FolioError>(),
            Some(FolioError::Server(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_ask_known_topic() {
        let (_dir, app) = test_app().await;
        let (status, json) = post_json(app, "/api/ask", r#"{"question":"Who are you?"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["topic"], "identity");
        assert_eq!(json["answer"], Topic::Identity.answer());
    }

    #[tokio::test]
    async fn test_ask_fallback_has_null_topic() {
        let (_dir, app) = test_app().await;
        let (status, json) = post_json(app, "/api/ask", r#"{"question":"hello there"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["topic"].is_null());
        assert_eq!(json["answer"], FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn test_ask_contact_beats_project() {
        let (_dir, app) = test_app().await;
        let body = r#"{"question":"tell me about your project contact info"}"#;
        let (_, json) = post_json(app, "/api/ask", body).await;
        assert_eq!(json["topic"], "contact");
    }

    #[tokio::test]
    async fn test_contact_accepts_valid_form() {
        let (_dir, app) = test_app().await;
        let body = r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#;
        let (status, json) = post_json(app, "/api/contact", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_contact_reports_field_errors() {
        let (_dir, app) = test_app().await;
        let body = r#"{"name":"","email":"not-an-email"}"#;
        let (status, json) = post_json(app, "/api/contact", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["ok"], false);
        assert_eq!(json["errors"]["name"], "Name is required");
        assert_eq!(
            json["errors"]["email"],
            "Please enter a valid email address"
        );
        assert_eq!(json["errors"]["message"], "Message is required");
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let (_dir, app) = test_app().await;
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<html>Portfolio</html>");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let (_dir, app) = test_app().await;
        let request = Request::builder()
            .uri("/nope.css")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
