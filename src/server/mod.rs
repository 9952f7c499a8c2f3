//! HTTP API server
//!
//! Thin transport layer over the scan engine: typed JSON requests in,
//! Verdict JSON out. Request validation and CORS live here; the engine
//! itself never sees the wire.

mod handlers;
mod requests;

use crate::config::UserConfig;
use crate::engine::ScanEngine;
use crate::intel::ThreatIntel;
use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScanEngine>,
    pub intel: Arc<ThreatIntel>,
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "scamscan API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "endpoints": {
            "sms": "/scan/sms",
            "call": "/scan/call",
            "email": "/scan/email",
            "url": "/scan/url"
        }
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy", "model_loaded": true }))
}

pub fn build_router(state: AppState) -> Router {
    // Scan requests come from mobile apps and browser extensions on
    // unknown origins, so CORS stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/scan/sms", post(handlers::scan_sms))
        .route("/scan/call", post(handlers::scan_call))
        .route("/scan/email", post(handlers::scan_email))
        .route("/scan/url", post(handlers::scan_url))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP API server until shutdown.
pub async fn run(config: &UserConfig, bind: Option<&str>) -> Result<()> {
    let state = AppState {
        engine: Arc::new(ScanEngine::new()),
        intel: Arc::new(ThreatIntel::from_config(&config.intel)),
    };

    if state.intel.enabled() {
        tracing::info!("threat-intel enrichment enabled for URL scans");
    }

    let app = build_router(state);
    let addr: SocketAddr = bind
        .unwrap_or(&config.server.bind)
        .parse()
        .context("invalid bind address")?;

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind")?;
    axum::serve(listener, app).await.context("server error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            engine: Arc::new(ScanEngine::new()),
            intel: Arc::new(ThreatIntel::from_config(&Default::default())),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("parse body")
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["endpoints"]["sms"], "/scan/sms");
    }

    #[tokio::test]
    async fn test_scan_sms_endpoint() {
        let app = build_router(test_state());
        let request = Request::post("/scan/sms")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"text": "URGENT: account suspended. Click to verify your identity!"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["is_fraud"], true);
        assert_eq!(json["risk_level"], "HIGH");
        assert_eq!(json["details"]["type"], "SMS");
    }

    #[tokio::test]
    async fn test_scan_call_endpoint() {
        let app = build_router(test_state());
        let request = Request::post("/scan/call")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"phone_number": "123"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["is_fraud"], true);
        assert_eq!(json["confidence"], 0.8);
    }

    #[tokio::test]
    async fn test_scan_url_endpoint_without_intel() {
        let app = build_router(test_state());
        let request = Request::post("/scan/url")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"url": "https://amazon.com"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["is_fraud"], false);
        assert_eq!(json["confidence"], 0.0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_client_error() {
        let app = build_router(test_state());
        let request = Request::post("/scan/sms")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_empty_text_is_accepted() {
        let app = build_router(test_state());
        let request = Request::post("/scan/sms")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text": ""}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["is_fraud"], false);
        assert_eq!(json["confidence"], 0.0);
    }
}
