//! HTTP surface: language-prefixed pages plus health and metrics.

use crate::config::Config;
use crate::i18n::{
    home_path, resolve_path, split_route, Language, LanguageMetrics, LanguageRegistry,
};
use crate::pages::Page;
use crate::render::{render_not_found, render_page, RenderContext};
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::Datelike;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared state for all handlers.
pub struct AppState {
    pub config: Config,
    pub metrics: LanguageMetrics,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            metrics: LanguageMetrics::new(),
        }
    }
}

/// Build the router with tracing attached.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/:lang", get(language_page))
        .route("/:lang/*rest", get(language_page))
        .fallback(language_page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.socket_addr();
    let app = create_router(Arc::new(AppState::new(config)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received shutdown signal");
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(&home_path(Language::default_language()))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.metrics.report())
}

/// Every language-prefixed request, including paths the router does not
/// match such as `/en/`.
async fn language_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    render_route(&state, &uri)
}

fn render_route(state: &AppState, uri: &Uri) -> Response {
    let (segment, route) = split_route(uri.path());
    let language_state = resolve_path(uri.path());
    if !LanguageRegistry::get().is_enabled(segment) {
        debug!(
            segment,
            language = %language_state.language,
            "Unsupported language segment, using default"
        );
        state.metrics.record_fallback();
    }

    let current_path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let ctx = RenderContext {
        state: language_state,
        current_path,
        year: chrono::Utc::now().year(),
    };

    let (status, body) = match Page::from_route(route) {
        Some(page) => {
            state.metrics.record_page_view(language_state.language);
            (StatusCode::OK, render_page(&ctx, page))
        }
        None => {
            debug!(route, "No page for route");
            state.metrics.record_not_found();
            (StatusCode::NOT_FOUND, render_not_found(&ctx))
        }
    };

    (
        status,
        [(header::CONTENT_LANGUAGE, language_state.language.code())],
        Html(body),
    )
        .into_response()
}
