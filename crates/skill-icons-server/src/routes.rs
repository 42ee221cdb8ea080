//! HTTP routes.
//!
//! | Path         | Method  | Response                                  |
//! |--------------|---------|-------------------------------------------|
//! | `/`          | GET     | HTML landing page                         |
//! | `/icons`     | GET     | composed SVG, or 400 with a reason        |
//! | `/api/icons` | GET     | JSON array of canonical names             |
//! | `/api/svgs`  | GET     | JSON object of every key and its markup   |
//! | any of above | OPTIONS | 204 with CORS headers                     |
//!
//! Trailing slashes are accepted. Anything else is a plain-text 404.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use futures_util::FutureExt;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL, CONTENT_TYPE,
};
use http::{HeaderMap, HeaderValue, StatusCode};
use skill_icons_core::IconService;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::landing;
use crate::logging::targets;
use crate::query::IconQuery;

/// Content type of composed icons.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
/// Content type of the catalogue endpoints.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
/// Content type of the landing page.
pub const HTML_CONTENT_TYPE: &str = "text/html;charset=UTF-8";
/// Content type of error and 404 bodies.
pub const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";
/// Body of the 404 response.
pub const NOT_FOUND_BODY: &str = "Not Found. Available endpoints: /icons, /api/icons, /api/svgs";

/// Shared handler state.
///
/// The catalogue endpoints are pure functions of immutable data, so their
/// bodies are serialized once here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    service: Arc<IconService>,
    cache_control: HeaderValue,
    names_json: Bytes,
    svgs_json: Bytes,
    landing: Bytes,
}

impl AppState {
    /// Build handler state from a loaded service.
    pub fn new(service: Arc<IconService>, config: &ServerConfig) -> Result<Self> {
        let cache_control = HeaderValue::try_from(config.cache_control())?;
        let names_json = serde_json::to_vec(service.list_canonical_names())?;
        let svgs_json = serde_json::to_vec(service.list_all_entries())?;
        let landing = landing::render(service.list_canonical_names().len());
        Ok(Self {
            inner: Arc::new(StateInner {
                service,
                cache_control,
                names_json: Bytes::from(names_json),
                svgs_json: Bytes::from(svgs_json),
                landing: Bytes::from(landing),
            }),
        })
    }

    /// The icon service.
    pub fn service(&self) -> &Arc<IconService> {
        &self.inner.service
    }

    fn ok(&self, content_type: &'static str, body: impl Into<Body>) -> Response {
        let mut headers = cors_headers();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers.insert(CACHE_CONTROL, self.inner.cache_control.clone());
        (StatusCode::OK, headers, body.into()).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/icons", icon_routes())
        .route("/icons/", icon_routes())
        .route("/api/icons", names_routes())
        .route("/api/icons/", names_routes())
        .route("/api/svgs", svgs_routes())
        .route("/api/svgs/", svgs_routes())
        .fallback(not_found)
        .layer(middleware::from_fn(catch_panics))
        .layer(middleware::from_fn(trace_requests))
        .with_state(state)
}

fn icon_routes() -> MethodRouter<AppState> {
    get(icons).options(preflight)
}

fn names_routes() -> MethodRouter<AppState> {
    get(icon_names).options(preflight)
}

fn svgs_routes() -> MethodRouter<AppState> {
    get(icon_svgs).options(preflight)
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
    headers
}

async fn index(State(state): State<AppState>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    (StatusCode::OK, headers, state.inner.landing.clone()).into_response()
}

async fn icons(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let spec = IconQuery::new(pairs).to_spec()?;

    // Composition is CPU-bound.
    let service = Arc::clone(state.service());
    let svg = tokio::task::spawn_blocking(move || service.render(&spec))
        .await
        .map_err(|e| ServerError::Handler(e.to_string()))??;

    Ok(state.ok(SVG_CONTENT_TYPE, svg))
}

async fn icon_names(State(state): State<AppState>) -> Response {
    state.ok(JSON_CONTENT_TYPE, state.inner.names_json.clone())
}

async fn icon_svgs(State(state): State<AppState>) -> Response {
    state.ok(JSON_CONTENT_TYPE, state.inner.svgs_json.clone())
}

async fn preflight() -> Response {
    let mut headers = cors_headers();
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    (StatusCode::NO_CONTENT, headers).into_response()
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        NOT_FOUND_BODY,
    )
        .into_response()
}

/// Turn a panic anywhere below this layer into a 500.
pub async fn catch_panics(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic".to_string());
            ServerError::Handler(message).into_response()
        }
    }
}

async fn trace_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: targets::HTTP,
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Handled request"
    );
    response
}
