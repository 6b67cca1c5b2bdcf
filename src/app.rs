use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::handlers::notes;
use crate::middleware::preflight_middleware;
use crate::services::NotesService;

/// Shared per-process state. The store handle lives inside the service and
/// is constructed once at startup, then injected here rather than referenced
/// as ambient module state.
#[derive(Clone)]
pub struct AppState {
    pub notes: NotesService,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Notes CRUD (authenticated subject required)
        .route(
            "/notes",
            get(notes::note_list)
                .post(notes::note_create)
                .fallback(unroutable),
        )
        .route(
            "/notes/:id",
            get(notes::note_get)
                .put(notes::note_update)
                .delete(notes::note_delete)
                .fallback(unroutable),
        )
        .fallback(unroutable)
        .with_state(state)
        // Global middleware
        .layer(axum::middleware::from_fn(preflight_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Any (method, path) pair outside the route table gets a generic 404.
async fn unroutable() -> ApiError {
    ApiError::not_found("Not Found")
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Notes API",
        "version": version,
        "endpoints": {
            "notes": "/notes (GET, POST), /notes/:id (GET, PUT, DELETE)",
            "health": "/health (public)",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
