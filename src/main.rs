use std::sync::Arc;

use notes_api::app::{app, AppState};
use notes_api::config;
use notes_api::services::NotesService;
use notes_api::store::MemoryStore;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up PORT, AUTH_SUBJECT_HEADER, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Notes API in {:?} mode", config.environment);

    // Store handle is built once per process and injected into the engine.
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        notes: NotesService::new(store),
    };
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Notes API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
