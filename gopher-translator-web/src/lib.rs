//! HTTP service for the Gopher-speak translator
//!
//! | Method | Path         | Body                          |
//! |--------|--------------|-------------------------------|
//! | POST   | `/word/`     | `{"english-word": "apple"}`   |
//! | POST   | `/sentence/` | `{"english-sentence": "..."}` |
//! | GET    | `/history`   |                               |

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use gopher_translator::HistoryStore;

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;


pub use config::ServerConfig;
pub use error::ApiError;

#[derive(Clone, Default)]
pub struct AppState {
    pub history: Arc<HistoryStore>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            history: Arc::new(HistoryStore::new()),
        }
    }
}

/// Build the router with all routes attached to `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/word/", post(handlers::word_handler))
        .route("/sentence/", post(handlers::sentence_handler))
        .route("/history", get(handlers::history_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
