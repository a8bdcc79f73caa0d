//! Todo List Server
//!
//! Serves a single HTML page listing todo items, with form endpoints to add
//! and delete them. Items live in whichever store was selected at startup.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod template;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

/// Creates the application router with all routes configured.
pub fn create_app(state: SharedState) -> Router {
    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
