//! HTTP endpoints.

pub mod todo;

use axum::{
    Router,
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
};

use crate::state::SharedState;

/// Creates the router with all endpoints.
///
/// Only the exact root renders the page; every other unknown path is a 404.
/// Form endpoints answer non-POST methods with a redirect to the page.
pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(todo::index))
        .route("/add", post(todo::add_item).fallback(redirect_home))
        .route("/delete", post(todo::delete_item).fallback(redirect_home))
        .route("/health", get(health_check))
        .fallback(not_found)
}

/// Redirects to the page with 303 See Other.
async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
