//! # cadenza-server
//!
//! A small axum service that answers every request with a cadenza envelope.
//!
//! ## Endpoints
//!
//! - `GET /health`: `{"code":200,"data":{"status":"ok"}}`
//! - `GET /codes`: the full status registry
//! - `GET /status/{code}`: envelope carrying the reason phrase for `code`
//! - `POST /echo/{code}`: the JSON body echoed back as `data`
//! - `GET /teapot`: 418
//!
//! Anything else gets a 404 envelope.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/codes", get(routes::codes))
        .route("/status/{code}", get(routes::status))
        .route("/echo/{code}", post(routes::echo))
        .route("/teapot", get(routes::brew))
        .fallback(routes::fallback)
        .layer(TraceLayer::new_for_http())
}
