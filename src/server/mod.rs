//! Axum-based HTTP server implementation for the langbridge gateway.
//!
//! # Components
//!
//! - `handlers`: The `POST /translate/` endpoint.
//! - `middleware`: Request ID tracking and the origin filter.
//! - `routes`: The router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use handlers::{TranslationRequest, TranslationResponse};
pub use routes::{create_router, AppState};
