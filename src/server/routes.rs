// HTTP routes configuration

use super::handlers::translate_handler;
use super::middleware::{origin_filter, request_id_layers};
use crate::access::AllowedOrigins;
use crate::translation::DirectionRegistry;
use axum::{middleware, routing::post, Router};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<DirectionRegistry>,
}

/// Build the application router.
///
/// When `origins` is set, every inbound request passes the origin filter first.
pub fn create_router(registry: DirectionRegistry, origins: Option<AllowedOrigins>) -> Router {
    let state = AppState {
        registry: Arc::new(registry),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut app = Router::new().route("/translate/", post(translate_handler));

    if let Some(origins) = origins {
        app = app.layer(middleware::from_fn_with_state(
            Arc::new(origins),
            origin_filter,
        ));
    }

    app.layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
