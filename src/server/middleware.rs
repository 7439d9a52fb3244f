// HTTP middleware

use crate::access::AllowedOrigins;
use crate::error::BridgeError;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::warn;

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Reject requests whose client address is not an allowed origin.
///
/// Requests without connection info are rejected as well.
pub async fn origin_filter(
    State(origins): State<Arc<AllowedOrigins>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Result<Response, BridgeError> {
    let client = connect_info.map(|ConnectInfo(addr)| addr.ip());

    match client {
        Some(ip) if origins.contains(ip) => Ok(next.run(request).await),
        _ => {
            warn!("Rejected request from {:?}", client);
            Err(BridgeError::Forbidden(client))
        }
    }
}
