// HTTP request handlers

use super::routes::AppState;
use crate::error::{BridgeError, Result};
use crate::translation::Translation;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: Translation,
}

/// Handler for `POST /translate/`
pub async fn translate_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<TranslationResponse>> {
    let req: TranslationRequest = serde_json::from_str(&body).map_err(|e| {
        debug!("Rejected request body: {}", e);
        BridgeError::InvalidRequest(e.to_string())
    })?;

    let translator = state.registry.resolve(&req.direction).inspect_err(|_| {
        info!("Unknown translation direction: {:?}", req.direction);
    })?;
    debug!("Request direction: {} -> {}", req.direction, translator.model_id());

    let translated_text = translator.translate(&req.text).await?;
    info!(
        "Translated {} chars via {}",
        req.text.chars().count(),
        req.direction
    );

    Ok(Json(TranslationResponse { translated_text }))
}
