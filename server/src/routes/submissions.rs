//! Submission forwarding
//!
//! The browser posts the full record; the handler reshapes it into the kind's
//! flat payload and hands it to the forwarder. Nothing is stored here.

use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};

use crate::config::WebhookTarget;
use crate::error::{ForwardError, ForwardResult};
use crate::state::AppState;

pub async fn forward_submission<K: WebhookTarget>(
    State(state): State<AppState>,
    body: Bytes,
) -> ForwardResult<Json<Value>> {
    let url = K::webhook_url(&state.config.webhooks)
        .ok_or(ForwardError::NotConfigured(K::LABEL))?;

    let record: K = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::warn!(kind = K::LABEL, error = %e, "Submission not forwarded");
    })?;
    let id = record.id();
    let payload = serde_json::to_value(record.payload())?;

    if let Err(e) = state.forwarder.forward(url, &payload).await {
        tracing::warn!(kind = K::LABEL, id = %id, error = %e, "Submission not forwarded");
        return Err(e);
    }

    tracing::info!(kind = K::LABEL, id = %id, "Submission forwarded");
    Ok(Json(json!({ "status": "success" })))
}
