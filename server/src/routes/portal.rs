use axum::{extract::State, Json};
use intake_domain::PortalConfig;
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Store identity and embedded form URL for the browser
pub async fn portal_config(State(state): State<AppState>) -> Json<PortalConfig> {
    Json(state.config.portal.clone())
}
