//! Portal Server API
//!
//! Browser `fetch` bindings to the forwarding server. Errors come back as the
//! message to show the user.

use intake_domain::{PortalConfig, RequestKind};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
const SUBMIT_FAILED: &str = "Failed to submit. Please try again.";

/// Error body returned by the forwarding endpoints
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

async fn fetch(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(request)).await?;
    response.dyn_into::<Response>()
}

async fn read_json(response: &Response) -> Result<JsValue, JsValue> {
    JsFuture::from(response.json()?).await
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// POST one record to its kind's endpoint
pub async fn submit<K: RequestKind>(record: &K) -> Result<(), String> {
    let body = serde_json::to_string(record).map_err(|e| e.to_string())?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(K::ENDPOINT, &init).map_err(js_message)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_message)?;

    let response = fetch(&request).await.map_err(|e| {
        web_sys::console::error_1(&format!("[API] {} failed: {}", K::ENDPOINT, js_message(e)).into());
        NETWORK_ERROR.to_string()
    })?;

    if response.ok() {
        return Ok(());
    }

    web_sys::console::warn_1(
        &format!("[API] {} answered {}", K::ENDPOINT, response.status()).into(),
    );
    let message = match read_json(&response).await {
        Ok(value) => serde_wasm_bindgen::from_value::<ErrorBody>(value)
            .ok()
            .and_then(|body| body.error),
        Err(_) => None,
    };
    Err(message.unwrap_or_else(|| SUBMIT_FAILED.to_string()))
}

pub async fn load_portal_config() -> Result<PortalConfig, String> {
    let request = Request::new_with_str("/api/portal-config").map_err(js_message)?;
    let response = fetch(&request).await.map_err(js_message)?;
    if !response.ok() {
        return Err(format!("portal config answered {}", response.status()));
    }
    let value = read_json(&response).await.map_err(js_message)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}
