//! Webhook Forwarder
//!
//! One POST per submission. No retry and no timeout beyond the HTTP client's
//! defaults; a failure goes straight back to the browser.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ForwardError, ForwardResult};

/// Delivers a shaped payload to a webhook URL
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, url: &str, payload: &Value) -> ForwardResult<()>;
}

/// Forwarder backed by a shared reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpForwarder {
    client: reqwest::Client,
}

impl HttpForwarder {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, url: &str, payload: &Value) -> ForwardResult<()> {
        let response = self.client.post(url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
