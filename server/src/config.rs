//! Server Configuration
//!
//! Read once at startup from the process environment (and `.env` via
//! dotenvy). Missing webhook URLs are not fatal: the matching endpoint answers
//! 500 until the URL is configured.

use std::net::SocketAddr;
use std::path::PathBuf;

use intake_domain::{
    DesignRequest, LsmRequest, PortalConfig, PriceChange, RequestKind, StoreHoursChange,
};

use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookUrls {
    pub design_request: Option<String>,
    pub lsm_request: Option<String>,
    pub price_change: Option<String>,
    pub store_hours: Option<String>,
}

/// Request kinds the server knows how to forward
pub trait WebhookTarget: RequestKind + Send + Sync {
    /// Environment variable holding this kind's webhook URL
    const ENV_VAR: &'static str;

    fn webhook_url(urls: &WebhookUrls) -> Option<&str>;
}

impl WebhookTarget for DesignRequest {
    const ENV_VAR: &'static str = "DESIGN_REQUEST_WEBHOOK_URL";

    fn webhook_url(urls: &WebhookUrls) -> Option<&str> {
        urls.design_request.as_deref()
    }
}

impl WebhookTarget for LsmRequest {
    const ENV_VAR: &'static str = "LSM_REQUEST_WEBHOOK_URL";

    fn webhook_url(urls: &WebhookUrls) -> Option<&str> {
        urls.lsm_request.as_deref()
    }
}

impl WebhookTarget for PriceChange {
    const ENV_VAR: &'static str = "PRICE_CHANGE_WEBHOOK_URL";

    fn webhook_url(urls: &WebhookUrls) -> Option<&str> {
        urls.price_change.as_deref()
    }
}

impl WebhookTarget for StoreHoursChange {
    const ENV_VAR: &'static str = "STORE_HOURS_WEBHOOK_URL";

    fn webhook_url(urls: &WebhookUrls) -> Option<&str> {
        urls.store_hours.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Built frontend to serve for non-API paths
    pub static_dir: Option<PathBuf>,
    pub webhooks: WebhookUrls,
    pub portal: PortalConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_value = get("BIND_ADDR")
            .or_else(|| get("PORT").map(|port| format!("0.0.0.0:{}", port)))
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let webhooks = WebhookUrls {
            design_request: get(DesignRequest::ENV_VAR),
            lsm_request: get(LsmRequest::ENV_VAR),
            price_change: get(PriceChange::ENV_VAR),
            store_hours: get(StoreHoursChange::ENV_VAR),
        };

        let defaults = PortalConfig::default();
        let portal = PortalConfig {
            store_number: get("PORTAL_STORE_NUMBER").unwrap_or(defaults.store_number),
            store_name: get("PORTAL_STORE_NAME").unwrap_or(defaults.store_name),
            marketing_assets_form_url: get("MARKETING_ASSETS_FORM_URL"),
        };

        Ok(Self {
            bind_addr,
            static_dir: Some(PathBuf::from(
                get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            )),
            webhooks,
            portal,
        })
    }

    /// Names of webhook variables that are not set
    pub fn missing_webhooks(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if DesignRequest::webhook_url(&self.webhooks).is_none() {
            missing.push(DesignRequest::ENV_VAR);
        }
        if LsmRequest::webhook_url(&self.webhooks).is_none() {
            missing.push(LsmRequest::ENV_VAR);
        }
        if PriceChange::webhook_url(&self.webhooks).is_none() {
            missing.push(PriceChange::ENV_VAR);
        }
        if StoreHoursChange::webhook_url(&self.webhooks).is_none() {
            missing.push(StoreHoursChange::ENV_VAR);
        }
        missing
    }
}
